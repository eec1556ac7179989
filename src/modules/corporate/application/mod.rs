pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing {
        pub mod corporate_repository;

        pub use corporate_repository::{CorporateChanges, CorporateRepository, NewCorporate};
    }
}
pub mod services {
    mod corporate_service;

    pub use corporate_service::CorporateService;
}
