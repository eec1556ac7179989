pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing {
        pub mod status_repository;

        pub use status_repository::{NewStatus, StatusRepository};
    }
}
pub mod services {
    mod status_service;

    pub use status_service::StatusService;
}
