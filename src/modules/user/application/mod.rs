pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing {
        pub mod user_repository;

        pub use user_repository::{NewUser, UserChanges, UserRepository};
    }
}
pub mod services {
    mod user_service;

    pub use user_service::UserService;
}
