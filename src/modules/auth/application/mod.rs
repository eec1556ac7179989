pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing;
}
pub mod services {
    mod auth_service;

    pub use auth_service::AuthService;
}
