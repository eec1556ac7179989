pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing {
        pub mod role_repository;

        pub use role_repository::{NewRole, RoleChanges, RoleRepository};
    }
}
pub mod services {
    mod role_service;

    pub use role_service::RoleService;
}
