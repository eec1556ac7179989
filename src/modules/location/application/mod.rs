pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing {
        pub mod location_repository;

        pub use location_repository::{NewLocation, LocationChanges, LocationRepository};
    }
}
pub mod services {
    mod location_service;

    pub use location_service::LocationService;
}
