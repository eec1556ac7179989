pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing {
        pub mod accessory_repository;

        pub use accessory_repository::{NewAccessory, AccessoryChanges, AccessoryRepository};
    }
}
pub mod services {
    mod accessory_service;

    pub use accessory_service::AccessoryService;
}
