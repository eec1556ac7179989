pub mod domain {
    pub mod entities;
}
pub mod ports {
    pub mod incoming {
        pub mod use_cases;
    }
    pub mod outgoing {
        pub mod classroom_repository;

        pub use classroom_repository::{ClassroomChanges, ClassroomRepository, NewClassroom};
    }
}
pub mod services {
    mod classroom_service;

    pub use classroom_service::ClassroomService;
}
