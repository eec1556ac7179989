//! Use cases that satisfy `AppState` in handler tests which never call them.

use async_trait::async_trait;

use crate::modules::accessory::application::{
    domain::entities::{AccessoryView, CreateAccessoryCommand, UpdateAccessoryCommand},
    ports::incoming::use_cases::AccessoryUseCase,
};
use crate::modules::auth::application::{
    domain::entities::LoginOutcome, ports::incoming::use_cases::AuthUseCase,
};
use crate::modules::classroom::application::{
    domain::entities::{ClassroomView, CreateClassroomCommand, UpdateClassroomCommand},
    ports::incoming::use_cases::ClassroomUseCase,
};
use crate::modules::corporate::application::{
    domain::entities::{CorporateView, CreateCorporateCommand, UpdateCorporateCommand},
    ports::incoming::use_cases::CorporateUseCase,
};
use crate::modules::location::application::{
    domain::entities::{CreateLocationCommand, LocationView, UpdateLocationCommand},
    ports::incoming::use_cases::LocationUseCase,
};
use crate::modules::role::application::{
    domain::entities::{CreateRoleCommand, RoleView, UpdateRoleCommand},
    ports::incoming::use_cases::RoleUseCase,
};
use crate::modules::status::application::{
    domain::entities::{CreateStatusCommand, StatusView},
    ports::incoming::use_cases::StatusUseCase,
};
use crate::modules::user::application::{
    domain::entities::{CreateUserCommand, UpdateUserCommand, UserView},
    ports::incoming::use_cases::UserUseCase,
};
use crate::shared::query::{ListRequest, RecordList};
use crate::shared::ServiceError;

macro_rules! crud_stub {
    ($stub:ident, $trait:ident, $view:ty, $create:ty, $update:ty) => {
        #[derive(Default, Clone)]
        pub struct $stub;

        #[async_trait]
        impl $trait for $stub {
            async fn create(&self, _command: $create) -> Result<$view, ServiceError> {
                unimplemented!("Not used in this test")
            }

            async fn search(&self, _name: &str) -> Result<Vec<$view>, ServiceError> {
                unimplemented!("Not used in this test")
            }

            async fn find_by_id(&self, _id: &str) -> Result<$view, ServiceError> {
                unimplemented!("Not used in this test")
            }

            async fn fetch_all(
                &self,
                _request: ListRequest,
            ) -> Result<RecordList<$view>, ServiceError> {
                unimplemented!("Not used in this test")
            }

            async fn update(&self, _id: &str, _command: $update) -> Result<$view, ServiceError> {
                unimplemented!("Not used in this test")
            }

            async fn delete(&self, _id: &str) -> Result<(), ServiceError> {
                unimplemented!("Not used in this test")
            }
        }
    };
}

crud_stub!(
    StubRoleUseCase,
    RoleUseCase,
    RoleView,
    CreateRoleCommand,
    UpdateRoleCommand
);
crud_stub!(
    StubLocationUseCase,
    LocationUseCase,
    LocationView,
    CreateLocationCommand,
    UpdateLocationCommand
);
crud_stub!(
    StubAccessoryUseCase,
    AccessoryUseCase,
    AccessoryView,
    CreateAccessoryCommand,
    UpdateAccessoryCommand
);
crud_stub!(
    StubClassroomUseCase,
    ClassroomUseCase,
    ClassroomView,
    CreateClassroomCommand,
    UpdateClassroomCommand
);
crud_stub!(
    StubCorporateUseCase,
    CorporateUseCase,
    CorporateView,
    CreateCorporateCommand,
    UpdateCorporateCommand
);
crud_stub!(
    StubUserUseCase,
    UserUseCase,
    UserView,
    CreateUserCommand,
    UpdateUserCommand
);

#[derive(Default, Clone)]
pub struct StubStatusUseCase;

#[async_trait]
impl StatusUseCase for StubStatusUseCase {
    async fn create(&self, _command: CreateStatusCommand) -> Result<StatusView, ServiceError> {
        unimplemented!("Not used in this test")
    }

    async fn fetch_all(
        &self,
        _request: ListRequest,
    ) -> Result<RecordList<StatusView>, ServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAuthUseCase;

#[async_trait]
impl AuthUseCase for StubAuthUseCase {
    async fn authenticate(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<LoginOutcome, ServiceError> {
        unimplemented!("Not used in this test")
    }

    async fn setup_password(&self, _code: &str, _password: &str) -> Result<(), ServiceError> {
        unimplemented!("Not used in this test")
    }

    async fn send_password_reset_link(&self, _email: &str) -> Result<(), ServiceError> {
        unimplemented!("Not used in this test")
    }
}
