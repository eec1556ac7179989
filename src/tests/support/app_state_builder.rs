use crate::modules::accessory::application::ports::incoming::use_cases::AccessoryUseCase;
use crate::modules::auth::application::ports::incoming::use_cases::AuthUseCase;
use crate::modules::classroom::application::ports::incoming::use_cases::ClassroomUseCase;
use crate::modules::corporate::application::ports::incoming::use_cases::CorporateUseCase;
use crate::modules::location::application::ports::incoming::use_cases::LocationUseCase;
use crate::modules::role::application::ports::incoming::use_cases::RoleUseCase;
use crate::modules::status::application::ports::incoming::use_cases::StatusUseCase;
use crate::modules::user::application::ports::incoming::use_cases::UserUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    status: Arc<dyn StatusUseCase + Send + Sync>,
    role: Arc<dyn RoleUseCase + Send + Sync>,
    location: Arc<dyn LocationUseCase + Send + Sync>,
    accessory: Arc<dyn AccessoryUseCase + Send + Sync>,
    classroom: Arc<dyn ClassroomUseCase + Send + Sync>,
    corporate: Arc<dyn CorporateUseCase + Send + Sync>,
    user: Arc<dyn UserUseCase + Send + Sync>,
    auth: Arc<dyn AuthUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            status: Arc::new(StubStatusUseCase),
            role: Arc::new(StubRoleUseCase),
            location: Arc::new(StubLocationUseCase),
            accessory: Arc::new(StubAccessoryUseCase),
            classroom: Arc::new(StubClassroomUseCase),
            corporate: Arc::new(StubCorporateUseCase),
            user: Arc::new(StubUserUseCase),
            auth: Arc::new(StubAuthUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_status_service(mut self, uc: impl StatusUseCase + Send + Sync + 'static) -> Self {
        self.status = Arc::new(uc);
        self
    }

    pub fn with_role_service(mut self, uc: impl RoleUseCase + Send + Sync + 'static) -> Self {
        self.role = Arc::new(uc);
        self
    }

    pub fn with_location_service(
        mut self,
        uc: impl LocationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.location = Arc::new(uc);
        self
    }

    pub fn with_accessory_service(
        mut self,
        uc: impl AccessoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.accessory = Arc::new(uc);
        self
    }

    pub fn with_classroom_service(
        mut self,
        uc: impl ClassroomUseCase + Send + Sync + 'static,
    ) -> Self {
        self.classroom = Arc::new(uc);
        self
    }

    pub fn with_corporate_service(
        mut self,
        uc: impl CorporateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.corporate = Arc::new(uc);
        self
    }

    pub fn with_user_service(mut self, uc: impl UserUseCase + Send + Sync + 'static) -> Self {
        self.user = Arc::new(uc);
        self
    }

    pub fn with_auth_service(mut self, uc: impl AuthUseCase + Send + Sync + 'static) -> Self {
        self.auth = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            status_service: self.status,
            role_service: self.role,
            location_service: self.location,
            accessory_service: self.accessory,
            classroom_service: self.classroom,
            corporate_service: self.corporate,
            user_service: self.user,
            auth_service: self.auth,
        })
    }
}
