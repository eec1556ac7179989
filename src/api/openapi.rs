use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::accessory::adapter::incoming::web::routes::{
    CreateAccessoryRequest, UpdateAccessoryRequest,
};
use crate::accessory::application::domain::entities::AccessoryView;
use crate::auth::adapter::incoming::web::routes::{
    ForgotPasswordRequest, LoginRequestDto, SetupPasswordRequest,
};
use crate::auth::application::domain::entities::{LoginOutcome, UserProfile};
use crate::classroom::adapter::incoming::web::routes::ClassroomRequest;
use crate::classroom::application::domain::entities::ClassroomView;
use crate::corporate::adapter::incoming::web::routes::{ClassroomEntryRequest, CorporateRequest};
use crate::corporate::application::domain::entities::{CorporateClassroom, CorporateView};
use crate::location::adapter::incoming::web::routes::{
    CreateLocationRequest, UpdateLocationRequest,
};
use crate::location::application::domain::entities::LocationView;
use crate::role::adapter::incoming::web::routes::{CreateRoleRequest, UpdateRoleRequest};
use crate::role::application::domain::entities::RoleView;
use crate::shared::Reference;
use crate::status::adapter::incoming::web::routes::CreateStatusRequest;
use crate::status::application::domain::entities::StatusView;
use crate::user::adapter::incoming::web::routes::{CreateUserRequest, UpdateUserRequest};
use crate::user::application::domain::entities::UserView;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Everest Admin API",
        version = "1.0.0",
        description = "Administration backend for users, roles, locations, corporates, classrooms and accessories",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::setup_password_handler,
        crate::auth::adapter::incoming::web::routes::forgot_password_handler,

        // Status endpoints
        crate::status::adapter::incoming::web::routes::create_status_handler,
        crate::status::adapter::incoming::web::routes::get_statuses_handler,

        // Role endpoints
        crate::role::adapter::incoming::web::routes::create_role_handler,
        crate::role::adapter::incoming::web::routes::get_roles_handler,
        crate::role::adapter::incoming::web::routes::search_roles_handler,
        crate::role::adapter::incoming::web::routes::get_role_handler,
        crate::role::adapter::incoming::web::routes::update_role_handler,
        crate::role::adapter::incoming::web::routes::delete_role_handler,

        // Location endpoints
        crate::location::adapter::incoming::web::routes::create_location_handler,
        crate::location::adapter::incoming::web::routes::get_locations_handler,
        crate::location::adapter::incoming::web::routes::search_locations_handler,
        crate::location::adapter::incoming::web::routes::get_location_handler,
        crate::location::adapter::incoming::web::routes::update_location_handler,
        crate::location::adapter::incoming::web::routes::delete_location_handler,

        // Accessory endpoints
        crate::accessory::adapter::incoming::web::routes::create_accessory_handler,
        crate::accessory::adapter::incoming::web::routes::get_accessories_handler,
        crate::accessory::adapter::incoming::web::routes::search_accessories_handler,
        crate::accessory::adapter::incoming::web::routes::get_accessory_handler,
        crate::accessory::adapter::incoming::web::routes::update_accessory_handler,
        crate::accessory::adapter::incoming::web::routes::delete_accessory_handler,

        // Classroom endpoints
        crate::classroom::adapter::incoming::web::routes::create_classroom_handler,
        crate::classroom::adapter::incoming::web::routes::get_classrooms_handler,
        crate::classroom::adapter::incoming::web::routes::search_classrooms_handler,
        crate::classroom::adapter::incoming::web::routes::get_classroom_handler,
        crate::classroom::adapter::incoming::web::routes::update_classroom_handler,
        crate::classroom::adapter::incoming::web::routes::delete_classroom_handler,

        // Corporate endpoints
        crate::corporate::adapter::incoming::web::routes::create_corporate_handler,
        crate::corporate::adapter::incoming::web::routes::get_corporates_handler,
        crate::corporate::adapter::incoming::web::routes::search_corporates_handler,
        crate::corporate::adapter::incoming::web::routes::get_corporate_handler,
        crate::corporate::adapter::incoming::web::routes::update_corporate_handler,
        crate::corporate::adapter::incoming::web::routes::delete_corporate_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::create_user_handler,
        crate::user::adapter::incoming::web::routes::get_users_handler,
        crate::user::adapter::incoming::web::routes::search_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::update_user_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,
    ),
    components(
        schemas(
            // Response wrappers
            MessageResponse,
            ErrorResponse,
            ErrorDetail,
            Reference,

            // Auth DTOs
            LoginRequestDto,
            SetupPasswordRequest,
            ForgotPasswordRequest,
            LoginOutcome,
            UserProfile,

            // Entity DTOs
            CreateStatusRequest,
            StatusView,
            CreateRoleRequest,
            UpdateRoleRequest,
            RoleView,
            CreateLocationRequest,
            UpdateLocationRequest,
            LocationView,
            CreateAccessoryRequest,
            UpdateAccessoryRequest,
            AccessoryView,
            ClassroomRequest,
            ClassroomView,
            CorporateRequest,
            ClassroomEntryRequest,
            CorporateView,
            CorporateClassroom,
            CreateUserRequest,
            UpdateUserRequest,
            UserView
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and password setup"),
        (name = "status", description = "Record statuses"),
        (name = "roles", description = "Role management"),
        (name = "locations", description = "Location management"),
        (name = "accessories", description = "Accessory management"),
        (name = "classrooms", description = "Classroom management"),
        (name = "corporate", description = "Corporate management"),
        (name = "users", description = "User management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token returned by /login"))
                        .build(),
                ),
            )
        }
    }
}
