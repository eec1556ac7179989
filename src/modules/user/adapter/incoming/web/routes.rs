use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, PageResponse, SuccessResponse};
use crate::modules::user::application::domain::entities::{
    CreateUserCommand, UpdateUserCommand, UserDetails, UserLinks, UserView,
};
use crate::shared::api::ApiResponse;
use crate::shared::constants::messages;
use crate::shared::query::{ListQuery, SearchQuery};
use crate::shared::RecordRef;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    #[schema(example = "jane@everest.org")]
    pub email: Option<String>,
    #[schema(example = "9876543210")]
    pub phone_no: Option<String>,
    /// Optional initial password; the account still needs activation
    pub password: Option<String>,
    /// Role uuid or internal key
    #[schema(value_type = Option<String>)]
    pub role_id: Option<RecordRef>,
    /// Location uuid or internal key
    #[schema(value_type = Option<String>)]
    pub location_id: Option<RecordRef>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub password: Option<String>,
    #[schema(value_type = Option<String>)]
    pub role_id: Option<RecordRef>,
    #[schema(value_type = Option<String>)]
    pub location_id: Option<RecordRef>,
    #[schema(value_type = Option<String>)]
    pub status_id: Option<RecordRef>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create a user
///
/// The account starts out inactive and an activation link is mailed to it.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Missing, invalid or duplicate field", body = ErrorResponse),
        (status = 404, description = "Unknown role or location", body = ErrorResponse),
        (status = 500, description = "Activation mail could not be sent", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/users")]
pub async fn create_user_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateUserRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateUserCommand::new(
        dto.first_name,
        dto.email,
        UserDetails {
            last_name: dto.last_name,
            phone_no: dto.phone_no,
            password: dto.password,
        },
        UserLinks {
            role: dto.role_id,
            location: dto.location_id,
            status: None,
        },
    ) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.user_service.create(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User created");
            ApiResponse::success_with_message(user, messages::USER_CREATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// List users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListQuery),
    responses(
        (status = 200, description = "All users, or one page when paginate=true", body = inline(SuccessResponse<PageResponse<UserView>>)),
        (status = 400, description = "Unknown sort field", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/users")]
pub async fn get_users_handler(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data
        .user_service
        .fetch_all(query.into_inner().into_request())
        .await
    {
        Ok(users) => ApiResponse::success(users),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Search users by first name, last name or email
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = inline(SuccessResponse<Vec<UserView>>)),
        (status = 400, description = "Empty pattern", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/users/search")]
pub async fn search_users_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match data.user_service.search(query.pattern()).await {
        Ok(users) => ApiResponse::success(users),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Get a user by uuid or internal key
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User uuid or internal key")),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/users/{user_id}")]
pub async fn get_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.user_service.find_by_id(&path.into_inner()).await {
        Ok(user) => ApiResponse::success(user),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User uuid or internal key")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Invalid field or duplicate email", body = ErrorResponse),
        (status = 404, description = "User or reference not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/users/{user_id}")]
pub async fn update_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match UpdateUserCommand::new(
        dto.first_name,
        dto.email,
        UserDetails {
            last_name: dto.last_name,
            phone_no: dto.phone_no,
            password: dto.password,
        },
        UserLinks {
            role: dto.role_id,
            location: dto.location_id,
            status: dto.status_id,
        },
    ) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.user_service.update(&path.into_inner(), command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User updated");
            ApiResponse::success_with_message(user, messages::USER_UPDATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Soft delete a user
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = String, Path, description = "User uuid or internal key")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/users/{user_id}")]
pub async fn delete_user_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.user_service.delete(&user_id).await {
        Ok(()) => {
            info!(user_id = %user_id, "User deleted");
            ApiResponse::message(messages::USER_DELETED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
