use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, PageResponse, SuccessResponse};
use crate::modules::accessory::application::domain::entities::{
    CreateAccessoryCommand, AccessoryView, UpdateAccessoryCommand,
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
pub struct CreateAccessoryRequest {
    #[schema(example = "Projector")]
    pub name: Option<String>,
    /// Status uuid or internal key
    #[schema(value_type = Option<String>, example = "123e4567-e89b-12d3-a456-426614174000")]
    pub status_id: Option<RecordRef>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccessoryRequest {
    #[schema(example = "Projector")]
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status_id: Option<RecordRef>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create a accessory
#[utoipa::path(
    post,
    path = "/accessories",
    tag = "accessories",
    request_body = CreateAccessoryRequest,
    responses(
        (status = 200, description = "Accessory created", body = inline(SuccessResponse<AccessoryView>)),
        (status = 400, description = "Missing or invalid name", body = ErrorResponse),
        (status = 404, description = "Unknown status", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/accessories")]
pub async fn create_accessory_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateAccessoryRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateAccessoryCommand::new(dto.name, dto.status_id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.accessory_service.create(command).await {
        Ok(accessory) => {
            info!(accessory_id = %accessory.id, "Accessory created");
            ApiResponse::success_with_message(accessory, messages::ACCESSORY_CREATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// List accessories
#[utoipa::path(
    get,
    path = "/accessories",
    tag = "accessories",
    params(ListQuery),
    responses(
        (status = 200, description = "All accessories, or one page when paginate=true", body = inline(SuccessResponse<PageResponse<AccessoryView>>)),
        (status = 400, description = "Unknown sort field", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/accessories")]
pub async fn get_accessories_handler(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data
        .accessory_service
        .fetch_all(query.into_inner().into_request())
        .await
    {
        Ok(accessories) => ApiResponse::success(accessories),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Search accessories by name
#[utoipa::path(
    get,
    path = "/accessories/search",
    tag = "accessories",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching accessories", body = inline(SuccessResponse<Vec<AccessoryView>>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/accessories/search")]
pub async fn search_accessories_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match data.accessory_service.search(query.pattern()).await {
        Ok(accessories) => ApiResponse::success(accessories),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Get a accessory by uuid or internal key
#[utoipa::path(
    get,
    path = "/accessories/{accessory_id}",
    tag = "accessories",
    params(("accessory_id" = String, Path, description = "Accessory uuid or internal key")),
    responses(
        (status = 200, description = "Accessory found", body = inline(SuccessResponse<AccessoryView>)),
        (status = 404, description = "Accessories not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/accessories/{accessory_id}")]
pub async fn get_accessory_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.accessory_service.find_by_id(&path.into_inner()).await {
        Ok(accessory) => ApiResponse::success(accessory),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Update a accessory
#[utoipa::path(
    put,
    path = "/accessories/{accessory_id}",
    tag = "accessories",
    params(("accessory_id" = String, Path, description = "Accessory uuid or internal key")),
    request_body = UpdateAccessoryRequest,
    responses(
        (status = 200, description = "Accessory updated", body = inline(SuccessResponse<AccessoryView>)),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 404, description = "Accessory or status not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/accessories/{accessory_id}")]
pub async fn update_accessory_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateAccessoryRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match UpdateAccessoryCommand::new(dto.name, dto.status_id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.accessory_service.update(&path.into_inner(), command).await {
        Ok(accessory) => {
            info!(accessory_id = %accessory.id, "Accessory updated");
            ApiResponse::success_with_message(accessory, messages::ACCESSORY_UPDATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Soft delete a accessory
#[utoipa::path(
    delete,
    path = "/accessories/{accessory_id}",
    tag = "accessories",
    params(("accessory_id" = String, Path, description = "Accessory uuid or internal key")),
    responses(
        (status = 200, description = "Accessory deleted", body = MessageResponse),
        (status = 404, description = "Accessories not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/accessories/{accessory_id}")]
pub async fn delete_accessory_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let accessory_id = path.into_inner();

    match data.accessory_service.delete(&accessory_id).await {
        Ok(()) => {
            info!(accessory_id = %accessory_id, "Accessory deleted");
            ApiResponse::message(messages::ACCESSORY_DELETED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
