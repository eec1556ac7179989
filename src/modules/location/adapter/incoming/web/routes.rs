use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, PageResponse, SuccessResponse};
use crate::modules::location::application::domain::entities::{
    CreateLocationCommand, LocationView, UpdateLocationCommand,
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
pub struct CreateLocationRequest {
    #[schema(example = "Bengaluru")]
    pub name: Option<String>,
    #[schema(example = "Karnataka")]
    pub state: Option<String>,
    /// Status uuid or internal key
    #[schema(value_type = Option<String>, example = "123e4567-e89b-12d3-a456-426614174000")]
    pub status_id: Option<RecordRef>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocationRequest {
    #[schema(example = "Bengaluru")]
    pub name: Option<String>,
    #[schema(example = "Karnataka")]
    pub state: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status_id: Option<RecordRef>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create a location
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    request_body = CreateLocationRequest,
    responses(
        (status = 200, description = "Location created", body = inline(SuccessResponse<LocationView>)),
        (status = 400, description = "Missing, invalid or duplicate name", body = ErrorResponse),
        (status = 404, description = "Unknown status", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/locations")]
pub async fn create_location_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateLocationRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateLocationCommand::new(dto.name, dto.state, dto.status_id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.location_service.create(command).await {
        Ok(location) => {
            info!(location_id = %location.id, "Location created");
            ApiResponse::success_with_message(location, messages::LOCATION_CREATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// List locations
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    params(ListQuery),
    responses(
        (status = 200, description = "All locations, or one page when paginate=true", body = inline(SuccessResponse<PageResponse<LocationView>>)),
        (status = 400, description = "Unknown sort field", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/locations")]
pub async fn get_locations_handler(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data
        .location_service
        .fetch_all(query.into_inner().into_request())
        .await
    {
        Ok(locations) => ApiResponse::success(locations),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Search locations by name
#[utoipa::path(
    get,
    path = "/locations/search",
    tag = "locations",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching locations", body = inline(SuccessResponse<Vec<LocationView>>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/locations/search")]
pub async fn search_locations_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match data.location_service.search(query.pattern()).await {
        Ok(locations) => ApiResponse::success(locations),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Get a location by uuid or internal key
#[utoipa::path(
    get,
    path = "/locations/{location_id}",
    tag = "locations",
    params(("location_id" = String, Path, description = "Location uuid or internal key")),
    responses(
        (status = 200, description = "Location found", body = inline(SuccessResponse<LocationView>)),
        (status = 404, description = "Location not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/locations/{location_id}")]
pub async fn get_location_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.location_service.find_by_id(&path.into_inner()).await {
        Ok(location) => ApiResponse::success(location),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Update a location
#[utoipa::path(
    put,
    path = "/locations/{location_id}",
    tag = "locations",
    params(("location_id" = String, Path, description = "Location uuid or internal key")),
    request_body = UpdateLocationRequest,
    responses(
        (status = 200, description = "Location updated", body = inline(SuccessResponse<LocationView>)),
        (status = 400, description = "Invalid or duplicate name", body = ErrorResponse),
        (status = 404, description = "Location or status not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/locations/{location_id}")]
pub async fn update_location_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateLocationRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match UpdateLocationCommand::new(dto.name, dto.state, dto.status_id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.location_service.update(&path.into_inner(), command).await {
        Ok(location) => {
            info!(location_id = %location.id, "Location updated");
            ApiResponse::success_with_message(location, messages::LOCATION_UPDATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Soft delete a location
#[utoipa::path(
    delete,
    path = "/locations/{location_id}",
    tag = "locations",
    params(("location_id" = String, Path, description = "Location uuid or internal key")),
    responses(
        (status = 200, description = "Location deleted", body = MessageResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/locations/{location_id}")]
pub async fn delete_location_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let location_id = path.into_inner();

    match data.location_service.delete(&location_id).await {
        Ok(()) => {
            info!(location_id = %location_id, "Location deleted");
            ApiResponse::message(messages::LOCATION_DELETED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
