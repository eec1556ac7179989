use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, PageResponse, SuccessResponse};
use crate::modules::classroom::application::domain::entities::{
    ClassroomLinks, ClassroomView, CreateClassroomCommand, UpdateClassroomCommand,
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
pub struct ClassroomRequest {
    #[schema(example = "Hall A")]
    pub name: Option<String>,
    #[schema(example = 40)]
    pub capacity: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub corporate_id: Option<RecordRef>,
    #[schema(value_type = Option<String>)]
    pub accessory_id: Option<RecordRef>,
    #[schema(value_type = Option<String>)]
    pub status_id: Option<RecordRef>,
}

impl ClassroomRequest {
    fn links(&self) -> ClassroomLinks {
        ClassroomLinks {
            corporate: self.corporate_id,
            accessory: self.accessory_id,
            status: self.status_id,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create a classroom
#[utoipa::path(
    post,
    path = "/classrooms",
    tag = "classrooms",
    request_body = ClassroomRequest,
    responses(
        (status = 200, description = "Classroom created", body = inline(SuccessResponse<ClassroomView>)),
        (status = 400, description = "Missing or invalid name", body = ErrorResponse),
        (status = 404, description = "Unknown corporate, accessory or status", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/classrooms")]
pub async fn create_classroom_handler(
    data: web::Data<AppState>,
    payload: web::Json<ClassroomRequest>,
) -> impl Responder {
    let dto = payload.into_inner();
    let links = dto.links();

    let command = match CreateClassroomCommand::new(dto.name, dto.capacity, links) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.classroom_service.create(command).await {
        Ok(classroom) => {
            info!(classroom_id = %classroom.id, "Classroom created");
            ApiResponse::success_with_message(classroom, messages::CLASSROOM_CREATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// List classrooms
#[utoipa::path(
    get,
    path = "/classrooms",
    tag = "classrooms",
    params(ListQuery),
    responses(
        (status = 200, description = "All classrooms, or one page when paginate=true", body = inline(SuccessResponse<PageResponse<ClassroomView>>)),
        (status = 400, description = "Unknown sort field", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/classrooms")]
pub async fn get_classrooms_handler(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data
        .classroom_service
        .fetch_all(query.into_inner().into_request())
        .await
    {
        Ok(classrooms) => ApiResponse::success(classrooms),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Search classrooms by name
#[utoipa::path(
    get,
    path = "/classrooms/search",
    tag = "classrooms",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching classrooms", body = inline(SuccessResponse<Vec<ClassroomView>>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/classrooms/search")]
pub async fn search_classrooms_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match data.classroom_service.search(query.pattern()).await {
        Ok(classrooms) => ApiResponse::success(classrooms),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Get a classroom by uuid or internal key
#[utoipa::path(
    get,
    path = "/classrooms/{classroom_id}",
    tag = "classrooms",
    params(("classroom_id" = String, Path, description = "Classroom uuid or internal key")),
    responses(
        (status = 200, description = "Classroom found", body = inline(SuccessResponse<ClassroomView>)),
        (status = 404, description = "Classroom not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/classrooms/{classroom_id}")]
pub async fn get_classroom_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.classroom_service.find_by_id(&path.into_inner()).await {
        Ok(classroom) => ApiResponse::success(classroom),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Update a classroom
#[utoipa::path(
    put,
    path = "/classrooms/{classroom_id}",
    tag = "classrooms",
    params(("classroom_id" = String, Path, description = "Classroom uuid or internal key")),
    request_body = ClassroomRequest,
    responses(
        (status = 200, description = "Classroom updated", body = inline(SuccessResponse<ClassroomView>)),
        (status = 400, description = "Invalid name", body = ErrorResponse),
        (status = 404, description = "Classroom or a referenced row not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/classrooms/{classroom_id}")]
pub async fn update_classroom_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ClassroomRequest>,
) -> impl Responder {
    let dto = payload.into_inner();
    let links = dto.links();

    let command = match UpdateClassroomCommand::new(dto.name, dto.capacity, links) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data
        .classroom_service
        .update(&path.into_inner(), command)
        .await
    {
        Ok(classroom) => {
            info!(classroom_id = %classroom.id, "Classroom updated");
            ApiResponse::success_with_message(classroom, messages::CLASSROOM_UPDATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Soft delete a classroom
#[utoipa::path(
    delete,
    path = "/classrooms/{classroom_id}",
    tag = "classrooms",
    params(("classroom_id" = String, Path, description = "Classroom uuid or internal key")),
    responses(
        (status = 200, description = "Classroom deleted", body = MessageResponse),
        (status = 404, description = "Classroom not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/classrooms/{classroom_id}")]
pub async fn delete_classroom_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let classroom_id = path.into_inner();

    match data.classroom_service.delete(&classroom_id).await {
        Ok(()) => {
            info!(classroom_id = %classroom_id, "Classroom deleted");
            ApiResponse::message(messages::CLASSROOM_DELETED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}
