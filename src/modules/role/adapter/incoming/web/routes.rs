use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, PageResponse, SuccessResponse};
use crate::modules::role::application::domain::entities::{
    CreateRoleCommand, RoleView, UpdateRoleCommand,
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
pub struct CreateRoleRequest {
    #[schema(example = "Volunteer")]
    pub name: Option<String>,
    /// Status uuid or internal key
    #[schema(value_type = Option<String>, example = "123e4567-e89b-12d3-a456-426614174000")]
    pub status_id: Option<RecordRef>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    #[schema(example = "Volunteer")]
    pub name: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status_id: Option<RecordRef>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create a role
#[utoipa::path(
    post,
    path = "/roles",
    tag = "roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 200, description = "Role created", body = inline(SuccessResponse<RoleView>)),
        (status = 400, description = "Missing, invalid or duplicate name", body = ErrorResponse),
        (status = 404, description = "Unknown status", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/roles")]
pub async fn create_role_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateRoleRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateRoleCommand::new(dto.name, dto.status_id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.role_service.create(command).await {
        Ok(role) => {
            info!(role_id = %role.id, "Role created");
            ApiResponse::success_with_message(role, messages::ROLE_CREATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// List roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = "roles",
    params(ListQuery),
    responses(
        (status = 200, description = "All roles, or one page when paginate=true", body = inline(SuccessResponse<PageResponse<RoleView>>)),
        (status = 400, description = "Unknown sort field", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/roles")]
pub async fn get_roles_handler(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data
        .role_service
        .fetch_all(query.into_inner().into_request())
        .await
    {
        Ok(roles) => ApiResponse::success(roles),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Search roles by name
#[utoipa::path(
    get,
    path = "/roles/search",
    tag = "roles",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching roles", body = inline(SuccessResponse<Vec<RoleView>>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/roles/search")]
pub async fn search_roles_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match data.role_service.search(query.pattern()).await {
        Ok(roles) => ApiResponse::success(roles),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Get a role by uuid or internal key
#[utoipa::path(
    get,
    path = "/roles/{role_id}",
    tag = "roles",
    params(("role_id" = String, Path, description = "Role uuid or internal key")),
    responses(
        (status = 200, description = "Role found", body = inline(SuccessResponse<RoleView>)),
        (status = 404, description = "Role not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/roles/{role_id}")]
pub async fn get_role_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.role_service.find_by_id(&path.into_inner()).await {
        Ok(role) => ApiResponse::success(role),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Update a role
#[utoipa::path(
    put,
    path = "/roles/{role_id}",
    tag = "roles",
    params(("role_id" = String, Path, description = "Role uuid or internal key")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = inline(SuccessResponse<RoleView>)),
        (status = 400, description = "Invalid or duplicate name", body = ErrorResponse),
        (status = 404, description = "Role or status not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/roles/{role_id}")]
pub async fn update_role_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateRoleRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match UpdateRoleCommand::new(dto.name, dto.status_id) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.role_service.update(&path.into_inner(), command).await {
        Ok(role) => {
            info!(role_id = %role.id, "Role updated");
            ApiResponse::success_with_message(role, messages::ROLE_UPDATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Soft delete a role
#[utoipa::path(
    delete,
    path = "/roles/{role_id}",
    tag = "roles",
    params(("role_id" = String, Path, description = "Role uuid or internal key")),
    responses(
        (status = 200, description = "Role deleted", body = MessageResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/roles/{role_id}")]
pub async fn delete_role_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let role_id = path.into_inner();

    match data.role_service.delete(&role_id).await {
        Ok(()) => {
            info!(role_id = %role_id, "Role deleted");
            ApiResponse::message(messages::ROLE_DELETED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::role::application::ports::incoming::use_cases::RoleUseCase;
    use crate::shared::constants::errors;
    use crate::shared::query::{ListRequest, RecordList};
    use crate::shared::ServiceError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    // ============================================================
    // Role Use Case Mock
    // ============================================================

    #[derive(Clone, Default)]
    struct MockRoleUseCase {
        fail_with: Option<ServiceError>,
        seen_ids: Arc<Mutex<Vec<String>>>,
        seen_patterns: Arc<Mutex<Vec<String>>>,
    }

    impl MockRoleUseCase {
        fn failing(err: ServiceError) -> Self {
            Self {
                fail_with: Some(err),
                ..Default::default()
            }
        }

        fn outcome<T>(&self, value: T) -> Result<T, ServiceError> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(value),
            }
        }
    }

    fn sample_role(name: &str) -> RoleView {
        let now = Utc::now();
        RoleView {
            key: 3,
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl RoleUseCase for MockRoleUseCase {
        async fn create(&self, command: CreateRoleCommand) -> Result<RoleView, ServiceError> {
            self.outcome(sample_role(command.name()))
        }

        async fn search(&self, name: &str) -> Result<Vec<RoleView>, ServiceError> {
            self.seen_patterns.lock().unwrap().push(name.to_string());
            self.outcome(vec![sample_role("Admin")])
        }

        async fn find_by_id(&self, id: &str) -> Result<RoleView, ServiceError> {
            self.seen_ids.lock().unwrap().push(id.to_string());
            self.outcome(sample_role("Admin"))
        }

        async fn fetch_all(
            &self,
            _request: ListRequest,
        ) -> Result<RecordList<RoleView>, ServiceError> {
            self.outcome(RecordList::All(vec![sample_role("Admin")]))
        }

        async fn update(
            &self,
            id: &str,
            command: UpdateRoleCommand,
        ) -> Result<RoleView, ServiceError> {
            self.seen_ids.lock().unwrap().push(id.to_string());
            self.outcome(sample_role(command.name().unwrap_or("Admin")))
        }

        async fn delete(&self, id: &str) -> Result<(), ServiceError> {
            self.seen_ids.lock().unwrap().push(id.to_string());
            self.outcome(())
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn create_role_success() {
        let state = TestAppStateBuilder::default()
            .with_role_service(MockRoleUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_role_handler)).await;

        let req = test::TestRequest::post()
            .uri("/roles")
            .set_json(serde_json::json!({ "name": "Mentor", "statusId": 2 }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["data"]["name"], "Mentor");
        assert_eq!(body["message"], messages::ROLE_CREATED);
    }

    #[actix_web::test]
    async fn create_role_short_name_returns_field_errors() {
        let state = TestAppStateBuilder::default()
            .with_role_service(MockRoleUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_role_handler)).await;

        let req = test::TestRequest::post()
            .uri("/roles")
            .set_json(serde_json::json!({ "name": "Ad" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_json(resp).await;
        assert_eq!(body["errors"]["name"], errors::NAME_LENGTH);
    }

    #[actix_web::test]
    async fn create_role_duplicate_name_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_role_service(MockRoleUseCase::failing(ServiceError::bad_request(
                errors::NAME_ALREADY_EXISTS,
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_role_handler)).await;

        let req = test::TestRequest::post()
            .uri("/roles")
            .set_json(serde_json::json!({ "name": "Admin" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_json(resp).await;
        assert_eq!(body["errors"]["message"], errors::NAME_ALREADY_EXISTS);
    }

    #[actix_web::test]
    async fn search_route_is_not_shadowed_by_id_route() {
        let use_case = MockRoleUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_role_service(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(search_roles_handler)
                .service(get_role_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/roles/search?name=adm")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(*use_case.seen_patterns.lock().unwrap(), vec!["adm".to_string()]);
        assert!(use_case.seen_ids.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn get_role_passes_raw_identifier() {
        let use_case = MockRoleUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_role_service(use_case.clone())
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_role_handler)).await;

        let req = test::TestRequest::get().uri("/roles/42").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*use_case.seen_ids.lock().unwrap(), vec!["42".to_string()]);
    }

    #[actix_web::test]
    async fn get_missing_role_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_role_service(MockRoleUseCase::failing(ServiceError::not_found(
                errors::ROLE_NOT_FOUND,
            )))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_role_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/roles/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = read_json(resp).await;
        assert_eq!(body, serde_json::json!({"errors": {"message": "Role not found"}}));
    }

    #[actix_web::test]
    async fn update_role_success() {
        let state = TestAppStateBuilder::default()
            .with_role_service(MockRoleUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(update_role_handler)).await;

        let req = test::TestRequest::put()
            .uri("/roles/3")
            .set_json(serde_json::json!({ "name": "Administrator" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["data"]["name"], "Administrator");
        assert_eq!(body["message"], messages::ROLE_UPDATED);
    }

    #[actix_web::test]
    async fn delete_role_returns_message_only() {
        let state = TestAppStateBuilder::default()
            .with_role_service(MockRoleUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(delete_role_handler)).await;

        let req = test::TestRequest::delete().uri("/roles/3").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body, serde_json::json!({"message": messages::ROLE_DELETED}));
    }
}
