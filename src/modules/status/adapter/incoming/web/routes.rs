use actix_web::{get, post, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, PageResponse, SuccessResponse};
use crate::modules::status::application::domain::entities::{CreateStatusCommand, StatusView};
use crate::shared::api::ApiResponse;
use crate::shared::constants::messages;
use crate::shared::query::ListQuery;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStatusRequest {
    #[schema(example = "Archived")]
    pub name: Option<String>,
    #[schema(example = true)]
    pub is_active: Option<bool>,
    #[schema(example = false)]
    pub is_deleted: Option<bool>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create a status
#[utoipa::path(
    post,
    path = "/status",
    tag = "status",
    request_body = CreateStatusRequest,
    responses(
        (status = 200, description = "Status created", body = inline(SuccessResponse<StatusView>)),
        (status = 400, description = "Missing or invalid name", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/status")]
pub async fn create_status_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateStatusRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateStatusCommand::new(dto.name, dto.is_active, dto.is_deleted) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.status_service.create(command).await {
        Ok(status) => {
            info!(status_id = %status.id, "Status created");
            ApiResponse::success_with_message(status, messages::STATUS_CREATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// List statuses
#[utoipa::path(
    get,
    path = "/status",
    tag = "status",
    params(ListQuery),
    responses(
        (status = 200, description = "All statuses, or one page when paginate=true", body = inline(SuccessResponse<PageResponse<StatusView>>)),
        (status = 400, description = "Unknown sort field", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/status")]
pub async fn get_statuses_handler(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data
        .status_service
        .fetch_all(query.into_inner().into_request())
        .await
    {
        Ok(statuses) => ApiResponse::success(statuses),
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

    use crate::modules::status::application::ports::incoming::use_cases::StatusUseCase;
    use crate::shared::constants::errors;
    use crate::shared::query::{ListRequest, RecordList};
    use crate::shared::ServiceError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    // ============================================================
    // Status Use Case Mock
    // ============================================================

    #[derive(Clone, Default)]
    struct MockStatusUseCase {
        fail_with: Option<ServiceError>,
        last_request: Arc<Mutex<Option<ListRequest>>>,
    }

    fn sample_status(name: &str) -> StatusView {
        let now = Utc::now();
        StatusView {
            key: 9,
            id: Uuid::new_v4(),
            name: name.to_string(),
            is_active: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl StatusUseCase for MockStatusUseCase {
        async fn create(&self, command: CreateStatusCommand) -> Result<StatusView, ServiceError> {
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(sample_status(command.name())),
            }
        }

        async fn fetch_all(
            &self,
            request: ListRequest,
        ) -> Result<RecordList<StatusView>, ServiceError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(match request {
                    ListRequest::All => RecordList::All(vec![sample_status("Active")]),
                    ListRequest::Page(_) => RecordList::Page {
                        count: 3,
                        rows: vec![sample_status("Active")],
                    },
                }),
            }
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
    async fn create_status_returns_envelope_without_internal_key() {
        let state = TestAppStateBuilder::default()
            .with_status_service(MockStatusUseCase::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_status_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/status")
            .set_json(serde_json::json!({ "name": "Archived", "isActive": false }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["message"], messages::STATUS_CREATED);
        assert_eq!(body["data"]["name"], "Archived");
        assert!(body["data"]["id"].is_string());
        assert!(body["data"].get("key").is_none());
    }

    #[actix_web::test]
    async fn create_status_without_name_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_status_service(MockStatusUseCase::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(create_status_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/status")
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = read_json(resp).await;
        assert_eq!(body["errors"]["message"], errors::NAME_EMPTY);
    }

    #[actix_web::test]
    async fn get_statuses_paginated_shape() {
        let use_case = MockStatusUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_status_service(use_case.clone())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_statuses_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/status?paginate=true&pageNo=2&pageLimit=1&sortBy=name&sortOrder=ASC")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["data"]["count"], 3);
        assert_eq!(body["data"]["rows"].as_array().unwrap().len(), 1);

        let request = use_case.last_request.lock().unwrap().clone().unwrap();
        let ListRequest::Page(page) = request else {
            panic!("expected a page request");
        };
        assert_eq!(page.page_no, 2);
        assert_eq!(page.sort_by, "name");
    }

    #[actix_web::test]
    async fn get_statuses_without_paginate_returns_array() {
        let state = TestAppStateBuilder::default()
            .with_status_service(MockStatusUseCase::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_statuses_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/status").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert!(body["data"].is_array());
    }

    #[actix_web::test]
    async fn get_statuses_failure_maps_to_server_error() {
        let state = TestAppStateBuilder::default()
            .with_status_service(MockStatusUseCase {
                fail_with: Some(ServiceError::internal(errors::ERROR_IN_FETCHING_RECORDS)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_statuses_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/status").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = read_json(resp).await;
        assert_eq!(body["errors"]["message"], errors::ERROR_IN_FETCHING_RECORDS);
    }
}
