use actix_web::{delete, get, post, put, web, Responder};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, PageResponse, SuccessResponse};
use crate::modules::corporate::application::domain::entities::{
    ClassroomInput, CorporateDetails, CorporateView, CreateCorporateCommand,
    UpdateCorporateCommand,
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

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomEntryRequest {
    /// Present to edit an existing classroom of this corporate
    #[schema(value_type = Option<String>)]
    pub id: Option<RecordRef>,
    #[schema(example = "Hall A")]
    pub name: Option<String>,
    pub capacity: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub accessory_id: Option<RecordRef>,
    #[schema(value_type = Option<String>)]
    pub status_id: Option<RecordRef>,
}

impl From<ClassroomEntryRequest> for ClassroomInput {
    fn from(dto: ClassroomEntryRequest) -> Self {
        ClassroomInput {
            id: dto.id,
            name: dto.name,
            capacity: dto.capacity,
            accessory: dto.accessory_id,
            status: dto.status_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorporateRequest {
    #[schema(example = "Acme Learning")]
    pub name: Option<String>,
    #[schema(example = "hello@acme.com")]
    pub email: Option<String>,
    #[schema(example = "9876543210")]
    pub contact_no: Option<String>,
    pub street: Option<String>,
    pub landmark: Option<String>,
    pub city: Option<String>,
    #[schema(example = 560001)]
    pub pincode: Option<i32>,
    pub capacity: Option<i32>,
    #[schema(value_type = Option<String>)]
    pub location_id: Option<RecordRef>,
    #[schema(value_type = Option<String>)]
    pub status_id: Option<RecordRef>,
    #[serde(default, alias = "classrooms")]
    pub classroom: Vec<ClassroomEntryRequest>,
}

impl CorporateRequest {
    fn into_parts(
        self,
    ) -> (
        Option<String>,
        Option<String>,
        CorporateDetails,
        Vec<ClassroomInput>,
    ) {
        let details = CorporateDetails {
            contact_no: self.contact_no,
            street: self.street,
            landmark: self.landmark,
            city: self.city,
            pincode: self.pincode,
            capacity: self.capacity,
            location: self.location_id,
            status: self.status_id,
        };
        let classrooms = self.classroom.into_iter().map(ClassroomInput::from).collect();

        (self.name, self.email, details, classrooms)
    }
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Create a corporate with its classrooms
#[utoipa::path(
    post,
    path = "/corporate",
    tag = "corporate",
    request_body = CorporateRequest,
    responses(
        (status = 200, description = "Corporate created", body = inline(SuccessResponse<CorporateView>)),
        (status = 400, description = "Missing or invalid fields, or email already registered", body = ErrorResponse),
        (status = 404, description = "Unknown location, status or accessory", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/corporate")]
pub async fn create_corporate_handler(
    data: web::Data<AppState>,
    payload: web::Json<CorporateRequest>,
) -> impl Responder {
    let (name, email, details, classrooms) = payload.into_inner().into_parts();

    let command = match CreateCorporateCommand::new(name, email, details, classrooms) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data.corporate_service.create(command).await {
        Ok(corporate) => {
            info!(
                corporate_id = %corporate.id,
                classrooms = corporate.classrooms.len(),
                "Corporate created"
            );
            ApiResponse::success_with_message(corporate, messages::CORPORATE_CREATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// List corporates
#[utoipa::path(
    get,
    path = "/corporate",
    tag = "corporate",
    params(ListQuery),
    responses(
        (status = 200, description = "All corporates, or one page when paginate=true", body = inline(SuccessResponse<PageResponse<CorporateView>>)),
        (status = 400, description = "Unknown sort field", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/corporate")]
pub async fn get_corporates_handler(
    data: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    match data
        .corporate_service
        .fetch_all(query.into_inner().into_request())
        .await
    {
        Ok(corporates) => ApiResponse::success(corporates),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Search corporates by name
#[utoipa::path(
    get,
    path = "/corporate/search",
    tag = "corporate",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching corporates", body = inline(SuccessResponse<Vec<CorporateView>>)),
        (status = 400, description = "Empty name", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/corporate/search")]
pub async fn search_corporates_handler(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    match data.corporate_service.search(query.pattern()).await {
        Ok(corporates) => ApiResponse::success(corporates),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Get a corporate by uuid or internal key
#[utoipa::path(
    get,
    path = "/corporate/{corporate_id}",
    tag = "corporate",
    params(("corporate_id" = String, Path, description = "Corporate uuid or internal key")),
    responses(
        (status = 200, description = "Corporate found", body = inline(SuccessResponse<CorporateView>)),
        (status = 404, description = "Corporate not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/corporate/{corporate_id}")]
pub async fn get_corporate_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.corporate_service.find_by_id(&path.into_inner()).await {
        Ok(corporate) => ApiResponse::success(corporate),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Update a corporate and its classrooms
#[utoipa::path(
    put,
    path = "/corporate/{corporate_id}",
    tag = "corporate",
    params(("corporate_id" = String, Path, description = "Corporate uuid or internal key")),
    request_body = CorporateRequest,
    responses(
        (status = 200, description = "Corporate updated", body = inline(SuccessResponse<CorporateView>)),
        (status = 400, description = "Invalid fields or email already registered", body = ErrorResponse),
        (status = 404, description = "Corporate, classroom or a referenced row not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/corporate/{corporate_id}")]
pub async fn update_corporate_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<CorporateRequest>,
) -> impl Responder {
    let (name, email, details, classrooms) = payload.into_inner().into_parts();

    let command = match UpdateCorporateCommand::new(name, email, details, classrooms) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::from_service_error(&err),
    };

    match data
        .corporate_service
        .update(&path.into_inner(), command)
        .await
    {
        Ok(corporate) => {
            info!(corporate_id = %corporate.id, "Corporate updated");
            ApiResponse::success_with_message(corporate, messages::CORPORATE_UPDATED)
        }
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Soft delete a corporate
#[utoipa::path(
    delete,
    path = "/corporate/{corporate_id}",
    tag = "corporate",
    params(("corporate_id" = String, Path, description = "Corporate uuid or internal key")),
    responses(
        (status = 200, description = "Corporate deleted", body = MessageResponse),
        (status = 404, description = "Corporate not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/corporate/{corporate_id}")]
pub async fn delete_corporate_handler(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let corporate_id = path.into_inner();

    match data.corporate_service.delete(&corporate_id).await {
        Ok(()) => {
            info!(corporate_id = %corporate_id, "Corporate deleted");
            ApiResponse::message(messages::CORPORATE_DELETED)
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

    use crate::modules::corporate::application::ports::incoming::use_cases::CorporateUseCase;
    use crate::shared::constants::errors;
    use crate::shared::query::{ListRequest, RecordList};
    use crate::shared::ServiceError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone, Default)]
    struct MockCorporateUseCase {
        fail_with: Option<ServiceError>,
        updates: Arc<Mutex<Vec<UpdateCorporateCommand>>>,
    }

    impl MockCorporateUseCase {
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

    fn sample_corporate(name: &str) -> CorporateView {
        let now = Utc::now();
        CorporateView {
            key: 1,
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: "hello@acme.com".to_string(),
            contact_no: None,
            street: None,
            landmark: None,
            city: None,
            pincode: None,
            capacity: None,
            location: None,
            status: None,
            classrooms: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[async_trait]
    impl CorporateUseCase for MockCorporateUseCase {
        async fn create(
            &self,
            command: CreateCorporateCommand,
        ) -> Result<CorporateView, ServiceError> {
            self.outcome(sample_corporate(command.name()))
        }

        async fn search(&self, _name: &str) -> Result<Vec<CorporateView>, ServiceError> {
            self.outcome(vec![sample_corporate("Acme")])
        }

        async fn find_by_id(&self, _id: &str) -> Result<CorporateView, ServiceError> {
            self.outcome(sample_corporate("Acme"))
        }

        async fn fetch_all(
            &self,
            _request: ListRequest,
        ) -> Result<RecordList<CorporateView>, ServiceError> {
            self.outcome(RecordList::Page {
                count: 1,
                rows: vec![sample_corporate("Acme")],
            })
        }

        async fn update(
            &self,
            _id: &str,
            command: UpdateCorporateCommand,
        ) -> Result<CorporateView, ServiceError> {
            self.updates.lock().unwrap().push(command.clone());
            self.outcome(sample_corporate(command.name().unwrap_or("Acme")))
        }

        async fn delete(&self, _id: &str) -> Result<(), ServiceError> {
            self.outcome(())
        }
    }

    #[actix_web::test]
    async fn create_corporate_success() {
        let state = TestAppStateBuilder::default()
            .with_corporate_service(MockCorporateUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_corporate_handler)).await;

        let req = test::TestRequest::post()
            .uri("/corporate")
            .set_json(serde_json::json!({
                "name": "Acme Learning",
                "email": "hello@acme.com",
                "contactNo": "9876543210",
                "pincode": 560001,
                "classroom": [{ "name": "Hall A", "capacity": 30 }]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Acme Learning");
        assert_eq!(body["message"], messages::CORPORATE_CREATED);
    }

    #[actix_web::test]
    async fn create_corporate_with_bad_contact_returns_field_errors() {
        let state = TestAppStateBuilder::default()
            .with_corporate_service(MockCorporateUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_corporate_handler)).await;

        let req = test::TestRequest::post()
            .uri("/corporate")
            .set_json(serde_json::json!({
                "name": "Acme Learning",
                "email": "hello@acme.com",
                "contactNo": "98-76"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["contactNo"], errors::PHONE_NUMBER_NUMERIC);
    }

    #[actix_web::test]
    async fn create_corporate_duplicate_email() {
        let state = TestAppStateBuilder::default()
            .with_corporate_service(MockCorporateUseCase::failing(ServiceError::bad_request(
                errors::EMAIL_ALREADY_EXIST,
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(create_corporate_handler)).await;

        let req = test::TestRequest::post()
            .uri("/corporate")
            .set_json(serde_json::json!({ "name": "Acme", "email": "hello@acme.com" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"]["message"], errors::EMAIL_ALREADY_EXIST);
    }

    #[actix_web::test]
    async fn paginated_list_has_count_and_rows() {
        let state = TestAppStateBuilder::default()
            .with_corporate_service(MockCorporateUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_corporates_handler)).await;

        let req = test::TestRequest::get()
            .uri("/corporate?paginate=true&pageNo=1&pageLimit=5")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["count"], 1);
        assert_eq!(body["data"]["rows"][0]["name"], "Acme");
    }

    #[actix_web::test]
    async fn update_splits_classroom_entries_by_id() {
        let use_case = MockCorporateUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_corporate_service(use_case.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(update_corporate_handler)).await;

        let existing = Uuid::new_v4();
        let req = test::TestRequest::put()
            .uri("/corporate/1")
            .set_json(serde_json::json!({
                "classroom": [
                    { "id": existing.to_string(), "capacity": 50 },
                    { "name": "Hall B", "capacity": 20 }
                ]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updates = use_case.updates.lock().unwrap();
        assert_eq!(updates[0].edited_classrooms()[0].id, RecordRef::Public(existing));
        assert_eq!(updates[0].new_classrooms()[0].name, "Hall B");
    }

    #[actix_web::test]
    async fn delete_corporate_returns_message_only() {
        let state = TestAppStateBuilder::default()
            .with_corporate_service(MockCorporateUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(delete_corporate_handler)).await;

        let req = test::TestRequest::delete().uri("/corporate/1").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"message": messages::CORPORATE_DELETED}));
    }
}
