use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::LoginOutcome;
use crate::shared::api::ApiResponse;
use crate::shared::constants::messages;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "jane@everest.org")]
    pub email: Option<String>,
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetupPasswordRequest {
    /// Code from the activation or reset mail
    #[schema(example = "9f86d081884c7d659a2feaa0c55ad015")]
    pub auth_code: Option<String>,
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ForgotPasswordRequest {
    #[schema(example = "jane@everest.org")]
    pub email: Option<String>,
}

/// User login
///
/// Checks the credentials of an active user and returns a session token
/// together with the user profile.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginOutcome>)),
        (status = 400, description = "Missing field or inactive user", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/login")]
pub async fn login_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginRequestDto>,
) -> impl Responder {
    let dto = payload.into_inner();
    let email = dto.email.unwrap_or_default();

    info!(email = %email, "Login attempt");

    match data
        .auth_service
        .authenticate(&email, dto.password.as_deref().unwrap_or_default())
        .await
    {
        Ok(outcome) => {
            ApiResponse::success_with_message(outcome, messages::SUCCESSFUL_AUTHENTICATION)
        }
        Err(err) => {
            warn!(email = %email, error = %err, "Login failed");
            ApiResponse::from_service_error(&err)
        }
    }
}

/// Set up or reset a password with an activation code
#[utoipa::path(
    post,
    path = "/setup-password",
    tag = "auth",
    request_body = SetupPasswordRequest,
    responses(
        (status = 200, description = "Password stored, account active", body = MessageResponse),
        (status = 400, description = "Empty code or password", body = ErrorResponse),
        (status = 404, description = "Unknown or expired code", body = ErrorResponse),
    )
)]
#[post("/setup-password")]
pub async fn setup_password_handler(
    data: web::Data<AppState>,
    payload: web::Json<SetupPasswordRequest>,
) -> impl Responder {
    let dto = payload.into_inner();

    match data
        .auth_service
        .setup_password(
            dto.auth_code.as_deref().unwrap_or_default(),
            dto.password.as_deref().unwrap_or_default(),
        )
        .await
    {
        Ok(()) => ApiResponse::message(messages::PASSWORD_UPDATED),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

/// Mail a password reset link
#[utoipa::path(
    post,
    path = "/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset link sent", body = MessageResponse),
        (status = 400, description = "Empty or unknown email", body = ErrorResponse),
        (status = 500, description = "Mail could not be sent", body = ErrorResponse),
    )
)]
#[post("/forgot-password")]
pub async fn forgot_password_handler(
    data: web::Data<AppState>,
    payload: web::Json<ForgotPasswordRequest>,
) -> impl Responder {
    let email = payload.into_inner().email.unwrap_or_default();

    match data.auth_service.send_password_reset_link(&email).await {
        Ok(()) => ApiResponse::message(messages::PASSWORD_RESET_LINK_SENT),
        Err(err) => ApiResponse::from_service_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::modules::auth::application::domain::entities::UserProfile;
    use crate::modules::auth::application::ports::incoming::use_cases::AuthUseCase;
    use crate::shared::api::custom_json_config;
    use crate::shared::constants::errors;
    use crate::shared::ServiceError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone, Default)]
    struct MockAuthUseCase {
        fail_with: Option<ServiceError>,
        calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl MockAuthUseCase {
        fn failing(err: ServiceError) -> Self {
            Self {
                fail_with: Some(err),
                ..Default::default()
            }
        }

        fn record(&self, a: &str, b: &str) -> Result<(), ServiceError> {
            self.calls
                .lock()
                .unwrap()
                .push((a.to_string(), b.to_string()));
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl AuthUseCase for MockAuthUseCase {
        async fn authenticate(
            &self,
            email: &str,
            password: &str,
        ) -> Result<LoginOutcome, ServiceError> {
            self.record(email, password)?;
            Ok(LoginOutcome {
                token: "session-token".to_string(),
                user: UserProfile {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    first_name: "Jane".to_string(),
                    last_name: None,
                    phone_no: None,
                    role: None,
                    status: None,
                    location: None,
                },
            })
        }

        async fn setup_password(&self, code: &str, password: &str) -> Result<(), ServiceError> {
            self.record(code, password)
        }

        async fn send_password_reset_link(&self, email: &str) -> Result<(), ServiceError> {
            self.record(email, "")
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn login_returns_token_and_user() {
        let state = TestAppStateBuilder::default()
            .with_auth_service(MockAuthUseCase::default())
            .build();

        let app = test::init_service(App::new().app_data(state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "email": "jane@everest.org", "password": "secret" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["data"]["token"], "session-token");
        assert_eq!(body["data"]["user"]["email"], "jane@everest.org");
        assert!(body["data"]["user"].get("password").is_none());
        assert_eq!(body["message"], messages::SUCCESSFUL_AUTHENTICATION);
    }

    #[actix_web::test]
    async fn login_with_bad_password_is_unauthorized() {
        let state = TestAppStateBuilder::default()
            .with_auth_service(MockAuthUseCase::failing(ServiceError::Unauthorized(
                errors::INVALID_CREDENTIALS.to_string(),
            )))
            .build();

        let app = test::init_service(App::new().app_data(state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "email": "jane@everest.org", "password": "nope" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body = read_json(resp).await;
        assert_eq!(body["errors"]["message"], errors::INVALID_CREDENTIALS);
    }

    #[actix_web::test]
    async fn login_missing_fields_reach_service_as_empty() {
        let use_case = MockAuthUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_auth_service(use_case.clone())
            .build();

        let app = test::init_service(App::new().app_data(state).service(login_handler)).await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({}))
            .to_request();

        test::call_service(&app, req).await;

        assert_eq!(
            *use_case.calls.lock().unwrap(),
            vec![(String::new(), String::new())]
        );
    }

    #[actix_web::test]
    async fn malformed_login_body_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_auth_service(MockAuthUseCase::default())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn setup_password_reads_auth_code() {
        let use_case = MockAuthUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_auth_service(use_case.clone())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(setup_password_handler)).await;

        let req = test::TestRequest::post()
            .uri("/setup-password")
            .set_json(serde_json::json!({ "authCode": "abc123", "password": "n3w" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body, serde_json::json!({ "message": messages::PASSWORD_UPDATED }));
        assert_eq!(
            *use_case.calls.lock().unwrap(),
            vec![("abc123".to_string(), "n3w".to_string())]
        );
    }

    #[actix_web::test]
    async fn setup_password_with_unknown_code_is_not_found() {
        let state = TestAppStateBuilder::default()
            .with_auth_service(MockAuthUseCase::failing(ServiceError::not_found(
                errors::NO_PASSCODE_FOUND_FOR_USER,
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(setup_password_handler)).await;

        let req = test::TestRequest::post()
            .uri("/setup-password")
            .set_json(serde_json::json!({ "authCode": "gone", "password": "n3w" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn forgot_password_sends_link() {
        let state = TestAppStateBuilder::default()
            .with_auth_service(MockAuthUseCase::default())
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(forgot_password_handler)).await;

        let req = test::TestRequest::post()
            .uri("/forgot-password")
            .set_json(serde_json::json!({ "email": "jane@everest.org" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = read_json(resp).await;
        assert_eq!(body["message"], messages::PASSWORD_RESET_LINK_SENT);
    }

    #[actix_web::test]
    async fn forgot_password_mail_failure_is_server_error() {
        let state = TestAppStateBuilder::default()
            .with_auth_service(MockAuthUseCase::failing(ServiceError::internal(
                errors::ERROR_IN_SENDING_EMAIL,
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(forgot_password_handler)).await;

        let req = test::TestRequest::post()
            .uri("/forgot-password")
            .set_json(serde_json::json!({ "email": "jane@everest.org" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = read_json(resp).await;
        assert_eq!(body["errors"]["message"], errors::ERROR_IN_SENDING_EMAIL);
    }
}
