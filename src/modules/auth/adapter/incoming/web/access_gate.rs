//! Bearer token gate in front of every route.
//!
//! Requests to public paths without an `Authorization` header pass straight
//! through. Any request that carries the header, and every request to a
//! protected path, needs a `Bearer <token>` that verifies. The claims are then
//! attached to the request extensions:
//!
//! ```rust,ignore
//! async fn handler(req: HttpRequest) -> HttpResponse {
//!     let claims = req.extensions().get::<SessionClaims>().cloned();
//!     ...
//! }
//! ```

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use tracing::{debug, warn};

use crate::modules::auth::application::ports::outgoing::TokenProvider;
use crate::shared::api::ApiResponse;
use crate::shared::constants::errors;

const BEARER_PREFIX: &str = "Bearer ";

/// Paths reachable without a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPaths {
    exact: Vec<String>,
    prefixes: Vec<String>,
}

impl Default for PublicPaths {
    fn default() -> Self {
        Self {
            exact: vec!["/login".to_string(), "/forgot-password".to_string()],
            prefixes: vec!["/api-docs".to_string()],
        }
    }
}

impl PublicPaths {
    /// Defaults plus extra exact paths, e.g. from `PUBLIC_PATHS`.
    pub fn with_extra<I, P>(extra: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let mut paths = Self::default();
        for path in extra {
            let path: String = path.into();
            let path = path.trim();
            if !path.is_empty() && !paths.exact.iter().any(|p| p == path) {
                paths.exact.push(path.to_string());
            }
        }
        paths
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.exact.iter().any(|p| p == path)
            || self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

/// Middleware factory.
#[derive(Clone)]
pub struct AccessGate {
    tokens: Arc<dyn TokenProvider>,
    public: Arc<PublicPaths>,
}

impl AccessGate {
    pub fn new(tokens: Arc<dyn TokenProvider>, public: PublicPaths) -> Self {
        Self {
            tokens,
            public: Arc::new(public),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateService {
            service: Rc::new(service),
            tokens: Arc::clone(&self.tokens),
            public: Arc::clone(&self.public),
        }))
    }
}

pub struct AccessGateService<S> {
    service: Rc<S>,
    tokens: Arc<dyn TokenProvider>,
    public: Arc<PublicPaths>,
}

/// Reason a request is turned away, rendered as a 403.
fn rejection(req: &ServiceRequest, tokens: &dyn TokenProvider) -> Result<(), String> {
    let Some(header) = req.headers().get(AUTHORIZATION) else {
        return Err(errors::AUTHENTICATION_HEADER_REQUIRED.to_string());
    };

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| errors::INVALID_AUTHENTICATION_HEADER.to_string())?;

    let claims = tokens
        .verify_session_token(token)
        .map_err(|e| format!("{} - {}", errors::AUTHENTICATION_FAILED_PREFIX, e))?;

    debug!(key = %claims.key, "session verified");
    req.extensions_mut().insert(claims);
    Ok(())
}

impl<S, B> Service<ServiceRequest> for AccessGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // A presented token is always checked, public path or not.
        let has_header = req.headers().contains_key(AUTHORIZATION);
        if !has_header && self.public.is_public(req.path()) {
            return Box::pin(async move {
                service.call(req).await.map(ServiceResponse::map_into_left_body)
            });
        }

        if let Err(reason) = rejection(&req, self.tokens.as_ref()) {
            warn!(path = %req.path(), reason = %reason, "request rejected");
            let (request, _payload) = req.into_parts();
            let response = ApiResponse::forbidden(&reason).map_into_right_body();
            return Box::pin(async move { Ok(ServiceResponse::new(request, response)) });
        }

        Box::pin(async move {
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}
