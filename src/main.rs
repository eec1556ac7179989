pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{accessory, auth, classroom, corporate, email, location, role, status, user};

use crate::accessory::{
    adapter::outgoing::AccessoryRepositoryPostgres,
    application::{ports::incoming::use_cases::AccessoryUseCase, services::AccessoryService},
};
use crate::api::openapi::ApiDoc;
use crate::auth::{
    adapter::{
        incoming::web::{AccessGate, PublicPaths},
        outgoing::{
            jwt::{JwtConfig, JwtTokenService},
            security::BcryptHasher,
            AccountRepositoryPostgres, SecureCodeRepositoryPostgres,
        },
    },
    application::{
        ports::{
            incoming::use_cases::AuthUseCase,
            outgoing::{PasswordHasher, TokenProvider},
        },
        services::AuthService,
    },
};
use crate::classroom::{
    adapter::outgoing::ClassroomRepositoryPostgres,
    application::{ports::incoming::use_cases::ClassroomUseCase, services::ClassroomService},
};
use crate::config::{AppConfig, SmtpSettings};
use crate::corporate::{
    adapter::outgoing::CorporateRepositoryPostgres,
    application::{ports::incoming::use_cases::CorporateUseCase, services::CorporateService},
};
use crate::email::{
    adapter::outgoing::SmtpEmailSender,
    application::{ports::outgoing::AccountNotifier, services::TemplateAccountNotifier},
};
use crate::location::{
    adapter::outgoing::LocationRepositoryPostgres,
    application::{ports::incoming::use_cases::LocationUseCase, services::LocationService},
};
use crate::role::{
    adapter::outgoing::RoleRepositoryPostgres,
    application::{ports::incoming::use_cases::RoleUseCase, services::RoleService},
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::status::{
    adapter::outgoing::StatusRepositoryPostgres,
    application::{ports::incoming::use_cases::StatusUseCase, services::StatusService},
};
use crate::user::{
    adapter::outgoing::UserRepositoryPostgres,
    application::{ports::incoming::use_cases::UserUseCase, services::UserService},
};

use actix_web::{middleware::Logger, web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub status_service: Arc<dyn StatusUseCase + Send + Sync>,
    pub role_service: Arc<dyn RoleUseCase + Send + Sync>,
    pub location_service: Arc<dyn LocationUseCase + Send + Sync>,
    pub accessory_service: Arc<dyn AccessoryUseCase + Send + Sync>,
    pub classroom_service: Arc<dyn ClassroomUseCase + Send + Sync>,
    pub corporate_service: Arc<dyn CorporateUseCase + Send + Sync>,
    pub user_service: Arc<dyn UserUseCase + Send + Sync>,
    pub auth_service: Arc<dyn AuthUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    info!(?config, "configuration loaded");

    // SMTP
    let smtp_sender = match &config.smtp {
        SmtpSettings::Local { host, port } => {
            SmtpEmailSender::new_local(host, *port, &config.email_from)
        }
        SmtpSettings::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.email_from)?,
    };

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(Database::connect(opt).await?);

    // Shared adapters
    let jwt_service = Arc::new(JwtTokenService::new(JwtConfig::new(
        config.jwt_secret.clone(),
        config.session_ttl,
    )));
    let token_provider: Arc<dyn TokenProvider> = jwt_service;
    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::new(config.bcrypt_cost));
    let notifier: Arc<dyn AccountNotifier> = Arc::new(TemplateAccountNotifier::new(
        Arc::new(smtp_sender),
        config.password_setup_url.clone(),
    ));
    let code_ttl = chrono::Duration::seconds(config.activation_code_ttl);

    let user_service = UserService::new(
        UserRepositoryPostgres::new(Arc::clone(&db_arc)),
        Arc::clone(&hasher),
        Arc::clone(&notifier),
        code_ttl,
    );
    if let Some(seed) = &config.super_admin {
        user_service
            .ensure_super_admin(seed)
            .await
            .map_err(|e| anyhow::anyhow!("super admin seeding failed: {e:?}"))?;
    }

    let state = AppState {
        status_service: Arc::new(StatusService::new(StatusRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        role_service: Arc::new(RoleService::new(RoleRepositoryPostgres::new(Arc::clone(
            &db_arc,
        )))),
        location_service: Arc::new(LocationService::new(LocationRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        accessory_service: Arc::new(AccessoryService::new(AccessoryRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        classroom_service: Arc::new(ClassroomService::new(ClassroomRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        corporate_service: Arc::new(CorporateService::new(CorporateRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        user_service: Arc::new(user_service),
        auth_service: Arc::new(AuthService::new(
            AccountRepositoryPostgres::new(Arc::clone(&db_arc)),
            SecureCodeRepositoryPostgres::new(Arc::clone(&db_arc)),
            hasher,
            Arc::clone(&token_provider),
            notifier,
            code_ttl,
        )),
    };

    let gate = AccessGate::new(
        token_provider,
        PublicPaths::with_extra(config.public_paths.iter().cloned()),
    );

    let server_url = config.server_url();
    info!(%server_url, "Server running");

    HttpServer::new(move || {
        App::new()
            .wrap(gate.clone())
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/api-docs/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

/// Literal `/search` routes are registered before their `/{id}` siblings.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::banner);
    cfg.service(crate::health::ping);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::setup_password_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::forgot_password_handler);
    // Status
    cfg.service(crate::status::adapter::incoming::web::routes::create_status_handler);
    cfg.service(crate::status::adapter::incoming::web::routes::get_statuses_handler);
    // Roles
    cfg.service(crate::role::adapter::incoming::web::routes::create_role_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::get_roles_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::search_roles_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::get_role_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::update_role_handler);
    cfg.service(crate::role::adapter::incoming::web::routes::delete_role_handler);
    // Locations
    cfg.service(crate::location::adapter::incoming::web::routes::create_location_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::get_locations_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::search_locations_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::get_location_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::update_location_handler);
    cfg.service(crate::location::adapter::incoming::web::routes::delete_location_handler);
    // Accessories
    cfg.service(crate::accessory::adapter::incoming::web::routes::create_accessory_handler);
    cfg.service(crate::accessory::adapter::incoming::web::routes::get_accessories_handler);
    cfg.service(crate::accessory::adapter::incoming::web::routes::search_accessories_handler);
    cfg.service(crate::accessory::adapter::incoming::web::routes::get_accessory_handler);
    cfg.service(crate::accessory::adapter::incoming::web::routes::update_accessory_handler);
    cfg.service(crate::accessory::adapter::incoming::web::routes::delete_accessory_handler);
    // Classrooms
    cfg.service(crate::classroom::adapter::incoming::web::routes::create_classroom_handler);
    cfg.service(crate::classroom::adapter::incoming::web::routes::get_classrooms_handler);
    cfg.service(crate::classroom::adapter::incoming::web::routes::search_classrooms_handler);
    cfg.service(crate::classroom::adapter::incoming::web::routes::get_classroom_handler);
    cfg.service(crate::classroom::adapter::incoming::web::routes::update_classroom_handler);
    cfg.service(crate::classroom::adapter::incoming::web::routes::delete_classroom_handler);
    // Corporate
    cfg.service(crate::corporate::adapter::incoming::web::routes::create_corporate_handler);
    cfg.service(crate::corporate::adapter::incoming::web::routes::get_corporates_handler);
    cfg.service(crate::corporate::adapter::incoming::web::routes::search_corporates_handler);
    cfg.service(crate::corporate::adapter::incoming::web::routes::get_corporate_handler);
    cfg.service(crate::corporate::adapter::incoming::web::routes::update_corporate_handler);
    cfg.service(crate::corporate::adapter::incoming::web::routes::delete_corporate_handler);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::search_users_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::delete_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        error!(error = %e, "application stopped");
        eprintln!("Error starting app: {e}");
    }
}
