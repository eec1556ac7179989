use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct BannerResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct PingResponse {
    status: &'static str,
    time: DateTime<Utc>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

#[get("/")]
pub async fn banner() -> impl Responder {
    HttpResponse::Ok().json(BannerResponse {
        message: "Team Everest Application Running",
    })
}

#[get("/ping")]
pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(PingResponse {
        status: "active",
        time: Utc::now(),
    })
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the database pool
#[get("/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    let database = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unhealthy",
    };

    if database == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
        })
    }
}
