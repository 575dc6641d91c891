use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::models::activity::wall_clock;
use crate::services::day_plan_generator::GenerationConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /api/health
*/
pub async fn health_check(config: web::Data<GenerationConfig>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let generator_result = check_generator(&config);
    health
        .services
        .insert("day_plan_generator".to_string(), generator_result.clone());

    if generator_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_generator(config: &GenerationConfig) -> ServiceStatus {
    let start = wall_clock::parse(&config.default_start_time);
    let end = wall_clock::parse(&config.default_end_time);

    match (start, end) {
        (Some(start), Some(end)) if start < end => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "Default day {}-{}, prices in {}",
                config.default_start_time, config.default_end_time, config.currency
            )),
        },
        _ => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!(
                "Invalid default day window {}-{}, every request without preferred times gets fallback plans",
                config.default_start_time, config.default_end_time
            )),
        },
    }
}
