#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use serde_json::{json, Value};

use dayplan_api::routes;
use dayplan_api::services::day_plan_generator::GenerationConfig;

pub struct TestApp {
    pub config: GenerationConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(GenerationConfig::default())
    }

    pub fn with_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(routes::config)
    }
}

pub fn test_profile() -> Value {
    json!({
        "interests": ["culture", "dining"],
        "energyLevel": "low",
        "budget": "moderate",
        "preferredStartTime": "09:00",
        "preferredEndTime": "21:00"
    })
}

pub fn test_request(seed: u64) -> Value {
    json!({
        "date": "2025-05-20",
        "profile": test_profile(),
        "destination": "Lisbon",
        "travelers": [{"id": "t1", "age": 30}],
        "seed": seed
    })
}

/// Minutes since midnight of an `HH:MM` string from a response body.
pub fn minutes(value: &Value) -> u32 {
    let text = value.as_str().expect("time should be a string");
    let (hours, minutes) = text.split_once(':').expect("time should be HH:MM");
    hours.parse::<u32>().unwrap() * 60 + minutes.parse::<u32>().unwrap()
}
