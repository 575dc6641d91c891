use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{day_plan::DayPlanOption, profile::UserProfile, traveler::Traveler};
use crate::services::day_plan_generator::{DayPlanGenerator, GenerationConfig, PLAN_OPTION_COUNT};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlanRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub travelers: Vec<Traveler>,
    /// Pins the random source so the same request yields the same options
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct DayPlanResponse {
    pub date: NaiveDate,
    pub options: [DayPlanOption; PLAN_OPTION_COUNT],
}

/*
    /api/day-plans/options
*/
pub async fn generate_options(
    config: web::Data<GenerationConfig>,
    request: web::Json<DayPlanRequest>,
) -> impl Responder {
    let request = request.into_inner();
    debug!(
        "Day plan request for {} in {:?} with {} travelers",
        request.date,
        request.destination,
        request.travelers.len()
    );

    let config = config.get_ref().clone();
    let mut generator = match request.seed {
        Some(seed) => DayPlanGenerator::with_seed(config, seed),
        None => DayPlanGenerator::new(config),
    };

    let options = generator.generate_day_plan_options(
        request.date,
        &request.profile,
        &request.destination,
        &request.travelers,
    );

    HttpResponse::Ok().json(DayPlanResponse {
        date: request.date,
        options,
    })
}
