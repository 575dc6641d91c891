use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::activity::Activity;
use crate::services::{alternative_service::generate_cheaper_alternatives, random::seeded_rng};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRequest {
    pub activity: Activity,
    pub alternative_id: Uuid,
}

/*
    /api/activities/alternatives
*/
pub async fn cheaper_alternatives(activity: web::Json<Activity>) -> impl Responder {
    let mut rng = seeded_rng(None);
    let alternatives = generate_cheaper_alternatives(&mut rng, &activity);
    HttpResponse::Ok().json(alternatives)
}

/*
    /api/activities/replace
*/
pub async fn replace(request: web::Json<ReplaceRequest>) -> impl Responder {
    let ReplaceRequest {
        mut activity,
        alternative_id,
    } = request.into_inner();

    let alternative = match activity.find_alternative(&alternative_id) {
        Some(alternative) => alternative.clone(),
        None => return HttpResponse::NotFound().body("Alternative not found"),
    };

    info!(
        "Replacing `{}` with `{}` ({}% cheaper)",
        activity.name, alternative.name, alternative.savings_percentage
    );
    activity.apply_alternative(&alternative);
    HttpResponse::Ok().json(activity)
}
