use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::models::trip::DayPlan;
use crate::services::budget_service::BudgetService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummaryRequest {
    #[serde(default)]
    pub day_plans: Vec<DayPlan>,
    #[serde(default)]
    pub total_budget: u32,
}

/*
    /api/budget/summary
*/
pub async fn summary(request: web::Json<BudgetSummaryRequest>) -> impl Responder {
    HttpResponse::Ok().json(BudgetService::summarize(
        &request.day_plans,
        request.total_budget,
    ))
}
