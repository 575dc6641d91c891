use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use log::info;
use serde::Deserialize;

use crate::models::{
    day_plan::DayPlanOption,
    trip::{empty_day_plans, DayPlan},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDaysRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRequest {
    pub day: DayPlan,
    pub option: DayPlanOption,
}

/*
    /api/trips/days
*/
pub async fn days(request: web::Json<TripDaysRequest>) -> impl Responder {
    if request.end_date < request.start_date {
        return HttpResponse::BadRequest().body("endDate is before startDate");
    }
    HttpResponse::Ok().json(empty_day_plans(request.start_date, request.end_date))
}

/*
    /api/trips/days/accept
*/
pub async fn accept(request: web::Json<AcceptRequest>) -> impl Responder {
    let AcceptRequest { mut day, option } = request.into_inner();

    info!("Accepting a {}-block plan for {}", option.len(), day.date);
    day.accept(option);
    HttpResponse::Ok().json(day)
}
