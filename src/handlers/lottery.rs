use crate::models::*;
use crate::services::LotteryService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/lottery-status",
    tag = "lottery",
    responses(
        (status = 200, description = "Active lottery with countdown", body = LotteryStatusResponse)
    )
)]
/// The single active lottery plus a countdown to its end date. Lazily
/// opens a round when none is active; repeated calls return the same round.
pub async fn lottery_status(service: web::Data<LotteryService>) -> Result<HttpResponse> {
    match service.status().await {
        Ok(status) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": status }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/lottery-history",
    tag = "lottery",
    params(
        ("page" = Option<u32>, Query, description = "Page (default 1)"),
        ("limit" = Option<u32>, Query, description = "Page size (default 20)")
    ),
    responses(
        (status = 200, description = "Completed lotteries, newest first", body = PaginatedLotteryResponse)
    )
)]
pub async fn lottery_history(
    service: web::Data<LotteryService>,
    query: web::Query<LotteryHistoryQuery>,
) -> Result<HttpResponse> {
    match service.history(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": page }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/user-tickets",
    tag = "lottery",
    params(
        ("userId" = i64, Query, description = "Owning user id")
    ),
    responses(
        (status = 200, description = "Tickets owned by the user", body = [TicketResponse])
    )
)]
pub async fn user_tickets(
    service: web::Data<LotteryService>,
    query: web::Query<UserTicketsQuery>,
) -> Result<HttpResponse> {
    match service.user_tickets(query.user_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": items }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn lottery_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/lottery-status", web::get().to(lottery_status))
        .route("/lottery-history", web::get().to(lottery_history))
        .route("/user-tickets", web::get().to(user_tickets));
}
