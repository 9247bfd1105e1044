use crate::models::*;
use crate::services::ScratchService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/ko-tickets",
    tag = "ko_ticket",
    params(
        ("userId" = i64, Query, description = "Owning user id")
    ),
    responses(
        (status = 200, description = "Scratch cards owned by the user", body = [KoTicketResponse])
    )
)]
pub async fn ko_tickets(
    service: web::Data<ScratchService>,
    query: web::Query<UserTicketsQuery>,
) -> Result<HttpResponse> {
    match service.list_for_user(query.user_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": items }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn ko_ticket_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/ko-tickets", web::get().to(ko_tickets));
}
