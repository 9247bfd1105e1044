use crate::models::StatsResponse;
use crate::services::StatsService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard aggregates", body = StatsResponse)
    )
)]
/// Aggregate counts and sums; all zeroes on an empty database.
pub async fn stats(service: web::Data<StatsService>) -> Result<HttpResponse> {
    match service.overview().await {
        Ok(overview) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": overview }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn stats_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(stats));
}
