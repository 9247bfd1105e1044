//! Diagnostic scaffolding under /test-*. Not part of the production
//! surface; kept for manual checks against a deployed instance.

use crate::config::Config;
use crate::database::{DbPool, backend_name};
use crate::external::BaseRpcClient;
use crate::models::*;
use crate::services::ScratchService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/test-scratch",
    tag = "diagnostic",
    params(
        ("userId" = i64, Query, description = "User whose next card to scratch")
    ),
    responses(
        (status = 200, description = "Scratch outcome", body = ScratchResponse),
        (status = 404, description = "User has no scratch cards")
    )
)]
/// Scratch the user's oldest unscratched card. Pays out exactly once per
/// card; answers with alreadyScratched once every card is revealed.
pub async fn test_scratch(
    service: web::Data<ScratchService>,
    query: web::Query<TestScratchQuery>,
) -> Result<HttpResponse> {
    match service.scratch_next(query.user_id).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(json!({ "success": true, "data": outcome }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/test-config",
    tag = "diagnostic",
    responses(
        (status = 200, description = "Wallet/chain configuration", body = WalletConfigResponse)
    )
)]
pub async fn test_config(
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse> {
    let data = WalletConfigResponse::from_config(&config.wallet, backend_name(&pool));
    Ok(HttpResponse::Ok().json(json!({ "success": true, "data": data })))
}

#[utoipa::path(
    get,
    path = "/test-rpc",
    tag = "diagnostic",
    responses(
        (status = 200, description = "Chain id reported by the Base RPC endpoint", body = TestRpcResponse),
        (status = 502, description = "RPC endpoint unreachable")
    )
)]
pub async fn test_rpc(rpc: web::Data<BaseRpcClient>) -> Result<HttpResponse> {
    match rpc.chain_id().await {
        Ok(chain_id) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": TestRpcResponse {
                rpc_url: rpc.url().to_string(),
                chain_id,
            }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn diagnostic_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/test-scratch", web::get().to(test_scratch))
        .route("/test-config", web::get().to(test_config))
        .route("/test-rpc", web::get().to(test_rpc));
}
