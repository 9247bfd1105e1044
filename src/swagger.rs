use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{LotteryStatus, TransactionStatus, TransactionType};
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::user::setup_user_lookup,
        handlers::user::setup_user,
        handlers::user::change_avatar,
        handlers::lottery::lottery_status,
        handlers::lottery::lottery_history,
        handlers::lottery::user_tickets,
        handlers::ko_ticket::ko_tickets,
        handlers::stats::stats,
        handlers::webhook::frame_webhook,
        handlers::diagnostic::test_scratch,
        handlers::diagnostic::test_config,
        handlers::diagnostic::test_rpc,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            SetupUserRequest,
            ChangeAvatarRequest,
            UserResponse,
            LotteryStatus,
            LotteryResponse,
            Countdown,
            LotteryStatusResponse,
            PaginatedLotteryResponse,
            TicketResponse,
            KoTicketResponse,
            ScratchResponse,
            TransactionType,
            TransactionStatus,
            TransactionResponse,
            StatsResponse,
            ChainInfo,
            WalletConfigResponse,
            TestRpcResponse,
            FrameEvent,
            WebhookAck,
            ApiError,
        )
    ),
    tags(
        (name = "auth", description = "Authentication API"),
        (name = "user", description = "User management API"),
        (name = "lottery", description = "Lottery status and history API"),
        (name = "ko_ticket", description = "Scratch card API"),
        (name = "stats", description = "Aggregate statistics API"),
        (name = "webhook", description = "Farcaster frame webhook"),
        (name = "diagnostic", description = "Diagnostic scaffolding (non-production)"),
    ),
    info(
        title = "KoquiFI Backend API",
        version = "1.0.0",
        description = "KoquiFI lottery backend REST API documentation"
    ),
    servers(
        (url = "/api", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
