use crate::models::{FrameEvent, KNOWN_FRAME_EVENTS, WebhookAck};
use actix_web::{HttpResponse, Result, web};
use log::{info, warn};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/webhook",
    tag = "webhook",
    request_body = FrameEvent,
    responses(
        (status = 200, description = "Event received and echoed", body = WebhookAck)
    )
)]
/// Farcaster frame webhook. Events are logged and echoed back; no state
/// changes happen here.
pub async fn frame_webhook(payload: web::Json<FrameEvent>) -> Result<HttpResponse> {
    let event = payload.event.clone();

    match event.as_deref() {
        Some(name) if KNOWN_FRAME_EVENTS.contains(&name) => {
            info!("Received frame event: {name} (fid: {:?})", payload.fid);
        }
        Some(name) => {
            warn!("Received unknown frame event: {name}");
        }
        None => {
            warn!("Received frame webhook without an event field");
        }
    }

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": WebhookAck {
            received: true,
            event,
        },
        "echo": payload.into_inner()
    })))
}

pub fn webhook_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhook", web::post().to(frame_webhook));
}
