use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Farcaster frame webhook payload. Only the event name is inspected; the
/// rest of the body is accepted as-is and echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FrameEvent {
    pub event: Option<String>,
    pub fid: Option<i64>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

pub const KNOWN_FRAME_EVENTS: [&str; 4] = [
    "frame_added",
    "frame_removed",
    "notifications_enabled",
    "notifications_disabled",
];

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookAck {
    pub received: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}
