use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregates for the frontend dashboard. Every field is zero on an empty
/// database, never an error.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_tickets_sold: i64,
    pub total_ko_tickets: i64,
    pub scratched_ko_tickets: i64,
    pub active_lottery_pool: i64,
    pub total_koki_awarded: i64,
    pub total_transactions: i64,
}
