use crate::entities::ticket_entity as tickets;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: i64,
    pub lottery_id: i64,
    pub number: i32,
    pub owner: i64,
    pub purchase_time: DateTime<Utc>,
    /// Never computed by any draw logic; stored and echoed as false.
    pub is_winner: bool,
    pub price: i64,
}

impl From<tickets::Model> for TicketResponse {
    fn from(model: tickets::Model) -> Self {
        Self {
            id: model.id,
            lottery_id: model.lottery_id,
            number: model.number,
            owner: model.owner,
            purchase_time: model.purchase_time,
            is_winner: model.is_winner,
            price: model.price,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserTicketsQuery {
    pub user_id: i64,
}
