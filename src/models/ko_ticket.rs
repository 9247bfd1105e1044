use crate::entities::ko_ticket_entity as ko_tickets;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KoTicketResponse {
    pub id: i64,
    pub owner: i64,
    pub purchase_time: DateTime<Utc>,
    pub is_scratched: bool,
    pub prize_amount: Option<i64>,
    pub scratch_date: Option<DateTime<Utc>>,
    pub price: i64,
}

impl From<ko_tickets::Model> for KoTicketResponse {
    fn from(model: ko_tickets::Model) -> Self {
        Self {
            id: model.id,
            owner: model.owner,
            purchase_time: model.purchase_time,
            is_scratched: model.is_scratched,
            prize_amount: model.prize_amount,
            scratch_date: model.scratch_date,
            price: model.price,
        }
    }
}

/// Outcome of a scratch attempt. A ticket pays out exactly once; once every
/// card is scratched the endpoint keeps answering with already_scratched.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScratchResponse {
    pub ticket: Option<KoTicketResponse>,
    pub prize_amount: Option<i64>,
    pub already_scratched: bool,
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestScratchQuery {
    pub user_id: i64,
}
