use crate::entities::{TransactionStatus, TransactionType, transaction_entity as transactions};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub reference: String,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: i64,
    pub description: String,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: model.id,
            reference: model.reference,
            user_id: model.user_id,
            tx_type: model.tx_type,
            amount: model.amount,
            description: model.description,
            status: model.status,
            timestamp: model.created_at.unwrap_or_else(Utc::now),
        }
    }
}
