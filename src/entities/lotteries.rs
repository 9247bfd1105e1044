use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "snake_case")]
pub enum LotteryStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl std::fmt::Display for LotteryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LotteryStatus::Active => write!(f, "active"),
            LotteryStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Weekly lottery round.
/// winning_numbers and winners stay empty JSON arrays: no draw engine
/// populates them, the columns exist for the frontend contract only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lotteries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub status: LotteryStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Ticket price in KOKI
    pub ticket_price: i64,
    /// Pool total in KOKI
    pub total_pool: i64,
    pub winning_numbers: Json,
    pub winners: Json,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    pub fn is_active(&self) -> bool {
        self.status == LotteryStatus::Active
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_date
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
