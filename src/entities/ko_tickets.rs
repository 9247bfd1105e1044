use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Scratch card (KoTicket), distinct from the weekly lottery ticket.
/// Lifecycle: unscratched -> scratched exactly once; prize_amount and
/// scratch_date are set at scratch time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ko_tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning user id
    pub owner: i64,
    pub purchase_time: DateTime<Utc>,
    pub is_scratched: bool,
    /// Prize in KOKI, set when scratched
    pub prize_amount: Option<i64>,
    pub scratch_date: Option<DateTime<Utc>>,
    pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
