use crate::entities::{LotteryStatus, lottery_entity as lotteries, ticket_entity as tickets};
use crate::error::AppResult;
use crate::models::{
    Countdown, LotteryHistoryQuery, LotteryResponse, LotteryStatusResponse, PaginatedResponse,
    PaginationParams, TicketResponse,
};
use chrono::{Duration, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

/// Length of a lottery round. A round opens lazily on the first status
/// request after the previous one completes.
const ROUND_DAYS: i64 = 7;
const DEFAULT_TICKET_PRICE: i64 = 10;

#[derive(Clone)]
pub struct LotteryService {
    pool: DatabaseConnection,
}

impl LotteryService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Returns the active lottery, creating one when none exists. Repeated
    /// calls while a round is active return the same row.
    pub async fn ensure_active(&self) -> AppResult<lotteries::Model> {
        if let Some(active) = lotteries::Entity::find()
            .filter(lotteries::Column::Status.eq(LotteryStatus::Active))
            .order_by_desc(lotteries::Column::Id)
            .one(&self.pool)
            .await?
        {
            return Ok(active);
        }

        let now = Utc::now();
        let lottery = lotteries::ActiveModel {
            status: Set(LotteryStatus::Active),
            start_date: Set(now),
            end_date: Set(now + Duration::days(ROUND_DAYS)),
            ticket_price: Set(DEFAULT_TICKET_PRICE),
            total_pool: Set(0),
            winning_numbers: Set(serde_json::json!([])),
            winners: Set(serde_json::json!([])),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Opened lottery round {} ending {}",
            lottery.id,
            lottery.end_date
        );
        Ok(lottery)
    }

    pub async fn status(&self) -> AppResult<LotteryStatusResponse> {
        let lottery = self.ensure_active().await?;
        let countdown = Countdown::between(Utc::now(), lottery.end_date);
        Ok(LotteryStatusResponse {
            lottery: lottery.into(),
            countdown,
        })
    }

    /// Completed rounds, newest first.
    pub async fn history(
        &self,
        query: &LotteryHistoryQuery,
    ) -> AppResult<PaginatedResponse<LotteryResponse>> {
        let params = PaginationParams::new(query.page, query.limit);

        let base_query =
            lotteries::Entity::find().filter(lotteries::Column::Status.eq(LotteryStatus::Completed));

        let total = base_query.clone().count(&self.pool).await? as i64;

        let items = base_query
            .order_by(lotteries::Column::EndDate, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset() as u64)
            .all(&self.pool)
            .await?;

        Ok(PaginatedResponse::new(
            items.into_iter().map(Into::into).collect(),
            params.get_page(),
            params.get_limit(),
            total,
        ))
    }

    /// The user's tickets for the active lottery, newest first. Tickets from
    /// completed rounds stay out of the list. is_winner is read straight from
    /// the row and nothing ever sets it.
    pub async fn user_tickets(&self, user_id: i64) -> AppResult<Vec<TicketResponse>> {
        let active = self.ensure_active().await?;
        let items = tickets::Entity::find()
            .filter(tickets::Column::Owner.eq(user_id))
            .filter(tickets::Column::LotteryId.eq(active.id))
            .order_by_desc(tickets::Column::PurchaseTime)
            .all(&self.pool)
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    /// Marks rounds past their end date as completed so the next status
    /// request opens a fresh one. No draw is executed.
    pub async fn complete_expired(&self) -> AppResult<u64> {
        let now = Utc::now();
        let result = lotteries::Entity::update_many()
            .col_expr(
                lotteries::Column::Status,
                Expr::value(LotteryStatus::Completed),
            )
            .col_expr(lotteries::Column::UpdatedAt, Expr::value(now))
            .filter(lotteries::Column::Status.eq(LotteryStatus::Active))
            .filter(lotteries::Column::EndDate.lte(now))
            .exec(&self.pool)
            .await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use sea_orm::{ConnectOptions, Database};

    async fn setup_pool() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);
        let pool = Database::connect(options).await.unwrap();
        migration::Migrator::up(&pool, None).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_status_creates_exactly_one_active_lottery() {
        let pool = setup_pool().await;
        let service = LotteryService::new(pool.clone());

        let first = service.status().await.unwrap();
        let second = service.status().await.unwrap();
        assert_eq!(first.lottery.id, second.lottery.id);
        assert_eq!(first.lottery.status, LotteryStatus::Active);
        assert!(!second.countdown.expired);

        let active_count = lotteries::Entity::find()
            .filter(lotteries::Column::Status.eq(LotteryStatus::Active))
            .count(&pool)
            .await
            .unwrap();
        assert_eq!(active_count, 1);
    }

    #[tokio::test]
    async fn test_new_round_stays_empty() {
        let pool = setup_pool().await;
        let service = LotteryService::new(pool);

        let status = service.status().await.unwrap();
        assert_eq!(status.lottery.total_pool, 0);
        assert_eq!(status.lottery.winning_numbers, serde_json::json!([]));
        assert_eq!(status.lottery.winners, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_complete_expired_opens_fresh_round() {
        let pool = setup_pool().await;
        let service = LotteryService::new(pool.clone());

        // backdate a round so it is already over
        let now = Utc::now();
        let stale = lotteries::ActiveModel {
            status: Set(LotteryStatus::Active),
            start_date: Set(now - Duration::days(8)),
            end_date: Set(now - Duration::days(1)),
            ticket_price: Set(DEFAULT_TICKET_PRICE),
            total_pool: Set(0),
            winning_numbers: Set(serde_json::json!([])),
            winners: Set(serde_json::json!([])),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&pool)
        .await
        .unwrap();

        let completed = service.complete_expired().await.unwrap();
        assert_eq!(completed, 1);

        let next = service.status().await.unwrap();
        assert_ne!(next.lottery.id, stale.id);

        let history = service
            .history(&LotteryHistoryQuery {
                page: None,
                limit: None,
            })
            .await
            .unwrap();
        assert_eq!(history.total, 1);
        assert_eq!(history.data[0].id, stale.id);
    }

    #[tokio::test]
    async fn test_user_tickets_empty_without_purchases() {
        let pool = setup_pool().await;
        let service = LotteryService::new(pool);
        let items = service.user_tickets(1).await.unwrap();
        assert!(items.is_empty());
    }

    async fn buy_ticket(pool: &DatabaseConnection, lottery_id: i64, owner: i64) -> i64 {
        tickets::ActiveModel {
            lottery_id: Set(lottery_id),
            number: Set(7),
            owner: Set(owner),
            purchase_time: Set(Utc::now()),
            is_winner: Set(false),
            price: Set(DEFAULT_TICKET_PRICE),
            ..Default::default()
        }
        .insert(pool)
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_user_tickets_scoped_to_active_lottery() {
        let pool = setup_pool().await;
        let service = LotteryService::new(pool.clone());

        let now = Utc::now();
        let completed = lotteries::ActiveModel {
            status: Set(LotteryStatus::Completed),
            start_date: Set(now - Duration::days(14)),
            end_date: Set(now - Duration::days(7)),
            ticket_price: Set(DEFAULT_TICKET_PRICE),
            total_pool: Set(0),
            winning_numbers: Set(serde_json::json!([])),
            winners: Set(serde_json::json!([])),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&pool)
        .await
        .unwrap();
        let active = service.ensure_active().await.unwrap();

        buy_ticket(&pool, completed.id, 1).await;
        let active_ticket = buy_ticket(&pool, active.id, 1).await;

        let items = service.user_tickets(1).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, active_ticket);
        assert_eq!(items[0].lottery_id, active.id);
    }
}
