use crate::entities::{
    LotteryStatus, TransactionType, ko_ticket_entity as ko_tickets, lottery_entity as lotteries,
    ticket_entity as tickets, transaction_entity as transactions, user_entity as users,
};
use crate::error::AppResult;
use crate::models::StatsResponse;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QuerySelect,
};

#[derive(Clone)]
pub struct StatsService {
    pool: DatabaseConnection,
}

#[derive(Debug, FromQueryResult)]
struct SumRow {
    total: i64,
}

impl StatsService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Dashboard aggregates. Every value degrades to 0 on an empty
    /// database instead of erroring out.
    pub async fn overview(&self) -> AppResult<StatsResponse> {
        let total_users = users::Entity::find().count(&self.pool).await? as i64;
        let total_tickets_sold = tickets::Entity::find().count(&self.pool).await? as i64;
        let total_ko_tickets = ko_tickets::Entity::find().count(&self.pool).await? as i64;
        let scratched_ko_tickets = ko_tickets::Entity::find()
            .filter(ko_tickets::Column::IsScratched.eq(true))
            .count(&self.pool)
            .await? as i64;
        let total_transactions = transactions::Entity::find().count(&self.pool).await? as i64;

        let active_lottery_pool = lotteries::Entity::find()
            .filter(lotteries::Column::Status.eq(LotteryStatus::Active))
            .one(&self.pool)
            .await?
            .map(|l| l.total_pool)
            .unwrap_or(0);

        // CAST keeps the sum decoding as i64 on both Postgres and SQLite
        let total_koki_awarded = transactions::Entity::find()
            .select_only()
            .column_as(
                Expr::cust("CAST(COALESCE(SUM(amount), 0) AS BIGINT)"),
                "total",
            )
            .filter(transactions::Column::TxType.is_in([
                TransactionType::ScratchPrize,
                TransactionType::LotteryPrize,
            ]))
            .into_model::<SumRow>()
            .one(&self.pool)
            .await?
            .map(|row| row.total)
            .unwrap_or(0);

        Ok(StatsResponse {
            total_users,
            total_tickets_sold,
            total_ko_tickets,
            scratched_ko_tickets,
            active_lottery_pool,
            total_koki_awarded,
            total_transactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TransactionType;
    use crate::services::TransactionService;
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
    async fn test_overview_is_all_zero_on_empty_database() {
        let pool = setup_pool().await;
        let stats = StatsService::new(pool).overview().await.unwrap();

        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.total_tickets_sold, 0);
        assert_eq!(stats.total_ko_tickets, 0);
        assert_eq!(stats.scratched_ko_tickets, 0);
        assert_eq!(stats.active_lottery_pool, 0);
        assert_eq!(stats.total_koki_awarded, 0);
        assert_eq!(stats.total_transactions, 0);
    }

    #[tokio::test]
    async fn test_overview_counts_awarded_koki() {
        let pool = setup_pool().await;
        let transaction_service = TransactionService::new(pool.clone());

        transaction_service
            .record(1, TransactionType::ScratchPrize, 150, "Scratch prize")
            .await
            .unwrap();
        transaction_service
            .record(1, TransactionType::TicketPurchase, -10, "Ticket")
            .await
            .unwrap();

        let stats = StatsService::new(pool).overview().await.unwrap();
        assert_eq!(stats.total_transactions, 2);
        // purchases do not count as awarded KOKI
        assert_eq!(stats.total_koki_awarded, 150);
    }
}
