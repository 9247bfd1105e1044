use crate::entities::{TransactionStatus, TransactionType, transaction_entity as transactions};
use crate::error::AppResult;
use crate::models::TransactionResponse;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

/// KOKI points ledger (the addKokiPoints counterpart). Every balance change
/// gets a ledger row with a unique reference.
#[derive(Clone)]
pub struct TransactionService {
    pool: DatabaseConnection,
}

impl TransactionService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Append a ledger entry on the given connection. Callers inside a
    /// database transaction pass the open transaction so the entry commits
    /// or rolls back together with the balance update.
    pub async fn record_on<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i64,
        tx_type: TransactionType,
        amount: i64,
        description: &str,
    ) -> AppResult<transactions::Model> {
        let model = transactions::ActiveModel {
            reference: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id),
            tx_type: Set(tx_type),
            amount: Set(amount),
            description: Set(description.to_string()),
            status: Set(TransactionStatus::Completed),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        Ok(model)
    }

    pub async fn record(
        &self,
        user_id: i64,
        tx_type: TransactionType,
        amount: i64,
        description: &str,
    ) -> AppResult<transactions::Model> {
        self.record_on(&self.pool, user_id, tx_type, amount, description)
            .await
    }

    /// Latest ledger entries for a user, newest first.
    pub async fn recent_for_user(
        &self,
        user_id: i64,
        limit: u64,
    ) -> AppResult<Vec<TransactionResponse>> {
        let items = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .all(&self.pool)
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
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
    async fn test_record_and_list() {
        let pool = setup_pool().await;
        let service = TransactionService::new(pool);

        let entry = service
            .record(1, TransactionType::ScratchPrize, 120, "Scratch card prize")
            .await
            .unwrap();
        assert_eq!(entry.amount, 120);
        assert_eq!(entry.status, TransactionStatus::Completed);
        assert!(!entry.reference.is_empty());

        service
            .record(1, TransactionType::TicketPurchase, -10, "Weekly ticket")
            .await
            .unwrap();
        service
            .record(2, TransactionType::Adjustment, 5, "Other user")
            .await
            .unwrap();

        let recent = service.recent_for_user(1, 10).await.unwrap();
        assert_eq!(recent.len(), 2);
        // newest first
        assert_eq!(recent[0].amount, -10);
        assert_eq!(recent[1].amount, 120);
    }
}
