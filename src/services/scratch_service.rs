use crate::entities::{TransactionType, ko_ticket_entity as ko_tickets, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::{KoTicketResponse, ScratchResponse};
use crate::services::TransactionService;
use crate::utils::random_scratch_prize;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct ScratchService {
    pool: DatabaseConnection,
    transaction_service: TransactionService,
}

impl ScratchService {
    pub fn new(pool: DatabaseConnection, transaction_service: TransactionService) -> Self {
        Self {
            pool,
            transaction_service,
        }
    }

    /// Scratch the user's oldest unscratched card:
    /// 1. pick the first unscratched KoTicket
    /// 2. assign a random KOKI prize, mark it scratched
    /// 3. credit the balance and append a ledger entry
    /// The three writes share one database transaction, so a card pays out
    /// exactly once. Once every card is scratched the call keeps answering
    /// with already_scratched instead of paying again.
    pub async fn scratch_next(&self, user_id: i64) -> AppResult<ScratchResponse> {
        let txn = self.pool.begin().await?;

        let next = ko_tickets::Entity::find()
            .filter(ko_tickets::Column::Owner.eq(user_id))
            .filter(ko_tickets::Column::IsScratched.eq(false))
            .order_by_asc(ko_tickets::Column::Id)
            .one(&txn)
            .await?;

        let Some(ticket) = next else {
            let owned = ko_tickets::Entity::find()
                .filter(ko_tickets::Column::Owner.eq(user_id))
                .count(&txn)
                .await?;
            txn.commit().await?;

            if owned == 0 {
                return Err(AppError::NotFound(
                    "No scratch cards for this user".to_string(),
                ));
            }
            return Ok(ScratchResponse {
                ticket: None,
                prize_amount: None,
                already_scratched: true,
                message: "All scratch cards are already scratched".to_string(),
            });
        };

        let prize = random_scratch_prize();
        let now = Utc::now();

        let mut am = ticket.into_active_model();
        am.is_scratched = Set(true);
        am.prize_amount = Set(Some(prize));
        am.scratch_date = Set(Some(now));
        let updated = am.update(&txn).await?;

        // atomic balance credit; missing user rolls the whole scratch back
        let credit = users::Entity::update_many()
            .col_expr(
                users::Column::Balance,
                Expr::col(users::Column::Balance).add(prize),
            )
            .col_expr(users::Column::UpdatedAt, Expr::value(now))
            .filter(users::Column::Id.eq(user_id))
            .exec(&txn)
            .await?;
        if credit.rows_affected != 1 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        self.transaction_service
            .record_on(
                &txn,
                user_id,
                TransactionType::ScratchPrize,
                prize,
                &format!("Scratch card #{} prize", updated.id),
            )
            .await?;

        txn.commit().await?;

        Ok(ScratchResponse {
            ticket: Some(updated.into()),
            prize_amount: Some(prize),
            already_scratched: false,
            message: "Scratch successful".to_string(),
        })
    }

    pub async fn list_for_user(&self, user_id: i64) -> AppResult<Vec<KoTicketResponse>> {
        let items = ko_tickets::Entity::find()
            .filter(ko_tickets::Column::Owner.eq(user_id))
            .order_by_desc(ko_tickets::Column::PurchaseTime)
            .all(&self.pool)
            .await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetupUserRequest;
    use crate::services::UserService;
    use migration::MigratorTrait;
    use sea_orm::{ConnectOptions, Database};

    async fn setup_pool() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);
        let pool = Database::connect(options).await.unwrap();
        migration::Migrator::up(&pool, None).await.unwrap();
        pool
    }

    async fn create_user(pool: &DatabaseConnection) -> i64 {
        UserService::new(pool.clone())
            .setup_user(SetupUserRequest {
                fid: None,
                username: "koqui".to_string(),
                email: "koqui@example.com".to_string(),
                password: "Password123".to_string(),
                avatar_url: None,
            })
            .await
            .unwrap()
            .id
    }

    async fn grant_card(pool: &DatabaseConnection, owner: i64) -> i64 {
        ko_tickets::ActiveModel {
            owner: Set(owner),
            purchase_time: Set(Utc::now()),
            is_scratched: Set(false),
            prize_amount: Set(None),
            scratch_date: Set(None),
            price: Set(5),
            ..Default::default()
        }
        .insert(pool)
        .await
        .unwrap()
        .id
    }

    fn service(pool: &DatabaseConnection) -> ScratchService {
        ScratchService::new(pool.clone(), TransactionService::new(pool.clone()))
    }

    #[tokio::test]
    async fn test_scratch_pays_out_exactly_once() {
        let pool = setup_pool().await;
        let user_id = create_user(&pool).await;
        let card_id = grant_card(&pool, user_id).await;
        let service = service(&pool);

        let first = service.scratch_next(user_id).await.unwrap();
        assert!(!first.already_scratched);
        let prize = first.prize_amount.unwrap();
        assert!(prize > 0);
        let ticket = first.ticket.unwrap();
        assert_eq!(ticket.id, card_id);
        assert!(ticket.is_scratched);
        assert!(ticket.scratch_date.is_some());

        // balance credited and ledger entry written
        let user = users::Entity::find_by_id(user_id)
            .one(&pool)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.balance, prize);

        let ledger = TransactionService::new(pool.clone())
            .recent_for_user(user_id, 10)
            .await
            .unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].amount, prize);

        // every card gone: no second payout
        let second = service.scratch_next(user_id).await.unwrap();
        assert!(second.already_scratched);
        assert!(second.prize_amount.is_none());

        let user = users::Entity::find_by_id(user_id)
            .one(&pool)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.balance, prize);
    }

    #[tokio::test]
    async fn test_scratch_consumes_cards_oldest_first() {
        let pool = setup_pool().await;
        let user_id = create_user(&pool).await;
        let first_card = grant_card(&pool, user_id).await;
        let second_card = grant_card(&pool, user_id).await;
        let service = service(&pool);

        let first = service.scratch_next(user_id).await.unwrap();
        assert_eq!(first.ticket.unwrap().id, first_card);

        let second = service.scratch_next(user_id).await.unwrap();
        assert_eq!(second.ticket.unwrap().id, second_card);

        let third = service.scratch_next(user_id).await.unwrap();
        assert!(third.already_scratched);
    }

    #[tokio::test]
    async fn test_scratch_without_cards_is_not_found() {
        let pool = setup_pool().await;
        let user_id = create_user(&pool).await;
        let service = service(&pool);

        let result = service.scratch_next(user_id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
