use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::{ChangeAvatarRequest, SetupUserQuery, SetupUserRequest, UserResponse};
use crate::utils::{
    default_avatar_url, hash_password, normalize_email, validate_email, validate_password,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, user_id: i64) -> AppResult<users::Model> {
        users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<users::Model>> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(normalize_email(email)))
            .one(&self.pool)
            .await?;
        Ok(user)
    }

    /// GET /setup-user lookup: fid takes precedence over email.
    pub async fn lookup(&self, query: &SetupUserQuery) -> AppResult<UserResponse> {
        if let Some(fid) = query.fid {
            let user = users::Entity::find()
                .filter(users::Column::Fid.eq(fid))
                .one(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
            return Ok(user.into());
        }

        if let Some(email) = &query.email {
            let user = self
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
            return Ok(user.into());
        }

        Err(AppError::ValidationError(
            "Either fid or email is required".to_string(),
        ))
    }

    /// POST /setup-user: create the account, or return the existing one when
    /// the email is already registered (idempotent on email).
    pub async fn setup_user(&self, request: SetupUserRequest) -> AppResult<UserResponse> {
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        if request.username.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Username must not be empty".to_string(),
            ));
        }

        let email = normalize_email(&request.email);

        if let Some(existing) = self.find_by_email(&email).await? {
            return Ok(existing.into());
        }

        let password_hash = hash_password(&request.password)?;
        let avatar_url = request
            .avatar_url
            .clone()
            .unwrap_or_else(|| default_avatar_url(&email));
        let now = Utc::now();

        let user = users::ActiveModel {
            fid: Set(request.fid),
            username: Set(request.username.trim().to_string()),
            email: Set(email),
            password_hash: Set(password_hash),
            avatar_url: Set(Some(avatar_url)),
            balance: Set(0),
            tickets_count: Set(0),
            total_spent: Set(0),
            is_verified: Set(false),
            joined_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(user.into())
    }

    pub async fn change_avatar(&self, request: ChangeAvatarRequest) -> AppResult<UserResponse> {
        if request.avatar_url.trim().is_empty() {
            return Err(AppError::ValidationError(
                "avatarUrl must not be empty".to_string(),
            ));
        }

        let user = self.find_by_id(request.user_id).await?;

        let mut am = user.into_active_model();
        am.avatar_url = Set(Some(request.avatar_url.trim().to_string()));
        am.updated_at = Set(Some(Utc::now()));
        let updated = am.update(&self.pool).await?;

        Ok(updated.into())
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

    fn setup_request() -> SetupUserRequest {
        SetupUserRequest {
            fid: Some(4242),
            username: "koqui".to_string(),
            email: "Koqui@Example.com".to_string(),
            password: "Password123".to_string(),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_setup_user_is_idempotent_on_email() {
        let pool = setup_pool().await;
        let service = UserService::new(pool);

        let first = service.setup_user(setup_request()).await.unwrap();
        let second = service.setup_user(setup_request()).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.email, "koqui@example.com");
        // default avatar assigned from the email hash
        assert!(first.avatar_url.unwrap().contains("gravatar.com"));
    }

    #[tokio::test]
    async fn test_lookup_by_fid_and_email() {
        let pool = setup_pool().await;
        let service = UserService::new(pool);
        let created = service.setup_user(setup_request()).await.unwrap();

        let by_fid = service
            .lookup(&SetupUserQuery {
                fid: Some(4242),
                email: None,
            })
            .await
            .unwrap();
        assert_eq!(by_fid.id, created.id);

        let by_email = service
            .lookup(&SetupUserQuery {
                fid: None,
                email: Some("koqui@example.com".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(by_email.id, created.id);

        let missing = service
            .lookup(&SetupUserQuery {
                fid: Some(999),
                email: None,
            })
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let no_params = service
            .lookup(&SetupUserQuery {
                fid: None,
                email: None,
            })
            .await;
        assert!(matches!(no_params, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_change_avatar() {
        let pool = setup_pool().await;
        let service = UserService::new(pool);
        let user = service.setup_user(setup_request()).await.unwrap();

        let updated = service
            .change_avatar(ChangeAvatarRequest {
                user_id: user.id,
                avatar_url: "https://example.com/new.png".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            updated.avatar_url.as_deref(),
            Some("https://example.com/new.png")
        );

        let missing = service
            .change_avatar(ChangeAvatarRequest {
                user_id: 9999,
                avatar_url: "https://example.com/new.png".to_string(),
            })
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
