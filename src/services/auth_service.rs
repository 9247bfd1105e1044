use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, LoginResponse};
use crate::utils::{normalize_email, verify_password};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Email/password login. The response carries the user with columns
    /// remapped to camelCase and without any password material.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::ValidationError(
                "Email and password are required".to_string(),
            ));
        }

        let user = users::Entity::find()
            .filter(users::Column::Email.eq(normalize_email(&request.email)))
            .one(&self.pool)
            .await?
            // same message for unknown email and wrong password
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        Ok(LoginResponse {
            user: user.into(),
            message: "Login successful".to_string(),
        })
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

    async fn create_user(pool: &DatabaseConnection) {
        UserService::new(pool.clone())
            .setup_user(SetupUserRequest {
                fid: None,
                username: "koqui".to_string(),
                email: "koqui@example.com".to_string(),
                password: "Password123".to_string(),
                avatar_url: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_returns_mapped_user_without_password() {
        let pool = setup_pool().await;
        create_user(&pool).await;
        let service = AuthService::new(pool);

        let response = service
            .login(LoginRequest {
                email: "Koqui@Example.com".to_string(),
                password: "Password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.user.email, "koqui@example.com");
        assert_eq!(response.message, "Login successful");

        let json = serde_json::to_value(&response).unwrap();
        let user = json.get("user").unwrap().as_object().unwrap();
        assert!(user.contains_key("ticketsCount"));
        assert!(user.contains_key("joinedAt"));
        assert!(!user.contains_key("password"));
        assert!(!user.contains_key("passwordHash"));
        assert!(!user.contains_key("password_hash"));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_auth_error() {
        let pool = setup_pool().await;
        create_user(&pool).await;
        let service = AuthService::new(pool);

        let result = service
            .login(LoginRequest {
                email: "koqui@example.com".to_string(),
                password: "WrongPassword1".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::AuthError(_))));

        let unknown = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "Password123".to_string(),
            })
            .await;
        assert!(matches!(unknown, Err(AppError::AuthError(_))));
    }

    #[tokio::test]
    async fn test_login_missing_fields_is_validation_error() {
        let pool = setup_pool().await;
        let service = AuthService::new(pool);

        let result = service
            .login(LoginRequest {
                email: "".to_string(),
                password: "Password123".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
