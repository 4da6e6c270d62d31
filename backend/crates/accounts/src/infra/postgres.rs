//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{user::User, user_info::UserInfo};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::UserPassword};
use crate::error::{AccountsError, AccountsResult};
use kernel::id::UserId;

/// PostgreSQL-backed accounts repository
#[derive(Clone)]
pub struct PgAccountsRepository {
    pool: PgPool,
}

impl PgAccountsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAccountsRepository {
    async fn create_with_info(&self, user: &User, info: &UserInfo) -> AccountsResult<()> {
        // users + user_infos commit together or not at all
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_infos (
                user_id,
                name,
                age,
                gender,
                profile_image,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(info.user_id.as_uuid())
        .bind(&info.name)
        .bind(info.age)
        .bind(info.gender.as_str())
        .bind(&info.profile_image)
        .bind(info.created_at)
        .bind(info.updated_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AccountsResult<User> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| AccountsError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
