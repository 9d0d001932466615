//! # UserRepository
//!
//! ユーザー一覧の取得を担当する。

use async_trait::async_trait;
use sqlx::SqlitePool;
use techcorp_domain::user::{Role, User, UserId};

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 全ユーザーを ID 昇順で取得
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id:       i64,
    username: String,
    email:    String,
    role:     String,
}

impl TryFrom<UserRow> for User {
    type Error = InfraError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).map_err(|e| InfraError::invalid_data(e.to_string()))?;
        Ok(User::from_db(UserId::new(row.id), row.username, row.email, role))
    }
}

/// SQLite 実装の UserRepository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let rows: Vec<UserRow> =
            sqlx::query_as("SELECT id, username, email, role FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(User::try_from).collect()
    }
}
