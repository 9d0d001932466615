//! # SQLite データベース接続管理
//!
//! 接続 URL の例:
//!
//! - `sqlite://database.db?mode=rwc` - ファイル（なければ作成）
//! - `sqlite::memory:` - インメモリ（テスト用）
//!
//! ```rust,ignore
//! let pool = db::create_pool("sqlite://database.db?mode=rwc").await?;
//! db::run_migrations(&pool).await?;
//! ```

use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use crate::error::InfraError;

/// SQLite 接続プールを作成する
///
/// インメモリ DB は接続ごとに別の DB になるため、接続数を 1 に固定する。
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, InfraError> {
    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        5
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// マイグレーションを適用する
///
/// 適用済みのものはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
