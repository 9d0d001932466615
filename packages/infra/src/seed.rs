//! # シードデータ投入
//!
//! 起動時に一度だけ呼ばれる。テーブルが空のときだけ投入するので、
//! 再起動しても行は増えない。

use sqlx::SqlitePool;
use techcorp_domain::{service_offering::SEED_SERVICE_OFFERINGS, user::SEED_USERS};

use crate::error::InfraError;

/// 投入結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub users_inserted:    usize,
    pub services_inserted: usize,
}

/// テーブルが空ならシードデータを投入する
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedReport, InfraError> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    let (user_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;
    if user_count == 0 {
        for user in SEED_USERS {
            sqlx::query("INSERT INTO users (username, email, role) VALUES (?, ?, ?)")
                .bind(user.username)
                .bind(user.email)
                .bind(user.role.as_str())
                .execute(&mut *tx)
                .await?;
            report.users_inserted += 1;
        }
    }

    let (service_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM services")
        .fetch_one(&mut *tx)
        .await?;
    if service_count == 0 {
        for service in SEED_SERVICE_OFFERINGS {
            sqlx::query("INSERT INTO services (name, description) VALUES (?, ?)")
                .bind(service.name)
                .bind(service.description)
                .execute(&mut *tx)
                .await?;
            report.services_inserted += 1;
        }
    }

    tx.commit().await?;

    tracing::debug!(
        users_inserted = report.users_inserted,
        services_inserted = report.services_inserted,
        "シードデータを確認しました"
    );

    Ok(report)
}
