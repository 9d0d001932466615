//! # ServiceOfferingRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use techcorp_domain::service_offering::{ServiceOffering, ServiceOfferingId};

use crate::error::InfraError;

/// 提供サービスリポジトリトレイト
#[async_trait]
pub trait ServiceOfferingRepository: Send + Sync {
    /// 全提供サービスを ID 昇順で取得
    async fn find_all(&self) -> Result<Vec<ServiceOffering>, InfraError>;
}

#[derive(sqlx::FromRow)]
struct ServiceOfferingRow {
    id:          i64,
    name:        String,
    description: Option<String>,
}

impl From<ServiceOfferingRow> for ServiceOffering {
    fn from(row: ServiceOfferingRow) -> Self {
        ServiceOffering::from_db(ServiceOfferingId::new(row.id), row.name, row.description)
    }
}

/// SQLite 実装の ServiceOfferingRepository
#[derive(Debug, Clone)]
pub struct SqliteServiceOfferingRepository {
    pool: SqlitePool,
}

impl SqliteServiceOfferingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceOfferingRepository for SqliteServiceOfferingRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<ServiceOffering>, InfraError> {
        let rows: Vec<ServiceOfferingRow> =
            sqlx::query_as("SELECT id, name, description FROM services ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(ServiceOffering::from).collect())
    }
}
