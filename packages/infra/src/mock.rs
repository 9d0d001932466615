//! # テスト用モックリポジトリ
//!
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! techcorp-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use techcorp_domain::{
    service_offering::{SEED_SERVICE_OFFERINGS, ServiceOffering, ServiceOfferingId},
    user::{SEED_USERS, User, UserId},
};

use crate::{
    error::InfraError,
    repository::{ServiceOfferingRepository, UserRepository},
};

// ===== MockUserRepository =====

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// シードデータと同じ内容で作る
    pub fn seeded() -> Self {
        let repo = Self::new();
        for (index, user) in SEED_USERS.iter().enumerate() {
            repo.add_user(User::from_db(
                UserId::new(index as i64 + 1),
                user.username.to_string(),
                user.email.to_string(),
                user.role,
            ));
        }
        repo
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

// ===== MockServiceOfferingRepository =====

#[derive(Clone, Default)]
pub struct MockServiceOfferingRepository {
    services: Arc<Mutex<Vec<ServiceOffering>>>,
}

impl MockServiceOfferingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let repo = Self::new();
        for (index, service) in SEED_SERVICE_OFFERINGS.iter().enumerate() {
            repo.add_service(ServiceOffering::from_db(
                ServiceOfferingId::new(index as i64 + 1),
                service.name.to_string(),
                service.description.map(str::to_string),
            ));
        }
        repo
    }

    pub fn add_service(&self, service: ServiceOffering) {
        self.services.lock().unwrap().push(service);
    }
}

#[async_trait]
impl ServiceOfferingRepository for MockServiceOfferingRepository {
    async fn find_all(&self) -> Result<Vec<ServiceOffering>, InfraError> {
        Ok(self.services.lock().unwrap().clone())
    }
}

// ===== FailingRepository =====

/// 常に DB エラーを返すリポジトリ
#[derive(Clone, Copy, Default)]
pub struct FailingRepository;

#[async_trait]
impl UserRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        Err(InfraError::from(sqlx::Error::PoolClosed))
    }
}

#[async_trait]
impl ServiceOfferingRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<ServiceOffering>, InfraError> {
        Err(InfraError::from(sqlx::Error::PoolClosed))
    }
}
