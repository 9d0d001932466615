//! # リポジトリ実装
//!
//! Main Site が参照するテーブルはどちらも読み取り専用。

pub mod service_offering_repository;
pub mod user_repository;

pub use service_offering_repository::{ServiceOfferingRepository, SqliteServiceOfferingRepository};
pub use user_repository::{SqliteUserRepository, UserRepository};
