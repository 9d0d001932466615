//! # TechCorp インフラ層
//!
//! Main Site が使う SQLite データベースへのアクセスを提供する。
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールの作成とマイグレーション
//! - [`seed`] - 初回起動時のシードデータ投入
//! - [`repository`] - ユーザー・提供サービスの読み取りリポジトリ
//! - [`error`] - インフラ層のエラー
//! - `mock` - テスト用インメモリリポジトリ（`test-utils` feature）

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod seed;

pub use error::{InfraError, InfraErrorKind};
