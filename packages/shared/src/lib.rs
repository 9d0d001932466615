//! # TechCorp 共有ユーティリティ
//!
//! 4 つの演習用サービス（Main Site / Dev Site / Staging Site / Admin Portal）で
//! 共通して使うユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - サービス間に実行時の依存はない。ここに置くのは起動・ログ・ヘッダー装飾などの横断的関心事のみ
//! - ビジネスロジック（フラグ、認証ゲート）は `techcorp-domain` に置く
//! - axum には依存しない。HTTP 層の部品は `http` / `tower` の型で表現する

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod health;
pub mod observability;
#[cfg(feature = "templates")]
pub mod page_renderer;
#[cfg(feature = "response-headers")]
pub mod response_headers;
pub mod server_config;

pub use health::HealthResponse;
pub use server_config::{ConfigError, ServerConfig};
