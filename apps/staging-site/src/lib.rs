//! # TechCorp Staging Site ライブラリ
//!
//! phpinfo() 相当の診断ページが放置されたステージング環境。フラグ 6 を配置する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`]: State の初期化とルーター構築
//! - [`config`]: 環境変数からの設定読み込み
//! - [`diagnostics`]: 診断ページに載る環境情報
//! - [`error`]: エラー定義
//! - [`handler`]: HTTP ハンドラ
//! - [`pages`]: 埋め込みテンプレート

pub mod app_builder;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod handler;
pub mod pages;

/// すべてのレスポンスに付与するヘッダー
pub const STAGING_SITE_HEADERS: techcorp_shared::response_headers::StaticHeaders = &[
    ("X-Environment", "staging"),
    ("X-TechCorp-Version", "2.1.4-staging"),
    ("X-Server-Type", "staging-web-01"),
    ("X-Debug-Info", "enabled"),
];
