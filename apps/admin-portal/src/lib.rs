//! # TechCorp Admin Portal ライブラリ
//!
//! 弱い Basic 認証で保護された管理ポータル。演習のフラグ 7 を配置する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`]: State の初期化とルーター構築
//! - [`config`]: 環境変数からの設定読み込み
//! - [`error`]: エラー定義と HTTP レスポンスへの変換
//! - [`handler`]: HTTP ハンドラ
//! - [`middleware`]: Basic 認証ミドルウェア（アクセスゲート）
//! - [`pages`]: 埋め込みテンプレート

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod pages;

/// すべてのレスポンスに付与するヘッダー
pub const ADMIN_PORTAL_HEADERS: techcorp_shared::response_headers::StaticHeaders = &[
    ("X-Portal-Type", "admin"),
    ("X-Auth-Method", "basic"),
    ("X-TechCorp-Version", "2.1.4"),
    ("X-Admin-Portal", "true"),
];
