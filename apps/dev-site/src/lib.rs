//! # TechCorp Dev Site ライブラリ
//!
//! デバッグモードのまま公開された開発環境。フラグ 5 を配置する。
//! 設定値・環境変数・ルート一覧を無条件に返す。
//!
//! ## モジュール構成
//!
//! - [`app_builder`]: State の初期化とルーター構築
//! - [`config`]: 環境変数からの設定読み込み
//! - [`error`]: エラー定義と 500 レスポンス
//! - [`handler`]: HTTP ハンドラ
//! - [`pages`]: 埋め込みテンプレート
//! - [`settings`]: 漏洩する開発用設定値

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod pages;
pub mod settings;

/// すべてのレスポンスに付与するヘッダー
pub const DEV_SITE_HEADERS: techcorp_shared::response_headers::StaticHeaders = &[
    ("X-Debug-Mode", "enabled"),
    ("X-Environment", "development"),
    ("X-Flask-Debug", "true"),
    ("X-Developer", "john.dev@techcorp.local"),
    ("X-Internal-IP", "10.0.0.15"),
];
