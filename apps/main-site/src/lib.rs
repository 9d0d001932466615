//! # TechCorp Main Site ライブラリ
//!
//! 会社の公開 Web サイト。フラグ 1〜4 を配置する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`]: State の初期化とルーター構築
//! - [`config`]: 環境変数からの設定読み込み
//! - [`error`]: エラー定義と HTTP レスポンスへの変換
//! - [`handler`]: HTTP ハンドラ
//! - [`pages`]: 埋め込みテンプレート
//!
//! ## コンテンツディレクトリ
//!
//! ```text
//! content/
//! ├── public/      robots.txt, sitemap.xml, humans.txt
//! ├── backup/      /backup/ で公開されるバックアップファイル
//! ├── leaked-git/  /.git/ で公開されるリポジトリメタデータ
//! └── static/      /static/ の JS
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod pages;

/// すべてのレスポンスに付与するヘッダー（実際の構成とは異なる偽装バナー）
pub const MAIN_SITE_HEADERS: techcorp_shared::response_headers::StaticHeaders = &[
    ("X-Powered-By", "Flask/3.0.0"),
    ("X-TechCorp-Version", "2.1.4"),
    ("Server", "nginx/1.24.0"),
];
