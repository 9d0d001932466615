//! # Main Site 設定
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MAIN_SITE_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `MAIN_SITE_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `MAIN_SITE_DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite://database.db?mode=rwc`） |
//! | `MAIN_SITE_CONTENT_DIR` | No | 静的コンテンツのディレクトリ（デフォルト: クレート直下の `content/`） |

use std::{env, path::PathBuf};

use techcorp_shared::{ConfigError, ServerConfig};

const ENV_PREFIX: &str = "MAIN_SITE";

pub const DEFAULT_PORT: u16 = 5000;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";

/// クレート直下の `content/`
pub const DEFAULT_CONTENT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/content");

/// Main Site の設定
#[derive(Debug, Clone)]
pub struct MainSiteConfig {
    pub server:       ServerConfig,
    /// SQLite 接続 URL
    pub database_url: String,
    /// 静的コンテンツのルート
    pub content_dir:  PathBuf,
}

impl MainSiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server:       ServerConfig::from_env(ENV_PREFIX, DEFAULT_PORT)?,
            database_url: env::var("MAIN_SITE_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            content_dir:  env::var("MAIN_SITE_CONTENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONTENT_DIR)),
        })
    }
}
