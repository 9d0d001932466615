//! # Dev Site 設定
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DEV_SITE_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `DEV_SITE_PORT` | No | ポート番号（デフォルト: `5001`） |

use techcorp_shared::{ConfigError, ServerConfig};

const ENV_PREFIX: &str = "DEV_SITE";

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct DevSiteConfig {
    pub server: ServerConfig,
}

impl DevSiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(ENV_PREFIX, DEFAULT_PORT)?,
        })
    }
}
