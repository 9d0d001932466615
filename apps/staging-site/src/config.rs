//! # Staging Site 設定
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `STAGING_SITE_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `STAGING_SITE_PORT` | No | ポート番号（デフォルト: `5002`） |

use techcorp_shared::{ConfigError, ServerConfig};

const ENV_PREFIX: &str = "STAGING_SITE";

pub const DEFAULT_PORT: u16 = 5002;

#[derive(Debug, Clone)]
pub struct StagingSiteConfig {
    pub server: ServerConfig,
}

impl StagingSiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(ENV_PREFIX, DEFAULT_PORT)?,
        })
    }
}
