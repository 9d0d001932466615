//! # Admin Portal 設定
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ADMIN_PORTAL_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `ADMIN_PORTAL_PORT` | No | ポート番号（デフォルト: `5003`） |

use techcorp_shared::{ConfigError, ServerConfig};

/// 環境変数のプレフィックス
const ENV_PREFIX: &str = "ADMIN_PORTAL";

/// 未設定時のポート番号
pub const DEFAULT_PORT: u16 = 5003;

/// Admin Portal の設定
#[derive(Debug, Clone)]
pub struct AdminPortalConfig {
    pub server: ServerConfig,
}

impl AdminPortalConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(ENV_PREFIX, DEFAULT_PORT)?,
        })
    }
}
