//! # サーバー設定
//!
//! 各サービスのバインドアドレスとポート番号を環境変数から読み込む。
//!
//! 環境変数名はサービスごとのプレフィックスで区別する
//! （例: `ADMIN_PORTAL_HOST`, `ADMIN_PORTAL_PORT`）。
//! 未設定の場合は各サービス固有の固定値を使うため、環境変数なしでも起動できる。

use std::env;

use thiserror::Error;

/// 未設定時のバインドアドレス（ローカルからのみ到達可能）
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// ポート番号として解釈できない値
    #[error("{name} は有効なポート番号である必要があります: {value:?}")]
    InvalidPort { name: String, value: String },
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ServerConfig {
    /// `{prefix}_HOST` / `{prefix}_PORT` から設定を読み込む
    pub fn from_env(prefix: &str, default_port: u16) -> Result<Self, ConfigError> {
        let host_var = format!("{prefix}_HOST");
        let port_var = format!("{prefix}_PORT");

        Self::from_values(
            env::var(&host_var).ok(),
            &port_var,
            env::var(&port_var).ok(),
            default_port,
        )
    }

    /// 環境変数の値から設定を組み立てる
    ///
    /// テストから環境変数を汚さずに検証できるよう分離している。
    pub fn from_values(
        host: Option<String>,
        port_var: &str,
        port: Option<String>,
        default_port: u16,
    ) -> Result<Self, ConfigError> {
        let port = match port {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: port_var.to_string(),
                value,
            })?,
            None => default_port,
        };

        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// `TcpListener::bind` に渡すバインド先
    ///
    /// ホストは IP リテラルでもホスト名（`localhost` など）でもよく、名前解決は bind 時に行う。
    pub fn bind_target(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}
