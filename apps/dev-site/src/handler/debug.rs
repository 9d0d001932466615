//! # デバッグ情報ハンドラ
//!
//! どのエンドポイントも認証なしで内部情報を返す。

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State, response::Html};
use chrono::Utc;
use serde::Serialize;
use techcorp_domain::flag::Flag;
use tera::Context;

use super::DevState;
use crate::{error::DevSiteError, settings::DEV_SETTINGS};

/// `PATH` の表示上限（文字数）
const PATH_DISPLAY_LIMIT: usize = 100;

/// 実行中のバイナリ名とバージョン
const RUNTIME_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// GET /
pub async fn index(State(state): State<Arc<DevState>>) -> Result<Html<String>, DevSiteError> {
    let mut context = Context::new();
    context.insert("flag", Flag::DevSubdomain.value());
    context.insert("runtime_version", RUNTIME_VERSION);
    context.insert("settings", &DEV_SETTINGS);
    context.insert("hint", "Next: Try staging.techcorp.local and admin.techcorp.local");

    Ok(Html(state.renderer.render("index.html", &context)?))
}

#[derive(Debug, Serialize)]
pub struct EnvironmentVariables {
    #[serde(rename = "FLASK_ENV")]
    pub flask_env:   String,
    #[serde(rename = "FLASK_DEBUG")]
    pub flask_debug: String,
    #[serde(rename = "PATH")]
    pub path:        String,
}

#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub runtime_version: &'static str,
    pub platform:        &'static str,
    pub arch:            &'static str,
    pub executable:      String,
}

/// GET /debug のレスポンス
#[derive(Debug, Serialize)]
pub struct DebugResponse {
    pub flag:                  &'static str,
    pub message:               &'static str,
    pub routes:                Vec<&'static str>,
    pub config:                BTreeMap<&'static str, String>,
    pub environment_variables: EnvironmentVariables,
    pub system_info:           SystemInfo,
    pub server_time:           String,
}

/// `PATH` を先頭 100 文字に切り詰め、末尾に `...` を付ける
///
/// 短い値でも `...` は付く。
pub fn truncate_for_display(value: &str) -> String {
    let head: String = value.chars().take(PATH_DISPLAY_LIMIT).collect();
    format!("{head}...")
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// GET /debug
#[tracing::instrument(skip_all)]
pub async fn debug_info(State(state): State<Arc<DevState>>) -> Json<DebugResponse> {
    let executable = std::env::current_exe()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| "N/A".to_string());

    Json(DebugResponse {
        flag: Flag::DevSubdomain.value(),
        message: "Development environment - Debug mode ENABLED",
        routes: state.routes.clone(),
        config: DEV_SETTINGS.as_string_map().into_iter().collect(),
        environment_variables: EnvironmentVariables {
            flask_env:   env_or("FLASK_ENV", "development"),
            flask_debug: env_or("FLASK_DEBUG", "1"),
            path:        truncate_for_display(&env_or("PATH", "N/A")),
        },
        system_info: SystemInfo {
            runtime_version: RUNTIME_VERSION,
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            executable,
        },
        server_time: Utc::now().to_rfc3339(),
    })
}

/// GET /api/status のレスポンス
#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub status:      &'static str,
    pub debug:       bool,
    pub environment: &'static str,
    pub endpoints:   [&'static str; 3],
}

/// GET /api/status
pub async fn api_status() -> Json<ApiStatusResponse> {
    Json(ApiStatusResponse {
        status:      "development",
        debug:       DEV_SETTINGS.debug,
        environment: "dev",
        endpoints:   ["/debug", "/api/status", "/config"],
    })
}

/// `/config` で返す設定項目
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Configuration {
    pub secret_key:    &'static str,
    pub debug:         bool,
    pub database_uri:  &'static str,
    pub allowed_hosts: &'static [&'static str],
    pub admin_email:   &'static str,
    pub staging_url:   &'static str,
    pub admin_portal:  &'static str,
}

/// GET /config のレスポンス
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub flag:          &'static str,
    pub configuration: Configuration,
}

/// GET /config
pub async fn config() -> Json<ConfigResponse> {
    Json(ConfigResponse {
        flag:          Flag::DevSubdomain.value(),
        configuration: Configuration {
            secret_key:    DEV_SETTINGS.secret_key,
            debug:         DEV_SETTINGS.debug,
            database_uri:  DEV_SETTINGS.database_uri,
            allowed_hosts: DEV_SETTINGS.allowed_hosts,
            admin_email:   DEV_SETTINGS.admin_email,
            staging_url:   DEV_SETTINGS.staging_url,
            admin_portal:  DEV_SETTINGS.admin_portal,
        },
    })
}
