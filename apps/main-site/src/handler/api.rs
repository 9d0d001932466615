//! # API ハンドラ
//!
//! v1 は公開ドキュメントに載っている API。v2 はどこにも載っていないが、
//! 認証なしでアクセスできる。

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use techcorp_domain::{flag::Flag, user::User};

use super::SiteState;
use crate::error::MainSiteError;

const SITE_VERSION: &str = "2.1.4";

/// GET /api/v1/info のレスポンス
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub version:       &'static str,
    pub name:          &'static str,
    pub endpoints:     [&'static str; 2],
    pub documentation: &'static str,
}

/// GET /api/v1/info
pub async fn api_v1_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        version:       "1.0",
        name:          "TechCorp API",
        endpoints:     ["/api/v1/info", "/api/v1/status"],
        documentation: "/api/v1/docs",
    })
}

/// GET /api/v1/status のレスポンス
#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub status:   &'static str,
    pub uptime:   &'static str,
    pub services: [&'static str; 3],
    pub version:  &'static str,
}

/// GET /api/v1/status
pub async fn api_v1_status() -> Json<ApiStatusResponse> {
    Json(ApiStatusResponse {
        status:   "operational",
        uptime:   "99.9%",
        services: ["web", "api", "database"],
        version:  SITE_VERSION,
    })
}

/// GET /api/v2/admin/users のレスポンス
#[derive(Debug, Serialize)]
pub struct AdminUsersResponse {
    pub flag:    &'static str,
    pub message: &'static str,
    pub users:   Vec<User>,
    pub hint:    &'static str,
}

/// GET /api/v2/admin/users
///
/// 認証ヘッダーの有無にかかわらず、全ユーザーとフラグ 4 を返す。
#[tracing::instrument(skip_all)]
pub async fn api_v2_admin_users(
    State(state): State<Arc<SiteState>>,
) -> Result<Json<AdminUsersResponse>, MainSiteError> {
    let users = state.user_repository.find_all().await?;

    Ok(Json(AdminUsersResponse {
        flag: Flag::UndocumentedApi.value(),
        message: "Congratulations! You found the undocumented API endpoint.",
        users,
        hint: "Try enumerating subdomains: dev, staging, admin",
    }))
}

/// GET /api/v2/config のレスポンス
#[derive(Debug, Serialize)]
pub struct ApiConfigResponse {
    pub environments: BTreeMap<&'static str, &'static str>,
    pub database:     &'static str,
    pub secret_key:   &'static str,
}

/// GET /api/v2/config
///
/// ステータスは 403 だが、本文には環境一覧がそのまま入っている。
pub async fn api_v2_config() -> impl IntoResponse {
    (
        StatusCode::FORBIDDEN,
        Json(ApiConfigResponse {
            environments: BTreeMap::from([
                ("production", "techcorp.local"),
                ("development", "dev.techcorp.local"),
                ("staging", "staging.techcorp.local"),
                ("admin", "admin.techcorp.local"),
            ]),
            database:     "sqlite:///database.db",
            secret_key:   "REDACTED",
        }),
    )
}
