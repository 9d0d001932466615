//! # 管理 API ハンドラ
//!
//! すべて Basic 認証の内側に置かれる。認証を突破した報酬として、
//! 全フラグの所在や本番 DB の接続先まで返す。

use std::{collections::BTreeMap, sync::Arc};

use axum::{Extension, Json, extract::State};
use serde::Serialize;
use strum::IntoEnumIterator;
use techcorp_domain::flag::Flag;

use super::PortalState;
use crate::middleware::AuthenticatedAdmin;

const PORTAL_VERSION: &str = "2.1.4";

/// 全フラグの所在
#[derive(Debug, Serialize)]
pub struct FlagsSummary {
    pub total:     usize,
    pub locations: Vec<String>,
}

/// GET /api/admin/status のレスポンス
#[derive(Debug, Serialize)]
pub struct AdminStatusResponse {
    pub flag:                  &'static str,
    pub message:               &'static str,
    pub authenticated_as:      String,
    pub permissions:           [&'static str; 4],
    pub access_level:          &'static str,
    pub all_flags_summary:     FlagsSummary,
    pub security_note:         &'static str,
    pub vulnerabilities_found: Vec<&'static str>,
}

/// GET /api/admin/status
pub async fn admin_status(
    Extension(AuthenticatedAdmin(username)): Extension<AuthenticatedAdmin>,
) -> Json<AdminStatusResponse> {
    let locations: Vec<String> = Flag::iter().map(Flag::summary_line).collect();

    Json(AdminStatusResponse {
        flag: Flag::AdminPortal.value(),
        message: "Congratulations! You found and accessed the admin portal!",
        authenticated_as: username,
        permissions: ["read", "write", "delete", "admin"],
        access_level: "full",
        all_flags_summary: FlagsSummary {
            total: locations.len(),
            locations,
        },
        security_note: "All 7 flags found! Review the security issues discovered.",
        vulnerabilities_found: Flag::iter().map(Flag::vulnerability).collect(),
    })
}

/// 管理者一覧の 1 件
#[derive(Debug, Serialize)]
pub struct AdminUserItem {
    pub username: String,
    pub role:     &'static str,
    pub active:   bool,
}

/// GET /api/admin/users のレスポンス
#[derive(Debug, Serialize)]
pub struct AdminUsersResponse {
    pub users: Vec<AdminUserItem>,
    pub note:  &'static str,
}

/// GET /api/admin/users
///
/// 認証情報セットの登録順で返す。
pub async fn admin_users(State(state): State<Arc<PortalState>>) -> Json<AdminUsersResponse> {
    let users = state
        .gate
        .credentials()
        .usernames()
        .map(|username| AdminUserItem {
            username: username.to_string(),
            role:     "admin",
            active:   true,
        })
        .collect();

    Json(AdminUsersResponse {
        users,
        note: "These users have weak passwords - major security issue!",
    })
}

#[derive(Debug, Serialize)]
pub struct PortalSettings {
    pub version:         &'static str,
    pub authentication:  &'static str,
    pub session_timeout: &'static str,
    pub two_factor:      bool,
    pub rate_limiting:   bool,
    pub ip_whitelist:    Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DatabaseSettings {
    pub host:            &'static str,
    pub port:            u16,
    pub name:            &'static str,
    pub user:            &'static str,
    pub backup_schedule: &'static str,
}

/// GET /api/admin/config のレスポンス
#[derive(Debug, Serialize)]
pub struct AdminConfigResponse {
    pub flag:         &'static str,
    pub admin_portal: PortalSettings,
    pub database:     DatabaseSettings,
    pub services:     BTreeMap<&'static str, &'static str>,
}

/// GET /api/admin/config
pub async fn admin_config() -> Json<AdminConfigResponse> {
    Json(AdminConfigResponse {
        flag:         Flag::AdminPortal.value(),
        admin_portal: PortalSettings {
            version:         PORTAL_VERSION,
            authentication:  "HTTP Basic Auth (WEAK)",
            session_timeout: "30 minutes",
            two_factor:      false,
            rate_limiting:   false,
            ip_whitelist:    Vec::new(),
        },
        database:     DatabaseSettings {
            host:            "prod-db.internal.techcorp.local",
            port:            5432,
            name:            "techcorp_production",
            user:            "admin",
            backup_schedule: "daily at 02:00 UTC",
        },
        services:     BTreeMap::from([
            ("main_site", "techcorp.local:8080"),
            ("dev_environment", "dev.techcorp.local:8081"),
            ("staging_environment", "staging.techcorp.local:8082"),
            ("admin_portal", "admin.techcorp.local:8083"),
        ]),
    })
}
