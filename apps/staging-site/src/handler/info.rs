//! # 環境情報 API

use axum::Json;
use serde::Serialize;
use techcorp_domain::flag::Flag;

use crate::diagnostics::STAGING_DB_PASSWORD;

#[derive(Debug, Serialize)]
pub struct DatabaseInfo {
    pub host:     &'static str,
    pub name:     &'static str,
    pub user:     &'static str,
    pub password: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InternalServices {
    pub redis:         &'static str,
    pub elasticsearch: &'static str,
    pub rabbitmq:      &'static str,
}

/// GET /info のレスポンス
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub environment:       &'static str,
    pub version:           &'static str,
    pub flag:              &'static str,
    pub server:            &'static str,
    pub database:          DatabaseInfo,
    pub features_enabled:  [&'static str; 4],
    pub internal_services: InternalServices,
    pub hints:             [&'static str; 4],
}

/// GET /info
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        environment:       "staging",
        version:           "2.1.4-staging",
        flag:              Flag::StagingPhpinfo.value(),
        server:            "staging.techcorp.local",
        database:          DatabaseInfo {
            host:     "staging-db.internal.techcorp.local",
            name:     "techcorp_staging",
            user:     "staging_admin",
            password: STAGING_DB_PASSWORD,
        },
        features_enabled:  ["debug_toolbar", "sql_logging", "profiler", "error_reporting"],
        internal_services: InternalServices {
            redis:         "staging-redis.internal",
            elasticsearch: "staging-es.internal",
            rabbitmq:      "staging-mq.internal",
        },
        hints:             [
            "phpinfo.php is accessible (major security issue)",
            "Database credentials are exposed",
            "Try the admin portal: admin.techcorp.local",
            "Admin authentication might be weak",
        ],
    })
}
