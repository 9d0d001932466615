//! # 開発用設定値
//!
//! 本来は秘匿すべき値だが、Dev Site はトップページ・`/debug`・`/config` の
//! すべてでこれを返す。

use serde::Serialize;

/// 開発環境の設定
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DevSettings {
    pub secret_key:    &'static str,
    pub debug:         bool,
    pub env:           &'static str,
    pub testing:       bool,
    pub database_uri:  &'static str,
    pub allowed_hosts: &'static [&'static str],
    pub admin_email:   &'static str,
    pub staging_url:   &'static str,
    pub admin_portal:  &'static str,
    pub internal_api:  &'static str,
}

pub const DEV_SETTINGS: DevSettings = DevSettings {
    secret_key:    "super-secret-dev-key-123",
    debug:         true,
    env:           "development",
    testing:       false,
    database_uri:  "sqlite:///dev_database.db",
    allowed_hosts: &["dev.techcorp.local", "localhost"],
    admin_email:   "john.dev@techcorp.local",
    staging_url:   "http://staging.techcorp.local:8082",
    admin_portal:  "http://admin.techcorp.local:8083",
    internal_api:  "http://dev.techcorp.local:8081/api/debug",
};

impl DevSettings {
    /// `/debug` 用に、全項目を文字列化した一覧
    pub fn as_string_map(&self) -> Vec<(&'static str, String)> {
        vec![
            ("DEBUG", self.debug.to_string()),
            ("ENV", self.env.to_string()),
            ("SECRET_KEY", self.secret_key.to_string()),
            ("TESTING", self.testing.to_string()),
            ("DATABASE_URI", self.database_uri.to_string()),
            ("ALLOWED_HOSTS", self.allowed_hosts.join(",")),
            ("ADMIN_EMAIL", self.admin_email.to_string()),
            ("STAGING_URL", self.staging_url.to_string()),
            ("ADMIN_PORTAL", self.admin_portal.to_string()),
        ]
    }
}
