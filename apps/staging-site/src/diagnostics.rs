//! # 診断情報
//!
//! `/phpinfo.php` と `/info` に載る値。環境変数表は実際の環境ではなく、
//! ステージングサーバーに設定されている想定の固定値を表示順に並べたもの。

use serde::Serialize;

/// 表示上の PHP バージョン
pub const PHP_VERSION: &str = "8.2.0-dev";

/// ステージング DB のパスワード
pub const STAGING_DB_PASSWORD: &str = "St@g1ng_P@ss_2024";

/// 環境変数表（表示順）
pub const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("SERVER_NAME", "staging.techcorp.local"),
    ("SERVER_PORT", "8082"),
    ("DOCUMENT_ROOT", "/var/www/staging"),
    ("DB_HOST", "staging-db.internal.techcorp.local"),
    ("DB_PORT", "5432"),
    ("DB_NAME", "techcorp_staging"),
    ("DB_USER", "staging_admin"),
    ("DB_PASS", STAGING_DB_PASSWORD),
    ("REDIS_HOST", "staging-redis.internal"),
    ("ADMIN_PORTAL", "admin.techcorp.local"),
    ("ADMIN_EMAIL", "admin@techcorp.local"),
    ("SMTP_SERVER", "smtp.staging.techcorp.local"),
    ("API_KEY", "staging_api_key_abc123xyz"),
    ("SECRET_TOKEN", "stg_tok_9f8e7d6c5b4a3210"),
];

pub const EXTENSIONS: &[&str] = &[
    "Core",
    "date",
    "filter",
    "hash",
    "json",
    "pcre",
    "readline",
    "Reflection",
    "SPL",
    "standard",
    "mysqlnd",
    "PDO",
    "pdo_mysql",
    "pdo_pgsql",
    "curl",
    "openssl",
    "zip",
    "gd",
    "mbstring",
];

/// phpinfo ページ末尾のセキュリティ設定
pub const SECURITY_SETTINGS: &[(&str, &str)] = &[
    ("expose_php", "On (BAD - reveals PHP version)"),
    ("display_errors", "On (BAD - shows errors to users)"),
    ("log_errors", "On"),
    ("error_reporting", "E_ALL (verbose)"),
];

/// phpinfo ページ末尾の次の一手
pub const NEXT_STEPS: &[(&str, &str)] = &[
    (
        "Hint",
        "Database credentials are exposed above. Try accessing admin.techcorp.local next!",
    ),
    ("Admin Portal", "admin.techcorp.local (may require authentication)"),
    ("Admin Email", "admin@techcorp.local"),
];

/// テンプレートに渡す 1 行
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InfoRow {
    pub name:  &'static str,
    pub value: String,
}

impl InfoRow {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// phpinfo 相当ページの内容
#[derive(Debug, Clone, Serialize)]
pub struct PhpInfo {
    pub version:     &'static str,
    pub system:      Vec<InfoRow>,
    pub environment: Vec<InfoRow>,
    pub extensions:  String,
    pub security:    Vec<InfoRow>,
    pub next_steps:  Vec<InfoRow>,
}

fn rows(pairs: &[(&'static str, &'static str)]) -> Vec<InfoRow> {
    pairs
        .iter()
        .map(|&(name, value)| InfoRow::new(name, value))
        .collect()
}

impl PhpInfo {
    /// 実行中ホストの OS とアーキテクチャを埋めて作る
    pub fn capture() -> Self {
        Self::with_system(format!(
            "{} {}",
            std::env::consts::OS,
            std::env::consts::ARCH
        ))
    }

    pub fn with_system(system: String) -> Self {
        Self {
            version:     PHP_VERSION,
            system:      vec![
                InfoRow::new("PHP Version", PHP_VERSION),
                InfoRow::new("System", system),
                InfoRow::new("Server API", "FPM/FastCGI"),
                InfoRow::new("Virtual Directory Support", "disabled"),
                InfoRow::new("Configuration File (php.ini) Path", "/etc/php/8.2/fpm"),
                InfoRow::new("Loaded Configuration File", "/etc/php/8.2/fpm/php.ini"),
            ],
            environment: rows(ENVIRONMENT_VARIABLES),
            extensions:  EXTENSIONS.join(", "),
            security:    rows(SECURITY_SETTINGS),
            next_steps:  rows(NEXT_STEPS),
        }
    }
}
