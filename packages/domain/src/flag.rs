//! # フラグ
//!
//! 各サービスの設定ミスの奥に埋め込まれた目印の文字列。
//! 到達できたこと自体が、その設定ミスを突けた証明になる。
//!
//! | # | 場所 | 設定ミス |
//! |---|------|----------|
//! | 1 | Main Site `/robots.txt` | robots.txt による隠しパスの露出 |
//! | 2 | Main Site `/backup/` | バックアップファイルの公開 |
//! | 3 | Main Site `/.git/config` | `.git` ディレクトリの公開 |
//! | 4 | Main Site `/api/v2/admin/users` | 未ドキュメント API |
//! | 5 | Dev Site | デバッグモードの有効化 |
//! | 6 | Staging Site `/phpinfo.php` | phpinfo 相当ページの放置 |
//! | 7 | Admin Portal `/dashboard` | 弱い Basic 認証 |
//!
//! 1〜3 は静的ファイル側に埋め込まれており、ここでは値の照合用に保持する。

use strum::EnumIter;

/// 演習で発見対象となるフラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Flag {
    RobotsTxt,
    BackupFile,
    GitConfig,
    UndocumentedApi,
    DevSubdomain,
    StagingPhpinfo,
    AdminPortal,
}

impl Flag {
    /// 1 始まりの通し番号
    pub const fn number(self) -> u8 {
        match self {
            Self::RobotsTxt => 1,
            Self::BackupFile => 2,
            Self::GitConfig => 3,
            Self::UndocumentedApi => 4,
            Self::DevSubdomain => 5,
            Self::StagingPhpinfo => 6,
            Self::AdminPortal => 7,
        }
    }

    /// フラグ文字列
    pub const fn value(self) -> &'static str {
        match self {
            Self::RobotsTxt => "FLAG{robots_txt_reveals_7c1d}",
            Self::BackupFile => "FLAG{backup_file_leaked_2b7e}",
            Self::GitConfig => "FLAG{git_directory_exposed_9d4a}",
            Self::UndocumentedApi => "FLAG{api_v2_discovered_1e9f}",
            Self::DevSubdomain => "FLAG{dev_subdomain_pwned_5f2a}",
            Self::StagingPhpinfo => "FLAG{staging_env_exposed_8g3b}",
            Self::AdminPortal => "FLAG{admin_portal_found_3h4c}",
        }
    }

    /// フラグの所在
    pub const fn location(self) -> &'static str {
        match self {
            Self::RobotsTxt => "robots.txt on main site",
            Self::BackupFile => "backup file on main site",
            Self::GitConfig => ".git/config on main site",
            Self::UndocumentedApi => "/api/v2/admin/users on main site",
            Self::DevSubdomain => "dev.techcorp.local (debug mode)",
            Self::StagingPhpinfo => "staging.techcorp.local/phpinfo.php",
            Self::AdminPortal => "admin.techcorp.local/dashboard (you are here!)",
        }
    }

    /// フラグが示す脆弱性
    pub const fn vulnerability(self) -> &'static str {
        match self {
            Self::RobotsTxt => "Exposed robots.txt revealing sensitive paths",
            Self::BackupFile => "Accessible backup files with database dumps",
            Self::GitConfig => "Exposed .git directory with credentials",
            Self::UndocumentedApi => "Undocumented API endpoints",
            Self::DevSubdomain => "Discoverable development subdomain",
            Self::StagingPhpinfo => "Staging environment with phpinfo() exposed",
            Self::AdminPortal => "Admin portal with weak authentication",
        }
    }

    /// 一覧表示用の 1 行（例: `FLAG 1: robots.txt on main site`）
    pub fn summary_line(self) -> String {
        format!("FLAG {}: {}", self.number(), self.location())
    }
}
