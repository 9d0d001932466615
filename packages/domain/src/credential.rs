//! # 認証情報
//!
//! Admin Portal が受け付けるアカウント名と平文シークレットの固定セット。
//!
//! ## ドメイン用語
//!
//! | 型 | 用途 |
//! |---|------|
//! | [`PlainSecret`] | 平文のシークレット（保存値・入力値の両方） |
//! | [`Credentials`] | リクエストで提示されたアカウント名とシークレットの組 |
//! | [`AdminAccount`] | 認証情報セットに登録されたアカウント |
//! | [`CredentialSet`] | プロセス起動時に一度だけ作られる不変のアカウント一覧 |
//!
//! 演習用に意図的に弱くしてある。ハッシュ化もソルトもなく、平文の完全一致で照合する。

use std::collections::HashSet;

use crate::DomainError;

/// 起動時に投入される管理者アカウント（登録順を保持する）
pub const SEEDED_ADMIN_ACCOUNTS: &[(&str, &str)] = &[
    ("admin", "admin123"),
    ("techcorp", "techcorp2024"),
    ("administrator", "password"),
    ("root", "root123"),
    ("superuser", "super2024"),
];

/// 平文シークレット
///
/// Debug 出力では値をマスクする。漏洩させるのはレスポンス本文だけで、ログには出さない。
#[derive(Clone, PartialEq, Eq)]
pub struct PlainSecret(String);

impl std::fmt::Debug for PlainSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlainSecret").field(&"[REDACTED]").finish()
    }
}

impl PlainSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// リクエストで提示された認証情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    secret:   PlainSecret,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret:   PlainSecret::new(secret),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &PlainSecret {
        &self.secret
    }
}

/// 認証情報セットに登録されたアカウント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    username: String,
    secret:   PlainSecret,
}

impl AdminAccount {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &PlainSecret {
        &self.secret
    }

    /// 提示されたシークレットと一致するか
    ///
    /// 大文字小文字を区別する単純な文字列比較。定数時間比較はしない。
    pub fn matches(&self, secret: &PlainSecret) -> bool {
        self.secret == *secret
    }
}

/// 固定の認証情報セット
///
/// 登録順を保持する。ユーザー一覧 API やダッシュボードはこの順で表示する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    accounts: Vec<AdminAccount>,
}

impl CredentialSet {
    /// アカウント名とシークレットの組から作る
    ///
    /// アカウント名が重複している場合はエラー。
    pub fn new<U, S>(pairs: impl IntoIterator<Item = (U, S)>) -> Result<Self, DomainError>
    where
        U: Into<String>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut accounts = Vec::new();

        for (username, secret) in pairs {
            let username = username.into();
            if !seen.insert(username.clone()) {
                return Err(DomainError::DuplicateAccount(username));
            }
            accounts.push(AdminAccount {
                username,
                secret: PlainSecret::new(secret),
            });
        }

        Ok(Self { accounts })
    }

    /// [`SEEDED_ADMIN_ACCOUNTS`] から作る
    pub fn seeded() -> Self {
        Self {
            accounts: SEEDED_ADMIN_ACCOUNTS
                .iter()
                .map(|(username, secret)| AdminAccount {
                    username: (*username).to_string(),
                    secret:   PlainSecret::new(*secret),
                })
                .collect(),
        }
    }

    pub fn find(&self, username: &str) -> Option<&AdminAccount> {
        self.accounts
            .iter()
            .find(|account| account.username == username)
    }

    /// アカウントが存在し、かつシークレットが一致するか
    pub fn verify(&self, credentials: &Credentials) -> bool {
        self.find(credentials.username())
            .is_some_and(|account| account.matches(credentials.secret()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdminAccount> {
        self.accounts.iter()
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(AdminAccount::username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_シードは登録順を保持する() {
        let set = CredentialSet::seeded();

        assert_eq!(
            set.usernames().collect::<Vec<_>>(),
            vec!["admin", "techcorp", "administrator", "root", "superuser"]
        );
    }

    #[rstest]
    fn test_シードにアカウント名の重複はない() {
        assert_eq!(
            CredentialSet::new(SEEDED_ADMIN_ACCOUNTS.iter().copied()),
            Ok(CredentialSet::seeded())
        );
    }

    #[rstest]
    fn test_重複したアカウント名はエラー() {
        let result = CredentialSet::new([("root", "a"), ("root", "b")]);

        assert_eq!(result, Err(DomainError::DuplicateAccount("root".to_string())));
    }

    #[rstest]
    #[case("admin", "admin123", true)]
    #[case("admin", "Admin123", false)]
    #[case("Admin", "admin123", false)]
    #[case("admin", "", false)]
    #[case("guest", "admin123", false)]
    fn test_verifyは完全一致のみ許可する(
        #[case] username: &str,
        #[case] secret: &str,
        #[case] expected: bool,
    ) {
        let set = CredentialSet::seeded();

        assert_eq!(set.verify(&Credentials::new(username, secret)), expected);
    }

    #[rstest]
    fn test_シークレットのdebug出力はマスクされる() {
        let credentials = Credentials::new("root", "root123");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("root123"));
    }
}
