//! # アクセスゲート
//!
//! Admin Portal の保護リソースに到達してよいかを判定する。
//!
//! ## 判定規則
//!
//! 1. 認証情報が提示されていなければ拒否
//! 2. アカウント名が認証情報セットに存在し、かつシークレットが完全一致すれば許可
//! 3. それ以外はすべて拒否
//!
//! 「存在しないアカウント」と「シークレット違い」は区別しない。
//! ロックアウト・レート制限・タイミング攻撃対策はいずれも行わない。
//! 判定はリクエストごとに独立しており、セッションやトークンは発行しない。

use derive_more::Display;

use crate::credential::{CredentialSet, Credentials};

/// Admin Portal のレルム
pub const ADMIN_PORTAL_REALM: &str = "TechCorp Admin Portal - Restricted Access";

/// 認証チャレンジに表示される保護領域のラベル
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct Realm(String);

impl Realm {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 判定結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// 許可。アカウント名は表示用にのみ下流へ渡す
    Allow { username: String },
    /// 拒否
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }
}

/// アクセスゲート
///
/// 認証情報セットとレルムはプロセス起動時に固定され、以後変化しない。
#[derive(Debug, Clone)]
pub struct AccessGate {
    credentials: CredentialSet,
    realm:       Realm,
}

impl AccessGate {
    pub fn new(credentials: CredentialSet, realm: impl Into<String>) -> Self {
        Self {
            credentials,
            realm: Realm::new(realm),
        }
    }

    /// 提示された認証情報から許可 / 拒否を決める
    pub fn decide(&self, supplied: Option<&Credentials>) -> AccessDecision {
        match supplied {
            Some(credentials) if self.credentials.verify(credentials) => AccessDecision::Allow {
                username: credentials.username().to_string(),
            },
            _ => AccessDecision::Deny,
        }
    }

    /// `WWW-Authenticate` ヘッダーの値（例: `Basic realm="..."`）
    pub fn challenge(&self) -> String {
        let escaped = self.realm.as_str().replace('\\', "\\\\").replace('"', "\\\"");
        format!("Basic realm=\"{escaped}\"")
    }

    pub fn realm(&self) -> &Realm {
        &self.realm
    }

    pub fn credentials(&self) -> &CredentialSet {
        &self.credentials
    }
}
