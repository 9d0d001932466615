//! # ユーザー
//!
//! Main Site の DB に投入されるユーザーのシードデータ。
//! 公開ページ（`/about`）と未ドキュメント API（`/api/v2/admin/users`）から参照される。
//! 投入後に更新される経路はない。

use std::str::FromStr;

use derive_more::Display;
use serde::Serialize;
use strum::{EnumString, IntoStaticStr};

use crate::DomainError;

/// ユーザー ID（DB の連番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// ロール
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Developer,
    Auditor,
    #[default]
    User,
}

impl Role {
    /// DB に保存された文字列から復元する
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Self::from_str(value).map_err(|_| DomainError::UnknownRole(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id:       UserId,
    username: String,
    email:    String,
    role:     Role,
}

impl User {
    /// DB の行から復元する
    pub fn from_db(id: UserId, username: String, email: String, role: Role) -> Self {
        Self {
            id,
            username,
            email,
            role,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// 投入前のユーザー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewUser {
    pub username: &'static str,
    pub email:    &'static str,
    pub role:     Role,
}

/// 初回起動時に投入するユーザー
pub const SEED_USERS: &[NewUser] = &[
    NewUser {
        username: "admin",
        email:    "admin@techcorp.local",
        role:     Role::Admin,
    },
    NewUser {
        username: "developer",
        email:    "john.dev@techcorp.local",
        role:     Role::Developer,
    },
    NewUser {
        username: "pentester",
        email:    "pentester@techcorp.local",
        role:     Role::Auditor,
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("developer", Role::Developer)]
    #[case("auditor", Role::Auditor)]
    #[case("user", Role::User)]
    fn test_ロールを文字列から復元する(#[case] input: &str, #[case] expected: Role) {
        assert_eq!(Role::parse(input), Ok(expected));
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    fn test_未定義のロールはエラー() {
        assert_eq!(
            Role::parse("superadmin"),
            Err(DomainError::UnknownRole("superadmin".to_string()))
        );
    }

    #[rstest]
    fn test_デフォルトロールはuser() {
        assert_eq!(Role::default(), Role::User);
    }

    #[rstest]
    fn test_userのjson形状() {
        let user = User::from_db(
            UserId::new(2),
            "developer".to_string(),
            "john.dev@techcorp.local".to_string(),
            Role::Developer,
        );

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({
                "id": 2,
                "username": "developer",
                "email": "john.dev@techcorp.local",
                "role": "developer"
            })
        );
    }
}
