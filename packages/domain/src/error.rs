//! # ドメイン層エラー

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// 定義されていないロール名
    #[error("不明なロールです: {0}")]
    UnknownRole(String),

    /// 認証情報セット内でアカウント名が重複している
    #[error("アカウント名が重複しています: {0}")]
    DuplicateAccount(String),
}
