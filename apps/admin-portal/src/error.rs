//! # Admin Portal エラー定義
//!
//! 認証エラーは演習の入口なので、チャレンジとヒントを含む平文で返す。
//! それ以外の内部エラーは詳細をログにだけ出し、本文は汎用メッセージにする。

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 認証失敗時の本文
pub const AUTHENTICATION_REQUIRED_BODY: &str = "Authentication Required\n\n\
This is a restricted admin portal. Valid credentials are required.\n\n\
Hint: Try common admin usernames and weak passwords.\n\
Examples: admin, administrator, techcorp, root\n";

/// Admin Portal で発生するエラー
#[derive(Debug, Error)]
pub enum AdminPortalError {
    /// 認証情報がない、または一致しない
    #[error("認証が必要です")]
    AuthenticationRequired {
        /// `WWW-Authenticate` ヘッダーの値
        challenge: String,
    },

    /// テンプレートの描画に失敗した
    #[error("テンプレートの描画に失敗しました: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for AdminPortalError {
    fn into_response(self) -> Response {
        match self {
            AdminPortalError::AuthenticationRequired { challenge } => (
                StatusCode::UNAUTHORIZED,
                [
                    (header::WWW_AUTHENTICATE, challenge),
                    (
                        header::CONTENT_TYPE,
                        "text/plain; charset=utf-8".to_string(),
                    ),
                ],
                AUTHENTICATION_REQUIRED_BODY,
            )
                .into_response(),
            AdminPortalError::Render(e) => {
                tracing::error!(error = ?e, "テンプレートの描画に失敗しました");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
