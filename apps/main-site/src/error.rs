//! # Main Site エラー定義
//!
//! 詳細はログにのみ出力し、クライアントには汎用メッセージを返す。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use techcorp_infra::InfraError;
use thiserror::Error;

/// Main Site で発生するエラー
#[derive(Debug, Error)]
pub enum MainSiteError {
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),

    #[error("テンプレートの描画に失敗しました: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for MainSiteError {
    fn into_response(self) -> Response {
        match &self {
            MainSiteError::Database(e) => {
                tracing::error!(
                    error.kind = "database",
                    error.message = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
            }
            MainSiteError::Render(e) => {
                tracing::error!(error.kind = "render", error = ?e, "テンプレートの描画に失敗しました");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
