//! # Staging Site エラー定義

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StagingSiteError {
    #[error("テンプレートの描画に失敗しました: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for StagingSiteError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "テンプレートの描画に失敗しました");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
