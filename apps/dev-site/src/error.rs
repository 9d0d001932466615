//! # Dev Site エラー定義
//!
//! デバッグモードを模しているため、内部エラーもパニックも
//! メッセージ付きの JSON でそのまま返す。

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Dev Site で発生するエラー
#[derive(Debug, Error)]
pub enum DevSiteError {
    #[error("テンプレートの描画に失敗しました: {0}")]
    Render(#[from] tera::Error),
}

/// 500 レスポンスの本文
#[derive(Debug, Serialize)]
pub struct InternalErrorBody {
    pub error:      &'static str,
    pub message:    String,
    pub debug_mode: bool,
    pub traceback:  &'static str,
}

/// 500 レスポンスを組み立てる
pub fn internal_error_response(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(InternalErrorBody {
            error: "500 Internal Server Error",
            message,
            debug_mode: true,
            traceback: "Full traceback would appear here in dev mode",
        }),
    )
        .into_response()
}

impl IntoResponse for DevSiteError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "内部エラー");
        internal_error_response(self.to_string())
    }
}

/// `CatchPanicLayer::custom` に渡すパニックハンドラ
///
/// パニックのメッセージを本文にそのまま載せる。
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    };

    tracing::error!(panic.message = %message, "ハンドラがパニックしました");
    internal_error_response(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_文字列のパニックはメッセージを返す() {
        let response = handle_panic(Box::new("index out of bounds"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "index out of bounds");
        assert_eq!(body["debug_mode"], true);
    }

    #[tokio::test]
    async fn test_不明な型のパニックは固定メッセージ() {
        let response = handle_panic(Box::new(42_u8));

        let body = body_json(response).await;
        assert_eq!(body["message"], "handler panicked");
        assert_eq!(
            body["traceback"],
            "Full traceback would appear here in dev mode"
        );
    }

    #[tokio::test]
    async fn test_描画エラーも同じ500を返す() {
        let error = DevSiteError::from(tera::Error::msg("boom"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "500 Internal Server Error");
    }
}
