//! # 404 ハンドラ

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use serde::Serialize;

use super::DevState;

#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub error:            &'static str,
    pub message:          String,
    pub available_routes: Vec<&'static str>,
    pub hint:             &'static str,
}

/// 未定義パスのフォールバック
///
/// 登録済みのルートをすべて列挙して返す。
pub async fn not_found(State(state): State<Arc<DevState>>, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error:            "404 Not Found",
            message:          format!(
                "The requested URL {} was not found on the server.",
                uri.path()
            ),
            available_routes: state.routes.clone(),
            hint:             "This is a development environment - all routes are listed above",
        }),
    )
}
