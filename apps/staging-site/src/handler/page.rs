//! # HTML ページハンドラ

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use techcorp_domain::flag::Flag;
use tera::Context;

use super::StagingState;
use crate::error::StagingSiteError;

fn render(
    state: &StagingState,
    name: &str,
    context: &Context,
) -> Result<Html<String>, StagingSiteError> {
    Ok(Html(state.renderer.render(name, context)?))
}

/// GET /
pub async fn index(
    State(state): State<Arc<StagingState>>,
) -> Result<Html<String>, StagingSiteError> {
    render(&state, "index.html", &Context::new())
}

/// GET /phpinfo.php
///
/// 認証なしでフラグ 6 と環境変数（DB パスワードを含む）を表示する。
pub async fn phpinfo(
    State(state): State<Arc<StagingState>>,
) -> Result<Html<String>, StagingSiteError> {
    let mut context = Context::new();
    context.insert("flag", Flag::StagingPhpinfo.value());
    context.insert("php", &state.php_info);

    render(&state, "phpinfo.html", &context)
}

/// GET /test.php
pub async fn test_page(
    State(state): State<Arc<StagingState>>,
) -> Result<Html<String>, StagingSiteError> {
    render(&state, "test.html", &Context::new())
}

/// 未定義パスのフォールバック
pub async fn not_found(
    State(state): State<Arc<StagingState>>,
) -> Result<impl IntoResponse, StagingSiteError> {
    let body = render(&state, "404.html", &Context::new())?;
    Ok((StatusCode::NOT_FOUND, body))
}
