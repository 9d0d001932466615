//! # 公開ページハンドラ

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tera::Context;

use super::SiteState;
use crate::error::MainSiteError;

/// GET /
pub async fn index(State(state): State<Arc<SiteState>>) -> Result<Html<String>, MainSiteError> {
    let services = state.service_repository.find_all().await?;

    let mut context = Context::new();
    context.insert("services", &services);
    Ok(Html(state.renderer.render("index.html", &context)?))
}

/// GET /about
///
/// シード済みユーザーのアカウント名とロールがチーム紹介として並ぶ。
pub async fn about(State(state): State<Arc<SiteState>>) -> Result<Html<String>, MainSiteError> {
    let users = state.user_repository.find_all().await?;

    let mut context = Context::new();
    context.insert("users", &users);
    Ok(Html(state.renderer.render("about.html", &context)?))
}

/// GET /contact
pub async fn contact(State(state): State<Arc<SiteState>>) -> Result<Html<String>, MainSiteError> {
    Ok(Html(state.renderer.render("contact.html", &Context::new())?))
}

/// GET /services
pub async fn services(State(state): State<Arc<SiteState>>) -> Result<Html<String>, MainSiteError> {
    let services = state.service_repository.find_all().await?;

    let mut context = Context::new();
    context.insert("services", &services);
    Ok(Html(state.renderer.render("services.html", &context)?))
}

/// 未定義パスのフォールバック
///
/// `/backup/` 配下で見つからなかったファイルにも使う。
pub async fn not_found(
    State(state): State<Arc<SiteState>>,
) -> Result<impl IntoResponse, MainSiteError> {
    let body = state.renderer.render("404.html", &Context::new())?;
    Ok((StatusCode::NOT_FOUND, Html(body)))
}
