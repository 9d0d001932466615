//! # HTML ページハンドラ

use std::sync::Arc;

use axum::{
    Extension,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Serialize;
use techcorp_domain::flag::Flag;
use tera::Context;

use super::PortalState;
use crate::{error::AdminPortalError, middleware::AuthenticatedAdmin};

/// ダッシュボードに並べるアカウント
#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    username: &'a str,
    secret:   &'a str,
}

/// GET /
///
/// 認証不要。ポータルの存在と認証方式を案内する。
pub async fn login_page(
    State(state): State<Arc<PortalState>>,
) -> Result<Html<String>, AdminPortalError> {
    let mut context = Context::new();
    context.insert("realm", state.gate.realm().as_str());
    Ok(Html(state.renderer.render("login.html", &context)?))
}

/// GET /dashboard
///
/// フラグ 7 と、認証情報セットの中身をそのまま表示する。
pub async fn dashboard(
    State(state): State<Arc<PortalState>>,
    Extension(AuthenticatedAdmin(username)): Extension<AuthenticatedAdmin>,
) -> Result<Html<String>, AdminPortalError> {
    let accounts: Vec<AccountRow<'_>> = state
        .gate
        .credentials()
        .iter()
        .map(|account| AccountRow {
            username: account.username(),
            secret:   account.secret().as_str(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("flag", Flag::AdminPortal.value());
    context.insert("username", &username);
    context.insert("accounts", &accounts);

    Ok(Html(state.renderer.render("dashboard.html", &context)?))
}

/// 未定義パスのフォールバック
pub async fn not_found(
    State(state): State<Arc<PortalState>>,
) -> Result<impl IntoResponse, AdminPortalError> {
    let body = state.renderer.render("404.html", &Context::new())?;
    Ok((StatusCode::NOT_FOUND, Html(body)))
}
