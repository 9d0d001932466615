//! # Basic 認証ミドルウェア
//!
//! `Authorization: Basic <base64(username:secret)>` を取り出し、
//! [`AccessGate`] の判定に従って通過させるか 401 を返す。
//!
//! ## 使い方
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//!
//! let gate_state = GateState { gate: Arc::new(gate) };
//!
//! Router::new()
//!     .route("/dashboard", get(dashboard))
//!     .route_layer(from_fn_with_state(gate_state, require_basic_auth))
//! ```
//!
//! セッションは発行しない。保護されたパスへのリクエストは毎回ここを通る。

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use techcorp_domain::{
    access_gate::{AccessDecision, AccessGate},
    credential::Credentials,
};

use crate::error::AdminPortalError;

/// 認証ミドルウェアの状態
#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<AccessGate>,
}

/// 認証済みのアカウント名
///
/// ゲートを通過したリクエストの extensions に入る。表示用途のみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAdmin(pub String);

/// `Authorization` ヘッダーから Basic 認証情報を取り出す
///
/// スキーム名は大文字小文字を区別しない。シークレットは最初の `:` 以降すべてなので、
/// `:` を含んでいてもよい。形式が崩れている場合は「提示なし」として `None` を返す。
pub fn extract_credentials(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, secret) = decoded.split_once(':')?;

    Some(Credentials::new(username, secret))
}

/// Basic 認証ミドルウェア
///
/// 許可されれば [`AuthenticatedAdmin`] を extensions に入れてハンドラへ進む。
/// 拒否されれば `WWW-Authenticate` 付きの 401 を返す。
pub async fn require_basic_auth(
    State(state): State<GateState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let supplied = extract_credentials(request.headers());
    let username = supplied.as_ref().map(|c| c.username().to_string());

    match state.gate.decide(supplied.as_ref()) {
        AccessDecision::Allow { username } => {
            tracing::debug!(username = %username, path = %request.uri().path(), "認証に成功しました");
            request.extensions_mut().insert(AuthenticatedAdmin(username));
            next.run(request).await
        }
        AccessDecision::Deny => {
            tracing::info!(
                username = username.as_deref().unwrap_or("-"),
                path = %request.uri().path(),
                "認証に失敗しました"
            );
            AdminPortalError::AuthenticationRequired {
                challenge: state.gate.challenge(),
            }
            .into_response()
        }
    }
}
