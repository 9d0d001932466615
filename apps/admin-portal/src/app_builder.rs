//! # Admin Portal アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use techcorp_domain::{
    DomainError,
    access_gate::{ADMIN_PORTAL_REALM, AccessGate},
    credential::CredentialSet,
};
use techcorp_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
    response_headers::StaticHeadersLayer,
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    ADMIN_PORTAL_HEADERS,
    handler::{
        PortalState,
        admin_config,
        admin_status,
        admin_users,
        dashboard,
        health_check,
        login_page,
        not_found,
    },
    middleware::{GateState, require_basic_auth},
    pages,
};

/// アカウント名とシークレットの組からアクセスゲートを作る
///
/// アカウント名が重複していれば起動を中止する。
pub fn access_gate(accounts: &[(&str, &str)]) -> Result<AccessGate, DomainError> {
    let credentials = CredentialSet::new(accounts.iter().copied())?;
    Ok(AccessGate::new(credentials, ADMIN_PORTAL_REALM))
}

/// アクセスゲートを受け取り、ルーターを組み立てる
pub fn build_app(gate: AccessGate) -> Result<Router, tera::Error> {
    let gate = Arc::new(gate);
    let state = Arc::new(PortalState {
        gate:     gate.clone(),
        renderer: pages::renderer()?,
    });
    let gate_state = GateState { gate };

    // route_layer なので、未定義パスはゲートを通らず 404 になる
    let protected = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/api/admin/status", get(admin_status))
        .route("/api/admin/users", get(admin_users))
        .route("/api/admin/config", get(admin_config))
        .route_layer(from_fn_with_state(gate_state, require_basic_auth));

    let app = Router::new()
        .route("/", get(login_page))
        .route("/health", get(health_check))
        .merge(protected)
        .fallback(not_found)
        .with_state(state)
        // レイヤー順序: 下に書いたものが外側
        .layer(StaticHeadersLayer::new(ADMIN_PORTAL_HEADERS))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    Ok(app)
}
