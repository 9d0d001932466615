//! # Dev Site アプリケーション構築
//!
//! ルート一覧は [`route_table`] の 1 箇所でだけ定義する。
//! ルーター登録と 404 / `/debug` の `routes` は同じ一覧から作るので、
//! 漏洩するルート一覧と実際のルートが食い違うことはない。

use std::sync::Arc;

use axum::{
    Router,
    routing::{MethodRouter, get},
};
use techcorp_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
    response_headers::StaticHeadersLayer,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    DEV_SITE_HEADERS,
    error::handle_panic,
    handler::{DevState, api_status, config, debug_info, health_check, index, not_found},
    pages,
};

/// 登録するルートの一覧（パス, ハンドラ）
pub fn route_table() -> Vec<(&'static str, MethodRouter<Arc<DevState>>)> {
    vec![
        ("/", get(index)),
        ("/debug", get(debug_info)),
        ("/api/status", get(api_status)),
        ("/config", get(config)),
        ("/health", get(health_check)),
    ]
}

/// ルーターを組み立てる
pub fn build_app() -> Result<Router, tera::Error> {
    build_router(route_table())
}

/// 任意のルート一覧からルーターを組み立てる
///
/// レイヤー構成は本番と同じ。テストでパニックするルートを足すときに使う。
pub fn build_router(
    routes: Vec<(&'static str, MethodRouter<Arc<DevState>>)>,
) -> Result<Router, tera::Error> {
    let state = Arc::new(DevState {
        renderer: pages::renderer()?,
        routes:   routes.iter().map(|(path, _)| *path).collect(),
    });

    let router = routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router.route(path, method_router)
        });

    let app = router
        .fallback(not_found)
        .with_state(state)
        // レイヤー順序: 下に書いたものが外側
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(StaticHeadersLayer::new(DEV_SITE_HEADERS))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    Ok(app)
}
