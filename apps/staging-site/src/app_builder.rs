//! # Staging Site アプリケーション構築

use std::sync::Arc;

use axum::{Router, routing::get};
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
    STAGING_SITE_HEADERS,
    diagnostics::PhpInfo,
    handler::{StagingState, health_check, index, info, not_found, phpinfo, test_page},
    pages,
};

pub fn build_app() -> Result<Router, tera::Error> {
    let state = Arc::new(StagingState {
        renderer: pages::renderer()?,
        php_info: PhpInfo::capture(),
    });

    let app = Router::new()
        .route("/", get(index))
        .route("/phpinfo.php", get(phpinfo))
        .route("/info", get(info))
        .route("/test.php", get(test_page))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        // レイヤー順序: 下に書いたものが外側
        .layer(StaticHeadersLayer::new(STAGING_SITE_HEADERS))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    Ok(app)
}
