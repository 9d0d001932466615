//! # Main Site アプリケーション構築
//!
//! リポジトリとコンテンツディレクトリを受け取り、ルーターを組み立てる。
//! DB の接続・マイグレーション・シード投入は `main.rs` 側で済ませておく。

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    handler::{Handler, HandlerWithoutStateExt},
    routing::get,
};
use techcorp_infra::repository::{ServiceOfferingRepository, UserRepository};
use techcorp_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
    response_headers::StaticHeadersLayer,
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    MAIN_SITE_HEADERS,
    handler::{
        SiteState,
        about,
        admin_area,
        api_v1_info,
        api_v1_status,
        api_v2_admin_users,
        api_v2_config,
        contact,
        git_file_not_found,
        health_check,
        index,
        not_found,
        secret_area,
        services,
    },
    pages,
};

/// ルーター構築に必要な依存
pub struct MainSiteDeps {
    pub user_repository:    Arc<dyn UserRepository>,
    pub service_repository: Arc<dyn ServiceOfferingRepository>,
}

/// ルーターを組み立てる
pub fn build_app(deps: MainSiteDeps, content_dir: &Path) -> Result<Router, tera::Error> {
    let state = Arc::new(SiteState {
        user_repository:    deps.user_repository,
        service_repository: deps.service_repository,
        renderer:           pages::renderer()?,
    });

    let public_dir = content_dir.join("public");
    let not_found_page = not_found.with_state(state.clone());

    let app = Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/services", get(services))
        .route("/health", get(health_check))
        // 公開ファイル（フラグ 1）
        .route_service("/robots.txt", ServeFile::new(public_dir.join("robots.txt")))
        .route_service("/sitemap.xml", ServeFile::new(public_dir.join("sitemap.xml")))
        .route_service("/humans.txt", ServeFile::new(public_dir.join("humans.txt")))
        // バックアップファイル（フラグ 2）
        .nest_service(
            "/backup",
            ServeDir::new(content_dir.join("backup")).not_found_service(not_found_page.clone()),
        )
        // リポジトリメタデータ（フラグ 3）
        .nest_service(
            "/.git",
            ServeDir::new(content_dir.join("leaked-git"))
                .not_found_service(git_file_not_found.into_service()),
        )
        .nest_service(
            "/static",
            ServeDir::new(content_dir.join("static")).not_found_service(not_found_page),
        )
        // API（v2 はフラグ 4）
        .route("/api/v1/info", get(api_v1_info))
        .route("/api/v1/status", get(api_v1_status))
        .route("/api/v2/admin/users", get(api_v2_admin_users))
        .route("/api/v2/config", get(api_v2_config))
        .route("/admin/", get(admin_area))
        .route("/secret/", get(secret_area))
        .fallback(not_found)
        .with_state(state)
        // レイヤー順序: 下に書いたものが外側
        .layer(StaticHeadersLayer::new(MAIN_SITE_HEADERS))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

    Ok(app)
}
