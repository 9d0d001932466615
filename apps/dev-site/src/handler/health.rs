//! # ヘルスチェックハンドラ

use axum::Json;
use techcorp_shared::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
