//! # 保護パス
//!
//! robots.txt に載っているパスのうち、中身を持たないもの。
//! ステータスコードだけで「何かある」ことを示す。

use axum::{http::StatusCode, response::IntoResponse};

/// GET /admin/
///
/// チャレンジヘッダーは付けない。
pub async fn admin_area() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        "Unauthorized - Admin access required",
    )
}

/// GET /secret/
pub async fn secret_area() -> impl IntoResponse {
    (StatusCode::FORBIDDEN, "Forbidden - Access denied")
}

/// `/.git/` 配下で見つからなかったファイル
pub async fn git_file_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "File not found")
}
