//! # ヘルスチェック共通型
//!
//! 全サービスの `/health` エンドポイントが返すレスポンス型。

use serde::Serialize;

/// ヘルスチェックレスポンス
///
/// `status` は常に `"healthy"`、`version` は呼び出し元クレートのバージョン。
///
/// ```
/// use techcorp_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("0.1.0");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status:  String,
    pub version: String,
}

impl HealthResponse {
    /// 稼働中を表すレスポンスを作る
    ///
    /// バージョンは各サービスで `env!("CARGO_PKG_VERSION")` を渡す。
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status:  "healthy".to_string(),
            version: version.into(),
        }
    }
}
