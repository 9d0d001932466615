//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `page`: ログインページ・ダッシュボード・404 ページ（HTML）
//! - `admin_api`: 認証済み管理 API（JSON）

pub mod admin_api;
pub mod health;
pub mod page;

use std::sync::Arc;

pub use admin_api::{admin_config, admin_status, admin_users};
pub use health::health_check;
pub use page::{dashboard, login_page, not_found};
use techcorp_domain::access_gate::AccessGate;
use techcorp_shared::page_renderer::PageRenderer;

/// ハンドラ共通の State
pub struct PortalState {
    pub gate:     Arc<AccessGate>,
    pub renderer: PageRenderer,
}
