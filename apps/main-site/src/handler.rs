//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `page`: 公開ページ（HTML）
//! - `api`: ドキュメント済みの v1 API と未ドキュメントの v2 API
//! - `restricted`: 存在だけを示す保護パス

pub mod api;
pub mod health;
pub mod page;
pub mod restricted;

use std::sync::Arc;

pub use api::{api_v1_info, api_v1_status, api_v2_admin_users, api_v2_config};
pub use health::health_check;
pub use page::{about, contact, index, not_found, services};
pub use restricted::{admin_area, git_file_not_found, secret_area};
use techcorp_infra::repository::{ServiceOfferingRepository, UserRepository};
use techcorp_shared::page_renderer::PageRenderer;

/// ハンドラ共通の State
pub struct SiteState {
    pub user_repository:    Arc<dyn UserRepository>,
    pub service_repository: Arc<dyn ServiceOfferingRepository>,
    pub renderer:           PageRenderer,
}
