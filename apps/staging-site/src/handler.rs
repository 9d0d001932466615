//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `page`: トップ・phpinfo・テストページ・404（HTML）
//! - `info`: 環境情報（JSON）

pub mod health;
pub mod info;
pub mod page;

pub use health::health_check;
pub use info::info;
use techcorp_shared::page_renderer::PageRenderer;
pub use page::{index, not_found, phpinfo, test_page};

use crate::diagnostics::PhpInfo;

/// ハンドラ共通の State
pub struct StagingState {
    pub renderer: PageRenderer,
    pub php_info: PhpInfo,
}
