//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `debug`: トップページ・`/debug`・`/api/status`・`/config`
//! - `fallback`: ルート一覧を漏らす 404

pub mod debug;
pub mod fallback;
pub mod health;

pub use debug::{api_status, config, debug_info, index};
pub use fallback::not_found;
pub use health::health_check;
use techcorp_shared::page_renderer::PageRenderer;

/// ハンドラ共通の State
pub struct DevState {
    pub renderer: PageRenderer,
    /// ルーターに登録した全パス（登録順）
    pub routes:   Vec<&'static str>,
}
