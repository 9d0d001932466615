//! # TechCorp Staging Site サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `STAGING_SITE_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `STAGING_SITE_PORT` | No | ポート番号（デフォルト: `5002`） |
//! | `LOG_FORMAT` | No | `json` で JSON 出力 |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p techcorp-staging-site
//! ```

use techcorp_shared::observability::{TracingConfig, init_tracing};
use techcorp_staging_site::{app_builder::build_app, config::StagingSiteConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("staging-site"));
    let _tracing_guard = tracing::info_span!("app", service = "staging-site").entered();

    let config = StagingSiteConfig::from_env()?;

    let app = build_app()?;

    let listener = TcpListener::bind(config.server.bind_target()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Staging Site が起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
