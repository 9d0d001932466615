//! # TechCorp Dev Site サーバー
//!
//! デバッグモードが有効なままの開発環境。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DEV_SITE_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `DEV_SITE_PORT` | No | ポート番号（デフォルト: `5001`） |
//! | `LOG_FORMAT` | No | `json` で JSON 出力 |

use techcorp_dev_site::{app_builder::build_app, config::DevSiteConfig, settings::DEV_SETTINGS};
use techcorp_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("dev-site"));
    let _tracing_guard = tracing::info_span!("app", service = "dev-site").entered();

    let config = DevSiteConfig::from_env()?;
    tracing::warn!(
        environment = DEV_SETTINGS.env,
        debug = DEV_SETTINGS.debug,
        "デバッグモードで起動します"
    );

    let app = build_app()?;

    let listener = TcpListener::bind(config.server.bind_target()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Dev Site が起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
