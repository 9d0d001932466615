//! # TechCorp Admin Portal サーバー
//!
//! 弱い Basic 認証で保護された管理ポータル。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ADMIN_PORTAL_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `ADMIN_PORTAL_PORT` | No | ポート番号（デフォルト: `5003`） |
//! | `LOG_FORMAT` | No | `json` で JSON 出力 |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p techcorp-admin-portal
//! ```

use techcorp_admin_portal::{
    app_builder::{access_gate, build_app},
    config::AdminPortalConfig,
};
use techcorp_domain::credential::SEEDED_ADMIN_ACCOUNTS;
use techcorp_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("admin-portal"));
    let _tracing_guard = tracing::info_span!("app", service = "admin-portal").entered();

    let config = AdminPortalConfig::from_env()?;

    let gate = access_gate(SEEDED_ADMIN_ACCOUNTS)?;
    tracing::info!(
        accounts = ?gate.credentials().usernames().collect::<Vec<_>>(),
        realm = %gate.realm(),
        "認証情報セットを読み込みました"
    );

    let app = build_app(gate)?;

    let listener = TcpListener::bind(config.server.bind_target()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Admin Portal が起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
