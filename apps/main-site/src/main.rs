//! # TechCorp Main Site サーバー
//!
//! 会社の公開 Web サイト。起動時に SQLite のマイグレーションとシード投入を行う。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MAIN_SITE_HOST` | No | バインドアドレス（デフォルト: `127.0.0.1`） |
//! | `MAIN_SITE_PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `MAIN_SITE_DATABASE_URL` | No | SQLite 接続 URL |
//! | `MAIN_SITE_CONTENT_DIR` | No | 静的コンテンツのディレクトリ |
//! | `LOG_FORMAT` | No | `json` で JSON 出力 |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p techcorp-main-site
//! ```

use std::sync::Arc;

use techcorp_infra::{
    db,
    repository::{SqliteServiceOfferingRepository, SqliteUserRepository},
    seed,
};
use techcorp_main_site::{
    app_builder::{MainSiteDeps, build_app},
    config::MainSiteConfig,
};
use techcorp_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("main-site"));
    let _tracing_guard = tracing::info_span!("app", service = "main-site").entered();

    let config = MainSiteConfig::from_env()?;
    tracing::info!(
        database_url = %config.database_url,
        content_dir = %config.content_dir.display(),
        "Main Site を起動します"
    );

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    let report = seed::seed_if_empty(&pool).await?;
    if report.users_inserted > 0 || report.services_inserted > 0 {
        tracing::info!(
            users = report.users_inserted,
            services = report.services_inserted,
            "シードデータを投入しました"
        );
    }

    let deps = MainSiteDeps {
        user_repository:    Arc::new(SqliteUserRepository::new(pool.clone())),
        service_repository: Arc::new(SqliteServiceOfferingRepository::new(pool)),
    };
    let app = build_app(deps, &config.content_dir)?;

    let listener = TcpListener::bind(config.server.bind_target()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Main Site が起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
