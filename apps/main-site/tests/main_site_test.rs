//! # Main Site ルーターの統合テスト
//!
//! リポジトリはインメモリモック、コンテンツはクレート同梱の `content/` を使う。

use std::{path::Path, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use techcorp_domain::flag::Flag;
use techcorp_infra::mock::{FailingRepository, MockServiceOfferingRepository, MockUserRepository};
use techcorp_main_site::{
    app_builder::{MainSiteDeps, build_app},
    config::DEFAULT_CONTENT_DIR,
};
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    let deps = MainSiteDeps {
        user_repository:    Arc::new(MockUserRepository::seeded()),
        service_repository: Arc::new(MockServiceOfferingRepository::seeded()),
    };
    build_app(deps, Path::new(DEFAULT_CONTENT_DIR)).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[rstest]
#[case("/")]
#[case("/about")]
#[case("/contact")]
#[case("/services")]
#[tokio::test]
async fn test_公開ページは200(app: Router, #[case] path: &str) {
    let response = app.oneshot(get(path)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn test_トップページに提供サービスが並ぶ(app: Router) {
    let body = body_string(app.oneshot(get("/")).await.unwrap()).await;

    assert!(body.contains("Penetration Testing"));
    assert!(body.contains("24/7 security incident handling and forensics"));
}

#[rstest]
#[tokio::test]
async fn test_aboutにユーザーとロールが並ぶ(app: Router) {
    let body = body_string(app.oneshot(get("/about")).await.unwrap()).await;

    assert!(body.contains("<strong>pentester</strong> (auditor)"));
}

#[rstest]
#[tokio::test]
async fn test_robots_txtに隠しパスとフラグ1がある(app: Router) {
    let response = app.oneshot(get("/robots.txt")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    for path in ["/backup/", "/.git/", "/api/v2/", "/admin/", "/secret/"] {
        assert!(body.contains(&format!("Disallow: {path}")), "{path}");
    }
    assert!(body.contains(Flag::RobotsTxt.value()));
}

#[rstest]
#[case("/sitemap.xml")]
#[case("/humans.txt")]
#[case("/static/js/main.js")]
#[tokio::test]
async fn test_公開ファイルを配信する(app: Router, #[case] path: &str) {
    let response = app.oneshot(get(path)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn test_バックアップファイルにフラグ2がある(app: Router) {
    let response = app
        .oneshot(get("/backup/database_backup.sql"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains(Flag::BackupFile.value()));
}

#[rstest]
#[tokio::test]
async fn test_存在しないバックアップファイルは404ページ(app: Router) {
    let response = app.oneshot(get("/backup/nothing.zip")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404 - Page Not Found"));
}

#[rstest]
#[tokio::test]
async fn test_git_configにフラグ3がある(app: Router) {
    let response = app.oneshot(get("/.git/config")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(Flag::GitConfig.value()));
    assert!(body.contains("[remote \"origin\"]"));
}

#[rstest]
#[tokio::test]
async fn test_存在しないgitファイルは平文の404(app: Router) {
    let response = app.oneshot(get("/.git/packed-refs")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "File not found");
}

#[rstest]
#[tokio::test]
async fn test_v1_info(app: Router) {
    let body = body_json(app.oneshot(get("/api/v1/info")).await.unwrap()).await;

    assert_eq!(
        body,
        json!({
            "version": "1.0",
            "name": "TechCorp API",
            "endpoints": ["/api/v1/info", "/api/v1/status"],
            "documentation": "/api/v1/docs"
        })
    );
}

#[rstest]
#[tokio::test]
async fn test_v1_status(app: Router) {
    let body = body_json(app.oneshot(get("/api/v1/status")).await.unwrap()).await;

    assert_eq!(
        body,
        json!({
            "status": "operational",
            "uptime": "99.9%",
            "services": ["web", "api", "database"],
            "version": "2.1.4"
        })
    );
}

#[rstest]
#[case(None)]
#[case(Some("Basic YWRtaW46YWRtaW4xMjM="))]
#[case(Some("Bearer garbage"))]
#[tokio::test]
async fn test_v2_admin_usersは認証情報にかかわらず200でフラグ4を返す(
    app: Router,
    #[case] authorization: Option<&str>,
) {
    let mut builder = Request::builder().uri("/api/v2/admin/users");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["flag"], "FLAG{api_v2_discovered_1e9f}");
    assert_eq!(
        body["users"][1],
        json!({
            "id": 2,
            "username": "developer",
            "email": "john.dev@techcorp.local",
            "role": "developer"
        })
    );
    assert_eq!(body["hint"], "Try enumerating subdomains: dev, staging, admin");
}

#[rstest]
#[tokio::test]
async fn test_v2_configは403だが本文に環境一覧がある(app: Router) {
    let response = app.oneshot(get("/api/v2/config")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(
        body["environments"],
        json!({
            "production": "techcorp.local",
            "development": "dev.techcorp.local",
            "staging": "staging.techcorp.local",
            "admin": "admin.techcorp.local"
        })
    );
    assert_eq!(body["secret_key"], "REDACTED");
}

#[rstest]
#[case("/admin/", StatusCode::UNAUTHORIZED, "Unauthorized - Admin access required")]
#[case("/secret/", StatusCode::FORBIDDEN, "Forbidden - Access denied")]
#[tokio::test]
async fn test_保護パスはステータスのみ返す(
    app: Router,
    #[case] path: &str,
    #[case] status: StatusCode,
    #[case] body: &str,
) {
    let response = app.oneshot(get(path)).await.unwrap();

    assert_eq!(response.status(), status);
    assert!(!response.headers().contains_key(header::WWW_AUTHENTICATE));
    assert_eq!(body_string(response).await, body);
}

#[rstest]
#[case("/")]
#[case("/nope")]
#[case("/admin/")]
#[case("/.git/missing")]
#[tokio::test]
async fn test_すべてのレスポンスに偽装バナーが付く(app: Router, #[case] path: &str) {
    let response = app.oneshot(get(path)).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-powered-by"], "Flask/3.0.0");
    assert_eq!(headers["x-techcorp-version"], "2.1.4");
    assert_eq!(headers["server"], "nginx/1.24.0");
}

#[rstest]
#[tokio::test]
async fn test_未定義パスは404ページ(app: Router) {
    let response = app.oneshot(get("/wp-login.php")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404 - Page Not Found"));
}

#[tokio::test]
async fn test_リポジトリ障害は汎用の500() {
    let deps = MainSiteDeps {
        user_repository:    Arc::new(FailingRepository),
        service_repository: Arc::new(FailingRepository),
    };
    let app = build_app(deps, Path::new(DEFAULT_CONTENT_DIR)).unwrap();

    let response = app.oneshot(get("/api/v2/admin/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Internal Server Error");
}
