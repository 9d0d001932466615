//! # Staging Site ルーターの統合テスト

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use techcorp_staging_site::{app_builder::build_app, diagnostics::ENVIRONMENT_VARIABLES};
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    build_app().unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_phpinfoは認証なしでフラグ6とdbパスワードを返す(app: Router) {
    let response = app.oneshot(get_request("/phpinfo.php")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("FLAG{staging_env_exposed_8g3b}"));
    assert!(body.contains("St@g1ng_P@ss_2024"));
    assert!(body.contains("PHP Version 8.2.0-dev"));
    assert!(body.contains("staging_api_key_abc123xyz"));
}

#[rstest]
#[tokio::test]
async fn test_phpinfoのパスはエスケープされず原文のまま載る(app: Router) {
    let body = body_string(app.oneshot(get_request("/phpinfo.php")).await.unwrap()).await;

    assert!(body.contains("<td class=\"v\">/var/www/staging</td>"));
    assert!(body.contains("/etc/php/8.2/fpm/php.ini"));
    assert!(!body.contains("&#x2F;"));
}

#[rstest]
#[tokio::test]
async fn test_phpinfoに警告と注釈付きの設定と次の一手がある(app: Router) {
    let body = body_string(app.oneshot(get_request("/phpinfo.php")).await.unwrap()).await;

    assert!(body.contains("WARNING: This page should NOT be accessible in production!"));
    assert!(body.contains("On (BAD - reveals PHP version)"));
    assert!(body.contains("E_ALL (verbose)"));
    assert!(body.contains(
        "Database credentials are exposed above. Try accessing admin.techcorp.local next!"
    ));
    assert!(body.contains("<td class=\"e\">Admin Email</td><td class=\"v\">admin@techcorp.local</td>"));
    assert!(body.contains("Never expose phpinfo() on production servers!"));
}

#[rstest]
#[tokio::test]
async fn test_phpinfoの環境変数は定義順に並ぶ(app: Router) {
    let body = body_string(app.oneshot(get_request("/phpinfo.php")).await.unwrap()).await;

    let positions: Vec<usize> = ENVIRONMENT_VARIABLES
        .iter()
        .map(|(name, _)| {
            body.find(&format!(">{name}<"))
                .unwrap_or_else(|| panic!("{name} が表示されていない"))
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[rstest]
#[tokio::test]
async fn test_infoは環境情報をjsonで返す(app: Router) {
    let response = app.oneshot(get_request("/info")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body,
        json!({
            "environment": "staging",
            "version": "2.1.4-staging",
            "flag": "FLAG{staging_env_exposed_8g3b}",
            "server": "staging.techcorp.local",
            "database": {
                "host": "staging-db.internal.techcorp.local",
                "name": "techcorp_staging",
                "user": "staging_admin",
                "password": "St@g1ng_P@ss_2024"
            },
            "features_enabled": ["debug_toolbar", "sql_logging", "profiler", "error_reporting"],
            "internal_services": {
                "redis": "staging-redis.internal",
                "elasticsearch": "staging-es.internal",
                "rabbitmq": "staging-mq.internal"
            },
            "hints": [
                "phpinfo.php is accessible (major security issue)",
                "Database credentials are exposed",
                "Try the admin portal: admin.techcorp.local",
                "Admin authentication might be weak"
            ]
        })
    );
}

#[rstest]
#[tokio::test]
async fn test_テストページはphpinfoへ誘導する(app: Router) {
    let response = app.oneshot(get_request("/test.php")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("FLAG Hint: Check phpinfo.php for the flag!"));
    assert!(!body.contains("FLAG{"));
}

#[rstest]
#[tokio::test]
async fn test_トップページにフラグはない(app: Router) {
    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_string(response).await.contains("FLAG{"));
}

#[rstest]
#[tokio::test]
async fn test_health(app: Router) {
    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[rstest]
#[case("/")]
#[case("/phpinfo.php")]
#[case("/wp-admin/")]
#[tokio::test]
async fn test_すべてのレスポンスにステージングヘッダーが付く(
    app: Router,
    #[case] path: &str,
) {
    let response = app.oneshot(get_request(path)).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-environment"], "staging");
    assert_eq!(headers["x-techcorp-version"], "2.1.4-staging");
    assert_eq!(headers["x-server-type"], "staging-web-01");
    assert_eq!(headers["x-debug-info"], "enabled");
    assert!(headers.contains_key("x-request-id"));
}

#[rstest]
#[tokio::test]
async fn test_未定義パスはhtmlの404(app: Router) {
    let response = app.oneshot(get_request("/wp-admin/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404 - Not Found"));
}
