//! # Dev Site ルーターの統合テスト

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use techcorp_dev_site::app_builder::{build_app, build_router, route_table};
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

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn registered_paths() -> Vec<&'static str> {
    route_table().into_iter().map(|(path, _)| path).collect()
}

#[rstest]
#[tokio::test]
async fn test_トップページにフラグ5と秘密鍵がある(app: Router) {
    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("FLAG{dev_subdomain_pwned_5f2a}"));
    assert!(body.contains("super-secret-dev-key-123"));
    assert!(body.contains("sqlite:///dev_database.db"));
}

#[rstest]
#[tokio::test]
async fn test_debugはルート一覧と環境情報を返す(app: Router) {
    let response = app.oneshot(get_request("/debug")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["flag"], "FLAG{dev_subdomain_pwned_5f2a}");
    assert_eq!(body["routes"], json!(registered_paths()));
    assert_eq!(body["config"]["SECRET_KEY"], "super-secret-dev-key-123");
    assert!(
        body["environment_variables"]["PATH"]
            .as_str()
            .unwrap()
            .ends_with("...")
    );
    assert!(body["system_info"]["platform"].is_string());
    assert!(body["server_time"].is_string());
}

#[rstest]
#[tokio::test]
async fn test_api_status(app: Router) {
    let body = body_json(app.oneshot(get_request("/api/status")).await.unwrap()).await;

    assert_eq!(
        body,
        json!({
            "status": "development",
            "debug": true,
            "environment": "dev",
            "endpoints": ["/debug", "/api/status", "/config"]
        })
    );
}

#[rstest]
#[tokio::test]
async fn test_configは設定値をそのまま返す(app: Router) {
    let body = body_json(app.oneshot(get_request("/config")).await.unwrap()).await;

    assert_eq!(
        body,
        json!({
            "flag": "FLAG{dev_subdomain_pwned_5f2a}",
            "configuration": {
                "SECRET_KEY": "super-secret-dev-key-123",
                "DEBUG": true,
                "DATABASE_URI": "sqlite:///dev_database.db",
                "ALLOWED_HOSTS": ["dev.techcorp.local", "localhost"],
                "ADMIN_EMAIL": "john.dev@techcorp.local",
                "STAGING_URL": "http://staging.techcorp.local:8082",
                "ADMIN_PORTAL": "http://admin.techcorp.local:8083"
            }
        })
    );
}

#[rstest]
#[tokio::test]
async fn test_404は全ルートを列挙する(app: Router) {
    let response = app.oneshot(get_request("/phpmyadmin")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "404 Not Found");
    assert_eq!(body["available_routes"], json!(registered_paths()));
    assert!(body["available_routes"]
        .as_array()
        .unwrap()
        .contains(&json!("/health")));
}

#[rstest]
#[tokio::test]
async fn test_ルート一覧の全パスが実際に応答する(app: Router) {
    for path in registered_paths() {
        let response = app.clone().oneshot(get_request(path)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_パニックはデバッグ情報付きの500() {
    async fn boom() -> &'static str {
        panic!("division by zero in report generator")
    }

    let mut routes = route_table();
    routes.push(("/boom", get(boom)));
    let app = build_router(routes).unwrap();

    let response = app.oneshot(get_request("/boom")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()["x-debug-mode"], "enabled");
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "error": "500 Internal Server Error",
            "message": "division by zero in report generator",
            "debug_mode": true,
            "traceback": "Full traceback would appear here in dev mode"
        })
    );
}

#[rstest]
#[case("/")]
#[case("/missing")]
#[tokio::test]
async fn test_すべてのレスポンスにデバッグヘッダーが付く(app: Router, #[case] path: &str) {
    let response = app.oneshot(get_request(path)).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-debug-mode"], "enabled");
    assert_eq!(headers["x-environment"], "development");
    assert_eq!(headers["x-flask-debug"], "true");
    assert_eq!(headers["x-developer"], "john.dev@techcorp.local");
    assert_eq!(headers["x-internal-ip"], "10.0.0.15");
}
