//! # Canonical Log Line
//!
//! リクエスト完了時に、メソッド・パス・ステータス・レイテンシを 1 行にまとめた
//! サマリログを出力する tower Layer。
//!
//! 演習では「どのパスが何回叩かれたか」を追えることが重要なので、
//! 404 や 401 も含めてすべて出力する。`/health` だけは除外する。
//!
//! ```text
//! TraceLayer → CanonicalLogLineLayer → handler
//! ```
//!
//! TraceLayer の内側に置くことで、`request_id` などのスパンフィールドが付与される。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Request, Response};
use tower::{Layer, Service};

fn is_health_check_path(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// Canonical Log Line を出力する Layer
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

/// [`CanonicalLogLineLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を使い、手元には clone を残す
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let path = req.uri().path().to_owned();
        if is_health_check_path(&path) {
            return Box::pin(async move { inner.call(req).await });
        }

        let method = req.method().to_string();
        let start = Instant::now();

        Box::pin(async move {
            let result = inner.call(req).await;
            let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(response) => tracing::info!(
                    log.r#type = "canonical",
                    http.method = %method,
                    http.path = %path,
                    http.status_code = response.status().as_u16(),
                    http.latency_ms = latency_ms,
                    "リクエスト完了"
                ),
                Err(err) => tracing::error!(
                    log.r#type = "canonical",
                    http.method = %method,
                    http.path = %path,
                    http.latency_ms = latency_ms,
                    error.message = %err,
                    "リクエスト処理エラー"
                ),
            }

            result
        })
    }
}
