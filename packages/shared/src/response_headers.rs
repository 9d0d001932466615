//! # レスポンスヘッダー装飾
//!
//! サービスごとの固定ヘッダー（`X-Powered-By`, `X-Debug-Mode` など）を
//! すべてのレスポンスに付与する tower Layer。
//!
//! 各サービスはバナー情報を意図的に漏らしている。404 や 401 を含む
//! すべてのレスポンスで同じヘッダーが見えることが演習の前提になるため、
//! ルーター全体の最外周に近い位置に置く。
//!
//! ```rust,ignore
//! const HEADERS: &[(&str, &str)] = &[("x-environment", "staging")];
//!
//! Router::new()
//!     .route("/", get(index))
//!     .layer(StaticHeadersLayer::new(HEADERS))
//! ```

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use http::{HeaderName, HeaderValue, Request, Response};
use tower::{Layer, Service};

/// 固定ヘッダー一覧（ヘッダー名, 値）
pub type StaticHeaders = &'static [(&'static str, &'static str)];

/// 固定ヘッダーを付与する Layer
///
/// 同名のヘッダーがハンドラ側で設定されていても上書きする。
#[derive(Clone, Copy, Debug)]
pub struct StaticHeadersLayer {
    headers: StaticHeaders,
}

impl StaticHeadersLayer {
    pub const fn new(headers: StaticHeaders) -> Self {
        Self { headers }
    }
}

impl<S> Layer<S> for StaticHeadersLayer {
    type Service = StaticHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        StaticHeadersService {
            inner,
            headers: self.headers,
        }
    }
}

/// [`StaticHeadersLayer`] が生成する Service
#[derive(Clone, Debug)]
pub struct StaticHeadersService<S> {
    inner:   S,
    headers: StaticHeaders,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for StaticHeadersService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let headers = self.headers;
        let future = self.inner.call(req);

        Box::pin(async move {
            let mut response = future.await?;
            decorate(response.headers_mut(), headers);
            Ok(response)
        })
    }
}

/// ヘッダーマップに固定ヘッダーを書き込む
///
/// 名前・値が不正なエントリは定数の誤りなので、警告を出して読み飛ばす。
fn decorate(target: &mut http::HeaderMap, headers: StaticHeaders) {
    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                target.insert(name, value);
            }
            _ => tracing::warn!(header = name, "不正な固定ヘッダーを読み飛ばしました"),
        }
    }
}
