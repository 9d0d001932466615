//! # 埋め込みテンプレート

use techcorp_shared::page_renderer::PageRenderer;

/// Admin Portal のテンプレートを登録したレンダラーを作る
pub fn renderer() -> Result<PageRenderer, tera::Error> {
    PageRenderer::new(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("login.html", include_str!("../templates/login.html")),
        ("dashboard.html", include_str!("../templates/dashboard.html")),
        ("404.html", include_str!("../templates/404.html")),
    ])
}
