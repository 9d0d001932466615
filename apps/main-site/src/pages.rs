//! # 埋め込みテンプレート

use techcorp_shared::page_renderer::PageRenderer;

/// Main Site のテンプレートを登録したレンダラーを作る
pub fn renderer() -> Result<PageRenderer, tera::Error> {
    PageRenderer::new(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("about.html", include_str!("../templates/about.html")),
        ("contact.html", include_str!("../templates/contact.html")),
        ("services.html", include_str!("../templates/services.html")),
        ("404.html", include_str!("../templates/404.html")),
    ])
}
