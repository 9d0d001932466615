//! # 埋め込みテンプレート

use techcorp_shared::page_renderer::PageRenderer;

pub fn renderer() -> Result<PageRenderer, tera::Error> {
    PageRenderer::new(vec![
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("phpinfo.html", include_str!("../templates/phpinfo.html")),
        ("test.html", include_str!("../templates/test.html")),
        ("404.html", include_str!("../templates/404.html")),
    ])
}
