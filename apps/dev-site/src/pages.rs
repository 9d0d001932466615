//! # 埋め込みテンプレート

use techcorp_shared::page_renderer::PageRenderer;

pub fn renderer() -> Result<PageRenderer, tera::Error> {
    PageRenderer::new(vec![("index.html", include_str!("../templates/index.html"))])
}
