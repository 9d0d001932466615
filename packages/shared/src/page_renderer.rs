//! # ページレンダラー
//!
//! tera テンプレートを `include_str!` でバイナリに埋め込み、名前で描画する。
//! 拡張子 `.html` のテンプレートは自動エスケープされる。対象は `& < > " '` のみで、
//! `/` は変換しない（パスや URL は本文に原文のまま載る）。
//!
//! ```rust,ignore
//! let renderer = PageRenderer::new(vec![
//!     ("base.html", include_str!("../templates/base.html")),
//!     ("index.html", include_str!("../templates/index.html")),
//! ])?;
//! let html = renderer.render("index.html", &tera::Context::new())?;
//! ```

use tera::{Context, Tera};

/// 埋め込みテンプレートのレンダラー
#[derive(Debug)]
pub struct PageRenderer {
    engine: Tera,
}

impl PageRenderer {
    /// テンプレート（名前, 本文）の一覧から作る
    ///
    /// 継承（`{% extends %}`）の解決は登録後にまとめて行われるため、順序は問わない。
    pub fn new(templates: Vec<(&'static str, &'static str)>) -> Result<Self, tera::Error> {
        let mut engine = Tera::default();
        engine.set_escape_fn(escape_html);
        engine.add_raw_templates(templates)?;
        Ok(Self { engine })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.engine.render(name, context)
    }
}

/// HTML の特殊文字だけをエスケープする
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn renderer() -> PageRenderer {
        PageRenderer::new(vec![
            ("base.html", "<title>{% block title %}{% endblock %}</title>"),
            (
                "page.html",
                "{% extends \"base.html\" %}{% block title %}{{ name }}{% endblock %}",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_継承したテンプレートを描画できる() {
        let mut context = Context::new();
        context.insert("name", "TechCorp");

        assert_eq!(
            renderer().render("page.html", &context).unwrap(),
            "<title>TechCorp</title>"
        );
    }

    #[test]
    fn test_htmlテンプレートは値をエスケープする() {
        let mut context = Context::new();
        context.insert("name", "<script>");

        assert_eq!(
            renderer().render("page.html", &context).unwrap(),
            "<title>&lt;script&gt;</title>"
        );
    }

    #[test]
    fn test_スラッシュはエスケープしない() {
        let mut context = Context::new();
        context.insert("name", "sqlite:///dev.db & /var/www");

        assert_eq!(
            renderer().render("page.html", &context).unwrap(),
            "<title>sqlite:///dev.db &amp; /var/www</title>"
        );
    }

    #[test]
    fn test_escape_htmlは特殊文字5種のみ変換する() {
        assert_eq!(
            escape_html(r#"<a href="/x">'O&K'</a>"#),
            "&lt;a href=&quot;/x&quot;&gt;&#x27;O&amp;K&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_未登録のテンプレートはエラー() {
        assert!(renderer().render("missing.html", &Context::new()).is_err());
    }

    #[test]
    fn test_構文エラーのテンプレートは登録時にエラー() {
        assert!(PageRenderer::new(vec![("broken.html", "{% if %}")]).is_err());
    }
}
