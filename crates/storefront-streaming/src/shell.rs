//! Document shell: everything before and after the streamed sections.

use std::fmt::Write;

use storefront_core::Locale;

use crate::html::escape;

/// `<head>` content: title, named meta tags and inline CSS.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    pub title: String,
    pub meta: Vec<(String, String)>,
    pub styles: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Inline a stylesheet. CSS is emitted as-is.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");
        if !self.title.is_empty() {
            let _ = writeln!(html, "<title>{}</title>", escape(&self.title));
        }
        for (name, content) in &self.meta {
            let _ = writeln!(html, r#"<meta name="{}" content="{}">"#, escape(name), escape(content));
        }
        for css in &self.styles {
            let _ = writeln!(html, "<style>{css}</style>");
        }
        html
    }
}

/// Document shell with the locale baked into the root element.
#[derive(Debug, Clone)]
pub struct Shell {
    pub locale: Locale,
    pub head: HeadContent,
    /// HTML before sections (opening body, header, wrapper).
    pub body_start: String,
    /// HTML after sections (closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a shell with a bare body.
    pub fn new(locale: Locale, head: HeadContent) -> Self {
        Self {
            locale,
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render everything up to the first section.
    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{lang}\" dir=\"{dir}\">\n<head>\n{head}</head>\n{body}",
            lang = self.locale.code(),
            dir = self.locale.dir().as_str(),
            head = self.head.render(),
            body = self.body_start,
        )
    }

    /// Render everything after the last section.
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}
