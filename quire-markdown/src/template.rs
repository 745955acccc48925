//! Page templates.
//!
//! A page template is a plain HTML file with two placeholders:
//!
//! - `{{ Title }}`: replaced by the document title (see [`extract_document_title`])
//! - `{{ Content }}`: replaced by the rendered document (see [`render_markdown_document`])
//!
//! Every occurrence of a placeholder is replaced. Nothing else in the template
//! is interpreted.
//!
//! # Example
//!
//! ```ignore
//! let template = PageTemplate::new("<title>{{ Title }}</title><body>{{ Content }}</body>");
//! let html = template.render_markdown("# Hello\n\nWorld")?;
//! // <title>Hello</title><body><div><h1>Hello</h1><p>World</p></div></body>
//! ```

use crate::document::{extract_document_title, render_markdown_document};
use crate::error::MarkdownError;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Built-in template used when a site does not provide its own.
pub const DEFAULT_TEMPLATE: &str = "<!DOCTYPE html>
<html>
<head>
    <meta charset=\"utf-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{{ Title }}</title>
</head>
<body>
    <article>{{ Content }}</article>
</body>
</html>
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        PageTemplate {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Fill the placeholders with an already rendered title and content.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }

    /// Extract the title, render the document and fill the template.
    pub fn render_markdown(&self, markdown: &str) -> Result<String, MarkdownError> {
        let title = extract_document_title(markdown)?;
        let content = render_markdown_document(markdown)?;
        Ok(self.render(&title, &content))
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        PageTemplate::new(DEFAULT_TEMPLATE)
    }
}

/// Render `markdown` as a full page using `template`.
pub fn render_page(markdown: &str, template: &PageTemplate) -> Result<String, MarkdownError> {
    template.render_markdown(markdown)
}
