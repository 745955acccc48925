//! Error types for markdown conversion

use thiserror::Error;

/// Errors that can occur while converting a markdown document to HTML
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkdownError {
    /// The markdown source is malformed (unclosed delimiter, bad block prefix, ...)
    #[error("Invalid markdown syntax: {0}")]
    Syntax(String),
    /// An HTML node tree cannot be rendered (parent without tag or children)
    #[error("Invalid HTML structure: {0}")]
    Structural(String),
    /// The first line of the document holds no title text
    #[error("Document title is empty")]
    EmptyTitle,
}

impl MarkdownError {
    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        MarkdownError::Syntax(msg.into())
    }

    pub(crate) fn structural(msg: impl Into<String>) -> Self {
        MarkdownError::Structural(msg.into())
    }
}
