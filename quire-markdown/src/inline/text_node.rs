//! Inline span representation.

use crate::html::LeafNode;
use serde::Serialize;

/// The kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextType {
    Normal,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A span of inline text. `url` is set for links and images only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    pub text: String,
    pub text_type: TextType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        TextNode {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        TextNode::new(text, TextType::Normal)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        TextNode {
            text: text.into(),
            text_type: TextType::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        TextNode {
            text: alt.into(),
            text_type: TextType::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_normal(&self) -> bool {
        self.text_type == TextType::Normal
    }

    /// Map this span to its HTML leaf.
    ///
    /// | TextType | tag    | value | attributes      |
    /// |----------|--------|-------|-----------------|
    /// | Normal   | (none) | text  |                 |
    /// | Bold     | `b`    | text  |                 |
    /// | Italic   | `i`    | text  |                 |
    /// | Code     | `code` | text  |                 |
    /// | Link     | `a`    | text  | `href`          |
    /// | Image    | `img`  | ""    | `src`, `alt`    |
    pub fn to_html_node(&self) -> LeafNode {
        let url = self.url.as_deref().unwrap_or_default();
        match self.text_type {
            TextType::Normal => LeafNode::text(self.text.as_str()),
            TextType::Bold => LeafNode::new("b", self.text.as_str()),
            TextType::Italic => LeafNode::new("i", self.text.as_str()),
            TextType::Code => LeafNode::new("code", self.text.as_str()),
            TextType::Link => LeafNode::new("a", self.text.as_str()).with_attribute("href", url),
            TextType::Image => LeafNode::new("img", "")
                .with_attribute("src", url)
                .with_attribute("alt", self.text.as_str()),
        }
    }
}

impl From<TextNode> for LeafNode {
    fn from(node: TextNode) -> Self {
        node.to_html_node()
    }
}
