//! Markdown to HTML conversion for static sites
//!
//!     This crate turns a markdown subset into an HTML node tree and renders it to a string,
//!     then wraps the result into page templates and writes whole sites to disk.
//!
//!     The conversion is a pure function of its input: the same document always produces the
//!     same HTML or the same error. Nothing in the core (html, inline, block, document) touches
//!     the file system; only publish does.
//!
//! Architecture
//!
//!     Conversion runs in two layers. The block layer segments the document on blank lines,
//!     classifies every block and builds one parent node per block. The inline layer splits
//!     the text inside a block into typed text nodes (images, links, code, bold, italic, in
//!     that order) and turns them into leaf nodes.
//!
//!         markdown ─► blocks ─► block types ─► ParentNode per block ─► <div> ─► String
//!                                                  │
//!                                                  └─► inline text ─► TextNode ─► LeafNode
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # MarkdownError (syntax, structural, empty title)
//!     ├── html                # Node tree and rendering
//!     ├── inline              # Inline tokenizer
//!     ├── block               # Block segmentation, classification and builders
//!     ├── document.rs         # Whole-document conversion and title extraction
//!     ├── template.rs         # {{ Title }} / {{ Content }} page templates
//!     ├── publish.rs          # Page generation and site builds
//!     ├── treeviz.rs          # Visual dump of node trees
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── html
//!     └── markdown
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod block;
pub mod document;
pub mod error;
pub mod html;
pub mod inline;
pub mod publish;
pub mod template;
pub mod treeviz;

pub use block::BlockType;
pub use document::{extract_document_title, markdown_to_html_node, render_markdown_document};
pub use error::MarkdownError;
pub use html::{Attributes, HtmlNode, LeafNode, ParentNode};
pub use inline::{TextNode, TextType};
pub use publish::{build_site, BuildReport, PublishError, SiteSpec};
pub use template::PageTemplate;
