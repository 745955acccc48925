//! HTML node tree
//!
//! The output side of the pipeline. Markdown blocks are turned into a tree of
//! [`HtmlNode`]s which then render themselves to a literal HTML string.
//!
//! # Node Kinds
//!
//! | Variant  | Has value | Has children | Tag      | Renders as                          |
//! |----------|-----------|--------------|----------|-------------------------------------|
//! | `Leaf`   | yes       | never        | optional | raw value, or `<tag>value</tag>`    |
//! | `Parent` | never     | yes (≥ 1)    | required | `<tag>` + children + `</tag>`       |
//!
//! The leaf/parent split is encoded in the type, so a node can never carry both
//! a value and children. What the types do not rule out (a parent without a tag
//! or without children) is checked at render time and reported as
//! [`MarkdownError::Structural`](crate::error::MarkdownError::Structural).
//!
//! # Attributes
//!
//! Attributes render in insertion order, `key="value"` pairs separated by a
//! single space and preceded by one space after the tag name. No escaping is
//! performed on attribute values or text.

mod node;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode};
