//! Block segmentation, classification and construction
//!
//! A document is a sequence of blocks separated by blank lines. Each block is
//! classified once and handed to the builder for its type.
//!
//! # Block Mapping
//!
//! | Block          | Recognized by                                   | HTML                         |
//! |----------------|-------------------------------------------------|------------------------------|
//! | Heading        | 1–6 `#` then a space                            | `<hN>` inline `</hN>`        |
//! | Code           | starts and ends with ```` ``` ````              | `<pre><code>raw</code></pre>`|
//! | Quote          | every line starts with `>`                      | `<blockquote>`               |
//! | UnorderedList  | every line starts with `- `                     | `<ul><li>…</li></ul>`        |
//! | OrderedList    | line i starts with `i. ` (1-based, no gaps)     | `<ol><li>…</li></ol>`        |
//! | Paragraph      | anything else                                   | `<p>` lines joined by spaces |
//!
//! Code content is never tokenized. A block that fails a rule falls through
//! to the next one, so an unclosed fence or a gapped list ends up as a
//! paragraph.

mod build;
mod classify;
mod segment;

pub use build::{
    block_to_html_node, code_to_html_node, heading_to_html_node, ordered_list_to_html_node,
    paragraph_to_html_node, quote_to_html_node, unordered_list_to_html_node,
};
pub use classify::{block_to_block_type, BlockType};
pub use segment::markdown_to_blocks;
