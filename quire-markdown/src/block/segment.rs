//! Block segmentation.

/// Split a document into blocks separated by blank lines.
///
/// The document and every block are trimmed, empty blocks are dropped, and
/// single newlines inside a block are kept.
pub fn markdown_to_blocks(markdown: &str) -> Vec<String> {
    markdown
        .trim()
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_blocks() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_excess_blank_lines_are_dropped() {
        let md = "\n\n\n# Heading\n\n\n\n\nParagraph   \n\n   \n\n";
        assert_eq!(markdown_to_blocks(md), vec!["# Heading", "Paragraph"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(markdown_to_blocks("").is_empty());
        assert!(markdown_to_blocks("  \n\n \n").is_empty());
    }

    #[test]
    fn test_segmentation_is_idempotent() {
        let md = "# A\n\n\n\npara one\nline two\n\n\n- x\n- y";
        let blocks = markdown_to_blocks(md);
        assert_eq!(markdown_to_blocks(&blocks.join("\n\n")), blocks);
    }
}
