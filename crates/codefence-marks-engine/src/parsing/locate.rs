use crate::document::LineSource;
use crate::position::{Position, Range};

use super::fence::CodeFence;

/// A complete fenced block found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Text after the opening marker. May be empty.
    pub info: String,
    /// From column 0 of the opener to the end of the closer's trimmed text.
    pub range: Range,
    /// Zero-width anchor at column 0 of the opener.
    pub icon_anchor: Range,
}

/// Lazy iterator over the complete fenced blocks of a document, top to bottom.
///
/// Openers without a closer produce nothing. Fences do not nest: the first
/// fence line after an opener always closes it.
pub struct BlockLocator<'a, D: LineSource + ?Sized> {
    doc: &'a D,
    line: usize,
}

impl<'a, D: LineSource + ?Sized> BlockLocator<'a, D> {
    pub fn new(doc: &'a D) -> Self {
        Self { doc, line: 0 }
    }

    fn find_closer(&self, opener: usize) -> Option<usize> {
        (opener + 1..self.doc.line_count()).find(|&i| CodeFence::is_fence(&self.doc.line_text(i)))
    }
}

impl<D: LineSource + ?Sized> Iterator for BlockLocator<'_, D> {
    type Item = CodeBlock;

    fn next(&mut self) -> Option<CodeBlock> {
        while self.line < self.doc.line_count() {
            let opener = self.line;
            let text = self.doc.line_text(opener);
            let Some(info) = CodeFence::info(&text) else {
                self.line += 1;
                continue;
            };

            let Some(closer) = self.find_closer(opener) else {
                log::debug!("discarding unterminated fence opened at line {opener}");
                self.line = opener + 1;
                continue;
            };

            self.line = closer + 1;
            let end_column = CodeFence::trimmed_width(&self.doc.line_text(closer));
            let start = Position::new(opener, 0);
            return Some(CodeBlock {
                info: info.to_string(),
                range: Range::new(start, Position::new(closer, end_column)),
                icon_anchor: Range::point(start),
            });
        }
        None
    }
}

/// Locates every complete fenced block in `doc`.
pub fn locate<D: LineSource + ?Sized>(doc: &D) -> BlockLocator<'_, D> {
    BlockLocator::new(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(lines: &[&str]) -> Vec<CodeBlock> {
        locate(lines).collect()
    }

    #[test]
    fn single_block() {
        assert_eq!(
            blocks(&["```example-good", "code", "```"]),
            vec![CodeBlock {
                info: "example-good".into(),
                range: Range::from_coords(0, 0, 2, 3),
                icon_anchor: Range::from_coords(0, 0, 0, 0),
            }]
        );
    }

    #[test]
    fn no_fences_no_blocks() {
        assert!(blocks(&["# Title", "", "plain text"]).is_empty());
        assert!(blocks(&[]).is_empty());
    }

    #[test]
    fn unterminated_opener_is_dropped() {
        assert!(blocks(&["```example-good", "code", "more code"]).is_empty());
    }

    #[test]
    fn empty_block_between_adjacent_fences() {
        let found = blocks(&["text", "```rust", "```"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].info, "rust");
        assert_eq!(found[0].range, Range::from_coords(1, 0, 2, 3));
    }

    #[test]
    fn consecutive_blocks_in_document_order() {
        let found = blocks(&["```a", "1", "```", "between", "```b", "2", "```"]);
        let infos: Vec<_> = found.iter().map(|b| b.info.as_str()).collect();
        assert_eq!(infos, vec!["a", "b"]);
        assert_eq!(found[1].range, Range::from_coords(4, 0, 6, 3));
        assert_eq!(found[1].icon_anchor, Range::from_coords(4, 0, 4, 0));
    }

    #[test]
    fn indented_fences_and_closer_width_uses_trimmed_text() {
        let found = blocks(&["  ```example-bad", "  x", "    ```  "]);
        assert_eq!(found[0].info, "example-bad");
        assert_eq!(found[0].range, Range::from_coords(0, 0, 2, 3));
    }

    #[test]
    fn closer_with_trailing_text_still_closes() {
        let found = blocks(&["```", "body", "```not-an-opener", "after"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, Range::from_coords(0, 0, 2, 16));
    }

    #[test]
    fn closed_block_followed_by_unterminated_opener() {
        let found = blocks(&["```one", "```", "```two", "dangling"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].info, "one");
    }

    #[test]
    fn info_string_whitespace_is_preserved() {
        let found = blocks(&["``` example-good  extra", "```"]);
        assert_eq!(found[0].info, " example-good  extra");
    }

    #[test]
    fn locator_is_lazy() {
        let lines = ["```a", "```", "```b", "```"];
        let mut it = locate(&lines[..]);
        assert_eq!(it.next().map(|b| b.info), Some("a".to_string()));
        assert_eq!(it.next().map(|b| b.info), Some("b".to_string()));
        assert_eq!(it.next(), None);
    }
}
