//! Grouping of classified blocks into labelled decoration ranges.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::document::LineSource;
use crate::keywords::KeywordConfig;
use crate::parsing::{CodeBlock, KeywordClassifier, locate};
use crate::position::Range;

/// The two ways a keyword can be decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// Whole-block background highlight.
    Background,
    /// Gutter icon at the block's first line.
    Icon,
}

impl DecorationKind {
    pub fn suffix(self) -> &'static str {
        match self {
            DecorationKind::Background => "bg",
            DecorationKind::Icon => "icon",
        }
    }

    /// The decoration label for `keyword`, e.g. `example-good-bg`.
    pub fn label(self, keyword: &str) -> String {
        format!("{keyword}-{}", self.suffix())
    }
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A located block together with the keyword its info string resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBlock<'k> {
    pub keyword: &'k str,
    pub block: CodeBlock,
}

/// Decoration label to ranges, each list in document order.
///
/// Labels iterate in sorted order so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Decorations {
    ranges: BTreeMap<String, Vec<Range>>,
}

impl Decorations {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, label: String, range: Range) {
        self.ranges.entry(label).or_default().push(range);
    }

    pub fn get(&self, label: &str) -> Option<&[Range]> {
        self.ranges.get(label).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Range])> {
        self.ranges
            .iter()
            .map(|(label, ranges)| (label.as_str(), ranges.as_slice()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ranges.keys().map(String::as_str)
    }

    /// Number of labels with at least one range.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Locates every fenced block in `doc` and keeps those whose info string
/// matches a configured keyword.
pub fn classify_blocks<'a, D: LineSource + ?Sized>(
    doc: &'a D,
    config: &'a KeywordConfig,
) -> impl Iterator<Item = ClassifiedBlock<'a>> + 'a {
    let classifier = KeywordClassifier::new(config);
    locate(doc).filter_map(move |block| match classifier.classify(&block.info) {
        Some(keyword) => Some(ClassifiedBlock { keyword, block }),
        None => {
            log::debug!(
                "no keyword for info string {:?} at line {}",
                block.info,
                block.range.start.line
            );
            None
        }
    })
}

/// Groups classified blocks by decoration label.
///
/// A keyword with a color contributes its block range to `<keyword>-bg`; one
/// with an icon contributes its anchor to `<keyword>-icon`. Keywords with
/// neither attribute contribute nothing.
pub fn aggregate<'k>(
    config: &KeywordConfig,
    blocks: impl IntoIterator<Item = ClassifiedBlock<'k>>,
) -> Decorations {
    let mut decorations = Decorations::new();
    for ClassifiedBlock { keyword, block } in blocks {
        let Some(style) = config.style(keyword) else {
            continue;
        };
        if style.color.is_some() {
            decorations.push(DecorationKind::Background.label(keyword), block.range);
        }
        if style.icon.is_some() {
            decorations.push(DecorationKind::Icon.label(keyword), block.icon_anchor);
        }
    }
    decorations
}

/// Scans `doc` and returns the decorations for every matched block.
pub fn scan<D: LineSource + ?Sized>(doc: &D, config: &KeywordConfig) -> Decorations {
    aggregate(config, classify_blocks(doc, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{KeywordEntry, KeywordStyle};
    use pretty_assertions::assert_eq;

    #[test]
    fn no_fences_yield_empty_mapping() {
        let doc = ["# Notes", "", "Nothing fenced here."];
        assert!(scan(&doc[..], &KeywordConfig::default()).is_empty());
    }

    #[test]
    fn single_matched_block() {
        let doc = ["```example-good", "code", "```"];
        let decorations = scan(&doc[..], &KeywordConfig::default());

        assert_eq!(
            decorations.iter().collect::<Vec<_>>(),
            vec![
                ("example-good-bg", &[Range::from_coords(0, 0, 2, 3)][..]),
                ("example-good-icon", &[Range::from_coords(0, 0, 0, 0)][..]),
            ]
        );
    }

    #[test]
    fn same_keyword_blocks_keep_document_order() {
        let doc = [
            "```example-bad",
            "one",
            "```",
            "```example-bad-2",
            "two",
            "```",
        ];
        let decorations = scan(&doc[..], &KeywordConfig::default());

        assert_eq!(
            decorations.get("example-bad-bg"),
            Some(&[Range::from_coords(0, 0, 2, 3), Range::from_coords(3, 0, 5, 3)][..])
        );
        assert_eq!(
            decorations.get("example-bad-icon"),
            Some(&[Range::from_coords(0, 0, 0, 0), Range::from_coords(3, 0, 3, 0)][..])
        );
    }

    #[test]
    fn unmatched_blocks_are_omitted() {
        let doc = ["```unknown-lang", "x", "```", "```rust", "```"];
        assert!(scan(&doc[..], &KeywordConfig::default()).is_empty());
    }

    #[test]
    fn attributes_control_which_labels_appear() {
        let config = KeywordConfig::new(vec![
            KeywordEntry::new("tinted", KeywordStyle::new(None, Some("#fff"))),
            KeywordEntry::new("marked", KeywordStyle::new(Some("dot.svg"), None)),
            KeywordEntry::new("plain", KeywordStyle::default()),
        ])
        .unwrap();
        let doc = ["```tinted", "```", "```marked", "```", "```plain", "```"];
        let decorations = scan(&doc[..], &config);

        assert_eq!(
            decorations.labels().collect::<Vec<_>>(),
            vec!["marked-icon", "tinted-bg"]
        );
    }

    #[test]
    fn plain_keyword_is_still_classified() {
        let config = KeywordConfig::new(vec![KeywordEntry::new("plain", KeywordStyle::default())])
            .unwrap();
        let doc = ["```plain", "```"];

        assert_eq!(classify_blocks(&doc[..], &config).count(), 1);
        assert!(scan(&doc[..], &config).is_empty());
    }

    #[test]
    fn scanning_twice_is_identical() {
        let doc = ["```example-good", "a", "```", "```interactive-example", "b", "```"];
        let config = KeywordConfig::default();
        assert_eq!(scan(&doc[..], &config), scan(&doc[..], &config));
    }

    #[test]
    fn labels_follow_keyword_suffix_convention() {
        assert_eq!(DecorationKind::Background.label("example-good"), "example-good-bg");
        assert_eq!(DecorationKind::Icon.label("example-good"), "example-good-icon");
        assert_eq!(DecorationKind::Icon.to_string(), "icon");
    }
}
