use std::collections::BTreeMap;

use serde::Serialize;

use crate::decorations::scan;
use crate::document::LineSource;
use crate::keywords::KeywordConfig;
use crate::parsing::{CodeBlock, KeywordClassifier, rope::truncate_preview};
use crate::position::Range;

/// Snapshot of a scanned document for testing with `insta`.
///
/// Contains every located block, matched or not, plus the aggregated decorations.
#[derive(Serialize)]
pub struct Snap {
    /// All complete blocks in document order.
    pub blocks: Vec<BlockSnap>,
    /// Decoration label to `(start_line, start_col, end_line, end_col)` tuples.
    pub decorations: BTreeMap<String, Vec<(usize, usize, usize, usize)>>,
}

/// Snapshot of a single located block.
#[derive(Serialize)]
pub struct BlockSnap {
    /// Raw info string after the fence marker.
    pub info: String,
    /// Keyword the info string resolved to, if any.
    pub keyword: Option<String>,
    /// Block range as `(start_line, start_col, end_line, end_col)`.
    pub range: (usize, usize, usize, usize),
    /// Preview of the block text (truncated for readability).
    pub text: String,
}

fn coords(r: Range) -> (usize, usize, usize, usize) {
    (r.start.line, r.start.column, r.end.line, r.end.column)
}

/// Converts located blocks and the document's decorations into a serializable snapshot.
pub fn normalize<D: LineSource + ?Sized>(
    doc: &D,
    blocks: &[CodeBlock],
    config: &KeywordConfig,
) -> Snap {
    let classifier = KeywordClassifier::new(config);
    let blocks = blocks
        .iter()
        .map(|b| {
            let text = b
                .range
                .lines()
                .map(|i| doc.line_text(i).into_owned())
                .collect::<Vec<_>>()
                .join("\n");
            BlockSnap {
                info: b.info.clone(),
                keyword: classifier.classify(&b.info).map(str::to_string),
                range: coords(b.range),
                text: truncate_preview(&text, 80),
            }
        })
        .collect();

    let decorations = scan(doc, config)
        .iter()
        .map(|(label, ranges)| {
            (
                label.to_string(),
                ranges.iter().copied().map(coords).collect(),
            )
        })
        .collect();

    Snap {
        blocks,
        decorations,
    }
}
