use crate::document::LineSource;
use crate::parsing::{CodeBlock, CodeFence};

pub fn check<D: LineSource + ?Sized>(doc: &D, blocks: &[CodeBlock]) {
    let n = doc.line_count();
    for b in blocks {
        assert!(
            b.range.start <= b.range.end && b.range.end.line < n,
            "block range out of bounds: {:?} (line count: {})",
            b.range,
            n
        );
        assert!(
            b.range.start.column == 0 && b.range.start.line < b.range.end.line,
            "block must start at column 0 of its opener and end on a later line: {:?}",
            b.range
        );
        let closer = doc.line_text(b.range.end.line);
        assert!(
            CodeFence::is_fence(&doc.line_text(b.range.start.line)) && CodeFence::is_fence(&closer),
            "block not delimited by fence lines: {:?}",
            b.range
        );
        assert!(
            b.range.end.column <= closer.chars().count(),
            "block end column past closer line: {:?}",
            b.range
        );
        assert!(
            b.icon_anchor.is_empty() && b.icon_anchor.start == b.range.start,
            "icon anchor not a zero-width point at block start: icon {:?}, block {:?}",
            b.icon_anchor,
            b.range
        );
    }
    for pair in blocks.windows(2) {
        assert!(
            pair[0].range.end.line < pair[1].range.start.line,
            "blocks overlap or are out of order: {:?} then {:?}",
            pair[0].range,
            pair[1].range
        );
    }
}
