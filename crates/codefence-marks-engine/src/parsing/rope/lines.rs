use xi_rope::Rope;

use super::span::Span;

/// Computes the content span of every line in the rope.
///
/// Terminators (`\n` or `\r\n`) are excluded from the spans. Line counting
/// follows editor convention: an empty rope has a single empty line, and a
/// trailing terminator opens a final empty line.
pub fn line_spans(rope: &Rope) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut offset = 0usize;
    let mut ends_with_terminator = true;

    for raw in rope.lines_raw(..) {
        let start = offset;
        offset += raw.len();
        let content = raw.trim_end_matches('\n');
        ends_with_terminator = content.len() != raw.len();
        let content = if ends_with_terminator {
            content.strip_suffix('\r').unwrap_or(content)
        } else {
            content
        };
        spans.push(Span {
            start,
            end: start + content.len(),
        });
    }

    if ends_with_terminator {
        spans.push(Span {
            start: offset,
            end: offset,
        });
    }

    spans
}
