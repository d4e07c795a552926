//! Document providers.
//!
//! The scanner only needs a line count and the text of each line. Anything
//! that can answer those two questions can be scanned: plain string slices in
//! tests, or a rope-backed [`TextDocument`] for files read from disk.

use std::borrow::Cow;

use xi_rope::Rope;

use crate::parsing::rope::{Span, line_spans, slice_to_string};

/// Read access to a document, one line at a time.
///
/// Implementations must present a consistent snapshot for the duration of a
/// scan. `line_text` is only defined for `index < line_count()`; callers that
/// pass anything else violate the contract and implementations panic.
pub trait LineSource {
    fn line_count(&self) -> usize;

    /// Text of line `index` without its line terminator.
    fn line_text(&self, index: usize) -> Cow<'_, str>;
}

fn check_index(index: usize, count: usize) {
    assert!(
        index < count,
        "line index {index} out of range for document with {count} lines"
    );
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, index: usize) -> Cow<'_, str> {
        check_index(index, self.len());
        Cow::Borrowed(self[index].as_ref())
    }
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.as_slice().line_count()
    }

    fn line_text(&self, index: usize) -> Cow<'_, str> {
        self.as_slice().line_text(index)
    }
}

impl<T: LineSource + ?Sized> LineSource for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line_text(&self, index: usize) -> Cow<'_, str> {
        (**self).line_text(index)
    }
}

/// An immutable text buffer backed by an `xi_rope::Rope` with a precomputed line index.
#[derive(Debug, Clone)]
pub struct TextDocument {
    rope: Rope,
    lines: Vec<Span>,
}

impl TextDocument {
    pub fn new(text: &str) -> Self {
        let rope = Rope::from(text);
        let lines = line_spans(&rope);
        Self { rope, lines }
    }

    /// Byte span of line `index`, excluding its terminator.
    fn line_span(&self, index: usize) -> Span {
        check_index(index, self.lines.len());
        self.lines[index]
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl LineSource for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_text(&self, index: usize) -> Cow<'_, str> {
        Cow::Owned(slice_to_string(&self.rope, self.line_span(index)))
    }
}
