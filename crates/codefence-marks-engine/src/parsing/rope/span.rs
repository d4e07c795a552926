/// A byte range `[start, end)` into the rope.
///
/// Line spans exclude the line terminator, so slicing the rope with one yields
/// exactly the text a document provider reports for that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}
