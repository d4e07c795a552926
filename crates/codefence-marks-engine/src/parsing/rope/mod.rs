pub mod lines;
pub mod slice;
pub mod span;

pub use lines::line_spans;
pub use slice::{slice_to_string, truncate_preview};
pub use span::Span;
