/// The three-backtick fence delimiter.
pub struct CodeFence;

/// Trims whitespace and byte-order marks from both ends of `line`.
fn trim(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Whether `line` opens or closes a fence. Leading indentation is ignored.
    pub fn is_fence(line: &str) -> bool {
        trim(line).starts_with(Self::MARKER)
    }

    /// Returns the info string of a fence line: everything after the marker
    /// on the trimmed line, or `None` if the line is not a fence.
    pub fn info(line: &str) -> Option<&str> {
        trim(line).strip_prefix(Self::MARKER)
    }

    /// Column just past the trimmed text of `line`, in characters.
    pub fn trimmed_width(line: &str) -> usize {
        trim(line).chars().count()
    }
}
