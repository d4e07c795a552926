//! Keyword configuration: which info-string keywords get decorated, and how.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeywordConfigError {
    #[error("keyword at position {0} is empty")]
    Empty(usize),

    #[error("keyword '{0}' is configured more than once")]
    Duplicate(String),

    #[error("keyword '{0}' can never match: keywords must be lower-case without whitespace")]
    Unmatchable(String),
}

/// Visual attributes attached to a keyword. Either attribute may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordStyle {
    /// Gutter icon file name, e.g. `check.svg`.
    pub icon: Option<String>,
    /// CSS-like background color, e.g. `rgb(76 175 80 / 12%)`.
    pub color: Option<String>,
}

impl KeywordStyle {
    /// Builds a style, treating empty strings as absent.
    pub fn new(icon: Option<&str>, color: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            icon: present(icon),
            color: present(color),
        }
    }
}

/// A configured keyword and its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub keyword: String,
    pub style: KeywordStyle,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<String>, style: KeywordStyle) -> Self {
        Self {
            keyword: keyword.into(),
            style,
        }
    }
}

/// Ordered, validated keyword set.
///
/// Declaration order is significant: it decides which keyword wins when
/// several are prefixes of the same info-string token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordConfig {
    entries: Vec<KeywordEntry>,
}

impl KeywordConfig {
    pub fn new(entries: Vec<KeywordEntry>) -> Result<Self, KeywordConfigError> {
        for (i, entry) in entries.iter().enumerate() {
            let keyword = entry.keyword.as_str();
            if keyword.is_empty() {
                return Err(KeywordConfigError::Empty(i));
            }
            if keyword.chars().any(char::is_whitespace) || keyword.to_lowercase() != keyword {
                return Err(KeywordConfigError::Unmatchable(keyword.to_string()));
            }
            if entries[..i].iter().any(|e| e.keyword == keyword) {
                return Err(KeywordConfigError::Duplicate(keyword.to_string()));
            }
        }
        Ok(Self { entries })
    }

    /// Keywords in declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn style(&self, keyword: &str) -> Option<&KeywordStyle> {
        self.entries
            .iter()
            .find(|e| e.keyword == keyword)
            .map(|e| &e.style)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeywordConfig {
    /// The built-in keyword set.
    fn default() -> Self {
        let entry = |keyword: &str, icon: &str, color: &str| {
            KeywordEntry::new(keyword, KeywordStyle::new(Some(icon), Some(color)))
        };
        Self {
            entries: vec![
                entry("example-good", "check.svg", "rgb(76 175 80 / 12%)"),
                entry("example-bad", "x.svg", "rgb(244 67 54 / 12%)"),
                entry("interactive-example", "console.svg", "rgb(33 150 243 / 12%)"),
            ],
        }
    }
}
