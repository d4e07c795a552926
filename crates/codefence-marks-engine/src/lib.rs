pub mod decorations;
pub mod document;
pub mod io;
pub mod keywords;
pub mod models;
pub mod parsing;
pub mod position;
pub mod render;


// Re-export key types for easier usage
pub use decorations::{ClassifiedBlock, DecorationKind, Decorations, aggregate, classify_blocks, scan};
pub use document::{LineSource, TextDocument};
pub use keywords::{KeywordConfig, KeywordConfigError, KeywordEntry, KeywordStyle};
pub use models::MarkdownFile;
pub use parsing::{CodeBlock, KeywordClassifier, locate};
pub use position::{Position, Range};
pub use render::{
    DecorationSink, DecorationStyle, IconResolver, IconVariant, ThemeKind, decoration_styles,
    refresh,
};
