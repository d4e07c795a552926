//! # Fence Scanning
//!
//! Finds fenced code blocks in a document and resolves their info strings to
//! configured keywords.
//!
//! ## Phases
//!
//! 1. **Location** (`locate`): a single top-to-bottom pass over the document's
//!    lines yields a `CodeBlock` for every fence pair. Unterminated openers are
//!    dropped without error.
//! 2. **Classification** (`classify`): `KeywordClassifier` maps a block's info
//!    string to the first matching keyword, or nothing.
//!
//! Aggregation of classified blocks into decoration labels lives in
//! [`crate::decorations`].
//!
//! ## Modules
//!
//! - **`fence`**: the fence marker and line-level predicates
//! - **`locate`**: `BlockLocator`, the lazy block iterator
//! - **`classify`**: `KeywordClassifier`
//! - **`rope`**: line indexing and slicing over `xi_rope::Rope`
//! - **`snapshot`**: normalization and invariant checks for tests

pub mod classify;
pub mod fence;
pub mod locate;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use classify::KeywordClassifier;
pub use fence::CodeFence;
pub use locate::{BlockLocator, CodeBlock, locate};
