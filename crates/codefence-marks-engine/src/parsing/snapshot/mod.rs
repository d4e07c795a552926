//! # Snapshot Testing Support
//!
//! Utilities for testing the scanner via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts located blocks and their decorations to a stable,
//!   serializable `Snap` for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for scanner correctness (ranges in bounds,
//!   blocks ordered and disjoint, icon anchors zero-width at column 0)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
