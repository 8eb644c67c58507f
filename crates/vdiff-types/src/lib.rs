//! Foundation types for the vdiff comparison engine.
//!
//! This crate provides the value-node classification, tree paths, and diff
//! record types used throughout vdiff. Every other vdiff crate depends on
//! `vdiff-types`.
//!
//! # Key Types
//!
//! - [`NodeKind`] — Closed classification of a value-tree node
//! - [`Path`] / [`PathSegment`] — Location of a node, with pointer-notation
//!   encoding (`/`-joined segments, `~0`/`~1` escaping)
//! - [`DiffOp`] / [`DiffRecord`] — A typed, path-addressed change
//! - [`ValueDiff`] — The ordered change list one comparison produces
//! - [`DiffError`] — The engine's single hard failure (recursion guard)

pub mod error;
pub mod node;
pub mod path;
pub mod record;

pub use error::{DiffError, DiffResult};
pub use node::{is_pattern_leaf, node_text, NodeKind, REGEXP_PREFIX};
pub use path::{escape_segment, unescape_segment, Path, PathSegment};
pub use record::{DiffOp, DiffRecord, ValueDiff};
