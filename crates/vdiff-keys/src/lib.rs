//! Primary-key configuration for the vdiff comparison engine.
//!
//! When arrays are compared order-insensitively, elements that are not
//! byte-identical still need a way to correspond across the two trees.
//! This crate implements the configuration language for that: path
//! patterns select which arrays a rule covers, and key specifications name
//! the field(s) whose values identify an element.
//!
//! # Key Types
//!
//! - [`PathPattern`] — Pointer-notation path with `*` wildcard segments
//! - [`KeySpec`] — A specification parsed once into a step AST
//! - [`KeyMap`] — The ordered rule set, resolved per array path
//! - [`extract_key`] / [`ElementKey`] — Best-effort key extraction from a
//!   candidate element
//!
//! Extraction is soft-failing by design: malformed rules or unresolvable
//! elements degrade to "no key value" and never abort a comparison.

pub mod extract;
pub mod map;
pub mod pattern;
pub mod spec;

pub use extract::{extract_key, ElementKey, KeyValue};
pub use map::{KeyMap, KeyRule};
pub use pattern::{PathPattern, PatternSegment};
pub use spec::{KeyComponent, KeySpec, KeyStep};
