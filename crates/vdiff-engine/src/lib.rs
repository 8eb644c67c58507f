//! The vdiff comparison engine.
//!
//! Computes the structural difference between an expected-result tree and
//! an actual-result tree, producing an ordered, path-addressed change list
//! for downstream highlighting. Both trees are `serde_json::Value` and are
//! never mutated; the engine is a pure function of its inputs and the
//! per-call [`DiffConfig`].
//!
//! # Key Entry Points
//!
//! - [`diff_values`] — Compare two trees under a configuration
//! - [`DiffConfig`] — Order sensitivity, regexp leniency, primary-key
//!   rules, recursion guard
//! - [`render_diff`] / [`OutputEntry`] — Encode a diff into render-ready
//!   entries in two path notations
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vdiff_engine::{diff_values, DiffConfig};
//!
//! let expected = json!({"items": [{"id": 1, "state": "ok"}]});
//! let actual = json!({"items": [{"id": 1, "state": "failed"}]});
//!
//! let config = DiffConfig::unordered().with_primary_key("/items", "id");
//! let diff = diff_values(&expected, &actual, &config).unwrap();
//!
//! assert_eq!(diff.len(), 1);
//! assert_eq!(diff.records[0].path.to_pointer(), "/items/0/state");
//! ```

mod array;
pub mod compare;
pub mod config;
pub mod output;

pub use compare::diff_values;
pub use config::{DiffConfig, DEFAULT_MAX_DEPTH};
pub use output::{render_diff, DottedFormatter, OutputEntry, PathFormatter};
