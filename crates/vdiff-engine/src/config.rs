//! Per-invocation configuration for the comparison engine.

use serde::{Deserialize, Serialize};

use vdiff_keys::KeyMap;

/// Default recursion guard. Inputs nesting deeper than this fail the call
/// instead of overflowing the stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration for one comparison.
///
/// The engine treats the configuration as immutable: it is read during the
/// walk and never written, so one value can serve any number of concurrent
/// comparisons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Match array elements by content and primary keys instead of by
    /// position.
    #[serde(default)]
    pub ignore_array_order: bool,
    /// When the expected leaf is a `regexp:` pattern, do not report a
    /// type mismatch against the actual value.
    #[serde(default)]
    pub disable_type_check_if_regexp: bool,
    /// Primary-key rules, in resolution order.
    #[serde(default)]
    pub primary_keys: KeyMap,
    /// Maximum tree depth the recursive comparator will walk.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            ignore_array_order: false,
            disable_type_check_if_regexp: false,
            primary_keys: KeyMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DiffConfig {
    /// Positional array matching, strict type checks, no key rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Order-insensitive array matching with defaults otherwise.
    pub fn unordered() -> Self {
        Self {
            ignore_array_order: true,
            ..Default::default()
        }
    }

    /// Append a primary-key rule. The pattern is pointer notation with
    /// optional `*` wildcard segments; a missing leading `/` is normalized
    /// away.
    pub fn with_primary_key(mut self, pattern: &str, spec: &str) -> Self {
        self.primary_keys.insert(pattern, spec);
        self
    }

    /// Enable regexp-leniency for type checks.
    pub fn with_lenient_regexp(mut self) -> Self {
        self.disable_type_check_if_regexp = true;
        self
    }
}
