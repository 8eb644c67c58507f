//! Error types for the comparison engine.

use crate::path::Path;

/// Errors that can occur while computing a diff.
///
/// Malformed primary-key configuration is never an error: a broken key rule
/// degrades matching quality for the affected elements but the comparison
/// still completes. The only hard failure is the recursion guard.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Input trees nest deeper than the configured guard allows.
    #[error("depth limit {limit} exceeded at {path}")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// The path at which the guard tripped.
        path: Path,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
