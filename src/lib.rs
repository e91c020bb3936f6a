//! # Penelope: Composable Traversal & Accumulation
//!
//! This library implements a generic traversal/transformation layer:
//! lazily-evaluated sequence cursors (forward and bidirectional) and their
//! dual, incremental accumulators.
//!
//! ## Core Pieces
//!
//! 1. **Forward cursors**: single-advance pipelines (filter, map, extract,
//!    take, skip, group, zip, append, flatten) that never pull more of their
//!    source than the current call requires
//! 2. **Look-ahead buffering**: a single-slot cache so `has_next`/`peek` can
//!    be answered without losing the probed element
//! 3. **Bidirectional cursors**: the same combinators with backward traversal
//!    and position indices preserved in both directions
//! 4. **Accumulators**: the write-side mirror, with filtering, mapping,
//!    extracting, and deduplicating views applied to writing instead of
//!    reading
//!
//! ## Usage Example
//!
//! ```
//! use penelope::cursor::{over, Cursor};
//!
//! let squares = over(vec![1, 2, 3, 4, 5])
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * v)
//!     .collect_vec();
//! assert_eq!(squares, vec![4, 16]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - each implements one layer of the traversal engine
pub mod accum;  // Accumulators: write-side duals of cursors
pub mod cursor; // Forward cursor contract and combinators
pub mod effect; // Synchronized side-effect wrapper
pub mod list;   // Bidirectional cursor contract
pub mod pair;   // Pair (2-tuple) specializations

// Re-exports for convenience
pub use accum::{Accumulator, Collect, Counter, Finish, Fold, PairAccumulator, Unzip};
pub use cursor::{empty, over, Cursor, LookAhead};
pub use effect::SharedEffect;
pub use list::{ListCursor, SliceListCursor, VecListCursor};
pub use pair::{empty_pair, PairCursor};

use thiserror::Error;

/// Direction of travel for a cursor, used in exhaustion reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the end of the sequence (`next`).
    Forward,

    /// Toward the start of the sequence (`previous`).
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// Errors raised by cursor and accumulator operations
#[derive(Error, Debug)]
pub enum TraverseError {
    /// A mutation was invoked on a view that does not support it
    #[error("`{operation}` is not supported by the {view} view")]
    Unsupported {
        /// Name of the rejected operation (`remove`, `set`, `insert`).
        operation: &'static str,
        /// The view that rejected it.
        view: &'static str,
    },

    /// A mutation was invoked before any element had been returned
    #[error("`{operation}` requires a current element; advance the cursor first")]
    NoCurrentElement {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// `try_next`/`try_previous` was called on a spent cursor
    #[error("cursor is exhausted: no {0} element remains")]
    Exhausted(Direction),
}

impl TraverseError {
    /// Shorthand for the unsupported-mutation failure.
    pub(crate) fn unsupported(operation: &'static str, view: &'static str) -> Self {
        TraverseError::Unsupported { operation, view }
    }
}
