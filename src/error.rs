//! Error types.

use thiserror::Error;

use crate::erased::ObjectId;

/// Errors surfaced while composing handles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Handles passed to a combination refer to different objects.
    #[error(
        "cannot combine handle #{position} (`{found_type}` at {found}) with handle #0 \
         (`{expected_type}` at {expected}): handles must share one object"
    )]
    MismatchedCombination {
        /// Index of the first handle whose object differs from handle #0.
        position: usize,
        expected: ObjectId,
        found: ObjectId,
        expected_type: &'static str,
        found_type: &'static str,
    },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
