//! Domain error types

use crate::core::ids::OptionId;
use thiserror::Error;

/// Domain-level errors.
///
/// These only arise while constructing the catalog and quorum policy at
/// startup. Runtime signup traffic never errors; abnormal inputs degrade to
/// an ignored outcome instead (see [`crate::quorum::outcome::IgnoreReason`]).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Option catalog must contain at least one option")]
    EmptyCatalog,

    #[error("Duplicate option id in catalog: {0}")]
    DuplicateOption(OptionId),

    #[error("Quorum threshold must be at least 1")]
    InvalidQuorum,
}
