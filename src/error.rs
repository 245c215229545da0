//! Error types for the GHG intensity calculator.
//!
//! Only two failure modes exist: rejecting an out-of-range input parameter at
//! construction time, and failing to resolve a methodology identifier. Once
//! inputs are valid and a methodology is resolved, calculation cannot fail.

use thiserror::Error;

/// Errors produced by input validation and methodology lookup.
#[derive(Debug, Error)]
pub enum GhgError {
    /// An input record field violated its documented bound. Raised at
    /// construction, never deferred.
    #[error("invalid parameter `{field}`: {constraint}")]
    InvalidParameter {
        field: &'static str,
        constraint: &'static str,
    },

    /// The calculator facade was given an identifier that is not in the
    /// methodology registry.
    #[error("unknown methodology '{name}'. Available: {available}")]
    UnknownMethodology { name: String, available: String },
}

impl GhgError {
    pub(crate) fn invalid(field: &'static str, constraint: &'static str) -> Self {
        GhgError::InvalidParameter { field, constraint }
    }
}
