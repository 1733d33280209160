//! # Error: Error Types for Sigma protocols.
//!
//! This module defines the [`Error`] enum, which enumerates the hard failures
//! encountered while setting up or decoding an interactive or non-interactive
//! Sigma protocol.
//!
//! These errors include:
//! - Malformed group parameters (identity or repeated generators),
//! - Points that are not valid group elements,
//! - Malformed wire encodings of scalars, points and proofs.
//!
//! A proof that does not verify is *not* an error: every verifier in this crate
//! returns `false` instead.

use alloc::string::String;

/// Represents a hard failure of a Sigma protocol operation.
///
/// Configuration errors are final: nothing in this crate retries.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The group parameters are unusable.
    #[error("Invalid group: {message}")]
    InvalidGroup {
        /// Description of what is wrong with the parameters.
        message: String,
    },
    /// A supplied point is not a valid group element for its role.
    #[error("Invalid group element.")]
    InvalidPoint,
    /// A supplied scalar is not a canonical encoding of a field element.
    #[error("Invalid scalar encoding.")]
    InvalidScalar,
    /// An encoding does not have the size required by the group.
    #[error("Invalid encoding length: expected {expected} bytes, got {actual}.")]
    InvalidLength {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },
}

impl Error {
    pub(crate) fn invalid_group(message: impl Into<String>) -> Self {
        Error::InvalidGroup {
            message: message.into(),
        }
    }
}
