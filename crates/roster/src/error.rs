use thiserror::Error;

use crate::member::MemberId;

/// Errors raised while building a roster from external input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
	/// Two seeded members share an identifier.
	#[error("duplicate member id: {0}")]
	DuplicateId(MemberId),

	/// A string does not name a catalog permission.
	#[error("unknown permission: {0:?}")]
	UnknownPermission(String),
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
