//! Team roster core: member records, email search, and permission editing.
//!
//! Everything here lives in memory for the lifetime of a view. The
//! [`MemberStore`] owns every [`Member`]; callers address members by
//! [`MemberId`] and never hold on to references across mutations.
//!
//! Operations on the roster are total. Deleting a missing member or toggling
//! a permission that is already in the requested state is a no-op, and the
//! only fallible entry points are the ones that accept external input
//! ([`MemberStore::from_members`] and [`Permission::from_str`]).
//!
//! [`Permission::from_str`]: std::str::FromStr::from_str

/// Error types for roster construction and label parsing.
pub mod error;
/// Case-insensitive email search.
pub mod filter;
/// Member records and identifiers.
pub mod member;
/// Permission catalog, labels, and per-member permission sets.
pub mod permission;
/// Built-in initial roster.
pub mod seed;
/// Ordered member store and list mutations.
pub mod store;

pub use error::{Result, RosterError};
pub use filter::{Query, matches};
pub use member::{DEFAULT_IMAGE, Member, MemberId};
pub use permission::{ADMINISTRATOR, Label, Permission, PermissionSet};
pub use seed::initial_members;
pub use store::{MemberStore, Placeholder};
