use std::fmt;

use serde::{Deserialize, Serialize};

use crate::permission::{Label, Permission, PermissionSet};

/// Image reference shown for members without a picture of their own.
pub const DEFAULT_IMAGE: &str = "media/no-image.svg";

/// Stable identifier of a member within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
	/// Wraps a raw identifier.
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw identifier.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for MemberId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// A single team entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
	/// Identifier, unique within the owning store.
	pub id: MemberId,
	/// Display name.
	pub name: String,
	/// Contact email, the field search runs against.
	pub email: String,
	/// Granted permission labels.
	#[serde(default)]
	pub permissions: PermissionSet,
	/// Picture reference, if the member has one.
	#[serde(default)]
	pub image: Option<String>,
}

impl Member {
	/// Creates a member with no permissions and no picture.
	pub fn new(id: MemberId, name: impl Into<String>, email: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			email: email.into(),
			permissions: PermissionSet::new(),
			image: None,
		}
	}

	/// Replaces the permission set with the given labels.
	pub fn with_permissions<L: Into<Label>>(mut self, labels: impl IntoIterator<Item = L>) -> Self {
		self.permissions = labels.into_iter().collect();
		self
	}

	/// Sets the picture reference.
	pub fn with_image(mut self, image: impl Into<String>) -> Self {
		self.image = Some(image.into());
		self
	}

	/// Returns true if the member has a non-empty picture reference.
	pub fn has_image(&self) -> bool {
		self.image.as_deref().is_some_and(|image| !image.is_empty())
	}

	/// Picture reference, falling back to [`DEFAULT_IMAGE`].
	pub fn image_or_default(&self) -> &str {
		match self.image.as_deref() {
			Some(image) if !image.is_empty() => image,
			_ => DEFAULT_IMAGE,
		}
	}

	/// Returns true if the member carries the administrator label.
	pub fn is_admin(&self) -> bool {
		self.permissions.is_admin()
	}

	/// Grants or revokes one catalog permission. Returns true if the set changed.
	pub fn toggle_one(&mut self, permission: Permission, enabled: bool) -> bool {
		self.permissions.toggle(permission, enabled)
	}

	/// Grants or revokes the whole catalog. Returns true if the set changed.
	pub fn toggle_all(&mut self, enabled: bool) -> bool {
		self.permissions.toggle_all(enabled)
	}

	/// Returns true if every catalog permission is granted.
	pub fn is_all_active(&self) -> bool {
		self.permissions.is_all_active()
	}
}
