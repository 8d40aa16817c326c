use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::error::RosterError;


/// Label that marks a member as an administrator.
///
/// Changes how the member is displayed but is not part of the togglable catalog.
pub const ADMINISTRATOR: &str = "Administrator";

/// The togglable permission catalog, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount)]
pub enum Permission {
	/// Moderation of listings.
	AdModeration,
	/// Blog editing.
	Blog,
	/// Technical support queue.
	TechSupport,
	/// Customer request handling.
	CustomerRequests,
	/// Analytics dashboards.
	Analytics,
	/// Promotions and discounts.
	Promotions,
}

impl Permission {
	/// Iterates the catalog in display order.
	pub fn catalog() -> impl Iterator<Item = Self> {
		Self::iter()
	}

	/// Display label of the permission.
	pub const fn label(self) -> &'static str {
		match self {
			Self::AdModeration => "Ad moderation",
			Self::Blog => "Blog",
			Self::TechSupport => "Tech support",
			Self::CustomerRequests => "Customer requests",
			Self::Analytics => "Analytics",
			Self::Promotions => "Promotions",
		}
	}
}

impl fmt::Display for Permission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for Permission {
	type Err = RosterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let needle = s.trim();
		Self::iter()
			.find(|permission| permission.label().eq_ignore_ascii_case(needle))
			.ok_or_else(|| RosterError::UnknownPermission(s.to_string()))
	}
}

/// A permission string held by a member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
	/// A catalog permission.
	Grant(Permission),
	/// The administrator marker.
	Administrator,
	/// Any other label, kept verbatim.
	Custom(String),
}

impl Label {
	/// Classifies a label string. Never fails; unknown text becomes [`Label::Custom`].
	///
	/// Known names are matched ignoring surrounding whitespace and ASCII case.
	pub fn parse(text: &str) -> Self {
		if text.trim().eq_ignore_ascii_case(ADMINISTRATOR) {
			return Self::Administrator;
		}
		match text.parse::<Permission>() {
			Ok(permission) => Self::Grant(permission),
			Err(_) => Self::Custom(text.to_string()),
		}
	}

	/// Display text of the label.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Grant(permission) => permission.label(),
			Self::Administrator => ADMINISTRATOR,
			Self::Custom(text) => text,
		}
	}

	/// The catalog permission this label stands for, if any.
	pub fn permission(&self) -> Option<Permission> {
		match self {
			Self::Grant(permission) => Some(*permission),
			_ => None,
		}
	}

	/// Returns true for the administrator marker.
	pub fn is_admin(&self) -> bool {
		matches!(self, Self::Administrator)
	}
}

impl fmt::Display for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<Permission> for Label {
	fn from(permission: Permission) -> Self {
		Self::Grant(permission)
	}
}

impl From<&str> for Label {
	fn from(text: &str) -> Self {
		Self::parse(text)
	}
}

impl From<String> for Label {
	fn from(text: String) -> Self {
		match Self::parse(&text) {
			Self::Custom(_) => Self::Custom(text),
			label => label,
		}
	}
}

impl From<Label> for String {
	fn from(label: Label) -> Self {
		match label {
			Label::Custom(text) => text,
			label => label.as_str().to_string(),
		}
	}
}

/// Insertion-ordered, duplicate-free set of permission labels.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(IndexSet<Label>);

impl PermissionSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of labels, catalog or not.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the set holds no labels.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates labels in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &Label> {
		self.0.iter()
	}

	/// Returns true if the label is present.
	pub fn contains(&self, label: &Label) -> bool {
		self.0.contains(label)
	}

	/// Returns true if the catalog permission is granted.
	pub fn has(&self, permission: Permission) -> bool {
		self.0.contains(&Label::Grant(permission))
	}

	/// Returns true if the administrator marker is present.
	pub fn is_admin(&self) -> bool {
		self.0.contains(&Label::Administrator)
	}

	/// Appends a label if absent. Returns true if it was added.
	pub fn insert(&mut self, label: impl Into<Label>) -> bool {
		self.0.insert(label.into())
	}

	/// Removes a label, keeping the order of the rest. Returns true if it was present.
	pub fn remove(&mut self, label: &Label) -> bool {
		self.0.shift_remove(label)
	}

	/// Adds `permission` when `enabled`, removes it otherwise.
	///
	/// Returns true if the set changed.
	pub fn toggle(&mut self, permission: Permission, enabled: bool) -> bool {
		let label = Label::Grant(permission);
		if enabled { self.insert(label) } else { self.remove(&label) }
	}

	/// Unions with the whole catalog when `enabled`, strips every catalog
	/// permission otherwise. Labels outside the catalog are kept either way.
	///
	/// Returns true if the set changed.
	pub fn toggle_all(&mut self, enabled: bool) -> bool {
		let before = self.0.len();
		if enabled {
			self.0.extend(Permission::catalog().map(Label::Grant));
		} else {
			self.0.retain(|label| label.permission().is_none());
		}
		before != self.0.len()
	}

	/// Returns true if the set is a superset of the catalog.
	pub fn is_all_active(&self) -> bool {
		Permission::catalog().all(|permission| self.has(permission))
	}

	/// Number of catalog permissions granted.
	pub fn granted_count(&self) -> usize {
		self.0.iter().filter(|label| label.permission().is_some()).count()
	}

	/// Size of the catalog.
	pub const fn catalog_len() -> usize {
		Permission::COUNT
	}
}

impl<L: Into<Label>> FromIterator<L> for PermissionSet {
	fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl<'a> IntoIterator for &'a PermissionSet {
	type Item = &'a Label;
	type IntoIter = indexmap::set::Iter<'a, Label>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
