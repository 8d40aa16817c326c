use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RosterError};
use crate::filter::Query;
use crate::member::{Member, MemberId};
use crate::permission::Permission;
use crate::seed::initial_members;


/// Name and email given to members created by [`MemberStore::add_placeholder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholder {
	/// Display name of a new member.
	pub name: String,
	/// Email of a new member.
	pub email: String,
}

impl Default for Placeholder {
	fn default() -> Self {
		Self {
			name: "User".to_string(),
			email: "example@email.com".to_string(),
		}
	}
}

/// Ordered collection of members, sole owner of every record.
///
/// Identifiers come from a monotonic counter that starts above the largest
/// seeded identifier and is never rewound, so an id is never handed out
/// twice even after the member holding it is deleted. Once the counter
/// passes `u64::MAX`, the smallest identifier not currently held is used.
#[derive(Debug, Clone)]
pub struct MemberStore {
	members: Vec<Member>,
	/// `None` once the counter is exhausted.
	next_id: Option<u64>,
	placeholder: Placeholder,
}

impl Default for MemberStore {
	fn default() -> Self {
		Self::assemble(Vec::new())
	}
}

impl MemberStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store holding the built-in initial roster.
	pub fn seeded() -> Self {
		Self::assemble(initial_members())
	}

	/// Creates a store from caller-supplied members, keeping their order.
	///
	/// # Errors
	///
	/// Returns [`RosterError::DuplicateId`] if two members share an identifier.
	pub fn from_members(members: Vec<Member>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(members.len());
		for member in &members {
			if !seen.insert(member.id) {
				return Err(RosterError::DuplicateId(member.id));
			}
		}
		Ok(Self::assemble(members))
	}

	fn assemble(members: Vec<Member>) -> Self {
		let next_id = members
			.iter()
			.map(|member| member.id.get())
			.max()
			.map_or(Some(1), |max| max.checked_add(1));
		Self {
			members,
			next_id,
			placeholder: Placeholder::default(),
		}
	}

	/// Overrides the defaults used for new members.
	pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
		self.placeholder = placeholder;
		self
	}

	/// Defaults used for new members.
	pub fn placeholder(&self) -> &Placeholder {
		&self.placeholder
	}

	/// Inserts a placeholder member at the front and returns its identifier.
	pub fn add_placeholder(&mut self) -> MemberId {
		let id = self.allocate_id();
		let member = Member::new(id, self.placeholder.name.clone(), self.placeholder.email.clone());
		self.members.insert(0, member);
		debug!(%id, total = self.members.len(), "added placeholder member");
		id
	}

	/// Removes the member with `id`. Returns false, changing nothing, if absent.
	pub fn delete(&mut self, id: MemberId) -> bool {
		let Some(index) = self.position(id) else {
			debug!(%id, "delete ignored: no such member");
			return false;
		};
		self.members.remove(index);
		debug!(%id, total = self.members.len(), "deleted member");
		true
	}

	/// Grants or revokes one catalog permission on a member.
	///
	/// Returns true if the member exists and its set changed.
	pub fn toggle_one(&mut self, id: MemberId, permission: Permission, enabled: bool) -> bool {
		let changed = self.get_mut(id).is_some_and(|member| member.toggle_one(permission, enabled));
		if changed {
			debug!(%id, %permission, enabled, "toggled permission");
		}
		changed
	}

	/// Grants or revokes the whole catalog on a member.
	///
	/// Returns true if the member exists and its set changed.
	pub fn toggle_all(&mut self, id: MemberId, enabled: bool) -> bool {
		let changed = self.get_mut(id).is_some_and(|member| member.toggle_all(enabled));
		if changed {
			debug!(%id, enabled, "toggled all permissions");
		}
		changed
	}

	/// Looks up a member.
	pub fn get(&self, id: MemberId) -> Option<&Member> {
		self.members.iter().find(|member| member.id == id)
	}

	/// Looks up a member for in-place editing.
	pub fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
		self.members.iter_mut().find(|member| member.id == id)
	}

	/// Index of a member in store order.
	pub fn position(&self, id: MemberId) -> Option<usize> {
		self.members.iter().position(|member| member.id == id)
	}

	/// Returns true if a member with `id` exists.
	pub fn contains(&self, id: MemberId) -> bool {
		self.position(id).is_some()
	}

	/// Iterates members in store order.
	pub fn iter(&self) -> impl Iterator<Item = &Member> {
		self.members.iter()
	}

	/// Identifiers in store order.
	pub fn ids(&self) -> Vec<MemberId> {
		self.members.iter().map(|member| member.id).collect()
	}

	/// Members whose email matches `query`, in store order.
	pub fn visible<'a>(&'a self, query: &'a Query) -> impl Iterator<Item = &'a Member> + 'a {
		self.members.iter().filter(move |member| query.matches(member))
	}

	/// Number of members.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if the store holds no members.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	fn allocate_id(&mut self) -> MemberId {
		if let Some(next) = self.next_id {
			self.next_id = next.checked_add(1);
			return MemberId::new(next);
		}
		// Fewer than `u64::MAX` members are held, so a free id is within `1..=len + 1`.
		let taken: HashSet<u64> = self.members.iter().map(|member| member.id.get()).collect();
		let mut candidate = 1;
		while taken.contains(&candidate) {
			candidate += 1;
		}
		debug!(id = candidate, "id counter exhausted, reusing a free id");
		MemberId::new(candidate)
	}
}
