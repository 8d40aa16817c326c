//! Per-member popup menu state.

use std::iter;

use teamdesk_roster::{Member, MemberId, Permission, PermissionSet};

/// Entries of the per-member popup menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
	/// Opens the permission checklist.
	ChangePermissions,
	/// Re-sends the invitation code. Has no effect locally.
	ResendCode,
	/// Removes the member.
	Delete,
}

impl MenuEntry {
	/// All entries in display order.
	pub const ALL: [Self; 3] = [Self::ChangePermissions, Self::ResendCode, Self::Delete];

	/// Display title.
	pub const fn title(self) -> &'static str {
		match self {
			Self::ChangePermissions => "Change access rights",
			Self::ResendCode => "Resend code",
			Self::Delete => "Delete",
		}
	}

	/// Returns true if activating the entry opens a nested view.
	pub const fn has_children(self) -> bool {
		matches!(self, Self::ChangePermissions)
	}
}

/// A row of the permission checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistRow {
	/// Aggregate toggle over the whole catalog.
	All,
	/// A single catalog permission.
	Grant(Permission),
}

impl ChecklistRow {
	/// Rows in display order: the aggregate first, then the catalog.
	pub fn rows() -> impl Iterator<Item = Self> {
		iter::once(Self::All).chain(Permission::catalog().map(Self::Grant))
	}

	/// Number of rows.
	pub const fn count() -> usize {
		PermissionSet::catalog_len() + 1
	}

	/// Display title.
	pub fn title(self) -> &'static str {
		match self {
			Self::All => "All",
			Self::Grant(permission) => permission.label(),
		}
	}

	/// Whether the checkbox is ticked for `member`.
	pub fn is_checked(self, member: &Member) -> bool {
		match self {
			Self::All => member.is_all_active(),
			Self::Grant(permission) => member.permissions.has(permission),
		}
	}
}

/// Which list the popup is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuView {
	/// Top-level entries.
	Entries,
	/// Permission checklist.
	Permissions,
}

/// Open popup menu bound to one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberMenu {
	member: MemberId,
	view: MenuView,
	entry: usize,
	row: usize,
}

impl MemberMenu {
	/// Opens the menu on its first entry.
	pub fn new(member: MemberId) -> Self {
		Self {
			member,
			view: MenuView::Entries,
			entry: 0,
			row: 0,
		}
	}

	/// The member the menu acts on.
	pub fn member(&self) -> MemberId {
		self.member
	}

	/// Current view.
	pub fn view(&self) -> MenuView {
		self.view
	}

	/// Index of the highlighted top-level entry.
	pub fn entry_index(&self) -> usize {
		self.entry
	}

	/// Highlighted top-level entry.
	pub fn entry(&self) -> MenuEntry {
		MenuEntry::ALL[self.entry]
	}

	/// Index of the highlighted checklist row.
	pub fn row_index(&self) -> usize {
		self.row
	}

	/// Highlighted checklist row.
	pub fn row(&self) -> ChecklistRow {
		ChecklistRow::rows().nth(self.row).unwrap_or(ChecklistRow::All)
	}

	/// Moves the highlight up in the current view, stopping at the top.
	pub fn up(&mut self) {
		let cursor = self.cursor_mut();
		*cursor = cursor.saturating_sub(1);
	}

	/// Moves the highlight down in the current view, stopping at the bottom.
	pub fn down(&mut self) {
		let last = self.len().saturating_sub(1);
		let cursor = self.cursor_mut();
		*cursor = (*cursor + 1).min(last);
	}

	/// Switches to the permission checklist, highlighting its first row.
	pub fn open_permissions(&mut self) {
		self.view = MenuView::Permissions;
		self.row = 0;
	}

	/// Returns from the checklist to the top-level entries.
	pub fn back(&mut self) {
		self.view = MenuView::Entries;
	}

	fn len(&self) -> usize {
		match self.view {
			MenuView::Entries => MenuEntry::ALL.len(),
			MenuView::Permissions => ChecklistRow::count(),
		}
	}

	fn cursor_mut(&mut self) -> &mut usize {
		match self.view {
			MenuView::Entries => &mut self.entry,
			MenuView::Permissions => &mut self.row,
		}
	}
}
