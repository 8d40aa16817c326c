//! View state and key handling.
//!
//! [`App`] owns the member store together with everything the screen needs
//! between frames: the search query, which control has focus, the list
//! selection, and the open popup menu. Each key event is applied in full by
//! [`App::handle_key`] before the next frame is drawn.

mod menu;

pub use menu::{ChecklistRow, MemberMenu, MenuEntry, MenuView};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use teamdesk_roster::{Member, MemberId, MemberStore, Query};
use tracing::{debug, info};

/// Control that receives key input when no menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	/// The email search box.
	Search,
	/// The add-member button.
	AddButton,
	/// The member list.
	Members,
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	/// Keep processing events.
	Continue,
	/// Leave the event loop.
	Quit,
}

/// State of the team view.
pub struct App {
	store: MemberStore,
	query: Query,
	focus: Focus,
	/// Index into the visible members, not the store.
	selected: usize,
	menu: Option<MemberMenu>,
	panel_width: u16,
}

impl App {
	/// Creates the view over `store` with the member list focused.
	pub fn new(store: MemberStore, panel_width: u16) -> Self {
		Self {
			store,
			query: Query::default(),
			focus: Focus::Members,
			selected: 0,
			menu: None,
			panel_width,
		}
	}

	/// The member store.
	pub fn store(&self) -> &MemberStore {
		&self.store
	}

	/// Current search query.
	pub fn query(&self) -> &Query {
		&self.query
	}

	/// Focused control.
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Open popup menu, if any.
	pub fn menu(&self) -> Option<&MemberMenu> {
		self.menu.as_ref()
	}

	/// Width of the navigation panel.
	pub fn panel_width(&self) -> u16 {
		self.panel_width
	}

	/// Replaces the search text and resets the selection.
	pub fn set_query(&mut self, text: &str) {
		self.query.set(text);
		self.on_query_changed();
	}

	/// Members matching the query, in store order.
	pub fn visible(&self) -> impl Iterator<Item = &Member> {
		self.store.visible(&self.query)
	}

	/// Identifiers of the visible members.
	pub fn visible_ids(&self) -> Vec<MemberId> {
		self.visible().map(|member| member.id).collect()
	}

	/// Selected position in the visible list, or `None` if nothing is visible.
	pub fn selected_index(&self) -> Option<usize> {
		(self.visible().count() > 0).then_some(self.selected)
	}

	/// Identifier of the selected member.
	pub fn selected_id(&self) -> Option<MemberId> {
		self.visible().nth(self.selected).map(|member| member.id)
	}

	/// Applies one key event.
	pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Flow::Quit;
		}
		if self.menu.is_some() {
			self.handle_menu_key(key);
			return Flow::Continue;
		}
		match self.focus {
			Focus::Search => self.handle_search_key(key),
			Focus::AddButton => self.handle_button_key(key),
			Focus::Members => return self.handle_members_key(key),
		}
		Flow::Continue
	}

	/// Inserts a placeholder member and selects it when it is visible.
	pub fn add_member(&mut self) -> MemberId {
		let id = self.store.add_placeholder();
		info!(%id, "member added");
		match self.visible_ids().iter().position(|visible| *visible == id) {
			Some(index) => self.selected = index,
			None => self.clamp_selection(),
		}
		id
	}

	/// Deletes a member. Missing members are ignored.
	pub fn delete_member(&mut self, id: MemberId) {
		if self.store.delete(id) {
			info!(%id, "member deleted");
		}
		if self.menu.as_ref().is_some_and(|menu| menu.member() == id) {
			self.menu = None;
		}
		self.clamp_selection();
	}

	/// Opens the popup menu for the selected member.
	pub fn open_menu(&mut self) {
		if let Some(id) = self.selected_id() {
			debug!(%id, "menu opened");
			self.menu = Some(MemberMenu::new(id));
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.query.clear();
				self.on_query_changed();
			}
			KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
				self.query.push(ch);
				self.on_query_changed();
			}
			KeyCode::Backspace => {
				if self.query.pop() {
					self.on_query_changed();
				}
			}
			KeyCode::Esc if !self.query.is_empty() => {
				self.query.clear();
				self.on_query_changed();
			}
			KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::BackTab => self.focus = Focus::Members,
			KeyCode::Tab | KeyCode::Right => self.focus = Focus::AddButton,
			_ => {}
		}
	}

	fn handle_button_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter | KeyCode::Char(' ') => {
				self.add_member();
			}
			KeyCode::Tab | KeyCode::Esc | KeyCode::Down => self.focus = Focus::Members,
			KeyCode::BackTab | KeyCode::Left => self.focus = Focus::Search,
			_ => {}
		}
	}

	fn handle_members_key(&mut self, key: KeyEvent) -> Flow {
		match key.code {
			KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
			KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
			KeyCode::Down | KeyCode::Char('j') => {
				self.selected += 1;
				self.clamp_selection();
			}
			KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
			KeyCode::End | KeyCode::Char('G') => {
				self.selected = usize::MAX;
				self.clamp_selection();
			}
			KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char('.') => self.open_menu(),
			KeyCode::Delete => {
				if let Some(id) = self.selected_id() {
					self.delete_member(id);
				}
			}
			KeyCode::Char('a') | KeyCode::Char('+') => {
				self.add_member();
			}
			KeyCode::Char('/') | KeyCode::Tab => self.focus = Focus::Search,
			KeyCode::BackTab => self.focus = Focus::AddButton,
			_ => {}
		}
		Flow::Continue
	}

	fn handle_menu_key(&mut self, key: KeyEvent) {
		let Some(menu) = self.menu.as_mut() else {
			return;
		};
		let id = menu.member();
		match menu.view() {
			MenuView::Entries => match key.code {
				KeyCode::Up | KeyCode::Char('k') => menu.up(),
				KeyCode::Down | KeyCode::Char('j') => menu.down(),
				KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
					let entry = menu.entry();
					self.activate(id, entry);
				}
				KeyCode::Esc | KeyCode::Left | KeyCode::Char('q') => self.menu = None,
				_ => {}
			},
			MenuView::Permissions => match key.code {
				KeyCode::Up | KeyCode::Char('k') => menu.up(),
				KeyCode::Down | KeyCode::Char('j') => menu.down(),
				KeyCode::Enter | KeyCode::Char(' ') => {
					let row = menu.row();
					self.toggle_row(id, row);
				}
				KeyCode::Esc | KeyCode::Left => menu.back(),
				_ => {}
			},
		}
	}

	fn activate(&mut self, id: MemberId, entry: MenuEntry) {
		match entry {
			MenuEntry::ChangePermissions => {
				if let Some(menu) = self.menu.as_mut() {
					menu.open_permissions();
				}
			}
			MenuEntry::ResendCode => debug!(%id, "resend code requested"),
			MenuEntry::Delete => self.delete_member(id),
		}
	}

	fn toggle_row(&mut self, id: MemberId, row: ChecklistRow) {
		let Some(member) = self.store.get(id) else {
			self.menu = None;
			return;
		};
		let enabled = !row.is_checked(member);
		match row {
			ChecklistRow::All => self.store.toggle_all(id, enabled),
			ChecklistRow::Grant(permission) => self.store.toggle_one(id, permission, enabled),
		};
	}

	fn on_query_changed(&mut self) {
		self.selected = 0;
		debug!(query = self.query.as_str(), visible = self.visible().count(), "search updated");
	}

	fn clamp_selection(&mut self) {
		let count = self.visible().count();
		self.selected = self.selected.min(count.saturating_sub(1));
	}
}
