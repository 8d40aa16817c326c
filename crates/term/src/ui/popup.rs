use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, List, ListItem, ListState};
use teamdesk_roster::Member;

use super::{ACCENT, ADMIN};
use crate::app::{ChecklistRow, MemberMenu, MenuEntry, MenuView};

const ENTRIES_WIDTH: u16 = 30;
const CHECKLIST_WIDTH: u16 = 34;

pub(super) fn render(frame: &mut Frame, area: Rect, member: &Member, menu: &MemberMenu) {
	match menu.view() {
		MenuView::Entries => render_entries(frame, area, member, menu),
		MenuView::Permissions => render_checklist(frame, area, member, menu),
	}
}

fn render_entries(frame: &mut Frame, area: Rect, member: &Member, menu: &MemberMenu) {
	let items: Vec<ListItem> = MenuEntry::ALL
		.iter()
		.map(|entry| {
			let title = if entry.has_children() {
				format!("{} ›", entry.title())
			} else {
				entry.title().to_string()
			};
			let style = if *entry == MenuEntry::Delete { Style::new().fg(ADMIN) } else { Style::new() };
			ListItem::new(Line::styled(title, style))
		})
		.collect();

	let block = Block::bordered().title(format!(" {} ", member.name)).border_style(Style::new().fg(ACCENT));
	let height = MenuEntry::ALL.len() as u16 + 2;
	draw_list(frame, centered(area, ENTRIES_WIDTH, height), items, block, menu.entry_index());
}

fn render_checklist(frame: &mut Frame, area: Rect, member: &Member, menu: &MemberMenu) {
	let all_active = member.is_all_active();
	let items: Vec<ListItem> = ChecklistRow::rows()
		.map(|row| {
			let mark = if row.is_checked(member) { "[x]" } else { "[ ]" };
			// Individual rows are dimmed while the aggregate is on.
			let style = if all_active && row != ChecklistRow::All {
				Style::new().add_modifier(Modifier::DIM)
			} else {
				Style::new()
			};
			ListItem::new(Line::styled(format!("{mark} {}", row.title()), style))
		})
		.collect();

	let block = Block::bordered().title(" Access rights ").border_style(Style::new().fg(ACCENT));
	let height = ChecklistRow::count() as u16 + 2;
	draw_list(frame, centered(area, CHECKLIST_WIDTH, height), items, block, menu.row_index());
}

fn draw_list(frame: &mut Frame, area: Rect, items: Vec<ListItem>, block: Block, selected: usize) {
	frame.render_widget(Clear, area);
	let list = List::new(items)
		.block(block)
		.highlight_symbol("› ")
		.highlight_style(Style::new().fg(ACCENT).add_modifier(Modifier::BOLD));
	let mut state = ListState::default().with_selected(Some(selected));
	frame.render_stateful_widget(list, area, &mut state);
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}
