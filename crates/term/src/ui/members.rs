use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Padding, Paragraph};
use teamdesk_roster::{Label, Member};
use unicode_width::UnicodeWidthStr;

use super::{ACCENT, ADMIN, MUTED, focus_style};
use crate::app::{App, Focus, MemberMenu, MenuView};

const TITLE: &str = "Team";
const SEARCH_PLACEHOLDER: &str = "Search by Email";
const ADD_LABEL: &str = "+ Add user";

/// Draws the main view and returns the area used by the member list.
pub(super) fn render(app: &App, frame: &mut Frame, area: Rect) -> Rect {
	let [header, list_area, footer] =
		Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).areas(area);

	render_header(app, frame, header);
	render_list(app, frame, list_area);
	render_hints(app, frame, footer);
	list_area
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
	let [title_area, search_area, button_area] =
		Layout::horizontal([Constraint::Min(8), Constraint::Length(32), Constraint::Length(14)]).areas(area);

	let title = Paragraph::new(Line::styled(TITLE, Style::new().add_modifier(Modifier::BOLD)))
		.block(Block::new().padding(Padding::new(1, 0, 1, 0)));
	frame.render_widget(title, title_area);

	let searching = app.focus() == Focus::Search && app.menu().is_none();
	let block = Block::bordered().title(" Search ").border_style(focus_style(searching));
	let inner = block.inner(search_area);
	let query = app.query().as_str();
	let query_width = u16::try_from(query.width()).unwrap_or(u16::MAX);
	// Keep the tail of a long query and the cursor inside the box.
	let scroll = query_width.saturating_sub(inner.width.saturating_sub(1));
	let text = if query.is_empty() {
		Line::styled(SEARCH_PLACEHOLDER, Style::new().fg(MUTED))
	} else {
		Line::raw(query)
	};
	frame.render_widget(Paragraph::new(text).scroll((0, scroll)).block(block), search_area);
	if searching {
		frame.set_cursor_position(Position::new(inner.x + query_width - scroll, inner.y));
	}

	let pressed = app.focus() == Focus::AddButton && app.menu().is_none();
	let label_style = if pressed {
		Style::new().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
	} else {
		Style::new().fg(ACCENT)
	};
	let button = Paragraph::new(Line::styled(ADD_LABEL, label_style))
		.alignment(Alignment::Center)
		.block(Block::bordered().border_style(focus_style(pressed)));
	frame.render_widget(button, button_area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
	let items: Vec<ListItem> = app.visible().map(member_item).collect();
	let block = Block::new()
		.borders(Borders::TOP)
		.border_style(Style::new().fg(MUTED))
		.title(format!(" {} of {} members ", items.len(), app.store().len()));

	if items.is_empty() {
		let message = if app.query().is_empty() {
			"No team members yet".to_string()
		} else {
			format!("No members match {:?}", app.query().as_str())
		};
		let empty = Paragraph::new(Line::styled(message, Style::new().fg(MUTED)))
			.alignment(Alignment::Center)
			.block(block);
		frame.render_widget(empty, area);
		return;
	}

	let active = app.focus() == Focus::Members || app.menu().is_some();
	let mut state = ListState::default().with_selected(app.selected_index().filter(|_| active));
	let list = List::new(items)
		.block(block)
		.highlight_symbol("▌ ")
		.highlight_spacing(HighlightSpacing::Always)
		.highlight_style(Style::new().add_modifier(Modifier::BOLD));
	frame.render_stateful_widget(list, area, &mut state);
}

fn member_item(member: &Member) -> ListItem<'_> {
	let avatar = if member.has_image() {
		Span::styled("●", Style::new().fg(ACCENT))
	} else {
		Span::styled("○", Style::new().fg(MUTED))
	};
	let header = Line::from(vec![
		avatar,
		Span::raw(" "),
		Span::styled(member.name.as_str(), Style::new().add_modifier(Modifier::BOLD)),
		Span::raw("  "),
		Span::styled(member.email.as_str(), Style::new().fg(MUTED)),
		Span::styled("  ⋯", Style::new().fg(MUTED)),
	]);

	let mut badges = vec![Span::raw("  ")];
	for label in &member.permissions {
		badges.push(badge(label));
		badges.push(Span::raw(" "));
	}

	ListItem::new(vec![header, Line::from(badges)])
}

fn badge(label: &Label) -> Span<'static> {
	let style = if label.is_admin() {
		Style::new().fg(ADMIN).add_modifier(Modifier::BOLD)
	} else {
		Style::new().fg(Color::Gray)
	};
	Span::styled(format!("[{label}]"), style)
}

fn render_hints(app: &App, frame: &mut Frame, area: Rect) {
	let hint = match (app.menu().map(MemberMenu::view), app.focus()) {
		(Some(MenuView::Entries), _) => "↑↓ choose · Enter open · Esc close",
		(Some(MenuView::Permissions), _) => "↑↓ choose · Space toggle · Esc back",
		(None, Focus::Search) => "type to search · Ctrl-U clear · Tab next · Esc done",
		(None, Focus::AddButton) => "Enter add user · Tab next · Esc back",
		(None, Focus::Members) => "↑↓ select · Enter menu · a add · Del delete · / search · q quit",
	};
	frame.render_widget(Paragraph::new(Line::styled(hint, Style::new().fg(MUTED))), area);
}
