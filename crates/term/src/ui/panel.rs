use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use super::{ACCENT, MUTED};

/// An entry of the navigation panel. Entries are labels only.
struct NavItem {
	icon: &'static str,
	title: &'static str,
}

const NAV_ITEMS: [NavItem; 9] = [
	NavItem { icon: "▤", title: "Analytics" },
	NavItem { icon: "◉", title: "Profile" },
	NavItem { icon: "⚑", title: "Moderation" },
	NavItem { icon: "✉", title: "Chats" },
	NavItem { icon: "▣", title: "Banners" },
	NavItem { icon: "☰", title: "Team" },
	NavItem { icon: "✎", title: "Blog" },
	NavItem { icon: "$", title: "Exchange rates" },
	NavItem { icon: "←", title: "Log out" },
];

/// The section the main view belongs to.
const CURRENT: &str = "Team";

pub(super) fn render(frame: &mut Frame, area: Rect) {
	let mut lines = vec![
		Line::from(Span::styled("◆ teamdesk", Style::new().fg(ACCENT).add_modifier(Modifier::BOLD))),
		Line::from(Span::styled("◯ you", Style::new().fg(MUTED))),
		Line::default(),
	];
	lines.extend(NAV_ITEMS.iter().map(|item| {
		let style = if item.title == CURRENT {
			Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
		} else {
			Style::new()
		};
		Line::from(vec![Span::styled(item.icon, style), Span::raw(" "), Span::styled(item.title, style)])
	}));

	let block = Block::new().borders(Borders::RIGHT).border_style(Style::new().fg(MUTED)).padding(Padding::new(1, 1, 1, 0));
	frame.render_widget(Paragraph::new(lines).block(block), area);
}
