//! Frame rendering.
//!
//! Rendering reads [`App`] and never mutates it; list scroll offsets are
//! recomputed from the selection on every frame.

mod members;
mod panel;
mod popup;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};

use crate::app::App;

/// Accent used for focus borders and the current section.
const ACCENT: Color = Color::Cyan;
/// Administrator badge color.
const ADMIN: Color = Color::LightRed;
/// Secondary text such as emails and hints.
const MUTED: Color = Color::DarkGray;

fn focus_style(focused: bool) -> Style {
	if focused { Style::new().fg(ACCENT).add_modifier(Modifier::BOLD) } else { Style::new().fg(MUTED) }
}

/// Draws the whole screen.
pub fn render(app: &App, frame: &mut Frame) {
	let [panel_area, main_area] =
		Layout::horizontal([Constraint::Length(app.panel_width()), Constraint::Min(0)]).areas(frame.area());

	panel::render(frame, panel_area);
	let list_area = members::render(app, frame, main_area);

	if let Some(menu) = app.menu()
		&& let Some(member) = app.store().get(menu.member())
	{
		popup::render(frame, list_area, member, menu);
	}
}
