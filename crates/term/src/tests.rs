use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Position;
use ratatui::style::{Color, Modifier};
use teamdesk_roster::MemberStore;

use crate::app::App;
use crate::ui;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn seeded_app() -> App {
	App::new(MemberStore::seeded(), 20)
}

fn press(app: &mut App, codes: &[KeyCode]) {
	for code in codes {
		app.handle_key(KeyEvent::new(*code, KeyModifiers::NONE));
	}
}

fn terminal(app: &App) -> Terminal<TestBackend> {
	let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
	terminal.draw(|frame| ui::render(app, frame)).unwrap();
	terminal
}

fn draw(app: &App) -> Buffer {
	terminal(app).backend().buffer().clone()
}

fn screen(buffer: &Buffer) -> String {
	buffer
		.content
		.chunks(usize::from(buffer.area.width))
		.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

/// Top-left cell of the first run of cells spelling `text`.
fn find(buffer: &Buffer, text: &str) -> Option<(usize, usize)> {
	let chars: Vec<String> = text.chars().map(String::from).collect();
	let width = usize::from(buffer.area.width);
	buffer.content.chunks(width).enumerate().find_map(|(y, row)| {
		(0..=width - chars.len())
			.find(|&x| chars.iter().enumerate().all(|(i, ch)| row[x + i].symbol() == ch))
			.map(|x| (x, y))
	})
}

fn cell_at<'a>(buffer: &'a Buffer, (x, y): (usize, usize)) -> &'a ratatui::buffer::Cell {
	&buffer.content[y * usize::from(buffer.area.width) + x]
}

#[test]
fn seeded_view_lists_every_member() {
	let screen = screen(&draw(&seeded_app()));
	for expected in [
		"Artem Ivanov",
		"artem@gmail.com",
		"Lena Novikova",
		"Maksim Ivanov",
		"Aizhuldyz Koshkinbay",
		"[Blog]",
		"[Administrator]",
		"[Tech support]",
		"4 of 4 members",
	] {
		assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
	}
}

#[test]
fn header_and_panel_are_drawn() {
	let screen = screen(&draw(&seeded_app()));
	for expected in ["Team", "Search by Email", "+ Add user", "teamdesk"] {
		assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
	}
	for item in [
		"Analytics",
		"Profile",
		"Moderation",
		"Chats",
		"Banners",
		"Blog",
		"Exchange rates",
		"Log out",
	] {
		assert!(screen.contains(item), "missing nav item {item:?}");
	}
}

#[test]
fn administrator_badge_has_its_own_color() {
	let buffer = draw(&seeded_app());
	let admin = find(&buffer, "[Administrator]").expect("admin badge drawn");
	assert_eq!(cell_at(&buffer, admin).fg, Color::LightRed);

	let blog = find(&buffer, "[Blog]").expect("blog badge drawn");
	assert_ne!(cell_at(&buffer, blog).fg, Color::LightRed);
}

#[test]
fn search_narrows_rendered_list() {
	let mut app = seeded_app();
	app.set_query("LENKAN");
	let screen = screen(&draw(&app));
	assert!(screen.contains("Lena Novikova"));
	assert!(!screen.contains("Artem Ivanov"));
	assert!(screen.contains("1 of 4 members"));
}

#[test]
fn empty_result_shows_message() {
	let mut app = seeded_app();
	app.set_query("nobody");
	let screen = screen(&draw(&app));
	assert!(screen.contains("No members match \"nobody\""), "{screen}");
}

#[test]
fn search_cursor_follows_query() {
	let mut app = seeded_app();
	press(&mut app, &[KeyCode::Char('/'), KeyCode::Char('z'), KeyCode::Char('z')]);

	let mut terminal = terminal(&app);
	let (x, y) = find(terminal.backend().buffer(), "zz").expect("query drawn");
	let cursor = terminal.get_cursor_position().unwrap();
	assert_eq!(cursor, Position::new(x as u16 + 2, y as u16));
}

#[test]
fn added_member_shows_default_avatar() {
	let mut app = seeded_app();
	press(&mut app, &[KeyCode::Char('a')]);
	let buffer = draw(&app);
	assert!(find(&buffer, "○ User").is_some(), "{}", screen(&buffer));
	assert!(screen(&buffer).contains("example@email.com"));
	assert!(screen(&buffer).contains("5 of 5 members"));
}

#[test]
fn popup_lists_menu_entries() {
	let mut app = seeded_app();
	press(&mut app, &[KeyCode::Enter]);
	let screen = screen(&draw(&app));
	for expected in ["Change access rights ›", "Resend code", "Delete"] {
		assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
	}
}

#[test]
fn checklist_reflects_member_permissions() {
	let mut app = seeded_app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
	let screen = screen(&draw(&app));
	for expected in ["[ ] All", "[x] Blog", "[x] Analytics", "[ ] Promotions", "[ ] Ad moderation"] {
		assert!(screen.contains(expected), "missing {expected:?} in\n{screen}");
	}
}

#[test]
fn checklist_dims_rows_while_all_is_on() {
	let mut app = seeded_app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);
	let buffer = draw(&app);
	let text = screen(&buffer);
	assert!(text.contains("[x] All"), "{text}");
	assert!(text.contains("[x] Promotions"), "{text}");

	let all = find(&buffer, "[x] All").unwrap();
	assert!(!cell_at(&buffer, all).modifier.contains(Modifier::DIM));
	let promotions = find(&buffer, "[x] Promotions").unwrap();
	assert!(cell_at(&buffer, promotions).modifier.contains(Modifier::DIM));
}
