//! teamdesk: team member management in the terminal.

mod app;
mod cli;
mod logging;
#[cfg(test)]
mod tests;
mod ui;

use std::io;

use anyhow::Context;
use app::{App, Flow};
use clap::Parser;
use cli::Cli;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use teamdesk_config::Config;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	logging::setup_tracing(cli.resolved_log_dir().as_deref(), cli.verbose);

	let config = Config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
	for warning in &config.warnings {
		warn!("config: {warning}");
	}
	let store = config.build_store().context("failed to build the member list")?;

	let mut app = App::new(store, config.ui.panel_width);
	if let Some(query) = cli.query.as_deref() {
		app.set_query(query);
	}

	info!(members = app.store().len(), "starting teamdesk");
	let mut terminal = ratatui::init();
	let result = run(&mut terminal, &mut app);
	ratatui::restore();
	result.context("terminal I/O failed")
}

/// Draws and dispatches key presses until the view asks to quit.
fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
	loop {
		terminal.draw(|frame| ui::render(app, frame))?;
		if let Event::Key(key) = event::read()?
			&& key.kind == KeyEventKind::Press
			&& app.handle_key(key) == Flow::Quit
		{
			info!(members = app.store().len(), "quitting");
			return Ok(());
		}
	}
}
