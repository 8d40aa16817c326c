//! CLI schema for the teamdesk binary.

use std::path::PathBuf;

use clap::Parser;


/// Environment variable naming the log directory when `--log-dir` is absent.
pub const LOG_DIR_ENV: &str = "TEAMDESK_LOG_DIR";

#[derive(Parser, Debug)]
#[command(name = "teamdesk")]
#[command(about = "Manage team members and their access rights")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to the user config directory)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Pre-fill the email search
	#[arg(long, short = 'q', value_name = "TEXT")]
	pub query: Option<String>,

	/// Write logs to this directory
	#[arg(long, value_name = "PATH")]
	pub log_dir: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	/// Log directory from the command line, falling back to [`LOG_DIR_ENV`].
	pub fn resolved_log_dir(&self) -> Option<PathBuf> {
		self.log_dir
			.clone()
			.or_else(|| std::env::var_os(LOG_DIR_ENV).filter(|dir| !dir.is_empty()).map(PathBuf::from))
	}
}
