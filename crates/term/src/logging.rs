//! Tracing setup.
//!
//! The terminal owns stdout and stderr while the view is up, so events go to a
//! per-process file in the log directory. Without a log directory no
//! subscriber is installed.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs a file subscriber under `log_dir` and returns the log file path.
///
/// `RUST_LOG` overrides the default filter. Returns `None` when no directory
/// is given, the file cannot be opened, or a subscriber is already installed.
pub fn setup_tracing(log_dir: Option<&Path>, verbose: bool) -> Option<PathBuf> {
	let log_dir = log_dir?;
	std::fs::create_dir_all(log_dir).ok()?;

	let log_path = log_dir.join(format!("teamdesk.{}.log", std::process::id()));
	let file = OpenOptions::new().create(true).append(true).open(&log_path).ok()?;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("teamdesk=trace,teamdesk_roster=trace,teamdesk_config=trace,info")
		} else {
			EnvFilter::new("teamdesk=debug,teamdesk_roster=debug,warn")
		}
	});

	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.try_init()
		.ok()?;

	tracing::info!(path = ?log_path, "tracing initialized");
	Some(log_path)
}
