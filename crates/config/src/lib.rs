//! Configuration system for teamdesk.
//!
//! Configuration is a single TOML file. Every section is optional; a missing
//! file means built-in defaults.
//!
//! # Configuration Files
//!
//! teamdesk looks for `$XDG_CONFIG_HOME/teamdesk/config.toml` (or the
//! platform equivalent) unless a path is given on the command line.
//!
//! # Schema
//!
//! ```toml
//! # Defaults for members created with the add button
//! [placeholder]
//! name = "User"
//! email = "example@email.com"
//!
//! [ui]
//! panel-width = 20
//!
//! # Replaces the built-in roster
//! [[members]]
//! id = 1
//! name = "Artem Ivanov"
//! email = "artem@gmail.com"
//! permissions = ["Blog", "Analytics"]
//! image = "https://example.com/artem.jpg"
//! ```
//!
//! Out-of-range UI values are clamped and reported in [`Config::warnings`].

pub mod error;

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub use error::{ConfigError, ConfigWarning, Result};
use serde::Deserialize;
use teamdesk_roster::{Label, Member, MemberStore, Placeholder};

/// Allowed width of the navigation panel, in cells.
pub const PANEL_WIDTH_RANGE: RangeInclusive<u16> = 12..=40;

/// Navigation panel width used when none is configured.
pub const DEFAULT_PANEL_WIDTH: u16 = 20;

/// Parsed configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Defaults for newly added members.
	pub placeholder: Placeholder,
	/// Layout options.
	pub ui: UiConfig,
	/// Seed roster replacing the built-in one.
	pub members: Option<Vec<Member>>,
	/// Non-fatal warnings encountered during parsing.
	#[serde(skip)]
	pub warnings: Vec<ConfigWarning>,
}

/// Layout options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct UiConfig {
	/// Width of the navigation panel.
	pub panel_width: u16,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			panel_width: DEFAULT_PANEL_WIDTH,
		}
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	///
	/// Non-fatal problems are collected in `Config::warnings` rather than
	/// failing the parse.
	pub fn parse(input: &str) -> Result<Self> {
		let mut config: Config = toml::from_str(input)?;
		config.validate();
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load from `explicit` if given, otherwise from [`default_path`] when
	/// that file exists, otherwise return defaults.
	///
	/// An explicit path that cannot be read is an error.
	pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		match default_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}

	/// Builds the member store this configuration describes.
	///
	/// # Errors
	///
	/// Fails if the configured member list repeats an identifier.
	pub fn build_store(&self) -> Result<MemberStore> {
		let store = match &self.members {
			Some(members) => MemberStore::from_members(members.clone())?,
			None => MemberStore::seeded(),
		};
		Ok(store.with_placeholder(self.placeholder.clone()))
	}

	fn validate(&mut self) {
		let width = self.ui.panel_width;
		let clamped = width.clamp(*PANEL_WIDTH_RANGE.start(), *PANEL_WIDTH_RANGE.end());
		if clamped != width {
			self.warnings.push(ConfigWarning(format!(
				"ui.panel-width {width} is outside {}..={}, using {clamped}",
				PANEL_WIDTH_RANGE.start(),
				PANEL_WIDTH_RANGE.end()
			)));
			self.ui.panel_width = clamped;
		}

		for member in self.members.iter().flatten() {
			for label in &member.permissions {
				if let Label::Custom(text) = label {
					self.warnings.push(ConfigWarning(format!(
						"member {}: {text:?} is not a togglable permission",
						member.id
					)));
				}
			}
		}
	}
}

/// Default location of the configuration file.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("teamdesk").join("config.toml"))
}

#[cfg(test)]
mod tests;
