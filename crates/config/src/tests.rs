use std::io::Write;

use pretty_assertions::assert_eq;
use teamdesk_roster::{MemberId, Permission};

use super::*;

#[test]
fn empty_input_yields_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config.placeholder, Placeholder::default());
	assert_eq!(config.ui.panel_width, DEFAULT_PANEL_WIDTH);
	assert!(config.members.is_none());
	assert!(config.warnings.is_empty());
}

#[test]
fn placeholder_section_overrides_defaults() {
	let config = Config::parse(
		r#"
		[placeholder]
		name = "New hire"
		"#,
	)
	.unwrap();
	assert_eq!(config.placeholder.name, "New hire");
	assert_eq!(config.placeholder.email, Placeholder::default().email);

	let mut store = config.build_store().unwrap();
	let id = store.add_placeholder();
	assert_eq!(store.get(id).unwrap().name, "New hire");
}

#[test]
fn panel_width_is_clamped_with_warning() {
	let config = Config::parse("[ui]\npanel-width = 200\n").unwrap();
	assert_eq!(config.ui.panel_width, 40);
	assert_eq!(config.warnings.len(), 1);
	assert!(config.warnings[0].to_string().contains("panel-width 200"));
}

#[test]
fn unknown_keys_are_rejected() {
	let err = Config::parse("[ui]\ncolour = \"red\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn member_list_replaces_seed() {
	let config = Config::parse(
		r#"
		[[members]]
		id = 10
		name = "Ops"
		email = "ops@team.dev"
		permissions = ["Administrator", "Blog"]

		[[members]]
		id = 11
		name = "Support"
		email = "support@team.dev"
		image = "https://example.com/s.png"
		"#,
	)
	.unwrap();
	assert!(config.warnings.is_empty());

	let mut store = config.build_store().unwrap();
	assert_eq!(store.ids(), vec![MemberId::new(10), MemberId::new(11)]);

	let ops = store.get(MemberId::new(10)).unwrap();
	assert!(ops.is_admin());
	assert!(ops.permissions.has(Permission::Blog));
	assert!(store.get(MemberId::new(11)).unwrap().has_image());

	assert_eq!(store.add_placeholder(), MemberId::new(12));
}

#[test]
fn unknown_member_labels_are_kept_and_reported() {
	let config = Config::parse(
		r#"
		[[members]]
		id = 1
		name = "A"
		email = "a@x.com"
		permissions = ["Customer request"]
		"#,
	)
	.unwrap();
	assert_eq!(config.warnings.len(), 1);
	assert!(config.warnings[0].0.contains("Customer request"));

	let store = config.build_store().unwrap();
	assert_eq!(store.get(MemberId::new(1)).unwrap().permissions.len(), 1);
}

#[test]
fn duplicate_member_ids_fail_store_build() {
	let config = Config::parse(
		r#"
		[[members]]
		id = 1
		name = "A"
		email = "a@x.com"

		[[members]]
		id = 1
		name = "B"
		email = "b@x.com"
		"#,
	)
	.unwrap();
	assert!(matches!(config.build_store(), Err(ConfigError::Roster(_))));
}

#[test]
fn missing_section_falls_back_to_seeded_roster() {
	let store = Config::default().build_store().unwrap();
	assert_eq!(store.len(), 4);
}

#[test]
fn load_reads_file_from_disk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[ui]\npanel-width = 16").unwrap();

	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.ui.panel_width, 16);

	let config = Config::load_or_default(Some(file.path())).unwrap();
	assert_eq!(config.ui.panel_width, 16);
}

#[test]
fn explicit_missing_file_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	let err = Config::load_or_default(Some(&path)).unwrap_err();
	match err {
		ConfigError::Io { path: failed, .. } => assert_eq!(failed, path),
		other => panic!("expected I/O error, got {other:?}"),
	}
}
