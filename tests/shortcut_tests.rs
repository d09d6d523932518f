use quillpad::config::{Config, SETTINGS_FILE};
use quillpad::settings::Settings;
use quillpad::shortcuts::ShortcutClaims;
use std::fs;
use tempfile::TempDir;
use toml::Value;

fn config_with(contents: &str) -> (TempDir, Config) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(SETTINGS_FILE), contents).expect("Failed to write settings");
    let mut config = Config::in_dir(dir.path());
    config.read_shortcuts();
    (dir, config)
}

#[test]
fn test_valid_shortcuts_are_loaded() {
    let (_dir, config) = config_with(
        r#"
        [shortcuts]
        actionSave = "Ctrl+S"
        actionFind = "shift+ctrl+f"
        "#,
    );

    assert_eq!(config.action_shortcut("actionSave"), Some("Ctrl+S"));
    assert_eq!(config.action_shortcut("actionFind"), Some("Ctrl+Shift+F"));
    assert!(config.removed_actions().is_empty());
}

#[test]
fn test_first_claim_wins() {
    let (_dir, config) = config_with(
        r#"
        [shortcuts]
        actionSave = "Ctrl+S"
        actionSaveAs = "ctrl+s"
        "#,
    );

    assert_eq!(config.action_shortcut("actionSave"), Some("Ctrl+S"));
    assert_eq!(config.action_shortcut("actionSaveAs"), None);
    assert_eq!(config.removed_actions(), ["actionSaveAs"]);
}

#[test]
fn test_reserved_and_malformed_are_rejected() {
    let (_dir, config) = config_with(
        r#"
        [shortcuts]
        actionUndo = "Ctrl+Z"
        actionBroken = "Ctrl+"
        actionEmpty = ""
        actionNumber = 12
        actionOk = "F3"
        "#,
    );

    assert_eq!(config.custom_shortcuts().len(), 1);
    assert_eq!(config.action_shortcut("actionOk"), Some("F3"));
    assert_eq!(
        config.removed_actions(),
        ["actionUndo", "actionBroken", "actionEmpty", "actionNumber"]
    );
}

#[test]
fn test_reserved_shortcut_never_accepted() {
    let config = Config::with_paths(None);
    for reserved in ["Ctrl+Z", "ctrl+shift+z", "Shift+Ins", "Meta+Shift+Up"] {
        let mut claims = ShortcutClaims::new();
        assert!(
            !config.is_valid_shortcut(&Value::String(reserved.to_string()), &mut claims),
            "{reserved} should be reserved"
        );
    }
}

#[test]
fn test_custom_reserved_set() {
    let mut config = Config::with_paths(None);
    config.set_reserved_shortcuts(["F1"]);

    let mut claims = ShortcutClaims::new();
    assert!(!config.is_valid_shortcut(&Value::String("F1".into()), &mut claims));
    assert!(config.is_valid_shortcut(&Value::String("Ctrl+Z".into()), &mut claims));
}

#[test]
fn test_rejected_actions_removed_on_write() {
    let (dir, mut config) = config_with(
        r#"
        [shortcuts]
        actionSave = "Ctrl+S"
        actionCopy = "Ctrl+C"
        "#,
    );
    config.set_action_shortcut("actionFind", "Ctrl+F");
    config.write_config();

    let stored = Settings::open(dir.path().join(SETTINGS_FILE));
    let group = stored.group("shortcuts");
    assert_eq!(group.string("actionSave").as_deref(), Some("Ctrl+S"));
    assert_eq!(group.string("actionFind").as_deref(), Some("Ctrl+F"));
    assert!(!group.contains("actionCopy"));
}

#[test]
fn test_remove_action_shortcut_deletes_stored_key() {
    let (dir, mut config) = config_with("[shortcuts]\nactionSave = \"Ctrl+S\"\n");
    config.remove_action_shortcut("actionSave");
    config.write_config();

    let stored = Settings::open(dir.path().join(SETTINGS_FILE));
    assert!(!stored.group("shortcuts").contains("actionSave"));
}

#[test]
fn test_reading_twice_does_not_reject_own_bindings() {
    let (_dir, mut config) = config_with("[shortcuts]\nactionSave = \"Ctrl+S\"\n");
    config.read_shortcuts();

    assert_eq!(config.action_shortcut("actionSave"), Some("Ctrl+S"));
    assert!(config.removed_actions().is_empty());
}

#[test]
fn test_keys_without_single_uppercase_are_distinct() {
    let (_dir, config) = config_with(
        "[shortcuts]\nactionSave = \"Ctrl+S\"\nactionSharpS = \"Ctrl+ß\"\nactionLigature = \"Ctrl+\u{fb00}\"\n",
    );

    assert_eq!(config.action_shortcut("actionSave"), Some("Ctrl+S"));
    assert_eq!(config.action_shortcut("actionSharpS"), Some("Ctrl+ß"));
    assert_eq!(config.action_shortcut("actionLigature"), Some("Ctrl+\u{fb00}"));
    assert!(config.removed_actions().is_empty());
}
