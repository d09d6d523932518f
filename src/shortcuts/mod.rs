//! Custom keyboard shortcuts.
//!
//! Users can rebind editor actions in the `[shortcuts]` group:
//!
//! ```toml
//! [shortcuts]
//! actionSave = "Ctrl+S"
//! actionFind = "Ctrl+Shift+F"
//! ```
//!
//! A binding is kept only if it parses as a key sequence, is not one of the
//! [reserved shortcuts](DEFAULT_RESERVED_SHORTCUTS) owned by the text widget,
//! and no earlier action in the same load already claimed it. Rejected
//! actions are removed from the file on the next save.

pub mod keys;

use crate::settings::Settings;
use indexmap::IndexMap;
use keys::KeySequence;
use std::collections::HashSet;
use toml::Value;

pub use keys::{Chord, Key, KeyParseError, Modifiers, NamedKey};

pub const SHORTCUTS_GROUP: &str = "shortcuts";

/// Bindings handled by the text widget itself; they can never be reassigned.
pub const DEFAULT_RESERVED_SHORTCUTS: &[&str] = &[
    "Ctrl+Z",
    "Ctrl+Shift+Z",
    "Ctrl+X",
    "Ctrl+C",
    "Ctrl+V",
    "Ctrl+A",
    "Shift+Ins",
    "Shift+Del",
    "Ctrl+Ins",
    "Ctrl+Left",
    "Ctrl+Right",
    "Ctrl+Up",
    "Ctrl+Down",
    "Ctrl+Home",
    "Ctrl+End",
    "Ctrl+Shift+Up",
    "Ctrl+Shift+Down",
    "Meta+Up",
    "Meta+Down",
    "Meta+Shift+Up",
    "Meta+Shift+Down",
    "Ctrl+Tab",
    "Ctrl+Shift+Tab",
    "Ctrl+Meta+Tab",
    "Ctrl+Shift+Meta+Tab",
    "Alt+Left",
    "Alt+Right",
    "Alt+Up",
    "Alt+Down",
    "Ctrl+Shift+Alt+Up",
    "Ctrl+Shift+Alt+Down",
];

/// Key sequences already taken during one load pass.
///
/// Create one per `read_shortcuts` call so that the first action to claim a
/// binding keeps it and later ones are rejected.
#[derive(Debug, Clone, Default)]
pub struct ShortcutClaims {
    claimed: HashSet<KeySequence>,
}

impl ShortcutClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `seq` as taken. Returns false if it already was.
    pub fn claim(&mut self, seq: KeySequence) -> bool {
        self.claimed.insert(seq)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

/// Action → shortcut bindings plus the bookkeeping needed to save them.
#[derive(Debug, Clone)]
pub struct ShortcutMap {
    actions: IndexMap<String, String>,
    removed: Vec<String>,
    reserved: HashSet<KeySequence>,
}

impl Default for ShortcutMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutMap {
    pub fn new() -> Self {
        Self {
            actions: IndexMap::new(),
            removed: Vec::new(),
            reserved: parse_all(DEFAULT_RESERVED_SHORTCUTS.iter().copied()),
        }
    }

    /// Checks a stored shortcut value and claims it on success.
    ///
    /// Returns the parsed sequence if `value` is a string that parses to a
    /// non-empty key sequence, is not reserved, and is not yet in `claims`.
    pub fn validate(&self, value: &Value, claims: &mut ShortcutClaims) -> Option<KeySequence> {
        let raw = value.as_str()?;
        let seq: KeySequence = match raw.parse() {
            Ok(seq) => seq,
            Err(e) => {
                tracing::debug!("Rejecting shortcut {raw:?}: {e}");
                return None;
            }
        };
        if self.reserved.contains(&seq) {
            tracing::debug!("Rejecting reserved shortcut {seq}");
            return None;
        }
        if !claims.claim(seq.clone()) {
            tracing::debug!("Rejecting shortcut {seq}: already bound");
            return None;
        }
        Some(seq)
    }

    /// Loads the `[shortcuts]` group, replacing any bindings held in memory.
    pub fn read(&mut self, settings: &Settings) {
        self.actions.clear();
        self.removed.clear();

        let group = settings.group(SHORTCUTS_GROUP);
        let mut claims = ShortcutClaims::new();
        for action in group.keys() {
            let accepted = group
                .get(&action)
                .and_then(|value| self.validate(value, &mut claims));
            match accepted {
                Some(seq) => {
                    self.actions.insert(action, seq.to_string());
                }
                None => self.removed.push(action),
            }
        }
    }

    /// Writes bindings back, dropping the actions queued for removal.
    pub fn write(&self, settings: &mut Settings) {
        let mut group = settings.group_mut(SHORTCUTS_GROUP);
        for action in &self.removed {
            group.remove(action);
        }
        for (action, shortcut) in &self.actions {
            group.set(action, shortcut.as_str());
        }
    }

    pub fn get(&self, action: &str) -> Option<&str> {
        self.actions.get(action).map(String::as_str)
    }

    pub fn set(&mut self, action: &str, shortcut: &str) {
        self.removed.retain(|a| a != action);
        self.actions.insert(action.to_string(), shortcut.to_string());
    }

    /// Drops a binding and queues its key for removal on the next save.
    pub fn remove(&mut self, action: &str) {
        self.actions.shift_remove(action);
        if !self.removed.iter().any(|a| a == action) {
            self.removed.push(action.to_string());
        }
    }

    pub fn actions(&self) -> &IndexMap<String, String> {
        &self.actions
    }

    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn reserved(&self) -> &HashSet<KeySequence> {
        &self.reserved
    }

    /// Replaces the reserved set. Unparseable entries are ignored.
    pub fn set_reserved<'a>(&mut self, shortcuts: impl IntoIterator<Item = &'a str>) {
        self.reserved = parse_all(shortcuts);
    }
}

fn parse_all<'a>(shortcuts: impl IntoIterator<Item = &'a str>) -> HashSet<KeySequence> {
    shortcuts.into_iter().filter_map(|s| s.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn test_all_defaults_parse() {
        let map = ShortcutMap::new();
        assert_eq!(map.reserved().len(), DEFAULT_RESERVED_SHORTCUTS.len());
    }

    #[test]
    fn test_validate_first_claim_wins() {
        let map = ShortcutMap::new();
        let mut claims = ShortcutClaims::new();
        assert!(map.validate(&text("Ctrl+Shift+S"), &mut claims).is_some());
        assert!(map.validate(&text("shift+ctrl+s"), &mut claims).is_none());
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_validate_rejects_reserved_and_non_strings() {
        let map = ShortcutMap::new();
        let mut claims = ShortcutClaims::new();
        assert!(map.validate(&text("ctrl+z"), &mut claims).is_none());
        assert!(map.validate(&Value::Integer(5), &mut claims).is_none());
        assert!(map.validate(&text(""), &mut claims).is_none());
        assert!(claims.is_empty());
    }

    #[test]
    fn test_claims_are_scoped_to_one_pass() {
        let map = ShortcutMap::new();
        let mut first = ShortcutClaims::new();
        let mut second = ShortcutClaims::new();
        assert!(map.validate(&text("F9"), &mut first).is_some());
        assert!(map.validate(&text("F9"), &mut second).is_some());
    }

    #[test]
    fn test_remove_queues_action_once() {
        let mut map = ShortcutMap::new();
        map.set("actionSave", "Ctrl+S");
        map.remove("actionSave");
        map.remove("actionSave");
        assert_eq!(map.get("actionSave"), None);
        assert_eq!(map.removed(), ["actionSave".to_string()]);

        map.set("actionSave", "Ctrl+S");
        assert!(map.removed().is_empty());
    }
}
