//! Key sequence parser.
//!
//! Parses human-readable shortcut strings like `"Ctrl+Shift+S"` or
//! `"Ctrl+K, Ctrl+D"` into [`KeySequence`] values. Parsing normalizes case,
//! aliases, and modifier order, so two strings that name the same keys compare
//! equal once parsed.

use std::fmt;
use std::str::FromStr;

/// Longest multi-chord sequence accepted.
pub const MAX_CHORDS: usize = 4;

/// Error type for key parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key sequence")]
    Empty,
    #[error("more than four chords in {0:?}")]
    TooManyChords(String),
    #[error("chord {0:?} has no key")]
    MissingKey(String),
    #[error("chord {0:?} has more than one key")]
    ExtraKey(String),
    #[error("unknown key {0:?}")]
    UnknownKey(String),
}

/// Set of active modifiers for a chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Sets the modifier named by `token`. Returns false if it names none.
    fn apply(&mut self, token: &str) -> bool {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => self.ctrl = true,
            "alt" | "option" => self.alt = true,
            "shift" => self.shift = true,
            "meta" | "super" | "cmd" | "command" | "win" => self.meta = true,
            _ => return false,
        }
        true
    }
}

/// A named (non-character) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Escape,
    Tab,
    Backtab,
    Backspace,
    Return,
    Enter,
    Insert,
    Delete,
    Pause,
    Print,
    Home,
    End,
    Left,
    Up,
    Right,
    Down,
    PageUp,
    PageDown,
    Space,
    Menu,
    F(u8),
}

impl NamedKey {
    fn parse(token: &str) -> Option<Self> {
        let lower = token.to_ascii_lowercase();
        let key = match lower.as_str() {
            "esc" | "escape" => NamedKey::Escape,
            "tab" => NamedKey::Tab,
            "backtab" => NamedKey::Backtab,
            "backspace" => NamedKey::Backspace,
            "return" => NamedKey::Return,
            "enter" => NamedKey::Enter,
            "ins" | "insert" => NamedKey::Insert,
            "del" | "delete" => NamedKey::Delete,
            "pause" => NamedKey::Pause,
            "print" => NamedKey::Print,
            "home" => NamedKey::Home,
            "end" => NamedKey::End,
            "left" => NamedKey::Left,
            "up" => NamedKey::Up,
            "right" => NamedKey::Right,
            "down" => NamedKey::Down,
            "pgup" | "pageup" => NamedKey::PageUp,
            "pgdown" | "pagedown" => NamedKey::PageDown,
            "space" => NamedKey::Space,
            "menu" => NamedKey::Menu,
            _ => {
                let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
                if (1..=35).contains(&n) {
                    NamedKey::F(n)
                } else {
                    return None;
                }
            }
        };
        Some(key)
    }

    fn name(&self) -> String {
        match self {
            NamedKey::Escape => "Esc".into(),
            NamedKey::Tab => "Tab".into(),
            NamedKey::Backtab => "Backtab".into(),
            NamedKey::Backspace => "Backspace".into(),
            NamedKey::Return => "Return".into(),
            NamedKey::Enter => "Enter".into(),
            NamedKey::Insert => "Ins".into(),
            NamedKey::Delete => "Del".into(),
            NamedKey::Pause => "Pause".into(),
            NamedKey::Print => "Print".into(),
            NamedKey::Home => "Home".into(),
            NamedKey::End => "End".into(),
            NamedKey::Left => "Left".into(),
            NamedKey::Up => "Up".into(),
            NamedKey::Right => "Right".into(),
            NamedKey::Down => "Down".into(),
            NamedKey::PageUp => "PgUp".into(),
            NamedKey::PageDown => "PgDown".into(),
            NamedKey::Space => "Space".into(),
            NamedKey::Menu => "Menu".into(),
            NamedKey::F(n) => format!("F{n}"),
        }
    }
}

/// The key part of a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character, upper-cased for letters.
    Char(char),
    Named(NamedKey),
}

impl Key {
    fn parse(token: &str) -> Result<Self, KeyParseError> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_control() || c.is_whitespace() {
                return Err(KeyParseError::UnknownKey(token.to_string()));
            }
            return Ok(Key::Char(upper_single(c)));
        }
        NamedKey::parse(token)
            .map(Key::Named)
            .ok_or_else(|| KeyParseError::UnknownKey(token.to_string()))
    }
}

/// Upper-cases `c` only when the result is a single character, so that keys
/// like `ß` are not folded into a different key.
fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Named(n) => f.write_str(&n.name()),
        }
    }
}

/// One key press with its modifiers, e.g. `Ctrl+Shift+S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl FromStr for Chord {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyParseError::MissingKey(s.to_string()));
        }

        // A trailing "++" means the key itself is '+'.
        let (mods_part, plus_key) = match s.strip_suffix("++") {
            Some(rest) => (rest, true),
            None if s == "+" => ("", true),
            None => (s, false),
        };

        let mut modifiers = Modifiers::default();
        let mut key = plus_key.then_some(Key::Char('+'));

        for token in mods_part.split('+').map(str::trim) {
            if token.is_empty() {
                if mods_part.is_empty() {
                    continue;
                }
                return Err(KeyParseError::MissingKey(s.to_string()));
            }
            if modifiers.apply(token) {
                continue;
            }
            if key.is_some() {
                return Err(KeyParseError::ExtraKey(s.to_string()));
            }
            key = Some(Key::parse(token)?);
        }

        key.map(|key| Chord { modifiers, key })
            .ok_or_else(|| KeyParseError::MissingKey(s.to_string()))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        for (on, name) in [
            (m.ctrl, "Ctrl"),
            (m.alt, "Alt"),
            (m.shift, "Shift"),
            (m.meta, "Meta"),
        ] {
            if on {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key)
    }
}

/// A sequence of one to [`MAX_CHORDS`] chords, written `"Ctrl+K, Ctrl+D"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySequence {
    chords: Vec<Chord>,
}

impl KeySequence {
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }
}

impl FromStr for KeySequence {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(KeyParseError::Empty);
        }

        let parts = split_chords(s);
        if parts.len() > MAX_CHORDS {
            return Err(KeyParseError::TooManyChords(s.to_string()));
        }

        let chords = parts
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Chord>, _>>()?;
        Ok(KeySequence { chords })
    }
}

/// Splits on `", "` while leaving a literal comma key (`"Ctrl+,"`) intact.
fn split_chords(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b',' || i == start {
            continue;
        }
        // "+," ends a chord whose key is ','.
        if i > 0 && bytes[i - 1] == b'+' {
            continue;
        }
        parts.push(&s[start..i]);
        start = i + 1;
    }
    parts.push(&s[start..]);
    parts
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{chord}")?;
        }
        Ok(())
    }
}
