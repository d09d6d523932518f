//! Quillpad - preference storage for the quillpad text editor.
//!
//! The crate loads and saves user preferences (window geometry, text view
//! defaults, keyboard shortcuts, recent files and per-file cursor positions)
//! to TOML files under `~/.config/quillpad/`.
//!
//! - [`config`]: the in-memory preference record and its read/write operations
//! - [`settings`]: the grouped key/value store backing it
//! - [`shortcuts`]: key sequence parsing and shortcut validation
//! - [`error`]: store errors (logged, never surfaced by [`config::Config`])

pub mod config;
pub mod error;
pub mod settings;
pub mod shortcuts;

pub use config::Config;
pub use error::SettingsError;
