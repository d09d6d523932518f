//! Grouped key/value settings store backed by a TOML file.
//!
//! A [`Settings`] value is one namespace on disk (one file). Each top-level
//! table is a *group* (`[window]`, `[text]`, `[shortcuts]`); keys inside a
//! group hold scalars or arrays. Groups keep file order, so enumerating a
//! group visits keys in the order the user wrote them.
//!
//! # Example
//!
//! ```no_run
//! use quillpad::settings::Settings;
//!
//! let mut settings = Settings::open("/tmp/quillpad.toml");
//! settings.group_mut("window").set("max", true);
//! if settings.is_writable() {
//!     settings.sync().unwrap();
//! }
//! ```

pub mod value;

use crate::error::SettingsError;
use std::fs;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub use value::SENTINEL_NONE;

/// One on-disk settings namespace.
#[derive(Debug, Clone)]
pub struct Settings {
    path: PathBuf,
    root: Table,
}

impl Settings {
    /// Opens a settings file, treating any problem as an empty store.
    ///
    /// A missing file is silently empty; an unreadable or unparseable file is
    /// logged and then treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_open(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings file: {e}");
                Self {
                    path,
                    root: Table::new(),
                }
            }
        }
    }

    /// Opens a settings file, reporting read and parse failures.
    ///
    /// A missing file is not an error.
    pub fn try_open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                root: Table::new(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|e| SettingsError::io(&path, e))?;
        let root = contents
            .parse::<Table>()
            .map_err(|source| SettingsError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, root })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level keys that live outside any group.
    pub fn root(&self) -> Group<'_> {
        Group {
            table: Some(&self.root),
        }
    }

    /// Read access to a group. A missing group reads as empty.
    pub fn group(&self, name: &str) -> Group<'_> {
        Group {
            table: self.root.get(name).and_then(Value::as_table),
        }
    }

    /// Write access to a group, creating it if needed.
    ///
    /// A non-table value stored under the group name is replaced.
    pub fn group_mut(&mut self, name: &str) -> GroupMut<'_> {
        let slot = self
            .root
            .entry(name.to_string())
            .or_insert(Value::Table(Table::new()));
        if !slot.is_table() {
            *slot = Value::Table(Table::new());
        }
        GroupMut { slot }
    }

    /// Replaces a whole group with `table`.
    pub fn set_group(&mut self, name: &str, table: Table) {
        self.root.insert(name.to_string(), Value::Table(table));
    }

    /// Keys of a group, in file order.
    pub fn child_keys(&self, group: &str) -> Vec<String> {
        self.group(group).keys()
    }

    /// Whether [`Settings::sync`] can be expected to succeed.
    ///
    /// An existing file must not be read-only. A file that does not exist yet
    /// needs its nearest existing ancestor to be a writable directory.
    pub fn is_writable(&self) -> bool {
        if let Ok(meta) = fs::metadata(&self.path) {
            return meta.is_file() && !meta.permissions().readonly();
        }

        self.path
            .ancestors()
            .skip(1)
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    dir
                }
            })
            .find(|dir| dir.exists())
            .and_then(|dir| fs::metadata(dir).ok())
            .is_some_and(|meta| meta.is_dir() && !meta.permissions().readonly())
    }

    /// Renders the store as TOML text.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(&self.root)?)
    }

    /// Writes the store to disk atomically.
    ///
    /// The document goes to a temporary sibling first and is then renamed over
    /// the target, so a crash never leaves a half-written settings file.
    pub fn sync(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
            }
        }

        let text = self.to_toml_string()?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, text).map_err(|e| SettingsError::io(&temp_path, e))?;
        fs::rename(&temp_path, &self.path).map_err(|e| SettingsError::io(&self.path, e))?;

        Ok(())
    }
}

/// Read-only view of one group.
#[derive(Debug, Clone, Copy)]
pub struct Group<'a> {
    table: Option<&'a Table>,
}

impl<'a> Group<'a> {
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.table.and_then(|t| t.get(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> Vec<String> {
        self.table
            .map(|t| t.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// True if the raw stored value is the `"none"` sentinel.
    pub fn is_sentinel(&self, key: &str) -> bool {
        self.get(key).is_some_and(value::is_sentinel)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(value::to_bool)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(value::to_int)
    }

    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value::to_string)
    }

    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).and_then(value::to_string_list)
    }
}

/// Mutable view of one group.
///
/// The slot always holds a table; [`Settings::group_mut`] makes sure of it.
#[derive(Debug)]
pub struct GroupMut<'a> {
    slot: &'a mut Value,
}

impl GroupMut<'_> {
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        if let Some(table) = self.slot.as_table_mut() {
            table.insert(key.to_string(), value.into());
        }
        self
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        if let Some(table) = self.slot.as_table_mut() {
            table.remove(key);
        }
        self
    }

    /// Stores the `"none"` sentinel under `key`.
    pub fn set_sentinel(&mut self, key: &str) -> &mut Self {
        self.set(key, SENTINEL_NONE)
    }

    /// Stores a string list, or removes the key if the list is empty.
    pub fn set_list(&mut self, key: &str, items: &[String]) -> &mut Self {
        if items.is_empty() {
            self.remove(key)
        } else {
            let array: Vec<Value> = items.iter().cloned().map(Value::String).collect();
            self.set(key, Value::Array(array))
        }
    }
}
