//! Configuration system for quillpad.
//!
//! [`Config`] holds every user preference in memory and knows how to move them
//! to and from the settings store. Preferences are split by group:
//! [`WindowSettings`] (`[window]`), [`TextSettings`] (`[text]`) and custom
//! shortcuts (`[shortcuts]`). Cursor positions live in a second file so that
//! saving them on every file close does not rewrite the main preferences.
//!
//! Nothing here returns an error. A missing value takes its default, an out of
//! range value is clamped, a malformed value is dropped, and an unwritable
//! store turns a save into a logged no-op.
//!
//! # Example
//!
//! ```no_run
//! use quillpad::config::Config;
//!
//! let mut config = Config::load();
//! config.add_recent_file("/home/me/notes.txt");
//! config.window.set_splitter_pos(35);
//! config.write_config();
//! ```

pub mod bounds;
pub mod cursor;
pub mod font;
pub mod geometry;
pub mod recent;

use crate::settings::{Group, GroupMut, Settings};
use crate::shortcuts::keys::KeySequence;
use crate::shortcuts::{ShortcutClaims, ShortcutMap};
use cursor::CursorPositions;
use font::FontSpec;
use geometry::WindowSize;
use indexmap::IndexMap;
use recent::FileList;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use toml::Value;

pub const APP_NAME: &str = "quillpad";
pub const SETTINGS_FILE: &str = "quillpad.toml";
pub const CURSOR_POS_FILE: &str = "cursor_pos.toml";

pub const WINDOW_GROUP: &str = "window";
pub const TEXT_GROUP: &str = "text";

/// Locations of the two settings files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub settings: PathBuf,
    pub cursor_positions: PathBuf,
}

impl StorePaths {
    /// Both files inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            settings: dir.join(SETTINGS_FILE),
            cursor_positions: dir.join(CURSOR_POS_FILE),
        }
    }

    /// `~/.config/quillpad/` on all platforms.
    pub fn default_location() -> Option<Self> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push(APP_NAME);
            Self::in_dir(path)
        })
    }
}

/// Preferences stored in the `[window]` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSettings {
    /// When false, `size` is saved as `"none"` and reset every run.
    pub remember_size: bool,
    pub size: WindowSize,
    pub maximized: bool,
    pub fullscreen: bool,
    /// Size used for new windows when the last size is not remembered.
    pub start_size: WindowSize,
    /// When false, `splitterPos` is saved as `"none"` and reset every run.
    pub remember_splitter_pos: bool,
    splitter_pos: u8,
    pub iconless: bool,
    pub sys_icon: bool,
    pub no_toolbar: bool,
    pub no_menubar: bool,
    pub hide_searchbar: bool,
    pub show_statusbar: bool,
    pub show_cursor_pos: bool,
    pub show_lang_selector: bool,
    pub side_pane_mode: bool,
    tab_position: u8,
    pub tab_wrap_around: bool,
    pub hide_single_tab: bool,
    pub open_in_windows: bool,
    pub native_dialog: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            remember_size: true,
            size: WindowSize::DEFAULT,
            maximized: false,
            fullscreen: false,
            start_size: WindowSize::DEFAULT,
            remember_splitter_pos: true,
            splitter_pos: bounds::DEFAULT_SPLITTER_POS,
            iconless: false,
            sys_icon: false,
            no_toolbar: false,
            no_menubar: false,
            hide_searchbar: false,
            show_statusbar: false,
            show_cursor_pos: false,
            show_lang_selector: false,
            side_pane_mode: false,
            tab_position: bounds::DEFAULT_TAB_POSITION,
            tab_wrap_around: false,
            hide_single_tab: false,
            open_in_windows: false,
            native_dialog: false,
        }
    }
}

impl WindowSettings {
    /// Builds window preferences from a stored group.
    pub fn from_group(group: Group<'_>) -> Self {
        let mut window = Self::default();
        let flag = |key: &str| group.bool(key).unwrap_or(false);

        if group.is_sentinel("size") {
            window.remember_size = false;
        } else {
            window.size = WindowSize::from_value_or_default(group.get("size"));
            window.maximized = flag("max");
            window.fullscreen = flag("fullscreen");
        }
        window.start_size = WindowSize::from_value_or_default(group.get("startSize"));

        if group.is_sentinel("splitterPos") {
            window.remember_splitter_pos = false;
        } else if let Some(pos) = group.int("splitterPos") {
            window.set_splitter_pos(pos);
        }

        window.iconless = flag("iconless");
        window.sys_icon = flag("sysIcon");
        window.no_toolbar = flag("noToolbar");
        window.no_menubar = flag("noMenubar");
        if window.no_toolbar && window.no_menubar {
            // Keep at least one way to reach the actions.
            tracing::debug!("Both toolbar and menubar hidden; showing the toolbar");
            window.no_toolbar = false;
        }
        window.hide_searchbar = flag("hideSearchbar");
        window.show_statusbar = flag("showStatusbar");
        window.show_cursor_pos = flag("showCursorPos");
        window.show_lang_selector = flag("showLangSelector");
        window.side_pane_mode = flag("sidePaneMode");
        if let Some(pos) = group.int("tabPosition") {
            window.set_tab_position(pos);
        }
        window.tab_wrap_around = flag("tabWrapAround");
        window.hide_single_tab = flag("hideSingleTab");
        window.open_in_windows = flag("openInWindows");
        window.native_dialog = flag("nativeDialog");

        window
    }

    /// Writes window preferences into a group.
    pub fn write_to(&self, group: &mut GroupMut<'_>) {
        if self.remember_size {
            group
                .set("size", self.size.to_value())
                .set("max", self.maximized)
                .set("fullscreen", self.fullscreen);
        } else {
            group.set_sentinel("size").remove("max").remove("fullscreen");
        }

        if self.remember_splitter_pos {
            group.set("splitterPos", i64::from(self.splitter_pos));
        } else {
            group.set_sentinel("splitterPos");
        }

        group
            .set("startSize", self.start_size.to_value())
            .set("iconless", self.iconless)
            .set("sysIcon", self.sys_icon)
            .set("noToolbar", self.no_toolbar)
            .set("noMenubar", self.no_menubar)
            .set("hideSearchbar", self.hide_searchbar)
            .set("showStatusbar", self.show_statusbar)
            .set("showCursorPos", self.show_cursor_pos)
            .set("showLangSelector", self.show_lang_selector)
            .set("sidePaneMode", self.side_pane_mode)
            .set("tabPosition", i64::from(self.tab_position))
            .set("tabWrapAround", self.tab_wrap_around)
            .set("hideSingleTab", self.hide_single_tab)
            .set("openInWindows", self.open_in_windows)
            .set("nativeDialog", self.native_dialog);
    }

    /// Side pane splitter position as a percentage.
    pub fn splitter_pos(&self) -> u8 {
        self.splitter_pos
    }

    pub fn set_splitter_pos(&mut self, pos: i64) {
        self.splitter_pos = bounds::splitter_pos(pos);
    }

    /// Tab bar position: 0 north, 1 south, 2 west, 3 east.
    pub fn tab_position(&self) -> u8 {
        self.tab_position
    }

    pub fn set_tab_position(&mut self, pos: i64) {
        self.tab_position = bounds::tab_position(pos);
    }
}

/// Preferences stored in the `[text]` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSettings {
    /// When false, `font` is saved as `"none"` and reset every run.
    pub remember_font: bool,
    #[serde(serialize_with = "serialize_display")]
    pub font: FontSpec,
    pub wrap_by_default: bool,
    pub indent_by_default: bool,
    pub auto_bracket: bool,
    pub line_numbers: bool,
    pub syntax_highlighting: bool,
    pub show_white_space: bool,
    pub show_endings: bool,
    pub dark_color_scheme: bool,
    pub inertial_scrolling: bool,
    pub auto_save: bool,
    pub scroll_jump_workaround: bool,
    pub execute_scripts: bool,
    pub execute_command: String,
    pub append_empty_line: bool,
    pub remove_trailing_spaces: bool,
    pub date_format: String,
    v_line_distance: i32,
    max_sh_size: u8,
    light_bg_color_value: u8,
    dark_bg_color_value: u8,
    auto_save_interval: u8,
    #[serde(rename = "text_tab_size", serialize_with = "serialize_len")]
    text_tab: String,
    /// True if the recent list tracks opened files rather than saved ones.
    pub recent_opened: bool,
    recent_files: FileList,
    /// When false, the last-session list is neither loaded nor saved.
    pub save_last_files_list: bool,
    last_files: FileList,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            remember_font: true,
            font: FontSpec::default(),
            wrap_by_default: true,
            indent_by_default: true,
            auto_bracket: false,
            line_numbers: false,
            syntax_highlighting: true,
            show_white_space: false,
            show_endings: false,
            dark_color_scheme: false,
            inertial_scrolling: false,
            auto_save: false,
            scroll_jump_workaround: false,
            execute_scripts: false,
            execute_command: String::new(),
            append_empty_line: true,
            remove_trailing_spaces: false,
            date_format: String::new(),
            v_line_distance: bounds::DEFAULT_V_LINE_DISTANCE,
            max_sh_size: bounds::DEFAULT_MAX_SH_SIZE,
            light_bg_color_value: bounds::DEFAULT_LIGHT_BG_COLOR_VALUE,
            dark_bg_color_value: bounds::DEFAULT_DARK_BG_COLOR_VALUE,
            auto_save_interval: bounds::DEFAULT_AUTO_SAVE_INTERVAL,
            text_tab: " ".repeat(bounds::DEFAULT_TEXT_TAB_SIZE),
            recent_opened: false,
            recent_files: FileList::new(bounds::DEFAULT_RECENT_FILES_NUMBER),
            save_last_files_list: false,
            last_files: FileList::new(bounds::MAX_LAST_FILES),
        }
    }
}

impl TextSettings {
    /// Builds text preferences from a stored group.
    pub fn from_group(group: Group<'_>) -> Self {
        let mut text = Self::default();
        let flag = |key: &str| group.bool(key).unwrap_or(false);

        if group.is_sentinel("font") {
            text.remember_font = false;
        } else if let Some(descriptor) = group.string("font") {
            match descriptor.parse() {
                Ok(font) => text.font = font,
                Err(e) => tracing::debug!("Ignoring font {descriptor:?}: {e}"),
            }
        }

        text.wrap_by_default = !flag("noWrap");
        text.indent_by_default = !flag("noIndent");
        text.auto_bracket = flag("autoBracket");
        text.line_numbers = flag("lineNumbers");
        text.syntax_highlighting = !flag("noSyntaxHighlighting");
        text.show_white_space = flag("showWhiteSpace");
        text.show_endings = flag("showEndings");
        text.dark_color_scheme = flag("darkColorScheme");
        text.inertial_scrolling = flag("inertialScrolling");
        text.auto_save = flag("autoSave");
        text.scroll_jump_workaround = flag("scrollJumpWorkaround");
        text.execute_scripts = flag("executeScripts");
        text.execute_command = group.string("executeCommand").unwrap_or_default();
        text.append_empty_line = group.bool("appendEmptyLine").unwrap_or(true);
        text.remove_trailing_spaces = flag("removeTrailingSpaces");
        text.date_format = group.string("dateFormat").unwrap_or_default();

        if let Some(distance) = group.int("vLineDistance") {
            text.set_v_line_distance(distance);
        }
        if let Some(size) = group.int("maxSHSize") {
            text.set_max_sh_size(size);
        }
        if let Some(value) = group.int("lightBgColorValue") {
            text.set_light_bg_color_value(value);
        }
        if let Some(value) = group.int("darkBgColorValue") {
            text.set_dark_bg_color_value(value);
        }
        if let Some(minutes) = group.int("autoSaveInterval") {
            text.set_auto_save_interval(minutes);
        }
        if let Some(width) = group.int("textTabSize") {
            text.set_text_tab_size(width);
        }

        let recent_number = group
            .int("recentFilesNumber")
            .map(bounds::recent_files_number)
            .unwrap_or(bounds::DEFAULT_RECENT_FILES_NUMBER);
        text.recent_files = FileList::from_paths(
            group.string_list("recentFiles").unwrap_or_default(),
            recent_number,
        );
        text.recent_opened = flag("recentOpened");

        text.save_last_files_list = flag("saveLastFilesList");
        if text.save_last_files_list {
            text.last_files = FileList::from_paths(
                group.string_list("lastFiles").unwrap_or_default(),
                bounds::MAX_LAST_FILES,
            );
        }

        text
    }

    /// Writes text preferences into a group.
    pub fn write_to(&self, group: &mut GroupMut<'_>) {
        if self.remember_font {
            group.set("font", self.font.to_string());
        } else {
            group.set_sentinel("font");
        }

        group
            .set("noWrap", !self.wrap_by_default)
            .set("noIndent", !self.indent_by_default)
            .set("autoBracket", self.auto_bracket)
            .set("lineNumbers", self.line_numbers)
            .set("noSyntaxHighlighting", !self.syntax_highlighting)
            .set("showWhiteSpace", self.show_white_space)
            .set("showEndings", self.show_endings)
            .set("darkColorScheme", self.dark_color_scheme)
            .set("inertialScrolling", self.inertial_scrolling)
            .set("autoSave", self.auto_save)
            .set("scrollJumpWorkaround", self.scroll_jump_workaround)
            .set("maxSHSize", i64::from(self.max_sh_size))
            .set("lightBgColorValue", i64::from(self.light_bg_color_value))
            .set("dateFormat", self.date_format.as_str())
            .set("darkBgColorValue", i64::from(self.dark_bg_color_value))
            .set("executeScripts", self.execute_scripts)
            .set("appendEmptyLine", self.append_empty_line)
            .set("removeTrailingSpaces", self.remove_trailing_spaces)
            .set("vLineDistance", i64::from(self.v_line_distance))
            .set("recentFilesNumber", self.recent_files.capacity() as i64)
            .set("executeCommand", self.execute_command.as_str())
            .set_list("recentFiles", self.recent_files.as_slice())
            .set("recentOpened", self.recent_opened)
            .set("saveLastFilesList", self.save_last_files_list);

        if self.save_last_files_list {
            group.set_list("lastFiles", self.last_files.as_slice());
        } else {
            group.remove("lastFiles");
        }

        group
            .set("autoSaveInterval", i64::from(self.auto_save_interval))
            .set("textTabSize", self.text_tab.len() as i64);
    }

    /// Column of the vertical guide line; negative when the guide is hidden.
    pub fn v_line_distance(&self) -> i32 {
        self.v_line_distance
    }

    pub fn set_v_line_distance(&mut self, distance: i64) {
        self.v_line_distance = bounds::v_line_distance(distance);
    }

    /// Largest file size (MiB) that is still syntax highlighted.
    pub fn max_sh_size(&self) -> u8 {
        self.max_sh_size
    }

    pub fn set_max_sh_size(&mut self, size: i64) {
        self.max_sh_size = bounds::max_sh_size(size);
    }

    pub fn light_bg_color_value(&self) -> u8 {
        self.light_bg_color_value
    }

    pub fn set_light_bg_color_value(&mut self, value: i64) {
        self.light_bg_color_value = bounds::light_bg_color_value(value);
    }

    pub fn dark_bg_color_value(&self) -> u8 {
        self.dark_bg_color_value
    }

    pub fn set_dark_bg_color_value(&mut self, value: i64) {
        self.dark_bg_color_value = bounds::dark_bg_color_value(value);
    }

    /// Auto-save interval in minutes.
    pub fn auto_save_interval(&self) -> u8 {
        self.auto_save_interval
    }

    pub fn set_auto_save_interval(&mut self, minutes: i64) {
        self.auto_save_interval = bounds::auto_save_interval(minutes);
    }

    /// The run of spaces inserted for a tab.
    pub fn text_tab(&self) -> &str {
        &self.text_tab
    }

    pub fn text_tab_size(&self) -> usize {
        self.text_tab.len()
    }

    pub fn set_text_tab_size(&mut self, width: i64) {
        self.text_tab = " ".repeat(bounds::text_tab_size(width));
    }

    pub fn recent_files_number(&self) -> usize {
        self.recent_files.capacity()
    }

    /// Changes the recent-files capacity, dropping the oldest entries if needed.
    pub fn set_recent_files_number(&mut self, number: i64) {
        self.recent_files
            .set_capacity(bounds::recent_files_number(number));
    }

    pub fn recent_files(&self) -> &[String] {
        self.recent_files.as_slice()
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }

    pub fn last_files(&self) -> &[String] {
        self.last_files.as_slice()
    }

    /// Replaces the last-session list, keeping at most 20 distinct paths.
    pub fn set_last_files(&mut self, files: Vec<String>) {
        self.last_files = FileList::from_paths(files, bounds::MAX_LAST_FILES);
    }
}

fn serialize_display<T: std::fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[allow(clippy::ptr_arg)]
fn serialize_len<S: Serializer>(value: &String, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(value.len() as u64)
}

/// All user preferences, plus where they are stored.
#[derive(Debug, Clone)]
pub struct Config {
    paths: Option<StorePaths>,
    pub window: WindowSettings,
    pub text: TextSettings,
    shortcuts: ShortcutMap,
    cursor_positions: CursorPositions,
}

impl Default for Config {
    /// Default preferences stored under `~/.config/quillpad/`.
    fn default() -> Self {
        Self::with_paths(StorePaths::default_location())
    }
}

impl Config {
    /// Default preferences stored under `~/.config/quillpad/`.
    ///
    /// Nothing is read until [`Config::read_config`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default preferences stored in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_paths(Some(StorePaths::in_dir(dir)))
    }

    /// Default preferences with explicit store locations.
    ///
    /// With `None`, reads yield defaults and writes are skipped.
    pub fn with_paths(paths: Option<StorePaths>) -> Self {
        Self {
            paths,
            window: WindowSettings::default(),
            text: TextSettings::default(),
            shortcuts: ShortcutMap::new(),
            cursor_positions: CursorPositions::new(),
        }
    }

    /// Reads preferences and shortcuts from the default location.
    pub fn load() -> Self {
        let mut config = Self::new();
        config.read_config();
        config.read_shortcuts();
        config
    }

    pub fn paths(&self) -> Option<&StorePaths> {
        self.paths.as_ref()
    }

    fn open_settings(&self) -> Option<Settings> {
        self.paths.as_ref().map(|p| Settings::open(&p.settings))
    }

    /// Replaces the window and text preferences with what is stored.
    pub fn read_config(&mut self) {
        match self.open_settings() {
            Some(settings) => {
                self.window = WindowSettings::from_group(settings.group(WINDOW_GROUP));
                self.text = TextSettings::from_group(settings.group(TEXT_GROUP));
                tracing::debug!("Read preferences from {}", settings.path().display());
            }
            None => {
                tracing::warn!("No settings location; using default preferences");
                self.window = WindowSettings::default();
                self.text = TextSettings::default();
            }
        }
    }

    /// Replaces the custom shortcuts with the valid ones stored.
    ///
    /// Invalid, reserved, or duplicate bindings are queued for removal on the
    /// next [`Config::write_config`].
    pub fn read_shortcuts(&mut self) {
        match self.open_settings() {
            Some(settings) => self.shortcuts.read(&settings),
            None => self.shortcuts = ShortcutMap::new(),
        }
        if !self.shortcuts.removed().is_empty() {
            tracing::info!(
                "Dropping {} invalid shortcut(s): {}",
                self.shortcuts.removed().len(),
                self.shortcuts.removed().join(", ")
            );
        }
    }

    /// Saves all preferences, shortcuts, and cursor positions.
    ///
    /// Does nothing if the store cannot be written.
    pub fn write_config(&mut self) {
        let Some(mut settings) = self.open_settings() else {
            tracing::warn!("No settings location; preferences not saved");
            return;
        };
        if !settings.is_writable() {
            tracing::warn!(
                "Settings file {} is not writable; preferences not saved",
                settings.path().display()
            );
            return;
        }

        self.window.write_to(&mut settings.group_mut(WINDOW_GROUP));
        self.text.write_to(&mut settings.group_mut(TEXT_GROUP));
        self.shortcuts.write(&mut settings);

        match settings.sync() {
            Ok(()) => tracing::info!("Saved preferences to {}", settings.path().display()),
            Err(e) => tracing::warn!("Could not save preferences: {e}"),
        }

        self.write_cursor_pos();
    }

    /// Checks one stored shortcut value against the reserved set and `claims`.
    ///
    /// On success the sequence is added to `claims`, so a second action asking
    /// for the same keys in the same pass is rejected.
    pub fn is_valid_shortcut(&self, value: &Value, claims: &mut ShortcutClaims) -> bool {
        self.shortcuts.validate(value, claims).is_some()
    }

    pub fn action_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action)
    }

    pub fn set_action_shortcut(&mut self, action: &str, shortcut: &str) {
        self.shortcuts.set(action, shortcut);
    }

    /// Restores an action's default shortcut by dropping the custom one.
    pub fn remove_action_shortcut(&mut self, action: &str) {
        self.shortcuts.remove(action);
    }

    pub fn custom_shortcuts(&self) -> &IndexMap<String, String> {
        self.shortcuts.actions()
    }

    /// Actions whose stored binding will be deleted on the next save.
    pub fn removed_actions(&self) -> &[String] {
        self.shortcuts.removed()
    }

    pub fn reserved_shortcuts(&self) -> &HashSet<KeySequence> {
        self.shortcuts.reserved()
    }

    pub fn set_reserved_shortcuts<'a>(&mut self, shortcuts: impl IntoIterator<Item = &'a str>) {
        self.shortcuts.set_reserved(shortcuts);
    }

    /// Moves `file` to the front of the recent-files list.
    pub fn add_recent_file(&mut self, file: &str) {
        self.text.recent_files.add(file);
    }

    /// Loads stored cursor positions. Only the first call reads the store.
    pub fn read_cursor_pos(&mut self) {
        if self.cursor_positions.is_retrieved() {
            return;
        }
        let Some(paths) = &self.paths else {
            return;
        };
        self.cursor_positions
            .load_once(&Settings::open(&paths.cursor_positions));
    }

    /// Saves cursor positions to their own store.
    ///
    /// Skipped when there are no positions or the store is not writable.
    /// Stored positions are loaded first so that entries for files not touched
    /// this session survive.
    pub fn write_cursor_pos(&mut self) {
        if self.cursor_positions.is_empty() {
            return;
        }
        let Some(paths) = &self.paths else {
            return;
        };
        let mut settings = Settings::open(&paths.cursor_positions);
        if !settings.is_writable() {
            tracing::warn!(
                "Cursor position file {} is not writable",
                settings.path().display()
            );
            return;
        }

        self.cursor_positions.load_once(&settings);
        if self.cursor_positions.store(&mut settings) {
            if let Err(e) = settings.sync() {
                tracing::warn!("Could not save cursor positions: {e}");
            }
        }
    }

    pub fn cursor_positions(&self) -> &CursorPositions {
        &self.cursor_positions
    }

    pub fn cursor_pos(&self, file: &str) -> Option<u64> {
        self.cursor_positions.get(file)
    }

    pub fn save_cursor_pos(&mut self, file: &str, pos: u64) {
        self.cursor_positions.insert(file, pos);
    }

    pub fn remove_cursor_pos(&mut self, file: &str) -> Option<u64> {
        self.cursor_positions.remove(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_defaults() {
        let window = WindowSettings::default();
        assert!(window.remember_size);
        assert_eq!(window.size, WindowSize::new(700, 500));
        assert_eq!(window.splitter_pos(), 20);
        assert_eq!(window.tab_position(), 0);
    }

    #[test]
    fn test_text_defaults() {
        let text = TextSettings::default();
        assert!(text.remember_font);
        assert!(text.wrap_by_default);
        assert!(text.syntax_highlighting);
        assert!(text.append_empty_line);
        assert_eq!(text.v_line_distance(), -80);
        assert_eq!(text.text_tab(), "    ");
        assert_eq!(text.recent_files_number(), 10);
    }

    #[test]
    fn test_runtime_setters_clamp() {
        let mut config = Config::with_paths(None);
        config.window.set_splitter_pos(150);
        config.text.set_light_bg_color_value(3);
        config.text.set_text_tab_size(40);
        assert_eq!(config.window.splitter_pos(), 100);
        assert_eq!(config.text.light_bg_color_value(), 230);
        assert_eq!(config.text.text_tab_size(), 10);
    }

    #[test]
    fn test_no_location_reads_defaults() {
        let mut config = Config::with_paths(None);
        config.window.maximized = true;
        config.read_config();
        config.write_config();
        assert!(!config.window.maximized);
    }
}
