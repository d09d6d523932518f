//! Valid ranges for the numeric preferences.
//!
//! Each function maps any candidate value into its field's domain. The same
//! function is applied to values read from disk and to values set at runtime.

pub const DEFAULT_SPLITTER_POS: u8 = 20;
pub const DEFAULT_TAB_POSITION: u8 = 0;
pub const DEFAULT_V_LINE_DISTANCE: i32 = -80;
pub const DEFAULT_MAX_SH_SIZE: u8 = 2;
pub const DEFAULT_LIGHT_BG_COLOR_VALUE: u8 = 255;
pub const DEFAULT_DARK_BG_COLOR_VALUE: u8 = 15;
pub const DEFAULT_RECENT_FILES_NUMBER: usize = 10;
pub const DEFAULT_AUTO_SAVE_INTERVAL: u8 = 1;
pub const DEFAULT_TEXT_TAB_SIZE: usize = 4;

/// The last-session file list never holds more than this many paths.
pub const MAX_LAST_FILES: usize = 20;

/// Splitter position as a percentage, [0, 100].
pub fn splitter_pos(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Tab bar position (north, south, west, east), [0, 3].
pub fn tab_position(value: i64) -> u8 {
    value.clamp(0, 3) as u8
}

/// Vertical guide line distance.
///
/// The sign selects whether the guide is shown (negative means remembered but
/// hidden), the magnitude is a column in [10, 1000). Zero carries no sign and
/// falls back to the default.
pub fn v_line_distance(value: i64) -> i32 {
    if value == 0 {
        return DEFAULT_V_LINE_DISTANCE;
    }
    let magnitude = value.unsigned_abs().clamp(10, 999) as i32;
    if value < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Largest file (MiB) that still gets syntax highlighting, [1, 10].
pub fn max_sh_size(value: i64) -> u8 {
    value.clamp(1, 10) as u8
}

/// Light background intensity, [230, 255]; never darker than #e6e6e6.
pub fn light_bg_color_value(value: i64) -> u8 {
    value.clamp(230, 255) as u8
}

/// Dark background intensity, [0, 50]; never lighter than #323232.
pub fn dark_bg_color_value(value: i64) -> u8 {
    value.clamp(0, 50) as u8
}

/// Capacity of the recent-files list, [1, 20].
pub fn recent_files_number(value: i64) -> usize {
    value.clamp(1, 20) as usize
}

/// Auto-save interval in minutes, [1, 60].
pub fn auto_save_interval(value: i64) -> u8 {
    value.clamp(1, 60) as u8
}

/// Width of a text tab in spaces, [2, 10].
pub fn text_tab_size(value: i64) -> usize {
    value.clamp(2, 10) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splitter_pos_clamps_to_nearest_bound() {
        assert_eq!(splitter_pos(-5), 0);
        assert_eq!(splitter_pos(150), 100);
        assert_eq!(splitter_pos(37), 37);
    }

    #[test]
    fn test_v_line_distance_keeps_sign() {
        assert_eq!(v_line_distance(5), 10);
        assert_eq!(v_line_distance(-5), -10);
        assert_eq!(v_line_distance(1000), 999);
        assert_eq!(v_line_distance(-4000), -999);
        assert_eq!(v_line_distance(120), 120);
        assert_eq!(v_line_distance(0), DEFAULT_V_LINE_DISTANCE);
    }

    #[test]
    fn test_background_ranges_are_disjoint() {
        assert_eq!(light_bg_color_value(0), 230);
        assert_eq!(dark_bg_color_value(255), 50);
        assert!(dark_bg_color_value(i64::MAX) < light_bg_color_value(i64::MIN));
    }

    #[test]
    fn test_small_ranges() {
        assert_eq!(tab_position(7), 3);
        assert_eq!(max_sh_size(0), 1);
        assert_eq!(recent_files_number(50), 20);
        assert_eq!(auto_save_interval(-1), 1);
        assert_eq!(text_tab_size(1), 2);
        assert_eq!(text_tab_size(11), 10);
    }
}
