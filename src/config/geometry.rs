//! Window geometry values.

use serde::{Deserialize, Serialize};
use std::fmt;
use toml::Value;

/// A window size in pixels, stored as a `[width, height]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const DEFAULT: WindowSize = WindowSize {
        width: 700,
        height: 500,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A size is usable unless both dimensions are zero. Negative sizes never
    /// decode in the first place.
    pub fn is_valid(&self) -> bool {
        self.width > 0 || self.height > 0
    }

    /// Decodes a stored size, falling back to [`WindowSize::DEFAULT`] when the
    /// value is malformed or not a usable size.
    pub fn from_value_or_default(value: Option<&Value>) -> Self {
        value
            .and_then(|v| v.clone().try_into::<WindowSize>().ok())
            .filter(WindowSize::is_valid)
            .unwrap_or(Self::DEFAULT)
    }

    pub fn to_value(self) -> Value {
        Value::Array(vec![
            Value::Integer(i64::from(self.width)),
            Value::Integer(i64::from(self.height)),
        ])
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<[u32; 2]> for WindowSize {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<WindowSize> for [u32; 2] {
    fn from(size: WindowSize) -> Self {
        [size.width, size.height]
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_array() {
        let value = Value::Array(vec![Value::Integer(800), Value::Integer(600)]);
        assert_eq!(
            WindowSize::from_value_or_default(Some(&value)),
            WindowSize::new(800, 600)
        );
    }

    #[test]
    fn test_one_zero_dimension_is_kept() {
        let value = Value::Array(vec![Value::Integer(0), Value::Integer(400)]);
        assert_eq!(
            WindowSize::from_value_or_default(Some(&value)),
            WindowSize::new(0, 400)
        );
    }

    #[test]
    fn test_invalid_sizes_fall_back() {
        let negative = Value::Array(vec![Value::Integer(-1), Value::Integer(600)]);
        let zero = Value::Array(vec![Value::Integer(0), Value::Integer(0)]);
        let short = Value::Array(vec![Value::Integer(800)]);
        let text = Value::String("800x600".into());

        for value in [negative, zero, short, text] {
            assert_eq!(
                WindowSize::from_value_or_default(Some(&value)),
                WindowSize::DEFAULT
            );
        }
        assert_eq!(WindowSize::from_value_or_default(None), WindowSize::DEFAULT);
    }
}
