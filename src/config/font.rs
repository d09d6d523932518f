//! Editor font descriptor.
//!
//! Fonts are stored as a comma-separated descriptor:
//!
//! ```text
//! family,pointSize,pixelSize,styleHint,weight,italic,underline,strikeOut,fixedPitch,rawMode
//! ```
//!
//! Only the family and point size are required when parsing; the remaining
//! fields default to a regular, upright font.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_FONT: &str = "Monospace,9,-1,5,50,0,0,0,0,0";

const NORMAL_WEIGHT: u16 = 50;
const STYLE_HINT_ANY: u8 = 5;

/// Reasons a font descriptor is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontParseError {
    #[error("expected 2 to 10 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("font family is empty")]
    EmptyFamily,
    #[error("invalid {field}: {value:?}")]
    Field { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    /// Point size; `-1.0` when the size is given in pixels.
    pub point_size: f32,
    /// Pixel size; `-1` when the size is given in points.
    pub pixel_size: i32,
    pub style_hint: u8,
    pub weight: u16,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,
    pub fixed_pitch: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, point_size: f32) -> Self {
        Self {
            family: family.into(),
            point_size,
            pixel_size: -1,
            style_hint: STYLE_HINT_ANY,
            weight: NORMAL_WEIGHT,
            italic: false,
            underline: false,
            strike_out: false,
            fixed_pitch: false,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Monospace", 9.0)
    }
}

fn parse_field<T: FromStr>(
    field: &'static str,
    raw: Option<&str>,
    default: T,
) -> Result<T, FontParseError> {
    match raw {
        None => Ok(default),
        Some(s) => s.trim().parse().map_err(|_| FontParseError::Field {
            field,
            value: s.to_string(),
        }),
    }
}

fn parse_flag(field: &'static str, raw: Option<&str>) -> Result<bool, FontParseError> {
    parse_field::<u8>(field, raw, 0).map(|v| v != 0)
}

impl FromStr for FontSpec {
    type Err = FontParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        if !(2..=10).contains(&fields.len()) {
            return Err(FontParseError::FieldCount(fields.len()));
        }

        let family = fields[0].trim();
        if family.is_empty() {
            return Err(FontParseError::EmptyFamily);
        }

        let field = |i: usize| fields.get(i).copied();
        let point_size: f32 = parse_field("point size", field(1), -1.0)?;
        let pixel_size: i32 = parse_field("pixel size", field(2), -1)?;
        if point_size <= 0.0 && pixel_size <= 0 {
            return Err(FontParseError::Field {
                field: "point size",
                value: fields[1].to_string(),
            });
        }

        Ok(Self {
            family: family.to_string(),
            point_size,
            pixel_size,
            style_hint: parse_field("style hint", field(3), STYLE_HINT_ANY)?,
            weight: parse_field("weight", field(4), NORMAL_WEIGHT)?,
            italic: parse_flag("italic", field(5))?,
            underline: parse_flag("underline", field(6))?,
            strike_out: parse_flag("strike out", field(7))?,
            fixed_pitch: parse_flag("fixed pitch", field(8))?,
        })
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},0",
            self.family,
            self.point_size,
            self.pixel_size,
            self.style_hint,
            self.weight,
            u8::from(self.italic),
            u8::from(self.underline),
            u8::from(self.strike_out),
            u8::from(self.fixed_pitch),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_descriptor_round_trips() {
        let font: FontSpec = DEFAULT_FONT.parse().unwrap();
        assert_eq!(font, FontSpec::default());
        assert_eq!(font.to_string(), DEFAULT_FONT);
    }

    #[test]
    fn test_short_descriptor() {
        let font: FontSpec = "DejaVu Sans Mono,11.5".parse().unwrap();
        assert_eq!(font.family, "DejaVu Sans Mono");
        assert_eq!(font.point_size, 11.5);
        assert_eq!(font.weight, 50);
        assert!(!font.italic);
    }

    #[test]
    fn test_bold_italic() {
        let font: FontSpec = "Hack,10,-1,5,75,1,0,0,1,0".parse().unwrap();
        assert_eq!(font.weight, 75);
        assert!(font.italic);
        assert!(font.fixed_pitch);
    }

    #[test]
    fn test_rejects_bad_descriptors() {
        assert_eq!(
            "Monospace".parse::<FontSpec>(),
            Err(FontParseError::FieldCount(1))
        );
        assert_eq!(",9".parse::<FontSpec>(), Err(FontParseError::EmptyFamily));
        assert!("Monospace,big".parse::<FontSpec>().is_err());
        assert!("Monospace,0".parse::<FontSpec>().is_err());
    }
}
