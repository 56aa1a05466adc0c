//! Console style and geometry record.
//!
//! Pure data, shared by reference with the host's renderer. The engine
//! treats a `Style` as immutable: it is passed at construction and replaced
//! wholesale (e.g. on resize or theme switch), never mutated in place.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ConsoleError, Result};

/// Visual style and geometry of the console panel.
///
/// Every field has a default, so a style file only needs to name the fields
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Font size in pixels; also the height of one output line.
    pub font_size: u16,
    /// Fraction of the window height covered by the open panel.
    pub height_fraction: f32,
    /// Inner margin between the panel border and its background, in pixels.
    pub margin: u32,
    /// Character drawn before the input line.
    pub prompt_char: char,
    /// Character drawn at the cursor position.
    pub cursor_char: char,
    /// Panel border color.
    pub border_color: Color,
    /// Panel background color.
    pub background_color: Color,
    /// Text color.
    pub font_color: Color,
    /// Pixels the panel slides per tick while opening or closing.
    pub slide_speed: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_size: 16,
            height_fraction: 0.5,
            margin: 4,
            prompt_char: '>',
            cursor_char: '_',
            border_color: Color::BLACK,
            background_color: Color::BLUE,
            font_color: Color::WHITE,
            slide_speed: 5.0,
        }
    }
}

impl Style {
    /// Parse a style from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let style: Style = toml::from_str(text)?;
        style.validate()?;
        Ok(style)
    }

    /// Load a style from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.font_size == 0 {
            return Err(ConsoleError::Config("font_size must be positive".into()));
        }
        if !(self.height_fraction > 0.0 && self.height_fraction <= 1.0) {
            return Err(ConsoleError::Config(
                "height_fraction must be in (0, 1]".into(),
            ));
        }
        if self.slide_speed <= 0.0 {
            return Err(ConsoleError::Config("slide_speed must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let s = Style::default();
        assert_eq!(s.font_size, 16);
        assert_eq!(s.height_fraction, 0.5);
        assert_eq!(s.margin, 4);
        assert_eq!(s.prompt_char, '>');
        assert_eq!(s.cursor_char, '_');
        assert_eq!(s.border_color, Color::BLACK);
        assert_eq!(s.background_color, Color::BLUE);
        assert_eq!(s.font_color, Color::WHITE);
        assert_eq!(s.slide_speed, 5.0);
    }

    #[test]
    fn parse_empty_toml_gives_defaults() {
        let s = Style::from_toml_str("").unwrap();
        assert_eq!(s, Style::default());
    }

    #[test]
    fn parse_partial_toml_overrides() {
        let s = Style::from_toml_str(
            r#"
            font_size = 12
            prompt_char = "$"
            background_color = { r = 20, g = 20, b = 35 }
            "#,
        )
        .unwrap();
        assert_eq!(s.font_size, 12);
        assert_eq!(s.prompt_char, '$');
        assert_eq!(s.background_color, Color::rgb(20, 20, 35));
        // Untouched fields keep their defaults.
        assert_eq!(s.margin, 4);
        assert_eq!(s.cursor_char, '_');
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        let e = Style::from_toml_str("font_size = [[[").unwrap_err();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn rejects_zero_font_size() {
        let e = Style::from_toml_str("font_size = 0").unwrap_err();
        assert!(format!("{e}").contains("font_size"));
    }

    #[test]
    fn rejects_out_of_range_height_fraction() {
        assert!(Style::from_toml_str("height_fraction = 0.0").is_err());
        assert!(Style::from_toml_str("height_fraction = 1.5").is_err());
        assert!(Style::from_toml_str("height_fraction = 1.0").is_ok());
    }

    #[test]
    fn rejects_nonpositive_slide_speed() {
        assert!(Style::from_toml_str("slide_speed = 0.0").is_err());
        assert!(Style::from_toml_str("slide_speed = -2.0").is_err());
    }

    #[test]
    fn toml_roundtrip() {
        let s = Style {
            font_size: 14,
            prompt_char: '%',
            ..Style::default()
        };
        let text = toml::to_string(&s).unwrap();
        let back = Style::from_toml_str(&text).unwrap();
        assert_eq!(back, s);
    }
}
