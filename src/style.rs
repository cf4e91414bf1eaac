use crate::error::{ConfigurationError, positive};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static HEX6_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap());
static HEX3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])$").unwrap());

/// Order in which columns advance across the page. Characters inside a
/// column always read top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Direction {
    /// Traditional Japanese/Chinese order: the first column is rightmost.
    #[default]
    RightToLeft,
    LeftToRight,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::RightToLeft => "rtl",
            Direction::LeftToRight => "ltr",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rtl" | "right-to-left" | "right_to_left" => Ok(Direction::RightToLeft),
            "ltr" | "left-to-right" | "left_to_right" => Ok(Direction::LeftToRight),
            _ => Err(ConfigurationError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 8-bit RGB text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
        if let Some(caps) = HEX6_RE.captures(trimmed) {
            if let (Some(r), Some(g), Some(b)) = (channel(&caps[1]), channel(&caps[2]), channel(&caps[3])) {
                return Ok(Rgb::new(r, g, b));
            }
        }
        if let Some(caps) = HEX3_RE.captures(trimmed) {
            // #abc expands to #aabbcc
            let doubled = |hex: &str| channel(&hex.repeat(2));
            if let (Some(r), Some(g), Some(b)) = (doubled(&caps[1]), doubled(&caps[2]), doubled(&caps[3])) {
                return Ok(Rgb::new(r, g, b));
            }
        }
        Err(ConfigurationError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// CSS font weight restricted to the nine named steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
    pub const BLACK: FontWeight = FontWeight(900);

    pub fn new(value: u16) -> Result<Self, ConfigurationError> {
        if (100..=900).contains(&value) && value % 100 == 0 {
            Ok(FontWeight(value))
        } else {
            Err(ConfigurationError::InvalidFontWeight(value))
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            100 => "Thin",
            200 => "ExtraLight",
            300 => "Light",
            400 => "Regular",
            500 => "Medium",
            600 => "SemiBold",
            700 => "Bold",
            800 => "ExtraBold",
            _ => "Black",
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = ConfigurationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        FontWeight::new(value)
    }
}

impl From<FontWeight> for u16 {
    fn from(value: FontWeight) -> Self {
        value.0
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typographic parameters for one layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f32,
    /// Column pitch as a multiple of `font_size`.
    pub line_spacing: f32,
    /// Character pitch inside a column as a multiple of `font_size`.
    pub char_spacing: f32,
    /// Soft wrap threshold. Closing punctuation may push a column past it.
    pub max_column_chars: usize,
    /// Comma separated fallback list. Only the first entry is laid out.
    pub font_family: String,
    pub font_weight: FontWeight,
    pub text_color: Rgb,
    /// Emit `font-variant-numeric: tabular-nums` on every run.
    pub monospace_numerals: bool,
    pub direction: Direction,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            line_spacing: 1.2,
            char_spacing: 1.0,
            max_column_chars: 20,
            font_family: "Noto Serif CJK JP, Century, serif".to_string(),
            font_weight: FontWeight::NORMAL,
            text_color: Rgb::BLACK,
            monospace_numerals: false,
            direction: Direction::RightToLeft,
        }
    }
}

impl TextStyle {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !positive(self.font_size) {
            return Err(ConfigurationError::InvalidFontSize(self.font_size));
        }
        if !positive(self.line_spacing) {
            return Err(ConfigurationError::InvalidLineSpacing(self.line_spacing));
        }
        if !positive(self.char_spacing) {
            return Err(ConfigurationError::InvalidCharSpacing(self.char_spacing));
        }
        if self.max_column_chars == 0 {
            return Err(ConfigurationError::InvalidMaxColumnChars);
        }
        if self.primary_family().is_empty() {
            return Err(ConfigurationError::EmptyFontFamily);
        }
        Ok(())
    }

    /// First entry of the family list, trimmed and unquoted.
    pub fn primary_family(&self) -> &str {
        self.font_family
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .trim()
    }

    /// Distance between neighbouring column centres.
    pub fn column_pitch(&self) -> f32 {
        self.font_size * self.line_spacing
    }

    /// Distance between neighbouring character centres in a column.
    pub fn char_pitch(&self) -> f32 {
        self.font_size * self.char_spacing
    }
}
