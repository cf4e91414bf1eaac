use thiserror::Error;

/// Invalid style or render parameter. Raised before any layout work happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("font size must be a positive number, got {0}")]
    InvalidFontSize(f32),

    #[error("line spacing must be a positive ratio, got {0}")]
    InvalidLineSpacing(f32),

    #[error("character spacing must be a positive ratio, got {0}")]
    InvalidCharSpacing(f32),

    #[error("max column chars must be at least 1")]
    InvalidMaxColumnChars,

    #[error("font family must name at least one font")]
    EmptyFontFamily,

    #[error("font weight must be a multiple of 100 between 100 and 900, got {0}")]
    InvalidFontWeight(u16),

    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),

    #[error("unknown direction {0:?}, expected rtl or ltr")]
    InvalidDirection(String),

    #[error("render scale must be a positive number, got {0}")]
    InvalidScale(f32),
}

pub(crate) fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
