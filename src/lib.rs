#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod segment;
pub mod sink;
pub mod style;
pub mod weight;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RenderConfig, load_config, parse_config};
pub use error::ConfigurationError;
pub use layout::{Layout, compute_layout};
pub use render::{render_layout_svg, render_svg};
pub use segment::{Column, NO_BREAK_AFTER, segment_into_columns};
pub use sink::{DocumentSink, SinkError};
pub use style::{Direction, FontWeight, Rgb, TextStyle};
pub use weight::detect_font_weight;

/// Validate `style`, break `text` into columns and render them as SVG.
pub fn render_text(text: &str, style: &TextStyle) -> Result<String, ConfigurationError> {
    style.validate()?;
    let columns = segment_into_columns(text, style.max_column_chars)?;
    render_svg(&columns, style)
}
