use crate::error::{ConfigurationError, positive};
use crate::style::{FontWeight, TextStyle};
use crate::weight::detect_font_weight;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raster output settings, only used by the PNG sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub scale: f32,
    /// Hex colour painted under the text. Transparent when unset.
    pub background: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !positive(self.scale) {
            return Err(ConfigurationError::InvalidScale(self.scale));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub style: TextStyle,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    scale: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    font_size: Option<f32>,
    line_spacing: Option<f32>,
    char_spacing: Option<f32>,
    max_column_chars: Option<usize>,
    font_family: Option<String>,
    font_weight: Option<u16>,
    text_color: Option<String>,
    monospace_numerals: Option<bool>,
    direction: Option<String>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse a camelCase JSON (or JSON5) config and merge it over the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents)
            .map_err(|_| anyhow::anyhow!("invalid config: {json_err}"))?,
    };

    let mut config = Config::default();
    let style = &mut config.style;

    if let Some(v) = parsed.font_size {
        style.font_size = v;
    }
    if let Some(v) = parsed.line_spacing {
        style.line_spacing = v;
    }
    if let Some(v) = parsed.char_spacing {
        style.char_spacing = v;
    }
    if let Some(v) = parsed.max_column_chars {
        style.max_column_chars = v;
    }
    if let Some(v) = parsed.font_family {
        style.font_family = v;
    }
    match parsed.font_weight {
        Some(v) => style.font_weight = FontWeight::new(v)?,
        None => {
            if let Some(weight) = detect_font_weight(&style.font_family) {
                style.font_weight = weight;
            }
        }
    }
    if let Some(v) = parsed.text_color {
        style.text_color = v.parse()?;
    }
    if let Some(v) = parsed.monospace_numerals {
        style.monospace_numerals = v;
    }
    if let Some(v) = parsed.direction {
        style.direction = v.parse()?;
    }
    if let Some(render) = parsed.render {
        if let Some(v) = render.scale {
            config.render.scale = v;
        }
        if render.background.is_some() {
            config.render.background = render.background;
        }
    }

    config.style.validate()?;
    config.render.validate()?;
    Ok(config)
}
