use serde::Serialize;
use vertical_text_renderer::{Config, parse_config, render_text, segment_into_columns};
use wasm_bindgen::prelude::*;

fn build_config(options_json: Option<String>) -> Result<Config, String> {
    match options_json {
        Some(raw) if !raw.trim().is_empty() => parse_config(&raw).map_err(|error| error.to_string()),
        _ => Ok(Config::default()),
    }
}

/// Render `text` as a vertical SVG document. `options_json` takes the same
/// camelCase keys as the CLI config file.
#[wasm_bindgen]
pub fn render_vertical_text_svg(text: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let config = build_config(options_json).map_err(|error| JsValue::from_str(&error))?;
    render_text(text, &config.style).map_err(|error| JsValue::from_str(&error.to_string()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ColumnPreview {
    columns: Vec<String>,
    max_column_chars: usize,
}

/// Column breaks as a JSON array of strings, for editors that preview the
/// wrapping without rendering.
#[wasm_bindgen]
pub fn preview_columns(text: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let config = build_config(options_json).map_err(|error| JsValue::from_str(&error))?;
    let max_column_chars = config.style.max_column_chars;
    let columns = segment_into_columns(text, max_column_chars)
        .map_err(|error| JsValue::from_str(&error.to_string()))?
        .iter()
        .map(|column| column.as_string())
        .collect();
    serde_json::to_string(&ColumnPreview {
        columns,
        max_column_chars,
    })
    .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::build_config;
    use vertical_text_renderer::render_text;

    #[test]
    fn renders_with_options() {
        let config = build_config(Some(
            r##"{"fontSize": 32, "textColor": "#0080ff", "direction": "ltr", "maxColumnChars": 5}"##.to_string(),
        ))
        .expect("options should parse");
        let svg = render_text("縦書きテスト\n複数行", &config.style).expect("vertical text should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("fill=\"#0080ff\""));
        assert!(svg.contains(">複</text>"));
    }

    #[test]
    fn empty_options_use_defaults() {
        assert!(build_config(None).is_ok());
        assert!(build_config(Some("  ".to_string())).is_ok());
        assert!(build_config(Some(r#"{"fontSize": -1}"#.to_string())).is_err());
    }
}
