use crate::error::ConfigurationError;
use crate::layout::{Layout, compute_layout, is_xml_char};
use crate::segment::Column;
use crate::style::TextStyle;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

const GENERIC_FAMILIES: [&str; 13] = [
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "emoji",
    "math",
    "fangsong",
];

/// Lay out `columns` with `style` and serialize the result as SVG.
pub fn render_svg(columns: &[Column], style: &TextStyle) -> Result<String, ConfigurationError> {
    style.validate()?;
    let layout = compute_layout(columns, style);
    Ok(render_layout_svg(&layout, style))
}

/// Serialize an already computed layout. One `<text>` is emitted per drawn
/// character, grouped by column.
pub fn render_layout_svg(layout: &Layout, style: &TextStyle) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"{SVG_NAMESPACE}\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"none\"/>");

    let run_attrs = run_attributes(style);
    for column in &layout.columns {
        svg.push_str(&format!("<g class=\"column\" data-index=\"{}\">", column.index));
        for glyph in &column.glyphs {
            let mut buf = [0u8; 4];
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\"{run_attrs}>{}</text>",
                column.x,
                glyph.y,
                escape_xml(glyph.ch.encode_utf8(&mut buf))
            ));
        }
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

fn run_attributes(style: &TextStyle) -> String {
    let family = escape_xml(&font_family_value(style));
    let size = style.font_size;
    let weight = style.font_weight;
    let mut attrs = format!(
        " fill=\"{}\" font-family=\"{family}\" font-size=\"{size}\" font-weight=\"{weight}\"",
        style.text_color.to_hex()
    );
    let mut css = format!("font-family: {family}; font-size: {size}px; font-weight: {weight};");
    if style.monospace_numerals {
        attrs.push_str(" font-variant-numeric=\"tabular-nums\"");
        css.push_str(" font-variant-numeric: tabular-nums;");
    }
    attrs.push_str(&format!(" style=\"{css}\""));
    attrs
}

/// CSS `font-family` value: the primary family, quoted when it is not a plain
/// identifier, followed by `serif` unless it is already generic.
pub fn font_family_value(style: &TextStyle) -> String {
    let primary = style.primary_family();
    if is_generic_family(primary) {
        return primary.to_ascii_lowercase();
    }
    // Quotes, backslashes and control characters cannot appear inside a CSS string.
    let name: String = primary
        .chars()
        .filter(|c| is_xml_char(*c) && !c.is_control() && !matches!(c, '"' | '\\'))
        .collect();
    if name.is_empty() {
        "serif".to_string()
    } else if name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        format!("{name}, serif")
    } else {
        format!("\"{name}\", serif")
    }
}

pub fn is_generic_family(name: &str) -> bool {
    GENERIC_FAMILIES.iter().any(|generic| generic.eq_ignore_ascii_case(name))
}

/// Escape markup characters. Characters XML cannot represent become U+FFFD.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            ch if is_xml_char(ch) => out.push(ch),
            _ => out.push(char::REPLACEMENT_CHARACTER),
        }
    }
    out
}
