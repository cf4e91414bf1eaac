//! Font weight inference from family names such as `"Arial Bold"` or
//! `"Noto Sans CJK JP Black"`.

use crate::style::FontWeight;

// Compound keywords come first so "extrabold" is not read as "bold".
const WEIGHT_KEYWORDS: [(&str, u16); 16] = [
    ("extralight", 200),
    ("ultralight", 200),
    ("extrabold", 800),
    ("ultrabold", 800),
    ("semibold", 600),
    ("demibold", 600),
    ("hairline", 100),
    ("regular", 400),
    ("medium", 500),
    ("normal", 400),
    ("black", 900),
    ("heavy", 900),
    ("light", 300),
    ("thin", 100),
    ("book", 400),
    ("bold", 700),
];

/// Weight implied by a keyword in `family`, or `None` when it names none.
///
/// Only the first entry of a comma separated list is inspected. Case,
/// spaces, hyphens and underscores are ignored, so `"Extra-Bold"` matches.
pub fn detect_font_weight(family: &str) -> Option<FontWeight> {
    let primary = family.split(',').next().unwrap_or_default();
    let normalized: String = primary
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect();

    WEIGHT_KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .and_then(|(_, weight)| FontWeight::new(*weight).ok())
}
