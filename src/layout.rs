use crate::segment::Column;
use crate::style::{Direction, TextStyle};

/// Blank border around the text on every side, in pixels.
pub const MARGIN: f32 = 20.0;

/// Characters allowed by the XML 1.0 `Char` production.
pub fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Whether `ch` gets a glyph. Blanks, control characters and characters XML
/// cannot carry keep their slot but are not drawn.
pub fn is_drawable(ch: char) -> bool {
    !ch.is_whitespace() && !ch.is_control() && is_xml_char(ch)
}

/// A drawn character and the centre of the slot it sits in.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    /// Slot index inside the column, counting whitespace slots.
    pub slot: usize,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Position of the column in the segmented input.
    pub index: usize,
    /// Horizontal centre of the column.
    pub x: f32,
    pub glyphs: Vec<PlacedGlyph>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub columns: Vec<ColumnLayout>,
}

/// Place every column and character on the canvas.
///
/// The canvas is sized for at least one column of one character so an empty
/// input still produces a usable document.
pub fn compute_layout(columns: &[Column], style: &TextStyle) -> Layout {
    let column_pitch = style.column_pitch();
    let char_pitch = style.char_pitch();
    let column_slots = columns.len().max(1);
    let max_column_len = columns.iter().map(Column::len).max().unwrap_or(1).max(1);

    let width = column_slots as f32 * column_pitch + MARGIN * 2.0;
    let height = max_column_len as f32 * char_pitch + MARGIN * 2.0;

    let columns = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let offset = (index as f32 + 0.5) * column_pitch;
            let x = match style.direction {
                Direction::RightToLeft => width - MARGIN - offset,
                Direction::LeftToRight => MARGIN + offset,
            };
            let glyphs = column
                .chars()
                .iter()
                .enumerate()
                .filter(|(_, ch)| is_drawable(**ch))
                .map(|(slot, ch)| PlacedGlyph {
                    ch: *ch,
                    slot,
                    y: MARGIN + (slot as f32 + 0.5) * char_pitch,
                })
                .collect();
            ColumnLayout { index, x, glyphs }
        })
        .collect();

    Layout { width, height, columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(direction: Direction) -> TextStyle {
        TextStyle {
            font_size: 20.0,
            line_spacing: 1.5,
            char_spacing: 1.0,
            direction,
            ..TextStyle::default()
        }
    }

    #[test]
    fn canvas_grows_with_columns_and_length() {
        let columns = vec![Column::from("あいう"), Column::from("え")];
        let layout = compute_layout(&columns, &style(Direction::RightToLeft));
        assert_eq!(layout.width, 2.0 * 30.0 + 40.0);
        assert_eq!(layout.height, 3.0 * 20.0 + 40.0);
    }

    #[test]
    fn empty_input_uses_single_slot_canvas() {
        let layout = compute_layout(&[], &style(Direction::RightToLeft));
        assert_eq!(layout.width, 30.0 + 40.0);
        assert_eq!(layout.height, 20.0 + 40.0);
        assert!(layout.columns.is_empty());
    }

    #[test]
    fn right_to_left_puts_first_column_rightmost() {
        let columns = vec![Column::from("A"), Column::from("B")];
        let layout = compute_layout(&columns, &style(Direction::RightToLeft));
        assert!(layout.columns[0].x > layout.columns[1].x);
        assert_eq!(layout.columns[0].x, layout.width - MARGIN - 15.0);
    }

    #[test]
    fn left_to_right_puts_first_column_leftmost() {
        let columns = vec![Column::from("A"), Column::from("B")];
        let layout = compute_layout(&columns, &style(Direction::LeftToRight));
        assert!(layout.columns[0].x < layout.columns[1].x);
        assert_eq!(layout.columns[0].x, MARGIN + 15.0);
    }

    #[test]
    fn direction_mirrors_columns() {
        let columns = vec![Column::from("AB"), Column::from("C"), Column::from("DE")];
        let rtl = compute_layout(&columns, &style(Direction::RightToLeft));
        let ltr = compute_layout(&columns, &style(Direction::LeftToRight));
        for (a, b) in rtl.columns.iter().zip(&ltr.columns) {
            assert!((a.x + b.x - rtl.width).abs() < 1e-3);
            assert_eq!(a.glyphs, b.glyphs);
        }
    }

    #[test]
    fn whitespace_keeps_its_slot_without_a_glyph() {
        let columns = vec![Column::from("a\u{3000}b")];
        let layout = compute_layout(&columns, &style(Direction::LeftToRight));
        let glyphs = &layout.columns[0].glyphs;
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[1].ch, 'b');
        assert_eq!(glyphs[1].slot, 2);
        assert_eq!(glyphs[1].y - glyphs[0].y, 40.0);
    }

    #[test]
    fn non_xml_characters_keep_their_slot_without_a_glyph() {
        let columns = vec![Column::from("a\u{1}\u{FFFE}b\u{FFFF}\u{85}\u{7F}")];
        let layout = compute_layout(&columns, &style(Direction::LeftToRight));
        let glyphs = &layout.columns[0].glyphs;
        assert_eq!(glyphs.iter().map(|g| g.ch).collect::<String>(), "ab");
        assert_eq!(glyphs[1].slot, 3);
    }

    #[test]
    fn xml_char_ranges() {
        for ch in ['\t', '\n', '\r', ' ', '\u{D7FF}', '\u{E000}', '\u{FFFD}', '\u{10000}', '\u{10FFFF}'] {
            assert!(is_xml_char(ch), "{ch:?}");
        }
        for ch in ['\u{0}', '\u{1}', '\u{8}', '\u{B}', '\u{1F}', '\u{FFFE}', '\u{FFFF}'] {
            assert!(!is_xml_char(ch), "{ch:?}");
        }
    }
}
