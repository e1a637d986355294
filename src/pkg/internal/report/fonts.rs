//! Metrics for the built-in Helvetica faces.
//!
//! The report uses the base-14 fonts, so no font program is embedded and the
//! layout code needs its own advance widths to align, center and wrap text.
//! Widths are the standard Adobe AFM values in 1/1000 of the font size,
//! covering printable ASCII; accented Latin glyphs use the lowercase average.

const PT_PER_MM: f32 = 72.0 / 25.4;
const DEFAULT_WIDTH: u16 = 556;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

impl FontStyle {
    /// Name under which the face is registered in the page resources.
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
            FontStyle::Oblique => "F3",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
            FontStyle::Oblique => "Helvetica-Oblique",
        }
    }
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278,
    584, 584, 584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, 722, 278,
    500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556,
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333,
    278, 278, 556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333,
    584, 584, 584, 611, 975, 722, 722, 722, 722, 667, 611, 778, 722, 278,
    556, 722, 611, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 333, 278, 333, 584, 556, 333, 556, 611, 556, 611, 556,
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance width of one glyph in 1/1000 of the font size. The oblique face
/// shares the regular widths.
pub fn char_width(style: FontStyle, c: char) -> u16 {
    let code = c as u32;
    if !(0x20..=0x7e).contains(&code) {
        return DEFAULT_WIDTH;
    }
    let index = (code - 0x20) as usize;
    match style {
        FontStyle::Bold => HELVETICA_BOLD[index],
        FontStyle::Regular | FontStyle::Oblique => HELVETICA[index],
    }
}

pub fn text_width_pt(text: &str, style: FontStyle, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(style, c) as u32).sum();
    units as f32 * size / 1000.0
}

pub fn text_width_mm(text: &str, style: FontStyle, size: f32) -> f32 {
    text_width_pt(text, style, size) / PT_PER_MM
}

/// Greedy word-wrap against a maximum line width in millimetres. Words wider
/// than a whole line are hard-broken.
pub fn wrap(text: &str, style: FontStyle, size: f32, max_mm: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        for piece in split_overlong(word, style, size, max_mm) {
            let candidate = if current.is_empty() {
                piece.clone()
            } else {
                format!("{current} {piece}")
            };
            if current.is_empty() || text_width_mm(&candidate, style, size) <= max_mm {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_overlong(word: &str, style: FontStyle, size: f32, max_mm: f32) -> Vec<String> {
    if text_width_mm(word, style, size) <= max_mm {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if text_width_mm(&chunk, style, size) > max_mm && chunk.chars().count() > 1 {
            let overflow = chunk.pop().unwrap();
            pieces.push(std::mem::take(&mut chunk));
            chunk.push(overflow);
        }
    }
    if !chunk.is_empty() {
        pieces.push(chunk);
    }
    pieces
}
