//! Text preparation for the built-in faces.
//!
//! The base-14 fonts cannot render the symbolic glyphs used across the app,
//! so a fixed table swaps them for bracketed ASCII tags before drawing.
//! Everything else is encoded as WinAnsi; characters the encoding cannot
//! carry degrade to '?' instead of failing the render.

/// Bracketed replacements for the known symbolic glyphs.
pub const SYMBOL_TAGS: [(&str, &str); 18] = [
    ("📅", "[Fecha]"),
    ("⭐", "[Estrella]"),
    ("✅", "[Check]"),
    ("❌", "[X]"),
    ("🔥", "[Fuego]"),
    ("💡", "[Idea]"),
    ("📝", "[Nota]"),
    ("🎯", "[Objetivo]"),
    ("🚀", "[Cohete]"),
    ("📊", "[Gráfico]"),
    ("👕", "[Camiseta]"),
    ("🏆", "[Trofeo]"),
    ("👤", "[Usuario]"),
    ("📞", "[Teléfono]"),
    ("🌍", "[Mundo]"),
    ("⚽", "[Balón]"),
    ("📏", "[Regla]"),
    ("🔷", "[Diamante]"),
];

/// Applies the symbol table; the result is what gets measured and drawn.
pub fn sanitize(text: &str) -> String {
    let mut out = text.to_string();
    for (glyph, tag) in SYMBOL_TAGS {
        if out.contains(glyph) {
            out = out.replace(glyph, tag);
        }
    }
    out
}

/// Encodes prepared text as WinAnsi bytes for a `Tj` string operand.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

fn winansi_byte(c: char) -> u8 {
    match c {
        '\u{0020}'..='\u{007e}' => c as u8,
        '\u{00a0}'..='\u{00ff}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyphs_become_tags() {
        assert_eq!(sanitize("📅 Edad: 21 años"), "[Fecha] Edad: 21 años");
        assert_eq!(sanitize("👤"), "[Usuario]");
        assert_eq!(sanitize("sin símbolos"), "sin símbolos");
    }

    #[test]
    fn accented_spanish_survives_encoding() {
        let bytes = encode_winansi("Teléfono: ");
        assert_eq!(bytes[3], 0xe9); // é in WinAnsi
        assert!(!bytes.contains(&b'?'));
    }

    #[test]
    fn verdict_dash_maps_into_winansi() {
        let bytes = encode_winansi("FIRMAR – Mejora plantilla");
        assert!(bytes.contains(&0x96));
    }

    #[test]
    fn unsupported_characters_degrade_to_question_marks() {
        assert_eq!(encode_winansi("丸"), vec![b'?']);
        // an unknown emoji degrades instead of panicking
        assert_eq!(encode_winansi("🤖"), vec![b'?']);
    }
}
