use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::category::category_code;
use crate::errors::UnassignedNameWarning;

/// Name shown for code points the Unicode character database has no name for. Besides
/// unassigned code points this covers controls, private use characters and noncharacters.
pub const UNASSIGNED_NAME: &str = "<unassigned>";

/// Tangut ideographs are named by rule NR2 (`TANGUT IDEOGRAPH-` plus the code point), which the
/// name table doesn't derive.
const TANGUT_IDEOGRAPHS: [RangeInclusive<u32>; 2] = [0x17000..=0x187f7, 0x18d00..=0x18d08];

/// Everything `unidump` reports about a single Unicode scalar value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointRecord {
    pub scalar_value: char,
    /// The character itself, or a visible placeholder for control characters.
    pub literal_rendering: String,
    /// `\U` followed by eight lowercase hex digits.
    pub scalar_escape: String,
    pub utf8_bytes: Vec<u8>,
    /// Two-letter General Category code.
    pub category: &'static str,
    /// Unicode name, or `UNASSIGNED_NAME`.
    pub name: String,
    pub warning: Option<UnassignedNameWarning>,
}

impl CodePointRecord {
    pub fn new(character: char) -> Self {
        let category = category_code(character);
        let (name, warning) = match unicode_names2::name(character) {
            Some(n) => (n.to_string(), None),
            None => match derived_name(character, category) {
                Some(n) => (n, None),
                None => (UNASSIGNED_NAME.to_string(), Some(UnassignedNameWarning{scalar: character})),
            },
        };
        return Self{
            scalar_value: character,
            literal_rendering: literal_rendering(character, category),
            scalar_escape: scalar_escape(character),
            utf8_bytes: utf8_bytes(character),
            category,
            name,
            warning,
        }
    }

    /// The UTF-8 bytes as `\xHH` pairs, e.g. `\xe2\x94\x80`.
    pub fn utf8_escape(&self) -> String {
        return hex_escape(&self.utf8_bytes);
    }
}

pub fn scalar_escape(character: char) -> String {
    return format!("\\U{:08x}", character as u32);
}

pub fn utf8_bytes(character: char) -> Vec<u8> {
    let mut buf = [0u8; 4];
    return character.encode_utf8(&mut buf).as_bytes().to_vec();
}

/// Renders every byte as `\x` plus two lowercase hex digits.
pub fn hex_escape(bytes: &[u8]) -> String {
    return bytes.iter().map(|b| format!("\\x{b:02x}")).join("");
}

fn derived_name(character: char, category: &str) -> Option<String> {
    let value = character as u32;
    if category == "Lo" && TANGUT_IDEOGRAPHS.iter().any(|r| r.contains(&value)) {
        return Some(format!("TANGUT IDEOGRAPH-{value:X}"));
    }
    return None;
}

fn literal_rendering(character: char, category: &str) -> String {
    if category != "Cc" {
        return character.to_string();
    }
    // C0 controls and DEL have dedicated glyphs in the Control Pictures block; C1 controls don't.
    let placeholder = match character as u32 {
        c @ 0x00..=0x1f => char::from_u32(0x2400 + c),
        0x7f => Some('\u{2421}'),
        _ => None,
    };
    return placeholder.unwrap_or(char::REPLACEMENT_CHARACTER).to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_box_drawing() {
        let record = CodePointRecord::new('\u{2500}');
        assert_eq!(record.literal_rendering, "\u{2500}");
        assert_eq!(record.scalar_escape, "\\U00002500");
        assert_eq!(record.utf8_bytes, vec![0xe2, 0x94, 0x80]);
        assert_eq!(record.utf8_escape(), "\\xe2\\x94\\x80");
        assert_eq!(record.category, "So");
        assert_eq!(record.name, "BOX DRAWINGS LIGHT HORIZONTAL");
        assert_eq!(record.warning, None);
    }

    #[test]
    fn test_utf8_lengths_at_boundaries() {
        let cases = [
            (0x0, 1), (0x7f, 1),
            (0x80, 2), (0x7ff, 2),
            (0x800, 3), (0xd7ff, 3), (0xe000, 3), (0xffff, 3),
            (0x10000, 4), (0x10ffff, 4),
        ];
        for (value, expected_len) in cases {
            let character = char::from_u32(value).unwrap();
            assert_eq!(utf8_bytes(character).len(), expected_len, "U+{value:04X}");
        }
    }

    #[test]
    fn test_utf8_round_trip() {
        let scalars = (0..=0x10ffffu32).step_by(97).filter_map(char::from_u32);
        for character in scalars.chain(['\u{0}', '\u{d7ff}', '\u{e000}', '\u{10ffff}']) {
            let bytes = utf8_bytes(character);
            let decoded = std::str::from_utf8(&bytes).unwrap();
            let mut chars = decoded.chars();
            assert_eq!(chars.next(), Some(character));
            assert_eq!(chars.next(), None);
        }
    }

    #[test]
    fn test_unnamed_code_point_gets_sentinel() {
        let record = CodePointRecord::new('\u{0378}');
        assert_eq!(record.name, UNASSIGNED_NAME);
        assert_eq!(record.category, "Cn");
        assert_eq!(record.warning, Some(UnassignedNameWarning{scalar: '\u{0378}'}));
    }

    #[test]
    fn test_tangut_ideograph_names() {
        for (character, expected) in [
            ('\u{17000}', "TANGUT IDEOGRAPH-17000"),
            ('\u{187f7}', "TANGUT IDEOGRAPH-187F7"),
            ('\u{18d08}', "TANGUT IDEOGRAPH-18D08"),
        ] {
            let record = CodePointRecord::new(character);
            assert_eq!(record.category, "Lo");
            assert_eq!(record.name, expected);
            assert_eq!(record.warning, None);
        }
        // unassigned gap after the Tangut Ideograph Supplement
        let gap = CodePointRecord::new('\u{18d09}');
        assert_eq!(gap.name, UNASSIGNED_NAME);
        assert!(gap.warning.is_some());
    }

    #[test]
    fn test_control_placeholders() {
        assert_eq!(CodePointRecord::new('\u{0}').literal_rendering, "\u{2400}");
        assert_eq!(CodePointRecord::new('\n').literal_rendering, "\u{240a}");
        assert_eq!(CodePointRecord::new('\u{7f}').literal_rendering, "\u{2421}");
        assert_eq!(CodePointRecord::new('\u{85}').literal_rendering, "\u{fffd}");
        assert_eq!(CodePointRecord::new(' ').literal_rendering, " ");
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(hex_escape(&[]), "");
        assert_eq!(hex_escape(&[0x0a, 0xff]), "\\x0a\\xff");
    }
}
