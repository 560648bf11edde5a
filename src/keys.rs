//! Key-code table
//!
//! Numeric codes follow the DOM `keyCode` numbering, which is what the
//! original host table used. Comparisons elsewhere in the crate (notably the
//! accept range in `input`) rely on D0..=D9 and A..=Z being contiguous.

pub const BACKSPACE: u32 = 8;
pub const TAB: u32 = 9;
pub const ENTER: u32 = 13;
pub const SHIFT: u32 = 16;
pub const CTRL: u32 = 17;
pub const ALT: u32 = 18;
pub const PAUSE: u32 = 19;
pub const CAPS_LOCK: u32 = 20;
pub const ESC: u32 = 27;
pub const SPACE: u32 = 32;
pub const PAGE_UP: u32 = 33;
pub const PAGE_DOWN: u32 = 34;
pub const END: u32 = 35;
pub const HOME: u32 = 36;
pub const LEFT_ARROW: u32 = 37;
pub const UP_ARROW: u32 = 38;
pub const RIGHT_ARROW: u32 = 39;
pub const DOWN_ARROW: u32 = 40;
pub const INSERT: u32 = 45;
pub const DELETE: u32 = 46;

pub const D0: u32 = 48;
pub const D1: u32 = 49;
pub const D2: u32 = 50;
pub const D3: u32 = 51;
pub const D4: u32 = 52;
pub const D5: u32 = 53;
pub const D6: u32 = 54;
pub const D7: u32 = 55;
pub const D8: u32 = 56;
pub const D9: u32 = 57;

pub const A: u32 = 65;
pub const B: u32 = 66;
pub const C: u32 = 67;
pub const D: u32 = 68;
pub const E: u32 = 69;
pub const F: u32 = 70;
pub const G: u32 = 71;
pub const H: u32 = 72;
pub const I: u32 = 73;
pub const J: u32 = 74;
pub const K: u32 = 75;
pub const L: u32 = 76;
pub const M: u32 = 77;
pub const N: u32 = 78;
pub const O: u32 = 79;
pub const P: u32 = 80;
pub const Q: u32 = 81;
pub const R: u32 = 82;
pub const S: u32 = 83;
pub const T: u32 = 84;
pub const U: u32 = 85;
pub const V: u32 = 86;
pub const W: u32 = 87;
pub const X: u32 = 88;
pub const Y: u32 = 89;
pub const Z: u32 = 90;

pub const F1: u32 = 112;
pub const F2: u32 = 113;
pub const F3: u32 = 114;
pub const F4: u32 = 115;
pub const F5: u32 = 116;
pub const F6: u32 = 117;
pub const F7: u32 = 118;
pub const F8: u32 = 119;
pub const F9: u32 = 120;
pub const F10: u32 = 121;
pub const F11: u32 = 122;
pub const F12: u32 = 123;

pub const SEMICOLON: u32 = 186;
pub const EQUALS: u32 = 187;
pub const COMMA: u32 = 188;
pub const MINUS: u32 = 189;
pub const PERIOD: u32 = 190;
pub const SLASH: u32 = 191;
pub const BACKQUOTE: u32 = 192;
pub const OPEN_BRACKET: u32 = 219;
pub const BACKSLASH: u32 = 220;
pub const CLOSE_BRACKET: u32 = 221;
pub const QUOTE: u32 = 222;

/// Character shown for a key code, `String.fromCharCode` style: the code is
/// taken directly as a Unicode scalar value. Returns `None` for codes that
/// are not printable Basic Latin, which is every code outside 32..=126.
pub fn glyph(code: u32) -> Option<char> {
    match code {
        32..=126 => char::from_u32(code),
        _ => None,
    }
}

/// Key code for a single typed character, if the character appears in the
/// table. Letters map case-insensitively to the uppercase codes.
pub fn code_of_char(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(D0 + (ch as u32 - '0' as u32)),
        'A'..='Z' => Some(A + (ch as u32 - 'A' as u32)),
        'a'..='z' => Some(A + (ch as u32 - 'a' as u32)),
        ' ' => Some(SPACE),
        ';' => Some(SEMICOLON),
        '=' => Some(EQUALS),
        ',' => Some(COMMA),
        '-' => Some(MINUS),
        '.' => Some(PERIOD),
        '/' => Some(SLASH),
        '`' => Some(BACKQUOTE),
        '[' => Some(OPEN_BRACKET),
        '\\' => Some(BACKSLASH),
        ']' => Some(CLOSE_BRACKET),
        '\'' => Some(QUOTE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_and_letter_codes_match_the_dom_table() {
        assert_eq!(D0, 48);
        assert_eq!(D9, 57);
        assert_eq!(A, 65);
        assert_eq!(Z, 90);
        assert_eq!(code_of_char('7'), Some(55));
        assert_eq!(code_of_char('Q'), Some(81));
    }

    #[test]
    fn letters_map_case_insensitively() {
        assert_eq!(code_of_char('g'), code_of_char('G'));
        assert_eq!(code_of_char('a'), Some(A));
        assert_eq!(code_of_char('z'), Some(Z));
    }

    #[test]
    fn glyph_is_from_char_code_over_printable_ascii() {
        assert_eq!(glyph(A), Some('A'));
        assert_eq!(glyph(D0), Some('0'));
        assert_eq!(glyph(58), Some(':'));
        assert_eq!(glyph(64), Some('@'));
        assert_eq!(glyph(ENTER), None);
        assert_eq!(glyph(SEMICOLON), None);
    }

    #[test]
    fn punctuation_codes_sit_outside_the_letter_block() {
        for code in [
            SEMICOLON,
            EQUALS,
            COMMA,
            MINUS,
            PERIOD,
            SLASH,
            BACKQUOTE,
            OPEN_BRACKET,
            BACKSLASH,
            CLOSE_BRACKET,
            QUOTE,
        ] {
            assert!(code > Z);
        }
    }
}
