//! The text entity and its capability traits
//!
//! Capabilities the host used to attach by string ("2D, DOM, Text,
//! Keyboard") are declared traits here, and the typed-text buffer is a real
//! field instead of an ad-hoc property.

use crate::{input, keys};

/// Placement on the stage, in logical pixels.
pub trait Position2d {
    fn position(&self) -> (f32, f32);
    fn set_position(&mut self, x: f32, y: f32);
}

/// On-screen text.
pub trait TextDisplay {
    /// The string currently shown for this entity.
    fn text(&self) -> &str;
    /// Replace the shown string.
    fn set_text(&mut self, text: &str);
}

/// Key-down delivery.
pub trait KeyInput {
    /// Handle a key-down. Returns true if the display changed.
    fn on_key_down(&mut self, code: u32) -> bool;
}

/// One positioned text box that accumulates accepted keystrokes.
pub struct TextEntity {
    x: f32,
    y: f32,
    /// Characters typed so far. Grows monotonically for the session.
    buffer: String,
    /// What the renderer draws. Updated from `buffer` on every accept.
    shown: String,
}

impl TextEntity {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            buffer: String::new(),
            shown: String::new(),
        }
    }

    /// The accumulated keystrokes.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl Position2d for TextEntity {
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

impl TextDisplay for TextEntity {
    fn text(&self) -> &str {
        &self.shown
    }

    fn set_text(&mut self, text: &str) {
        self.shown.clear();
        self.shown.push_str(text);
    }
}

impl KeyInput for TextEntity {
    fn on_key_down(&mut self, code: u32) -> bool {
        if !input::accepts(code) {
            return false;
        }
        // Every accepted code is printable ASCII, so glyph() cannot miss.
        if let Some(ch) = keys::glyph(code) {
            self.buffer.push(ch);
            let text = self.buffer.clone();
            self.set_text(&text);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_at_the_given_position() {
        let entity = TextEntity::new(100.0, 100.0);
        assert_eq!(entity.position(), (100.0, 100.0));
        assert_eq!(entity.buffer(), "");
        assert_eq!(entity.text(), "");
    }

    #[test]
    fn accepted_codes_append_their_glyph_and_update_the_display() {
        let mut entity = TextEntity::new(0.0, 0.0);
        assert!(entity.on_key_down(keys::A));
        assert_eq!(entity.buffer(), "A");
        assert_eq!(entity.text(), "A");
    }

    #[test]
    fn keystrokes_append_in_event_order() {
        let mut entity = TextEntity::new(0.0, 0.0);
        for code in [keys::A, keys::D1, keys::B] {
            assert!(entity.on_key_down(code));
        }
        assert_eq!(entity.buffer(), "A1B");
        assert_eq!(entity.text(), "A1B");
    }

    #[test]
    fn rejected_codes_leave_buffer_and_display_untouched() {
        let mut entity = TextEntity::new(0.0, 0.0);
        entity.on_key_down(keys::A);
        entity.on_key_down(keys::D1);

        assert!(!entity.on_key_down(keys::D0 - 1));
        assert!(!entity.on_key_down(keys::Z + 1));
        assert!(!entity.on_key_down(keys::ENTER));
        assert_eq!(entity.buffer(), "A1");
        assert_eq!(entity.text(), "A1");
    }

    #[test]
    fn gap_codes_between_digits_and_letters_accumulate_too() {
        let mut entity = TextEntity::new(0.0, 0.0);
        assert!(entity.on_key_down(64)); // '@'
        assert_eq!(entity.buffer(), "@");
    }

    #[test]
    fn position_can_be_moved_without_touching_text() {
        let mut entity = TextEntity::new(10.0, 20.0);
        entity.on_key_down(keys::X);
        entity.set_position(30.0, 40.0);
        assert_eq!(entity.position(), (30.0, 40.0));
        assert_eq!(entity.text(), "X");
    }
}
