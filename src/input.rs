//! Keyboard input: the accept filter and the winit-to-table mapping

use crate::keys;
use winit::keyboard::{Key, NamedKey};

/// Accept range for typed characters: everything from the code for "0"
/// through the code for "Z" inclusive. The range also covers 58..=64
/// (`: ; < = > ? @`), which no key in the table produces but which the
/// original check admitted; the behavior is kept as written.
pub fn accepts(code: u32) -> bool {
    (keys::D0..=keys::Z).contains(&code)
}

/// Map a winit logical key to its table code.
///
/// Character keys go through [`keys::code_of_char`], so letters land on the
/// uppercase 65..=90 block regardless of shift state, matching how the DOM
/// host reported key-down codes. Keys without a table entry map to `None`
/// and are dropped before dispatch.
pub fn key_code_of(key: &Key) -> Option<u32> {
    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            keys::code_of_char(first)
        }
        Key::Named(named) => match named {
            NamedKey::Backspace => Some(keys::BACKSPACE),
            NamedKey::Tab => Some(keys::TAB),
            NamedKey::Enter => Some(keys::ENTER),
            NamedKey::Shift => Some(keys::SHIFT),
            NamedKey::Control => Some(keys::CTRL),
            NamedKey::Alt => Some(keys::ALT),
            NamedKey::CapsLock => Some(keys::CAPS_LOCK),
            NamedKey::Escape => Some(keys::ESC),
            NamedKey::Space => Some(keys::SPACE),
            NamedKey::PageUp => Some(keys::PAGE_UP),
            NamedKey::PageDown => Some(keys::PAGE_DOWN),
            NamedKey::End => Some(keys::END),
            NamedKey::Home => Some(keys::HOME),
            NamedKey::ArrowLeft => Some(keys::LEFT_ARROW),
            NamedKey::ArrowUp => Some(keys::UP_ARROW),
            NamedKey::ArrowRight => Some(keys::RIGHT_ARROW),
            NamedKey::ArrowDown => Some(keys::DOWN_ARROW),
            NamedKey::Insert => Some(keys::INSERT),
            NamedKey::Delete => Some(keys::DELETE),
            NamedKey::F1 => Some(keys::F1),
            NamedKey::F2 => Some(keys::F2),
            NamedKey::F3 => Some(keys::F3),
            NamedKey::F4 => Some(keys::F4),
            NamedKey::F5 => Some(keys::F5),
            NamedKey::F6 => Some(keys::F6),
            NamedKey::F7 => Some(keys::F7),
            NamedKey::F8 => Some(keys::F8),
            NamedKey::F9 => Some(keys::F9),
            NamedKey::F10 => Some(keys::F10),
            NamedKey::F11 => Some(keys::F11),
            NamedKey::F12 => Some(keys::F12),
            _ => None,
        },
        _ => None,
    }
}
