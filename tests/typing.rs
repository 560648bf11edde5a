//! End-to-end accumulator behavior, driven headlessly through the stage.

use proptest::prelude::*;
use typebox::{keys, input, KeyInput, Position2d, TextDisplay, TextEntity, Stage};

#[test]
fn typing_session_matches_the_reference_scenario() {
    // "" -> A -> "A" -> 1 -> "A1" -> out-of-range -> "A1"
    let mut stage = Stage::new(500.0, 350.0);
    let id = stage.spawn_text(100.0, 100.0);

    assert_eq!(stage.entity(id).unwrap().text(), "");

    assert!(stage.dispatch_key_down(keys::A));
    assert_eq!(stage.entity(id).unwrap().buffer(), "A");
    assert_eq!(stage.entity(id).unwrap().text(), "A");

    assert!(stage.dispatch_key_down(keys::D1));
    assert_eq!(stage.entity(id).unwrap().buffer(), "A1");
    assert_eq!(stage.entity(id).unwrap().text(), "A1");

    assert!(!stage.dispatch_key_down(keys::SPACE)); // below "0"
    assert!(!stage.dispatch_key_down(keys::F1)); // above "Z"
    assert_eq!(stage.entity(id).unwrap().text(), "A1");
}

#[test]
fn display_updates_once_per_accepted_keystroke() {
    let mut entity = TextEntity::new(100.0, 100.0);
    let mut updates = 0;
    for code in [keys::T, keys::ENTER, keys::E, keys::SEMICOLON, keys::S, keys::T] {
        if entity.on_key_down(code) {
            updates += 1;
        }
    }
    assert_eq!(updates, 4);
    assert_eq!(entity.text(), "TEST");
}

#[test]
fn entity_position_does_not_gate_input() {
    let mut entity = TextEntity::new(-50.0, 1000.0);
    assert!(entity.on_key_down(keys::Q));
    assert_eq!(entity.position(), (-50.0, 1000.0));
    assert_eq!(entity.text(), "Q");
}

proptest! {
    // Property 1 + 2 of the behavior contract: codes in [48, 90] append
    // exactly their glyph and report an update; all others are no-ops.
    #[test]
    fn filter_decides_append_or_noop(code in 0u32..512) {
        let mut entity = TextEntity::new(0.0, 0.0);
        entity.on_key_down(keys::X);
        let before = entity.buffer().to_string();

        let updated = entity.on_key_down(code);

        if (48..=90).contains(&code) {
            prop_assert!(updated);
            prop_assert!(input::accepts(code));
            let mut expected = before.clone();
            expected.push(char::from_u32(code).unwrap());
            prop_assert_eq!(entity.buffer(), expected.as_str());
            prop_assert_eq!(entity.text(), entity.buffer());
        } else {
            prop_assert!(!updated);
            prop_assert!(!input::accepts(code));
            prop_assert_eq!(entity.buffer(), before.as_str());
        }
    }

    #[test]
    fn accepted_sequences_append_in_order(codes in proptest::collection::vec(48u32..=90, 0..32)) {
        let mut entity = TextEntity::new(0.0, 0.0);
        for &code in &codes {
            entity.on_key_down(code);
        }
        let expected: String = codes
            .iter()
            .map(|&c| char::from_u32(c).unwrap())
            .collect();
        prop_assert_eq!(entity.buffer(), expected.as_str());
    }
}
