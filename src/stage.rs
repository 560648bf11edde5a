//! Stage: the canvas-sized world holding entities
//!
//! Owned by the bootstrap and passed by handle wherever it is needed; there
//! is no global engine state.

use crate::entity::{KeyInput, Position2d, TextDisplay, TextEntity};

/// Handle to an entity on a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(usize);

pub struct Stage {
    width: f32,
    height: f32,
    entities: Vec<TextEntity>,
}

impl Stage {
    /// Create a stage with a logical canvas size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            entities: Vec::new(),
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Spawn a text entity at a position, empty buffer.
    pub fn spawn_text(&mut self, x: f32, y: f32) -> EntityId {
        let id = EntityId(self.entities.len());
        self.entities.push(TextEntity::new(x, y));
        log::debug!("spawned text entity {:?} at ({}, {})", id, x, y);
        id
    }

    pub fn entity(&self, id: EntityId) -> Option<&TextEntity> {
        self.entities.get(id.0)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut TextEntity> {
        self.entities.get_mut(id.0)
    }

    /// Deliver a key-down to every entity, synchronously and in spawn order.
    /// Returns true if any entity's display changed.
    pub fn dispatch_key_down(&mut self, code: u32) -> bool {
        let mut changed = false;
        for entity in &mut self.entities {
            changed |= entity.on_key_down(code);
        }
        if changed {
            log::trace!("key code {} accepted", code);
        }
        changed
    }

    /// Snapshot of what to draw: each entity's position and shown text.
    pub fn text_items(&self) -> impl Iterator<Item = ((f32, f32), &str)> + '_ {
        self.entities.iter().map(|e| (e.position(), e.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn spawn_and_lookup() {
        let mut stage = Stage::new(500.0, 350.0);
        let id = stage.spawn_text(100.0, 100.0);
        assert_eq!(stage.size(), (500.0, 350.0));
        assert_eq!(stage.entity(id).unwrap().position(), (100.0, 100.0));
        assert!(stage.entity(EntityId(5)).is_none());
    }

    #[test]
    fn dispatch_reaches_every_entity() {
        let mut stage = Stage::new(500.0, 350.0);
        let a = stage.spawn_text(0.0, 0.0);
        let b = stage.spawn_text(50.0, 50.0);

        assert!(stage.dispatch_key_down(keys::K));
        assert_eq!(stage.entity(a).unwrap().text(), "K");
        assert_eq!(stage.entity(b).unwrap().text(), "K");
    }

    #[test]
    fn dispatch_reports_no_change_for_rejected_codes() {
        let mut stage = Stage::new(500.0, 350.0);
        stage.spawn_text(100.0, 100.0);
        assert!(!stage.dispatch_key_down(keys::ENTER));
        assert!(!stage.dispatch_key_down(keys::SEMICOLON));
    }

    #[test]
    fn text_items_reflect_accumulated_state() {
        let mut stage = Stage::new(500.0, 350.0);
        stage.spawn_text(100.0, 100.0);
        stage.dispatch_key_down(keys::H);
        stage.dispatch_key_down(keys::I);

        let items: Vec<_> = stage.text_items().collect();
        assert_eq!(items, vec![((100.0, 100.0), "HI")]);
    }
}
