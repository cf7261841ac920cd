//! Body-position registry: the narrow channel between orbital animation and
//! the camera.
//!
//! One writer per id (the orbit animator), readers only elsewhere. Positions
//! for the current tick must be published before the camera controller reads
//! them that tick, or focus-follow lags a frame.

use glam::Vec3;
use std::collections::HashMap;

/// Live id -> position map updated every frame by the animator.
#[derive(Debug, Default, Clone)]
pub struct PositionRegistry {
    positions: HashMap<String, Vec3>,
}

impl PositionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish the current-tick position for a body.
    pub fn publish(&mut self, id: &str, position: Vec3) {
        match self.positions.get_mut(id) {
            Some(slot) => *slot = position,
            None => {
                self.positions.insert(id.to_owned(), position);
            }
        }
    }

    /// Current position of a body, if it has been published.
    pub fn position(&self, id: &str) -> Option<Vec3> {
        self.positions.get(id).copied()
    }

    /// Drop all published positions (call when the scene is rebuilt).
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
