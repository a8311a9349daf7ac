use crate::consts::{SELECTOR_MAX_X, SELECTOR_MIN_X, SELECTOR_START_X, SELECTOR_Y};
use crate::entity::{Drawable, Entity, Intent, Position, Sprite};
use rand::RngCore;

/// Cursor on the selection row. Its x lines up with one player slot.
#[derive(Debug, Clone)]
pub struct Selector {
    pub position: Position,
}

impl Selector {
    pub fn new() -> Self {
        Self {
            position: Position::new(SELECTOR_START_X, SELECTOR_Y),
        }
    }

    /// Moves the cursor. Returns true when the choice is confirmed.
    pub fn handle_input(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Left | Intent::Right => {
                let next = self.position.moved(intent);
                self.position.x = next.x.clamp(SELECTOR_MIN_X, SELECTOR_MAX_X);
                false
            }
            Intent::Confirm => true,
            Intent::Up | Intent::Down => false,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Selector {
    fn reset(&mut self, _rng: &mut dyn RngCore) {
        self.position = Position::new(SELECTOR_START_X, SELECTOR_Y);
    }

    fn position(&self) -> Position {
        self.position
    }

    fn drawable(&self) -> Drawable {
        Drawable::Image {
            sprite: Sprite::Selector,
            x: self.position.x,
            y: self.position.y,
        }
    }
}
