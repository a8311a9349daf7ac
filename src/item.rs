use crate::consts::{HIDDEN_X, HIDDEN_Y, ITEM_XS, ITEM_YS};
use crate::entity::{pick, Drawable, Entity, Position, Sprite};
use crate::player::Player;
use rand::RngCore;

const GEMS: [Sprite; 3] = [Sprite::GemBlue, Sprite::GemGreen, Sprite::GemOrange];

/// A gem sitting on a tile until the player steps on it.
#[derive(Debug, Clone)]
pub struct CollectibleItem {
    pub position: Position,
    pub sprite: Sprite,
    pub is_collected: bool,
}

impl CollectibleItem {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let mut item = Self {
            position: Position::new(HIDDEN_X, HIDDEN_Y),
            sprite: GEMS[0],
            is_collected: false,
        };
        item.reset(rng);
        item
    }

    /// Movement is grid-quantized, so pickup is exact equality.
    pub fn has_collection(&self, player: &Player) -> bool {
        self.position == player.position
    }

    pub fn hide(&mut self) {
        self.position = Position::new(HIDDEN_X, HIDDEN_Y);
    }

    /// Returns true when the player picked the item up this tick.
    pub fn update(&mut self, player: &Player) -> bool {
        if !self.has_collection(player) {
            return false;
        }
        self.hide();
        self.is_collected = true;
        true
    }
}

impl Entity for CollectibleItem {
    fn reset(&mut self, rng: &mut dyn RngCore) {
        self.sprite = pick(&GEMS, rng);
        self.position = Position::new(pick(&ITEM_XS, rng), pick(&ITEM_YS, rng));
        self.is_collected = false;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn drawable(&self) -> Drawable {
        Drawable::Image {
            sprite: self.sprite,
            x: self.position.x,
            y: self.position.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Avatar;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        #[test]
        fn prop_reset_draws_from_tables(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let item = CollectibleItem::new(&mut rng);
            prop_assert!(ITEM_XS.contains(&item.position.x));
            prop_assert!(ITEM_YS.contains(&item.position.y));
            prop_assert!(GEMS.contains(&item.sprite));
            prop_assert!(!item.is_collected);
        }
    }

    #[test]
    fn collected_once_then_hidden() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut item = CollectibleItem::new(&mut rng);
        let mut player = Player::new(Avatar::Boy, 1);
        player.position = Position::new(101.0, 156.0);
        item.position = Position::new(101.0, 156.0);

        assert!(item.update(&player));
        assert!(item.is_collected);
        assert_eq!(item.position, Position::new(-300.0, -300.0));

        assert!(!item.update(&player));
    }

    #[test]
    fn near_miss_is_not_a_pickup() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut item = CollectibleItem::new(&mut rng);
        let mut player = Player::new(Avatar::Boy, 1);
        player.position = Position::new(101.0, 156.0);
        item.position = Position::new(101.0, 155.0);

        assert!(!item.update(&player));
        assert!(!item.is_collected);
    }
}
