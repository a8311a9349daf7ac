use crate::consts::{
    GOAL_Y, PAUSE_FRAMES, PLAYER_MAX_X, PLAYER_MAX_Y, PLAYER_MIN_X, PLAYER_MIN_Y, PLAYER_START_Y,
    TILE_WIDTH,
};
use crate::entity::{Drawable, Entity, Intent, PauseCountdown, Position, Sprite};
use rand::RngCore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avatar {
    Boy,
    CatGirl,
    HornGirl,
}

impl Avatar {
    pub fn sprite(&self) -> Sprite {
        match self {
            Avatar::Boy => Sprite::CharBoy,
            Avatar::CatGirl => Sprite::CharCatGirl,
            Avatar::HornGirl => Sprite::CharHornGirl,
        }
    }
}

/// Result of feeding one intent to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Ignored,
    Moved,
    /// The move reached the water.
    Succeeded,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Position,
    pub sprite: Sprite,
    pub avatar: Avatar,
    /// Slot on the selection row, starting from one.
    pub index: u32,
    pub is_successful: bool,
    pub is_stopped: bool,
    pub pause: PauseCountdown,
}

impl Player {
    pub fn new(avatar: Avatar, index: u32) -> Self {
        let mut player = Self {
            position: Position::new(0.0, 0.0),
            sprite: avatar.sprite(),
            avatar,
            index,
            is_successful: false,
            is_stopped: false,
            pause: PauseCountdown::new(PAUSE_FRAMES),
        };
        player.reset_state();
        player
    }

    fn reset_state(&mut self) {
        self.sprite = self.avatar.sprite();
        self.position = Position::new(TILE_WIDTH * self.index as f64, PLAYER_START_Y);
        self.pause = PauseCountdown::new(PAUSE_FRAMES);
        self.is_successful = false;
        self.is_stopped = false;
    }

    pub fn stop(&mut self) {
        self.is_stopped = true;
    }

    /// Hit by an enemy.
    pub fn handle_collision(&mut self) {
        self.sprite = Sprite::Rock;
        self.stop();
    }

    pub fn is_in_water(&self) -> bool {
        self.position.y <= GOAL_Y
    }

    fn succeed(&mut self) {
        self.is_successful = true;
        self.sprite = Sprite::Star;
    }

    pub fn handle_input(&mut self, intent: Intent) -> MoveOutcome {
        if self.is_successful || self.is_stopped || !intent.is_direction() {
            return MoveOutcome::Ignored;
        }

        let next = self.position.moved(intent);
        self.position = Position::new(
            next.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X),
            next.y.clamp(PLAYER_MIN_Y, PLAYER_MAX_Y),
        );

        if self.is_in_water() {
            self.succeed();
            return MoveOutcome::Succeeded;
        }
        MoveOutcome::Moved
    }

    /// Per-tick update. Returns true when the post-success pause has run out
    /// and a new round should begin.
    pub fn update(&mut self) -> bool {
        self.is_successful && self.pause.tick()
    }
}

impl Entity for Player {
    fn reset(&mut self, _rng: &mut dyn RngCore) {
        self.reset_state();
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
    use proptest::prelude::*;

    fn intent_strategy() -> impl Strategy<Value = Intent> {
        prop_oneof![
            Just(Intent::Up),
            Just(Intent::Down),
            Just(Intent::Left),
            Just(Intent::Right),
            Just(Intent::Confirm),
        ]
    }

    proptest! {
        /// Player never leaves the board, whatever the input
        #[test]
        fn prop_movement_is_clamped(
            index in 1u32..=3,
            intents in prop::collection::vec(intent_strategy(), 1..200)
        ) {
            let mut player = Player::new(Avatar::Boy, index);
            for intent in intents {
                player.handle_input(intent);
                prop_assert!(player.position.x >= PLAYER_MIN_X && player.position.x <= PLAYER_MAX_X,
                    "x {} out of range", player.position.x);
                prop_assert!(player.position.y >= PLAYER_MIN_Y && player.position.y <= PLAYER_MAX_Y,
                    "y {} out of range", player.position.y);
            }
        }

        /// Success is reported at most once per round
        #[test]
        fn prop_success_reported_once(
            intents in prop::collection::vec(intent_strategy(), 1..200)
        ) {
            let mut player = Player::new(Avatar::CatGirl, 2);
            let successes = intents
                .into_iter()
                .filter(|intent| player.handle_input(*intent) == MoveOutcome::Succeeded)
                .count();
            prop_assert!(successes <= 1);
            prop_assert_eq!(successes == 1, player.is_successful);
        }
    }

    #[test]
    fn reset_places_player_on_its_slot() {
        let player = Player::new(Avatar::CatGirl, 2);
        assert_eq!(player.position, Position::new(202.0, 405.0));
        assert_eq!(player.sprite, Sprite::CharCatGirl);
        assert!(!player.is_successful);
        assert!(!player.is_stopped);
    }

    #[test]
    fn five_steps_up_reach_the_water() {
        let mut player = Player::new(Avatar::Boy, 1);
        for _ in 0..4 {
            assert_eq!(player.handle_input(Intent::Up), MoveOutcome::Moved);
        }
        assert_eq!(player.handle_input(Intent::Up), MoveOutcome::Succeeded);
        assert_eq!(player.position.y, -10.0);
        assert_eq!(player.sprite, Sprite::Star);

        // Frozen while successful
        assert_eq!(player.handle_input(Intent::Down), MoveOutcome::Ignored);
        assert_eq!(player.position.y, -10.0);
    }

    #[test]
    fn stopped_player_ignores_input() {
        let mut player = Player::new(Avatar::HornGirl, 3);
        player.handle_collision();
        assert_eq!(player.sprite, Sprite::Rock);
        assert_eq!(player.handle_input(Intent::Left), MoveOutcome::Ignored);
        assert_eq!(player.position.x, 303.0);
    }

    #[test]
    fn update_signals_new_round_after_pause() {
        let mut player = Player::new(Avatar::Boy, 1);
        assert!(!player.update());

        player.position.y = 73.0;
        player.handle_input(Intent::Up);
        assert!(player.is_successful);

        for _ in 0..PAUSE_FRAMES {
            assert!(!player.update());
        }
        assert!(player.update());
    }
}
