use crate::consts::{
    BOARD_WIDTH, ENEMY_LANES, ENEMY_SPAWN_SPREAD, ENEMY_SPEEDS, HIT_BOX_AHEAD, HIT_BOX_BEHIND,
    HIT_BOX_HEIGHT, PAUSE_FRAMES,
};
use crate::entity::{pick, Drawable, Entity, PauseCountdown, Position, Sprite};
use crate::player::Player;
use rand::{Rng, RngCore};

/// What happened to an enemy during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyOutcome {
    Moved,
    /// Just ran into the player.
    Collided,
    /// Still holding after a collision.
    Paused,
    /// The hold after a collision is over; the round ends.
    PauseElapsed,
}

/// An obstacle crossing its lane left to right.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Position,
    pub sprite: Sprite,
    /// Pixels per second, never negative.
    pub speed: f64,
    pub is_hit: bool,
    pub pause: PauseCountdown,
}

impl Enemy {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let mut enemy = Self {
            position: Position::new(0.0, ENEMY_LANES[0]),
            sprite: Sprite::EnemyBug,
            speed: 0.0,
            is_hit: false,
            pause: PauseCountdown::new(PAUSE_FRAMES),
        };
        enemy.reset(rng);
        enemy
    }

    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    /// Point-in-rectangle test against the player's position.
    ///
    /// Not swept: an enemy fast enough to jump the whole box in one tick
    /// can pass through the player.
    pub fn has_collision(&self, player: &Player) -> bool {
        let Position { x, y } = self.position;
        let target = player.position;
        !player.is_stopped
            && y <= target.y
            && y + HIT_BOX_HEIGHT >= target.y
            && x + HIT_BOX_AHEAD >= target.x
            && x - HIT_BOX_BEHIND <= target.x
    }

    fn handle_collision(&mut self, player: &mut Player) {
        self.sprite = Sprite::Rock;
        self.is_hit = true;
        self.stop();
        player.handle_collision();
    }

    pub fn update(&mut self, dt: f64, player: &mut Player, rng: &mut dyn RngCore) -> EnemyOutcome {
        if self.has_collision(player) {
            self.handle_collision(player);
            return EnemyOutcome::Collided;
        }

        if self.is_hit {
            if self.pause.tick() {
                return EnemyOutcome::PauseElapsed;
            }
            return EnemyOutcome::Paused;
        }

        self.position.x += self.speed * dt;
        if self.position.x > BOARD_WIDTH {
            self.reset(rng);
        }
        EnemyOutcome::Moved
    }
}

impl Entity for Enemy {
    fn reset(&mut self, rng: &mut dyn RngCore) {
        self.sprite = Sprite::EnemyBug;
        self.position = Position::new(
            -(rng.gen_range(1..=ENEMY_SPAWN_SPREAD) as f64),
            pick(&ENEMY_LANES, rng),
        );
        self.speed = pick(&ENEMY_SPEEDS, rng);
        self.pause = PauseCountdown::new(PAUSE_FRAMES);
        self.is_hit = false;
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
