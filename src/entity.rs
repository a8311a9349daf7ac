use crate::consts::{TILE_HEIGHT, TILE_WIDTH};
use rand::{Rng, RngCore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// One grid step in the intent's direction. `Confirm` doesn't move.
    pub fn moved(&self, intent: Intent) -> Self {
        match intent {
            Intent::Up => Position::new(self.x, self.y - TILE_HEIGHT),
            Intent::Down => Position::new(self.x, self.y + TILE_HEIGHT),
            Intent::Left => Position::new(self.x - TILE_WIDTH, self.y),
            Intent::Right => Position::new(self.x + TILE_WIDTH, self.y),
            Intent::Confirm => *self,
        }
    }
}

/// Abstract input actions. Key codes are mapped to these by the front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Left,
    Right,
    Up,
    Down,
    Confirm,
}

impl Intent {
    pub fn is_direction(&self) -> bool {
        !matches!(self, Intent::Confirm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    EnemyBug,
    Rock,
    Star,
    CharBoy,
    CharCatGirl,
    CharHornGirl,
    GemBlue,
    GemGreen,
    GemOrange,
    Selector,
}

impl Sprite {
    pub const ALL: [Sprite; 10] = [
        Sprite::EnemyBug,
        Sprite::Rock,
        Sprite::Star,
        Sprite::CharBoy,
        Sprite::CharCatGirl,
        Sprite::CharHornGirl,
        Sprite::GemBlue,
        Sprite::GemGreen,
        Sprite::GemOrange,
        Sprite::Selector,
    ];

    /// Asset key the renderer loads the image from.
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::Rock => "images/rock.png",
            Sprite::Star => "images/star.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::CharCatGirl => "images/char-cat-girl.png",
            Sprite::CharHornGirl => "images/char-horn-girl.png",
            Sprite::GemBlue => "images/gem-blue.png",
            Sprite::GemGreen => "images/gem-green.png",
            Sprite::GemOrange => "images/gem-orange.png",
            Sprite::Selector => "images/selector.png",
        }
    }
}

/// What the renderer needs to draw one entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Image {
        sprite: Sprite,
        x: f64,
        y: f64,
    },
    Text {
        text: String,
        font: &'static str,
        x: f64,
        y: f64,
    },
}

/// Anything on the board that can be reset and drawn.
pub trait Entity {
    /// Put the entity back into its start-of-round state.
    fn reset(&mut self, rng: &mut dyn RngCore);

    fn position(&self) -> Position;

    fn drawable(&self) -> Drawable;
}

/// Frame countdown used to hold an entity still for a while.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseCountdown {
    frames: u32,
}

impl PauseCountdown {
    pub fn new(frames: u32) -> Self {
        Self { frames }
    }

    /// Returns true once the counter is exhausted, decrementing otherwise.
    /// A countdown of n expires on check n + 1.
    pub fn tick(&mut self) -> bool {
        if self.frames == 0 {
            return true;
        }
        self.frames -= 1;
        false
    }
}

/// Uniform pick from a fixed table.
///
/// Panics if `table` is empty; every table in the game is a non-empty const.
pub fn pick<T: Copy>(table: &[T], rng: &mut dyn RngCore) -> T {
    table[rng.gen_range(0..table.len())]
}
