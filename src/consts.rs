//! Fixed game constants. Everything is in screen pixels unless noted.

/// Board width; an enemy past this x leaves the screen.
pub const BOARD_WIDTH: f64 = 505.0;
/// Board height of the canvas the sprites are laid out for.
pub const BOARD_HEIGHT: f64 = 606.0;

/// Tile size, also the player's step.
pub const TILE_WIDTH: f64 = 101.0;
pub const TILE_HEIGHT: f64 = 83.0;
pub const BOARD_COLUMNS: usize = 5;
pub const BOARD_ROWS: usize = 6;

/// Player clamp bounds.
pub const PLAYER_MIN_X: f64 = 0.0;
pub const PLAYER_MAX_X: f64 = 404.0;
pub const PLAYER_MIN_Y: f64 = -10.0;
pub const PLAYER_MAX_Y: f64 = 405.0;
/// Player starting row.
pub const PLAYER_START_Y: f64 = 405.0;
/// At or above this y the player has reached the water.
pub const GOAL_Y: f64 = 0.0;

/// Selector resting position and clamp bounds.
pub const SELECTOR_START_X: f64 = 202.0;
pub const SELECTOR_Y: f64 = 375.0;
pub const SELECTOR_MIN_X: f64 = 101.0;
pub const SELECTOR_MAX_X: f64 = 303.0;

/// Enemy tables.
pub const ENEMY_LANES: [f64; 3] = [63.0, 146.0, 229.0];
pub const ENEMY_SPEEDS: [f64; 4] = [150.0, 200.0, 250.0, 300.0];
/// Enemies spawn between -ENEMY_SPAWN_SPREAD and -1.
pub const ENEMY_SPAWN_SPREAD: i32 = 200;

/// Hit-box around an enemy, matching the bug sprite art.
pub const HIT_BOX_HEIGHT: f64 = 83.0;
pub const HIT_BOX_BEHIND: f64 = 50.0;
pub const HIT_BOX_AHEAD: f64 = 70.0;

/// Item tables. The -300 entries park the item off-screen for the round.
pub const ITEM_XS: [f64; 7] = [-300.0, -300.0, 0.0, 101.0, 202.0, 303.0, 404.0];
pub const ITEM_YS: [f64; 4] = [-300.0, 73.0, 156.0, 239.0];
pub const HIDDEN_X: f64 = -300.0;
pub const HIDDEN_Y: f64 = -300.0;

/// Frames a hit enemy or a successful player holds still.
pub const PAUSE_FRAMES: u32 = 100;

/// Scoring.
pub const GOAL_POINTS: u32 = 5;
pub const ITEM_POINTS: u32 = 10;

/// Round length in seconds, and the countdown period.
pub const ROUND_SECONDS: u32 = 60;
pub const TICK_PERIOD_SECS: f64 = 1.0;

/// Text panels.
pub const SCORE_PANEL_X: f64 = 330.0;
pub const SCORE_PANEL_Y: f64 = 80.0;
pub const SCORE_PANEL_FONT: &str = "16px Georgia";
pub const MESSAGE_PANEL_X: f64 = 160.0;
pub const MESSAGE_PANEL_Y: f64 = 256.0;
pub const MESSAGE_PANEL_FONT: &str = "25px Verdana";
pub const GAME_OVER_TEXT: &str = "Game Over";

pub const PLAYER_COUNT: usize = 3;
pub const ITEM_COUNT: usize = 3;
pub const ENEMY_COUNT: usize = 4;
