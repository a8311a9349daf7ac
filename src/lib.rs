//! Lane-crossing arcade game.
//!
//! The game core (`game` and the entity modules) is platform independent:
//! it takes intents and frame deltas and hands back drawables. The
//! terminal and browser front-ends drive it through the `Renderer` trait.

pub mod consts;
pub mod enemy;
pub mod entity;
pub mod game;
pub mod item;
pub mod panel;
pub mod player;
pub mod renderer;
pub mod selector;
pub mod timer;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli_renderer;
#[cfg(target_arch = "wasm32")]
pub mod web_main;
#[cfg(target_arch = "wasm32")]
pub mod web_renderer;

pub use enemy::{Enemy, EnemyOutcome};
pub use entity::{Drawable, Entity, Intent, Position, Sprite};
pub use game::{Game, GameStatus, Slot};
pub use item::CollectibleItem;
pub use panel::{format_status, MessagePanel, ScorePanel};
pub use player::{Avatar, MoveOutcome, Player};
pub use renderer::{Input, Renderer};
pub use selector::Selector;
pub use timer::IntervalTimer;

#[cfg(not(target_arch = "wasm32"))]
pub use cli_renderer::CliRenderer;
#[cfg(target_arch = "wasm32")]
pub use web_renderer::WebRenderer;
