use crate::consts::{
    ENEMY_COUNT, GOAL_POINTS, ITEM_COUNT, ITEM_POINTS, ROUND_SECONDS, TICK_PERIOD_SECS,
};
use crate::enemy::{Enemy, EnemyOutcome};
use crate::entity::{Drawable, Entity, Intent};
use crate::item::CollectibleItem;
use crate::panel::{MessagePanel, ScorePanel};
use crate::player::{Avatar, MoveOutcome, Player};
use crate::selector::Selector;
use crate::timer::IntervalTimer;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Selecting,
    Running,
    Stopped,
}

/// One entry of the active entity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Item(usize),
    Enemy(usize),
    Player(usize),
    Selector,
    ScorePanel,
    MessagePanel,
}

pub struct Game {
    pub players: Vec<Player>,
    pub items: Vec<CollectibleItem>,
    pub enemies: Vec<Enemy>,
    pub selector: Selector,
    pub score_panel: ScorePanel,
    pub message_panel: MessagePanel,
    /// Entities updated and drawn this frame, in order.
    pub entities: Vec<Slot>,
    /// Index into `players` of the avatar in play.
    pub player: Option<usize>,
    pub status: GameStatus,
    pub score: u32,
    pub left_time: u32,
    timer: IntervalTimer,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same rounds for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let players = vec![
            Player::new(Avatar::Boy, 1),
            Player::new(Avatar::CatGirl, 2),
            Player::new(Avatar::HornGirl, 3),
        ];
        let items = (0..ITEM_COUNT).map(|_| CollectibleItem::new(&mut rng)).collect();
        let enemies = (0..ENEMY_COUNT).map(|_| Enemy::new(&mut rng)).collect();

        let mut game = Self {
            players,
            items,
            enemies,
            selector: Selector::new(),
            score_panel: ScorePanel::new(),
            message_panel: MessagePanel::new(),
            entities: Vec::new(),
            player: None,
            status: GameStatus::Selecting,
            score: 0,
            left_time: ROUND_SECONDS,
            timer: IntervalTimer::new(TICK_PERIOD_SECS),
            rng,
        };
        game.initialize();
        game
    }

    /// Enters the selection screen.
    pub fn initialize(&mut self) {
        self.status = GameStatus::Selecting;
        self.timer.cancel();
        self.entities = (0..self.players.len()).map(Slot::Player).collect();
        self.entities.push(Slot::Selector);
        self.reset_active();
        log::info!("selecting a player");
    }

    /// Starts a round with the player under the selector.
    pub fn start(&mut self) {
        let selected_x = self.selector.position.x;
        let chosen = self
            .players
            .iter()
            .position(|player| player.position().x == selected_x)
            .expect("selector always rests on a player slot");

        self.score = 0;
        self.left_time = ROUND_SECONDS;
        self.player = Some(chosen);

        self.entities = (0..self.items.len()).map(Slot::Item).collect();
        self.entities.extend((0..self.enemies.len()).map(Slot::Enemy));
        self.entities.push(Slot::Player(chosen));
        self.entities.push(Slot::ScorePanel);
        self.reset_active();
        self.score_panel.set_current_score(self.score, self.left_time);

        self.timer.start();
        self.status = GameStatus::Running;
        log::info!("round started with {:?}", self.players[chosen].avatar);
    }

    /// Ends a running round. Does nothing in any other state.
    pub fn stop(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.status = GameStatus::Stopped;
        for enemy in &mut self.enemies {
            enemy.stop();
        }
        if let Some(active) = self.player {
            self.players[active].stop();
        }
        self.timer.cancel();
        self.entities.push(Slot::MessagePanel);
        log::info!("game over with score {} and {}s left", self.score, self.left_time);
    }

    fn reset_active(&mut self) {
        for slot in self.entities.clone() {
            let rng = &mut self.rng;
            match slot {
                Slot::Item(i) => self.items[i].reset(rng),
                Slot::Enemy(i) => self.enemies[i].reset(rng),
                Slot::Player(i) => self.players[i].reset(rng),
                Slot::Selector => self.selector.reset(rng),
                Slot::ScorePanel => self.score_panel.reset(rng),
                Slot::MessagePanel => self.message_panel.reset(rng),
            }
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
        self.score_panel.set_current_score(self.score, self.left_time);
    }

    /// Routes an intent to whoever listens in the current state.
    pub fn handle_input(&mut self, intent: Intent) {
        match self.status {
            GameStatus::Selecting => {
                if self.selector.handle_input(intent) {
                    self.start();
                }
            }
            GameStatus::Running => {
                let Some(active) = self.player else {
                    return;
                };
                if self.players[active].handle_input(intent) == MoveOutcome::Succeeded {
                    log::debug!("player reached the water");
                    self.add_score(GOAL_POINTS);
                }
            }
            GameStatus::Stopped => {
                if intent == Intent::Confirm {
                    self.initialize();
                }
            }
        }
    }

    /// One-second countdown step.
    pub fn on_tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.left_time = self.left_time.saturating_sub(1);
        self.score_panel.set_current_score(self.score, self.left_time);
        if self.left_time == 0 {
            self.stop();
        }
    }

    /// Feeds wall time to the countdown, calling `on_tick` for each whole
    /// period that passed.
    pub fn advance_timer(&mut self, elapsed: f64) {
        let fires = self.timer.advance(elapsed);
        for _ in 0..fires {
            self.on_tick();
        }
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.player.map(|i| &self.players[i])
    }

    pub fn update(&mut self, dt: f64) {
        if self.status != GameStatus::Running {
            return;
        }
        let Some(active) = self.player else {
            return;
        };

        // Slots appended during this pass wait for the next frame
        let count = self.entities.len();
        for n in 0..count {
            let slot = self.entities[n];
            match slot {
                Slot::Item(i) => {
                    if self.items[i].update(&self.players[active]) {
                        log::debug!("item {} collected", i);
                        self.add_score(ITEM_POINTS);
                    }
                }
                Slot::Enemy(i) => {
                    let outcome =
                        self.enemies[i].update(dt, &mut self.players[active], &mut self.rng);
                    match outcome {
                        EnemyOutcome::Collided => log::debug!("enemy {} hit the player", i),
                        EnemyOutcome::PauseElapsed => self.stop(),
                        EnemyOutcome::Moved | EnemyOutcome::Paused => {}
                    }
                }
                Slot::Player(i) => {
                    if self.players[i].update() {
                        log::debug!("round complete, resetting player and items");
                        self.players[i].reset(&mut self.rng);
                        for item in &mut self.items {
                            item.reset(&mut self.rng);
                        }
                    }
                }
                Slot::Selector | Slot::ScorePanel | Slot::MessagePanel => {}
            }
        }
    }

    /// Drawables for the active entities, back to front.
    pub fn render(&self) -> Vec<Drawable> {
        self.entities
            .iter()
            .map(|slot| match *slot {
                Slot::Item(i) => self.items[i].drawable(),
                Slot::Enemy(i) => self.enemies[i].drawable(),
                Slot::Player(i) => self.players[i].drawable(),
                Slot::Selector => self.selector.drawable(),
                Slot::ScorePanel => self.score_panel.drawable(),
                Slot::MessagePanel => self.message_panel.drawable(),
            })
            .collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
