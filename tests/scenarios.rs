use crossing::consts::{ITEM_XS, ITEM_YS, PAUSE_FRAMES, ROUND_SECONDS};
use crossing::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME: f64 = 1.0 / 60.0;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn running_game() -> Game {
    let mut game = Game::with_seed(42);
    game.handle_input(Intent::Confirm);
    game
}

fn texts(game: &Game) -> Vec<String> {
    game.render()
        .into_iter()
        .filter_map(|drawable| match drawable {
            Drawable::Text { text, .. } => Some(text),
            Drawable::Image { .. } => None,
        })
        .collect()
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[test]
fn selecting_draws_three_players_and_selector() {
    let game = Game::with_seed(42);
    let sprites: Vec<Sprite> = game
        .render()
        .into_iter()
        .filter_map(|drawable| match drawable {
            Drawable::Image { sprite, .. } => Some(sprite),
            Drawable::Text { .. } => None,
        })
        .collect();
    assert_eq!(
        sprites,
        vec![
            Sprite::CharBoy,
            Sprite::CharCatGirl,
            Sprite::CharHornGirl,
            Sprite::Selector
        ]
    );
}

#[test]
fn confirm_on_middle_slot_starts_round() {
    let game = running_game();
    assert_eq!(game.status, GameStatus::Running);
    let player = game.current_player().unwrap();
    assert_eq!(player.index, 2);
    assert_eq!(player.position, Position::new(202.0, 405.0));
    assert_eq!(game.score, 0);
    assert_eq!(game.left_time, ROUND_SECONDS);
}

#[test]
fn direction_keys_on_selection_do_not_start() {
    let mut game = Game::with_seed(42);
    game.handle_input(Intent::Up);
    game.handle_input(Intent::Down);
    game.handle_input(Intent::Right);
    assert_eq!(game.status, GameStatus::Selecting);
    assert_eq!(game.selector.position.x, 303.0);
}

// ── Countdown ─────────────────────────────────────────────────────────────────

#[test]
fn one_tick_shows_fifty_nine_seconds() {
    let mut game = running_game();
    game.on_tick();
    assert_eq!(game.left_time, 59);
    assert_eq!(texts(&game), vec!["Score: 0, Time: 00:59".to_string()]);
}

#[test]
fn running_out_of_time_ends_the_game() {
    let mut game = running_game();
    game.advance_timer(ROUND_SECONDS as f64 + 5.0);

    assert_eq!(game.status, GameStatus::Stopped);
    assert_eq!(game.left_time, 0);
    assert!(!game.timer_running());
    assert_eq!(
        texts(&game),
        vec!["Score: 0, Time: 00:00".to_string(), "Game Over".to_string()]
    );

    // Frames after the end don't add another panel
    for _ in 0..5 {
        game.update(FRAME);
        game.on_tick();
    }
    assert_eq!(texts(&game).len(), 2);
}

#[test]
fn restart_goes_back_to_selection() {
    let mut game = running_game();
    game.stop();
    game.handle_input(Intent::Left);
    assert_eq!(game.status, GameStatus::Stopped);

    game.handle_input(Intent::Confirm);
    assert_eq!(game.status, GameStatus::Selecting);
    assert!(texts(&game).is_empty());

    game.handle_input(Intent::Confirm);
    assert_eq!(game.status, GameStatus::Running);
    assert_eq!(game.score, 0);
    assert_eq!(game.left_time, ROUND_SECONDS);
}

// ── Entities in isolation ─────────────────────────────────────────────────────

#[test]
fn enemy_reset_draws_from_fixed_tables() {
    let mut rng = seeded_rng();
    let mut enemy = Enemy::new(&mut rng);
    for _ in 0..50 {
        enemy.position.x = 600.0;
        enemy.reset(&mut rng);
        assert!(enemy.position.x < 0.0);
        assert!([63.0, 146.0, 229.0].contains(&enemy.position.y));
        assert!([150.0, 200.0, 250.0, 300.0].contains(&enemy.speed));
        assert_eq!(enemy.sprite, Sprite::EnemyBug);
    }
}

#[test]
fn item_reset_clears_collected_flag() {
    let mut rng = seeded_rng();
    let mut item = CollectibleItem::new(&mut rng);
    item.is_collected = true;
    item.hide();
    item.reset(&mut rng);
    assert!(!item.is_collected);
}

// ── Full rounds ───────────────────────────────────────────────────────────────

#[test]
fn crossing_an_empty_board_scores_and_restarts() {
    let mut game = running_game();
    for enemy in &mut game.enemies {
        enemy.position = Position::new(-1000.0, 63.0);
        enemy.speed = 0.0;
    }
    for item in &mut game.items {
        item.hide();
    }

    for _ in 0..5 {
        game.handle_input(Intent::Up);
        game.update(FRAME);
    }
    assert_eq!(game.score, 5);
    assert_eq!(texts(&game), vec!["Score: 5, Time: 01:00".to_string()]);

    for item in &mut game.items {
        item.is_collected = true;
    }
    for _ in 0..=PAUSE_FRAMES {
        game.update(FRAME);
    }
    let player = game.current_player().unwrap();
    assert_eq!(player.position, Position::new(202.0, 405.0));
    assert!(!player.is_successful);
    assert_eq!(game.status, GameStatus::Running);

    // Items come back from the fixed tables for the new round
    for item in &game.items {
        assert!(!item.is_collected);
        assert!(ITEM_XS.contains(&item.position.x));
        assert!(ITEM_YS.contains(&item.position.y));
    }
}
