use crate::consts::{BOARD_COLUMNS, BOARD_ROWS, GAME_OVER_TEXT, TILE_HEIGHT, TILE_WIDTH};
use crate::entity::{Drawable, Intent, Sprite};
use crate::game::{Game, GameStatus};
use crate::renderer::{Input, Renderer};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Terminal columns per board tile.
const TILE_CHARS: usize = 8;
/// Terminal lines per board tile.
const TILE_LINES: usize = 2;
const BOARD_CHARS: usize = BOARD_COLUMNS * TILE_CHARS;
const BOARD_LINES: usize = BOARD_ROWS * TILE_LINES;

pub struct CliRenderer {
    last_render: Instant,
    target_frame_time: Duration,
}

/// Terminal cell for a pixel position, if it lands on the board.
fn to_cell(x: f64, y: f64, width: usize) -> Option<(u16, u16)> {
    let col = (x / TILE_WIDTH * TILE_CHARS as f64).round();
    // Sprites sit 10px above their tile's top edge
    let line = ((y + 10.0) / TILE_HEIGHT * TILE_LINES as f64).round();
    if col < 0.0 || line < 0.0 {
        return None;
    }
    let (col, line) = (col as usize, line as usize);
    if col + width > BOARD_CHARS || line >= BOARD_LINES {
        return None;
    }
    Some((col as u16, line as u16))
}

fn glyph(sprite: Sprite) -> (&'static str, Color) {
    match sprite {
        Sprite::EnemyBug => ("=bug>", Color::Red),
        Sprite::Rock => ("(##)", Color::DarkGrey),
        Sprite::Star => (" ** ", Color::Yellow),
        Sprite::CharBoy => (" @ ", Color::White),
        Sprite::CharCatGirl => (" & ", Color::Magenta),
        Sprite::CharHornGirl => (" % ", Color::Cyan),
        Sprite::GemBlue => ("<>", Color::Blue),
        Sprite::GemGreen => ("<>", Color::Green),
        Sprite::GemOrange => ("<>", Color::DarkYellow),
        Sprite::Selector => (" vvv ", Color::Yellow),
    }
}

fn row_color(row: usize) -> Color {
    match row {
        0 => Color::DarkBlue,
        1..=3 => Color::Grey,
        _ => Color::DarkGreen,
    }
}

impl CliRenderer {
    pub fn new() -> Self {
        Self {
            last_render: Instant::now(),
            // Target 30 FPS for smooth rendering
            target_frame_time: Duration::from_millis(33),
        }
    }

    fn draw_background(&self, stdout: &mut io::Stdout) -> io::Result<()> {
        for line in 0..BOARD_LINES {
            queue!(
                stdout,
                cursor::MoveTo(0, line as u16),
                SetBackgroundColor(row_color(line / TILE_LINES)),
                Print(" ".repeat(BOARD_CHARS)),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn draw_image(&self, sprite: Sprite, x: f64, y: f64, stdout: &mut io::Stdout) -> io::Result<()> {
        let (text, color) = glyph(sprite);
        let Some((col, line)) = to_cell(x, y, text.len()) else {
            return Ok(());
        };
        queue!(
            stdout,
            cursor::MoveTo(col, line),
            SetBackgroundColor(row_color(line as usize / TILE_LINES)),
            SetForegroundColor(color),
            Print(text),
            ResetColor
        )?;
        Ok(())
    }

    fn draw_info(&self, game: &Game, texts: &[&str], stdout: &mut io::Stdout) -> io::Result<()> {
        let mut line = BOARD_LINES as u16 + 1;
        for text in texts {
            let color = if *text == GAME_OVER_TEXT {
                Color::Red
            } else {
                Color::White
            };
            queue!(
                stdout,
                cursor::MoveTo(0, line),
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                terminal::Clear(ClearType::UntilNewLine)
            )?;
            line += 1;
        }

        let help = match game.status {
            GameStatus::Selecting => "Left/Right to choose | Enter or Space to start | Q to quit",
            GameStatus::Running => "Arrow Keys to move | Q to quit",
            GameStatus::Stopped => "Enter or Space to play again | Q to quit",
        };
        queue!(
            stdout,
            cursor::MoveTo(0, line),
            Print(help),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        Ok(())
    }
}

impl Default for CliRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for CliRenderer {
    fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::Hide
        )?;
        Ok(())
    }

    fn render(&mut self, game: &Game) -> io::Result<()> {
        // Frame rate limiting: skip rendering if not enough time has passed
        if self.last_render.elapsed() < self.target_frame_time {
            return Ok(());
        }

        self.last_render = Instant::now();

        let mut stdout = io::stdout();
        self.draw_background(&mut stdout)?;

        let drawables = game.render();
        let mut texts = Vec::new();
        for drawable in &drawables {
            match drawable {
                Drawable::Image { sprite, x, y } => self.draw_image(*sprite, *x, *y, &mut stdout)?,
                Drawable::Text { text, .. } => texts.push(text.as_str()),
            }
        }
        self.draw_info(game, &texts, &mut stdout)?;

        stdout.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            cursor::Show,
            terminal::LeaveAlternateScreen,
            ResetColor
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<Input>> {
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = event::read()? {
                let input = match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
                    KeyCode::Enter | KeyCode::Char(' ') => Input::Intent(Intent::Confirm),
                    KeyCode::Up => Input::Intent(Intent::Up),
                    KeyCode::Down => Input::Intent(Intent::Down),
                    KeyCode::Left => Input::Intent(Intent::Left),
                    KeyCode::Right => Input::Intent(Intent::Right),
                    _ => return Ok(None),
                };
                return Ok(Some(input));
            }
        }
        Ok(None)
    }
}

impl Drop for CliRenderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
