use crate::consts::{BOARD_COLUMNS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH, TILE_HEIGHT, TILE_WIDTH};
use crate::entity::{Drawable, Intent, Sprite};
use crate::game::Game;
use crate::renderer::{Input, Renderer};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

const TARGET_FRAME_TIME: f64 = 16.0; // ~60 FPS

const WATER_BLOCK: &str = "images/water-block.png";
const STONE_BLOCK: &str = "images/stone-block.png";
const GRASS_BLOCK: &str = "images/grass-block.png";

/// Background tile for each board row, top to bottom.
const ROW_IMAGES: [&str; BOARD_ROWS] = [
    WATER_BLOCK,
    STONE_BLOCK,
    STONE_BLOCK,
    STONE_BLOCK,
    GRASS_BLOCK,
    GRASS_BLOCK,
];

fn js_error(err: JsValue) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{:?}", err))
}

/// Maps a `key` value from a keyboard event to an intent.
fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowLeft" => Some(Intent::Left),
        "ArrowRight" => Some(Intent::Right),
        "ArrowUp" => Some(Intent::Up),
        "ArrowDown" => Some(Intent::Down),
        "Enter" | " " => Some(Intent::Confirm),
        _ => None,
    }
}

pub struct WebRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    window: web_sys::Window,
    images: HashMap<&'static str, HtmlImageElement>,
    last_render_time: f64,
    pending_input: Rc<RefCell<VecDeque<Input>>>,
}

impl WebRenderer {
    pub fn new(canvas_id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        canvas.set_width(BOARD_WIDTH as u32);
        canvas.set_height(BOARD_HEIGHT as u32);

        Ok(Self {
            canvas,
            context,
            window,
            images: HashMap::new(),
            last_render_time: 0.0,
            pending_input: Rc::new(RefCell::new(VecDeque::new())),
        })
    }

    fn load_images(&mut self) -> Result<(), JsValue> {
        let paths = Sprite::ALL
            .iter()
            .map(|sprite| sprite.path())
            .chain([WATER_BLOCK, STONE_BLOCK, GRASS_BLOCK]);
        for path in paths {
            let image = HtmlImageElement::new()?;
            image.set_src(path);
            self.images.insert(path, image);
        }
        log::info!("requested {} images", self.images.len());
        Ok(())
    }

    fn setup_keyboard_listener(&self) -> Result<(), JsValue> {
        let pending_input = self.pending_input.clone();

        let on_keyup = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(intent) = intent_for_key(event.key().as_str()) {
                pending_input.borrow_mut().push_back(Input::Intent(intent));
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        // Keeps arrow keys and Space from scrolling the page
        let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if intent_for_key(event.key().as_str()).is_some() {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        self.window
            .add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())?;
        self.window
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;

        // Keep listeners alive
        on_keyup.forget();
        on_keydown.forget();
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.window
            .performance()
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    /// Draws an image once it has finished loading; skipped until then.
    fn draw_image(&self, path: &str, x: f64, y: f64) -> Result<(), JsValue> {
        match self.images.get(path) {
            Some(image) if image.complete() => {
                self.context.draw_image_with_html_image_element(image, x, y)
            }
            _ => Ok(()),
        }
    }

    fn draw_board(&self) -> Result<(), JsValue> {
        for (row, path) in ROW_IMAGES.iter().enumerate() {
            for col in 0..BOARD_COLUMNS {
                self.draw_image(path, col as f64 * TILE_WIDTH, row as f64 * TILE_HEIGHT)?;
            }
        }
        Ok(())
    }

    fn draw_text(&self, text: &str, font: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.context.set_font(font);
        self.context.set_fill_style_str("#000000");
        self.context.fill_text(text, x, y)
    }
}

impl Renderer for WebRenderer {
    fn init(&mut self) -> io::Result<()> {
        self.load_images().map_err(js_error)?;
        self.setup_keyboard_listener().map_err(js_error)?;
        self.last_render_time = self.current_time();
        Ok(())
    }

    fn render(&mut self, game: &Game) -> io::Result<()> {
        let now = self.current_time();

        // Frame rate limiting
        if now - self.last_render_time < TARGET_FRAME_TIME {
            return Ok(());
        }
        self.last_render_time = now;

        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.draw_board().map_err(js_error)?;

        for drawable in game.render() {
            let drawn = match &drawable {
                Drawable::Image { sprite, x, y } => self.draw_image(sprite.path(), *x, *y),
                Drawable::Text { text, font, x, y } => self.draw_text(text, font, *x, *y),
            };
            drawn.map_err(js_error)?;
        }

        Ok(())
    }

    fn cleanup(&mut self) -> io::Result<()> {
        // No cleanup needed for web
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<Option<Input>> {
        Ok(self.pending_input.borrow_mut().pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_both_confirm() {
        assert_eq!(intent_for_key("Enter"), Some(Intent::Confirm));
        assert_eq!(intent_for_key(" "), Some(Intent::Confirm));
        assert_eq!(intent_for_key("ArrowUp"), Some(Intent::Up));
        assert_eq!(intent_for_key("x"), None);
    }
}
