use crate::{Game, Input, Renderer, WebRenderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Longest frame gap fed to the game, in seconds. Keeps a backgrounded tab
/// from teleporting enemies when it comes back.
const MAX_FRAME_DT: f64 = 0.25;

struct GameLoop {
    game: Game,
    renderer: WebRenderer,
    last_frame: f64,
}

impl GameLoop {
    fn new(now: f64) -> Result<Self, JsValue> {
        let game = Game::new();
        let mut renderer = WebRenderer::new("gameCanvas")?;
        renderer.init().map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            game,
            renderer,
            last_frame: now,
        })
    }

    fn update_frame(&mut self, current_time: f64) -> Result<(), JsValue> {
        // Drain input queued since the last frame
        while let Some(input) = self
            .renderer
            .poll_input()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
        {
            match input {
                Input::Intent(intent) => self.game.handle_input(intent),
                // Nothing to quit to in a browser tab
                Input::Quit => log::info!("quit ignored in browser"),
            }
        }

        let dt = ((current_time - self.last_frame) / 1000.0).clamp(0.0, MAX_FRAME_DT);
        self.last_frame = current_time;

        self.game.update(dt);
        self.game.advance_timer(dt);

        // Render (renderer manages its own frame rate)
        self.renderer
            .render(&self.game)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(())
    }
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    window.request_animation_frame(f.as_ref().unchecked_ref())?;
    Ok(())
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();
    // A second call (page re-init) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("starting crossing");

    let window = web_sys::window().ok_or("no window")?;
    let performance = window.performance().ok_or("no performance")?;

    let game_loop = Rc::new(RefCell::new(GameLoop::new(performance.now())?));

    // Create closure for animation frame
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let game_loop_clone = game_loop.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let current_time = performance.now();

        if let Err(e) = game_loop_clone.borrow_mut().update_frame(current_time) {
            log::error!("frame failed: {:?}", e);
            return; // Stop loop on error
        }

        // Schedule next frame
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(next) {
                log::error!("could not schedule next frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        request_animation_frame(first)?;
    }

    log::info!("game loop started");

    Ok(())
}
