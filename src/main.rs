#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use crossing::{CliRenderer, Game, Input, Renderer};
    use std::time::Instant;

    // Off by default; the game owns the terminal. Set RUST_LOG and redirect
    // stderr to a file to see the log.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let mut game = Game::new();
    let mut renderer = CliRenderer::new();

    renderer.init()?;
    log::info!("terminal front-end started");

    let mut last_frame = Instant::now();

    loop {
        // Poll for input
        if let Some(input) = renderer.poll_input()? {
            match input {
                Input::Intent(intent) => game.handle_input(intent),
                Input::Quit => break,
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        game.update(dt);
        game.advance_timer(dt);

        // Let renderer decide when to actually render
        // (it manages its own frame rate internally)
        renderer.render(&game)?;
    }

    renderer.cleanup()?;
    log::info!("terminal front-end stopped");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
