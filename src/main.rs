//! Flash Runner entry point
//!
//! In the browser this wires the canvas, keyboard and a fixed-rate interval
//! timer to the simulation. Natively it runs a headless game with a simple
//! auto-jumper, which is handy for checking tuning changes.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use flash_runner::GameConfig;
    use flash_runner::platform::canvas::CanvasSurface;
    use flash_runner::platform::map_key;
    use flash_runner::renderer::render_scene;
    use flash_runner::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        /// Pending one-shot input for the next tick
        input: TickInput,
    }

    impl Game {
        /// Draw the current frame, then advance one tick
        fn frame(&mut self) {
            render_scene(&self.state, &mut self.surface);

            let input = std::mem::take(&mut self.input);
            for event in tick(&mut self.state, &input) {
                if let GameEvent::GameOver { score } = event {
                    log::info!("Run ended, score {}", score);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flash Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let config = GameConfig {
            canvas_width: canvas.width() as f32,
            canvas_height: canvas.height() as f32,
            seed: js_sys::Date::now() as u64,
            ..GameConfig::default()
        };
        let frame_rate = config.frame_rate;

        let state = match GameState::new(config) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Invalid game config: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", state.seed);

        let mut surface = CanvasSurface::new(ctx);
        surface.preload(&state.config.player.image_sources);

        let game = Rc::new(RefCell::new(Game {
            state,
            surface,
            input: TickInput::default(),
        }));

        setup_input_handlers(game.clone());
        start_loop(game, frame_rate);

        log::info!("Flash Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            if let Some(input) = map_key(&event.code(), g.state.game_over) {
                event.prevent_default();
                g.input.jump |= input.jump;
                g.input.restart |= input.restart;
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_loop(game: Rc<RefCell<Game>>, frame_rate: u32) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().frame();
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            frame_rate as i32,
        ) {
            log::error!("Failed to start game loop: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use flash_runner::GameConfig;
    use flash_runner::renderer::{RecordingSurface, render_scene};
    use flash_runner::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Flash Runner (native, headless) starting...");

    // Usage: flash-runner [config.json] [max_ticks]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path))?;
            GameConfig::from_json(&json).with_context(|| format!("invalid config {}", path))?
        }
        None => GameConfig::default(),
    };
    let max_ticks: u64 = match args.next() {
        Some(n) => n.parse().context("max_ticks must be a number")?,
        None => 100_000,
    };

    let mut state = GameState::new(config)?;
    let mut surface = RecordingSurface::new();
    let mut spawned = 0u32;

    for _ in 0..max_ticks {
        surface.clear();
        render_scene(&state, &mut surface);

        let input = TickInput {
            jump: should_jump(&state),
            restart: false,
        };
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::ObstacleSpawned { .. } => spawned += 1,
                GameEvent::GameOver { score } => log::info!("Game over at score {}", score),
                _ => {}
            }
        }
        if state.game_over {
            break;
        }
    }

    println!(
        "score: {} ({} obstacles spawned, game over: {})",
        state.score, spawned, state.game_over
    );
    Ok(())
}

/// Jump when the nearest obstacle ahead is within a short lead distance
#[cfg(not(target_arch = "wasm32"))]
fn should_jump(state: &flash_runner::sim::GameState) -> bool {
    let player = &state.player.collider;
    let front = player.position.x() + player.width;
    let lead = state.spawner.speed * 8.0;
    state
        .spawner
        .active_obstacles()
        .map(|o| o.x() - front)
        .any(|dist| dist >= 0.0 && dist <= lead)
}
