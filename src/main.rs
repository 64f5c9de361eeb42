//! Canvas Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use canvas_shooter::platform::{AnimationFrame, Hud, Interval};
    use canvas_shooter::renderer::{CanvasSurface, Surface, draw_frame};
    use canvas_shooter::sim::{Arena, GameEvent, GameState, spawn_enemy, tick};
    use canvas_shooter::{GameConfig, StartupError};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        hud: Hud,
        frame: AnimationFrame,
        spawner: Option<Interval>,
    }

    impl Game {
        /// Reset the session and the HUD for a new run
        fn start(&mut self) {
            self.state.start();
            self.hud.set_score(0);
            self.hud.set_final_score(0);
            self.surface
                .clear(self.state.arena.width, self.state.arena.height);
            self.hud.show_start_modal(false);
        }

        /// Push simulation events out to the page
        fn handle_events(&mut self, events: Vec<GameEvent>) {
            for event in events {
                match event {
                    GameEvent::ScoreChanged { score } => self.hud.set_score(score),
                    GameEvent::GameOver { final_score } => {
                        self.frame.cancel();
                        if let Some(spawner) = self.spawner.as_mut() {
                            spawner.cancel();
                        }
                        self.hud.set_final_score(final_score);
                        self.hud.show_start_modal(true);
                    }
                    GameEvent::EnemyShrunk { .. } | GameEvent::EnemyDestroyed { .. } => {}
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| StartupError::Js(e.to_string()))?;

        log::info!("Canvas Shooter starting...");

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;
        let hud = Hud::find(&document)?;

        // Sized once at launch; window resizes are ignored
        let width = window
            .inner_width()?
            .as_f64()
            .ok_or_else(|| StartupError::Js("innerWidth is not a number".into()))?;
        let height = window
            .inner_height()?
            .as_f64()
            .ok_or_else(|| StartupError::Js("innerHeight is not a number".into()))?;
        hud.canvas.set_width(width as u32);
        hud.canvas.set_height(height as u32);

        let surface = CanvasSurface::new(&hud.canvas)?;
        let config = GameConfig::load();
        let seed = js_sys::Date::now() as u64;
        let arena = Arena::new(width as f32, height as f32);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(arena, config, seed),
            surface,
            hud,
            frame: AnimationFrame::default(),
            spawner: None,
        }));

        log::info!(
            "Arena {}x{}, seed {}",
            width as u32,
            height as u32,
            seed
        );

        setup_start_button(game.clone())?;
        setup_fire_handler(game)?;

        Ok(())
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let button = game.borrow().hud.start_button.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            start_session(&game);
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_fire_handler(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let target = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            game.borrow_mut().state.fire(target);
        });
        window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_session(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.frame.cancel();
            g.start();

            let period = g.state.config.spawn_period_ms;
            let weak = Rc::downgrade(game);
            let spawner = Interval::start(period, move || {
                let Some(game) = weak.upgrade() else {
                    return;
                };
                let mut g = game.borrow_mut();
                if spawn_enemy(&mut g.state).is_none() {
                    if let Some(spawner) = g.spawner.as_mut() {
                        spawner.cancel();
                    }
                }
            });
            match spawner {
                Ok(spawner) => g.spawner = Some(spawner),
                Err(e) => log::error!("Failed to start spawner: {e}"),
            }
        }

        request_frame(game);
    }

    fn request_frame(game: &Rc<RefCell<Game>>) {
        let next = game.clone();
        let requested = game
            .borrow_mut()
            .frame
            .request(move |_time: f64| game_loop(next));
        if let Err(e) = requested {
            log::error!("Failed to schedule frame: {e}");
        }
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let playing = {
            let mut g = game.borrow_mut();
            g.frame.fired();

            let events = tick(&mut g.state);
            let Game { state, surface, .. } = &mut *g;
            draw_frame(surface, state);
            g.handle_events(events);

            g.state.is_playing()
        };

        if playing {
            request_frame(&game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().inspect_err(|e| log::error!("Startup failed: {:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_shooter::GameConfig;

    env_logger::init();
    log::info!("Canvas Shooter (native) starting...");
    log::info!("Native mode runs a headless autoplay session - run with `trunk serve` for web version");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load_file(&path) {
            Ok(config) => {
                log::info!("Loaded game config from {path}");
                config
            }
            Err(e) => {
                log::warn!("Ignoring game config {path}: {e}");
                GameConfig::default()
            }
        },
        None => GameConfig::default(),
    };

    let report = headless::autoplay(config, 0x5eed, 60 * 60 * 5);
    println!(
        "Autoplay finished after {} frames: score {}, {} enemies destroyed, {}",
        report.frames,
        report.score,
        report.destroyed,
        if report.game_over { "game over" } else { "survived" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use canvas_shooter::GameConfig;
    use canvas_shooter::consts::FRAME_MS;
    use canvas_shooter::sim::{Arena, GameEvent, GameState, SpawnClock, spawn_enemy, tick};

    /// Frames between autoplay shots
    const FIRE_INTERVAL: u64 = 8;

    pub struct Report {
        pub frames: u64,
        pub score: u64,
        pub destroyed: u32,
        pub game_over: bool,
    }

    /// Play one session on an 800x600 arena, firing at the nearest enemy
    pub fn autoplay(config: GameConfig, seed: u64, max_frames: u64) -> Report {
        let mut clock = SpawnClock::new(config.spawn_period_ms);
        let mut state = GameState::new(Arena::new(800.0, 600.0), config, seed);
        state.start();

        let mut destroyed = 0;
        while state.is_playing() && state.frame < max_frames {
            for _ in 0..clock.advance(FRAME_MS) {
                spawn_enemy(&mut state);
            }

            if state.frame % FIRE_INTERVAL == 0 {
                let center = state.arena.center();
                let nearest = state
                    .enemies
                    .iter()
                    .min_by(|a, b| {
                        a.body
                            .pos
                            .distance_squared(center)
                            .total_cmp(&b.body.pos.distance_squared(center))
                    })
                    .map(|e| e.body.pos);
                if let Some(target) = nearest {
                    state.fire(target);
                }
            }

            for event in tick(&mut state) {
                if let GameEvent::EnemyDestroyed { .. } = event {
                    destroyed += 1;
                }
            }
        }

        Report {
            frames: state.frame,
            score: state.score,
            destroyed,
            game_over: !state.is_playing(),
        }
    }
}
