//! Penalty Kick entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent, MouseEvent};

    use penalty_kick::GameConfig;
    use penalty_kick::platform::FrameClock;
    use penalty_kick::render::{self, dom::Stage};
    use penalty_kick::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FrameClock,
        input: TickInput,
        stage: Stage,
    }

    impl Game {
        fn new(config: GameConfig, stage: Stage) -> Self {
            Self {
                state: GameState::new(config),
                clock: FrameClock::new(),
                input: TickInput::default(),
                stage,
            }
        }

        /// Run due simulation ticks and hand back what happened
        fn update(&mut self, time: f64) -> Vec<GameEvent> {
            let elapsed = self.clock.frame(time);
            let input = std::mem::take(&mut self.input);
            tick(&mut self.state, &input, elapsed);
            self.state.drain_events()
        }

        fn draw(&self) {
            self.stage.draw(&render::frame(&self.state));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Penalty Kick starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(stage) = Stage::attach(&document) else {
            log::error!("Game elements not found, not starting");
            return;
        };

        let config = GameConfig::load();
        let game = Rc::new(RefCell::new(Game::new(config, stage)));
        game.borrow().draw();

        setup_input_handlers(&document, game.clone());

        request_animation_frame(game);

        log::info!("Penalty Kick running!");
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Keyboard: kick
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let command = g.state.config.controls.command_for_key(&event.key());
                if let Some(command) = command {
                    event.prevent_default();
                    command.apply(&mut g.input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Double-click anywhere: reset
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if let Some(command) = g.state.config.controls.command_for_double_click() {
                    command.apply(&mut g.input);
                }
            });
            let _ = document
                .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let events = {
            let mut g = game.borrow_mut();
            let events = g.update(time);
            g.draw();
            events
        };

        // alert() blocks, so it runs with the game borrow released
        for event in events {
            if event == GameEvent::Goal {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("GOAL!");
                }
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use penalty_kick::GameConfig;
    use penalty_kick::platform::Command;
    use penalty_kick::sim::{GameEvent, GameState, TickInput, tick};

    /// Host frame length (about 60 fps)
    const FRAME_MS: u64 = 16;
    /// Pause between one kick's outcome and the next kick
    const KICK_INTERVAL_MS: u64 = 1_300;
    /// Give up on a run that stops producing outcomes
    const MAX_RUN_MS: u64 = 120_000;

    #[derive(Debug, Serialize)]
    pub enum Outcome {
        Goal,
        /// Keeper number, 1-based
        Saved(usize),
    }

    #[derive(Debug, Serialize)]
    pub struct KickRecord {
        pub kicked_at_ms: u64,
        pub resolved_at_ms: u64,
        pub outcome: Outcome,
    }

    /// Play `kicks` penalties against the configured keepers
    pub fn run(config: GameConfig, kicks: usize) -> Vec<KickRecord> {
        let mut state = GameState::new(config);
        let mut records = Vec::with_capacity(kicks);
        let mut in_flight: Option<u64> = None;
        let mut next_kick_at = KICK_INTERVAL_MS / 4;

        while records.len() < kicks && state.time_ms < MAX_RUN_MS {
            let mut input = TickInput::default();
            if in_flight.is_none() && state.time_ms >= next_kick_at && !state.awaiting_reset() {
                Command::Reset.apply(&mut input);
                Command::Kick.apply(&mut input);
                in_flight = Some(state.time_ms);
            }

            tick(&mut state, &input, FRAME_MS);

            for event in state.drain_events() {
                log::info!("[{:>6} ms] {:?}", state.time_ms, event);
                let outcome = match event {
                    GameEvent::Goal => Outcome::Goal,
                    GameEvent::Saved { keeper } => Outcome::Saved(keeper + 1),
                    _ => continue,
                };
                if let Some(kicked_at_ms) = in_flight.take() {
                    records.push(KickRecord {
                        kicked_at_ms,
                        resolved_at_ms: state.time_ms,
                        outcome,
                    });
                    next_kick_at = state.time_ms + KICK_INTERVAL_MS;
                }
            }
        }

        if records.len() < kicks {
            log::warn!(
                "Stopped after {} ms with {} of {} kicks resolved",
                state.time_ms,
                records.len(),
                kicks
            );
        }
        records
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_every_kick_resolves() {
            let records = run(GameConfig::default(), 3);
            assert_eq!(records.len(), 3);
            for pair in records.windows(2) {
                assert!(pair[1].kicked_at_ms >= pair[0].resolved_at_ms + KICK_INTERVAL_MS);
            }
            for record in &records {
                assert!(record.resolved_at_ms > record.kicked_at_ms);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Penalty Kick (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let config = penalty_kick::GameConfig::load(path.as_deref());

    let records = headless::run(config, 5);
    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode results: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
