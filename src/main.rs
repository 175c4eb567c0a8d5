//! Lane Leap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use lane_leap::renderer::{RenderState, scene};
    use lane_leap::sim::{Clock, GamePhase, GameState, InputEvent, handle_input, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: RenderState,
        clock: Clock,
        /// Events collected between frames, applied before the next tick
        pending: Vec<InputEvent>,
    }

    impl Game {
        fn new(seed: u64, render_state: RenderState) -> Self {
            Self {
                state: GameState::new(seed),
                render_state,
                clock: Clock::new(),
                pending: Vec::new(),
            }
        }

        /// One animation frame: drain input, step the simulation, draw.
        /// Returns false once a quit input has been honored.
        fn frame(&mut self, time_ms: f64) -> bool {
            let dt = self.clock.delta_seconds(time_ms / 1000.0);

            for event in self.pending.drain(..) {
                handle_input(&mut self.state, event);
            }
            if self.state.quit_requested {
                log::info!("shutting down");
                return false;
            }

            tick(&mut self.state, dt);

            let vertices = scene(&self.state.snapshot());
            match self.render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    return false;
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }

            self.update_hud();
            true
        }

        /// Mirror phase, level, and score into the DOM overlay
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-level") {
                el.set_text_content(Some(&self.state.level.to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            let overlays = [
                ("start-screen", GamePhase::StartScreen),
                ("level-complete", GamePhase::LevelComplete),
                ("game-over", GamePhase::GameOver),
            ];
            for (id, phase) in overlays {
                if let Some(el) = document.get_element_by_id(id) {
                    if self.state.phase == phase {
                        let _ = el.class_list().remove_1("hidden");
                    } else {
                        let _ = el.class_list().add_1("hidden");
                    }
                }
            }
        }
    }

    /// Map a keyboard event to a simulation input
    fn map_key(key: &str) -> Option<InputEvent> {
        match key {
            "ArrowUp" => Some(InputEvent::MoveUp),
            "ArrowDown" => Some(InputEvent::MoveDown),
            "ArrowLeft" => Some(InputEvent::MoveLeft),
            "ArrowRight" => Some(InputEvent::MoveRight),
            " " => Some(InputEvent::Start),
            "l" | "L" => Some(InputEvent::AdvanceLevel),
            "q" | "Q" => Some(InputEvent::Quit),
            _ => None,
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(input) = map_key(&event.key()) {
                event.prevent_default();
                game.borrow_mut().pending.push(input);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start_frame_loop(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        let cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let cb_clone = cb.clone();

        *cb.borrow_mut() = Some(Closure::new(move |time_ms: f64| {
            let keep_going = game.borrow_mut().frame(time_ms);
            if keep_going {
                let window = web_sys::window().expect("no window");
                if let Some(ref closure) = *cb_clone.borrow() {
                    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                }
            }
        }));

        if let Some(ref closure) = *cb.borrow() {
            let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no #canvas element")
            .dyn_into()
            .expect("#canvas is not a canvas");
        let (width, height) = (canvas.width(), canvas.height());

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .expect("create surface");
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("no suitable GPU adapter");

        let render_state = RenderState::new(surface, &adapter, width, height).await;

        let seed = js_sys::Date::now() as u64;
        log::info!("Lane Leap starting with seed {}", seed);

        let game = Rc::new(RefCell::new(Game::new(seed, render_state)));
        setup_keyboard(game.clone());
        start_frame_loop(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Leap (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a short scripted session at a fixed 60 Hz cadence and dump the result
#[cfg(not(target_arch = "wasm32"))]
fn run_demo() {
    use lane_leap::sim::{Clock, GamePhase, GameState, InputEvent, handle_input, tick};

    let mut state = GameState::new(0xC0FFEE);
    let mut clock = Clock::new();
    handle_input(&mut state, InputEvent::Start);

    // Hop toward the goal once a second; the run ends on a win or a collision
    for frame in 0..600u32 {
        let dt = clock.delta_seconds(frame as f64 / 60.0);
        if frame % 60 == 59 {
            handle_input(&mut state, InputEvent::MoveUp);
        }
        tick(&mut state, dt);
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    log::info!(
        "demo finished: {:?}, level {}, score {}, {} vehicles live",
        state.phase,
        state.level,
        state.score,
        state.obstacles.len()
    );
    match serde_json::to_string(&state.snapshot()) {
        Ok(json) => log::debug!("final snapshot: {}", json),
        Err(e) => log::warn!("snapshot serialization failed: {}", e),
    }
}
