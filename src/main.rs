//! CyberDefender entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use cyber_defender::Settings;
    use cyber_defender::consts::*;
    use cyber_defender::sim::{GamePhase, GameState, Lane, TickInput, tick};

    /// Tutorial copy, one entry per step
    const TUTORIAL_STEPS: [&str; 6] = [
        "Welcome to CyberDefender! Your mission is to protect the network from cyber threats.",
        "Threats will appear at the bottom of each column. Click the shield buttons to neutralize them.",
        "Different threats have different point values. The faster you react, the higher your score!",
        "Watch out for power-ups! They'll give you temporary advantages.",
        "The game gets harder as you progress. How long can you keep the network safe?",
        "Ready to start? Click 'Start Game' to begin your cybersecurity adventure!",
    ];

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        tutorial_step: usize,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                input: TickInput::default(),
                settings: Settings::load(),
                accumulator: 0.0,
                last_time: 0.0,
                tutorial_step: 0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.input;
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input = TickInput::default();
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Advance the tutorial one step; the last step dismisses it
        fn advance_tutorial(&mut self) {
            if self.tutorial_step + 1 < TUTORIAL_STEPS.len() {
                self.tutorial_step += 1;
            } else {
                self.input.dismiss_tutorial = true;
            }
        }

        /// Render the lanes, HUD, and overlays into the DOM
        fn render(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Score / level counters
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-level .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.level.to_string()));
            }

            // FPS counter
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    if let Some(val) = document.query_selector("#hud-fps .hud-value").ok().flatten()
                    {
                        val.set_text_content(Some(&self.fps.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Lane columns: one glyph per unresolved threat, oldest at the bottom
            for lane in Lane::ALL {
                if let Some(el) = document.get_element_by_id(&format!("lane-{}", lane.index())) {
                    let mut html = String::new();
                    for threat in self.state.threats_in_lane(lane) {
                        html.push_str(&format!(
                            "<div class=\"threat {}\">{}</div>",
                            threat.tier.style(),
                            threat.tier.symbol()
                        ));
                    }
                    el.set_inner_html(&html);
                }
            }

            // Defend buttons flip to the shield style while the power-up is up
            let pulse = self.settings.effective_animations();
            let btn_class = match (self.state.shield_active(), pulse) {
                (true, true) => "defend-btn shield pulse",
                (true, false) => "defend-btn shield",
                (false, _) => "defend-btn",
            };
            for lane in Lane::ALL {
                if let Some(btn) = document.get_element_by_id(&format!("defend-{}", lane.index()))
                {
                    let _ = btn.set_attribute("class", btn_class);
                }
            }

            // Tip panel
            if let Some(el) = document.get_element_by_id("fact-panel") {
                match self.state.fact().filter(|_| self.settings.show_tips) {
                    Some(fact) => {
                        let _ = el.set_attribute("class", "");
                        if let Some(text) = document.get_element_by_id("fact-text") {
                            text.set_text_content(Some(fact));
                        }
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }

            // Tutorial overlay
            if let Some(el) = document.get_element_by_id("tutorial") {
                if self.state.phase == GamePhase::Tutorial {
                    let _ = el.set_attribute("class", "");
                    if let Some(text) = document.get_element_by_id("tutorial-text") {
                        text.set_text_content(Some(TUTORIAL_STEPS[self.tutorial_step]));
                    }
                    if let Some(bar) = document.get_element_by_id("tutorial-progress") {
                        let pct = (self.tutorial_step + 1) * 100 / TUTORIAL_STEPS.len();
                        let _ = bar.set_attribute("style", &format!("width: {pct}%"));
                    }
                    if let Some(next) = document.get_element_by_id("tutorial-next") {
                        let label = if self.tutorial_step + 1 < TUTORIAL_STEPS.len() {
                            "Next"
                        } else {
                            "Start Game"
                        };
                        next.set_text_content(Some(label));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Game over overlay
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.is_over() {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("CyberDefender starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Accessibility classes apply to the whole page
        if let Some(body) = document.body() {
            let g = game.borrow();
            let mut classes: Vec<&str> = Vec::new();
            if g.settings.high_contrast {
                classes.push("high-contrast");
            }
            if g.settings.reduced_motion {
                classes.push("reduced-motion");
            }
            let _ = body.set_attribute("class", &classes.join(" "));
        }

        // Set up input handlers
        setup_defend_buttons(game.clone());
        setup_tutorial_buttons(game.clone());
        setup_restart_button(game.clone());
        setup_keyboard(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("CyberDefender running!");
    }

    fn setup_defend_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for lane in Lane::ALL {
            if let Some(btn) = document.get_element_by_id(&format!("defend-{}", lane.index())) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    game.borrow_mut().input.defend = Some(lane);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_tutorial_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("tutorial-skip") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.dismiss_tutorial = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("tutorial-next") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().advance_tutorial();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input.reset = true;
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "1" => g.input.defend = Lane::from_index(0),
                "2" => g.input.defend = Lane::from_index(1),
                "3" => g.input.defend = Lane::from_index(2),
                "Enter" => {
                    if g.state.phase == GamePhase::Tutorial {
                        g.advance_tutorial();
                    }
                }
                "r" | "R" => {
                    if g.state.is_over() {
                        g.input.reset = true;
                    }
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
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
fn main() {
    env_logger::init();
    log::info!("CyberDefender (native) starting...");
    log::info!("The game is browser-hosted - run with `trunk serve` for the web version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use cyber_defender::consts::OVERLOAD_LIMIT;
    use cyber_defender::sim::{GameState, TickInput, tick};

    let mut state = GameState::new(42);
    tick(
        &mut state,
        &TickInput {
            dismiss_tutorial: true,
            ..Default::default()
        },
    );

    let idle = TickInput::default();
    while !state.is_over() {
        tick(&mut state, &idle);
    }

    assert_eq!(state.threats.len(), OVERLOAD_LIMIT);
    println!(
        "✓ Undefended network overloads after {} ticks",
        state.time_ticks
    );
}
