//! Roshambo entry point
//!
//! Web: wires DOM events to the screen controller and redraws after each one.
//! Native: plays in the terminal, one command per line.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

    use roshambo::celebration::{CONFETTI_LIFETIME, ConfettiPiece};
    use roshambo::engine::{Choice, Outcome, SeededChoices};
    use roshambo::persistence::LocalStorageStore;
    use roshambo::render::Frame;
    use roshambo::screen::{ScreenController, ViewState};
    use roshambo::settings::Settings;

    type Controller = ScreenController<SeededChoices, LocalStorageStore>;

    /// Game instance holding all state
    struct Game {
        controller: Controller,
        settings: Settings,
        /// Bumped on every view change so stale reveal timers do nothing
        reveal_token: u32,
        last_view: ViewState,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            settings.save();
            let controller = ScreenController::new(
                SeededChoices::from_seed(seed),
                LocalStorageStore,
                &settings,
                seed,
            );
            Self {
                controller,
                settings,
                reveal_token: 0,
                last_view: ViewState::Game,
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_pick(document: &Document, id: &str, choice: Choice) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("data-choice", choice.as_str());
            el.set_text_content(Some(choice.as_str()));
        }
    }

    /// Run `f` after `ms` milliseconds
    fn after_delay(ms: u32, f: impl FnOnce() + 'static) {
        let callback = Closure::once_into_js(f);
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                ms as i32,
            );
        }
    }

    fn spawn_confetti(document: &Document, pieces: &[ConfettiPiece]) {
        let Some(container) = document.get_element_by_id("confetti") else {
            return;
        };
        container.set_inner_html("");
        for piece in pieces {
            let Ok(el) = document.create_element("span") else {
                continue;
            };
            // CSS animates from the launch point; we hand it the landing offset
            let landing = piece.position_at(piece.delay + CONFETTI_LIFETIME);
            let style = format!(
                "left:{:.2}%;top:{:.2}%;width:{:.0}px;height:{:.0}px;background:{};\
                 --dx:{:.2}vw;--dy:{:.2}vh;--spin:{:.0}deg;animation-delay:{:.2}s;animation-duration:{:.1}s",
                piece.pos.x * 100.0,
                piece.pos.y * 100.0,
                piece.size,
                piece.size * 0.4,
                piece.color_css(),
                (landing.x - piece.pos.x) * 100.0,
                (landing.y - piece.pos.y) * 100.0,
                piece.spin,
                piece.delay,
                CONFETTI_LIFETIME,
            );
            let _ = el.set_attribute("style", &style);
            let _ = el.set_attribute("class", "confetti-piece");
            let _ = container.append_child(&el);
        }
    }

    /// Reveal the opponent's pick once the delay expires, unless the view moved on
    fn schedule_reveal(game: Rc<RefCell<Game>>, winner: Option<Outcome>) {
        let (token, delay) = {
            let g = game.borrow();
            (g.reveal_token, g.settings.reveal_delay_ms)
        };
        after_delay(delay, move || {
            if game.borrow().reveal_token != token {
                return;
            }
            let Some(document) = document() else {
                return;
            };
            if let Some(el) = document.get_element_by_id("opponent-pick") {
                let _ = el.class_list().remove_1("pending");
            }
            let winner_id = winner.map(|outcome| match outcome {
                Outcome::Lose => "opponent-pick",
                _ => "player-pick",
            });
            if let Some(el) = winner_id.and_then(|id| document.get_element_by_id(id)) {
                let _ = el.class_list().add_1("winner");
            }
            set_hidden(&document, "result-panel", false);
        });
    }

    /// Redraw after any event
    fn render(game: &Rc<RefCell<Game>>) {
        let Some(document) = document() else {
            log::warn!("No document to render into");
            return;
        };
        let (frame, entered, confetti, celebration_delay) = {
            let mut g = game.borrow_mut();
            let frame = Frame::from_controller(&g.controller);
            let entered = frame.view != g.last_view;
            if entered {
                g.reveal_token = g.reveal_token.wrapping_add(1);
                g.last_view = frame.view;
            }
            (
                frame,
                entered,
                g.controller.confetti().to_vec(),
                g.settings.celebration_delay_ms,
            )
        };

        set_text(&document, "player-score", &frame.score.player_score.to_string());
        set_text(&document, "opponent-score", &frame.score.opponent_score.to_string());
        set_hidden(&document, "game", !frame.shows(ViewState::Game));
        set_hidden(&document, "result", !frame.shows(ViewState::Result));
        set_hidden(&document, "celebration", !frame.shows(ViewState::Celebration));
        set_hidden(&document, "rules-modal", !frame.rules_open);

        if !entered {
            return;
        }

        let winner = frame.winner_highlight();

        match (frame.view, frame.result) {
            (ViewState::Result, Some(panel)) => {
                set_pick(&document, "player-pick", panel.round.player);
                set_pick(&document, "opponent-pick", panel.round.opponent);
                for id in ["player-pick", "opponent-pick"] {
                    if let Some(el) = document.get_element_by_id(id) {
                        let _ = el.class_list().remove_1("winner");
                    }
                }
                if let Some(el) = document.get_element_by_id("opponent-pick") {
                    let _ = el.class_list().add_1("pending");
                }
                set_hidden(&document, "result-panel", true);
                set_text(&document, "result-headline", panel.headline);
                set_text(&document, "result-action", panel.action_label);
                schedule_reveal(game.clone(), winner);
            }
            (ViewState::Celebration, Some(panel)) => {
                set_text(&document, "celebration-action", panel.action_label);
                if let Some(el) = document.get_element_by_id("celebration") {
                    let _ = el.class_list().add_1("entering");
                }
                spawn_confetti(&document, &confetti);
                let token = game.borrow().reveal_token;
                let game = game.clone();
                after_delay(celebration_delay, move || {
                    if game.borrow().reveal_token != token {
                        return;
                    }
                    let el = self::document().and_then(|d| d.get_element_by_id("celebration"));
                    if let Some(el) = el {
                        let _ = el.class_list().remove_1("entering");
                    }
                });
            }
            _ => {
                if let Some(container) = document.get_element_by_id("confetti") {
                    container.set_inner_html("");
                }
            }
        }
    }

    fn on_click(el: &Element, game: Rc<RefCell<Game>>, f: impl Fn(&mut Controller, &MouseEvent) + 'static) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            f(&mut game.borrow_mut().controller, &event);
            render(&game);
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_click_id(
        document: &Document,
        id: &str,
        game: &Rc<RefCell<Game>>,
        f: impl Fn(&mut Controller, &MouseEvent) + 'static,
    ) {
        match document.get_element_by_id(id) {
            Some(el) => on_click(&el, game.clone(), f),
            None => log::warn!("Missing element #{}", id),
        }
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Choice buttons: any element with a data-choice attribute
        if let Ok(buttons) = document.query_selector_all("#game [data-choice]") {
            for i in 0..buttons.length() {
                let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                let choice = el
                    .get_attribute("data-choice")
                    .and_then(|s| s.parse::<Choice>().ok());
                match choice {
                    Some(choice) => on_click(&el, game.clone(), move |c, _| {
                        c.choose_option(choice);
                    }),
                    None => log::warn!("Choice button without a valid data-choice"),
                }
            }
        }

        on_click_id(document, "result-action", &game, |c, _| c.advance());
        on_click_id(document, "celebration-action", &game, |c, _| c.advance());
        on_click_id(document, "rules-btn", &game, |c, _| c.toggle_rules(true));
        on_click_id(document, "rules-close", &game, |c, _| c.toggle_rules(false));

        // Clicking the backdrop (not the dialog inside it) closes the rules
        on_click_id(document, "rules-modal", &game, |c, event| {
            let on_backdrop = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.id() == "rules-modal");
            if on_backdrop {
                c.toggle_rules(false);
            }
        });

        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                {
                    let mut g = game.borrow_mut();
                    match event.key().as_str() {
                        "Escape" => g.controller.toggle_rules(false),
                        key => match key.parse::<Choice>() {
                            Ok(choice) => {
                                g.controller.choose_option(choice);
                            }
                            Err(_) => return,
                        },
                    }
                }
                render(&game);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Roshambo starting...");

        let document = document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Seeded with {}", seed);

        setup_input_handlers(&document, game.clone());
        render(&game);

        log::info!("Roshambo running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{self, BufRead};
    use std::time::{SystemTime, UNIX_EPOCH};

    use roshambo::engine::{Choice, SeededChoices};
    use roshambo::persistence::FileStore;
    use roshambo::render::Frame;
    use roshambo::screen::{ScreenController, ViewState};
    use roshambo::settings::Settings;

    env_logger::init();
    log::info!("Roshambo (native) starting...");

    let settings = Settings::load();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let store = FileStore::in_dir(".");
    log::info!("Scores stored in {}", store.path().display());

    let mut controller =
        ScreenController::new(SeededChoices::from_seed(seed), store, &settings, seed);

    println!("Commands: rock|paper|scissors (r/p/s), next, rules, close, quit\n");
    println!("{}", Frame::from_controller(&controller));

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        match line.trim().to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "next" | "n" => controller.advance(),
            "rules" | "?" => controller.toggle_rules(true),
            "close" | "esc" => controller.toggle_rules(false),
            other => match other.parse::<Choice>() {
                Ok(choice) => {
                    if controller.choose_option(choice).is_none() {
                        println!("Finish this round first (next)");
                    }
                }
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
        }

        println!("{}", Frame::from_controller(&controller));
        if controller.view() == ViewState::Celebration {
            for row in controller.confetti().chunks(20).take(3) {
                let line: String = row.iter().map(|p| ['*', '+', 'o', '~', '.'][p.color % 5]).collect();
                println!("  {}", line);
            }
        }
    }

    log::info!("Bye");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
