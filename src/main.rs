mod app;
mod config;
mod economy;
mod format;
mod generator;
mod logger;
mod render;
mod time;

use std::{cell::RefCell, io, rc::Rc};

use app::VibecodeGame;
use economy::offline::apply_offline_progress;
use economy::state::EconomyState;
use economy::unlock::ToolCatalog;
use ratzilla::event::KeyCode;
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::FixedStep;

/// Monotonic frame clock in ms, falling back to the wall clock.
fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// `/api/generate-tool` on the page origin.
fn generator_endpoint() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}{}", config::GENERATE_TOOL_PATH)
}

fn load_or_new(now_ms: f64) -> VibecodeGame {
    let seed = now_ms.to_bits();
    #[cfg(target_arch = "wasm32")]
    let (catalog, loaded) = {
        let mut catalog = ToolCatalog::new();
        let loaded = economy::save::load_game(&mut catalog, seed);
        (catalog, loaded)
    };
    #[cfg(not(target_arch = "wasm32"))]
    let (catalog, loaded): (ToolCatalog, Option<EconomyState>) = (ToolCatalog::new(), None);

    let mut state = loaded.unwrap_or_else(|| EconomyState::new(seed));
    let offline = apply_offline_progress(&mut state, &catalog, now_ms);
    let mut game = VibecodeGame::new(state, catalog, now_ms);
    if let Some(report) = offline {
        game.message = Some(format!(
            "Welcome back! +{} VB while away ({})",
            format::format_number(report.earned),
            format::format_duration(report.seconds)
        ));
    }
    game
}

/// Runs one catalog generation in the background and folds the result
/// back into the game.
fn spawn_generation(game: &Rc<RefCell<VibecodeGame>>) {
    let Some(request) = game.borrow_mut().poll_generation() else {
        return;
    };
    let game = game.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let remote = generator::remote::RemoteGenerator::new(generator_endpoint());
        let outcome =
            generator::generate_with_fallback(&remote, &generator::local::LocalGenerator, &request)
                .await;
        let mut gs = game.borrow_mut();
        gs.now_ms = js_sys::Date::now();
        gs.finish_generation(outcome);
        #[cfg(target_arch = "wasm32")]
        {
            let now_ms = gs.now_ms;
            let VibecodeGame { state, catalog, .. } = &mut *gs;
            economy::save::save_game(state, catalog, now_ms);
        }
    });
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let game = Rc::new(RefCell::new(load_or_new(js_sys::Date::now())));
    let clock = Rc::new(RefCell::new(FixedStep::default()));
    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let key = match key_event.code {
                KeyCode::Char(c) => c.to_ascii_lowercase(),
                KeyCode::Enter => '\n',
                KeyCode::Down => 'j',
                KeyCode::Up => 'k',
                _ => return,
            };
            game.borrow_mut().handle_key(key);
        }
    });

    terminal.draw_web(move |f| {
        let ticks = clock.borrow_mut().update(performance_now());
        let autosave = game.borrow_mut().tick(ticks, js_sys::Date::now());

        #[cfg(target_arch = "wasm32")]
        if autosave {
            let mut gs = game.borrow_mut();
            let now_ms = gs.now_ms;
            let VibecodeGame { state, catalog, .. } = &mut *gs;
            economy::save::save_game(state, catalog, now_ms);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = autosave;

        spawn_generation(&game);
        let area = f.area();
        render::render(&game.borrow(), f, area);
    });

    Ok(())
}
