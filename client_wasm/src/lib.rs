//! Browser client for the lane dodger
//!
//! Draws with the canvas 2D API and drives `game_core` from
//! requestAnimationFrame. Page layout expected:
//! `#gameCanvas`, `#gameOver` (toggled with the `hidden` class),
//! `#scoreText` inside it and a `#restartBtn`.

pub mod settings;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod frame_loop;
#[cfg(target_arch = "wasm32")]
mod input;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod overlay;

#[cfg(target_arch = "wasm32")]
pub use wasm::start_game;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use game_core::GameEngine;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::canvas::CanvasSurface;
    use crate::frame_loop::App;
    use crate::input::setup_input_listeners;
    use crate::logging;
    use crate::overlay::{element_by_id, DomOverlay};
    use crate::settings::resolve_config;

    const CANVAS_ID: &str = "gameCanvas";
    const PANEL_ID: &str = "gameOver";
    const SCORE_TEXT_ID: &str = "scoreText";
    const RESTART_ID: &str = "restartBtn";

    fn js_error<E: Into<String>>(msg: E) -> JsValue {
        JsValue::from_str(&msg.into())
    }

    /// Start a game on the current page.
    ///
    /// `config_json` optionally overrides any tuning field, e.g.
    /// `{"player_speed": 6, "score_label": "Pontuação"}`.
    #[wasm_bindgen]
    pub fn start_game(config_json: Option<String>) -> Result<(), JsValue> {
        logging::init();

        let window = web_sys::window().ok_or(js_error("no global `window`"))?;
        let document = window.document().ok_or(js_error("no document on window"))?;
        let canvas = element_by_id(&document, CANVAS_ID)?.dyn_into::<HtmlCanvasElement>()?;

        let config = resolve_config(config_json.as_deref(), (canvas.width(), canvas.height()))
            .map_err(|e| js_error(e.to_string()))?;
        let seed = js_sys::Date::now() as u64;
        let engine = GameEngine::new(config, seed).map_err(|e| js_error(e.to_string()))?;

        let surface = CanvasSurface::new(&canvas)?;
        let mut overlay = DomOverlay::new(&document, PANEL_ID, SCORE_TEXT_ID)?;
        game_core::GameOverPanel::hide(&mut overlay);
        let restart_button = element_by_id(&document, RESTART_ID)?;

        let app = App::launch(window.clone(), engine, surface, overlay);
        setup_input_listeners(&window, &canvas, &restart_button, app)?;

        tracing::info!("lane dodger started");
        Ok(())
    }
}
