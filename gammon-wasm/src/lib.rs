//! Browser embedding of the backgammon board.
//!
//! `start` mounts a board on `<canvas id="cv">` when the page has one and
//! configures it from the query string (`w`, `p`, `fit`). Pages that need
//! more control construct a [`BackgammonBoard`] themselves.

use std::cell::RefCell;
use std::rc::Rc;

use gammon_core::{Board, BoardView, Palette, Player};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod canvas;
mod constants;
mod export;
mod resize;
mod state;
mod upload;
mod utils;

use crate::canvas::CanvasSurface;
use crate::constants::{CANVAS_ID, DEFAULT_WIDTH_PX};
use crate::state::{STATE, State};
use crate::utils::{asset_url, fetch_text_with_fallbacks, get_query_param, log, to_js};

fn mount(
    window: Window,
    document: Document,
    canvas_id: &str,
    width: f64,
    fit: bool,
) -> Result<Rc<RefCell<State>>, JsValue> {
    let surface = CanvasSurface::from_id(&document, canvas_id)?;
    let view = BoardView::mount(surface, width).map_err(to_js)?;
    Ok(Rc::new(RefCell::new(State {
        window,
        document,
        view,
        fit,
        resize_timer: None,
    })))
}

fn parse_player(name: &str) -> Result<Player, JsValue> {
    serde_json::from_value(serde_json::Value::String(name.trim().to_ascii_lowercase()))
        .map_err(|_| JsValue::from_str(&format!("unknown player '{name}'")))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    if document.get_element_by_id(CANVAS_ID).is_none() {
        return Ok(());
    }

    let search = window.location().search().unwrap_or_default();
    let width = get_query_param(&search, "w")
        .and_then(|w| w.parse::<f64>().ok())
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(DEFAULT_WIDTH_PX);
    let fit = get_query_param(&search, "fit").is_some_and(|v| v == "1");

    let state = mount(window, document, CANVAS_ID, width, fit)?;
    STATE.with(|st| *st.borrow_mut() = Some(state.clone()));
    upload::attach_file_input(state.clone())?;
    export::attach_export_button(state.clone())?;
    resize::attach_resize(state.clone())?;
    if fit {
        resize::fit_to_container(&state);
    }

    // If URL param p is set, fetch positions/<p>.json; the empty board stays until it arrives.
    if let Some(p) = get_query_param(&search, "p") {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = fetch_and_load_position(&state, &p).await {
                log(&format!("Failed to load position '{}': {:?}", p, err));
            }
        });
    }
    Ok(())
}

async fn fetch_and_load_position(state: &Rc<RefCell<State>>, name: &str) -> Result<(), JsValue> {
    let window = state.borrow().window.clone();
    let urls = [asset_url(&format!("positions/{name}.json")), asset_url(name)];
    let text = fetch_text_with_fallbacks(&window, &urls)
        .await
        .ok_or_else(|| JsValue::from_str("position not found"))?;
    let board = Board::from_json(&text).map_err(to_js)?;
    state.borrow_mut().view.replace_board(board).map_err(to_js)
}

/// The board `start` mounted on the page canvas, if any.
#[wasm_bindgen]
pub fn page_board() -> Option<BackgammonBoard> {
    STATE.with(|st| {
        st.borrow()
            .as_ref()
            .map(|state| BackgammonBoard { state: state.clone() })
    })
}

/// An embeddable board bound to one canvas element.
#[wasm_bindgen]
pub struct BackgammonBoard {
    state: Rc<RefCell<State>>,
}

#[wasm_bindgen]
impl BackgammonBoard {
    /// Mount an empty board on `<canvas id=canvas_id>`, `width` pixels wide.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, width: f64) -> Result<BackgammonBoard, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let state = mount(window, document, canvas_id, width, false)?;
        Ok(BackgammonBoard { state })
    }

    pub fn width(&self) -> f64 {
        self.state.borrow().view.width()
    }

    pub fn height(&self) -> f64 {
        self.state.borrow().view.height()
    }

    pub fn set_width(&self, width: f64) -> Result<(), JsValue> {
        self.state.borrow_mut().view.set_width(width).map_err(to_js)
    }

    /// Replace the whole position from a JSON document.
    pub fn set_position_json(&self, json: &str) -> Result<(), JsValue> {
        let board = Board::from_json(json).map_err(to_js)?;
        self.state.borrow_mut().view.replace_board(board).map_err(to_js)
    }

    pub fn position_json(&self) -> Result<String, JsValue> {
        self.state.borrow().view.board().to_json().map_err(to_js)
    }

    /// `"white"` or `"black"`; Black turns the board around.
    pub fn set_active_player(&self, player: &str) -> Result<(), JsValue> {
        let player = parse_player(player)?;
        self.state
            .borrow_mut()
            .view
            .set_active_player(player)
            .map_err(to_js)
    }

    pub fn set_palette_json(&self, json: &str) -> Result<(), JsValue> {
        let palette = Palette::from_json(json).map_err(to_js)?;
        self.state.borrow_mut().view.set_palette(palette).map_err(to_js)
    }

    pub fn export_png(&self) -> Result<(), JsValue> {
        export::export_png(&self.state.borrow())
    }
}
