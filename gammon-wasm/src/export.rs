use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, Event, HtmlElement, Url};

use crate::constants::EXPORT_FILE_NAME;
use crate::state::State;
use crate::utils::{log, to_js};

/// Render the current board off-screen and offer it as a PNG download.
pub fn export_png(state: &State) -> Result<(), JsValue> {
    let view = &state.view;
    let bytes =
        snapshot_core::render_png(view.board(), view.width(), view.palette()).map_err(to_js)?;

    let array = js_sys::Array::new();
    let u8 = js_sys::Uint8Array::from(bytes.as_slice());
    array.push(&u8);
    let blob = Blob::new_with_u8_array_sequence(&array)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let a = state
        .document
        .create_element("a")?
        .dyn_into::<HtmlElement>()?;
    a.set_attribute("href", &url)?;
    a.set_attribute("download", EXPORT_FILE_NAME)?;
    a.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Wire `<button id="export">` to [`export_png`].
pub fn attach_export_button(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    let Some(button) = doc.get_element_by_id("export") else {
        return Ok(());
    };
    let button: HtmlElement = button.dyn_into()?;
    let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        if let Err(e) = export_png(&state.borrow()) {
            log(&format!("PNG export failed: {e:?}"));
        }
    }));
    button.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
    Ok(())
}
