use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::state::State;
use crate::utils::log;

/// Repaint at the container width once window resizing has settled.
pub fn attach_resize(state: Rc<RefCell<State>>) -> Result<(), JsValue> {
    let window = state.borrow().window.clone();
    let onresize = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        schedule_fit(&state);
    }));
    window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
    onresize.forget();
    Ok(())
}

fn schedule_fit(state: &Rc<RefCell<State>>) {
    let mut s = state.borrow_mut();
    if !s.fit {
        return;
    }
    if let Some(id) = s.resize_timer.take() {
        s.window.clear_timeout_with_handle(id);
    }
    let st = state.clone();
    let callback = Closure::once_into_js(move || fit_to_container(&st));
    let scheduled = s.window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        RESIZE_DEBOUNCE_MS,
    );
    match scheduled {
        Ok(id) => s.resize_timer = Some(id),
        Err(e) => log(&format!("Failed to schedule resize: {e:?}")),
    }
}

/// Match the board width to the canvas's parent element.
pub fn fit_to_container(state: &Rc<RefCell<State>>) {
    let mut s = state.borrow_mut();
    s.resize_timer = None;
    let Some(parent) = s.view.surface().canvas().parent_element() else {
        return;
    };
    let width = f64::from(parent.client_width());
    if width <= 0.0 || (width - s.view.width()).abs() < 0.5 {
        return;
    }
    if let Err(e) = s.view.set_width(width) {
        log(&format!("Resize to {width}px failed: {e}"));
    }
}
