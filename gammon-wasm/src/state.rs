use std::cell::RefCell;
use std::rc::Rc;

use gammon_core::BoardView;
use web_sys::{Document, Window};

use crate::canvas::CanvasSurface;

/// One mounted board and the browser handles it needs.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub view: BoardView<CanvasSurface>,
    /// Track the container width on window resize.
    pub fit: bool,
    /// Pending debounced resize, if any.
    pub resize_timer: Option<i32>,
}

thread_local! {
    /// The board mounted by `start` on the page's own canvas.
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}
