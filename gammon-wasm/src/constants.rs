/// Board width used when the page does not ask for one (px).
pub const DEFAULT_WIDTH_PX: f64 = 640.0;
/// Quiet period before a window resize triggers a repaint (ms).
pub const RESIZE_DEBOUNCE_MS: i32 = 150;
/// Canvas the page-level board mounts on.
pub const CANVAS_ID: &str = "cv";
/// File name offered for PNG downloads.
pub const EXPORT_FILE_NAME: &str = "backgammon.png";
