//! Sans-serif face embedded at build time for rasterised board labels.
//!
//! Empty when the build could not find or fetch a font; callers fall back to
//! the system font database in that case.

pub static FONT_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/board-font.ttf"));
