//! Backgammon board rendering, independent of any drawing backend.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Board state: points, bar, trays, cube, dice, position JSON |
//! | [`geometry`] | Grid layout and grid-to-pixel mapping |
//! | [`surface`] | Drawing surface trait and a recording implementation |
//! | [`painter`] | Full repaint of a board onto a surface |
//! | [`shell`] | Stateful board view that repaints on every change |
//! | [`palette`] | Colours |

pub mod error;
pub mod geometry;
pub mod model;
pub mod painter;
pub mod palette;
pub mod shell;
pub mod surface;

pub use error::{Error, Result};
pub use model::{Board, Cube, Dice, Owner, PerPlayer, Player, Point};
pub use painter::{paint, paint_with};
pub use palette::Palette;
pub use shell::BoardView;
pub use surface::{DrawOp, RecordingSurface, Surface, SurfaceError};
