//! The embeddable board: owns the state and the surface, repaints on change.
//!
//! Every mutating call validates first, then repaints exactly once. A rejected
//! change leaves both the stored state and the surface as they were.

use crate::error::Result;
use crate::geometry::{ASPECT, Scale};
use crate::model::{Board, Player};
use crate::painter;
use crate::palette::Palette;
use crate::surface::Surface;

pub struct BoardView<S: Surface> {
    surface: S,
    width: f64,
    board: Board,
    palette: Palette,
}

impl<S: Surface> BoardView<S> {
    /// Mount an empty board (White active) and paint it once.
    pub fn mount(surface: S, width: f64) -> Result<Self> {
        Self::mount_with(surface, width, Board::new(), Palette::default())
    }

    pub fn mount_with(surface: S, width: f64, board: Board, palette: Palette) -> Result<Self> {
        let mut view = BoardView {
            surface,
            width,
            board,
            palette,
        };
        view.repaint()?;
        Ok(view)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.width * ASPECT
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn replace_board(&mut self, board: Board) -> Result<()> {
        if let Err(err) = board.validate() {
            tracing::warn!(%err, "board rejected");
            return Err(err);
        }
        self.board = board;
        self.repaint()
    }

    pub fn set_active_player(&mut self, player: Player) -> Result<()> {
        self.board.active_player = player;
        self.repaint()
    }

    pub fn set_width(&mut self, width: f64) -> Result<()> {
        if let Err(err) = Scale::new(width) {
            tracing::warn!(%err, "width rejected");
            return Err(err);
        }
        self.width = width;
        self.repaint()
    }

    pub fn set_palette(&mut self, palette: Palette) -> Result<()> {
        self.palette = palette;
        self.repaint()
    }

    /// Paint the current state again.
    pub fn repaint(&mut self) -> Result<()> {
        painter::paint_with(&mut self.surface, self.width, &self.board, &self.palette)
    }
}

#[cfg(test)]
#[path = "shell_test.rs"]
mod tests;
