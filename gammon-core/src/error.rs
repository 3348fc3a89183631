use crate::model::Owner;
use crate::surface::SurfaceError;

/// Errors produced while building, validating or painting a board.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Board width must be a finite, positive pixel count.
    #[error("invalid board width: {0}")]
    InvalidWidth(f64),

    /// A position must list exactly 24 points.
    #[error("expected 24 points, found {found}")]
    PointCount { found: usize },

    /// Point indices run from 0 to 23.
    #[error("point index {index} out of range")]
    PointIndex { index: usize },

    /// A point is `Empty` iff it holds no checkers.
    #[error("point {index}: owner {owner:?} does not match {checkers} checkers")]
    InconsistentPoint { index: usize, owner: Owner, checkers: u32 },

    /// Cube values are powers of two between 1 and 64.
    #[error("invalid cube value: {0}")]
    CubeValue(u32),

    /// Die faces run from 1 to 6.
    #[error("invalid die value: {0}")]
    DieValue(u8),

    /// The drawing surface rejected an operation.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// A position or palette document could not be parsed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
