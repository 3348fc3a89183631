//! The drawing surface the painter talks to.
//!
//! A surface is anything that can be resized and accept filled rectangles and
//! filled/stroked paths. Browser canvases, SVG documents and the in-memory
//! [`RecordingSurface`] used by tests all implement [`Surface`].

use crate::geometry::{Px, Rect};

/// A surface operation failed (for example a canvas call threw).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("surface: {0}")]
pub struct SurfaceError(pub String);

impl SurfaceError {
    pub fn new(msg: impl Into<String>) -> Self {
        SurfaceError(msg.into())
    }
}

pub trait Surface {
    /// Resize the backing store, discarding its contents.
    fn resize(&mut self, width: f64, height: f64) -> Result<(), SurfaceError>;

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), SurfaceError>;

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Px);

    fn line_to(&mut self, p: Px);

    fn close_path(&mut self);

    /// Add a full circle to the current path.
    fn arc(&mut self, center: Px, radius: f64) -> Result<(), SurfaceError>;

    /// Fill the current path.
    fn fill(&mut self, color: &str) -> Result<(), SurfaceError>;

    /// Stroke the current path.
    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SurfaceError>;

    /// Draw `text` centred on `at`.
    fn fill_text(&mut self, text: &str, at: Px, size: f64, color: &str) -> Result<(), SurfaceError>;
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize { width: f64, height: f64 },
    FillRect { rect: Rect, color: String },
    BeginPath,
    MoveTo(Px),
    LineTo(Px),
    ClosePath,
    Arc { center: Px, radius: f64 },
    Fill { color: String },
    Stroke { color: String, line_width: f64 },
    Text { text: String, at: Px, size: f64, color: String },
}

/// A filled path reconstructed from recorded operations.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedPath {
    pub vertices: Vec<Px>,
    pub circles: Vec<(Px, f64)>,
    pub fill: String,
}

/// Surface that remembers every call, newest last.
///
/// `resize` clears the log, mirroring how resizing a canvas wipes it, so the
/// log always describes exactly one frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
    pub resizes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every filled path, in paint order.
    pub fn paths(&self) -> Vec<RecordedPath> {
        let mut out = Vec::new();
        let mut vertices = Vec::new();
        let mut circles = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::BeginPath => {
                    vertices.clear();
                    circles.clear();
                }
                DrawOp::MoveTo(p) | DrawOp::LineTo(p) => vertices.push(*p),
                DrawOp::Arc { center, radius } => circles.push((*center, *radius)),
                DrawOp::Fill { color } => out.push(RecordedPath {
                    vertices: vertices.clone(),
                    circles: circles.clone(),
                    fill: color.clone(),
                }),
                _ => {}
            }
        }
        out
    }

    /// Filled three-vertex paths.
    pub fn triangles(&self) -> Vec<RecordedPath> {
        self.paths()
            .into_iter()
            .filter(|p| p.vertices.len() == 3 && p.circles.is_empty())
            .collect()
    }

    /// Filled circles as `(center, radius, fill)`.
    pub fn circles(&self) -> Vec<(Px, f64, String)> {
        self.paths()
            .into_iter()
            .flat_map(|p| {
                let fill = p.fill;
                p.circles
                    .into_iter()
                    .map(move |(c, r)| (c, r, fill.clone()))
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(Rect, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, color.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.width = width;
        self.height = height;
        self.resizes += 1;
        self.ops.clear();
        self.ops.push(DrawOp::Resize { width, height });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: color.to_string(),
        });
        Ok(())
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, p: Px) {
        self.ops.push(DrawOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Px) {
        self.ops.push(DrawOp::LineTo(p));
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn arc(&mut self, center: Px, radius: f64) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Arc { center, radius });
        Ok(())
    }

    fn fill(&mut self, color: &str) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Fill {
            color: color.to_string(),
        });
        Ok(())
    }

    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Stroke {
            color: color.to_string(),
            line_width,
        });
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Px,
        size: f64,
        color: &str,
    ) -> Result<(), SurfaceError> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            size,
            color: color.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;
