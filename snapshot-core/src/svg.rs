use gammon_core::geometry::{Px, Rect};
use gammon_core::{Surface, SurfaceError};

/// Surface that writes an SVG document.
#[derive(Clone, Debug, Default)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    path: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The complete document for the last painted frame.
    pub fn finish(&self) -> String {
        let mut s = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.2}\" height=\"{h:.2}\" \
             viewBox=\"0 0 {w:.2} {h:.2}\">\n",
            w = self.width,
            h = self.height
        );
        s.push_str(&self.body);
        s.push_str("</svg>\n");
        s
    }
}

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl Surface for SvgSurface {
    fn resize(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        self.width = width;
        self.height = height;
        self.body.clear();
        self.path.clear();
        Ok(())
    }

    fn fill_rect(&mut self, r: Rect, color: &str) -> Result<(), SurfaceError> {
        self.body.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            r.x,
            r.y,
            r.w,
            r.h,
            svg_escape(color)
        ));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Px) {
        self.path.push_str(&format!("M {:.2} {:.2} ", p.x, p.y));
    }

    fn line_to(&mut self, p: Px) {
        self.path.push_str(&format!("L {:.2} {:.2} ", p.x, p.y));
    }

    fn close_path(&mut self) {
        self.path.push_str("Z ");
    }

    fn arc(&mut self, c: Px, r: f64) -> Result<(), SurfaceError> {
        if r <= 0.0 {
            return Err(SurfaceError::new(format!("arc radius {r}")));
        }
        self.path.push_str(&format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 0 {:.2} {:.2} A {r:.2} {r:.2} 0 1 0 {:.2} {:.2} Z ",
            c.x - r,
            c.y,
            c.x + r,
            c.y,
            c.x - r,
            c.y
        ));
        Ok(())
    }

    fn fill(&mut self, color: &str) -> Result<(), SurfaceError> {
        self.body.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\"/>\n",
            self.path.trim_end(),
            svg_escape(color)
        ));
        Ok(())
    }

    fn stroke(&mut self, color: &str, line_width: f64) -> Result<(), SurfaceError> {
        self.body.push_str(&format!(
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
            self.path.trim_end(),
            svg_escape(color),
            line_width
        ));
        Ok(())
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Px,
        size: f64,
        color: &str,
    ) -> Result<(), SurfaceError> {
        self.body.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-weight=\"bold\" \
             font-size=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" \
             fill=\"{}\">{}</text>\n",
            at.x,
            at.y,
            size,
            svg_escape(color),
            svg_escape(text)
        ));
        Ok(())
    }
}

#[cfg(test)]
#[path = "svg_test.rs"]
mod tests;
