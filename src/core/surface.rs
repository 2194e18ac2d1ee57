//! Immediate-mode 2D drawing abstraction.
//!
//! The browser implements [`Surface`] over `CanvasRenderingContext2d`; tests,
//! the CLI and benches use [`RecordingSurface`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles.
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pixel extent of a drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// `None` for negative or non-finite sizes.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        (ok(width) && ok(height)).then_some(Self { width, height })
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

pub trait Surface {
    fn bounds(&self) -> Bounds;
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba,
    },
}

/// Records draw calls instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    bounds: Bounds,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    // A clear starts a new frame, so older commands are dropped.
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_matches_canvas_syntax() {
        let c = Rgba::rgb(0, 112, 160).with_alpha(0.3);
        assert_eq!(c.css(), "rgba(0, 112, 160, 0.3)");
    }

    #[test]
    fn bounds_reject_bad_sizes() {
        assert!(Bounds::new(-1.0, 10.0).is_none());
        assert!(Bounds::new(f64::NAN, 10.0).is_none());
        assert!(Bounds::new(0.0, 10.0).unwrap().is_empty());
        assert!(!Bounds::new(1.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn clear_starts_a_new_frame() {
        let mut s = RecordingSurface::new(Bounds::new(10.0, 10.0).unwrap());
        s.fill_circle(Point::new(1.0, 1.0), 3.0, Rgba::rgb(0, 0, 0));
        s.clear();
        assert_eq!(s.commands(), &[DrawCommand::Clear]);
    }
}
