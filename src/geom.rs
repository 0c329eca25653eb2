#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point on the drawing surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate a client-space point into coordinates relative to `origin`
    /// (typically the canvas bounding rect's top-left corner).
    #[must_use]
    pub fn relative_to(self, origin: Self) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// An axis-aligned rectangle on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `pt` lies strictly inside this rectangle.
    ///
    /// Containment is open on all four edges: a point exactly on a boundary
    /// is outside. Adjacent clickable regions that share an edge therefore
    /// never both claim the same point, at the cost of a dead 1px seam.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x > self.x && pt.x < self.right() && pt.y > self.y && pt.y < self.bottom()
    }
}
