#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in either client (viewport) or page (document) space.
///
/// Page coordinates are client coordinates plus the window scroll offset.
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
}

/// An overlay's extent in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Floor both axes independently at `min`.
    #[must_use]
    pub fn clamp_min(self, min: Size) -> Size {
        Size {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// Convert a client-space point to page coordinates.
#[must_use]
pub fn page_from_client(client: Point, scroll: Point) -> Point {
    Point {
        x: client.x + scroll.x,
        y: client.y + scroll.y,
    }
}

/// Convert a page-space point to client coordinates.
#[must_use]
pub fn client_from_page(page: Point, scroll: Point) -> Point {
    Point {
        x: page.x - scroll.x,
        y: page.y - scroll.y,
    }
}
