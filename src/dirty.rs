//! Dirty-region tracking
//!
//! Writes since the last flush are folded into a single bounding rectangle,
//! so a flush always sends one CASET/RASET/RAMWR triple. Untouched pixels
//! between two distant writes are resent.

/// Axis-aligned rectangle with exclusive end coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left column
    pub x0: u16,
    /// Top row
    pub y0: u16,
    /// One past the right column
    pub x1: u16,
    /// One past the bottom row
    pub y1: u16,
}

impl Rect {
    /// Create a rectangle from its corners
    pub const fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle covering a single pixel
    pub const fn pixel(x: u16, y: u16) -> Self {
        Self::new(x, y, x.saturating_add(1), y.saturating_add(1))
    }

    /// Rectangle from origin and size
    pub const fn from_size(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.y1.saturating_sub(self.y0)
    }

    /// Whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// Bounding rectangle of all writes since the last successful flush
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyRegion {
    bounds: Option<Rect>,
}

impl DirtyRegion {
    /// Create an empty region
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Extend the region to cover `rect`
    ///
    /// Empty rectangles are ignored.
    pub fn mark(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.bounds = Some(match self.bounds {
            Some(current) => current.union(&rect),
            None => rect,
        });
    }

    /// Current bounding rectangle, if anything is dirty
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Whether nothing has been written since the last flush
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Forget all tracked writes
    pub fn clear(&mut self) {
        self.bounds = None;
    }
}
