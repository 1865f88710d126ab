//! Panel geometry mapping
//!
//! Translates logical frame-buffer rectangles into controller address windows.
//! The panel glass usually covers only part of the controller RAM, so the
//! configured column/row offsets are added before the window is sent. When
//! the rotation exchanges rows and columns (MADCTL MV), the logical axes and
//! the offsets swap with them.
//!
//! ## Example
//!
//! ```
//! use st7796s::geometry::{compute_window, AddressWindow, Geometry};
//! use st7796s::Rect;
//!
//! let geometry = Geometry::new(320, 480, 40, 53);
//! let window = compute_window(&geometry, &Rect::new(0, 0, 10, 2));
//! assert_eq!(
//!     window,
//!     AddressWindow { col_start: 40, col_end: 49, row_start: 53, row_end: 54 }
//! );
//! ```

use crate::config::Config;
use crate::dirty::Rect;

/// Logical panel extent plus its offset in controller RAM
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Logical width in pixels
    pub width: u16,
    /// Logical height in pixels
    pub height: u16,
    /// Column address of logical x = 0
    pub col_offset: u16,
    /// Row address of logical y = 0
    pub row_offset: u16,
}

impl Geometry {
    /// Create a geometry from logical extent and offsets
    pub const fn new(width: u16, height: u16, col_offset: u16, row_offset: u16) -> Self {
        Self {
            width,
            height,
            col_offset,
            row_offset,
        }
    }

    /// Geometry for a configuration, honouring its rotation
    pub fn from_config(config: &Config) -> Self {
        let logical = config.rotated_dimensions();
        let (col_offset, row_offset) = if config.rotation.is_transposed() {
            (config.row_start, config.col_start)
        } else {
            (config.col_start, config.row_start)
        };
        Self::new(logical.width, logical.height, col_offset, row_offset)
    }

    /// Rectangle covering the whole logical panel
    pub const fn full(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Inclusive controller address window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressWindow {
    /// First column address
    pub col_start: u16,
    /// Last column address
    pub col_end: u16,
    /// First row address
    pub row_start: u16,
    /// Last row address
    pub row_end: u16,
}

impl AddressWindow {
    /// CASET parameters: start and end as big-endian pairs
    pub fn column_bytes(&self) -> [u8; 4] {
        address_pair(self.col_start, self.col_end)
    }

    /// RASET parameters: start and end as big-endian pairs
    pub fn row_bytes(&self) -> [u8; 4] {
        address_pair(self.row_start, self.row_end)
    }
}

fn address_pair(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

/// Map a logical rectangle to the controller address window
///
/// Offsets are added to both corners and the result is clamped to the
/// panel's physical extent, so the window never leaves the glass.
pub fn compute_window(geometry: &Geometry, rect: &Rect) -> AddressWindow {
    let (col_start, col_end) = map_axis(rect.x0, rect.x1, geometry.col_offset, geometry.width);
    let (row_start, row_end) = map_axis(rect.y0, rect.y1, geometry.row_offset, geometry.height);
    AddressWindow {
        col_start,
        col_end,
        row_start,
        row_end,
    }
}

fn map_axis(start: u16, end: u16, offset: u16, extent: u16) -> (u16, u16) {
    let (offset, start, end) = (u32::from(offset), u32::from(start), u32::from(end));
    let last = offset + u32::from(extent.max(1)) - 1;
    let first = (offset + start).min(last);
    let end = (offset + end.max(start + 1) - 1).clamp(first, last);
    (first as u16, end as u16)
}
