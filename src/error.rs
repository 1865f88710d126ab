//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! frame-buffer access ([`BufferError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Invalid geometry detected while building a [`Config`](crate::Config)
//! - [`BufferError`] - Out-of-range or mis-sized frame-buffer writes
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use st7796s::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(0, 480);
//! assert!(result.is_err());
//! ```

use embedded_hal::digital::ErrorKind;

use crate::interface::DisplayInterface;

/// Number of columns the ST7796S can address in its native orientation
pub const MAX_COLUMNS: u16 = 320;

/// Number of rows the ST7796S can address in its native orientation
pub const MAX_ROWS: u16 = 480;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO) while talking to the controller
    ///
    /// A failed flush keeps its dirty region, so the next update retries it.
    Interface(I::Error),
    /// Reset or backlight pin error
    Pin(ErrorKind),
    /// Frame-buffer access error
    Buffer(BufferError),
    /// The driver has not completed `setup`, or setup failed
    NotReady,
}

impl<I: DisplayInterface> From<BufferError> for Error<I> {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Pin(kind) => write!(f, "Pin error: {kind:?}"),
            Self::Buffer(e) => write!(f, "{e}"),
            Self::NotReady => write!(f, "Display not initialized"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors raised by frame-buffer writes
///
/// These are local to the caller: a failed write leaves the buffer and the
/// dirty region untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BufferError {
    /// Coordinate outside the frame buffer
    OutOfBounds {
        /// X coordinate
        x: u16,
        /// Y coordinate
        y: u16,
    },
    /// Bulk write payload does not match the target area
    SizeMismatch {
        /// Number of pixels (or bytes, for frame loads) required
        expected: usize,
        /// Number provided
        provided: usize,
    },
    /// Frame buffer extent differs from the panel's logical extent
    DimensionMismatch {
        /// Panel width and height for the current rotation
        expected: (u16, u16),
        /// Frame buffer width and height
        provided: (u16, u16),
    },
    /// Backing storage is too small for the configured panel
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfBounds { x, y } => write!(f, "Pixel out of bounds: ({x}, {y})"),
            Self::SizeMismatch { expected, provided } => {
                write!(f, "Size mismatch: expected {expected}, provided {provided}")
            }
            Self::DimensionMismatch { expected, provided } => write!(
                f,
                "Frame buffer is {}x{}, panel expects {}x{}",
                provided.0, provided.1, expected.0, expected.1
            ),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl core::error::Error for BufferError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels
        width: u16,
        /// Height in pixels
        height: u16,
    },
    /// Offset plus panel extent exceeds the controller address range
    OffsetOutOfRange {
        /// Column offset
        col_start: u16,
        /// Row offset
        row_start: u16,
        /// Addressable columns
        cols: u16,
        /// Addressable rows
        rows: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
            Self::OffsetOutOfRange {
                col_start,
                row_start,
                cols,
                rows,
            } => write!(
                f,
                "Offset ({col_start}, {row_start}) places the panel outside the {cols}x{rows} address range"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
