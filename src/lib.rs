//! ST7796S TFT Display Driver
//!
//! A frame-buffered driver for the Sitronix ST7796S 320x480 TFT controller
//! over 4-wire SPI.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - RGB565 or 8-bit (RGB332) frame buffer in caller-provided memory
//! - Dirty-region tracking: only the changed rectangle is sent
//! - Panel offsets, BGR panels, inversion and rotation
//! - Interval-based update scheduling with manual, writer or page draw modes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7796s::{Builder, Color, Dimensions, Interface, St7796s};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # fn millis() -> u32 { 0 }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let mut frame = [0u8; 320 * 480 * 2];
//!
//! let dims = match Dimensions::new(320, 480) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).update_interval_ms(50).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let interface = Interface::new(spi, dc);
//! let mut display = match St7796s::new(config, interface, &mut frame[..]) {
//!     Ok(display) => display.with_reset_pin(rst),
//!     Err(_) => return,
//! };
//! let _ = display.setup(&mut delay);
//!
//! let _ = display.framebuffer_mut().fill_rect(10, 10, 100, 40, Color::RED);
//! loop {
//!     let _ = display.poll(millis());
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 color type and wire serialization
pub mod color;
/// ST7796S command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Dirty-rectangle tracking
pub mod dirty;
/// Command/data sequencing
pub mod display;
/// Scheduled driver combining display, frame buffer and draw mode
pub mod driver;
/// Error types for the driver
pub mod error;
/// In-memory frame buffer
pub mod framebuffer;
/// Logical-to-controller address mapping
pub mod geometry;
/// Hardware interface abstraction
pub mod interface;
/// Fixed-interval update scheduling
pub mod scheduler;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{
    AddressRange, Builder, ColorMode, Config, DEFAULT_UPDATE_INTERVAL_MS, Dimensions, Rotation,
};
pub use dirty::{DirtyRegion, Rect};
pub use display::{Display, NoPin};
pub use driver::{DrawMode, DriverState, Pages, St7796s};
pub use error::{BufferError, BuilderError, Error, MAX_COLUMNS, MAX_ROWS};
pub use framebuffer::FrameBuffer;
pub use interface::{BusInterface, DisplayInterface, Interface, InterfaceError};
pub use scheduler::{Scheduled, UpdateScheduler};
