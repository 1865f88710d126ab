//! ST7796S command definitions
//!
//! This module defines the command bytes used to control the ST7796S TFT
//! controller. Commands are sent over SPI with the DC pin low; their
//! parameters follow with the DC pin high.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send parameter bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7796s::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin);
//! // Select 16 bits per pixel
//! let _ = interface.send_command(command::COLMOD);
//! let _ = interface.send_data(&[command::COLMOD_RGB565]);
//! ```

// System control commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset (0x01)
///
/// Resets registers to their defaults. Wait 120ms before sending SLPOUT.
pub const SWRESET: u8 = 0x01;

/// Sleep in (0x10)
pub const SLPIN: u8 = 0x10;

/// Sleep out (0x11)
///
/// Wakes the panel from sleep. The controller needs 120ms before it accepts
/// further commands reliably.
pub const SLPOUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Memory access commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB]
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Followed by pixel data for the current address window, row-major.
pub const RAMWR: u8 = 0x2C;

/// Memory data access control (0x36)
///
/// One byte built from the `MADCTL_*` bits.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// One byte, see `COLMOD_*`.
pub const COLMOD: u8 = 0x3A;

// MADCTL bits

/// Row address order (mirror Y)
pub const MADCTL_MY: u8 = 0x80;
/// Column address order (mirror X)
pub const MADCTL_MX: u8 = 0x40;
/// Row/column exchange
pub const MADCTL_MV: u8 = 0x20;
/// Vertical refresh order
pub const MADCTL_ML: u8 = 0x10;
/// BGR sub-pixel order (0 = RGB)
pub const MADCTL_BGR: u8 = 0x08;
/// Horizontal refresh order
pub const MADCTL_MH: u8 = 0x04;

// COLMOD values

/// 12 bits per pixel
pub const COLMOD_RGB444: u8 = 0x33;
/// 16 bits per pixel
pub const COLMOD_RGB565: u8 = 0x55;
/// 18 bits per pixel, 3 bytes on the wire
pub const COLMOD_RGB666: u8 = 0x66;

// Extended (vendor) commands

/// Inversion control (0xB4)
pub const INVCTR: u8 = 0xB4;
/// Display function control (0xB6)
pub const DFUNCTR: u8 = 0xB6;
/// Power control 2 (0xC1)
pub const PWCTR2: u8 = 0xC1;
/// Power control 3 (0xC2)
pub const PWCTR3: u8 = 0xC2;
/// VCOM control (0xC5)
pub const VMCTR: u8 = 0xC5;
/// Positive gamma correction (0xE0)
pub const GMCTRP1: u8 = 0xE0;
/// Negative gamma correction (0xE1)
pub const GMCTRN1: u8 = 0xE1;
/// Display output control adjust (0xE8)
pub const DOCA: u8 = 0xE8;
/// Command set control (0xF0)
///
/// 0xC3 then 0x96 unlocks the extended command set, 0x3C then 0x69 locks it.
pub const CSCON: u8 = 0xF0;

/// One step of an initialization table: command, parameters, delay after (ms)
pub type InitStep = (u8, &'static [u8], u32);

/// Power, timing and gamma settings for common 320x480 ST7796S modules
///
/// Sent between the reset and SLPOUT when [`crate::Config::panel_tuning`] is set.
pub const PANEL_TUNING: &[InitStep] = &[
    (CSCON, &[0xC3], 0),
    (CSCON, &[0x96], 0),
    // 1-dot inversion
    (INVCTR, &[0x01], 0),
    // Source S1->S960, gate G1->G480, 8*(59+1) drive lines
    (DFUNCTR, &[0x80, 0x02, 0x3B], 0),
    (DOCA, &[0x40, 0x8A, 0x00, 0x00, 0x29, 0x19, 0xA5, 0x33], 0),
    (PWCTR2, &[0x06], 0),
    (PWCTR3, &[0xA7], 0),
    (VMCTR, &[0x18], 120),
    (
        GMCTRP1,
        &[
            0xF0, 0x09, 0x0B, 0x06, 0x04, 0x15, 0x2F, 0x54, 0x42, 0x3C, 0x17, 0x14, 0x18, 0x1B,
        ],
        0,
    ),
    (
        GMCTRN1,
        &[
            0xE0, 0x09, 0x0B, 0x06, 0x04, 0x03, 0x2B, 0x43, 0x42, 0x3B, 0x16, 0x14, 0x17, 0x1B,
        ],
        120,
    ),
    (CSCON, &[0x3C], 0),
    (CSCON, &[0x69], 0),
];
