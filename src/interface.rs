//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and two implementations
//! for talking to the ST7796S over a 4-wire SPI link:
//!
//! - [`Interface`] wraps an embedded-hal [`SpiDevice`]; chip select and bus
//!   locking are handled by the device for every write.
//! - [`BusInterface`] wraps a raw [`SpiBus`] plus a CS pin; chip select is held
//!   for a whole burst between `begin_transaction` and `end_transaction`.
//!
//! ## Hardware Requirements
//!
//! The ST7796S requires:
//! - SPI bus (MOSI + SCK), mode 0, MSB first
//! - **DC**: Data/Command select (output, low = command)
//! - optional **RST** and backlight pins, owned by the [`Display`](crate::Display)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7796s::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! let mut interface = Interface::new(MockSpi, MockPin);
//!
//! let _ = interface.begin_transaction();
//! let _ = interface.send_command(command::DISPON);
//! let _ = interface.end_transaction();
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{SpiBus, SpiDevice};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to the ST7796S controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use [`Interface`] or [`BusInterface`]. Implement this
/// trait yourself for parallel buses or DMA-backed transfers.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Acquire the bus for a command/data burst
    ///
    /// Every successful call is paired with [`end_transaction`](Self::end_transaction),
    /// even if the burst fails.
    #[allow(clippy::type_complexity)]
    fn begin_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    /// Release the bus after a burst
    #[allow(clippy::type_complexity)]
    fn end_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// SPI device interface for the ST7796S
///
/// Implements [`DisplayInterface`] for an embedded-hal v1.0 [`SpiDevice`] and a
/// DC [`OutputPin`]. Use `embedded_hal_bus::spi::ExclusiveDevice` or one of the
/// shared-bus devices to provide chip select.
///
/// Every `send_command`/`send_data` is its own `SpiDevice` transaction, and
/// `begin_transaction`/`end_transaction` are no-ops. On a shared bus another
/// device may run between the address window and the pixel data; use
/// [`BusInterface`] when a window must go out as one chip-select frame.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
pub struct Interface<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
}

impl<SPI, DC> Interface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Replace the DC pin, returning the previous one
    pub fn set_dc_pin(&mut self, dc: DC) -> DC {
        core::mem::replace(&mut self.dc, dc)
    }

    /// Consume the interface and return the SPI device and DC pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC, PinErr> DisplayInterface for Interface<SPI, DC>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }
}

/// Raw SPI bus interface with a manually driven chip select
///
/// CS is asserted in `begin_transaction` and released in `end_transaction`
/// after the bus has been flushed, so a whole burst shares one CS frame.
pub struct BusInterface<BUS, CS, DC> {
    /// SPI bus
    bus: BUS,
    /// Chip select (active low)
    cs: CS,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
}

impl<BUS, CS, DC> BusInterface<BUS, CS, DC>
where
    BUS: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Create a new BusInterface
    pub fn new(bus: BUS, cs: CS, dc: DC) -> Self {
        Self { bus, cs, dc }
    }

    /// Replace the DC pin, returning the previous one
    pub fn set_dc_pin(&mut self, dc: DC) -> DC {
        core::mem::replace(&mut self.dc, dc)
    }

    /// Consume the interface and return the bus and pins
    pub fn release(self) -> (BUS, CS, DC) {
        (self.bus, self.cs, self.dc)
    }
}

impl<BUS, CS, DC, PinErr> DisplayInterface for BusInterface<BUS, CS, DC>
where
    BUS: SpiBus,
    BUS::Error: Debug,
    CS: OutputPin<Error = PinErr>,
    DC: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<BUS::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        // DC is sampled with the last bit of the byte; drain before switching
        self.bus.flush().map_err(InterfaceError::Spi)?;
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.bus.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.bus.flush().map_err(InterfaceError::Spi)?;
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.bus.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn begin_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_low().map_err(InterfaceError::Pin)
    }

    fn end_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        let flushed = self.bus.flush().map_err(InterfaceError::Spi);
        let released = self.cs.set_high().map_err(InterfaceError::Pin);
        flushed.and(released)
    }
}
