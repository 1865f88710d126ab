//! Core display operations

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorType, OutputPin};
use log::{debug, info};

use crate::command::{
    CASET, COLMOD, DISPOFF, DISPON, INVOFF, INVON, MADCTL, PANEL_TUNING, RAMWR, RASET, SLPIN,
    SLPOUT, SWRESET,
};
use crate::config::{Config, Rotation};
use crate::error::{BufferError, Error};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{AddressWindow, Geometry, compute_window};
use crate::interface::DisplayInterface;

type DisplayResult<I, T = ()> = core::result::Result<T, Error<I>>;

/// Reset pulse width (ms)
const RESET_PULSE_MS: u32 = 10;
/// Wait after reset or SWRESET before the first command (ms)
const RESET_SETTLE_MS: u32 = 120;
/// Wait after SLPOUT/SLPIN (ms)
const SLEEP_SETTLE_MS: u32 = 120;
/// Wait after DISPON (ms)
const DISPLAY_ON_SETTLE_MS: u32 = 20;

/// Placeholder for an unconnected reset or backlight line
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Command/data sequencer for the ST7796S
///
/// Owns the transport, the optional reset and backlight pins, and the panel
/// configuration. Frame data comes from a [`FrameBuffer`] passed to
/// [`flush`](Self::flush).
pub struct Display<I, RST = NoPin, BL = NoPin>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Address mapping derived from the configuration
    geometry: Geometry,
    /// Reset pin (active low)
    reset: Option<RST>,
    /// Backlight pin (active high)
    backlight: Option<BL>,
    /// Whether the controller is in sleep mode
    sleeping: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance without reset or backlight pins
    pub fn new(interface: I, config: Config) -> Self {
        let geometry = Geometry::from_config(&config);
        Self {
            interface,
            config,
            geometry,
            reset: None,
            backlight: None,
            sleeping: true,
        }
    }
}

impl<I, RST, BL> Display<I, RST, BL>
where
    I: DisplayInterface,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Attach a hardware reset pin
    pub fn with_reset_pin<R: OutputPin>(self, pin: R) -> Display<I, R, BL> {
        Display {
            interface: self.interface,
            config: self.config,
            geometry: self.geometry,
            reset: Some(pin),
            backlight: self.backlight,
            sleeping: self.sleeping,
        }
    }

    /// Attach a backlight pin
    pub fn with_backlight_pin<P: OutputPin>(self, pin: P) -> Display<I, RST, P> {
        Display {
            interface: self.interface,
            config: self.config,
            geometry: self.geometry,
            reset: self.reset,
            backlight: Some(pin),
            sleeping: self.sleeping,
        }
    }

    /// Replace the reset pin
    pub fn set_reset_pin(&mut self, pin: RST) {
        self.reset = Some(pin);
    }

    /// Replace the backlight pin
    pub fn set_backlight_pin(&mut self, pin: BL) {
        self.backlight = Some(pin);
    }

    /// Reset and initialize the controller, then switch the backlight on
    ///
    /// Sequence: reset (pin pulse, or SWRESET without a reset pin), optional
    /// panel tuning table, SLPOUT, COLMOD, INVON (if configured), MADCTL,
    /// DISPON. The command part runs inside one transaction.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        info!(
            "ST7796S: {}x{} offset ({}, {}), {:?}, bgr={}, invert={}, {:?}",
            self.config.dimensions.width,
            self.config.dimensions.height,
            self.config.col_start,
            self.config.row_start,
            self.config.color_mode,
            self.config.use_bgr,
            self.config.invert_colors,
            self.config.rotation,
        );

        self.with_transaction(|this| {
            this.reset(delay)?;

            if this.config.panel_tuning {
                debug!("ST7796S: sending panel tuning table");
                for &(cmd, params, wait_ms) in PANEL_TUNING {
                    this.send_command(cmd)?;
                    this.send_data(params)?;
                    if wait_ms > 0 {
                        delay.delay_ms(wait_ms);
                    }
                }
            }

            this.send_command(SLPOUT)?;
            delay.delay_ms(SLEEP_SETTLE_MS);
            this.sleeping = false;

            this.send_command(COLMOD)?;
            this.send_data(&[this.config.color_mode.pixel_format()])?;

            if this.config.invert_colors {
                this.send_command(INVON)?;
            }

            this.send_command(MADCTL)?;
            this.send_data(&[this.config.madctl()])?;

            this.send_command(DISPON)?;
            delay.delay_ms(DISPLAY_ON_SETTLE_MS);
            Ok(())
        })?;

        self.set_backlight(true)
    }

    /// Hardware reset if a reset pin is bound, software reset otherwise
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if let Some(pin) = self.reset.as_mut() {
            debug!("ST7796S: hardware reset");
            pin.set_low().map_err(|e| Error::Pin(e.kind()))?;
            delay.delay_ms(RESET_PULSE_MS);
            pin.set_high().map_err(|e| Error::Pin(e.kind()))?;
        } else {
            debug!("ST7796S: software reset");
            self.send_command(SWRESET)?;
        }
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    /// Send the dirty part of `framebuffer` and clear its dirty region
    ///
    /// Returns `Ok(false)` if nothing was dirty. On error the dirty region is
    /// left exactly as it was so a later flush retries the same area.
    ///
    /// # Errors
    ///
    /// `BufferError::DimensionMismatch` if the frame buffer's width and height
    /// differ from the panel's for the current rotation; nothing is sent.
    pub fn flush<B>(&mut self, framebuffer: &mut FrameBuffer<B>) -> DisplayResult<I, bool>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let expected = (self.geometry.width, self.geometry.height);
        let provided = (framebuffer.width(), framebuffer.height());
        if provided != expected {
            return Err(Error::Buffer(BufferError::DimensionMismatch {
                expected,
                provided,
            }));
        }
        let Some(rect) = framebuffer.dirty().bounds() else {
            return Ok(false);
        };
        let window = compute_window(&self.geometry, &rect);
        debug!(
            "ST7796S: flush cols {}..={} rows {}..={}",
            window.col_start, window.col_end, window.row_start, window.row_end
        );

        let use_bgr = self.config.use_bgr;
        self.with_transaction(|this| {
            this.set_address_window(&window)?;
            this.send_command(RAMWR)?;
            framebuffer.stream_wire(&rect, use_bgr, |chunk| this.send_data(chunk))
        })?;

        framebuffer.clear_dirty();
        Ok(true)
    }

    /// Send the whole frame buffer regardless of dirty state
    pub fn flush_all<B>(&mut self, framebuffer: &mut FrameBuffer<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        framebuffer.mark_all_dirty();
        self.flush(framebuffer).map(|_| ())
    }

    /// Enter sleep mode
    pub fn sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.with_transaction(|this| this.send_command(SLPIN))?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        self.sleeping = true;
        Ok(())
    }

    /// Leave sleep mode
    pub fn wake<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.with_transaction(|this| this.send_command(SLPOUT))?;
        delay.delay_ms(SLEEP_SETTLE_MS);
        self.sleeping = false;
        Ok(())
    }

    /// Whether the controller is asleep (also true before `init`)
    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// Turn the panel output on or off without touching RAM
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        let cmd = if on { DISPON } else { DISPOFF };
        self.with_transaction(|this| this.send_command(cmd))
    }

    /// Switch display inversion
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        let cmd = if inverted { INVON } else { INVOFF };
        self.with_transaction(|this| this.send_command(cmd))
    }

    /// Change the scan direction and remap the address window
    ///
    /// The frame buffer's logical size must follow, which
    /// [`St7796s::set_rotation`](crate::St7796s::set_rotation) takes care of.
    pub(crate) fn set_rotation(&mut self, rotation: Rotation) -> DisplayResult<I> {
        let mut config = self.config.clone();
        config.rotation = rotation;
        let madctl = config.madctl();
        self.with_transaction(|this| {
            this.send_command(MADCTL)?;
            this.send_data(&[madctl])
        })?;
        self.geometry = Geometry::from_config(&config);
        self.config = config;
        Ok(())
    }

    /// Drive the backlight pin, if bound
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        let Some(pin) = self.backlight.as_mut() else {
            return Ok(());
        };
        let result = if on { pin.set_high() } else { pin.set_low() };
        result.map_err(|e| Error::Pin(e.kind()))
    }

    /// Run `f` between `begin_transaction` and `end_transaction`
    ///
    /// The transaction is always closed. An error from `f` takes precedence
    /// over an error closing the transaction.
    fn with_transaction<T, F>(&mut self, f: F) -> DisplayResult<I, T>
    where
        F: FnOnce(&mut Self) -> DisplayResult<I, T>,
    {
        self.interface
            .begin_transaction()
            .map_err(Error::Interface)?;
        let result = f(self);
        let closed = self.interface.end_transaction().map_err(Error::Interface);
        let value = result?;
        closed?;
        Ok(value)
    }

    fn set_address_window(&mut self, window: &AddressWindow) -> DisplayResult<I> {
        self.send_command(CASET)?;
        self.send_data(&window.column_bytes())?;
        self.send_command(RASET)?;
        self.send_data(&window.row_bytes())?;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Address mapping in use
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Access the transport
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Access the transport mutably
    pub fn interface_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}
