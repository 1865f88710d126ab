//! Scheduled ST7796S driver
//!
//! [`St7796s`] ties together the command sequencer ([`Display`]), the
//! [`FrameBuffer`], a [`DrawMode`] and an [`UpdateScheduler`]. Drawing
//! operations only touch memory; [`update`](St7796s::update) pushes the dirty
//! area to the panel in one burst.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --setup--> Ready --update--> Flushing --> Ready
//!        \--setup fails--> Failed
//! ```
//!
//! A failed flush is logged and returned but the driver stays `Ready` with
//! its dirty region intact, so the next update retries.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{error, info, warn};

use crate::color::Color;
use crate::config::{Config, Rotation};
use crate::display::{Display, NoPin};
use crate::error::{BufferError, Error};
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;
use crate::scheduler::{Scheduled, UpdateScheduler};

type DriverResult<I, T = ()> = core::result::Result<T, Error<I>>;

/// Driver lifecycle state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// `setup` has not run yet
    Uninitialized,
    /// Initialized and idle
    Ready,
    /// A flush burst is in progress
    Flushing,
    /// Initialization failed; updates are refused
    Failed,
}

/// Precomposed frames shown one at a time
///
/// Every frame is a complete buffer image in the frame buffer's stored
/// format. A frame is copied into the buffer only when the selected page
/// changes.
#[derive(Clone, Copy, Debug)]
pub struct Pages<'a> {
    frames: &'a [&'a [u8]],
    current: usize,
    shown: Option<usize>,
}

impl<'a> Pages<'a> {
    /// Pages starting at the first frame
    pub const fn new(frames: &'a [&'a [u8]]) -> Self {
        Self {
            frames,
            current: 0,
            shown: None,
        }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no pages
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Index of the selected page
    pub fn current(&self) -> usize {
        self.current
    }

    /// Select page `index`; returns false if it does not exist
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.frames.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Select the next page, wrapping to the first
    pub fn next_page(&mut self) {
        if !self.frames.is_empty() {
            self.current = (self.current + 1) % self.frames.len();
        }
    }

    /// Select the previous page, wrapping to the last
    pub fn prev_page(&mut self) {
        if !self.frames.is_empty() {
            self.current = self.current.checked_sub(1).unwrap_or(self.frames.len() - 1);
        }
    }

    /// Frame to blit, if the selection changed since the last blit
    fn pending(&self) -> Option<&'a [u8]> {
        if self.shown == Some(self.current) {
            return None;
        }
        self.frames.get(self.current).copied()
    }

    fn mark_shown(&mut self) {
        self.shown = Some(self.current);
    }
}

/// How the frame buffer is filled on each update
pub enum DrawMode<'a, B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// The application draws directly into the frame buffer
    Manual,
    /// Writer invoked once per update with write access to the frame buffer
    Lambda(&'a mut dyn FnMut(&mut FrameBuffer<B>)),
    /// Static pages; the selected one is blitted when it changes
    Pages(Pages<'a>),
}

/// ST7796S display driver with frame buffer and update scheduling
pub struct St7796s<'a, I, B, RST = NoPin, BL = NoPin>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    display: Display<I, RST, BL>,
    framebuffer: FrameBuffer<B>,
    mode: DrawMode<'a, B>,
    scheduler: UpdateScheduler,
    state: DriverState,
}

impl<'a, I, B> St7796s<'a, I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a driver from a configuration, a transport and pixel storage
    ///
    /// # Errors
    ///
    /// Returns `Error::Buffer` if `buffer` is smaller than
    /// [`Config::buffer_size`].
    pub fn new(config: Config, interface: I, buffer: B) -> DriverResult<I, Self> {
        let framebuffer = FrameBuffer::for_config(&config, buffer)?;
        let scheduler = UpdateScheduler::new(config.update_interval_ms);
        Ok(Self {
            display: Display::new(interface, config),
            framebuffer,
            mode: DrawMode::Manual,
            scheduler,
            state: DriverState::Uninitialized,
        })
    }
}

impl<'a, I, B, RST, BL> St7796s<'a, I, B, RST, BL>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Attach a hardware reset pin
    pub fn with_reset_pin<R: OutputPin>(self, pin: R) -> St7796s<'a, I, B, R, BL> {
        St7796s {
            display: self.display.with_reset_pin(pin),
            framebuffer: self.framebuffer,
            mode: self.mode,
            scheduler: self.scheduler,
            state: self.state,
        }
    }

    /// Attach a backlight pin
    pub fn with_backlight_pin<P: OutputPin>(self, pin: P) -> St7796s<'a, I, B, RST, P> {
        St7796s {
            display: self.display.with_backlight_pin(pin),
            framebuffer: self.framebuffer,
            mode: self.mode,
            scheduler: self.scheduler,
            state: self.state,
        }
    }

    /// Replace the reset pin
    pub fn set_reset_pin(&mut self, pin: RST) {
        self.display.set_reset_pin(pin);
    }

    /// Replace the backlight pin
    pub fn set_backlight_pin(&mut self, pin: BL) {
        self.display.set_backlight_pin(pin);
    }

    /// Draw through `writer` on every update
    pub fn set_writer(&mut self, writer: &'a mut dyn FnMut(&mut FrameBuffer<B>)) {
        self.mode = DrawMode::Lambda(writer);
    }

    /// Show static pages
    ///
    /// # Errors
    ///
    /// `BufferError::SizeMismatch` if any frame is not exactly one buffer
    /// image; the previous draw mode is kept.
    pub fn set_pages(&mut self, pages: Pages<'a>) -> Result<(), BufferError> {
        let expected = self.framebuffer.as_bytes().len();
        if let Some(frame) = pages.frames.iter().find(|f| f.len() != expected) {
            return Err(BufferError::SizeMismatch {
                expected,
                provided: frame.len(),
            });
        }
        self.mode = DrawMode::Pages(pages);
        Ok(())
    }

    /// Go back to drawing directly into the frame buffer
    pub fn set_manual(&mut self) {
        self.mode = DrawMode::Manual;
    }

    /// Current draw mode
    pub fn draw_mode(&self) -> &DrawMode<'a, B> {
        &self.mode
    }

    /// Page selection, when in pages mode
    pub fn pages_mut(&mut self) -> Option<&mut Pages<'a>> {
        match &mut self.mode {
            DrawMode::Pages(pages) => Some(pages),
            _ => None,
        }
    }

    /// Initialize the panel
    ///
    /// On success the whole frame buffer is marked dirty so the first update
    /// overwrites the controller's power-on RAM contents. On failure the
    /// driver enters [`DriverState::Failed`].
    pub fn setup<D: DelayNs>(&mut self, delay: &mut D) -> DriverResult<I> {
        match self.display.init(delay) {
            Ok(()) => {
                self.state = DriverState::Ready;
                self.framebuffer.mark_all_dirty();
                info!(
                    "ST7796S ready, update interval {} ms",
                    self.scheduler.interval_ms()
                );
                Ok(())
            }
            Err(e) => {
                self.state = DriverState::Failed;
                error!("ST7796S setup failed: {}", e);
                Err(e)
            }
        }
    }

    /// Run the draw mode and push the dirty area to the panel
    ///
    /// # Errors
    ///
    /// `Error::NotReady` before a successful [`setup`](Self::setup). A
    /// transport error leaves the dirty region untouched for the next update.
    pub fn update(&mut self) -> DriverResult<I> {
        if self.state != DriverState::Ready {
            return Err(Error::NotReady);
        }
        self.render();
        if self.framebuffer.dirty().is_empty() {
            return Ok(());
        }

        self.state = DriverState::Flushing;
        let result = self.display.flush(&mut self.framebuffer);
        self.state = DriverState::Ready;

        if let Err(e) = &result {
            warn!("ST7796S flush failed, keeping dirty region: {}", e);
        }
        result.map(|_| ())
    }

    /// Run [`update`](Self::update) if the update interval has elapsed at `now_ms`
    ///
    /// Returns `Ok(true)` if an update ran.
    pub fn poll(&mut self, now_ms: u32) -> DriverResult<I, bool> {
        Scheduled::poll(self, now_ms)
    }

    fn render(&mut self) {
        match &mut self.mode {
            DrawMode::Manual => {}
            DrawMode::Lambda(writer) => (**writer)(&mut self.framebuffer),
            DrawMode::Pages(pages) => {
                if let Some(frame) = pages.pending() {
                    match self.framebuffer.load_frame(frame) {
                        Ok(()) => pages.mark_shown(),
                        Err(e) => warn!("ST7796S page {} not shown: {}", pages.current(), e),
                    }
                }
            }
        }
    }

    /// Change rotation; the frame buffer is resized and fully redrawn
    pub fn set_rotation(&mut self, rotation: Rotation) -> DriverResult<I> {
        let transposed = self.display.config().rotation.is_transposed();
        self.display.set_rotation(rotation)?;
        if rotation.is_transposed() != transposed {
            self.framebuffer.transpose();
        } else {
            self.framebuffer.mark_all_dirty();
        }
        Ok(())
    }

    /// Fill the frame buffer with one color
    pub fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color);
    }

    /// Lifecycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.framebuffer.width()
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.framebuffer.height()
    }

    /// The frame buffer
    pub fn framebuffer(&self) -> &FrameBuffer<B> {
        &self.framebuffer
    }

    /// The frame buffer, for drawing
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer<B> {
        &mut self.framebuffer
    }

    /// The command sequencer
    pub fn display(&self) -> &Display<I, RST, BL> {
        &self.display
    }

    /// The command sequencer, for sleep, inversion and backlight control
    pub fn display_mut(&mut self) -> &mut Display<I, RST, BL> {
        &mut self.display
    }

    /// Update interval in milliseconds
    pub fn update_interval_ms(&self) -> u32 {
        self.scheduler.interval_ms()
    }
}

impl<'a, I, B, RST, BL> Scheduled for St7796s<'a, I, B, RST, BL>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    RST: OutputPin,
    BL: OutputPin,
{
    type Error = Error<I>;

    fn update(&mut self) -> DriverResult<I> {
        St7796s::update(self)
    }

    fn scheduler_mut(&mut self) -> &mut UpdateScheduler {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CASET, COLMOD, DISPON, MADCTL, RAMWR, RASET, SLPOUT};
    use crate::config::{Builder, ColorMode, Dimensions};
    use crate::dirty::Rect;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Command(u8),
        Data(Vec<u8>),
        ResetLow,
        ResetHigh,
        Delay(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Debug)]
    struct MockInterface {
        log: Log,
        fail: Rc<Cell<bool>>,
    }

    impl DisplayInterface for MockInterface {
        type Error = &'static str;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            if self.fail.get() {
                return Err("bus error");
            }
            self.log.borrow_mut().push(Event::Command(command));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::Data(data.to_vec()));
            Ok(())
        }
    }

    struct MockResetPin {
        log: Log,
    }

    impl ErrorType for MockResetPin {
        type Error = Infallible;
    }

    impl OutputPin for MockResetPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::ResetLow);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.log.borrow_mut().push(Event::ResetHigh);
            Ok(())
        }
    }

    struct MockDelay {
        log: Log,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.log.borrow_mut().push(Event::Delay(ms));
        }
    }

    struct Harness {
        log: Log,
        fail: Rc<Cell<bool>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                log: Rc::default(),
                fail: Rc::default(),
            }
        }

        fn driver<'a>(&self, config: Config) -> St7796s<'a, MockInterface, Vec<u8>> {
            let interface = MockInterface {
                log: self.log.clone(),
                fail: self.fail.clone(),
            };
            let buffer = alloc::vec![0u8; config.buffer_size()];
            St7796s::new(config, interface, buffer).unwrap()
        }

        fn delay(&self) -> MockDelay {
            MockDelay {
                log: self.log.clone(),
            }
        }

        fn commands(&self) -> Vec<u8> {
            self.log
                .borrow()
                .iter()
                .filter_map(|event| match event {
                    Event::Command(cmd) => Some(*cmd),
                    _ => None,
                })
                .collect()
        }

        fn clear(&self) {
            self.log.borrow_mut().clear();
        }
    }

    fn panel_config() -> Config {
        Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .col_start(40)
            .row_start(53)
            .address_range(360, 533)
            .build()
            .unwrap()
    }

    fn small_config(mode: ColorMode) -> Config {
        Builder::new()
            .dimensions(Dimensions::new(4, 2).unwrap())
            .color_mode(mode)
            .update_interval_ms(100)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_rejects_small_buffer() {
        let harness = Harness::new();
        let interface = MockInterface {
            log: harness.log.clone(),
            fail: harness.fail.clone(),
        };
        let result = St7796s::new(panel_config(), interface, alloc::vec![0u8; 16]);
        assert!(matches!(
            result,
            Err(Error::Buffer(BufferError::BufferTooSmall { .. }))
        ));
    }

    #[test]
    fn test_update_before_setup_is_refused() {
        let harness = Harness::new();
        let mut driver = harness.driver(panel_config());
        assert_eq!(driver.state(), DriverState::Uninitialized);
        assert!(matches!(driver.update(), Err(Error::NotReady)));
        assert!(harness.log.borrow().is_empty());
    }

    #[test]
    fn test_setup_with_reset_pin_order() {
        let harness = Harness::new();
        let reset = MockResetPin {
            log: harness.log.clone(),
        };
        let mut driver = harness.driver(panel_config()).with_reset_pin(reset);

        driver.setup(&mut harness.delay()).unwrap();

        assert_eq!(driver.state(), DriverState::Ready);
        assert_eq!(
            harness.log.borrow()[..4],
            [
                Event::ResetLow,
                Event::Delay(10),
                Event::ResetHigh,
                Event::Delay(120),
            ]
        );
        assert_eq!(harness.commands(), [SLPOUT, COLMOD, MADCTL, DISPON]);
    }

    #[test]
    fn test_setup_failure_enters_failed_state() {
        let harness = Harness::new();
        let mut driver = harness.driver(panel_config());
        harness.fail.set(true);

        assert!(matches!(
            driver.setup(&mut harness.delay()),
            Err(Error::Interface("bus error"))
        ));
        assert_eq!(driver.state(), DriverState::Failed);

        harness.fail.set(false);
        assert!(matches!(driver.update(), Err(Error::NotReady)));
    }

    #[test]
    fn test_first_update_after_setup_sends_full_frame() {
        let harness = Harness::new();
        let mut driver = harness.driver(panel_config());
        driver.setup(&mut harness.delay()).unwrap();
        harness.clear();

        driver.update().unwrap();

        assert_eq!(harness.commands(), [CASET, RASET, RAMWR]);
        assert_eq!(
            harness.log.borrow()[1],
            Event::Data(alloc::vec![0x00, 40, 0x01, 0x67])
        );
        assert!(driver.framebuffer().dirty().is_empty());
    }

    #[test]
    fn test_two_pixels_flush_as_one_window() {
        let harness = Harness::new();
        let mut driver = harness.driver(panel_config());
        driver.setup(&mut harness.delay()).unwrap();
        driver.update().unwrap();
        harness.clear();

        driver.framebuffer_mut().write_pixel(10, 20, Color::RED).unwrap();
        driver.framebuffer_mut().write_pixel(30, 5, Color::RED).unwrap();
        driver.update().unwrap();

        assert_eq!(harness.commands(), [CASET, RASET, RAMWR]);
        // cols 50..=70, rows 58..=73
        assert_eq!(
            harness.log.borrow()[1],
            Event::Data(alloc::vec![0, 50, 0, 70])
        );
        assert_eq!(
            harness.log.borrow()[3],
            Event::Data(alloc::vec![0, 58, 0, 73])
        );
        assert!(driver.framebuffer().dirty().is_empty());
    }

    #[test]
    fn test_clean_update_sends_nothing() {
        let harness = Harness::new();
        let mut driver = harness.driver(panel_config());
        driver.setup(&mut harness.delay()).unwrap();
        driver.update().unwrap();
        harness.clear();

        driver.update().unwrap();
        assert!(harness.log.borrow().is_empty());
    }

    #[test]
    fn test_failed_flush_keeps_dirty_region_and_stays_ready() {
        let harness = Harness::new();
        let mut driver = harness.driver(panel_config());
        driver.setup(&mut harness.delay()).unwrap();
        driver.update().unwrap();

        driver.framebuffer_mut().write_pixel(3, 4, Color::BLUE).unwrap();
        harness.fail.set(true);
        assert!(matches!(driver.update(), Err(Error::Interface(_))));
        assert_eq!(driver.state(), DriverState::Ready);
        assert_eq!(
            driver.framebuffer().dirty().bounds(),
            Some(Rect::pixel(3, 4))
        );

        harness.fail.set(false);
        driver.update().unwrap();
        assert!(driver.framebuffer().dirty().is_empty());
    }

    #[test]
    fn test_writer_runs_each_update() {
        let harness = Harness::new();
        let calls = Cell::new(0u8);
        let mut writer = |fb: &mut FrameBuffer<Vec<u8>>| {
            calls.set(calls.get() + 1);
            let _ = fb.write_pixel(0, 0, Color::GREEN);
        };
        let mut driver = harness.driver(small_config(ColorMode::Rgb565));
        driver.set_writer(&mut writer);
        driver.setup(&mut harness.delay()).unwrap();

        driver.update().unwrap();
        driver.update().unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(driver.framebuffer().pixel(0, 0).unwrap(), Color::GREEN);
    }

    #[test]
    fn test_pages_blit_only_on_change() {
        let harness = Harness::new();
        let red = [0xE0u8; 8];
        let blue = [0x03u8; 8];
        let frames: [&[u8]; 2] = [&red, &blue];
        let mut driver = harness.driver(small_config(ColorMode::EightBit));
        driver.set_pages(Pages::new(&frames)).unwrap();
        driver.setup(&mut harness.delay()).unwrap();

        driver.update().unwrap();
        assert_eq!(driver.framebuffer().pixel(3, 1).unwrap(), Color::RED);
        harness.clear();

        driver.update().unwrap();
        assert!(harness.log.borrow().is_empty());

        if let Some(pages) = driver.pages_mut() {
            pages.next_page();
        }
        driver.update().unwrap();
        assert_eq!(driver.framebuffer().pixel(0, 0).unwrap(), Color::BLUE);
        assert_eq!(harness.commands(), [CASET, RASET, RAMWR]);
    }

    #[test]
    fn test_set_pages_rejects_wrong_frame_size() {
        let harness = Harness::new();
        let short = [0u8; 3];
        let frames: [&[u8]; 1] = [&short];
        let mut driver = harness.driver(small_config(ColorMode::EightBit));
        assert_eq!(
            driver.set_pages(Pages::new(&frames)),
            Err(BufferError::SizeMismatch {
                expected: 8,
                provided: 3
            })
        );
        assert!(matches!(driver.draw_mode(), DrawMode::Manual));
    }

    #[test]
    fn test_misfit_page_is_skipped_and_retried() {
        let harness = Harness::new();
        let short = [0xE0u8; 3];
        let frames: [&[u8]; 1] = [&short];
        let mut driver = harness.driver(small_config(ColorMode::EightBit));
        driver.mode = DrawMode::Pages(Pages::new(&frames));
        driver.setup(&mut harness.delay()).unwrap();

        driver.update().unwrap();

        assert_eq!(driver.framebuffer().pixel(0, 0).unwrap(), Color::BLACK);
        let pending = driver.pages_mut().and_then(|pages| pages.pending());
        assert_eq!(pending, Some(&short[..]));
    }

    #[test]
    fn test_page_navigation_wraps() {
        let a = [0u8; 1];
        let frames: [&[u8]; 3] = [&a, &a, &a];
        let mut pages = Pages::new(&frames);
        pages.prev_page();
        assert_eq!(pages.current(), 2);
        pages.next_page();
        assert_eq!(pages.current(), 0);
        assert!(pages.show(1));
        assert!(!pages.show(3));
        assert_eq!(pages.current(), 1);
    }

    #[test]
    fn test_poll_follows_interval() {
        let harness = Harness::new();
        let mut driver = harness.driver(small_config(ColorMode::Rgb565));
        driver.setup(&mut harness.delay()).unwrap();
        harness.clear();

        assert!(driver.poll(1_000).unwrap());
        assert_eq!(harness.commands(), [CASET, RASET, RAMWR]);
        driver.framebuffer_mut().write_pixel(1, 1, Color::WHITE).unwrap();
        assert!(!driver.poll(1_050).unwrap());
        assert!(!driver.framebuffer().dirty().is_empty());
        assert!(driver.poll(1_100).unwrap());
        assert!(driver.framebuffer().dirty().is_empty());
    }

    #[test]
    fn test_rotated_update_streams_exactly_the_window() {
        let harness = Harness::new();
        let config = Builder::new()
            .dimensions(Dimensions::new(8, 4).unwrap())
            .build()
            .unwrap();
        let mut driver = harness.driver(config);
        driver.setup(&mut harness.delay()).unwrap();
        driver.set_rotation(Rotation::Rotate90).unwrap();
        harness.clear();

        driver.update().unwrap();

        let log = harness.log.borrow();
        // inclusive start/end pair from a CASET/RASET payload
        let span = |event: &Event| match event {
            Event::Data(b) => {
                let start = u16::from_be_bytes([b[0], b[1]]);
                let end = u16::from_be_bytes([b[2], b[3]]);
                usize::from(end - start + 1)
            }
            _ => 0,
        };
        let window_pixels = span(&log[1]) * span(&log[3]);
        let streamed: usize = log[5..]
            .iter()
            .map(|event| match event {
                Event::Data(bytes) => bytes.len() / 2,
                _ => 0,
            })
            .sum();
        assert_eq!(log[4], Event::Command(RAMWR));
        assert_eq!((span(&log[1]), span(&log[3])), (4, 8));
        assert_eq!(streamed, window_pixels);
    }

    #[test]
    fn test_set_rotation_transposes_buffer() {
        let harness = Harness::new();
        let mut driver = harness.driver(small_config(ColorMode::Rgb565));
        driver.setup(&mut harness.delay()).unwrap();
        driver.update().unwrap();

        driver.set_rotation(Rotation::Rotate90).unwrap();
        assert_eq!((driver.width(), driver.height()), (2, 4));
        assert_eq!(
            driver.framebuffer().dirty().bounds(),
            Some(Rect::new(0, 0, 2, 4))
        );
    }
}
