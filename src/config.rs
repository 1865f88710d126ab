//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};
use crate::command::{
    COLMOD_RGB565, MADCTL_BGR, MADCTL_MH, MADCTL_ML, MADCTL_MV, MADCTL_MX, MADCTL_MY,
};

/// Default update interval in milliseconds
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 1_000;

/// Panel dimensions in the controller's native (portrait) orientation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS || height == 0 || height > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Calculate required frame-buffer size in bytes for a color mode
    pub fn buffer_size(&self, mode: ColorMode) -> usize {
        self.pixel_count() * mode.bytes_per_pixel()
    }
}

/// Range of column/row addresses the controller accepts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AddressRange {
    /// Addressable columns
    pub cols: u16,
    /// Addressable rows
    pub rows: u16,
}

impl Default for AddressRange {
    fn default() -> Self {
        Self {
            cols: MAX_COLUMNS,
            rows: MAX_ROWS,
        }
    }
}

/// Frame-buffer pixel depth
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorMode {
    /// 16-bit RGB565, two bytes per pixel
    #[default]
    Rgb565,
    /// 8-bit RGB332, one byte per pixel (expanded to RGB565 on the wire)
    EightBit,
}

impl ColorMode {
    /// Bytes stored per pixel
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb565 => 2,
            Self::EightBit => 1,
        }
    }

    /// COLMOD parameter for this mode
    ///
    /// The controller is always driven at 16 bits per pixel; 8-bit frame
    /// buffers are expanded while streaming.
    pub fn pixel_format(self) -> u8 {
        match self {
            Self::Rgb565 | Self::EightBit => COLMOD_RGB565,
        }
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

impl Rotation {
    /// Whether rows and columns are exchanged
    pub fn is_transposed(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }

    /// MADCTL orientation bits
    pub fn madctl(self) -> u8 {
        match self {
            Self::Rotate0 => MADCTL_MX | MADCTL_MH,
            Self::Rotate90 => MADCTL_MV,
            Self::Rotate180 => MADCTL_MY | MADCTL_ML,
            Self::Rotate270 => MADCTL_MV | MADCTL_MX | MADCTL_MY | MADCTL_MH | MADCTL_ML,
        }
    }
}

/// Display configuration
///
/// Immutable once built. Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Panel dimensions (native orientation)
    pub dimensions: Dimensions,
    /// Column offset of the panel inside controller RAM
    pub col_start: u16,
    /// Row offset of the panel inside controller RAM
    pub row_start: u16,
    /// Frame-buffer pixel depth
    pub color_mode: ColorMode,
    /// Swap red and blue when serializing pixels, and set the MADCTL BGR bit
    pub use_bgr: bool,
    /// Enable display inversion during init
    pub invert_colors: bool,
    /// Display rotation
    pub rotation: Rotation,
    /// Interval between scheduled updates in milliseconds
    pub update_interval_ms: u32,
    /// Controller address range the offsets are validated against
    pub address_range: AddressRange,
    /// Send the vendor power/gamma table during init
    pub panel_tuning: bool,
}

impl Config {
    /// Get the rotated (logical) dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        if self.rotation.is_transposed() {
            Dimensions {
                width: self.dimensions.height,
                height: self.dimensions.width,
            }
        } else {
            self.dimensions
        }
    }

    /// MADCTL value for the configured rotation and color order
    pub fn madctl(&self) -> u8 {
        let bgr = if self.use_bgr { MADCTL_BGR } else { 0 };
        self.rotation.madctl() | bgr
    }

    /// Required frame-buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.dimensions.buffer_size(self.color_mode)
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use st7796s::{Builder, ColorMode, Dimensions};
///
/// let dims = match Dimensions::new(320, 480) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .color_mode(ColorMode::EightBit)
///     .invert_colors(true)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.buffer_size(), 320 * 480);
/// ```
#[must_use]
pub struct Builder {
    dimensions: Option<Dimensions>,
    col_start: u16,
    row_start: u16,
    color_mode: ColorMode,
    use_bgr: bool,
    invert_colors: bool,
    rotation: Rotation,
    update_interval_ms: u32,
    address_range: AddressRange,
    panel_tuning: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            col_start: 0,
            row_start: 0,
            color_mode: ColorMode::Rgb565,
            use_bgr: false,
            invert_colors: false,
            rotation: Rotation::Rotate0,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            address_range: AddressRange::default(),
            panel_tuning: false,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the column offset
    pub fn col_start(mut self, value: u16) -> Self {
        self.col_start = value;
        self
    }

    /// Set the row offset
    pub fn row_start(mut self, value: u16) -> Self {
        self.row_start = value;
        self
    }

    /// Set the frame-buffer pixel depth
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    /// Use BGR sub-pixel order
    pub fn use_bgr(mut self, value: bool) -> Self {
        self.use_bgr = value;
        self
    }

    /// Invert colors
    pub fn invert_colors(mut self, value: bool) -> Self {
        self.invert_colors = value;
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scheduled update interval in milliseconds
    pub fn update_interval_ms(mut self, value: u32) -> Self {
        self.update_interval_ms = value;
        self
    }

    /// Override the controller address range
    ///
    /// Modules that map the glass at large offsets need a wider range than
    /// the 320x480 default.
    pub fn address_range(mut self, cols: u16, rows: u16) -> Self {
        self.address_range = AddressRange { cols, rows };
        self
    }

    /// Send the vendor power/gamma table during init
    pub fn panel_tuning(mut self, value: bool) -> Self {
        self.panel_tuning = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::OffsetOutOfRange` if an offset pushes the panel past
    /// the controller address range.
    pub fn build(self) -> Result<Config, BuilderError> {
        let dimensions = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        let range = self.address_range;
        let cols_end = u32::from(self.col_start) + u32::from(dimensions.width);
        let rows_end = u32::from(self.row_start) + u32::from(dimensions.height);
        if cols_end > u32::from(range.cols) || rows_end > u32::from(range.rows) {
            return Err(BuilderError::OffsetOutOfRange {
                col_start: self.col_start,
                row_start: self.row_start,
                cols: range.cols,
                rows: range.rows,
            });
        }
        Ok(Config {
            dimensions,
            col_start: self.col_start,
            row_start: self.row_start,
            color_mode: self.color_mode,
            use_bgr: self.use_bgr,
            invert_colors: self.invert_colors,
            rotation: self.rotation,
            update_interval_ms: self.update_interval_ms,
            address_range: range,
            panel_tuning: self.panel_tuning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_rejects_zero() {
        assert!(Dimensions::new(0, 10).is_err());
        assert!(Dimensions::new(10, 0).is_err());
    }

    #[test]
    fn test_dimensions_rejects_oversize() {
        assert_eq!(
            Dimensions::new(321, 480),
            Err(BuilderError::InvalidDimensions {
                width: 321,
                height: 480
            })
        );
        assert!(Dimensions::new(320, 481).is_err());
        assert!(Dimensions::new(320, 480).is_ok());
    }

    #[test]
    fn test_buffer_size_per_mode() {
        let dims = Dimensions::new(320, 480).unwrap();
        assert_eq!(dims.buffer_size(ColorMode::Rgb565), 320 * 480 * 2);
        assert_eq!(dims.buffer_size(ColorMode::EightBit), 320 * 480);
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .build()
            .unwrap();
        assert_eq!(config.update_interval_ms, 1_000);
        assert_eq!(config.color_mode, ColorMode::Rgb565);
        assert!(!config.use_bgr);
        assert!(!config.invert_colors);
        assert!(!config.panel_tuning);
        assert_eq!(config.madctl(), MADCTL_MX | MADCTL_MH);
    }

    #[test]
    fn test_builder_missing_dimensions() {
        assert_eq!(Builder::new().build(), Err(BuilderError::MissingDimensions));
    }

    #[test]
    fn test_builder_offset_out_of_range() {
        let result = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .col_start(40)
            .build();
        assert!(matches!(
            result,
            Err(BuilderError::OffsetOutOfRange { col_start: 40, .. })
        ));
    }

    #[test]
    fn test_builder_offset_within_widened_range() {
        let config = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .col_start(40)
            .row_start(53)
            .address_range(360, 533)
            .build()
            .unwrap();
        assert_eq!(config.col_start, 40);
        assert_eq!(config.row_start, 53);
    }

    #[test]
    fn test_rotated_dimensions() {
        let config = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .rotation(Rotation::Rotate90)
            .build()
            .unwrap();
        let rotated = config.rotated_dimensions();
        assert_eq!((rotated.width, rotated.height), (480, 320));
    }

    #[test]
    fn test_madctl_bgr_bit() {
        let config = Builder::new()
            .dimensions(Dimensions::new(320, 480).unwrap())
            .use_bgr(true)
            .build()
            .unwrap();
        assert_eq!(config.madctl() & MADCTL_BGR, MADCTL_BGR);
    }
}
