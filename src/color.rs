//! Color type and pixel encodings
//!
//! [`Color`] holds a color at RGB565 precision (5 bits red, 6 bits green,
//! 5 bits blue). The frame buffer stores it canonically as big-endian RGB565
//! or as RGB332; the red/blue swap for BGR panels happens only when pixels are
//! serialized for the wire.
//!
//! | Encoding | Layout |
//! |----------|--------|
//! | RGB565 | `RRRRRGGG GGGBBBBB` |
//! | RGB332 | `RRRGGGBB` |
//!
//! ## Example
//!
//! ```
//! use st7796s::Color;
//!
//! let white = Color::new(31, 63, 31);
//! assert_eq!(white.to_wire(false), [0xFF, 0xFF]);
//!
//! let red = Color::RED;
//! assert_eq!(red.to_rgb565(), 0xF800);
//! // BGR panels get red in the low bits
//! assert_eq!(red.to_wire(true), [0x00, 0x1F]);
//! ```

/// A color at RGB565 precision
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Black
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// White
    pub const WHITE: Self = Self {
        r: 0x1F,
        g: 0x3F,
        b: 0x1F,
    };
    /// Red
    pub const RED: Self = Self { r: 0x1F, g: 0, b: 0 };
    /// Green
    pub const GREEN: Self = Self { r: 0, g: 0x3F, b: 0 };
    /// Blue
    pub const BLUE: Self = Self { r: 0, g: 0, b: 0x1F };

    /// Create a color from 5-bit red, 6-bit green and 5-bit blue channels
    ///
    /// Extra high bits are masked off.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r & 0x1F,
            g: g & 0x3F,
            b: b & 0x1F,
        }
    }

    /// Create a color from 8-bit channels, truncating to RGB565 precision
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::new(r >> 3, g >> 2, b >> 3)
    }

    /// Decode a packed RGB565 value
    pub const fn from_rgb565(value: u16) -> Self {
        Self::new((value >> 11) as u8, (value >> 5) as u8, value as u8)
    }

    /// Decode a packed RGB332 value, scaling each channel to full range
    pub const fn from_rgb332(value: u8) -> Self {
        let r3 = (value >> 5) & 0x07;
        let g3 = (value >> 2) & 0x07;
        let b2 = value & 0x03;
        Self::new(
            (r3 << 2) | (r3 >> 1),
            (g3 << 3) | g3,
            (b2 << 3) | (b2 << 1) | (b2 >> 1),
        )
    }

    /// Red channel (0..=31)
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel (0..=63)
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel (0..=31)
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Packed RGB565 value
    pub const fn to_rgb565(self) -> u16 {
        ((self.r as u16) << 11) | ((self.g as u16) << 5) | self.b as u16
    }

    /// Packed RGB332 value (top bits of each channel)
    pub const fn to_rgb332(self) -> u8 {
        ((self.r >> 2) << 5) | ((self.g >> 3) << 2) | (self.b >> 3)
    }

    /// Same color with red and blue exchanged
    pub const fn swap_red_blue(self) -> Self {
        Self {
            r: self.b,
            g: self.g,
            b: self.r,
        }
    }

    /// Big-endian RGB565 bytes as sent to the controller
    pub const fn to_wire(self, use_bgr: bool) -> [u8; 2] {
        let color = if use_bgr { self.swap_red_blue() } else { self };
        color.to_rgb565().to_be_bytes()
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;
        Self::new(color.r(), color.g(), color.b())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        Self::new(color.r, color.g, color.b)
    }
}
