//! Graphics support via embedded-graphics
//!
//! [`FrameBuffer`] and [`St7796s`] implement
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) with
//! [`Rgb565`] colors. Drawing only touches the frame buffer and its dirty
//! region; call [`St7796s::update`] (or `poll`) to push the result.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use st7796s::{ColorMode, FrameBuffer, Rect};
//!
//! let mut storage = [0u8; 32 * 16 * 2];
//! let mut fb = match FrameBuffer::new(&mut storage[..], 32, 16, ColorMode::Rgb565) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! let _ = Rectangle::new(Point::new(4, 2), Size::new(8, 3))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut fb);
//!
//! assert_eq!(fb.dirty().bounds(), Some(Rect::new(4, 2, 12, 5)));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    prelude::Pixel,
    primitives::Rectangle,
};
use embedded_hal::digital::OutputPin;

use crate::color::Color;
use crate::driver::St7796s;
use crate::framebuffer::FrameBuffer;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            let _ = self.write_pixel(x as u16, y as u16, Color::from(color));
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        let w = (bottom_right.x - area.top_left.x + 1) as u16;
        let h = (bottom_right.y - area.top_left.y + 1) as u16;
        let _ = self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            w,
            h,
            Color::from(color),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        FrameBuffer::clear(self, Color::from(color));
        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I, B, RST, BL> DrawTarget for St7796s<'_, I, B, RST, BL>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    RST: OutputPin,
    BL: OutputPin,
{
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer_mut().fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(self.framebuffer_mut(), color)
    }
}

impl<I, B, RST, BL> OriginDimensions for St7796s<'_, I, B, RST, BL>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
    RST: OutputPin,
    BL: OutputPin,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}
