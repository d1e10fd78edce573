//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which wraps
//! [`Oled`] and implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait
//! from the embedded-graphics ecosystem.
//!
//! GOLDELOX modules have no host-side framebuffer: every pixel drawn
//! through this adapter becomes a put-pixel command transaction on the
//! serial link, including the settling delay and status byte. That makes
//! it suitable for cursors, glyphs and small sprites, not full-screen
//! rendering. Prefer the native primitives on [`Oled`] for lines,
//! rectangles, circles and text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use embedded_hal::delay::DelayNs;
//! use oled4d::{Builder, Color, Dimensions, GraphicDisplay, Oled, SerialInterface};
//! # use core::convert::Infallible;
//! # #[derive(Debug)]
//! # struct MockSerial;
//! # impl SerialInterface for MockSerial {
//! #     type Error = Infallible;
//! #     fn write(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn read_byte<D: DelayNs>(&mut self, _delay: &mut D) -> Result<u8, Self::Error> {
//! #         Ok(0x06)
//! #     }
//! #     fn reset<D: DelayNs>(&mut self, _delay: &mut D) {}
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let dims = match Dimensions::new(96, 64) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut oled = Oled::new(MockSerial, config);
//! # let mut delay = MockDelay;
//! let mut display = GraphicDisplay::new(&mut oled, &mut delay);
//!
//! let _ = Rectangle::new(Point::new(4, 4), Size::new(8, 8))
//!     .into_styled(PrimitiveStyle::with_fill(Color::RED))
//!     .draw(&mut display);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};
use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::display::Oled;
use crate::error::Error;
use crate::interface::SerialInterface;

/// embedded-graphics adapter over an [`Oled`] driver
///
/// Borrows the driver and a delay for the duration of a drawing pass and
/// forwards each pixel to a put-pixel command. Pixels outside the
/// configured display dimensions are skipped.
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`SerialInterface`]
/// * `D` - Delay implementing [`DelayNs`]
pub struct GraphicDisplay<'a, I, D>
where
    I: SerialInterface,
    D: DelayNs,
{
    /// The underlying display driver
    oled: &'a mut Oled<I>,
    /// Delay used for each forwarded command transaction
    delay: &'a mut D,
}

impl<'a, I, D> GraphicDisplay<'a, I, D>
where
    I: SerialInterface,
    D: DelayNs,
{
    /// Create a new adapter borrowing the driver and a delay
    pub fn new(oled: &'a mut Oled<I>, delay: &'a mut D) -> Self {
        Self { oled, delay }
    }

    /// Access the underlying driver
    pub fn oled(&self) -> &Oled<I> {
        self.oled
    }
}

impl<I, D> DrawTarget for GraphicDisplay<'_, I, D>
where
    I: SerialInterface,
    D: DelayNs,
{
    type Color = Color;
    type Error = Error<I>;

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

            self.oled.put_pixel(x as u8, y as u8, color, self.delay)?;
        }

        Ok(())
    }
}

impl<I, D> OriginDimensions for GraphicDisplay<'_, I, D>
where
    I: SerialInterface,
    D: DelayNs,
{
    fn size(&self) -> Size {
        let dims = self.oled.dimensions();
        Size::new(u32::from(dims.width), u32::from(dims.height))
    }
}
