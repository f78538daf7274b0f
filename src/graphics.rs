//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] and [`OriginDimensions`] so any
//! embedded-graphics drawable can be rendered on it. Pixels go through the
//! same path as the native primitives: they are clipped, and land in the
//! framebuffer when buffering is enabled.
//!
//! Solid fills ([`DrawTarget::fill_solid`] and [`DrawTarget::clear`]) map
//! onto [`Display::fill_rect`] and [`Display::fill`], so in direct mode they
//! cost a single burst.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use st7735::{Builder, Color, Display, Interface, Rotation};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let interface = Interface::new(MockSpi, MockPin, MockPin);
//! let config = match Builder::new().rotation(Rotation::Rotate90).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let Ok(mut display) = Display::new(interface, config, &mut delay) else {
//!     return;
//! };
//! let _ = display.set_buffered(true);
//!
//! let _ = display.clear(Color::BLACK);
//! let _ = Rectangle::new(Point::new(4, 4), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::from(Rgb565::GREEN), 1))
//!     .draw(&mut display);
//! let _ = Circle::new(Point::new(100, 20), 30)
//!     .into_styled(PrimitiveStyle::with_fill(Color::RED))
//!     .draw(&mut display);
//!
//! // Only the touched region is sent
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::color::Color;
use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.pixel(x, y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = i32::try_from(area.size.width).unwrap_or(i32::MAX);
        let h = i32::try_from(area.size.height).unwrap_or(i32::MAX);
        self.fill_rect(area.top_left.x, area.top_left.y, w, h, color);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}
