//! ST7735 LCD Driver
//!
//! A driver for the ST7735 SPI color LCD controller, targeting the small
//! 80x160 IPS modules that use a window of its 132x162 RAM.
//!
//! ## Features
//!
//! - `no_std` compatible (requires `alloc`)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature, on by default)
//! - 90° rotation steps with automatic RAM window offsets
//! - Direct drawing or a framebuffer that flushes only the dirty rectangle
//! - Lines, rectangles, circles and bitmap-font text, clipped to the screen
//! - Hardware vertical scrolling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735::{Builder, Color, Display, Interface, Rotation, TextStyle, font::FONT_5X7};
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
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let bl = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, bl);
//! let config = match Builder::new().rotation(Rotation::Rotate270).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::new(interface, config, &mut delay) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! if display.set_buffered(true).is_err() {
//!     return;
//! }
//!
//! display.fill(Color::BLACK);
//! display.fill_rect(10, 10, 20, 20, Color::RED);
//! display.circle(80, 40, 25, Color::rgb(70, 130, 255));
//!
//! let style = TextStyle::new(FONT_5X7, Color::WHITE).spacing(1);
//! display.draw_text(40, 70, "ST7735", &style);
//!
//! let _ = display.flush();
//! ```

#![no_std]

extern crate alloc;

/// RGB565 color type
pub mod color;
/// ST7735 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bitmap fonts
pub mod font;
/// Off-screen pixel buffer and dirty-rectangle tracking
pub mod framebuffer;
/// Controller initialization sequence
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// GPIO block abstraction and pin adapters
pub mod port;
/// Line and circle rasterization
pub mod primitives;
/// Rotation geometry
pub mod rotation;
/// Text rendering
pub mod text;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(test)]
mod testing;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_COLS, MAX_ROWS, Rotation};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use font::{FONT_5X7, Font, FontKind};
pub use framebuffer::Window;
pub use interface::InterfaceError;
pub use interface::{
    DisplayInterface, Interface, MAX_SPI_FREQUENCY_HZ, MAX_TRANSFER_SIZE, SPI_MODE,
};
pub use port::{HardwarePort, PinFunction, PortPin};
pub use rotation::Geometry;
pub use text::TextStyle;
