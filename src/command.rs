//! ST7735 command definitions
//!
//! Command bytes are sent with the DC line low; any parameters follow as data
//! bytes with DC high.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735::{command, DisplayInterface, Interface};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Leave sleep mode
//! let _ = interface.send_command(command::SLPOUT);
//!
//! // 16 bits per pixel
//! let _ = interface.send_command(command::COLMOD);
//! let _ = interface.send_data(&[command::COLMOD_16BIT]);
//! ```

// System control commands

/// Software reset (0x01)
///
/// Registers return to their reset values. Wait 120ms+ before the next command.
pub const SWRESET: u8 = 0x01;

/// Sleep out (0x11)
///
/// Turns on the booster and oscillator. The panel needs a long settle time.
pub const SLPOUT: u8 = 0x11;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
///
/// Most 0.96" 80x160 IPS modules need inversion for correct colors.
pub const INVON: u8 = 0x21;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Memory window commands

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
/// Followed by pixel data for the current window, row-major, two bytes per
/// pixel in RGB565 big-endian.
pub const RAMWR: u8 = 0x2C;

/// Vertical scrolling definition (0x33)
///
/// Requires 6 bytes: top fixed area, scroll area, bottom fixed area (each MSB, LSB).
pub const VSCRDEF: u8 = 0x33;

/// Memory data access control (0x36)
///
/// Requires 1 byte:
/// - Bit 7 (MY): row address order
/// - Bit 6 (MX): column address order
/// - Bit 5 (MV): row/column exchange
/// - Bit 4 (ML): vertical refresh order
/// - Bit 3 (RGB): color order (1 = BGR)
/// - Bit 2 (MH): horizontal refresh order
pub const MADCTL: u8 = 0x36;

/// Vertical scroll start address (0x37)
///
/// Requires 2 bytes: [line_MSB, line_LSB]
pub const VSCRSADD: u8 = 0x37;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte, see [`COLMOD_16BIT`].
pub const COLMOD: u8 = 0x3A;

/// COLMOD parameter selecting 16 bits per pixel (RGB565)
pub const COLMOD_16BIT: u8 = 0x05;

// Panel function commands

/// Frame rate control in normal mode (0xB1)
///
/// Requires 3 bytes: [RTNA, FPA, BPA]
pub const FRMCTR1: u8 = 0xB1;

/// Frame rate control in idle mode (0xB2)
///
/// Requires 3 bytes: [RTNB, FPB, BPB]
pub const FRMCTR2: u8 = 0xB2;

/// Frame rate control in partial mode (0xB3)
///
/// Requires 6 bytes: dot inversion then column inversion settings.
pub const FRMCTR3: u8 = 0xB3;

/// Display inversion control (0xB4)
///
/// Requires 1 byte.
pub const INVCTR: u8 = 0xB4;

/// Power control 1 (0xC0)
///
/// Requires 3 bytes: AVDD/GVDD, GVCL, mode.
pub const PWCTR1: u8 = 0xC0;

/// Power control 2 (0xC1)
///
/// Requires 2 bytes: VGH25/VGSEL/VGHBT setting.
pub const PWCTR2: u8 = 0xC1;

/// Power control 4, partial mode (0xC3)
///
/// Requires 2 bytes.
pub const PWCTR4: u8 = 0xC3;

/// Power control 5, idle mode (0xC4)
///
/// Requires 2 bytes.
pub const PWCTR5: u8 = 0xC4;

/// VCOM control 1 (0xC5)
///
/// Requires 1 byte.
pub const VMCTR1: u8 = 0xC5;

/// Positive gamma correction (0xE0)
///
/// Requires 16 bytes.
pub const GMCTRP1: u8 = 0xE0;

/// Negative gamma correction (0xE1)
///
/// Requires 16 bytes.
pub const GMCTRN1: u8 = 0xE1;

// MADCTL bits

/// Row address order
pub const MADCTL_MY: u8 = 0x80;
/// Column address order
pub const MADCTL_MX: u8 = 0x40;
/// Row/column exchange
pub const MADCTL_MV: u8 = 0x20;
/// BGR color filter order
///
/// Always set: the supported panels are wired BGR.
pub const MADCTL_BGR: u8 = 0x08;
