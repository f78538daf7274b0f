//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7735 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7735 requires:
//! - SPI bus (MOSI + SCK, CS handled by the [`SpiDevice`]), mode 0, 8-bit words,
//!   up to [`MAX_SPI_FREQUENCY_HZ`]
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **BL**: Backlight enable (output, active high)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7735::{DisplayInterface, Interface};
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
//! // Create interface with SPI, DC and backlight pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Send command
//! let _ = interface.send_command(0x11); // Sleep out
//!
//! // Send data
//! let _ = interface.send_data(&[0x01, 0x2C, 0x2D]);
//!
//! // Backlight on
//! let _ = interface.set_backlight(true);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{MODE_0, Mode, SpiDevice};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Largest single SPI transfer issued by [`Interface`]
///
/// Longer data bursts are split into sequential transfers of at most this
/// many bytes (the default spidev buffer size on Linux hosts).
pub const MAX_TRANSFER_SIZE: usize = 4096;

/// Highest SPI clock the controller is driven at
pub const MAX_SPI_FREQUENCY_HZ: u32 = 16_000_000;

/// SPI mode expected by the controller
pub const SPI_MODE: Mode = MODE_0;

/// Trait for hardware interface to the ST7735 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., different pin polarities, a parallel bus),
/// implement this trait on your own type.
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

    /// Switch the backlight on or off
    ///
    /// # Errors
    ///
    /// Returns an error if the GPIO fails.
    #[allow(clippy::type_complexity)]
    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error>;

    /// Send bytes as either data (`is_data`) or commands
    ///
    /// Every byte of a command-framed send is a separate command.
    #[allow(clippy::type_complexity)]
    fn send(&mut self, bytes: &[u8], is_data: bool) -> InterfaceResult<(), Self::Error> {
        if is_data {
            return self.send_data(bytes);
        }
        for &command in bytes {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Send a command followed by its parameter bytes (if any)
    #[allow(clippy::type_complexity)]
    fn write_register(&mut self, command: u8, params: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.send_command(command)?;
        if !params.is_empty() {
            self.send_data(params)?;
        }
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

/// Hardware interface implementation for the ST7735
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `BL` - Backlight pin implementing [`OutputPin`]
pub struct Interface<SPI, DC, BL> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Backlight pin (active high)
    bl: BL,
}

impl<SPI, DC, BL> Interface<SPI, DC, BL>
where
    SPI: SpiDevice,
    DC: OutputPin,
    BL: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `bl` - Backlight pin (output, active high)
    pub fn new(spi: SPI, dc: DC, bl: BL) -> Self {
        Self { spi, dc, bl }
    }

    /// Consume the interface and return the bus and pins
    pub fn release(self) -> (SPI, DC, BL) {
        (self.spi, self.dc, self.bl)
    }
}

impl<SPI, DC, BL, PinErr> DisplayInterface for Interface<SPI, DC, BL>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
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
        for chunk in data.chunks(MAX_TRANSFER_SIZE) {
            self.spi.write(chunk).map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> InterfaceResult<(), Self::Error> {
        if on {
            self.bl.set_high().map_err(InterfaceError::Pin)
        } else {
            self.bl.set_low().map_err(InterfaceError::Pin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Level, MockError, RecordingPin, RecordingSpi};
    use alloc::vec;

    fn test_interface() -> Interface<RecordingSpi, RecordingPin, RecordingPin> {
        Interface::new(RecordingSpi::new(), RecordingPin::new(), RecordingPin::new())
    }

    #[test]
    fn test_max_transfer_size() {
        assert_eq!(MAX_TRANSFER_SIZE, 4096);
    }

    #[test]
    fn test_send_command_drives_dc_low() {
        let mut interface = test_interface();
        assert!(interface.send_command(0x2A).is_ok());

        let (spi, dc, _) = interface.release();
        assert_eq!(dc.history, vec![Level::Low]);
        assert_eq!(spi.writes, vec![vec![0x2A]]);
    }

    #[test]
    fn test_send_data_drives_dc_high() {
        let mut interface = test_interface();
        assert!(interface.send_data(&[1, 2, 3]).is_ok());

        let (spi, dc, _) = interface.release();
        assert_eq!(dc.history, vec![Level::High]);
        assert_eq!(spi.writes, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_send_data_splits_long_bursts() {
        let mut interface = test_interface();
        // One full 160x80 frame
        let frame = vec![0xA5u8; 160 * 80 * 2];
        assert!(interface.send_data(&frame).is_ok());

        let (spi, _, _) = interface.release();
        let lengths: alloc::vec::Vec<usize> = spi.writes.iter().map(alloc::vec::Vec::len).collect();
        assert_eq!(lengths, vec![4096, 4096, 4096, 4096, 4096, 4096, 1024]);
    }

    #[test]
    fn test_send_data_exact_chunk_is_single_transfer() {
        let mut interface = test_interface();
        assert!(interface.send_data(&[0u8; MAX_TRANSFER_SIZE]).is_ok());

        let (spi, _, _) = interface.release();
        assert_eq!(spi.writes.len(), 1);
    }

    #[test]
    fn test_send_dispatches_on_framing() {
        let mut interface = test_interface();
        assert!(interface.send(&[0x11, 0x29], false).is_ok());
        assert!(interface.send(&[0x05], true).is_ok());

        let (spi, dc, _) = interface.release();
        assert_eq!(dc.history, vec![Level::Low, Level::Low, Level::High]);
        assert_eq!(spi.writes, vec![vec![0x11], vec![0x29], vec![0x05]]);
    }

    #[test]
    fn test_write_register_without_params_sends_command_only() {
        let mut interface = test_interface();
        assert!(interface.write_register(0x29, &[]).is_ok());

        let (spi, dc, _) = interface.release();
        assert_eq!(dc.history, vec![Level::Low]);
        assert_eq!(spi.writes, vec![vec![0x29]]);
    }

    #[test]
    fn test_backlight_follows_requested_state() {
        let mut interface = test_interface();
        assert!(interface.set_backlight(true).is_ok());
        assert!(interface.set_backlight(false).is_ok());

        let (_, _, bl) = interface.release();
        assert_eq!(bl.history, vec![Level::High, Level::Low]);
    }

    #[test]
    fn test_spi_failure_is_reported() {
        let mut spi = RecordingSpi::new();
        spi.fail = true;
        let mut interface = Interface::new(spi, RecordingPin::new(), RecordingPin::new());

        let result = interface.send_command(0x01);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
    }
}
