//! Hardware I/O port abstraction
//!
//! Some boards drive the DC and backlight lines through a memory-mapped GPIO
//! block rather than a HAL pin type. [`HardwarePort`] captures the minimal
//! capability the driver needs from such a block, and [`PortPin`] adapts one
//! line of it to the embedded-hal digital traits so it can be handed to
//! [`Interface`](crate::Interface) like any other pin.
//!
//! ## Example
//!
//! ```
//! use core::cell::Cell;
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use st7735::port::{HardwarePort, PinFunction, PortPin};
//!
//! struct Levels(Cell<u32>);
//!
//! impl HardwarePort for Levels {
//!     type Error = Infallible;
//!     fn set_function(&self, _pin: u8, _function: PinFunction) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//!     fn set(&self, pin: u8) -> Result<(), Infallible> {
//!         self.0.set(self.0.get() | 1 << pin);
//!         Ok(())
//!     }
//!     fn clear(&self, pin: u8) -> Result<(), Infallible> {
//!         self.0.set(self.0.get() & !(1 << pin));
//!         Ok(())
//!     }
//!     fn read(&self, pin: u8) -> Result<bool, Infallible> {
//!         Ok(self.0.get() & (1 << pin) != 0)
//!     }
//! }
//!
//! let port = Levels(Cell::new(0));
//! let mut backlight = PortPin::output(&port, 25)?;
//! backlight.set_high()?;
//! assert_eq!(port.read(25), Ok(true));
//! # Ok::<(), Infallible>(())
//! ```

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Function a port line can be switched to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinFunction {
    /// Line is sampled by [`HardwarePort::read`]
    Input,
    /// Line is driven by [`HardwarePort::set`] / [`HardwarePort::clear`]
    Output,
}

/// Minimal GPIO block capability
///
/// Methods take `&self` so several [`PortPin`]s can share one port; register
/// writes on such blocks are single stores to set/clear registers.
pub trait HardwarePort {
    /// Error type for port access
    type Error: embedded_hal::digital::Error;

    /// Select the function of a line
    fn set_function(&self, pin: u8, function: PinFunction) -> Result<(), Self::Error>;

    /// Drive a line high
    fn set(&self, pin: u8) -> Result<(), Self::Error>;

    /// Drive a line low
    fn clear(&self, pin: u8) -> Result<(), Self::Error>;

    /// Sample a line
    fn read(&self, pin: u8) -> Result<bool, Self::Error>;
}

/// One line of a [`HardwarePort`]
#[derive(Debug)]
pub struct PortPin<'a, P> {
    port: &'a P,
    pin: u8,
}

impl<'a, P: HardwarePort> PortPin<'a, P> {
    /// Claim `pin` as an output
    ///
    /// # Errors
    ///
    /// Returns the port error if the function cannot be selected.
    pub fn output(port: &'a P, pin: u8) -> Result<Self, P::Error> {
        port.set_function(pin, PinFunction::Output)?;
        Ok(Self { port, pin })
    }

    /// Claim `pin` as an input
    ///
    /// # Errors
    ///
    /// Returns the port error if the function cannot be selected.
    pub fn input(port: &'a P, pin: u8) -> Result<Self, P::Error> {
        port.set_function(pin, PinFunction::Input)?;
        Ok(Self { port, pin })
    }

    /// Line number within the port
    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl<P: HardwarePort> ErrorType for PortPin<'_, P> {
    type Error = P::Error;
}

impl<P: HardwarePort> OutputPin for PortPin<'_, P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.port.clear(self.pin)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.port.set(self.pin)
    }
}

impl<P: HardwarePort> InputPin for PortPin<'_, P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.port.read(self.pin)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.port.read(self.pin).map(|level| !level)
    }
}
