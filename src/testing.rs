//! Test doubles shared by the unit tests

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::spi::{Operation, SpiDevice};

use crate::command::{CASET, RAMWR, RASET};
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::digital::Error for MockError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl embedded_hal::spi::Error for MockError {
    fn kind(&self) -> embedded_hal::spi::ErrorKind {
        embedded_hal::spi::ErrorKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// SPI device that records every write
#[derive(Debug, Default)]
pub struct RecordingSpi {
    pub writes: Vec<Vec<u8>>,
    pub fail: bool,
}

impl RecordingSpi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl embedded_hal::spi::ErrorType for RecordingSpi {
    type Error = MockError;
}

impl SpiDevice for RecordingSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        if self.fail {
            return Err(MockError);
        }
        for op in operations.iter() {
            if let Operation::Write(bytes) = op {
                self.writes.push(bytes.to_vec());
            }
        }
        Ok(())
    }
}

/// Output pin that records every level change
#[derive(Debug, Default)]
pub struct RecordingPin {
    pub history: Vec<Level>,
}

impl RecordingPin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorType for RecordingPin {
    type Error = MockError;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.history.push(Level::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.history.push(Level::High);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transfer {
    Command(u8),
    Data(Vec<u8>),
}

/// Display interface that records the command/data stream
#[derive(Debug, Default)]
pub struct MockInterface {
    pub transfers: Vec<Transfer>,
    pub backlight: Vec<bool>,
    /// Fail every transfer once this many transfers have succeeded
    pub fail_after: Option<usize>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(transfers: usize) -> Self {
        Self {
            fail_after: Some(transfers),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Command(c) => Some(*c),
                Transfer::Data(_) => None,
            })
            .collect()
    }

    /// Parameter bytes of every occurrence of `command`
    pub fn params_of(&self, command: u8) -> Vec<Vec<u8>> {
        let mut found = Vec::new();
        let mut iter = self.transfers.iter().peekable();
        while let Some(t) = iter.next() {
            if *t == Transfer::Command(command) {
                match iter.peek() {
                    Some(Transfer::Data(data)) => found.push(data.clone()),
                    _ => found.push(Vec::new()),
                }
            }
        }
        found
    }

    /// Decoded (x0, y0, x1, y1, pixel bytes) of every windowed write, in
    /// controller coordinates (offsets included)
    pub fn windows(&self) -> Vec<(u16, u16, u16, u16, Vec<u8>)> {
        let mut found = Vec::new();
        let t = &self.transfers;
        for i in 0..t.len() {
            if t[i] != Transfer::Command(CASET) || i + 5 >= t.len() {
                continue;
            }
            if let (
                Transfer::Data(cols),
                Transfer::Command(RASET),
                Transfer::Data(rows),
                Transfer::Command(RAMWR),
                Transfer::Data(pixels),
            ) = (&t[i + 1], &t[i + 2], &t[i + 3], &t[i + 4], &t[i + 5])
            {
                found.push((
                    u16::from_be_bytes([cols[0], cols[1]]),
                    u16::from_be_bytes([rows[0], rows[1]]),
                    u16::from_be_bytes([cols[2], cols[3]]),
                    u16::from_be_bytes([rows[2], rows[3]]),
                    pixels.clone(),
                ));
            }
        }
        found
    }

    fn check(&mut self) -> Result<(), MockError> {
        match self.fail_after {
            Some(0) => Err(MockError),
            Some(n) => {
                self.fail_after = Some(n - 1);
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.check()?;
        self.transfers.push(Transfer::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        self.transfers.push(Transfer::Data(data.to_vec()));
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.backlight.push(on);
        Ok(())
    }
}

/// Delay that records requested milliseconds instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.ms.push(ms);
    }
}
