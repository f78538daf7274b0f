//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Drawing operations never return errors: out-of-bounds coordinates are
//! clipped and transfer failures are logged. Only handle creation, buffering,
//! flushing and scrolling report failures to the caller.
//!
//! ## Example
//!
//! ```
//! use st7735::{Builder, BuilderError, Dimensions};
//!
//! // Wider than the controller's 132 columns
//! let result = Dimensions::new(200, 80);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // Visible window larger than the panel
//! let (Ok(panel), Ok(visible)) = (Dimensions::new(128, 128), Dimensions::new(80, 160)) else {
//!     return;
//! };
//! let result = Builder::new().panel(panel).visible(visible).build();
//! assert!(matches!(result, Err(BuilderError::VisibleExceedsPanel { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Maximum column count addressable by the ST7735 (GM = 00 mode)
pub const MAX_COLS: u16 = 132;

/// Maximum row count addressable by the ST7735 (GM = 00 mode)
pub const MAX_ROWS: u16 = 162;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// A buffer could not be allocated
    ///
    /// Raised when creating the display (scratch buffer) or when enabling
    /// buffered mode (framebuffer).
    OutOfMemory {
        /// Requested size in bytes
        requested: usize,
    },
    /// Scroll areas do not add up to the panel height
    InvalidScrollArea {
        /// Top fixed area in lines
        top_fixed: u16,
        /// Scrolling area in lines
        scroll_area: u16,
        /// Bottom fixed area in lines
        bottom_fixed: u16,
        /// Panel rows the three areas must add up to
        expected: u16,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::OutOfMemory { requested } => {
                write!(f, "Out of memory: could not allocate {requested} bytes")
            }
            Self::InvalidScrollArea {
                top_fixed,
                scroll_area,
                bottom_fixed,
                expected,
            } => write!(
                f,
                "Invalid scroll area: {top_fixed}+{scroll_area}+{bottom_fixed} lines (must total {expected})"
            ),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of columns (width) requested
        cols: u16,
        /// Number of rows (height) requested
        rows: u16,
    },
    /// The visible window does not fit inside the panel
    VisibleExceedsPanel {
        /// Visible columns
        cols: u16,
        /// Visible rows
        rows: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { cols, rows } => write!(
                f,
                "Invalid dimensions {cols}x{rows} (must be non-zero, max {MAX_COLS}x{MAX_ROWS})"
            ),
            Self::VisibleExceedsPanel { cols, rows } => {
                write!(f, "Visible window {cols}x{rows} exceeds the panel")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
