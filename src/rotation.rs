//! Rotation geometry
//!
//! The ST7735 rotates in hardware: the MADCTL register swaps and mirrors the
//! RAM address counters, so pixel data is always sent row-major in the
//! rotated coordinate system. What changes with rotation is:
//!
//! - the visible width and height (swapped at 90° and 270°)
//! - the RAM offsets of the visible window, which is centered inside the
//!   larger controller RAM (e.g. 80x160 inside 132x162)
//! - the MADCTL value selecting row/column order
//!
//! ## Example
//!
//! ```
//! use st7735::{rotation::Geometry, Dimensions, Rotation};
//!
//! let panel = Dimensions { cols: 132, rows: 162 };
//! let visible = Dimensions { cols: 80, rows: 160 };
//!
//! let portrait = Geometry::new(panel, visible, Rotation::Rotate0);
//! assert_eq!((portrait.width, portrait.height), (80, 160));
//! assert_eq!((portrait.col_offset, portrait.row_offset), (26, 1));
//! assert_eq!(portrait.madctl, 0x08);
//!
//! let landscape = Geometry::new(panel, visible, Rotation::Rotate270);
//! assert_eq!((landscape.width, landscape.height), (160, 80));
//! assert_eq!((landscape.col_offset, landscape.row_offset), (1, 26));
//! assert_eq!(landscape.madctl, 0xA8);
//! ```

use crate::command::{MADCTL_BGR, MADCTL_MV, MADCTL_MX, MADCTL_MY};
use crate::config::{Dimensions, Rotation};

/// MADCTL value for a rotation
///
/// | Rotation | Bits          | Value  |
/// |----------|---------------|--------|
/// | 0°       | BGR           | `0x08` |
/// | 90°      | MX, MV, BGR   | `0x68` |
/// | 180°     | MY, MX, BGR   | `0xC8` |
/// | 270°     | MY, MV, BGR   | `0xA8` |
pub fn madctl(rotation: Rotation) -> u8 {
    let bits = match rotation {
        Rotation::Rotate0 => 0,
        Rotation::Rotate90 => MADCTL_MX | MADCTL_MV,
        Rotation::Rotate180 => MADCTL_MY | MADCTL_MX,
        Rotation::Rotate270 => MADCTL_MY | MADCTL_MV,
    };
    bits | MADCTL_BGR
}

/// Rotated view of the visible window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Visible width in the rotated orientation
    pub width: u16,
    /// Visible height in the rotated orientation
    pub height: u16,
    /// Added to every column address (CASET)
    pub col_offset: u16,
    /// Added to every row address (RASET)
    pub row_offset: u16,
    /// MADCTL register value
    pub madctl: u8,
}

impl Geometry {
    /// Compute geometry for a visible window centered in the panel RAM
    ///
    /// `visible` must not exceed `panel`; the [`Builder`](crate::Builder)
    /// guarantees this.
    pub fn new(panel: Dimensions, visible: Dimensions, rotation: Rotation) -> Self {
        let col_offset = panel.cols.saturating_sub(visible.cols) / 2;
        let row_offset = panel.rows.saturating_sub(visible.rows) / 2;
        let madctl = madctl(rotation);

        if rotation.is_landscape() {
            Self {
                width: visible.rows,
                height: visible.cols,
                col_offset: row_offset,
                row_offset: col_offset,
                madctl,
            }
        } else {
            Self {
                width: visible.cols,
                height: visible.rows,
                col_offset,
                row_offset,
                madctl,
            }
        }
    }

    /// Whether (x, y) lies inside the visible window
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }
}
