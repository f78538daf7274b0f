//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLS, MAX_ROWS};
use crate::rotation::Geometry;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (width in pixels, unrotated)
    pub cols: u16,
    /// Number of rows (height in pixels, unrotated)
    pub rows: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - cols == 0 or cols > MAX_COLS
    /// - rows == 0 or rows > MAX_ROWS
    pub fn new(cols: u16, rows: u16) -> Result<Self, BuilderError> {
        if cols == 0 || cols > MAX_COLS || rows == 0 || rows > MAX_ROWS {
            return Err(BuilderError::InvalidDimensions { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Number of pixels covered
    pub fn pixel_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Size in bytes of one RGB565 frame at these dimensions
    pub fn frame_size(&self) -> usize {
        self.pixel_count() * 2
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation (portrait)
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise (landscape)
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise (landscape)
    Rotate270,
}

impl Rotation {
    /// Convert from degrees
    ///
    /// Returns `None` unless `degrees` is 0, 90, 180 or 270.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Self::Rotate0),
            90 => Some(Self::Rotate90),
            180 => Some(Self::Rotate180),
            270 => Some(Self::Rotate270),
            _ => None,
        }
    }

    /// Rotation in degrees
    pub fn degrees(self) -> u16 {
        match self {
            Self::Rotate0 => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Whether width and height are exchanged
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7735 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Controller RAM dimensions the panel is wired to
    pub panel: Dimensions,
    /// Visible window, in the unrotated orientation
    pub visible: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Frame rate control, normal mode (FRMCTR1)
    pub frame_rate_normal: [u8; 3],
    /// Frame rate control, idle mode (FRMCTR2)
    pub frame_rate_idle: [u8; 3],
    /// Frame rate control, partial mode (FRMCTR3)
    pub frame_rate_partial: [u8; 6],
    /// Display inversion control (INVCTR)
    pub inversion_control: u8,
    /// Power control 1 (PWCTR1)
    pub power_control1: [u8; 3],
    /// Power control 2 (PWCTR2)
    pub power_control2: [u8; 2],
    /// Power control 4 (PWCTR4)
    pub power_control4: [u8; 2],
    /// Power control 5 (PWCTR5)
    pub power_control5: [u8; 2],
    /// VCOM control (VMCTR1)
    pub vcom: u8,
    /// Positive gamma correction table (GMCTRP1)
    pub gamma_positive: [u8; 16],
    /// Negative gamma correction table (GMCTRN1)
    pub gamma_negative: [u8; 16],
    /// Whether to enable display inversion (INVON)
    pub invert_colors: bool,
}

impl Config {
    /// Compute the rotated geometry (size, RAM offsets, MADCTL value)
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.panel, self.visible, self.rotation)
    }
}

/// Builder for constructing display configuration
///
/// The defaults describe the common 0.96" 80x160 IPS module: an 80x160
/// window centered in the 132x162 controller RAM, with color inversion.
///
/// # Example
///
/// ```
/// use st7735::{Builder, Rotation};
///
/// let config = match Builder::new().rotation(Rotation::Rotate270).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let geometry = config.geometry();
/// assert_eq!((geometry.width, geometry.height), (160, 80));
/// ```
#[must_use]
pub struct Builder {
    panel: Dimensions,
    visible: Dimensions,
    rotation: Rotation,
    frame_rate_normal: [u8; 3],
    frame_rate_idle: [u8; 3],
    frame_rate_partial: [u8; 6],
    inversion_control: u8,
    power_control1: [u8; 3],
    power_control2: [u8; 2],
    power_control4: [u8; 2],
    power_control5: [u8; 2],
    vcom: u8,
    gamma_positive: [u8; 16],
    gamma_negative: [u8; 16],
    invert_colors: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            panel: Dimensions {
                cols: MAX_COLS,
                rows: MAX_ROWS,
            },
            visible: Dimensions {
                cols: 80,
                rows: 160,
            },
            rotation: Rotation::Rotate0,
            // Fosc / ((RTNA x 2 + 40) x (LINE + FPA + BPA))
            frame_rate_normal: [0x01, 0x2C, 0x2D],
            frame_rate_idle: [0x01, 0x2C, 0x2D],
            frame_rate_partial: [0x01, 0x2C, 0x2D, 0x01, 0x2C, 0x2D],
            // Column inversion in all modes
            inversion_control: 0x07,
            // -4.6V, AUTO mode
            power_control1: [0xA2, 0x02, 0x84],
            power_control2: [0x0A, 0x00],
            power_control4: [0x8A, 0x2A],
            power_control5: [0x8A, 0xEE],
            vcom: 0x0E,
            gamma_positive: [
                0x02, 0x1C, 0x07, 0x12, 0x37, 0x32, 0x29, 0x2D, 0x29, 0x25, 0x2B, 0x39, 0x00, 0x01,
                0x03, 0x10,
            ],
            gamma_negative: [
                0x03, 0x1D, 0x07, 0x06, 0x2E, 0x2C, 0x29, 0x2D, 0x2E, 0x2E, 0x37, 0x3F, 0x00, 0x00,
                0x02, 0x10,
            ],
            invert_colors: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controller RAM dimensions the panel is wired to
    pub fn panel(mut self, dims: Dimensions) -> Self {
        self.panel = dims;
        self
    }

    /// Set the visible window size (unrotated)
    pub fn visible(mut self, dims: Dimensions) -> Self {
        self.visible = dims;
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set normal mode frame rate parameters
    pub fn frame_rate_normal(mut self, values: [u8; 3]) -> Self {
        self.frame_rate_normal = values;
        self
    }

    /// Set idle mode frame rate parameters
    pub fn frame_rate_idle(mut self, values: [u8; 3]) -> Self {
        self.frame_rate_idle = values;
        self
    }

    /// Set partial mode frame rate parameters
    pub fn frame_rate_partial(mut self, values: [u8; 6]) -> Self {
        self.frame_rate_partial = values;
        self
    }

    /// Set display inversion control
    pub fn inversion_control(mut self, value: u8) -> Self {
        self.inversion_control = value;
        self
    }

    /// Set power control 1 parameters
    pub fn power_control1(mut self, values: [u8; 3]) -> Self {
        self.power_control1 = values;
        self
    }

    /// Set power control 2 parameters
    pub fn power_control2(mut self, values: [u8; 2]) -> Self {
        self.power_control2 = values;
        self
    }

    /// Set power control 4 parameters
    pub fn power_control4(mut self, values: [u8; 2]) -> Self {
        self.power_control4 = values;
        self
    }

    /// Set power control 5 parameters
    pub fn power_control5(mut self, values: [u8; 2]) -> Self {
        self.power_control5 = values;
        self
    }

    /// Set VCOM value
    pub fn vcom(mut self, value: u8) -> Self {
        self.vcom = value;
        self
    }

    /// Set the positive and negative gamma tables
    pub fn gamma(mut self, positive: [u8; 16], negative: [u8; 16]) -> Self {
        self.gamma_positive = positive;
        self.gamma_negative = negative;
        self
    }

    /// Set whether display inversion is enabled
    ///
    /// IPS modules usually need it; TN modules usually do not.
    pub fn invert_colors(mut self, value: bool) -> Self {
        self.invert_colors = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::VisibleExceedsPanel` if the visible window is
    /// larger than the panel in either direction.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.visible.cols > self.panel.cols || self.visible.rows > self.panel.rows {
            return Err(BuilderError::VisibleExceedsPanel {
                cols: self.visible.cols,
                rows: self.visible.rows,
            });
        }
        Ok(Config {
            panel: self.panel,
            visible: self.visible,
            rotation: self.rotation,
            frame_rate_normal: self.frame_rate_normal,
            frame_rate_idle: self.frame_rate_idle,
            frame_rate_partial: self.frame_rate_partial,
            inversion_control: self.inversion_control,
            power_control1: self.power_control1,
            power_control2: self.power_control2,
            power_control4: self.power_control4,
            power_control5: self.power_control5,
            vcom: self.vcom,
            gamma_positive: self.gamma_positive,
            gamma_negative: self.gamma_negative,
            invert_colors: self.invert_colors,
        })
    }
}
