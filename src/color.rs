//! RGB565 color type
//!
//! The ST7735 is driven in its 16-bit interface pixel format (COLMOD `0x05`),
//! so every color handled by this crate is a packed RGB565 value:
//!
//! | Bits   | Channel |
//! |--------|---------|
//! | 15..11 | Red     |
//! | 10..5  | Green   |
//! | 4..0   | Blue    |
//!
//! On the wire each pixel is sent big-endian (high byte first).
//!
//! ## Example
//!
//! ```
//! use st7735::Color;
//!
//! assert_eq!(Color::rgb(255, 0, 0), Color::RED);
//! assert_eq!(Color::rgb(0, 255, 0).raw(), 0x07E0);
//! assert_eq!(Color::BLUE.to_be_bytes(), [0x00, 0x1F]);
//! ```

/// Packed RGB565 color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    /// Black (`0x0000`)
    pub const BLACK: Self = Self(0x0000);
    /// White (`0xFFFF`)
    pub const WHITE: Self = Self(0xFFFF);
    /// Pure red (`0xF800`)
    pub const RED: Self = Self(0xF800);
    /// Pure green (`0x07E0`)
    pub const GREEN: Self = Self(0x07E0);
    /// Pure blue (`0x001F`)
    pub const BLUE: Self = Self(0x001F);
    /// Yellow (`0xFFE0`)
    pub const YELLOW: Self = Self(0xFFE0);
    /// Cyan (`0x07FF`)
    pub const CYAN: Self = Self(0x07FF);
    /// Magenta (`0xF81F`)
    pub const MAGENTA: Self = Self(0xF81F);

    /// Pack three 8-bit channels into RGB565
    ///
    /// The low bits of each channel are truncated (3 bits of red and blue,
    /// 2 bits of green).
    ///
    /// ## Example
    ///
    /// ```
    /// use st7735::Color;
    ///
    /// assert_eq!(Color::rgb(0, 0, 255).raw(), 0x001F);
    /// assert_eq!(Color::rgb(70, 130, 255).raw(), 0x441F);
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b >> 3) as u16))
    }

    /// Get the packed 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the two bytes sent to the controller for this color
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::raw::RawU16> for Color {
    fn from(raw: embedded_graphics_core::pixelcolor::raw::RawU16) -> Self {
        use embedded_graphics_core::pixelcolor::raw::RawData;
        Self(raw.into_inner())
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::Rgb565 {
    fn from(color: Color) -> Self {
        embedded_graphics_core::pixelcolor::raw::RawU16::new(color.0).into()
    }
}
