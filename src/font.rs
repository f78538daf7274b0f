//! Bitmap fonts
//!
//! Glyphs are stored column by column. Each column takes `ceil(height / 8)`
//! bytes; within a byte bit 0 is the topmost pixel, and the next byte of the
//! same column continues 8 pixels further down. Pixel rows at or beyond the
//! font height are ignored.
//!
//! | Kind           | Glyph block                                   |
//! |----------------|-----------------------------------------------|
//! | `Mono`         | `width * rows` column bytes                   |
//! | `Proportional` | 1 width byte, then `width * rows` column bytes |
//!
//! Blocks are laid out back to back starting at code point `base`; the data
//! does not store a glyph count. A proportional glyph reports its stored
//! width byte as is; columns past the block (a width byte larger than the
//! font width) read as unset. A code point below `base`, above `limit`, or
//! whose block would run past the end of the data has no glyph and zero
//! width.
//!
//! ## Example
//!
//! ```
//! use st7735::font::{Font, FONT_5X7};
//!
//! assert_eq!(FONT_5X7.glyph_width('A'), 5);
//! assert_eq!(FONT_5X7.glyph_width('\u{7f}'), 0);
//! assert_eq!(FONT_5X7.text_width("Hi", 1), 12);
//!
//! // Two 3-pixel-high glyphs: '0' is 2 columns wide, '1' is 1 column wide
//! const DATA: [u8; 6] = [2, 0b111, 0b101, 1, 0b111, 0];
//! let digits = Font::proportional(&DATA, 2, 3, '0');
//! assert_eq!(digits.glyph_width('0'), 2);
//! assert_eq!(digits.glyph_width('1'), 1);
//! assert_eq!(digits.glyph_width('2'), 0);
//! ```

/// Glyph width encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontKind {
    /// Every glyph is `width` columns wide
    Mono,
    /// Each glyph block starts with its own width byte
    Proportional,
}

/// Bitmap font descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font<'a> {
    /// Glyph blocks, starting at `base`
    pub data: &'a [u8],
    /// Glyph width in pixels (maximum width for proportional fonts)
    pub width: u8,
    /// Glyph height in pixels
    pub height: u8,
    /// First code point in `data`
    pub base: char,
    /// Last code point with a glyph, if bounded
    pub limit: Option<char>,
    /// Width encoding
    pub kind: FontKind,
}

/// One glyph's column bitmap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    columns: &'a [u8],
    width: u8,
    height: u8,
    rows: usize,
}

impl Glyph<'_> {
    /// Width in pixels
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the pixel at (`col`, `row`) is set
    ///
    /// Columns beyond the glyph block are unset.
    pub fn is_set(&self, col: u8, row: u8) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let index = col as usize * self.rows + row as usize / 8;
        self.columns
            .get(index)
            .is_some_and(|byte| byte & (1 << (row % 8)) != 0)
    }
}

impl<'a> Font<'a> {
    /// Describe a fixed-width font
    pub const fn mono(data: &'a [u8], width: u8, height: u8, base: char) -> Self {
        Self {
            data,
            width,
            height,
            base,
            limit: None,
            kind: FontKind::Mono,
        }
    }

    /// Describe a proportional font
    pub const fn proportional(data: &'a [u8], width: u8, height: u8, base: char) -> Self {
        Self {
            data,
            width,
            height,
            base,
            limit: None,
            kind: FontKind::Proportional,
        }
    }

    /// Reject code points above `limit`
    #[must_use]
    pub const fn with_limit(mut self, limit: char) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Bytes per glyph column
    pub fn rows(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    /// Bytes per glyph block
    pub fn block_size(&self) -> usize {
        let columns = self.width as usize * self.rows();
        match self.kind {
            FontKind::Mono => columns,
            FontKind::Proportional => columns + 1,
        }
    }

    /// Look up the glyph for `c`
    pub fn glyph(&self, c: char) -> Option<Glyph<'a>> {
        if c < self.base || self.limit.is_some_and(|limit| c > limit) {
            return None;
        }
        let index = (c as u32 - self.base as u32) as usize;
        let block = self.block_size();
        let start = index.checked_mul(block)?;
        let bytes = self.data.get(start..start.checked_add(block)?)?;

        let (width, columns) = match self.kind {
            FontKind::Mono => (self.width, bytes),
            FontKind::Proportional => {
                let (&width, columns) = bytes.split_first()?;
                (width, columns)
            }
        };
        Some(Glyph {
            columns,
            width,
            height: self.height,
            rows: self.rows(),
        })
    }

    /// Width of the glyph for `c`, 0 if there is none
    pub fn glyph_width(&self, c: char) -> u8 {
        self.glyph(c).map_or(0, |glyph| glyph.width)
    }

    /// Horizontal advance of `text` drawn with `spacing` pixels after every
    /// character
    ///
    /// Matches the value returned by [`Display::draw_text`](crate::Display::draw_text).
    pub fn text_width(&self, text: &str, spacing: u16) -> i32 {
        text.chars().fold(0i32, |total, c| {
            total
                .saturating_add(i32::from(self.glyph_width(c)))
                .saturating_add(i32::from(spacing))
        })
    }
}

/// Built-in 5x7 font covering printable ASCII (`' '..='~'`)
pub static FONT_5X7: Font<'static> = Font::mono(&FONT_5X7_DATA, 5, 7, ' ').with_limit('~');

#[rustfmt::skip]
static FONT_5X7_DATA: [u8; 95 * 5] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // space
    0x00, 0x00, 0x5F, 0x00, 0x00, // !
    0x00, 0x07, 0x00, 0x07, 0x00, // "
    0x14, 0x7F, 0x14, 0x7F, 0x14, // #
    0x24, 0x2A, 0x7F, 0x2A, 0x12, // $
    0x23, 0x13, 0x08, 0x64, 0x62, // %
    0x36, 0x49, 0x55, 0x22, 0x50, // &
    0x00, 0x05, 0x03, 0x00, 0x00, // '
    0x00, 0x1C, 0x22, 0x41, 0x00, // (
    0x00, 0x41, 0x22, 0x1C, 0x00, // )
    0x08, 0x2A, 0x1C, 0x2A, 0x08, // *
    0x08, 0x08, 0x3E, 0x08, 0x08, // +
    0x00, 0x50, 0x30, 0x00, 0x00, // ,
    0x08, 0x08, 0x08, 0x08, 0x08, // -
    0x00, 0x60, 0x60, 0x00, 0x00, // .
    0x20, 0x10, 0x08, 0x04, 0x02, // /
    0x3E, 0x51, 0x49, 0x45, 0x3E, // 0
    0x00, 0x42, 0x7F, 0x40, 0x00, // 1
    0x42, 0x61, 0x51, 0x49, 0x46, // 2
    0x21, 0x41, 0x45, 0x4B, 0x31, // 3
    0x18, 0x14, 0x12, 0x7F, 0x10, // 4
    0x27, 0x45, 0x45, 0x45, 0x39, // 5
    0x3C, 0x4A, 0x49, 0x49, 0x30, // 6
    0x01, 0x71, 0x09, 0x05, 0x03, // 7
    0x36, 0x49, 0x49, 0x49, 0x36, // 8
    0x06, 0x49, 0x49, 0x29, 0x1E, // 9
    0x00, 0x36, 0x36, 0x00, 0x00, // :
    0x00, 0x56, 0x36, 0x00, 0x00, // ;
    0x00, 0x08, 0x14, 0x22, 0x41, // <
    0x14, 0x14, 0x14, 0x14, 0x14, // =
    0x41, 0x22, 0x14, 0x08, 0x00, // >
    0x02, 0x01, 0x51, 0x09, 0x06, // ?
    0x32, 0x49, 0x79, 0x41, 0x3E, // @
    0x7E, 0x11, 0x11, 0x11, 0x7E, // A
    0x7F, 0x49, 0x49, 0x49, 0x36, // B
    0x3E, 0x41, 0x41, 0x41, 0x22, // C
    0x7F, 0x41, 0x41, 0x22, 0x1C, // D
    0x7F, 0x49, 0x49, 0x49, 0x41, // E
    0x7F, 0x09, 0x09, 0x01, 0x01, // F
    0x3E, 0x41, 0x41, 0x51, 0x32, // G
    0x7F, 0x08, 0x08, 0x08, 0x7F, // H
    0x00, 0x41, 0x7F, 0x41, 0x00, // I
    0x20, 0x40, 0x41, 0x3F, 0x01, // J
    0x7F, 0x08, 0x14, 0x22, 0x41, // K
    0x7F, 0x40, 0x40, 0x40, 0x40, // L
    0x7F, 0x02, 0x04, 0x02, 0x7F, // M
    0x7F, 0x04, 0x08, 0x10, 0x7F, // N
    0x3E, 0x41, 0x41, 0x41, 0x3E, // O
    0x7F, 0x09, 0x09, 0x09, 0x06, // P
    0x3E, 0x41, 0x51, 0x21, 0x5E, // Q
    0x7F, 0x09, 0x19, 0x29, 0x46, // R
    0x46, 0x49, 0x49, 0x49, 0x31, // S
    0x01, 0x01, 0x7F, 0x01, 0x01, // T
    0x3F, 0x40, 0x40, 0x40, 0x3F, // U
    0x1F, 0x20, 0x40, 0x20, 0x1F, // V
    0x7F, 0x20, 0x18, 0x20, 0x7F, // W
    0x63, 0x14, 0x08, 0x14, 0x63, // X
    0x03, 0x04, 0x78, 0x04, 0x03, // Y
    0x61, 0x51, 0x49, 0x45, 0x43, // Z
    0x00, 0x00, 0x7F, 0x41, 0x41, // [
    0x02, 0x04, 0x08, 0x10, 0x20, // \
    0x41, 0x41, 0x7F, 0x00, 0x00, // ]
    0x04, 0x02, 0x01, 0x02, 0x04, // ^
    0x40, 0x40, 0x40, 0x40, 0x40, // _
    0x00, 0x01, 0x02, 0x04, 0x00, // `
    0x20, 0x54, 0x54, 0x54, 0x78, // a
    0x7F, 0x48, 0x44, 0x44, 0x38, // b
    0x38, 0x44, 0x44, 0x44, 0x20, // c
    0x38, 0x44, 0x44, 0x48, 0x7F, // d
    0x38, 0x54, 0x54, 0x54, 0x18, // e
    0x08, 0x7E, 0x09, 0x01, 0x02, // f
    0x08, 0x14, 0x54, 0x54, 0x3C, // g
    0x7F, 0x08, 0x04, 0x04, 0x78, // h
    0x00, 0x44, 0x7D, 0x40, 0x00, // i
    0x20, 0x40, 0x44, 0x3D, 0x00, // j
    0x00, 0x7F, 0x10, 0x28, 0x44, // k
    0x00, 0x41, 0x7F, 0x40, 0x00, // l
    0x7C, 0x04, 0x18, 0x04, 0x78, // m
    0x7C, 0x08, 0x04, 0x04, 0x78, // n
    0x38, 0x44, 0x44, 0x44, 0x38, // o
    0x7C, 0x14, 0x14, 0x14, 0x08, // p
    0x08, 0x14, 0x14, 0x18, 0x7C, // q
    0x7C, 0x08, 0x04, 0x04, 0x08, // r
    0x48, 0x54, 0x54, 0x54, 0x20, // s
    0x04, 0x3F, 0x44, 0x40, 0x20, // t
    0x3C, 0x40, 0x40, 0x20, 0x7C, // u
    0x1C, 0x20, 0x40, 0x20, 0x1C, // v
    0x3C, 0x40, 0x30, 0x40, 0x3C, // w
    0x44, 0x28, 0x10, 0x28, 0x44, // x
    0x0C, 0x50, 0x50, 0x50, 0x3C, // y
    0x44, 0x64, 0x54, 0x4C, 0x44, // z
    0x00, 0x08, 0x36, 0x41, 0x00, // {
    0x00, 0x00, 0x7F, 0x00, 0x00, // |
    0x00, 0x41, 0x36, 0x08, 0x00, // }
    0x08, 0x08, 0x2A, 0x1C, 0x08, // ~
];
