//! Text rendering
//!
//! Glyphs from a [`Font`] are composited pixel by pixel through
//! [`Display::pixel`], so text respects clipping and buffered mode like any
//! other primitive. Every character advances the cursor by its glyph width
//! plus the style's spacing; the spacing columns are painted with the
//! background color when one is set.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7735::{Color, Display, DisplayInterface, TextStyle, font::FONT_5X7};
//!
//! fn status_line<I: DisplayInterface>(display: &mut Display<I>, text: &str) {
//!     let style = TextStyle::new(FONT_5X7, Color::WHITE)
//!         .background(Color::BLACK)
//!         .spacing(1);
//!
//!     // Center horizontally
//!     let x = (i32::from(display.width()) - FONT_5X7.text_width(text, 1)) / 2;
//!     display.draw_text(x, 2, text, &style);
//! }
//! ```

use crate::color::Color;
use crate::display::Display;
use crate::font::Font;
use crate::interface::DisplayInterface;

/// How text is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle<'a> {
    /// Glyph source
    pub font: Font<'a>,
    /// Color of set glyph pixels
    pub fg: Color,
    /// Color of unset glyph pixels and spacing, `None` leaves them untouched
    pub bg: Option<Color>,
    /// Blank columns after every character
    pub spacing: u16,
}

impl<'a> TextStyle<'a> {
    /// Foreground-only style with no spacing
    pub fn new(font: Font<'a>, fg: Color) -> Self {
        Self {
            font,
            fg,
            bg: None,
            spacing: 0,
        }
    }

    /// Paint unset pixels and spacing with `bg`
    #[must_use]
    pub fn background(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Set the gap between characters
    #[must_use]
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Draw one glyph with its top-left corner at (x, y)
    ///
    /// Returns the glyph width; 0 (and nothing drawn) if the font has no
    /// glyph for `c`. Spacing is not applied.
    pub fn draw_char(&mut self, x: i32, y: i32, c: char, style: &TextStyle<'_>) -> i32 {
        let Some(glyph) = style.font.glyph(c) else {
            return 0;
        };
        for col in 0..glyph.width() {
            for row in 0..glyph.height() {
                let px = x.saturating_add(i32::from(col));
                let py = y.saturating_add(i32::from(row));
                if glyph.is_set(col, row) {
                    self.pixel(px, py, style.fg);
                } else if let Some(bg) = style.bg {
                    self.pixel(px, py, bg);
                }
            }
        }
        i32::from(glyph.width())
    }

    /// Draw a string starting at (x, y)
    ///
    /// Returns the total horizontal advance, equal to
    /// [`Font::text_width`] for the same text and spacing unless the cursor
    /// saturates at `i32::MAX`.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: &TextStyle<'_>) -> i32 {
        let spacing = i32::from(style.spacing);
        let height = i32::from(style.font.height);
        let mut cursor = x;
        for c in text.chars() {
            cursor = cursor.saturating_add(self.draw_char(cursor, y, c, style));
            if let Some(bg) = style.bg {
                self.fill_rect(cursor, y, spacing, height, bg);
            }
            cursor = cursor.saturating_add(spacing);
        }
        cursor.saturating_sub(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::font::FONT_5X7;
    use crate::framebuffer::Window;
    use crate::testing::{MockInterface, RecordingDelay};

    fn buffered() -> Display<MockInterface> {
        let config = Builder::new().build().unwrap();
        let mut delay = RecordingDelay::default();
        let mut display = Display::new(MockInterface::new(), config, &mut delay).unwrap();
        display.set_buffered(true).unwrap();
        display
    }

    #[test]
    fn test_draw_char_with_background() {
        let mut display = buffered();
        let style = TextStyle::new(FONT_5X7, Color::WHITE).background(Color::BLUE);
        assert_eq!(display.draw_char(10, 20, '!', &style), 5);

        assert_eq!(display.dirty_region(), Some(Window::new(10, 20, 14, 26)));
        assert_eq!(display.pixel_at(12, 20), Some(Color::WHITE));
        assert_eq!(display.pixel_at(12, 25), Some(Color::BLUE));
        assert_eq!(display.pixel_at(10, 20), Some(Color::BLUE));
    }

    #[test]
    fn test_draw_char_without_background_touches_set_pixels_only() {
        let mut display = buffered();
        let style = TextStyle::new(FONT_5X7, Color::WHITE);
        display.draw_char(10, 20, '!', &style);

        // '!' is the single column 2
        assert_eq!(display.dirty_region(), Some(Window::new(12, 20, 12, 26)));
        assert_eq!(display.pixel_at(12, 25), Some(Color::BLACK));
    }

    #[test]
    fn test_unsupported_char_draws_nothing() {
        let mut display = buffered();
        let style = TextStyle::new(FONT_5X7, Color::WHITE).background(Color::BLUE);
        assert_eq!(display.draw_char(0, 0, '\u{7f}', &style), 0);
        assert_eq!(display.dirty_region(), None);
    }

    #[test]
    fn test_draw_text_advance_matches_text_width() {
        let mut display = buffered();
        let style = TextStyle::new(FONT_5X7, Color::WHITE).spacing(2);
        let advance = display.draw_text(0, 0, "Hello", &style);
        assert_eq!(advance, 35);
        assert_eq!(advance, FONT_5X7.text_width("Hello", 2));
    }

    #[test]
    fn test_draw_text_paints_spacing_with_background() {
        let mut display = buffered();
        let style = TextStyle::new(FONT_5X7, Color::WHITE)
            .background(Color::RED)
            .spacing(1);
        assert_eq!(display.draw_text(0, 0, "ab", &style), 12);

        // Gap after each glyph, full glyph height
        for row in 0..7 {
            assert_eq!(display.pixel_at(5, row), Some(Color::RED));
            assert_eq!(display.pixel_at(11, row), Some(Color::RED));
        }
        assert_eq!(display.dirty_region(), Some(Window::new(0, 0, 11, 6)));
    }

    #[test]
    fn test_draw_text_clips_at_right_edge() {
        let mut display = buffered();
        let style = TextStyle::new(FONT_5X7, Color::WHITE).background(Color::BLACK);
        let advance = display.draw_text(75, 0, "WW", &style);
        assert_eq!(advance, 10);
        assert_eq!(display.dirty_region(), Some(Window::new(75, 0, 79, 6)));
    }

    #[test]
    fn test_text_at_extreme_coordinates_is_clipped() {
        let mut display = buffered();
        let style = TextStyle::new(FONT_5X7, Color::WHITE).background(Color::BLUE);
        assert_eq!(display.draw_text(i32::MAX - 2, 0, "AB", &style), 2);
        assert_eq!(display.draw_char(0, i32::MAX, 'A', &style), 5);
        display.draw_text(i32::MIN, i32::MIN, "AB", &style);
        assert_eq!(display.dirty_region(), None);
    }

    #[test]
    fn test_proportional_font_text() {
        // '0' two columns, '1' one column, both 3 pixels high
        let data = [2, 0b111, 0b101, 1, 0b111, 0];
        let font = Font::proportional(&data, 2, 3, '0');
        let mut display = buffered();
        let style = TextStyle::new(font, Color::GREEN).spacing(1);

        assert_eq!(display.draw_text(0, 0, "10", &style), 5);
        assert_eq!(display.pixel_at(0, 2), Some(Color::GREEN));
        assert_eq!(display.pixel_at(2, 0), Some(Color::GREEN));
        assert_eq!(display.pixel_at(3, 1), Some(Color::BLACK));
        assert_eq!(display.pixel_at(3, 2), Some(Color::GREEN));
    }
}
