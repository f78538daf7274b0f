//! Off-screen pixel buffer with dirty-rectangle tracking
//!
//! In buffered mode every drawing operation lands in a [`Framebuffer`]
//! instead of on the bus. The buffer remembers the tightest [`Window`]
//! enclosing every pixel written since the last flush, so a flush only has
//! to transmit that rectangle.

use alloc::vec::Vec;

use crate::color::Color;

/// Inclusive pixel rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left column
    pub x0: u16,
    /// Top row
    pub y0: u16,
    /// Right column (inclusive)
    pub x1: u16,
    /// Bottom row (inclusive)
    pub y1: u16,
}

impl Window {
    /// Create a window from inclusive corners
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Single-pixel window
    pub fn point(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.y1 - self.y0 + 1
    }

    /// Number of pixels covered
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Smallest window containing both `self` and `other`
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Row-major RGB565 pixel store
#[derive(Debug)]
pub struct Framebuffer {
    pixels: Vec<u16>,
    width: u16,
    height: u16,
    dirty: Option<Window>,
}

impl Framebuffer {
    /// Allocate a zero-filled (black) buffer
    ///
    /// Returns `None` if the allocation fails.
    pub fn new(width: u16, height: u16) -> Option<Self> {
        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).ok()?;
        pixels.resize(len, 0);
        Some(Self {
            pixels,
            width,
            height,
            dirty: None,
        })
    }

    /// Size of the buffer in bytes
    pub fn byte_size(width: u16, height: u16) -> usize {
        width as usize * height as usize * 2
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Store a pixel and extend the dirty region
    ///
    /// Coordinates outside the buffer are ignored.
    pub fn set(&mut self, x: u16, y: u16, color: Color) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = color.raw();
        }
        self.mark_dirty(Window::point(x, y));
    }

    /// Read back a pixel
    pub fn get(&self, x: u16, y: u16) -> Option<Color> {
        let index = self.index(x, y)?;
        self.pixels.get(index).copied().map(Color)
    }

    /// Extend the dirty region to cover `window`
    pub fn mark_dirty(&mut self, window: Window) {
        self.dirty = Some(match self.dirty {
            Some(dirty) => dirty.union(window),
            None => window,
        });
    }

    /// Current dirty region, if any
    pub fn dirty(&self) -> Option<Window> {
        self.dirty
    }

    /// Forget the dirty region
    pub fn clear_dirty(&mut self) {
        self.dirty = None;
    }

    /// Encode the pixels of `window` as big-endian RGB565 into `out`
    ///
    /// `out` is cleared first. Rows are emitted top to bottom.
    pub fn encode_window(&self, window: Window, out: &mut Vec<u8>) {
        out.clear();
        let stride = self.width as usize;
        for y in window.y0..=window.y1.min(self.height.saturating_sub(1)) {
            let start = y as usize * stride + window.x0 as usize;
            let end = y as usize * stride + window.x1.min(self.width.saturating_sub(1)) as usize;
            if let Some(row) = self.pixels.get(start..=end) {
                for pixel in row {
                    out.extend_from_slice(&pixel.to_be_bytes());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_new_is_black_and_clean() {
        let fb = Framebuffer::new(4, 3).unwrap();
        assert_eq!(fb.get(0, 0), Some(Color::BLACK));
        assert_eq!(fb.get(3, 2), Some(Color::BLACK));
        assert_eq!(fb.dirty(), None);
    }

    #[test]
    fn test_byte_size() {
        assert_eq!(Framebuffer::byte_size(160, 80), 25_600);
    }

    #[test]
    fn test_set_then_get() {
        let mut fb = Framebuffer::new(4, 3).unwrap();
        fb.set(2, 1, Color::RED);
        assert_eq!(fb.get(2, 1), Some(Color::RED));
        assert_eq!(fb.dirty(), Some(Window::point(2, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = Framebuffer::new(4, 3).unwrap();
        fb.set(4, 0, Color::RED);
        fb.set(0, 3, Color::RED);
        assert_eq!(fb.dirty(), None);
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn test_dirty_region_is_bounding_box() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set(5, 2, Color::WHITE);
        fb.set(1, 7, Color::WHITE);
        fb.set(8, 4, Color::WHITE);
        assert_eq!(fb.dirty(), Some(Window::new(1, 2, 8, 7)));

        fb.clear_dirty();
        assert_eq!(fb.dirty(), None);
        // Contents survive a dirty reset
        assert_eq!(fb.get(8, 4), Some(Color::WHITE));
    }

    #[test]
    fn test_window_size() {
        let window = Window::new(10, 10, 29, 29);
        assert_eq!(window.width(), 20);
        assert_eq!(window.height(), 20);
        assert_eq!(window.pixel_count(), 400);
        assert_eq!(Window::point(3, 3).pixel_count(), 1);
    }

    #[test]
    fn test_encode_window_is_row_major_big_endian() {
        let mut fb = Framebuffer::new(3, 3).unwrap();
        fb.set(1, 1, Color(0x1234));
        fb.set(2, 1, Color(0xABCD));
        fb.set(1, 2, Color(0x00FF));

        let mut out = Vec::new();
        fb.encode_window(Window::new(1, 1, 2, 2), &mut out);
        assert_eq!(out, vec![0x12, 0x34, 0xAB, 0xCD, 0x00, 0xFF, 0x00, 0x00]);
    }
}
