//! Core display operations

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{VSCRDEF, VSCRSADD};
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::{Framebuffer, Window};
use crate::init;
use crate::interface::DisplayInterface;
use crate::primitives::{Line, Octant, mirror8};
use crate::rotation::Geometry;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver handle for one ST7735 panel
///
/// Owns the transport, the rotated geometry, a scratch buffer large enough
/// for one full frame and, in buffered mode, a [`Framebuffer`].
///
/// Drawing operations take signed coordinates, clip silently to the visible
/// area and never fail: transfer errors are logged and the call returns.
///
/// Dropping the handle switches the backlight off, the same as
/// [`release`](Self::release) without getting the interface back.
///
/// ## Modes
///
/// - **Direct** (default): every primitive is sent to the controller as it is
///   drawn. Single pixels cost one address window each, filled rectangles
///   one burst.
/// - **Buffered**: primitives write into RAM and only the bounding box of
///   everything touched since the last [`flush`](Self::flush) is sent.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface, `None` once taken back by `release`
    interface: Option<I>,
    /// Display configuration
    config: Config,
    /// Rotated size, RAM offsets and MADCTL value
    geometry: Geometry,
    /// Present while buffering is enabled
    framebuffer: Option<Framebuffer>,
    /// Burst staging area, capacity of one full frame
    scratch: Vec<u8>,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Bring up the panel and return a ready handle
    ///
    /// Allocates the scratch buffer, switches the backlight on and runs the
    /// initialization sequence. On failure the backlight is switched off
    /// again (best effort) and the interface is dropped.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfMemory`] if the scratch buffer cannot be allocated
    /// - [`Error::Interface`] if any transfer fails
    pub fn new<D: DelayNs>(
        mut interface: I,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, Error<I>> {
        let geometry = config.geometry();
        let requested = config.visible.frame_size();
        let mut scratch = Vec::new();
        if scratch.try_reserve_exact(requested).is_err() {
            log::warn!("[ST7735] scratch allocation of {} bytes failed", requested);
            return Err(Error::OutOfMemory { requested });
        }

        let bring_up = interface
            .set_backlight(true)
            .and_then(|()| init::run(&mut interface, &config, &geometry, delay));
        if let Err(e) = bring_up {
            log::warn!("[ST7735] init failed: {:?}", e);
            let _ = interface.set_backlight(false);
            return Err(Error::Interface(e));
        }

        log::info!(
            "[ST7735] ready: {}x{} rotation={} offsets=({}, {})",
            geometry.width,
            geometry.height,
            config.rotation.degrees(),
            geometry.col_offset,
            geometry.row_offset
        );

        Ok(Self {
            interface: Some(interface),
            config,
            geometry,
            framebuffer: None,
            scratch,
        })
    }

    /// Re-run the initialization sequence
    ///
    /// Controller RAM is undefined afterwards; in buffered mode the whole
    /// screen is marked dirty so the next flush repaints it.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let Some(interface) = self.interface.as_mut() else {
            return Ok(());
        };
        init::run(interface, &self.config, &self.geometry, delay).map_err(Error::Interface)?;
        let full = self.full_window();
        if let Some(fb) = &mut self.framebuffer {
            fb.mark_dirty(full);
        }
        Ok(())
    }

    /// Switch the backlight off and hand back the interface
    ///
    /// The framebuffer and scratch buffer are freed.
    pub fn release(mut self) -> I {
        self.power_down();
        match self.interface.take() {
            Some(interface) => interface,
            // Only release takes the interface, and it consumes the handle
            None => unreachable!(),
        }
    }

    /// Visible width in the configured rotation
    pub fn width(&self) -> u16 {
        self.geometry.width
    }

    /// Visible height in the configured rotation
    pub fn height(&self) -> u16 {
        self.geometry.height
    }

    /// Rotated geometry (size, RAM offsets, MADCTL value)
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Configuration the display was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) -> DisplayResult<I> {
        let Some(interface) = self.interface.as_mut() else {
            return Ok(());
        };
        interface.set_backlight(on).map_err(Error::Interface)
    }

    // Buffering

    /// Enable or disable buffered mode
    ///
    /// Enabling allocates a black framebuffer (no-op if already buffered).
    /// Disabling frees it; anything not yet flushed is discarded. Neither
    /// direction flushes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] if the framebuffer cannot be allocated;
    /// the display stays in direct mode.
    pub fn set_buffered(&mut self, enabled: bool) -> DisplayResult<I> {
        match (enabled, self.framebuffer.is_some()) {
            (true, false) => {
                let (width, height) = (self.geometry.width, self.geometry.height);
                let fb = Framebuffer::new(width, height).ok_or(Error::OutOfMemory {
                    requested: Framebuffer::byte_size(width, height),
                })?;
                self.framebuffer = Some(fb);
                log::info!("[ST7735] buffering enabled");
            }
            (false, true) => {
                self.framebuffer = None;
                log::info!("[ST7735] buffering disabled");
            }
            _ => {}
        }
        Ok(())
    }

    /// Whether drawing goes to the framebuffer
    pub fn is_buffered(&self) -> bool {
        self.framebuffer.is_some()
    }

    /// Bounding box of everything drawn since the last flush
    ///
    /// Always `None` in direct mode.
    pub fn dirty_region(&self) -> Option<Window> {
        self.framebuffer.as_ref().and_then(Framebuffer::dirty)
    }

    /// Read back a buffered pixel
    ///
    /// `None` in direct mode or outside the visible area.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Color> {
        if !self.geometry.contains(x, y) {
            return None;
        }
        self.framebuffer.as_ref()?.get(x as u16, y as u16)
    }

    /// Send the dirty region of the framebuffer to the controller
    ///
    /// Does nothing (no bus traffic) in direct mode or when nothing is dirty.
    /// The dirty region is cleared before the transfer, so a failed flush is
    /// not retried by the next one.
    pub fn flush(&mut self) -> DisplayResult<I> {
        let (Some(fb), Some(interface)) = (&mut self.framebuffer, self.interface.as_mut()) else {
            return Ok(());
        };
        let Some(window) = fb.dirty() else {
            return Ok(());
        };
        fb.clear_dirty();
        fb.encode_window(window, &mut self.scratch);
        init::write_window(interface, &self.geometry, window, &self.scratch).map_err(|e| {
            log::warn!("[ST7735] flush of {:?} failed: {:?}", window, e);
            Error::Interface(e)
        })
    }

    // Scrolling

    /// Define the vertical scrolling area (VSCRDEF)
    ///
    /// The three areas are in panel rows and must add up to the panel height.
    pub fn set_scroll_area(
        &mut self,
        top_fixed: u16,
        scroll_area: u16,
        bottom_fixed: u16,
    ) -> DisplayResult<I> {
        let expected = self.config.panel.rows;
        let total = u32::from(top_fixed) + u32::from(scroll_area) + u32::from(bottom_fixed);
        if total != u32::from(expected) {
            return Err(Error::InvalidScrollArea {
                top_fixed,
                scroll_area,
                bottom_fixed,
                expected,
            });
        }
        let [tf_hi, tf_lo] = top_fixed.to_be_bytes();
        let [sa_hi, sa_lo] = scroll_area.to_be_bytes();
        let [bf_hi, bf_lo] = bottom_fixed.to_be_bytes();
        let Some(interface) = self.interface.as_mut() else {
            return Ok(());
        };
        interface
            .write_register(VSCRDEF, &[tf_hi, tf_lo, sa_hi, sa_lo, bf_hi, bf_lo])
            .map_err(Error::Interface)
    }

    /// Set the first row shown at the top of the scrolling area (VSCRSADD)
    pub fn scroll_to(&mut self, line: u16) -> DisplayResult<I> {
        let Some(interface) = self.interface.as_mut() else {
            return Ok(());
        };
        interface
            .write_register(VSCRSADD, &line.to_be_bytes())
            .map_err(Error::Interface)
    }

    // Drawing

    /// Set one pixel
    pub fn pixel(&mut self, x: i32, y: i32, color: Color) {
        if !self.geometry.contains(x, y) {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if let Some(fb) = &mut self.framebuffer {
            fb.set(x, y, color);
            return;
        }
        let Some(interface) = self.interface.as_mut() else {
            return;
        };
        let result = init::write_window(
            interface,
            &self.geometry,
            Window::point(x, y),
            &color.to_be_bytes(),
        );
        Self::log_failure("pixel", result);
    }

    /// Fill the whole screen
    pub fn fill(&mut self, color: Color) {
        let (width, height) = (i32::from(self.width()), i32::from(self.height()));
        self.fill_rect(0, 0, width, height, color);
    }

    /// Draw a line, both endpoints included
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if !self.overlaps(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)) {
            return;
        }
        let (mut start, mut end) = ((x0, y0), (x1, y1));
        // Clamping an axis-aligned line keeps its on-screen pixels
        let (max_x, max_y) = (self.max_x(), self.max_y());
        if y0 == y1 {
            start.0 = x0.clamp(0, max_x);
            end.0 = x1.clamp(0, max_x);
        } else if x0 == x1 {
            start.1 = y0.clamp(0, max_y);
            end.1 = y1.clamp(0, max_y);
        }
        for (x, y) in Line::new(start, end) {
            self.pixel(x, y, color);
        }
    }

    /// Draw a rectangle outline
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        self.line(x, y, right, y, color);
        self.line(x, bottom, right, bottom, color);
        self.line(x, y, x, bottom, color);
        self.line(right, y, right, bottom, color);
    }

    /// Fill a rectangle
    ///
    /// In direct mode the clipped rectangle is sent as a single burst.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some(window) = self.clip(x, y, w, h) else {
            return;
        };
        if let Some(fb) = &mut self.framebuffer {
            for py in window.y0..=window.y1 {
                for px in window.x0..=window.x1 {
                    fb.set(px, py, color);
                }
            }
            return;
        }

        let Some(interface) = self.interface.as_mut() else {
            return;
        };
        let bytes = color.to_be_bytes();
        self.scratch.clear();
        for _ in 0..window.pixel_count() {
            self.scratch.extend_from_slice(&bytes);
        }
        let result = init::write_window(interface, &self.geometry, window, &self.scratch);
        Self::log_failure("fill_rect", result);
    }

    /// Draw a circle outline centered on (x, y)
    pub fn circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
        if !self.circle_overlaps(x, y, r) || self.inside_circle(x, y, r) {
            return;
        }
        for offset in Octant::new(r) {
            for (px, py) in mirror8(x, y, offset) {
                self.pixel(px, py, color);
            }
        }
    }

    /// Draw a filled circle centered on (x, y)
    ///
    /// Each row is filled once, as a single span.
    pub fn fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
        if !self.circle_overlaps(x, y, r) {
            return;
        }
        if self.inside_circle(x, y, r) {
            self.fill(color);
            return;
        }
        let mut octant = Octant::new(r).peekable();
        while let Some((dx, dy)) = octant.next() {
            // Rows y ± dy, span ± dx
            self.fill_span(x, y.saturating_add(dy), dx, color);
            if dy != 0 {
                self.fill_span(x, y.saturating_sub(dy), dx, color);
            }
            // Rows y ± dx take the widest span, from the last step before x moves
            let last_for_row = octant.peek().is_none_or(|&(next_dx, _)| next_dx != dx);
            if last_for_row && dx != dy {
                self.fill_span(x, y.saturating_add(dx), dy, color);
                self.fill_span(x, y.saturating_sub(dx), dy, color);
            }
        }
    }

    /// Fill row `y` from `x - half` to `x + half`
    fn fill_span(&mut self, x: i32, y: i32, half: i32, color: Color) {
        if y < 0 || y > self.max_y() {
            return;
        }
        let left = x.saturating_sub(half).max(0);
        let right = x.saturating_add(half).min(self.max_x());
        if left <= right {
            self.fill_rect(left, y, right - left + 1, 1, color);
        }
    }

    fn max_x(&self) -> i32 {
        i32::from(self.geometry.width) - 1
    }

    fn max_y(&self) -> i32 {
        i32::from(self.geometry.height) - 1
    }

    /// Whether the inclusive box (x0, y0)-(x1, y1) touches the screen
    fn overlaps(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        x1 >= 0 && y1 >= 0 && x0 <= self.max_x() && y0 <= self.max_y()
    }

    fn circle_overlaps(&self, x: i32, y: i32, r: i32) -> bool {
        r >= 0
            && self.overlaps(
                x.saturating_sub(r),
                y.saturating_sub(r),
                x.saturating_add(r),
                y.saturating_add(r),
            )
    }

    /// Whether every screen pixel lies strictly inside the outline
    fn inside_circle(&self, x: i32, y: i32, r: i32) -> bool {
        let inner = i64::from(r) - 1;
        if inner <= 0 {
            return false;
        }
        let far = |center: i32, max: i32| {
            let center = i64::from(center);
            center.abs().max((i64::from(max) - center).abs())
        };
        let dx = far(x, self.max_x());
        let dy = far(y, self.max_y());
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) < inner * inner
    }

    /// Intersect a rectangle with the visible area
    fn clip(&self, x: i32, y: i32, w: i32, h: i32) -> Option<Window> {
        if w <= 0 || h <= 0 {
            return None;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w - 1).min(i32::from(self.geometry.width) - 1);
        let y1 = y.saturating_add(h - 1).min(i32::from(self.geometry.height) - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(Window::new(x0 as u16, y0 as u16, x1 as u16, y1 as u16))
    }

    #[cfg(test)]
    pub(crate) fn interface_mut(&mut self) -> &mut I {
        self.interface.as_mut().unwrap()
    }

    /// Best-effort backlight off, errors are logged
    fn power_down(&mut self) {
        if let Some(interface) = self.interface.as_mut() {
            if let Err(e) = interface.set_backlight(false) {
                log::warn!("[ST7735] backlight off failed: {:?}", e);
            }
        }
    }

    fn full_window(&self) -> Window {
        Window::new(
            0,
            0,
            self.geometry.width.saturating_sub(1),
            self.geometry.height.saturating_sub(1),
        )
    }

    fn log_failure(operation: &str, result: Result<(), I::Error>) {
        if let Err(e) = result {
            log::warn!("[ST7735] {} transfer failed: {:?}", operation, e);
        }
    }
}

impl<I> Drop for Display<I>
where
    I: DisplayInterface,
{
    fn drop(&mut self) {
        self.power_down();
    }
}
