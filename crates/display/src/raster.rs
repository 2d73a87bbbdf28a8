//! Block transfer and pixel primitives
//!
//! Everything here reduces to "program a window, stream N pixels". A single
//! pixel is a 1x1 window; a line is a sequence of horizontal or vertical
//! runs, each one window and one block write.

// Coordinates are clipped to the panel (<= 320) before any narrowing cast,
// and run lengths are bounded by the panel size. Line deltas are taken in
// i64 and the closed-form skip in i128, so no endpoint pair overflows.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects
)]

use core::mem::swap;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::{PanelBus, SpiConfig};

use crate::color::color565;
use crate::driver::Ili9341;
use crate::error::DisplayError;

/// Pixels per chunk when converting source words before transfer.
pub(crate) const LINE_CHUNK: usize = 32;

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Set one pixel. Offscreen coordinates are ignored.
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: u16) -> Result<(), DisplayError> {
        if !self.on_screen(x, y) {
            return Ok(());
        }
        let (x, y) = (x as u16, y as u16);
        self.transaction(|d| {
            d.set_window(x, y, x, y)?;
            d.bus.write_pixels(&[color])?;
            Ok(())
        })
    }

    /// Fill a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16) -> Result<(), DisplayError> {
        let Some(c) = self.clip(x, y, w, h) else {
            return Ok(());
        };
        self.transaction(|d| {
            d.set_window(c.x, c.y, c.x1(), c.y1())?;
            d.bus.write_repeated(color, c.area())?;
            Ok(())
        })
    }

    /// Horizontal line of `w` pixels starting at `(x, y)`.
    pub fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: u16) -> Result<(), DisplayError> {
        self.fill_rect(x, y, w, 1, color)
    }

    /// Vertical line of `h` pixels starting at `(x, y)`.
    pub fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: u16) -> Result<(), DisplayError> {
        self.fill_rect(x, y, 1, h, color)
    }

    /// Fill the whole surface.
    pub fn fill_screen(&mut self, color: u16) -> Result<(), DisplayError> {
        self.fill_rect(0, 0, i32::from(self.width), i32::from(self.height), color)
    }

    /// Line from `(x0, y0)` to `(x1, y1)`, both ends inclusive.
    ///
    /// Bresenham along the major axis; every stretch where the minor
    /// coordinate holds still goes out as one run, so a shallow line costs
    /// one window per minor step rather than one per pixel. Any pair of
    /// `i32` endpoints is accepted.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u16) -> Result<(), DisplayError> {
        let (mut x0, mut y0, mut x1, mut y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }
        if x1 < 0 {
            return Ok(());
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let mut err = dx / 2;
        let ystep = if y0 < y1 { 1 } else { -1 };

        let (major_len, minor_len) = if steep {
            (i64::from(self.height), i64::from(self.width))
        } else {
            (i64::from(self.width), i64::from(self.height))
        };
        let x_end = x1.min(major_len - 1);

        // Jump to x = 0. `err` stays in [0, dx), so the minor steps taken
        // over `skip` columns are ceil((dy * skip - err) / dx).
        if x0 < 0 {
            let skip = i128::from(-x0);
            let owed = i128::from(dy) * skip - i128::from(err);
            let steps = -(-owed).div_euclid(i128::from(dx));
            err = (i128::from(err) - i128::from(dy) * skip + i128::from(dx) * steps) as i64;
            y0 += ystep * steps as i64;
            x0 = 0;
        }

        // Walk to the first visible pixel; at most one panel length.
        while x0 <= x_end {
            if y0 >= 0 && y0 < minor_len {
                break;
            }
            err -= dy;
            if err < 0 {
                err += dx;
                y0 += ystep;
            }
            x0 += 1;
        }
        if x0 > x_end {
            return Ok(());
        }

        self.transaction(|d| {
            let mut run_start = x0;
            while x0 <= x_end {
                err -= dy;
                if err < 0 {
                    d.line_run(steep, run_start, x0, y0, color)?;
                    y0 += ystep;
                    if y0 < 0 || y0 >= minor_len {
                        return Ok(());
                    }
                    err += dx;
                    run_start = x0 + 1;
                }
                x0 += 1;
            }
            if run_start <= x_end {
                d.line_run(steep, run_start, x_end, y0, color)?;
            }
            Ok(())
        })
    }

    /// One straight run of a line; `a..=b` along the major axis.
    fn line_run(&mut self, steep: bool, a: i64, b: i64, minor: i64, color: u16) -> Result<(), DisplayError> {
        let (a, b, m) = (a as u16, b as u16, minor as u16);
        if steep {
            self.set_window(m, a, m, b)?;
        } else {
            self.set_window(a, m, b, m)?;
        }
        self.bus.write_repeated(color, u32::from(b - a) + 1)?;
        Ok(())
    }

    /// Write one pixel at the current write pointer.
    ///
    /// Follows [`set_addr_window`](Self::set_addr_window).
    pub fn push_color(&mut self, color: u16) -> Result<(), DisplayError> {
        self.transaction(|d| Ok(d.bus.write_pixels(&[color])?))
    }

    /// Write `count` copies of `color` at the current write pointer.
    pub fn write_color(&mut self, color: u16, count: u32) -> Result<(), DisplayError> {
        self.transaction(|d| Ok(d.bus.write_repeated(color, count)?))
    }

    /// Stream pixels at the current write pointer. With `swap` set each
    /// source word has its bytes exchanged first.
    pub fn push_colors(&mut self, data: &[u16], swap: bool) -> Result<(), DisplayError> {
        self.transaction(|d| d.write_words(data, swap))
    }

    /// Stream source words, byte-swapping them if asked. Bus must be held.
    pub(crate) fn write_words(&mut self, data: &[u16], swap: bool) -> Result<(), DisplayError> {
        if !swap {
            self.bus.write_pixels(data)?;
            return Ok(());
        }
        let mut buf = [0u16; LINE_CHUNK];
        for chunk in data.chunks(LINE_CHUNK) {
            for (dst, src) in buf.iter_mut().zip(chunk) {
                *dst = src.swap_bytes();
            }
            if let Some(out) = buf.get(..chunk.len()) {
                self.bus.write_pixels(out)?;
            }
        }
        Ok(())
    }

    /// Read one pixel back from GRAM. Offscreen reads return 0.
    pub fn read_pixel(&mut self, x: i32, y: i32) -> Result<u16, DisplayError> {
        if !self.on_screen(x, y) {
            return Ok(0);
        }
        let (x, y) = (x as u16, y as u16);
        self.transaction(|d| {
            d.at_read_clock(|d| {
                d.set_read_window(x, y, x, y)?;
                let mut raw = [0u8; 4];
                d.bus.read_data(&mut raw)?;
                let [_, r, g, b] = raw;
                Ok(color565(r, g, b))
            })
        })
    }

    /// Read a `w` x `h` block into `out` as RGB565, row-major.
    ///
    /// The rectangle must lie entirely on screen and `out` must hold
    /// `w * h` pixels; otherwise nothing is read.
    pub fn read_rect(&mut self, x: i32, y: i32, w: i32, h: i32, out: &mut [u16]) -> Result<(), DisplayError> {
        let Some(c) = self.clip(x, y, w, h) else {
            return Ok(());
        };
        if i32::from(c.x) != x || i32::from(c.y) != y || i32::from(c.w) != w || i32::from(c.h) != h {
            return Ok(());
        }
        let Some(out) = out.get_mut(..c.area() as usize) else {
            return Ok(());
        };
        self.transaction(|d| {
            d.at_read_clock(|d| {
                d.set_read_window(c.x, c.y, c.x1(), c.y1())?;
                let mut dummy = [0u8; 1];
                d.bus.read_data(&mut dummy)?;

                let mut raw = [0u8; LINE_CHUNK * 3];
                for chunk in out.chunks_mut(LINE_CHUNK) {
                    let Some(bytes) = raw.get_mut(..chunk.len() * 3) else {
                        break;
                    };
                    d.bus.read_data(bytes)?;
                    for (px, rgb) in chunk.iter_mut().zip(bytes.chunks_exact(3)) {
                        if let [r, g, b] = *rgb {
                            *px = color565(r, g, b);
                        }
                    }
                }
                Ok(())
            })
        })
    }

    /// Run `f` with the host at the RAMRD clock. The write clock comes back
    /// even when `f` fails.
    fn at_read_clock<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DisplayError>,
    ) -> Result<T, DisplayError> {
        self.bus.configure(SpiConfig::PANEL_READ)?;
        let out = f(self);
        self.bus.configure(SpiConfig::PANEL_WRITE)?;
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::MockPanel;

    use crate::color::named::{BLUE, GREEN, RED, WHITE};
    use crate::command::Command;
    use crate::{Ili9341, PanelConfig};

    fn panel() -> Ili9341<MockPanel, NoopDelay> {
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go());
        tft.init().unwrap();
        tft.bus_mut().clear_log();
        tft
    }

    #[test]
    fn fill_rect_is_one_window_one_burst() {
        let mut tft = panel();
        tft.fill_rect(10, 20, 30, 5, RED).unwrap();
        assert_eq!(tft.bus().write_bursts(), 1);
        assert_eq!(tft.bus().pixels_written(), 150);
        assert_eq!(tft.bus().pixel(10, 20), Some(RED));
        assert_eq!(tft.bus().pixel(39, 24), Some(RED));
        assert_eq!(tft.bus().pixel(40, 24), Some(0));
        assert_eq!(tft.bus().pixel(39, 25), Some(0));
    }

    #[test]
    fn fill_rect_clips_every_edge() {
        let mut tft = panel();
        tft.fill_rect(-10, -10, 20, 20, GREEN).unwrap();
        assert_eq!(tft.bus().pixels_written(), 100);
        tft.fill_rect(230, 310, 50, 50, GREEN).unwrap();
        assert_eq!(tft.bus().pixels_written(), 200);
        assert_eq!(tft.bus().offscreen_pixels(), 0);
    }

    #[test]
    fn degenerate_or_offscreen_fill_writes_nothing() {
        let mut tft = panel();
        tft.fill_rect(5, 5, 0, 10, RED).unwrap();
        tft.fill_rect(5, 5, 10, -3, RED).unwrap();
        tft.fill_rect(240, 0, 10, 10, RED).unwrap();
        tft.fill_rect(0, -20, 10, 20, RED).unwrap();
        assert_eq!(tft.bus().pixels_written(), 0);
        assert_eq!(tft.bus().acquires(), 0);
    }

    #[test]
    fn fill_screen_covers_rotated_surface() {
        let mut tft = panel();
        tft.set_rotation(1).unwrap();
        tft.fill_screen(BLUE).unwrap();
        assert_eq!(tft.bus().count_color(BLUE), 240 * 320);
    }

    #[test]
    fn horizontal_line_is_a_single_run() {
        let mut tft = panel();
        tft.draw_line(5, 7, 50, 7, WHITE).unwrap();
        assert_eq!(tft.bus().write_bursts(), 1);
        assert_eq!(tft.bus().pixels_written(), 46);
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let mut tft = panel();
        tft.draw_line(10, 10, 20, 15, WHITE).unwrap();
        assert_eq!(tft.bus().pixel(10, 10), Some(WHITE));
        assert_eq!(tft.bus().pixel(20, 15), Some(WHITE));
        assert_eq!(tft.bus().pixels_written(), 11, "one pixel per major step");
        assert!(tft.bus().write_bursts() <= 6);
    }

    #[test]
    fn reversed_endpoints_draw_the_same_pixels() {
        let mut a = panel();
        let mut b = panel();
        a.draw_line(3, 40, 30, 2, WHITE).unwrap();
        b.draw_line(30, 2, 3, 40, WHITE).unwrap();
        for y in 0..50 {
            for x in 0..40 {
                assert_eq!(a.bus().pixel(x, y), b.bus().pixel(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn line_leaving_the_screen_stops_at_the_edge() {
        let mut tft = panel();
        tft.draw_line(-20, -20, 300, 300, WHITE).unwrap();
        assert_eq!(tft.bus().offscreen_pixels(), 0);
        assert_eq!(tft.bus().pixel(0, 0), Some(WHITE));
        assert_eq!(tft.bus().pixel(239, 239), Some(WHITE));
    }

    #[test]
    fn read_pixel_returns_what_was_drawn() {
        let mut tft = panel();
        tft.draw_pixel(7, 9, RED).unwrap();
        assert_eq!(tft.read_pixel(7, 9).unwrap(), RED);
        assert_eq!(tft.read_pixel(8, 9).unwrap(), 0);
        assert_eq!(tft.bus().count(Command::MemoryRead as u8), 2);
    }

    #[test]
    fn read_back_runs_at_the_read_clock() {
        let mut tft = panel();
        tft.draw_pixel(3, 4, RED).unwrap();
        assert_eq!(tft.read_pixel(3, 4).unwrap(), RED);
        let mut out = [0u16; 4];
        tft.read_rect(0, 0, 2, 2, &mut out).unwrap();

        assert_eq!(tft.bus().fast_reads(), 0);
        assert_eq!(tft.bus().clock_hz(), platform::config::SPI_WRITE_HZ);
    }

    #[test]
    fn read_rect_round_trips_a_block() {
        let mut tft = panel();
        tft.fill_rect(0, 0, 3, 2, GREEN).unwrap();
        tft.draw_pixel(1, 1, RED).unwrap();
        let mut out = [0u16; 6];
        tft.read_rect(0, 0, 3, 2, &mut out).unwrap();
        assert_eq!(out, [GREEN, GREEN, GREEN, GREEN, RED, GREEN]);
    }

    #[test]
    fn push_colors_swaps_when_asked() {
        let mut tft = panel();
        tft.set_addr_window(0, 0, 1, 0).unwrap();
        tft.push_colors(&[RED.swap_bytes(), GREEN.swap_bytes()], true).unwrap();
        assert_eq!(tft.bus().pixel(0, 0), Some(RED));
        assert_eq!(tft.bus().pixel(1, 0), Some(GREEN));
    }

    #[test]
    fn full_range_endpoints_are_clipped() {
        let mut tft = panel();
        tft.draw_line(i32::MIN, 0, i32::MAX, 5, WHITE).unwrap();
        tft.draw_line(0, i32::MIN, 7, i32::MAX, WHITE).unwrap();
        tft.draw_line(i32::MAX, i32::MAX, i32::MIN, i32::MIN, WHITE).unwrap();
        assert_eq!(tft.bus().offscreen_pixels(), 0);
        assert!(tft.bus().pixels_written() > 0);
    }

    /// Pixel-by-pixel Bresenham with the same error convention as
    /// `draw_line`, restricted to the 240x320 surface.
    fn stepped_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        let (mut x0, mut y0, mut x1, mut y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            core::mem::swap(&mut x0, &mut y0);
            core::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }
        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let ystep = if y0 < y1 { 1 } else { -1 };
        let mut err = dx / 2;
        let mut y = y0;
        let mut out = Vec::new();
        for x in x0..=x1 {
            let (px, py) = if steep { (y, x) } else { (x, y) };
            if (0..240).contains(&px) && (0..320).contains(&py) {
                out.push((px as i32, py as i32));
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
        out
    }

    proptest::proptest! {
        /// Starting far off screen lands on the same pixels as stepping
        /// every column from the true start.
        #[test]
        fn offscreen_start_matches_stepping(
            x0 in -6000i32..6000, y0 in -6000i32..6000, x1 in -6000i32..6000, y1 in -6000i32..6000,
        ) {
            let mut tft = panel();
            tft.draw_line(x0, y0, x1, y1, WHITE).unwrap();
            let expected = stepped_line(x0, y0, x1, y1);
            assert_eq!(tft.bus().pixels_written(), expected.len());
            for (x, y) in expected {
                assert_eq!(tft.bus().pixel(x, y), Some(WHITE), "({x}, {y})");
            }
        }

        /// No pair of i32 endpoints overflows or writes offscreen.
        #[test]
        fn lines_accept_any_endpoints(
            x0 in proptest::num::i32::ANY, y0 in proptest::num::i32::ANY,
            x1 in proptest::num::i32::ANY, y1 in proptest::num::i32::ANY,
        ) {
            let mut tft = panel();
            tft.draw_line(x0, y0, x1, y1, WHITE).unwrap();
            assert_eq!(tft.bus().offscreen_pixels(), 0);
            assert_eq!(tft.bus().acquires(), tft.bus().releases());
        }

        /// Whatever the rectangle, nothing lands outside the panel.
        #[test]
        fn clipping_never_writes_offscreen(
            x in -400i32..400, y in -400i32..400, w in -10i32..400, h in -10i32..400,
        ) {
            let mut tft = panel();
            tft.fill_rect(x, y, w, h, WHITE).unwrap();
            assert_eq!(tft.bus().offscreen_pixels(), 0);
        }
    }
}
