//! Shape rasteriser
//!
//! Outlines plot individual pixels; fills are built from horizontal spans so
//! each scanline costs one window and one block write. Every shape runs as a
//! single composite transaction.
//!
//! Degenerate input (zero or negative extents, radii too small for an
//! ellipse) draws nothing. Rounded-rectangle radii are clamped to half the
//! shorter side.

// Shape math on i32 screen coordinates. Circle, ellipse and rectangle
// offsets assume centres and radii within i32::MAX / 4; triangle edges are
// interpolated in i128 and clipped before narrowing. Bitmap indices are
// non-negative once the w/h guard has passed.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]

use core::mem::swap;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::PanelBus;

use crate::driver::Ili9341;
use crate::error::DisplayError;

/// Quadrant selectors for [`Ili9341::draw_circle_helper`].
pub mod corner {
    /// Top-left quadrant.
    pub const TOP_LEFT: u8 = 0x1;
    /// Top-right quadrant.
    pub const TOP_RIGHT: u8 = 0x2;
    /// Bottom-right quadrant.
    pub const BOTTOM_RIGHT: u8 = 0x4;
    /// Bottom-left quadrant.
    pub const BOTTOM_LEFT: u8 = 0x8;
}

/// Halves selected by [`Ili9341::fill_circle_helper`].
pub mod half {
    /// Lower half, spans grow downwards from the centre.
    pub const LOWER: u8 = 0x1;
    /// Upper half.
    pub const UPPER: u8 = 0x2;
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Rectangle outline.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u16) -> Result<(), DisplayError> {
        if w < 1 || h < 1 {
            return Ok(());
        }
        self.composite(|d| {
            d.draw_fast_hline(x, y, w, color)?;
            d.draw_fast_hline(x, y + h - 1, w, color)?;
            d.draw_fast_vline(x, y, h, color)?;
            d.draw_fast_vline(x + w - 1, y, h, color)
        })
    }

    /// Circle outline of radius `r` (midpoint algorithm, 8-way symmetry).
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: i32, color: u16) -> Result<(), DisplayError> {
        if r < 0 {
            return Ok(());
        }
        self.composite(|d| {
            let mut r = r;
            let mut x = 0;
            let mut dx = 1;
            let mut dy = r + r;
            let mut p = -(r >> 1);

            // Ordered so consecutive pixels share a row or column.
            d.draw_pixel(x0 + r, y0, color)?;
            d.draw_pixel(x0 - r, y0, color)?;
            d.draw_pixel(x0, y0 - r, color)?;
            d.draw_pixel(x0, y0 + r, color)?;

            while x < r {
                if p >= 0 {
                    dy -= 2;
                    p -= dy;
                    r -= 1;
                }
                dx += 2;
                p += dx;
                x += 1;

                d.draw_pixel(x0 + x, y0 + r, color)?;
                d.draw_pixel(x0 - x, y0 + r, color)?;
                d.draw_pixel(x0 - x, y0 - r, color)?;
                d.draw_pixel(x0 + x, y0 - r, color)?;
                d.draw_pixel(x0 + r, y0 + x, color)?;
                d.draw_pixel(x0 - r, y0 + x, color)?;
                d.draw_pixel(x0 - r, y0 - x, color)?;
                d.draw_pixel(x0 + r, y0 - x, color)?;
            }
            Ok(())
        })
    }

    /// Filled circle: one horizontal span per scanline.
    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: i32, color: u16) -> Result<(), DisplayError> {
        if r < 0 {
            return Ok(());
        }
        self.composite(|d| {
            let mut r = r;
            let mut x = 0;
            let mut dx = 1;
            let mut dy = r + r;
            let mut p = -(r >> 1);

            d.draw_fast_hline(x0 - r, y0, dy + 1, color)?;

            while x < r {
                if p >= 0 {
                    dy -= 2;
                    p -= dy;
                    r -= 1;
                }
                dx += 2;
                p += dx;
                x += 1;

                d.draw_fast_hline(x0 - r, y0 + x, 2 * r + 1, color)?;
                d.draw_fast_hline(x0 - r, y0 - x, 2 * r + 1, color)?;
                d.draw_fast_hline(x0 - x, y0 + r, 2 * x + 1, color)?;
                d.draw_fast_hline(x0 - x, y0 - r, 2 * x + 1, color)?;
            }
            Ok(())
        })
    }

    /// Quarter-circle outlines; `corners` is any combination of
    /// [`corner`] bits.
    pub fn draw_circle_helper(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        corners: u8,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.composite(|d| {
            let mut r = r;
            let mut f = 1 - r;
            let mut ddf_x = 1;
            let mut ddf_y = -2 * r;
            let mut x = 0;

            while x < r {
                if f >= 0 {
                    r -= 1;
                    ddf_y += 2;
                    f += ddf_y;
                }
                x += 1;
                ddf_x += 2;
                f += ddf_x;

                if corners & corner::BOTTOM_RIGHT != 0 {
                    d.draw_pixel(x0 + x, y0 + r, color)?;
                    d.draw_pixel(x0 + r, y0 + x, color)?;
                }
                if corners & corner::TOP_RIGHT != 0 {
                    d.draw_pixel(x0 + x, y0 - r, color)?;
                    d.draw_pixel(x0 + r, y0 - x, color)?;
                }
                if corners & corner::BOTTOM_LEFT != 0 {
                    d.draw_pixel(x0 - r, y0 + x, color)?;
                    d.draw_pixel(x0 - x, y0 + r, color)?;
                }
                if corners & corner::TOP_LEFT != 0 {
                    d.draw_pixel(x0 - r, y0 - x, color)?;
                    d.draw_pixel(x0 - x, y0 - r, color)?;
                }
            }
            Ok(())
        })
    }

    /// Filled half-discs used for rounded rectangles.
    ///
    /// Each span is stretched by `delta` pixels to the right, so two
    /// half-discs `delta` apart fill a stadium shape.
    pub fn fill_circle_helper(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        halves: u8,
        delta: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.composite(|d| {
            let mut r = r;
            let mut f = 1 - r;
            let mut ddf_x = 1;
            let mut ddf_y = -r - r;
            let mut y = 0;
            let delta = delta + 1;

            while y < r {
                if f >= 0 {
                    r -= 1;
                    ddf_y += 2;
                    f += ddf_y;
                }
                y += 1;
                ddf_x += 2;
                f += ddf_x;

                if halves & half::LOWER != 0 {
                    d.draw_fast_hline(x0 - r, y0 + y, r + r + delta, color)?;
                    d.draw_fast_hline(x0 - y, y0 + r, y + y + delta, color)?;
                }
                if halves & half::UPPER != 0 {
                    d.draw_fast_hline(x0 - r, y0 - y, r + r + delta, color)?;
                    d.draw_fast_hline(x0 - y, y0 - r, y + y + delta, color)?;
                }
            }
            Ok(())
        })
    }

    /// Ellipse outline. Radii below 2 draw nothing.
    pub fn draw_ellipse(&mut self, x0: i32, y0: i32, rx: i32, ry: i32, color: u16) -> Result<(), DisplayError> {
        if rx < 2 || ry < 2 {
            return Ok(());
        }
        self.composite(|d| {
            ellipse_quadrants(rx, ry, |x, y| {
                d.draw_pixel(x0 + x, y0 + y, color)?;
                d.draw_pixel(x0 - x, y0 + y, color)?;
                d.draw_pixel(x0 - x, y0 - y, color)?;
                d.draw_pixel(x0 + x, y0 - y, color)
            })
        })
    }

    /// Filled ellipse. Radii below 2 draw nothing.
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, rx: i32, ry: i32, color: u16) -> Result<(), DisplayError> {
        if rx < 2 || ry < 2 {
            return Ok(());
        }
        self.composite(|d| {
            ellipse_quadrants(rx, ry, |x, y| {
                d.draw_fast_hline(x0 - x, y0 - y, x + x + 1, color)?;
                d.draw_fast_hline(x0 - x, y0 + y, x + x + 1, color)
            })
        })
    }

    /// Rounded-rectangle outline.
    pub fn draw_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        r: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        if w < 1 || h < 1 {
            return Ok(());
        }
        let r = clamp_radius(r, w, h);
        self.composite(|d| {
            d.draw_fast_hline(x + r, y, w - r - r, color)?;
            d.draw_fast_hline(x + r, y + h - 1, w - r - r, color)?;
            d.draw_fast_vline(x, y + r, h - r - r, color)?;
            d.draw_fast_vline(x + w - 1, y + r, h - r - r, color)?;

            d.draw_circle_helper(x + r, y + r, r, corner::TOP_LEFT, color)?;
            d.draw_circle_helper(x + w - r - 1, y + r, r, corner::TOP_RIGHT, color)?;
            d.draw_circle_helper(x + w - r - 1, y + h - r - 1, r, corner::BOTTOM_RIGHT, color)?;
            d.draw_circle_helper(x + r, y + h - r - 1, r, corner::BOTTOM_LEFT, color)
        })
    }

    /// Filled rounded rectangle: a body rectangle plus two stretched
    /// half-discs for the top and bottom bands.
    pub fn fill_round_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        r: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        if w < 1 || h < 1 {
            return Ok(());
        }
        let r = clamp_radius(r, w, h);
        self.composite(|d| {
            d.fill_rect(x, y + r, w, h - r - r, color)?;
            d.fill_circle_helper(x + r, y + h - r - 1, r, half::LOWER, w - r - r - 1, color)?;
            d.fill_circle_helper(x + r, y + r, r, half::UPPER, w - r - r - 1, color)
        })
    }

    /// Triangle outline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.composite(|d| {
            d.draw_line(x0, y0, x1, y1, color)?;
            d.draw_line(x1, y1, x2, y2, color)?;
            d.draw_line(x2, y2, x0, y0, color)
        })
    }

    /// Filled triangle by scanline interpolation.
    ///
    /// Vertices are sorted by y with a stable three-swap network, so
    /// vertices sharing a y keep their input order.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        let (mut x0, mut y0, mut x1, mut y1, mut x2, mut y2) = (x0, y0, x1, y1, x2, y2);
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            swap(&mut y2, &mut y1);
            swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }

        if y0 == y2 {
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            return self.span(a, b, y0, color);
        }

        // Only visible scanlines are walked.
        let top = y0.max(0);
        let bottom = y2.min(i32::from(self.height) - 1);
        if top > bottom {
            return Ok(());
        }

        self.composite(|d| {
            for y in top..=bottom {
                // Flat bottom: the y1 scanline belongs to the upper half and
                // the lower half is empty. Otherwise y1 starts the lower half.
                let (a, b) = if y < y1 || y1 == y2 {
                    (edge_x(x0, y0, x1, y1, y), edge_x(x0, y0, x2, y2, y))
                } else {
                    (edge_x(x1, y1, x2, y2, y), edge_x(x0, y0, x2, y2, y))
                };
                d.span(a.min(b), a.max(b), y, color)?;
            }
            Ok(())
        })
    }

    /// Horizontal span `a..=b` on row `y`, clipped before its width is taken.
    fn span(&mut self, a: i32, b: i32, y: i32, color: u16) -> Result<(), DisplayError> {
        let limit = i32::from(self.width);
        let (a, b) = (a.clamp(-1, limit), b.clamp(-1, limit));
        self.draw_fast_hline(a, y, b - a + 1, color)
    }

    /// 1-bit bitmap, rows MSB-first, set bits in `color`, clear bits untouched.
    pub fn draw_bitmap(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u8],
        w: i32,
        h: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.bit_runs(x, y, bitmap, w, h, BitOrder::MsbFirst, color, None)
    }

    /// XBM bitmap (rows LSB-first), set bits in `color`.
    pub fn draw_xbitmap(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u8],
        w: i32,
        h: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.bit_runs(x, y, bitmap, w, h, BitOrder::LsbFirst, color, None)
    }

    /// XBM bitmap with clear bits painted in `bg`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_xbitmap_bg(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u8],
        w: i32,
        h: i32,
        color: u16,
        bg: u16,
    ) -> Result<(), DisplayError> {
        self.bit_runs(x, y, bitmap, w, h, BitOrder::LsbFirst, color, Some(bg))
    }

    /// Walk a packed bitmap row by row, emitting runs of equal bits as
    /// horizontal lines.
    #[allow(clippy::too_many_arguments)]
    fn bit_runs(
        &mut self,
        x: i32,
        y: i32,
        bitmap: &[u8],
        w: i32,
        h: i32,
        order: BitOrder,
        color: u16,
        bg: Option<u16>,
    ) -> Result<(), DisplayError> {
        if w < 1 || h < 1 {
            return Ok(());
        }
        let stride = (w as usize).div_ceil(8);
        self.composite(|d| {
            for j in 0..h {
                let row = bitmap.get(j as usize * stride..).unwrap_or(&[]);
                let mut i = 0;
                while i < w {
                    let set = bit(row, i as usize, order);
                    let start = i;
                    while i < w && bit(row, i as usize, order) == set {
                        i += 1;
                    }
                    let paint = if set { Some(color) } else { bg };
                    if let Some(c) = paint {
                        d.draw_fast_hline(x + start, y + j, i - start, c)?;
                    }
                }
            }
            Ok(())
        })
    }
}

/// Bit order within a bitmap byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Pixel `i` of a packed row; bytes past the end read as clear.
pub(crate) fn bit(row: &[u8], i: usize, order: BitOrder) -> bool {
    let byte = row.get(i / 8).copied().unwrap_or(0);
    let mask = match order {
        BitOrder::MsbFirst => 0x80u8 >> (i % 8),
        BitOrder::LsbFirst => 1u8 << (i % 8),
    };
    byte & mask != 0
}

/// X of the edge `(xa, ya)`-`(xb, yb)` on row `y`, truncated toward `xa`.
///
/// `ya != yb`. The product needs 66 bits for full-range coordinates; the
/// result lies between `xa` and `xb`, so it narrows back to i32.
fn edge_x(xa: i32, ya: i32, xb: i32, yb: i32, y: i32) -> i32 {
    let dx = i128::from(xb) - i128::from(xa);
    let dy = i128::from(yb) - i128::from(ya);
    let t = i128::from(y) - i128::from(ya);
    (i128::from(xa) + dx * t / dy) as i32
}

fn clamp_radius(r: i32, w: i32, h: i32) -> i32 {
    r.clamp(0, w.min(h) / 2)
}

/// Midpoint ellipse, one quadrant; `plot(x, y)` mirrors it.
fn ellipse_quadrants(
    rx: i32,
    ry: i32,
    mut plot: impl FnMut(i32, i32) -> Result<(), DisplayError>,
) -> Result<(), DisplayError> {
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let fx2 = 4 * rx2;
    let fy2 = 4 * ry2;

    let (mut x, mut y) = (0, ry);
    let mut s = 2 * ry2 + rx2 * (1 - 2 * ry);
    while ry2 * x <= rx2 * y {
        plot(x, y)?;
        if s >= 0 {
            s += fx2 * (1 - y);
            y -= 1;
        }
        s += ry2 * (4 * x + 6);
        x += 1;
    }

    let (mut x, mut y) = (rx, 0);
    let mut s = 2 * rx2 + ry2 * (1 - 2 * rx);
    while rx2 * y <= ry2 * x {
        plot(x, y)?;
        if s >= 0 {
            s += fy2 * (1 - x);
            x -= 1;
        }
        s += rx2 * (4 * y + 6);
        y += 1;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::MockPanel;

    use crate::color::named::{RED, WHITE};
    use crate::{Ili9341, PanelConfig};

    fn panel() -> Ili9341<MockPanel, NoopDelay> {
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go());
        tft.init().unwrap();
        tft.bus_mut().clear_log();
        tft
    }

    fn lit(tft: &Ili9341<MockPanel, NoopDelay>, x: i32, y: i32) -> bool {
        tft.bus().pixel(x, y) == Some(WHITE)
    }

    #[test]
    fn rect_outline_leaves_interior() {
        let mut tft = panel();
        tft.draw_rect(10, 10, 5, 4, WHITE).unwrap();
        assert!(lit(&tft, 10, 10) && lit(&tft, 14, 13) && lit(&tft, 14, 10));
        assert!(!lit(&tft, 12, 11));
        assert_eq!(tft.bus().acquires(), 1);
    }

    #[test]
    fn circle_outline_touches_cardinal_points() {
        let mut tft = panel();
        tft.draw_circle(50, 50, 10, WHITE).unwrap();
        for (x, y) in [(60, 50), (40, 50), (50, 40), (50, 60)] {
            assert!(lit(&tft, x, y), "({x}, {y})");
        }
        assert!(!lit(&tft, 50, 50));
        assert_eq!(tft.bus().acquires(), 1);
    }

    #[test]
    fn fill_round_rect_cuts_corners_only() {
        let mut tft = panel();
        tft.fill_round_rect(20, 20, 40, 30, 8, WHITE).unwrap();
        assert!(!lit(&tft, 20, 20), "corner pixel is outside the arc");
        assert!(!lit(&tft, 59, 49));
        assert!(lit(&tft, 40, 20), "top edge centre");
        assert!(lit(&tft, 20, 35), "left edge centre");
        assert!(lit(&tft, 40, 35));
        assert!(!lit(&tft, 60, 35) && !lit(&tft, 40, 50));
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let mut tft = panel();
        tft.fill_round_rect(0, 0, 20, 10, 100, WHITE).unwrap();
        assert!(lit(&tft, 10, 5));
        assert_eq!(tft.bus().offscreen_pixels(), 0);
        for y in 0..12 {
            assert!(!lit(&tft, 21, y));
        }
    }

    #[test]
    fn flat_triangle_is_one_span() {
        let mut tft = panel();
        tft.fill_triangle(30, 5, 10, 5, 20, 5, WHITE).unwrap();
        assert_eq!(tft.bus().write_bursts(), 1);
        assert_eq!(tft.bus().pixels_written(), 21);
    }

    #[test]
    fn filled_triangle_covers_vertices() {
        let mut tft = panel();
        tft.fill_triangle(10, 10, 40, 10, 10, 40, WHITE).unwrap();
        assert!(lit(&tft, 10, 10) && lit(&tft, 40, 10) && lit(&tft, 10, 40));
        assert!(lit(&tft, 15, 15));
        assert!(!lit(&tft, 35, 35));
    }

    #[test]
    fn full_range_vertices_are_clipped() {
        let mut tft = panel();
        tft.fill_triangle(i32::MIN, 0, i32::MAX, 10, 0, i32::MAX, WHITE).unwrap();
        tft.fill_triangle(i32::MIN, i32::MIN, i32::MIN, i32::MIN, 5, i32::MAX, WHITE).unwrap();
        tft.fill_triangle(i32::MIN, 3, i32::MAX, 3, 0, 3, WHITE).unwrap();
        assert_eq!(tft.bus().offscreen_pixels(), 0);
        assert!(lit(&tft, 0, 3) && lit(&tft, 239, 3), "flat span clipped to the surface");
    }

    #[test]
    fn offscreen_apex_keeps_visible_rows() {
        // Apex far above the panel; the two edges meet the top row at
        // x = 50 and x = 150 and the base sits on row 99.
        let mut tft = panel();
        tft.fill_triangle(100, -100, 0, 100, 200, 100, WHITE).unwrap();
        assert!(lit(&tft, 50, 0) && lit(&tft, 150, 0));
        assert!(!lit(&tft, 48, 0) && !lit(&tft, 152, 0));
        assert!(lit(&tft, 1, 99) && lit(&tft, 199, 99));
        assert_eq!(tft.bus().acquires(), 1);
    }

    #[test]
    fn ellipse_below_minimum_radius_draws_nothing() {
        let mut tft = panel();
        tft.fill_ellipse(50, 50, 1, 10, WHITE).unwrap();
        tft.draw_ellipse(50, 50, 10, 1, WHITE).unwrap();
        assert_eq!(tft.bus().pixels_written(), 0);
    }

    #[test]
    fn filled_ellipse_spans_both_axes() {
        let mut tft = panel();
        tft.fill_ellipse(60, 60, 20, 10, WHITE).unwrap();
        assert!(lit(&tft, 40, 60) && lit(&tft, 80, 60));
        assert!(lit(&tft, 60, 50) && lit(&tft, 60, 70));
        assert!(!lit(&tft, 41, 51));
    }

    #[test]
    fn bitmap_bit_orders() {
        let mut tft = panel();
        tft.draw_bitmap(0, 0, &[0b1100_0000], 8, 1, WHITE).unwrap();
        assert!(lit(&tft, 0, 0) && lit(&tft, 1, 0) && !lit(&tft, 7, 0));

        tft.draw_xbitmap(0, 1, &[0b1100_0000], 8, 1, WHITE).unwrap();
        assert!(!lit(&tft, 0, 1) && lit(&tft, 6, 1) && lit(&tft, 7, 1));

        tft.draw_xbitmap_bg(0, 2, &[0b0000_0001], 3, 1, WHITE, RED).unwrap();
        assert!(lit(&tft, 0, 2));
        assert_eq!(tft.bus().pixel(1, 2), Some(RED));
        assert_eq!(tft.bus().pixel(2, 2), Some(RED));
        assert_eq!(tft.bus().pixel(3, 2), Some(0));
    }

    fn coord() -> impl proptest::strategy::Strategy<Value = i32> {
        proptest::prop_oneof![proptest::num::i32::ANY, -400i32..400]
    }

    proptest::proptest! {
        /// No vertex triple overflows or writes offscreen.
        #[test]
        fn triangles_accept_any_vertices(
            x0 in coord(), y0 in coord(), x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord(),
        ) {
            let mut tft = panel();
            tft.fill_triangle(x0, y0, x1, y1, x2, y2, WHITE).unwrap();
            tft.draw_triangle(x0, y0, x1, y1, x2, y2, RED).unwrap();
            assert_eq!(tft.bus().offscreen_pixels(), 0);
            assert_eq!(tft.bus().acquires(), tft.bus().releases());
        }

        /// Every pixel within r - 0.5 of the centre is set and nothing
        /// beyond r + 0.5 is touched.
        #[test]
        fn filled_circle_stays_within_half_pixel(r in 0i32..60) {
            let mut tft = panel();
            let (cx, cy) = (120, 160);
            tft.fill_circle(cx, cy, r, WHITE).unwrap();
            for y in (cy - r - 2)..=(cy + r + 2) {
                for x in (cx - r - 2)..=(cx + r + 2) {
                    let d = f64::from((x - cx) * (x - cx) + (y - cy) * (y - cy)).sqrt();
                    let f = f64::from(r);
                    if d <= f - 0.5 {
                        assert!(lit(&tft, x, y), "missing ({x}, {y}) r={r}");
                    }
                    if d > f + 0.5 {
                        assert!(!lit(&tft, x, y), "stray ({x}, {y}) r={r}");
                    }
                }
            }
        }
    }
}
