//! Image transfer
//!
//! Pushes 16-bit, 8-bit (RGB332) and 1-bit sources onto the panel. Sources
//! are row-major with a stride equal to their full width; negative or
//! oversized placements are clipped by skipping into the source so only the
//! visible sub-rectangle crosses the bus.
//!
//! Keyed variants skip pixels equal to a transparent colour. Each run of
//! visible pixels costs one window and one burst:
//!
//! ```text
//! row:    A  T  B  B  T
//! bus:  [win A][px A]  [win B][px B B]
//! ```

// Clipped extents are <= 320 and source offsets are non-negative after
// clipping.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects
)]

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::{BusError, PanelBus};

use crate::color::color8to16;
use crate::driver::Ili9341;
use crate::error::DisplayError;
use crate::primitives::{bit, BitOrder};
use crate::raster::LINE_CHUNK;

/// Small pixel staging buffer, flushed to the bus when full.
pub(crate) struct LineBuffer {
    buf: [u16; LINE_CHUNK],
    len: usize,
}

impl LineBuffer {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; LINE_CHUNK],
            len: 0,
        }
    }

    pub(crate) fn push<B: PanelBus>(&mut self, bus: &mut B, color: u16) -> Result<(), BusError> {
        if self.len == LINE_CHUNK {
            self.flush(bus)?;
        }
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = color;
            self.len += 1;
        }
        Ok(())
    }

    pub(crate) fn flush<B: PanelBus>(&mut self, bus: &mut B) -> Result<(), BusError> {
        let pending = self.buf.get(..self.len).unwrap_or(&[]);
        if !pending.is_empty() {
            bus.write_pixels(pending)?;
        }
        self.len = 0;
        Ok(())
    }
}

/// Visible part of a source image.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ImageClip {
    /// Target origin and extent on the surface
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
    /// First visible source column and row
    pub src_x: usize,
    pub src_y: usize,
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Byte-swap 16-bit image sources before sending them.
    ///
    /// Set this for images stored as little-endian byte arrays that were
    /// reinterpreted as `u16` on a big-endian basis (or vice versa).
    pub fn set_swap_bytes(&mut self, swap: bool) {
        self.swap_bytes = swap;
    }

    /// Current byte-swap setting.
    pub fn swap_bytes(&self) -> bool {
        self.swap_bytes
    }

    /// Draw a `w` x `h` RGB565 image. `data` shorter than `w * h` draws
    /// nothing.
    pub fn push_image(&mut self, x: i32, y: i32, w: i32, h: i32, data: &[u16]) -> Result<(), DisplayError> {
        let Some(c) = self.clip_image(x, y, w, h, data.len()) else {
            return Ok(());
        };
        let stride = w as usize;
        let swap = self.swap_bytes;
        self.transaction(|d| {
            d.set_window(c.x, c.y, c.x1(), c.y1())?;
            for row in 0..usize::from(c.h) {
                let start = (c.src_y + row) * stride + c.src_x;
                if let Some(line) = data.get(start..start + usize::from(c.w)) {
                    d.write_words(line, swap)?;
                }
            }
            Ok(())
        })
    }

    /// Draw an RGB565 image, skipping pixels equal to `transparent`.
    ///
    /// With byte swapping on, the key is compared after the swap.
    pub fn push_image_transparent(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        data: &[u16],
        transparent: u16,
    ) -> Result<(), DisplayError> {
        let Some(c) = self.clip_image(x, y, w, h, data.len()) else {
            return Ok(());
        };
        let stride = w as usize;
        let swap = self.swap_bytes;
        self.blit_keyed(c, |row, col| {
            let raw = data.get(row * stride + col).copied().unwrap_or(transparent);
            let color = if swap { raw.swap_bytes() } else { raw };
            (color != transparent).then_some(color)
        })
    }

    /// Draw an RGB332 image, expanding each pixel to RGB565.
    pub fn push_image_8bit(&mut self, x: i32, y: i32, w: i32, h: i32, data: &[u8]) -> Result<(), DisplayError> {
        let Some(c) = self.clip_image(x, y, w, h, data.len()) else {
            return Ok(());
        };
        let stride = w as usize;
        self.blit_opaque(c, |row, col| {
            data.get(row * stride + col).copied().map_or(0, color8to16)
        })
    }

    /// Draw an RGB332 image, skipping pixels equal to `transparent`.
    pub fn push_image_8bit_transparent(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        data: &[u8],
        transparent: u8,
    ) -> Result<(), DisplayError> {
        let Some(c) = self.clip_image(x, y, w, h, data.len()) else {
            return Ok(());
        };
        let stride = w as usize;
        self.blit_keyed(c, |row, col| {
            let raw = data.get(row * stride + col).copied().unwrap_or(transparent);
            (raw != transparent).then(|| color8to16(raw))
        })
    }

    /// Draw a 1-bit image (rows padded to whole bytes, MSB first) in the
    /// bitmap colours: set bits foreground, clear bits background.
    pub fn push_image_1bit(&mut self, x: i32, y: i32, w: i32, h: i32, data: &[u8]) -> Result<(), DisplayError> {
        let stride = bit_stride(w);
        let Some(c) = self.clip_image(x, y, w, h, bits_available(data.len(), stride, w)) else {
            return Ok(());
        };
        let (fg, bg) = (self.text.bitmap_fg, self.text.bitmap_bg);
        self.blit_opaque(c, |row, col| {
            let line = data.get(row * stride..).unwrap_or(&[]);
            if bit(line, col, BitOrder::MsbFirst) {
                fg
            } else {
                bg
            }
        })
    }

    /// Draw a 1-bit image, painting only the set bits in the bitmap
    /// foreground colour.
    pub fn push_image_1bit_transparent(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        data: &[u8],
    ) -> Result<(), DisplayError> {
        let stride = bit_stride(w);
        let Some(c) = self.clip_image(x, y, w, h, bits_available(data.len(), stride, w)) else {
            return Ok(());
        };
        let fg = self.text.bitmap_fg;
        self.blit_keyed(c, |row, col| {
            let line = data.get(row * stride..).unwrap_or(&[]);
            bit(line, col, BitOrder::MsbFirst).then_some(fg)
        })
    }

    /// Clip a `w` x `h` source with `available` pixels to the surface.
    pub(crate) fn clip_image(&self, x: i32, y: i32, w: i32, h: i32, available: usize) -> Option<ImageClip> {
        if w < 1 || h < 1 || available < (w as usize).saturating_mul(h as usize) {
            return None;
        }
        let c = self.clip(x, y, w, h)?;
        Some(ImageClip {
            x: c.x,
            y: c.y,
            w: c.w,
            h: c.h,
            src_x: (i32::from(c.x) - x) as usize,
            src_y: (i32::from(c.y) - y) as usize,
        })
    }

    /// One window for the whole visible rectangle, pixels streamed from
    /// `src(row, col)` in source coordinates.
    pub(crate) fn blit_opaque(
        &mut self,
        c: ImageClip,
        mut src: impl FnMut(usize, usize) -> u16,
    ) -> Result<(), DisplayError> {
        self.transaction(|d| {
            d.set_window(c.x, c.y, c.x1(), c.y1())?;
            let mut line = LineBuffer::new();
            for row in 0..usize::from(c.h) {
                for col in 0..usize::from(c.w) {
                    line.push(&mut d.bus, src(c.src_y + row, c.src_x + col))?;
                }
            }
            line.flush(&mut d.bus)?;
            Ok(())
        })
    }

    /// One window and burst per run of pixels for which `src` returns a
    /// colour; `None` is transparent.
    pub(crate) fn blit_keyed(
        &mut self,
        c: ImageClip,
        mut src: impl FnMut(usize, usize) -> Option<u16>,
    ) -> Result<(), DisplayError> {
        let (xe, ye) = (c.x1(), c.y1());
        self.transaction(|d| {
            let mut line = LineBuffer::new();
            for row in 0..c.h {
                let y = c.y + row;
                let mut open = false;
                for col in 0..c.w {
                    match src(c.src_y + usize::from(row), c.src_x + usize::from(col)) {
                        Some(color) => {
                            if !open {
                                line.flush(&mut d.bus)?;
                                d.set_window(c.x + col, y, xe, ye)?;
                                open = true;
                            }
                            line.push(&mut d.bus, color)?;
                        }
                        None => {
                            line.flush(&mut d.bus)?;
                            open = false;
                        }
                    }
                }
                line.flush(&mut d.bus)?;
            }
            Ok(())
        })
    }
}

impl ImageClip {
    pub(crate) fn x1(self) -> u16 {
        self.x + self.w - 1
    }

    pub(crate) fn y1(self) -> u16 {
        self.y + self.h - 1
    }
}

/// Bytes per row of a 1-bit image.
fn bit_stride(w: i32) -> usize {
    (w.max(0) as usize).div_ceil(8)
}

/// Pixels covered by whole rows of a 1-bit source.
fn bits_available(len: usize, stride: usize, w: i32) -> usize {
    (len / stride.max(1)).saturating_mul(w.max(0) as usize)
}
