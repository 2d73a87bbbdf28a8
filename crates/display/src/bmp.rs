//! BMP decoder
//!
//! Uncompressed 24-bit Windows bitmaps only. Rows are stored bottom-up
//! (top-down when the height field is negative) and padded to four bytes.
//!
//! Each visible row is read from the file, converted to RGB565 and pushed as
//! a one pixel tall image. The bus is released between rows so the SD card
//! sharing it can be read.

// Header fields are range-checked before any narrowing, and row offsets fit
// in u64.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_io::SeekFrom;
use platform::config::PANEL_HEIGHT;
use platform::{File, PanelBus};

use crate::color::color565;
use crate::driver::Ili9341;
use crate::error::DisplayError;
use crate::raster::LINE_CHUNK;

/// File header plus BITMAPINFOHEADER.
pub const HEADER_LEN: usize = 54;

/// Pixels converted per window; the widest logical row of the panel.
const ROW_PIXELS: usize = PANEL_HEIGHT as usize;

/// BMP decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BmpError {
    /// The file could not be read.
    #[error("read failed")]
    Read,
    /// The file could not be positioned.
    #[error("seek failed")]
    Seek,
    /// Missing `BM` signature.
    #[error("not a BMP file")]
    BadSignature,
    /// Not a single-plane, uncompressed, 24-bit image.
    #[error("unsupported BMP format")]
    UnsupportedFormat,
    /// Pixel data extends past the end of the file.
    #[error("BMP pixel data truncated")]
    Truncated,
    /// Drawing failed.
    #[error("display: {0}")]
    Display(DisplayError),
}

impl From<DisplayError> for BmpError {
    fn from(e: DisplayError) -> Self {
        BmpError::Display(e)
    }
}

/// The fields of a BMP header this decoder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    /// File offset of the first pixel row
    pub data_offset: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// First row in the file is the bottom of the image
    pub bottom_up: bool,
}

fn le16(raw: &[u8; HEADER_LEN], at: usize) -> u16 {
    match raw.get(at..at + 2) {
        Some(&[a, b]) => u16::from_le_bytes([a, b]),
        _ => 0,
    }
}

fn le32(raw: &[u8; HEADER_LEN], at: usize) -> u32 {
    match raw.get(at..at + 4) {
        Some(&[a, b, c, d]) => u32::from_le_bytes([a, b, c, d]),
        _ => 0,
    }
}

impl BmpHeader {
    /// Validate and decode the first [`HEADER_LEN`] bytes of a file.
    pub fn parse(raw: &[u8; HEADER_LEN]) -> Result<Self, BmpError> {
        if le16(raw, 0) != 0x4D42 {
            return Err(BmpError::BadSignature);
        }
        let data_offset = le32(raw, 10);
        let width = le32(raw, 18) as i32;
        let height = le32(raw, 22) as i32;
        let planes = le16(raw, 26);
        let bpp = le16(raw, 28);
        let compression = le32(raw, 30);

        if planes != 1 || bpp != 24 || compression != 0 {
            return Err(BmpError::UnsupportedFormat);
        }
        if width <= 0 || height == 0 || height == i32::MIN {
            return Err(BmpError::UnsupportedFormat);
        }
        Ok(Self {
            data_offset,
            width: width as u32,
            height: height.unsigned_abs(),
            bottom_up: height > 0,
        })
    }

    /// Bytes per stored row, including padding.
    pub fn stride(&self) -> u64 {
        (u64::from(self.width) * 3 + 3) & !3
    }

    /// Offset one past the last pixel byte.
    pub fn data_end(&self) -> u64 {
        u64::from(self.data_offset) + self.stride() * u64::from(self.height)
    }
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Draw a 24-bit BMP with its top left corner at `(x, y)`.
    ///
    /// A bad header draws nothing. Rows outside the panel are skipped
    /// without being read.
    pub fn draw_bmp<F: File>(&mut self, file: &mut F, x: i32, y: i32) -> Result<(), BmpError> {
        if x >= i32::from(self.width) || y >= i32::from(self.height) {
            return Ok(());
        }

        let mut raw = [0u8; HEADER_LEN];
        file.seek(SeekFrom::Start(0)).map_err(|_| BmpError::Seek)?;
        file.read_exact(&mut raw).map_err(|_| BmpError::Read)?;
        let header = match BmpHeader::parse(&raw) {
            Ok(h) => h,
            Err(e) => {
                warn!("BMP rejected");
                return Err(e);
            }
        };
        if header.data_end() > file.size() {
            warn!("BMP truncated");
            return Err(BmpError::Truncated);
        }
        debug!("BMP {}x{}", header.width, header.height);

        let w = i32::try_from(header.width).map_err(|_| BmpError::UnsupportedFormat)?;
        let h = i32::try_from(header.height).map_err(|_| BmpError::UnsupportedFormat)?;
        let stride = header.stride();

        let mut row = [0u16; ROW_PIXELS];
        let mut bytes = [0u8; LINE_CHUNK * 3];

        for i in 0..h {
            let ty = if header.bottom_up { y + h - 1 - i } else { y + i };
            let Some(c) = self.clip_image(x, ty, w, 1, w as usize) else {
                continue;
            };

            let row_start = u64::from(header.data_offset) + stride * i as u64;
            let mut done = 0usize;
            while done < usize::from(c.w) {
                let n = (usize::from(c.w) - done).min(ROW_PIXELS);
                let col = (c.src_x + done) as u64;
                file.seek(SeekFrom::Start(row_start + col * 3))
                    .map_err(|_| BmpError::Seek)?;

                let pixels = row.get_mut(..n).unwrap_or(&mut []);
                for chunk in pixels.chunks_mut(LINE_CHUNK) {
                    let buf = bytes.get_mut(..chunk.len() * 3).unwrap_or(&mut []);
                    file.read_exact(buf).map_err(|_| BmpError::Read)?;
                    for (px, bgr) in chunk.iter_mut().zip(buf.chunks_exact(3)) {
                        if let [b, g, r] = *bgr {
                            *px = color565(r, g, b);
                        }
                    }
                }

                let x0 = c.x + done as u16;
                let x1 = x0 + n as u16 - 1;
                let line = row.get(..n).unwrap_or(&[]);
                self.transaction(|d| {
                    d.set_window(x0, c.y, x1, c.y)?;
                    d.bus.write_pixels(line)?;
                    Ok(())
                })?;
                done += n;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn header(width: i32, height: i32, bpp: u16, compression: u32) -> [u8; HEADER_LEN] {
        let mut raw = [0u8; HEADER_LEN];
        raw[0..2].copy_from_slice(b"BM");
        raw[10..14].copy_from_slice(&54u32.to_le_bytes());
        raw[14..18].copy_from_slice(&40u32.to_le_bytes());
        raw[18..22].copy_from_slice(&width.to_le_bytes());
        raw[22..26].copy_from_slice(&height.to_le_bytes());
        raw[26..28].copy_from_slice(&1u16.to_le_bytes());
        raw[28..30].copy_from_slice(&bpp.to_le_bytes());
        raw[30..34].copy_from_slice(&compression.to_le_bytes());
        raw
    }

    #[test]
    fn parses_bottom_up_and_top_down() {
        let h = BmpHeader::parse(&header(3, 2, 24, 0)).unwrap();
        assert_eq!((h.width, h.height, h.bottom_up), (3, 2, true));
        assert_eq!(h.stride(), 12);
        assert_eq!(h.data_end(), 54 + 24);

        let h = BmpHeader::parse(&header(4, -5, 24, 0)).unwrap();
        assert_eq!((h.width, h.height, h.bottom_up), (4, 5, false));
        assert_eq!(h.stride(), 12);
    }

    #[test]
    fn rejects_other_formats() {
        let mut raw = header(2, 2, 24, 0);
        raw[0] = b'X';
        assert_eq!(BmpHeader::parse(&raw), Err(BmpError::BadSignature));
        assert_eq!(BmpHeader::parse(&header(2, 2, 16, 0)), Err(BmpError::UnsupportedFormat));
        assert_eq!(BmpHeader::parse(&header(2, 2, 24, 1)), Err(BmpError::UnsupportedFormat));
        assert_eq!(BmpHeader::parse(&header(0, 2, 24, 0)), Err(BmpError::UnsupportedFormat));
        assert_eq!(BmpHeader::parse(&header(2, 0, 24, 0)), Err(BmpError::UnsupportedFormat));
    }
}
