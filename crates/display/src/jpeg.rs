//! JPEG drawing
//!
//! Decoding sits behind [`JpegDecoder`]: a decoder parses the headers, then
//! hands RGB888 tiles to a sink in raster order. The sink clips each tile to
//! the requested output window and streams it through one address window,
//! converting to RGB565 in 32 pixel batches.
//!
//! ```text
//!            off_x
//!          ┌──┼──────────── scaled image ──┐
//!   off_y ─┼──┼──────────┐                 │
//!          │  │  output  │ out_h           │
//!          │  └──────────┘                 │
//!          │     out_w                     │
//!          └───────────────────────────────┘
//! ```
//!
//! The output window lands at `(x, y)` on the panel. The bus is taken per
//! tile, so a decoder reading from the SD card can run in between.
//!
//! With the `jpeg` feature, [`ZuneJpeg`] decodes with `zune-jpeg`.

// Tile and window extents are bounded by the u16 image size and the panel.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::PanelBus;

use crate::color::color565;
use crate::driver::Ili9341;
use crate::error::DisplayError;
use crate::image::LineBuffer;

/// Edge length of the tiles produced by [`for_each_tile`].
pub const TILE: usize = 16;

/// JPEG drawing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JpegError {
    /// The tile sink asked to stop.
    #[error("Interrupted by output function")]
    Interrupted,
    /// Reading the source failed or it ended early.
    #[error("Device error or wrong termination of input stream")]
    Input,
    /// The decoder ran out of working memory.
    #[error("Insufficient memory pool for the image")]
    Memory,
    /// A marker segment did not fit the input buffer.
    #[error("Insufficient stream input buffer")]
    InputBuffer,
    /// Bad call parameters.
    #[error("Parameter error")]
    Parameter,
    /// Corrupt stream.
    #[error("Data format error")]
    Format,
    /// Valid but unsupported (subsampling, precision, component count).
    #[error("Right format but not supported")]
    Unsupported,
    /// Progressive, arithmetic or lossless coding.
    #[error("Not supported JPEG standard")]
    UnsupportedStandard,
    /// The output window does not fit on the panel.
    #[error("Bad dimensions given")]
    BadDimensions,
    /// The offset lies outside the scaled image.
    #[error("Offset Outside of JPEG size")]
    OffsetOutsideImage,
    /// Drawing failed.
    #[error("display: {0}")]
    Display(DisplayError),
}

impl From<DisplayError> for JpegError {
    fn from(e: DisplayError) -> Self {
        JpegError::Display(e)
    }
}

/// Power-of-two output divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum JpegScale {
    /// 1:1
    #[default]
    Full,
    /// 1:2
    Half,
    /// 1:4
    Quarter,
    /// 1:8
    Eighth,
}

impl JpegScale {
    /// log2 of the divisor.
    pub const fn shift(self) -> u32 {
        match self {
            JpegScale::Full => 0,
            JpegScale::Half => 1,
            JpegScale::Quarter => 2,
            JpegScale::Eighth => 3,
        }
    }
}

/// Placement of a decoded image. Zero sizes mean "to the panel edge".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JpegOptions {
    /// Widest output
    pub max_width: u16,
    /// Tallest output
    pub max_height: u16,
    /// First scaled image column drawn
    pub off_x: u16,
    /// First scaled image row drawn
    pub off_y: u16,
    /// Output divisor
    pub scale: JpegScale,
}

/// A block of decoded pixels in scaled image coordinates.
#[derive(Debug, Clone, Copy)]
pub struct JpegTile<'a> {
    /// Left column
    pub left: u16,
    /// Top row
    pub top: u16,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// `width * height` RGB888 triples, row-major
    pub rgb: &'a [u8],
}

/// Tile sink handed to [`JpegDecoder::decompress`].
pub type TileSink<'s> = dyn FnMut(&JpegTile<'_>) -> Result<(), JpegError> + 's;

/// A block-based JPEG decompressor.
pub trait JpegDecoder {
    /// Parse the headers of `data`; returns the full-size width and height.
    fn prepare(&mut self, data: &[u8]) -> Result<(u16, u16), JpegError>;

    /// Decode `data` at `scale`, passing tiles to `sink` in raster order.
    /// An error from `sink` stops decoding and is returned as is.
    fn decompress(&mut self, data: &[u8], scale: JpegScale, sink: &mut TileSink<'_>) -> Result<(), JpegError>;
}

/// Cut a full-size RGB888 image into [`TILE`]-sized tiles at `scale`,
/// sampling the top left source pixel of each scaled pixel.
pub fn for_each_tile(
    rgb: &[u8],
    width: u16,
    height: u16,
    scale: JpegScale,
    sink: &mut TileSink<'_>,
) -> Result<(), JpegError> {
    let (w, h) = (usize::from(width), usize::from(height));
    if rgb.len() < w * h * 3 {
        return Err(JpegError::Input);
    }
    let shift = scale.shift();
    let (sw, sh) = (w >> shift, h >> shift);
    let mut tile = [0u8; TILE * TILE * 3];

    for ty in (0..sh).step_by(TILE) {
        for tx in (0..sw).step_by(TILE) {
            let tw = TILE.min(sw - tx);
            let th = TILE.min(sh - ty);
            for r in 0..th {
                for c in 0..tw {
                    let src = (((ty + r) << shift) * w + ((tx + c) << shift)) * 3;
                    let dst = (r * tw + c) * 3;
                    if let (Some(from), Some(to)) = (rgb.get(src..src + 3), tile.get_mut(dst..dst + 3)) {
                        to.copy_from_slice(from);
                    }
                }
            }
            sink(&JpegTile {
                left: tx as u16,
                top: ty as u16,
                width: tw as u16,
                height: th as u16,
                rgb: tile.get(..tw * th * 3).unwrap_or(&[]),
            })?;
        }
    }
    Ok(())
}

/// Output window in scaled image and panel coordinates.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u32,
    y: u32,
    off_x: u32,
    off_y: u32,
    out_w: u32,
    out_h: u32,
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Decode `data` with `decoder` and draw it at `(x, y)`.
    ///
    /// The output window must fit on the panel. Tiles already drawn stay
    /// on screen if decoding fails part way.
    pub fn draw_jpg_with<D: JpegDecoder + ?Sized>(
        &mut self,
        decoder: &mut D,
        data: &[u8],
        x: i32,
        y: i32,
        opts: &JpegOptions,
    ) -> Result<(), JpegError> {
        let (w, h) = (i32::from(self.width), i32::from(self.height));
        if x < 0
            || y < 0
            || x >= w
            || y >= h
            || x + i32::from(opts.max_width) > w
            || y + i32::from(opts.max_height) > h
        {
            warn!("JPEG: bad dimensions");
            return Err(JpegError::BadDimensions);
        }
        let max_w = if opts.max_width == 0 { w - x } else { i32::from(opts.max_width) } as u32;
        let max_h = if opts.max_height == 0 { h - y } else { i32::from(opts.max_height) } as u32;

        let (jw, jh) = decoder.prepare(data).inspect_err(|_| warn!("JPEG: bad header"))?;
        let shift = opts.scale.shift();
        let (sw, sh) = (u32::from(jw) >> shift, u32::from(jh) >> shift);
        let (off_x, off_y) = (u32::from(opts.off_x), u32::from(opts.off_y));
        if off_x >= sw || off_y >= sh {
            warn!("JPEG: offset outside image");
            return Err(JpegError::OffsetOutsideImage);
        }
        debug!("JPEG {}x{} scaled 1/{}", jw, jh, 1u32 << shift);

        let layout = Layout {
            x: x as u32,
            y: y as u32,
            off_x,
            off_y,
            out_w: (sw - off_x).min(max_w),
            out_h: (sh - off_y).min(max_h),
        };
        decoder
            .decompress(data, opts.scale, &mut |tile: &JpegTile<'_>| self.jpeg_tile(&layout, tile))
            .inspect_err(|_| warn!("JPEG: decode failed"))
    }

    /// Clip one tile to the output window and stream it.
    fn jpeg_tile(&mut self, l: &Layout, t: &JpegTile<'_>) -> Result<(), JpegError> {
        let (left, top) = (u32::from(t.left), u32::from(t.top));
        let (tw, th) = (u32::from(t.width), u32::from(t.height));
        if tw == 0 || th == 0 {
            return Ok(());
        }
        let (right, bottom) = (left + tw - 1, top + th - 1);
        if right < l.off_x || left >= l.off_x + l.out_w || bottom < l.off_y || top >= l.off_y + l.out_h {
            return Ok(());
        }
        if t.rgb.len() < (tw * th * 3) as usize {
            return Err(JpegError::Parameter);
        }

        let skip_top = l.off_y.saturating_sub(top);
        let skip_bottom = (bottom + 1).saturating_sub(l.off_y + l.out_h);
        let skip_left = l.off_x.saturating_sub(left);
        let skip_right = (right + 1).saturating_sub(l.off_x + l.out_w);
        let rows = th - skip_top - skip_bottom;
        let cols = tw - skip_left - skip_right;

        let sx = left + skip_left - l.off_x + l.x;
        let sy = top + skip_top - l.off_y + l.y;
        let (x1, y1) = (sx + cols - 1, sy + rows - 1);
        if x1 >= u32::from(self.width) || y1 >= u32::from(self.height) {
            return Ok(());
        }

        self.transaction(|d| {
            d.set_window(sx as u16, sy as u16, x1 as u16, y1 as u16)?;
            let mut line = LineBuffer::new();
            for r in 0..rows {
                let start = (((skip_top + r) * tw + skip_left) * 3) as usize;
                let Some(px) = t.rgb.get(start..start + cols as usize * 3) else {
                    break;
                };
                for rgb in px.chunks_exact(3) {
                    if let [r, g, b] = *rgb {
                        line.push(&mut d.bus, color565(r, g, b))?;
                    }
                }
            }
            line.flush(&mut d.bus)?;
            Ok(())
        })?;
        Ok(())
    }
}

#[cfg(feature = "jpeg")]
mod zune {
    use alloc::vec;

    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::OutputPin;
    use embedded_io::SeekFrom;
    use platform::{File, PanelBus};
    use zune_core::colorspace::ColorSpace;
    use zune_core::options::DecoderOptions;

    use super::{for_each_tile, JpegDecoder, JpegError, JpegOptions, JpegScale, TileSink};
    use crate::driver::Ili9341;

    /// [`JpegDecoder`] backed by `zune-jpeg`.
    ///
    /// Decodes the whole image into memory, then tiles it. Baseline and
    /// progressive streams are both accepted.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct ZuneJpeg;

    /// Strict mode turns zune's zero padding of a short scan into an error.
    fn options() -> DecoderOptions {
        DecoderOptions::default()
            .set_strict_mode(true)
            .jpeg_set_out_colorspace(ColorSpace::RGB)
    }

    /// The last scan is followed by an EOI marker.
    ///
    /// Entropy-coded data stuffs every 0xFF, so an `FF D9` after the final
    /// `FF DA` can only be the end of image. Strict mode alone lets a scan
    /// that is a few bytes short through.
    fn scan_is_terminated(data: &[u8]) -> bool {
        let Some(sos) = data.windows(2).rposition(|m| m == [0xFF, 0xDA]) else {
            return false;
        };
        data.get(sos..)
            .is_some_and(|scan| scan.windows(2).any(|m| m == [0xFF, 0xD9]))
    }

    impl JpegDecoder for ZuneJpeg {
        fn prepare(&mut self, data: &[u8]) -> Result<(u16, u16), JpegError> {
            let mut dec = zune_jpeg::JpegDecoder::new_with_options(data, options());
            dec.decode_headers().map_err(|_| JpegError::Format)?;
            let info = dec.info().ok_or(JpegError::Format)?;
            Ok((info.width, info.height))
        }

        fn decompress(&mut self, data: &[u8], scale: JpegScale, sink: &mut TileSink<'_>) -> Result<(), JpegError> {
            if !scan_is_terminated(data) {
                return Err(JpegError::Format);
            }
            let mut dec = zune_jpeg::JpegDecoder::new_with_options(data, options());
            let rgb = dec.decode().map_err(|_| JpegError::Format)?;
            let info = dec.info().ok_or(JpegError::Format)?;
            for_each_tile(&rgb, info.width, info.height, scale, sink)
        }
    }

    impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
    where
        BUS: PanelBus,
        DELAY: DelayNs,
        RST: OutputPin,
    {
        /// Draw a JPEG held in memory.
        pub fn draw_jpg_mem(&mut self, data: &[u8], x: i32, y: i32, opts: &JpegOptions) -> Result<(), JpegError> {
            self.draw_jpg_with(&mut ZuneJpeg, data, x, y, opts)
        }

        /// Read a JPEG file into memory and draw it.
        pub fn draw_jpg<F: File>(&mut self, file: &mut F, x: i32, y: i32, opts: &JpegOptions) -> Result<(), JpegError> {
            let len = usize::try_from(file.size()).map_err(|_| JpegError::Memory)?;
            let mut data = vec![0u8; len];
            file.seek(SeekFrom::Start(0)).map_err(|_| JpegError::Input)?;
            file.read_exact(&mut data).map_err(|_| JpegError::Input)?;
            self.draw_jpg_mem(&data, x, y, opts)
        }
    }
}

#[cfg(feature = "jpeg")]
pub use zune::ZuneJpeg;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::MockPanel;

    use super::*;
    use crate::command::Command;
    use crate::PanelConfig;

    const PAPER: u16 = 0x4208;

    /// 20x12 gradient, tiled by `for_each_tile`.
    struct Gradient {
        rgb: Vec<u8>,
    }

    impl Gradient {
        const W: u16 = 20;
        const H: u16 = 12;

        fn new() -> Self {
            let mut rgb = Vec::new();
            for y in 0..Self::H {
                for x in 0..Self::W {
                    rgb.extend_from_slice(&[x as u8 * 8, y as u8 * 16, 0x80]);
                }
            }
            Self { rgb }
        }

        fn color(x: u16, y: u16) -> u16 {
            color565(x as u8 * 8, y as u8 * 16, 0x80)
        }
    }

    impl JpegDecoder for Gradient {
        fn prepare(&mut self, _data: &[u8]) -> Result<(u16, u16), JpegError> {
            Ok((Self::W, Self::H))
        }

        fn decompress(&mut self, _data: &[u8], scale: JpegScale, sink: &mut TileSink<'_>) -> Result<(), JpegError> {
            for_each_tile(&self.rgb, Self::W, Self::H, scale, sink)
        }
    }

    fn panel() -> Ili9341<MockPanel, NoopDelay> {
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go());
        tft.init().unwrap();
        tft.bus_mut().fill(PAPER);
        tft.bus_mut().clear_log();
        tft
    }

    #[test]
    fn whole_image_one_window_per_tile() {
        let mut tft = panel();
        tft.draw_jpg_with(&mut Gradient::new(), &[], 10, 10, &JpegOptions::default())
            .unwrap();
        assert_eq!(tft.bus().pixels_written(), 240);
        // 20x12 in 16 px tiles: 2 x 1.
        assert_eq!(tft.bus().write_bursts(), 2);
        assert_eq!(tft.bus().pixel(10, 10), Some(Gradient::color(0, 0)));
        assert_eq!(tft.bus().pixel(29, 21), Some(Gradient::color(19, 11)));
        assert_eq!(tft.bus().pixel(30, 10), Some(PAPER));
        assert_eq!(tft.bus().acquires(), 2);
    }

    #[test]
    fn offset_and_max_size_crop() {
        let mut tft = panel();
        let opts = JpegOptions {
            max_width: 10,
            max_height: 6,
            off_x: 4,
            off_y: 2,
            ..JpegOptions::default()
        };
        tft.draw_jpg_with(&mut Gradient::new(), &[], 0, 0, &opts).unwrap();
        assert_eq!(tft.bus().pixels_written(), 60);
        assert_eq!(tft.bus().pixel(0, 0), Some(Gradient::color(4, 2)));
        assert_eq!(tft.bus().pixel(9, 5), Some(Gradient::color(13, 7)));
        assert_eq!(tft.bus().pixel(10, 0), Some(PAPER));
        assert_eq!(tft.bus().pixel(0, 6), Some(PAPER));
    }

    #[test]
    fn half_scale_samples_every_other_pixel() {
        let mut tft = panel();
        let opts = JpegOptions {
            scale: JpegScale::Half,
            ..JpegOptions::default()
        };
        tft.draw_jpg_with(&mut Gradient::new(), &[], 0, 0, &opts).unwrap();
        assert_eq!(tft.bus().pixels_written(), 60);
        assert_eq!(tft.bus().pixel(3, 2), Some(Gradient::color(6, 4)));
    }

    #[test]
    fn rejects_bad_placement() {
        let mut tft = panel();
        let too_wide = JpegOptions {
            max_width: 100,
            ..JpegOptions::default()
        };
        assert_eq!(
            tft.draw_jpg_with(&mut Gradient::new(), &[], 200, 0, &too_wide),
            Err(JpegError::BadDimensions)
        );
        assert_eq!(
            tft.draw_jpg_with(&mut Gradient::new(), &[], -1, 0, &JpegOptions::default()),
            Err(JpegError::BadDimensions)
        );
        let past_end = JpegOptions {
            off_x: 20,
            ..JpegOptions::default()
        };
        assert_eq!(
            tft.draw_jpg_with(&mut Gradient::new(), &[], 0, 0, &past_end),
            Err(JpegError::OffsetOutsideImage)
        );
        assert_eq!(tft.bus().count(Command::MemoryWrite as u8), 0);
    }

    #[test]
    fn busy_bus_aborts_decode() {
        let mut tft = panel();
        tft.bus_mut().set_contended(true);
        assert_eq!(
            tft.draw_jpg_with(&mut Gradient::new(), &[], 0, 0, &JpegOptions::default()),
            Err(JpegError::Display(DisplayError::Busy))
        );
        assert_eq!(tft.bus().pixels_written(), 0);
    }

    #[test]
    fn short_source_is_an_input_error() {
        let mut sink = |_: &JpegTile<'_>| Ok(());
        assert_eq!(
            for_each_tile(&[0; 10], 4, 4, JpegScale::Full, &mut sink),
            Err(JpegError::Input)
        );
    }
}
