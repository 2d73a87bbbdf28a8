//! Text Renderer
//!
//! Three font kinds share one cursor and one set of colours:
//!
//! - font 1, the classic 6x8 cell (5x7 glyph, one column and one row gap)
//! - fonts 2 and 4, run-length encoded proportional fonts
//! - a [`FreeFont`] selected with [`Ili9341::set_free_font`], which stands in
//!   for font 1 until [`Ili9341::set_text_font`] is called
//!
//! Text with equal foreground and background colours is drawn transparent.
//! Opaque text at size 1 that is fully on screen streams the whole cell
//! through one window; everything else goes through rectangle fills, which
//! yields the same pixels.
//!
//! String layout measures the string, moves the origin by the selected
//! [`TextDatum`], draws, then erases any slack up to the padding width.

// Glyph cells are bounded by size (<= 7) x 26 px and offsets by the panel.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;
use platform::PanelBus;

use crate::color::named::{BLACK, WHITE};
use crate::driver::Ili9341;
use crate::error::DisplayError;
use crate::fonts::rle::Run;
use crate::fonts::{classic_column, normalize_id, Builtin, FreeFont, Glyph, RleFont, CLASSIC};

/// Largest text size multiplier.
pub const MAX_TEXT_SIZE: u8 = 7;

/// Where the string origin sits relative to the drawn text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextDatum {
    /// Top left (default)
    #[default]
    TopLeft,
    /// Top centre
    TopCentre,
    /// Top right
    TopRight,
    /// Middle left
    MiddleLeft,
    /// Middle centre
    MiddleCentre,
    /// Middle right
    MiddleRight,
    /// Bottom left
    BottomLeft,
    /// Bottom centre
    BottomCentre,
    /// Bottom right
    BottomRight,
    /// Left on the baseline
    LeftBaseline,
    /// Centre on the baseline
    CentreBaseline,
    /// Right on the baseline
    RightBaseline,
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Centre,
    Right,
}

impl TextDatum {
    fn align(self) -> Align {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft | Self::LeftBaseline => Align::Left,
            Self::TopCentre | Self::MiddleCentre | Self::BottomCentre | Self::CentreBaseline => Align::Centre,
            Self::TopRight | Self::MiddleRight | Self::BottomRight | Self::RightBaseline => Align::Right,
        }
    }

    fn is_bottom(self) -> bool {
        matches!(
            self,
            TextDatum::BottomLeft | TextDatum::BottomCentre | TextDatum::BottomRight
        )
    }
}

/// Cursor, colours and font selection.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextState {
    pub(crate) cursor_x: i32,
    pub(crate) cursor_y: i32,
    pub(crate) size: u8,
    pub(crate) fg: u16,
    pub(crate) bg: u16,
    pub(crate) bitmap_fg: u16,
    pub(crate) bitmap_bg: u16,
    pub(crate) datum: TextDatum,
    pub(crate) padding: u16,
    pub(crate) wrap_x: bool,
    pub(crate) wrap_y: bool,
    pub(crate) font: u8,
    pub(crate) free: Option<&'static FreeFont>,
    /// Free font extent above the baseline
    pub(crate) glyph_ab: u8,
    /// Free font extent below the baseline
    pub(crate) glyph_bb: u8,
}

impl TextState {
    pub(crate) const fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            size: 1,
            fg: WHITE,
            bg: BLACK,
            bitmap_fg: WHITE,
            bitmap_bg: BLACK,
            datum: TextDatum::TopLeft,
            padding: 0,
            wrap_x: true,
            wrap_y: false,
            font: CLASSIC,
            free: None,
            glyph_ab: 0,
            glyph_bb: 0,
        }
    }
}

/// Font resolved for one draw call.
#[derive(Clone, Copy)]
enum Face {
    Classic,
    Rle(&'static RleFont),
    Free(&'static FreeFont),
}

/// Byte code drawn for `c`. Anything outside Latin-1 has no glyph in any
/// font and maps to DEL.
fn code_of(c: char) -> u8 {
    u8::try_from(u32::from(c)).unwrap_or(0x7F)
}

/// Decimal text for `value` with `dp` decimals (at most 7).
///
/// Rounds half up, keeps at most eight significant digits before giving up
/// on decimals, writes `".0"` when no decimals are produced, and `"..."`
/// when the integer part does not fit 31 bits.
pub fn format_float(value: f32, dp: u8) -> String<16> {
    let dp = dp.min(7);
    let mut out = String::new();

    let mut rounding = 0.5f32;
    for _ in 0..dp {
        rounding /= 10.0;
    }

    let mut v = value;
    let mut digits: i32 = 1;
    if v < -rounding {
        let _ = out.push('-');
        digits = 0;
        v = -v;
    }
    v += rounding;

    if v >= 2_147_483_647.0 || v.is_nan() {
        out.clear();
        let _ = out.push_str("...");
        return out;
    }

    let whole = v as u32;
    let _ = write!(out, "{}", whole);
    digits += out.len() as i32;
    let _ = out.push('.');

    v -= whole as f32;
    let mut written = 0u8;
    while written < dp && digits < 9 {
        v *= 10.0;
        let d = (v as u32).min(9);
        let _ = out.push(char::from_digit(d, 10).unwrap_or('0'));
        v -= d as f32;
        written += 1;
        digits += 1;
    }
    if written == 0 {
        let _ = out.push('0');
    }
    out
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Move the print cursor.
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.text.cursor_x = x;
        self.text.cursor_y = y;
    }

    /// Print cursor position.
    pub fn cursor(&self) -> (i32, i32) {
        (self.text.cursor_x, self.text.cursor_y)
    }

    /// Pixel multiplier, clamped to `1..=7`.
    pub fn set_text_size(&mut self, size: u8) {
        self.text.size = size.clamp(1, MAX_TEXT_SIZE);
    }

    /// Current pixel multiplier.
    pub fn text_size(&self) -> u8 {
        self.text.size
    }

    /// Text colour with a transparent background.
    pub fn set_text_color(&mut self, fg: u16) {
        self.text.fg = fg;
        self.text.bg = fg;
    }

    /// Text colour with an opaque background.
    pub fn set_text_color_bg(&mut self, fg: u16, bg: u16) {
        self.text.fg = fg;
        self.text.bg = bg;
    }

    /// Colours for 1-bit images. A background equal to the foreground is
    /// replaced by its complement so the image stays visible.
    pub fn set_bitmap_color(&mut self, fg: u16, bg: u16) {
        self.text.bitmap_fg = fg;
        self.text.bitmap_bg = if fg == bg { !fg } else { bg };
    }

    /// Wrap printed text at the right edge and/or back to the top.
    pub fn set_text_wrap(&mut self, wrap_x: bool, wrap_y: bool) {
        self.text.wrap_x = wrap_x;
        self.text.wrap_y = wrap_y;
    }

    /// Anchor used by the `draw_string` family.
    pub fn set_text_datum(&mut self, datum: TextDatum) {
        self.text.datum = datum;
    }

    /// Current anchor.
    pub fn text_datum(&self) -> TextDatum {
        self.text.datum
    }

    /// Minimum width erased around opaque strings.
    pub fn set_text_padding(&mut self, width: u16) {
        self.text.padding = width;
    }

    /// Select builtin font `id` (1, 2 or 4; anything else is font 1) and drop
    /// any free font.
    pub fn set_text_font(&mut self, id: u8) {
        self.text.font = normalize_id(id);
        self.text.free = None;
    }

    /// Current builtin font id.
    pub fn text_font(&self) -> u8 {
        self.text.font
    }

    /// Draw font 1 with `font` until [`set_text_font`](Self::set_text_font).
    pub fn set_free_font(&mut self, font: &'static FreeFont) {
        if !self.config.capabilities.free_fonts {
            warn!("free fonts disabled, keeping font {}", self.text.font);
            return;
        }
        let (ab, bb) = font.ascent_descent();
        self.text.font = CLASSIC;
        self.text.free = Some(font);
        self.text.glyph_ab = ab;
        self.text.glyph_bb = bb;
    }

    fn face(&self, id: u8) -> Option<Face> {
        let caps = self.config.capabilities;
        match Builtin::from_id(id) {
            Builtin::Classic => match self.text.free {
                Some(f) => Some(Face::Free(f)),
                None => caps.classic_font.then_some(Face::Classic),
            },
            Builtin::Rle(f) => caps.rle_fonts.then_some(Face::Rle(f)),
        }
    }

    // -----------------------------------------------------------------------
    // Metrics
    // -----------------------------------------------------------------------

    /// Width of `s` in the current font.
    pub fn text_width(&self, s: &str) -> i32 {
        self.text_width_with(s, self.text.font)
    }

    /// Width of `s` in font `id`, scaled by the text size.
    pub fn text_width_with(&self, s: &str, id: u8) -> i32 {
        let size = i32::from(self.text.size);
        let sum = match self.face(id) {
            None => 0,
            Some(Face::Classic) => 6 * s.chars().count() as i32,
            Some(Face::Rle(f)) => s.chars().map(|c| i32::from(f.width(code_of(c)))).sum(),
            Some(Face::Free(f)) => {
                let mut sum = 0;
                let mut chars = s.chars().peekable();
                while let Some(c) = chars.next() {
                    let Some(g) = f.glyph(code_of(c)) else {
                        continue;
                    };
                    sum += if chars.peek().is_some() {
                        i32::from(g.x_advance())
                    } else {
                        i32::from(g.x_offset()) + i32::from(g.width())
                    };
                }
                sum
            }
        };
        sum * size
    }

    /// Line height of the current font.
    pub fn font_height(&self) -> i32 {
        self.font_height_with(self.text.font)
    }

    /// Line height of font `id`, scaled by the text size.
    pub fn font_height_with(&self, id: u8) -> i32 {
        let size = i32::from(self.text.size);
        match self.face(id) {
            None => 0,
            Some(Face::Classic) => 8 * size,
            Some(Face::Rle(f)) => i32::from(f.height) * size,
            Some(Face::Free(f)) => i32::from(f.y_advance) * size,
        }
    }

    // -----------------------------------------------------------------------
    // Glyphs
    // -----------------------------------------------------------------------

    /// Draw `c` with its top left (baseline for free fonts) at `(x, y)` in
    /// the current font. Returns the advance in pixels.
    pub fn draw_char(&mut self, c: char, x: i32, y: i32) -> Result<i32, DisplayError> {
        self.draw_char_with(c, x, y, self.text.font)
    }

    /// As [`draw_char`](Self::draw_char) in font `id`.
    pub fn draw_char_with(&mut self, c: char, x: i32, y: i32, id: u8) -> Result<i32, DisplayError> {
        let code = code_of(c);
        let size = i32::from(self.text.size);
        let (fg, bg) = (self.text.fg, self.text.bg);
        match self.face(id) {
            None => Ok(0),
            Some(Face::Classic) => {
                self.classic_glyph(code, x, y, fg, bg, size)?;
                Ok(6 * size)
            }
            Some(Face::Rle(f)) => {
                // Same zero width `text_width` counts for codes without a glyph.
                let w = i32::from(f.width(code));
                if w == 0 {
                    return Ok(0);
                }
                let h = i32::from(f.height);
                let fully = x >= 0
                    && y >= 0
                    && x + w <= i32::from(self.width)
                    && y + h <= i32::from(self.height);
                if size == 1 && fg != bg && fully {
                    self.rle_glyph_window(f, code, x, y, fg, bg)?;
                } else {
                    self.rle_glyph_fill(f, code, x, y, fg, bg, size)?;
                }
                Ok(w * size)
            }
            Some(Face::Free(f)) => match f.glyph(code) {
                Some(g) => {
                    self.free_glyph(f, g, x, y, fg, size)?;
                    Ok(i32::from(g.x_advance()) * size)
                }
                None => Ok(0),
            },
        }
    }

    /// Classic 6x8 cell. Control codes draw nothing; codes without a glyph
    /// draw a blank cell.
    fn classic_glyph(&mut self, c: u8, x: i32, y: i32, fg: u16, bg: u16, size: i32) -> Result<(), DisplayError> {
        let (w, h) = (i32::from(self.width), i32::from(self.height));
        if x >= w || y >= h || x + 6 * size - 1 < 0 || y + 8 * size - 1 < 0 || c < 32 {
            return Ok(());
        }
        let opaque = fg != bg;
        let fully = x >= 0 && y >= 0 && x + 6 * size <= w && y + 8 * size <= h;
        if size == 1 && opaque && fully {
            self.classic_glyph_window(c, x, y, fg, bg)
        } else {
            self.classic_glyph_fill(c, x, y, fg, bg, size)
        }
    }

    /// Whole cell through one window. Caller guarantees it is on screen.
    fn classic_glyph_window(&mut self, c: u8, x: i32, y: i32, fg: u16, bg: u16) -> Result<(), DisplayError> {
        let mut cell = [bg; 48];
        for (j, row) in cell.chunks_exact_mut(6).enumerate() {
            for (col, px) in row.iter_mut().take(5).enumerate() {
                if classic_column(c, col) >> j & 1 != 0 {
                    *px = fg;
                }
            }
        }
        let (x, y) = (x as u16, y as u16);
        self.transaction(|d| {
            d.set_window(x, y, x + 5, y + 7)?;
            d.bus.write_pixels(&cell)?;
            Ok(())
        })
    }

    /// Cell as one fill per vertical run of equal bits.
    fn classic_glyph_fill(&mut self, c: u8, x: i32, y: i32, fg: u16, bg: u16, size: i32) -> Result<(), DisplayError> {
        let opaque = fg != bg;
        self.transaction(|d| {
            for col in 0..6usize {
                let line = classic_column(c, col);
                let px = x + col as i32 * size;
                let mut j = 0;
                while j < 8 {
                    let set = line >> j & 1 != 0;
                    let start = j;
                    while j < 8 && (line >> j & 1 != 0) == set {
                        j += 1;
                    }
                    let color = if set { fg } else { bg };
                    if set || opaque {
                        d.fill_rect(px, y + start * size, size, (j - start) * size, color)?;
                    }
                }
            }
            Ok(())
        })
    }

    /// RLE glyph streamed through one window at size 1. Caller guarantees
    /// the cell is on screen.
    fn rle_glyph_window(
        &mut self,
        font: &RleFont,
        code: u8,
        x: i32,
        y: i32,
        fg: u16,
        bg: u16,
    ) -> Result<(), DisplayError> {
        let w = u32::from(font.width(code));
        let h = u32::from(font.height);
        let Some(runs) = font.runs(code) else {
            return Ok(());
        };
        if w == 0 {
            return Ok(());
        }
        let area = w * h;
        let (x0, y0) = (x as u16, y as u16);
        self.transaction(|d| {
            d.set_window(x0, y0, x0 + w as u16 - 1, y0 + h as u16 - 1)?;
            let mut written = 0u32;
            for run in runs {
                let n = u32::from(run.len()).min(area - written);
                let color = match run {
                    Run::Ink(_) => fg,
                    Run::Skip(_) => bg,
                };
                d.bus.write_repeated(color, n)?;
                written += n;
                if written == area {
                    break;
                }
            }
            if written < area {
                d.bus.write_repeated(bg, area - written)?;
            }
            Ok(())
        })
    }

    /// RLE glyph as background fill plus one rectangle per row segment of
    /// each ink run.
    #[allow(clippy::too_many_arguments)]
    fn rle_glyph_fill(
        &mut self,
        font: &RleFont,
        code: u8,
        x: i32,
        y: i32,
        fg: u16,
        bg: u16,
        size: i32,
    ) -> Result<(), DisplayError> {
        let w = i32::from(font.width(code));
        let h = i32::from(font.height);
        let Some(runs) = font.runs(code) else {
            return Ok(());
        };
        if w == 0 {
            return Ok(());
        }
        self.transaction(|d| {
            if fg != bg {
                d.fill_rect(x, y, w * size, h * size, bg)?;
            }
            let area = w * h;
            let mut pc = 0;
            for run in runs {
                let mut n = i32::from(run.len());
                if let Run::Skip(_) = run {
                    pc += n;
                    continue;
                }
                while n > 0 && pc < area {
                    let col = pc % w;
                    let row = pc / w;
                    let span = n.min(w - col);
                    d.fill_rect(x + col * size, y + row * size, span * size, size, fg)?;
                    pc += span;
                    n -= span;
                }
            }
            Ok(())
        })
    }

    /// Free font glyph, foreground only. Set bits are merged into
    /// horizontal spans per row.
    fn free_glyph(&mut self, font: &FreeFont, g: &Glyph, x: i32, y: i32, fg: u16, size: i32) -> Result<(), DisplayError> {
        let (w, h) = (i32::from(g.width()), i32::from(g.height()));
        let (xo, yo) = (i32::from(g.x_offset()), i32::from(g.y_offset()));
        self.transaction(|d| {
            let mut bit = 0usize;
            for yy in 0..h {
                let mut hpc = 0;
                for xx in 0..w {
                    if font.is_set(g, bit) {
                        hpc += 1;
                    } else if hpc > 0 {
                        d.free_span(x, y, xo + xx - hpc, yo + yy, hpc, size, fg)?;
                        hpc = 0;
                    }
                    bit += 1;
                }
                if hpc > 0 {
                    d.free_span(x, y, xo + w - hpc, yo + yy, hpc, size, fg)?;
                }
            }
            Ok(())
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn free_span(&mut self, x: i32, y: i32, gx: i32, gy: i32, len: i32, size: i32, fg: u16) -> Result<(), DisplayError> {
        if size == 1 {
            self.draw_fast_hline(x + gx, y + gy, len, fg)
        } else {
            self.fill_rect(x + gx * size, y + gy * size, len * size, size, fg)
        }
    }

    // -----------------------------------------------------------------------
    // Strings
    // -----------------------------------------------------------------------

    /// Draw `s` in the current font, anchored at `(x, y)` by the current
    /// datum. Returns the width drawn.
    pub fn draw_string(&mut self, s: &str, x: i32, y: i32) -> Result<i32, DisplayError> {
        self.draw_string_with(s, x, y, self.text.font)
    }

    /// As [`draw_string`](Self::draw_string) in font `id`.
    pub fn draw_string_with(&mut self, s: &str, x: i32, y: i32, id: u8) -> Result<i32, DisplayError> {
        let face = self.face(id);
        if face.is_none() {
            return Ok(0);
        }
        let size = i32::from(self.text.size);
        let datum = self.text.datum;
        let pad = i32::from(self.text.padding);
        let (fg, bg) = (self.text.fg, self.text.bg);
        let ab = i32::from(self.text.glyph_ab) * size;
        let bb = i32::from(self.text.glyph_bb) * size;

        let (mut px, mut py) = (x, y);
        let mut cwidth = self.text_width_with(s, id);
        let mut cheight = 8 * size;
        let mut baseline = 0;

        if let Some(Face::Free(_)) = face {
            cheight = ab;
            py += ab;
            baseline = ab;
            if datum.is_bottom() {
                cheight += bb;
            }
        }

        if datum != TextDatum::TopLeft || pad > 0 {
            if let Some(Face::Rle(f)) = face {
                baseline = i32::from(f.baseline) * size;
                cheight = self.font_height_with(id);
            }
            match datum.align() {
                Align::Left => {}
                Align::Centre => px -= cwidth / 2,
                Align::Right => px -= cwidth,
            }
            use TextDatum::*;
            match datum {
                MiddleLeft | MiddleCentre | MiddleRight => py -= cheight / 2,
                BottomLeft | BottomCentre | BottomRight => py -= cheight,
                LeftBaseline | CentreBaseline | RightBaseline => py -= baseline,
                TopLeft | TopCentre | TopRight => {}
            }
            let (w, h) = (i32::from(self.width), i32::from(self.height));
            if px < 0 {
                px = 0;
            }
            if px + cwidth > w {
                px = w - cwidth;
            }
            if py < 0 {
                py = 0;
            }
            if py + cheight - baseline > h {
                py = h - cheight;
            }
        }

        self.transaction(|d| {
            // Free fonts draw no background of their own; the string box is
            // filled up front, widened for a first glyph that starts left of
            // the cursor.
            let mut xo = 0;
            let mut padded = true;
            if let Some(Face::Free(f)) = face {
                padded = false;
                if fg != bg {
                    cheight = ab + bb;
                    if let Some(g) = s.chars().next().and_then(|c| f.glyph(code_of(c))) {
                        xo = (i32::from(g.x_offset()) * size).min(0);
                        cwidth -= xo;
                        d.fill_rect(px + xo, py - ab, cwidth, cheight, bg)?;
                    }
                    padded = true;
                }
            }

            let mut sum = 0;
            for c in s.chars() {
                sum += d.draw_char_with(c, px + sum, py, id)?;
            }

            if padded && pad > cwidth && fg != bg {
                let mut pad_x = px + cwidth + xo;
                if let Some(Face::Free(_)) = face {
                    px += xo;
                    py -= ab;
                }
                let slack = pad - cwidth;
                match datum.align() {
                    Align::Left => d.fill_rect(pad_x, py, slack, cheight, bg)?,
                    Align::Centre => {
                        d.fill_rect(pad_x, py, slack / 2, cheight, bg)?;
                        let left = (slack / 2).min(px);
                        d.fill_rect(px - left, py, left, cheight, bg)?;
                    }
                    Align::Right => {
                        pad_x = pad_x.min(pad);
                        d.fill_rect(px + cwidth - pad_x, py, pad_x - cwidth, cheight, bg)?;
                    }
                }
            }
            Ok(sum)
        })
    }

    /// Draw `s` centred on `x`, whatever the current datum.
    pub fn draw_centre_string(&mut self, s: &str, x: i32, y: i32) -> Result<i32, DisplayError> {
        self.with_datum(TextDatum::TopCentre, |d| d.draw_string(s, x, y))
    }

    /// Draw `s` ending at `x`, whatever the current datum.
    pub fn draw_right_string(&mut self, s: &str, x: i32, y: i32) -> Result<i32, DisplayError> {
        self.with_datum(TextDatum::TopRight, |d| d.draw_string(s, x, y))
    }

    fn with_datum<T>(&mut self, datum: TextDatum, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.text.datum;
        self.text.datum = datum;
        let result = f(self);
        self.text.datum = saved;
        result
    }

    /// Draw an integer with [`draw_string`](Self::draw_string).
    pub fn draw_number(&mut self, n: i64, x: i32, y: i32) -> Result<i32, DisplayError> {
        let mut buf: String<24> = String::new();
        let _ = write!(buf, "{}", n);
        self.draw_string(&buf, x, y)
    }

    /// Draw `value` with `dp` decimals (see [`format_float`]).
    pub fn draw_float(&mut self, value: f32, dp: u8, x: i32, y: i32) -> Result<i32, DisplayError> {
        let buf = format_float(value, dp);
        self.draw_string(&buf, x, y)
    }

    // -----------------------------------------------------------------------
    // Cursor printing
    // -----------------------------------------------------------------------

    /// Print one byte at the cursor and advance it.
    ///
    /// `\r` is ignored, `\n` moves to the start of the next line, other
    /// control codes are dropped. With wrapping on, a glyph that would cross
    /// the right edge starts a new line first, and a line at or below the
    /// bottom edge returns to the top.
    pub fn print_char(&mut self, c: u8) -> Result<(), DisplayError> {
        if c == b'\r' {
            return Ok(());
        }
        let size = i32::from(self.text.size);
        let (w, h) = (i32::from(self.width), i32::from(self.height));
        let font = self.text.font;

        match self.face(font) {
            None => Ok(()),
            Some(Face::Free(f)) => {
                let line = size * i32::from(f.y_advance);
                if c == b'\n' {
                    self.text.cursor_x = 0;
                    self.text.cursor_y += line;
                    return Ok(());
                }
                let Some(g) = f.glyph(c) else {
                    return Ok(());
                };
                if g.width() > 0 && g.height() > 0 {
                    let right = i32::from(g.x_offset()) + i32::from(g.width());
                    if self.text.wrap_x && self.text.cursor_x + size * right > w {
                        self.text.cursor_x = 0;
                        self.text.cursor_y += line;
                    }
                    if self.text.wrap_y && self.text.cursor_y >= h {
                        self.text.cursor_y = 0;
                    }
                    let (fg, cx, cy) = (self.text.fg, self.text.cursor_x, self.text.cursor_y);
                    self.free_glyph(f, g, cx, cy, fg, size)?;
                }
                self.text.cursor_x += i32::from(g.x_advance()) * size;
                Ok(())
            }
            Some(face) => {
                let code = match c {
                    b'\n' => b' ',
                    0..=31 => return Ok(()),
                    _ => c,
                };
                let (cell_w, cell_h) = match face {
                    Face::Rle(f) => {
                        if code > 127 {
                            return Ok(());
                        }
                        (i32::from(f.width(code)), i32::from(f.height))
                    }
                    _ => (6, 8),
                };
                let line = cell_h * size;
                if c == b'\n' {
                    self.text.cursor_y += line;
                    self.text.cursor_x = 0;
                    return Ok(());
                }
                if self.text.wrap_x && self.text.cursor_x + cell_w * size > w {
                    self.text.cursor_y += line;
                    self.text.cursor_x = 0;
                }
                if self.text.wrap_y && self.text.cursor_y >= h {
                    self.text.cursor_y = 0;
                }
                let (cx, cy) = (self.text.cursor_x, self.text.cursor_y);
                let advance = self.draw_char_with(char::from(code), cx, cy, font)?;
                self.text.cursor_x += advance;
                Ok(())
            }
        }
    }
}

impl<BUS, DELAY, RST> core::fmt::Write for Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            self.print_char(code_of(c)).map_err(|_| core::fmt::Error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use core::fmt::Write as _;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::MockPanel;

    use super::*;
    use crate::fonts::{FONT16, PIXEL_MONO_14};
    use crate::{Capabilities, PanelConfig};

    const PAPER: u16 = 0x1111;
    const INK: u16 = 0xF800;
    const BG: u16 = 0x001F;

    fn panel() -> Ili9341<MockPanel, NoopDelay> {
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go());
        tft.init().unwrap();
        tft.bus_mut().fill(PAPER);
        tft.bus_mut().clear_log();
        tft
    }

    fn region(tft: &Ili9341<MockPanel, NoopDelay>, x: i32, y: i32, w: i32, h: i32) -> Vec<Option<u16>> {
        (y..y + h)
            .flat_map(|py| (x..x + w).map(move |px| (px, py)))
            .map(|(px, py)| tft.bus().pixel(px, py))
            .collect()
    }

    #[test]
    fn classic_width_scales_with_size() {
        let mut tft = panel();
        assert_eq!(tft.text_width("OK"), 12);
        tft.set_text_size(2);
        assert_eq!(tft.text_width("OK"), 24);
        tft.set_text_size(0);
        assert_eq!(tft.text_size(), 1);
        tft.set_text_size(20);
        assert_eq!(tft.text_size(), MAX_TEXT_SIZE);
    }

    #[test]
    fn top_centre_datum_starts_half_a_width_left() {
        let mut tft = panel();
        tft.set_text_font(2);
        tft.set_text_color_bg(INK, BG);
        assert_eq!(tft.text_width("OKIi"), 40);

        tft.set_text_datum(TextDatum::TopCentre);
        let drawn = tft.draw_string("OKIi", 100, 50).unwrap();
        assert_eq!(drawn, 40);
        assert_eq!(tft.bus().pixel(79, 50), Some(PAPER));
        assert_ne!(tft.bus().pixel(80, 50), Some(PAPER));
        assert_ne!(tft.bus().pixel(119, 50), Some(PAPER));
        assert_eq!(tft.bus().pixel(120, 50), Some(PAPER));
    }

    #[test]
    fn glyphless_codes_advance_as_they_measure() {
        let mut tft = panel();
        tft.set_text_font(2);
        tft.set_text_color_bg(INK, BG);
        let plain = tft.text_width("OK");
        assert_eq!(tft.text_width("O\u{e9}K\u{7}"), plain);
        assert_eq!(tft.draw_char('\u{e9}', 0, 0).unwrap(), 0);

        tft.set_text_datum(TextDatum::TopRight);
        let drawn = tft.draw_string("O\u{e9}K\u{7}", 100, 50).unwrap();
        assert_eq!(drawn, plain);
        assert_eq!(tft.bus().pixel(100, 50), Some(PAPER));
        assert_ne!(tft.bus().pixel(99, 50), Some(PAPER));
        assert_ne!(tft.bus().pixel(100 - plain, 50), Some(PAPER));
        assert_eq!(tft.bus().pixel(99 - plain, 50), Some(PAPER));
    }

    #[test]
    fn rle_window_and_fill_paths_agree() {
        for c in [b'A', b'g', b'%', b'@', b' '] {
            let mut a = panel();
            let mut b = panel();
            a.rle_glyph_window(&FONT16, c, 20, 30, INK, BG).unwrap();
            b.rle_glyph_fill(&FONT16, c, 20, 30, INK, BG, 1).unwrap();
            let w = i32::from(FONT16.width(c));
            assert_eq!(region(&a, 18, 28, w + 4, 20), region(&b, 18, 28, w + 4, 20), "{}", c as char);
            assert!(a.bus().write_bursts() <= b.bus().write_bursts());
        }
    }

    #[test]
    fn classic_window_and_fill_paths_agree() {
        for c in [b'A', b'j', b'#', b'~'] {
            let mut a = panel();
            let mut b = panel();
            a.classic_glyph_window(c, 5, 5, INK, BG).unwrap();
            b.classic_glyph_fill(c, 5, 5, INK, BG, 1).unwrap();
            assert_eq!(region(&a, 3, 3, 10, 12), region(&b, 3, 3, 10, 12));
            assert_eq!(a.bus().write_bursts(), 1);
        }
    }

    #[test]
    fn transparent_text_leaves_background() {
        let mut tft = panel();
        tft.set_text_color(INK);
        tft.draw_string("|", 0, 0).unwrap();
        // '|' is column 2 only, rows 0-6.
        assert_eq!(tft.bus().pixel(2, 0), Some(INK));
        assert_eq!(tft.bus().pixel(1, 0), Some(PAPER));
        assert_eq!(tft.bus().pixel(2, 7), Some(PAPER));
    }

    #[test]
    fn size_two_scales_each_pixel() {
        let mut tft = panel();
        tft.set_text_color(INK);
        tft.set_text_size(2);
        let advance = tft.draw_char('|', 10, 10).unwrap();
        assert_eq!(advance, 12);
        assert_eq!(region(&tft, 14, 10, 2, 14), vec![Some(INK); 28]);
        assert_eq!(tft.bus().pixel(13, 10), Some(PAPER));
        assert_eq!(tft.bus().pixel(14, 24), Some(PAPER));
    }

    #[test]
    fn left_padding_erases_to_width() {
        let mut tft = panel();
        tft.set_text_color_bg(INK, BG);
        tft.set_text_padding(50);
        tft.draw_string("OK", 10, 10).unwrap();
        assert_eq!(region(&tft, 22, 10, 38, 8), vec![Some(BG); 38 * 8]);
        assert_eq!(tft.bus().pixel(60, 10), Some(PAPER));
        assert_eq!(tft.bus().pixel(9, 10), Some(PAPER));
    }

    #[test]
    fn centre_padding_is_symmetric() {
        let mut tft = panel();
        tft.set_text_color_bg(INK, BG);
        tft.set_text_padding(32);
        tft.set_text_datum(TextDatum::TopCentre);
        tft.draw_string("OK", 100, 10).unwrap();
        // Text spans 94..106, pads 10 px either side.
        assert_eq!(tft.bus().pixel(84, 10), Some(BG));
        assert_eq!(tft.bus().pixel(83, 10), Some(PAPER));
        assert_eq!(tft.bus().pixel(115, 10), Some(BG));
        assert_eq!(tft.bus().pixel(116, 10), Some(PAPER));
    }

    #[test]
    fn right_padding_grows_left() {
        let mut tft = panel();
        tft.set_text_color_bg(INK, BG);
        tft.set_text_padding(30);
        tft.draw_right_string("OK", 100, 10).unwrap();
        assert_eq!(tft.text_datum(), TextDatum::TopLeft);
        assert_eq!(tft.bus().pixel(70, 10), Some(BG));
        assert_eq!(tft.bus().pixel(69, 10), Some(PAPER));
        assert_eq!(tft.bus().pixel(100, 10), Some(PAPER));
    }

    #[test]
    fn string_is_one_transaction() {
        let mut tft = panel();
        tft.set_text_font(4);
        tft.set_text_color_bg(INK, BG);
        tft.draw_string("Hello", 0, 0).unwrap();
        assert_eq!(tft.bus().acquires(), 1);
        assert_eq!(tft.bus().unguarded_accesses(), 0);
    }

    #[test]
    fn float_formatting() {
        assert_eq!(format_float(3.14159, 2).as_str(), "3.14");
        assert_eq!(format_float(-0.5, 1).as_str(), "-0.5");
        assert_eq!(format_float(2.0, 0).as_str(), "2.0");
        assert_eq!(format_float(0.0, 2).as_str(), "0.00");
        assert_eq!(format_float(1.0e10, 2).as_str(), "...");
        assert_eq!(format_float(1.5, 20).as_str(), "1.5000000");
    }

    #[test]
    fn number_width_matches_text() {
        let mut tft = panel();
        assert_eq!(tft.draw_number(-1234, 0, 0).unwrap(), tft.text_width("-1234"));
        assert_eq!(tft.draw_float(1.25, 2, 0, 20).unwrap(), tft.text_width("1.25"));
    }

    #[test]
    fn print_handles_newline_and_wrap() {
        let mut tft = panel();
        write!(tft, "A\r\nB").unwrap();
        assert_eq!(tft.cursor(), (6, 8));

        tft.set_cursor(236, 0);
        write!(tft, "C").unwrap();
        assert_eq!(tft.cursor(), (6, 8));

        tft.set_text_wrap(false, true);
        tft.set_cursor(0, 400);
        write!(tft, "D").unwrap();
        assert_eq!(tft.cursor(), (6, 0));
    }

    #[test]
    fn rle_print_uses_font_height() {
        let mut tft = panel();
        tft.set_text_font(2);
        write!(tft, "AB\n").unwrap();
        assert_eq!(tft.cursor(), (0, 16));
    }

    #[test]
    fn free_font_top_left_sits_below_origin() {
        let mut tft = panel();
        tft.set_free_font(&PIXEL_MONO_14);
        tft.set_text_color(INK);
        let drawn = tft.draw_string("H", 10, 10).unwrap();
        assert_eq!(drawn, 12);
        let above = region(&tft, 0, 0, 40, 10);
        assert!(above.iter().all(|&p| p == Some(PAPER)));
        assert!(region(&tft, 10, 10, 12, 1).contains(&Some(INK)));
        assert_eq!(tft.font_height(), 18);
    }

    #[test]
    fn free_font_width_uses_last_glyph_extent() {
        let mut tft = panel();
        tft.set_free_font(&PIXEL_MONO_14);
        let last = PIXEL_MONO_14.glyph(b'H').unwrap();
        let expected = 12 + i32::from(last.x_offset()) + i32::from(last.width());
        assert_eq!(tft.text_width("HH"), expected);
        assert_eq!(tft.text_width("\u{1}"), 0);

        tft.set_text_font(1);
        assert_eq!(tft.text_width("HH"), 12);
    }

    #[test]
    fn disabled_font_draws_nothing() {
        let config = PanelConfig {
            capabilities: Capabilities {
                classic_font: false,
                ..Capabilities::all()
            },
            ..PanelConfig::odroid_go()
        };
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), config);
        tft.init().unwrap();
        tft.bus_mut().clear_log();
        assert_eq!(tft.text_width("OK"), 0);
        assert_eq!(tft.draw_string("OK", 0, 0).unwrap(), 0);
        assert_eq!(tft.bus().pixels_written(), 0);

        tft.set_text_font(2);
        assert!(tft.draw_string("OK", 0, 0).unwrap() > 0);
    }

    #[test]
    fn bitmap_colors_never_collide() {
        let mut tft = panel();
        tft.set_bitmap_color(INK, INK);
        assert_eq!(tft.text.bitmap_bg, !INK);
    }
}
