//! Mock implementations for testing
//!
//! [`MockPanel`] is a [`PanelBus`] that behaves like an ILI9341 on the other
//! end of the wire: it decodes CASET/PASET/RAMWR/RAMRD/MADCTL into a
//! framebuffer and keeps a log of every command so tests can assert both on
//! the pixels that landed and on how many bus operations it took.

#![cfg(any(test, feature = "std"))]
// Test double: panel coordinates are u16 and bounds-checked by `index`.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation
)]

use std::vec::Vec;

use crate::config::{PANEL_HEIGHT, PANEL_WIDTH, SPI_READ_HZ, SPI_WRITE_HZ};
use crate::{BusError, PanelBus, SpiConfig};

const CASET: u8 = 0x2A;
const PASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const RAMRD: u8 = 0x2E;
const MADCTL: u8 = 0x36;

const MADCTL_MY: u8 = 0x80;
const MADCTL_MX: u8 = 0x40;
const MADCTL_MV: u8 = 0x20;

/// One command as seen by the panel, with its parameter bytes.
///
/// RAMWR parameters are not stored; `pixels` counts them instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    /// Command byte.
    pub command: u8,
    /// Parameter bytes (empty for RAMWR/RAMRD).
    pub params: Vec<u8>,
    /// Pixels streamed after a RAMWR.
    pub pixels: usize,
}

/// Emulated ILI9341 panel.
pub struct MockPanel {
    width: u16,
    height: u16,
    gram: Vec<u16>,
    madctl: u8,
    columns: (u16, u16),
    pages: (u16, u16),
    cursor: (u16, u16),
    current: Option<CommandRecord>,
    pending_byte: Option<u8>,
    read_dummy: bool,
    read_phase: u8,
    read_pixel: u16,
    log: Vec<CommandRecord>,
    held: bool,
    contended: bool,
    acquires: usize,
    releases: usize,
    unguarded: usize,
    pixels_written: usize,
    offscreen: usize,
    clock_hz: u32,
    fast_reads: usize,
}

impl MockPanel {
    /// 240x320 panel, GRAM cleared to black.
    pub fn new() -> Self {
        Self::with_size(PANEL_WIDTH, PANEL_HEIGHT)
    }

    /// Panel with a custom native size.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            gram: std::vec![0; usize::from(width) * usize::from(height)],
            madctl: 0,
            columns: (0, width.saturating_sub(1)),
            pages: (0, height.saturating_sub(1)),
            cursor: (0, 0),
            current: None,
            pending_byte: None,
            read_dummy: false,
            read_phase: 0,
            read_pixel: 0,
            log: Vec::new(),
            held: false,
            contended: false,
            acquires: 0,
            releases: 0,
            unguarded: 0,
            pixels_written: 0,
            offscreen: 0,
            clock_hz: SPI_WRITE_HZ,
            fast_reads: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Logical size under the current MADCTL.
    pub fn logical_size(&self) -> (u16, u16) {
        if self.madctl & MADCTL_MV != 0 {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Pixel at logical `(x, y)` under the current MADCTL.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u16> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        self.index(x, y).and_then(|i| self.gram.get(i).copied())
    }

    /// Overwrite a logical pixel without going through the bus.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u16) {
        if let Some(px) = self.index(x, y).and_then(|i| self.gram.get_mut(i)) {
            *px = color;
        }
    }

    /// Fill the whole GRAM without going through the bus.
    pub fn fill(&mut self, color: u16) {
        self.gram.fill(color);
    }

    /// Number of logical pixels equal to `color`.
    pub fn count_color(&self, color: u16) -> usize {
        self.gram.iter().filter(|&&c| c == color).count()
    }

    /// Every command received since construction or [`clear_log`](Self::clear_log).
    pub fn log(&self) -> Vec<CommandRecord> {
        let mut log = self.log.clone();
        log.extend(self.current.clone());
        log
    }

    /// Just the command bytes of [`log`](Self::log).
    pub fn commands(&self) -> Vec<u8> {
        self.log().iter().map(|r| r.command).collect()
    }

    /// How many times `command` was sent.
    pub fn count(&self, command: u8) -> usize {
        self.log().iter().filter(|r| r.command == command).count()
    }

    /// Number of RAMWR bursts.
    pub fn write_bursts(&self) -> usize {
        self.count(RAMWR)
    }

    /// Pixels streamed through RAMWR, including those outside the panel.
    pub fn pixels_written(&self) -> usize {
        self.pixels_written
    }

    /// Pixels that addressed memory outside the panel.
    pub fn offscreen_pixels(&self) -> usize {
        self.offscreen
    }

    /// Bus writes or reads made without holding the bus.
    pub fn unguarded_accesses(&self) -> usize {
        self.unguarded
    }

    /// Successful acquire calls.
    pub fn acquires(&self) -> usize {
        self.acquires
    }

    /// Release calls.
    pub fn releases(&self) -> usize {
        self.releases
    }

    /// Whether the driver currently holds the bus.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Last MADCTL value written.
    pub fn madctl(&self) -> u8 {
        self.madctl
    }

    /// Simulate another peripheral holding the bus.
    pub fn set_contended(&mut self, contended: bool) {
        self.contended = contended;
    }

    /// Forget the command log and counters, keep GRAM and register state.
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.current = None;
        self.pixels_written = 0;
        self.offscreen = 0;
        self.unguarded = 0;
        self.acquires = 0;
        self.releases = 0;
        self.fast_reads = 0;
    }

    /// SPI clock set by the last [`PanelBus::configure`].
    pub fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    /// `read_data` calls made while the clock was above [`SPI_READ_HZ`].
    pub fn fast_reads(&self) -> usize {
        self.fast_reads
    }

    // -----------------------------------------------------------------------
    // Controller emulation
    // -----------------------------------------------------------------------

    /// Map a logical address to a GRAM index.
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        let (lw, lh) = self.logical_size();
        if x >= lw || y >= lh {
            return None;
        }
        let (mut col, mut row) = if self.madctl & MADCTL_MV != 0 {
            (y, x)
        } else {
            (x, y)
        };
        if self.madctl & MADCTL_MX != 0 {
            col = self.width - 1 - col;
        }
        if self.madctl & MADCTL_MY != 0 {
            row = self.height - 1 - row;
        }
        Some(usize::from(row) * usize::from(self.width) + usize::from(col))
    }

    fn advance(&mut self) {
        let (x, y) = self.cursor;
        if x >= self.columns.1 {
            let next = if y >= self.pages.1 { self.pages.0 } else { y + 1 };
            self.cursor = (self.columns.0, next);
        } else {
            self.cursor = (x + 1, y);
        }
    }

    fn put_pixel(&mut self, color: u16) {
        self.pixels_written += 1;
        if let Some(record) = self.current.as_mut() {
            record.pixels += 1;
        }
        let (x, y) = self.cursor;
        match self.index(x, y).and_then(|i| self.gram.get_mut(i)) {
            Some(px) => *px = color,
            None => self.offscreen += 1,
        }
        self.advance();
    }

    fn apply_params(&mut self) {
        let Some(record) = self.current.as_ref() else {
            return;
        };
        let p = &record.params;
        match (record.command, p.len()) {
            (CASET, 4) => {
                self.columns = (
                    u16::from_be_bytes([p[0], p[1]]),
                    u16::from_be_bytes([p[2], p[3]]),
                );
            }
            (PASET, 4) => {
                self.pages = (
                    u16::from_be_bytes([p[0], p[1]]),
                    u16::from_be_bytes([p[2], p[3]]),
                );
            }
            (MADCTL, 1) => self.madctl = p[0],
            _ => {}
        }
    }

    fn guard(&mut self) {
        if !self.held {
            self.unguarded += 1;
        }
    }

    fn read_byte(&mut self) -> u8 {
        if self.read_dummy {
            self.read_dummy = false;
            return 0;
        }
        if self.read_phase == 0 {
            let (x, y) = self.cursor;
            self.read_pixel = self
                .index(x, y)
                .and_then(|i| self.gram.get(i).copied())
                .unwrap_or(0);
        }
        let c = self.read_pixel;
        let byte = match self.read_phase {
            0 => ((c >> 8) & 0xF8) as u8,
            1 => ((c >> 3) & 0xFC) as u8,
            _ => ((c << 3) & 0xF8) as u8,
        };
        self.read_phase = (self.read_phase + 1) % 3;
        if self.read_phase == 0 {
            self.advance();
        }
        byte
    }
}

impl Default for MockPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelBus for MockPanel {
    fn acquire(&mut self) -> Result<(), BusError> {
        if self.contended || self.held {
            return Err(BusError::Contended);
        }
        self.held = true;
        self.acquires += 1;
        Ok(())
    }

    fn release(&mut self) -> Result<(), BusError> {
        self.guard();
        self.held = false;
        self.releases += 1;
        Ok(())
    }

    fn write_command(&mut self, command: u8) -> Result<(), BusError> {
        self.guard();
        if let Some(done) = self.current.take() {
            self.log.push(done);
        }
        self.current = Some(CommandRecord {
            command,
            params: Vec::new(),
            pixels: 0,
        });
        self.pending_byte = None;
        match command {
            RAMWR => self.cursor = (self.columns.0, self.pages.0),
            RAMRD => {
                self.cursor = (self.columns.0, self.pages.0);
                self.read_dummy = true;
                self.read_phase = 0;
            }
            _ => {}
        }
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), BusError> {
        self.guard();
        let streaming = matches!(self.current, Some(CommandRecord { command: RAMWR, .. }));
        if streaming {
            for &byte in data {
                match self.pending_byte.take() {
                    Some(hi) => self.put_pixel(u16::from_be_bytes([hi, byte])),
                    None => self.pending_byte = Some(byte),
                }
            }
        } else if let Some(record) = self.current.as_mut() {
            record.params.extend_from_slice(data);
            self.apply_params();
        }
        Ok(())
    }

    fn configure(&mut self, config: SpiConfig) -> Result<(), BusError> {
        self.clock_hz = config.frequency;
        Ok(())
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), BusError> {
        self.guard();
        if self.clock_hz > SPI_READ_HZ {
            self.fast_reads += 1;
        }
        let reading = matches!(self.current, Some(CommandRecord { command: RAMRD, .. }));
        for byte in buffer.iter_mut() {
            *byte = if reading { self.read_byte() } else { 0 };
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn window(panel: &mut MockPanel, x0: u16, y0: u16, x1: u16, y1: u16) {
        panel.write_command(CASET).unwrap();
        panel.write_data(&[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8]).unwrap();
        panel.write_command(PASET).unwrap();
        panel.write_data(&[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8]).unwrap();
    }

    #[test]
    fn ramwr_fills_window_row_major() {
        let mut panel = MockPanel::new();
        panel.acquire().unwrap();
        window(&mut panel, 10, 20, 11, 21);
        panel.write_command(RAMWR).unwrap();
        panel.write_pixels(&[1, 2, 3, 4]).unwrap();
        panel.release().unwrap();

        assert_eq!(panel.pixel(10, 20), Some(1));
        assert_eq!(panel.pixel(11, 20), Some(2));
        assert_eq!(panel.pixel(10, 21), Some(3));
        assert_eq!(panel.pixel(11, 21), Some(4));
        assert_eq!(panel.pixels_written(), 4);
        assert_eq!(panel.write_bursts(), 1);
        assert_eq!(panel.unguarded_accesses(), 0);
    }

    #[test]
    fn pixel_split_across_writes_is_reassembled() {
        let mut panel = MockPanel::new();
        panel.acquire().unwrap();
        window(&mut panel, 0, 0, 0, 0);
        panel.write_command(RAMWR).unwrap();
        panel.write_data(&[0xF8]).unwrap();
        panel.write_data(&[0x1F]).unwrap();
        assert_eq!(panel.pixel(0, 0), Some(0xF81F));
    }

    #[test]
    fn mv_swaps_logical_size() {
        let mut panel = MockPanel::new();
        panel.acquire().unwrap();
        panel.write_command(MADCTL).unwrap();
        panel.write_data(&[MADCTL_MV | MADCTL_MX | MADCTL_MY]).unwrap();
        assert_eq!(panel.logical_size(), (320, 240));
        window(&mut panel, 319, 239, 319, 239);
        panel.write_command(RAMWR).unwrap();
        panel.write_pixels(&[0xABCD]).unwrap();
        assert_eq!(panel.pixel(319, 239), Some(0xABCD));
        assert_eq!(panel.offscreen_pixels(), 0);
    }

    #[test]
    fn ramrd_returns_dummy_then_rgb() {
        let mut panel = MockPanel::new();
        panel.set_pixel(5, 5, 0xF800);
        panel.acquire().unwrap();
        window(&mut panel, 5, 5, 5, 5);
        panel.write_command(RAMRD).unwrap();
        let mut buf = [0xAAu8; 4];
        panel.read_data(&mut buf).unwrap();
        assert_eq!(buf, [0x00, 0xF8, 0x00, 0x00]);
    }

    #[test]
    fn contention_and_unguarded_access_are_tracked() {
        let mut panel = MockPanel::new();
        panel.set_contended(true);
        assert_eq!(panel.acquire(), Err(BusError::Contended));
        panel.write_command(0x29).unwrap();
        assert_eq!(panel.unguarded_accesses(), 1);
        panel.set_contended(false);
        panel.acquire().unwrap();
        assert_eq!(panel.acquire(), Err(BusError::Contended), "not re-entrant");
    }

    #[test]
    fn log_keeps_params() {
        let mut panel = MockPanel::new();
        panel.acquire().unwrap();
        panel.write_command(0xC0).unwrap();
        panel.write_data(&[0x23]).unwrap();
        panel.write_command(0x29).unwrap();
        let log = panel.log();
        assert_eq!(log[0].params, vec![0x23]);
        assert_eq!(panel.commands(), vec![0xC0, 0x29]);
    }
}
