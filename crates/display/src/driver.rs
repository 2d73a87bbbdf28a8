//! ILI9341 Device Controller
//!
//! [`Ili9341`] owns the panel transport, the optional reset pin, a delay
//! source, and all driver state: logical size under the current rotation,
//! the address window cache, transaction bookkeeping, and text settings.
//! Drawing operations live in sibling modules as further `impl` blocks.
//!
//! # Power-on sequence
//!
//! ```text
//! RST high 5 ms → low 20 ms → high 150 ms     (only if a reset pin is wired)
//! SWRESET, 5 ms
//! vendor power table, MADCTL, COLMOD, gamma
//! SLPOUT, 120 ms
//! DISPON
//! ```
//!
//! The ODROID-GO ties RST to the ESP32 enable line, so its boards construct
//! the driver with [`Ili9341::new`] and rely on the software reset.
//!
//! # Rotation
//!
//! Rotations 0-3 are quarter turns; 4-7 mirror them so a bottom-up image
//! can be streamed in file order. Odd rotations exchange width and height.

// Panel coordinates are at most 320, so u16 <-> i32 conversions below
// never truncate once a value has been clipped to the panel.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects
)]

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use platform::config::{BOOT_ROTATION, PANEL_HEIGHT, PANEL_WIDTH};
use platform::PanelBus;

use crate::command::{rotation_madctl, Command, INIT_SEQUENCE};
use crate::error::DisplayError;
use crate::text::TextState;
use crate::transaction::TxState;
use crate::window::{range_bytes, AddressWindow};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Optional driver features, chosen at construction.
///
/// A disabled font kind draws nothing and measures zero width. With
/// `transactions` off the bus is acquired on first use and never released,
/// which is only correct when nothing else shares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities {
    /// Built-in 6x8 font (font 1)
    pub classic_font: bool,
    /// Built-in RLE fonts (fonts 2 and 4)
    pub rle_fonts: bool,
    /// Adafruit-GFX style fonts set with `set_free_font`
    pub free_fonts: bool,
    /// Release the bus between drawing operations
    pub transactions: bool,
}

impl Capabilities {
    /// Everything enabled.
    pub const fn all() -> Self {
        Self {
            classic_font: true,
            rle_fonts: true,
            free_fonts: true,
            transactions: true,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Panel geometry and driver options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Native width at rotation 0
    pub width: u16,
    /// Native height at rotation 0
    pub height: u16,
    /// Rotation applied by [`Ili9341::begin`]
    pub rotation: u8,
    /// Optional features
    pub capabilities: Capabilities,
}

impl PanelConfig {
    /// The ODROID-GO: 240x320 panel, landscape with the buttons below.
    pub const fn odroid_go() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            rotation: BOOT_ROTATION,
            capabilities: Capabilities::all(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::odroid_go()
    }
}

/// Placeholder for boards without a controllable reset line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// ILI9341 driver.
pub struct Ili9341<BUS, DELAY, RST = NoResetPin> {
    pub(crate) bus: BUS,
    pub(crate) delay: DELAY,
    pub(crate) rst: Option<RST>,
    pub(crate) config: PanelConfig,
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) rotation: u8,
    pub(crate) tx: TxState,
    pub(crate) window: AddressWindow,
    pub(crate) text: TextState,
    pub(crate) swap_bytes: bool,
}

impl<BUS, DELAY> Ili9341<BUS, DELAY, NoResetPin>
where
    BUS: PanelBus,
    DELAY: DelayNs,
{
    /// Driver for a panel whose RST line is not under software control.
    pub fn new(bus: BUS, delay: DELAY, config: PanelConfig) -> Self {
        Self::build(bus, delay, None, config)
    }
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Driver with a hardware reset pin, pulsed by [`init`](Self::init).
    pub fn with_reset(bus: BUS, delay: DELAY, rst: RST, config: PanelConfig) -> Self {
        Self::build(bus, delay, Some(rst), config)
    }

    fn build(bus: BUS, delay: DELAY, rst: Option<RST>, config: PanelConfig) -> Self {
        Self {
            bus,
            delay,
            rst,
            config,
            width: config.width,
            height: config.height,
            rotation: 0,
            tx: TxState::new(),
            window: AddressWindow::new(),
            text: TextState::new(),
            swap_bytes: false,
        }
    }

    /// Initialise the controller and apply the configured rotation.
    pub fn begin(&mut self) -> Result<(), DisplayError> {
        self.init()?;
        self.set_rotation(self.config.rotation)
    }

    /// Reset and configure the controller. Leaves the panel at rotation 0.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        info!("ILI9341 init");

        if let Some(rst) = self.rst.as_mut() {
            rst.set_high().map_err(|_| DisplayError::Gpio)?;
            self.delay.delay_ms(5);
            rst.set_low().map_err(|_| DisplayError::Gpio)?;
            self.delay.delay_ms(20);
            rst.set_high().map_err(|_| DisplayError::Gpio)?;
            self.delay.delay_ms(150);
        }

        self.transaction(|d| {
            d.command(Command::SoftwareReset, &[])?;
            d.delay.delay_ms(5);
            for (cmd, data) in INIT_SEQUENCE {
                d.bus.write_command(*cmd)?;
                d.bus.write_data(data)?;
            }
            d.command(Command::SleepOut, &[])
        })?;

        // The controller ignores commands for 120 ms after SLPOUT.
        self.delay.delay_ms(120);

        self.transaction(|d| d.command(Command::DisplayOn, &[]))?;

        self.rotation = 0;
        self.width = self.config.width;
        self.height = self.config.height;
        self.window.invalidate();

        info!("ILI9341 ready ({}x{})", self.width, self.height);
        Ok(())
    }

    /// Select one of the eight orientations (`m % 8`).
    pub fn set_rotation(&mut self, m: u8) -> Result<(), DisplayError> {
        let rotation = m % 8;
        let madctl = rotation_madctl(rotation);

        self.transaction(|d| d.command(Command::MemoryAccessControl, &[madctl]))?;

        self.rotation = rotation;
        if rotation % 2 == 1 {
            self.width = self.config.height;
            self.height = self.config.width;
        } else {
            self.width = self.config.width;
            self.height = self.config.height;
        }
        self.window.invalidate();
        self.delay.delay_us(10);

        debug!("rotation {} -> {}x{}", rotation, self.width, self.height);
        Ok(())
    }

    /// Current rotation (0-7).
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Logical width under the current rotation.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height under the current rotation.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Options this driver was built with.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Invert every pixel on the panel (INVON/INVOFF).
    pub fn invert_display(&mut self, invert: bool) -> Result<(), DisplayError> {
        let cmd = if invert {
            Command::InversionOn
        } else {
            Command::InversionOff
        };
        self.transaction(|d| d.command(cmd, &[]))
    }

    /// Enter sleep mode. GRAM is preserved.
    pub fn sleep(&mut self) -> Result<(), DisplayError> {
        self.transaction(|d| d.command(Command::SleepIn, &[]))?;
        self.delay.delay_ms(5);
        Ok(())
    }

    /// Leave sleep mode.
    pub fn wake(&mut self) -> Result<(), DisplayError> {
        self.transaction(|d| d.command(Command::SleepOut, &[]))?;
        self.delay.delay_ms(120);
        Ok(())
    }

    /// Forget the cached address window.
    ///
    /// Needed only if something other than this driver talked to the
    /// controller.
    pub fn invalidate_window(&mut self) {
        self.window.invalidate();
    }

    /// Program a write window and open it for [`push_color`](Self::push_color)
    /// and friends. Out-of-range or inverted corners are ignored.
    pub fn set_addr_window(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
        if x0 < 0 || y0 < 0 || x0 > x1 || y0 > y1 {
            return Ok(());
        }
        if x1 >= i32::from(self.width) || y1 >= i32::from(self.height) {
            return Ok(());
        }
        self.transaction(|d| d.set_window(x0 as u16, y0 as u16, x1 as u16, y1 as u16))
    }

    /// Borrow the transport.
    pub fn bus(&self) -> &BUS {
        &self.bus
    }

    /// Mutably borrow the transport.
    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// Tear the driver down, returning the transport.
    pub fn release(self) -> BUS {
        self.bus
    }

    // -----------------------------------------------------------------------
    // Low-level helpers (caller holds the bus)
    // -----------------------------------------------------------------------

    /// Send a command and its parameters.
    pub(crate) fn command(&mut self, cmd: Command, data: &[u8]) -> Result<(), DisplayError> {
        self.bus.write_command(cmd as u8)?;
        self.bus.write_data(data)?;
        Ok(())
    }

    /// Program the window `(x0, y0)..=(x1, y1)` and start a RAMWR burst.
    ///
    /// CASET and PASET are skipped when the cached range matches; RAMWR is
    /// always sent since it resets the controller's write pointer.
    pub(crate) fn set_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        self.address(x0, y0, x1, y1)?;
        self.command(Command::MemoryWrite, &[])
    }

    /// As [`set_window`](Self::set_window) but starts a RAMRD.
    pub(crate) fn set_read_window(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        self.address(x0, y0, x1, y1)?;
        self.command(Command::MemoryRead, &[])
    }

    fn address(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), DisplayError> {
        if self.window.update_columns(x0, x1) {
            self.command(Command::ColumnAddressSet, &range_bytes(x0, x1))?;
        }
        if self.window.update_pages(y0, y1) {
            self.command(Command::PageAddressSet, &range_bytes(y0, y1))?;
        }
        Ok(())
    }

    /// Clip a rectangle to the surface. `None` if nothing remains.
    pub(crate) fn clip(&self, x: i32, y: i32, w: i32, h: i32) -> Option<Clipped> {
        if w < 1 || h < 1 {
            return None;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(i32::from(self.width));
        let y1 = y.saturating_add(h).min(i32::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Clipped {
            x: x0 as u16,
            y: y0 as u16,
            w: (x1 - x0) as u16,
            h: (y1 - y0) as u16,
        })
    }

    /// `true` if `(x, y)` lies on the surface.
    pub(crate) fn on_screen(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }
}

/// A rectangle already clipped to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Clipped {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Clipped {
    pub(crate) fn x1(self) -> u16 {
        self.x + self.w - 1
    }

    pub(crate) fn y1(self) -> u16 {
        self.y + self.h - 1
    }

    pub(crate) fn area(self) -> u32 {
        u32::from(self.w) * u32::from(self.h)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use platform::mocks::MockPanel;

    use crate::command::{MADCTL_BGR, MADCTL_MV, MADCTL_MX, MADCTL_MY};

    fn panel() -> Ili9341<MockPanel, NoopDelay> {
        Ili9341::new(MockPanel::new(), NoopDelay::new(), PanelConfig::odroid_go())
    }

    #[test]
    fn init_sends_reset_table_then_display_on() {
        let mut tft = panel();
        tft.init().unwrap();

        let cmds = tft.bus().commands();
        assert_eq!(cmds.first(), Some(&(Command::SoftwareReset as u8)));
        assert_eq!(cmds.last(), Some(&(Command::DisplayOn as u8)));
        let slpout = cmds.iter().position(|&c| c == Command::SleepOut as u8).unwrap();
        assert_eq!(slpout, cmds.len() - 2, "DISPON follows SLPOUT");
        assert_eq!(cmds.len(), INIT_SEQUENCE.len() + 3);
        assert_eq!(tft.bus().unguarded_accesses(), 0);
        assert!(!tft.bus().is_held());
    }

    #[test]
    fn reset_pin_is_pulsed_when_present() {
        let mut rst = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut tft = Ili9341::with_reset(
            MockPanel::new(),
            NoopDelay::new(),
            rst.clone(),
            PanelConfig::odroid_go(),
        );
        tft.init().unwrap();
        rst.done();
    }

    #[test]
    fn begin_applies_boot_rotation() {
        let mut tft = panel();
        tft.begin().unwrap();
        assert_eq!(tft.rotation(), BOOT_ROTATION);
        assert_eq!((tft.width(), tft.height()), (320, 240));
        assert_eq!(tft.bus().madctl(), MADCTL_MX | MADCTL_MY | MADCTL_MV | MADCTL_BGR);
    }

    #[test]
    fn rotation_wraps_and_swaps_dimensions() {
        let mut tft = panel();
        tft.init().unwrap();

        tft.set_rotation(1).unwrap();
        assert_eq!((tft.width(), tft.height()), (320, 240));
        tft.set_rotation(2).unwrap();
        assert_eq!((tft.width(), tft.height()), (240, 320));
        tft.set_rotation(13).unwrap();
        assert_eq!(tft.rotation(), 5);
        assert_eq!((tft.width(), tft.height()), (320, 240));
        assert_eq!(tft.bus().logical_size(), (320, 240));
    }

    #[test]
    fn rotation_invalidates_window_cache() {
        let mut tft = panel();
        tft.init().unwrap();
        tft.draw_pixel(3, 4, 0xFFFF).unwrap();
        tft.set_rotation(0).unwrap();
        tft.bus_mut().clear_log();

        tft.draw_pixel(3, 4, 0xFFFF).unwrap();
        assert_eq!(tft.bus().count(Command::ColumnAddressSet as u8), 1);
        assert_eq!(tft.bus().count(Command::PageAddressSet as u8), 1);
    }

    #[test]
    fn identical_window_is_programmed_once() {
        let mut tft = panel();
        tft.init().unwrap();
        tft.bus_mut().clear_log();

        tft.set_addr_window(10, 10, 20, 20).unwrap();
        tft.set_addr_window(10, 10, 20, 20).unwrap();
        assert_eq!(tft.bus().count(Command::ColumnAddressSet as u8), 1);
        assert_eq!(tft.bus().count(Command::PageAddressSet as u8), 1);
        assert_eq!(tft.bus().write_bursts(), 2);
    }

    #[test]
    fn clip_trims_partial_overlap() {
        let tft = panel();
        let c = tft.clip(-5, 310, 20, 40).unwrap();
        assert_eq!(c, Clipped { x: 0, y: 310, w: 15, h: 10 });
        assert!(tft.clip(240, 0, 5, 5).is_none());
        assert!(tft.clip(0, 0, 0, 5).is_none());
        assert!(tft.clip(-10, -10, 10, 10).is_none());
    }

    #[test]
    fn invert_and_sleep_send_their_commands() {
        let mut tft = panel();
        tft.invert_display(true).unwrap();
        tft.invert_display(false).unwrap();
        tft.sleep().unwrap();
        tft.wake().unwrap();
        assert_eq!(
            tft.bus().commands(),
            vec![
                Command::InversionOn as u8,
                Command::InversionOff as u8,
                Command::SleepIn as u8,
                Command::SleepOut as u8,
            ]
        );
    }
}
