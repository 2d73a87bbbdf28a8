//! Bus Transaction Manager
//!
//! The TFT shares its SPI host with the SD card. Every drawing operation
//! runs inside a transaction: the bus is acquired before the first byte and
//! released after the last, so the SD card can be serviced between calls.
//!
//! Transactions nest. A shape built from other shapes (a rounded rectangle
//! is four corner fills and three rectangles) opens one outer transaction;
//! the inner primitives see the bus already held and neither acquire nor
//! release it.
//!
//! ```text
//! fill_round_rect ── begin (acquire) ─────────────────────────── end (release)
//!                      fill_rect ─ begin/end (depth 2→1) ─┘
//!                      fill_circle_helper ─ begin/end ─┘
//! ```
//!
//! With [`Capabilities::transactions`](crate::Capabilities) off the bus is
//! acquired once and kept.

#![allow(clippy::arithmetic_side_effects)] // depth is bounded by call nesting

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::PanelBus;

use crate::driver::Ili9341;
use crate::error::DisplayError;

/// Transaction bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TxState {
    /// Bus currently acquired from the transport.
    held: bool,
    /// Open begin calls not yet matched by an end.
    depth: u8,
}

impl TxState {
    pub(crate) const fn new() -> Self {
        Self {
            held: false,
            depth: 0,
        }
    }
}

impl<BUS, DELAY, RST> Ili9341<BUS, DELAY, RST>
where
    BUS: PanelBus,
    DELAY: DelayNs,
    RST: OutputPin,
{
    /// Take the bus unless an enclosing transaction already holds it.
    ///
    /// Every successful call must be paired with
    /// [`end_transaction`](Self::end_transaction). Returns
    /// [`DisplayError::Busy`] if another peripheral owns the bus.
    pub fn begin_transaction(&mut self) -> Result<(), DisplayError> {
        if !self.tx.held {
            self.bus.acquire()?;
            self.tx.held = true;
        }
        self.tx.depth = self.tx.depth.saturating_add(1);
        Ok(())
    }

    /// Close the innermost transaction; the outermost one releases the bus.
    pub fn end_transaction(&mut self) -> Result<(), DisplayError> {
        self.tx.depth = self.tx.depth.saturating_sub(1);
        if self.tx.depth == 0 && self.tx.held && self.config.capabilities.transactions {
            self.tx.held = false;
            self.bus.release()?;
        }
        Ok(())
    }

    /// `true` while the driver owns the bus.
    pub fn in_transaction(&self) -> bool {
        self.tx.held
    }

    /// Run `f` with the bus held, releasing it afterwards even if `f` fails.
    pub(crate) fn transaction<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DisplayError>,
    ) -> Result<T, DisplayError> {
        self.begin_transaction()?;
        let result = f(self);
        let ended = self.end_transaction();
        let value = result?;
        ended?;
        Ok(value)
    }

    /// Run several drawing calls under one bus acquisition.
    ///
    /// ```no_run
    /// # use display::{Ili9341, DisplayError};
    /// # fn demo<B: platform::PanelBus, D: embedded_hal::delay::DelayNs>(
    /// #     tft: &mut Ili9341<B, D>,
    /// # ) -> Result<(), DisplayError> {
    /// tft.composite(|d| {
    ///     d.fill_rect(0, 0, 10, 10, 0xF800)?;
    ///     d.fill_rect(10, 0, 10, 10, 0x07E0)
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn composite<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DisplayError>,
    ) -> Result<T, DisplayError> {
        self.transaction(f)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use platform::mocks::MockPanel;

    use crate::{Capabilities, DisplayError, Ili9341, PanelConfig};

    fn panel(config: PanelConfig) -> Ili9341<MockPanel, NoopDelay> {
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), config);
        tft.init().unwrap();
        tft.bus_mut().clear_log();
        tft
    }

    #[test]
    fn each_primitive_is_one_transaction() {
        let mut tft = panel(PanelConfig::odroid_go());
        tft.fill_rect(0, 0, 4, 4, 0x1234).unwrap();
        tft.draw_pixel(9, 9, 0x1234).unwrap();
        assert_eq!(tft.bus().acquires(), 2);
        assert_eq!(tft.bus().releases(), 2);
        assert_eq!(tft.bus().unguarded_accesses(), 0);
    }

    #[test]
    fn composite_holds_the_bus_once() {
        let mut tft = panel(PanelConfig::odroid_go());
        tft.composite(|d| {
            d.fill_rect(0, 0, 4, 4, 0x1234)?;
            d.composite(|d| d.draw_pixel(9, 9, 0x1234))?;
            assert!(d.in_transaction());
            d.fill_round_rect(20, 20, 30, 20, 5, 0xFFFF)
        })
        .unwrap();
        assert_eq!(tft.bus().acquires(), 1);
        assert_eq!(tft.bus().releases(), 1);
        assert!(!tft.bus().is_held());
    }

    #[test]
    fn explicit_begin_end_brackets_primitives() {
        let mut tft = panel(PanelConfig::odroid_go());
        tft.begin_transaction().unwrap();
        tft.fill_rect(0, 0, 4, 4, 0x1234).unwrap();
        tft.fill_rect(8, 0, 4, 4, 0x1234).unwrap();
        assert!(tft.bus().is_held());
        tft.end_transaction().unwrap();
        assert!(!tft.bus().is_held());
        assert_eq!(tft.bus().acquires(), 1);

        // Unmatched end is harmless.
        tft.end_transaction().unwrap();
        assert_eq!(tft.bus().releases(), 1);
    }

    #[test]
    fn contended_bus_draws_nothing() {
        let mut tft = panel(PanelConfig::odroid_go());
        tft.bus_mut().set_contended(true);
        assert_eq!(tft.fill_rect(0, 0, 4, 4, 0xFFFF), Err(DisplayError::Busy));
        assert_eq!(tft.bus().pixels_written(), 0);
        assert!(!tft.in_transaction());

        tft.bus_mut().set_contended(false);
        tft.fill_rect(0, 0, 4, 4, 0xFFFF).unwrap();
        assert_eq!(tft.bus().pixels_written(), 16);
    }

    #[test]
    fn without_transactions_the_bus_is_kept() {
        let config = PanelConfig {
            capabilities: Capabilities {
                transactions: false,
                ..Capabilities::all()
            },
            ..PanelConfig::odroid_go()
        };
        let mut tft = Ili9341::new(MockPanel::new(), NoopDelay::new(), config);
        tft.init().unwrap();
        tft.fill_rect(0, 0, 4, 4, 0x1234).unwrap();
        tft.fill_screen(0).unwrap();
        assert_eq!(tft.bus().acquires(), 1);
        assert_eq!(tft.bus().releases(), 0);
        assert!(tft.bus().is_held());
    }
}
