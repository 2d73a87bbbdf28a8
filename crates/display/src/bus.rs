//! 4-wire SPI transport for the panel.
//!
//! The ODROID-GO shares one SPI host between the TFT and the SD card, so CS
//! is driven here rather than by an `SpiDevice`: the driver keeps CS low for
//! a whole drawing burst and hands the bus back through the shared
//! [`BusLock`] in between.
//!
//! | Signal | ESP32 GPIO | Direction |
//! |--------|------------|-----------|
//! | SCLK   | 18 | Host → Display |
//! | MOSI   | 23 | Host → Display |
//! | MISO   | 19 | Display → Host |
//! | CS     | 5  | Host → Display |
//! | DC     | 21 | Host → Display |

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use platform::{BusError, BusLock, PanelBus, SpiConfig};

/// Applies an [`SpiConfig`] to the host. embedded-hal has no clock API, so
/// the board supplies one for its HAL.
pub type ClockHook<SPI> = fn(&mut SPI, &SpiConfig) -> Result<(), BusError>;

/// [`PanelBus`] over an embedded-hal [`SpiBus`] plus CS and D/C pins.
pub struct SpiPanelBus<'a, SPI, CS, DC> {
    spi: SPI,
    cs: CS,
    dc: DC,
    lock: &'a BusLock,
    clock: Option<ClockHook<SPI>>,
}

impl<'a, SPI, CS, DC> SpiPanelBus<'a, SPI, CS, DC>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
{
    /// Wrap the bus. `lock` is the lock every other user of `spi` honours.
    pub fn new(spi: SPI, cs: CS, dc: DC, lock: &'a BusLock) -> Self {
        Self {
            spi,
            cs,
            dc,
            lock,
            clock: None,
        }
    }

    /// Let [`PanelBus::configure`] retune the host through `hook`.
    ///
    /// Without a hook the bus stays at whatever clock the board set up.
    #[must_use]
    pub fn with_clock(mut self, hook: ClockHook<SPI>) -> Self {
        self.clock = Some(hook);
        self
    }

    /// Give back the SPI bus and pins.
    pub fn into_inner(self) -> (SPI, CS, DC) {
        (self.spi, self.cs, self.dc)
    }

    fn flush(&mut self) -> Result<(), BusError> {
        self.spi.flush().map_err(|_| BusError::Spi)
    }
}

impl<SPI, CS, DC> PanelBus for SpiPanelBus<'_, SPI, CS, DC>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    DC: OutputPin,
{
    fn acquire(&mut self) -> Result<(), BusError> {
        if !self.lock.try_acquire() {
            return Err(BusError::Contended);
        }
        if self.cs.set_low().is_err() {
            self.lock.release();
            return Err(BusError::Gpio);
        }
        Ok(())
    }

    fn release(&mut self) -> Result<(), BusError> {
        // CS must not rise while the last bytes are still shifting out.
        let flushed = self.flush();
        let cs = self.cs.set_high().map_err(|_| BusError::Gpio);
        self.lock.release();
        flushed.and(cs)
    }

    fn write_command(&mut self, command: u8) -> Result<(), BusError> {
        // D/C is sampled with the last bit of each byte; wait out any
        // pending data before dropping it.
        self.flush()?;
        self.dc.set_low().map_err(|_| BusError::Gpio)?;
        self.spi.write(&[command]).map_err(|_| BusError::Spi)?;
        self.flush()?;
        self.dc.set_high().map_err(|_| BusError::Gpio)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), BusError> {
        if data.is_empty() {
            return Ok(());
        }
        self.spi.write(data).map_err(|_| BusError::Spi)
    }

    fn configure(&mut self, config: SpiConfig) -> Result<(), BusError> {
        let Some(hook) = self.clock else {
            return Ok(());
        };
        self.flush()?;
        hook(&mut self.spi, &config)
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), BusError> {
        self.flush()?;
        self.spi.read(buffer).map_err(|_| BusError::Spi)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    use core::sync::atomic::{AtomicU32, Ordering};

    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    /// SPI expectations for one `write_command` call.
    fn command(c: u8) -> [SpiTransaction<u8>; 3] {
        [
            SpiTransaction::flush(),
            SpiTransaction::write_vec(vec![c]),
            SpiTransaction::flush(),
        ]
    }

    #[test]
    fn command_then_data_toggles_dc() {
        let lock = BusLock::new();
        let spi_expectations: Vec<SpiTransaction<u8>> = command(0x36)
            .into_iter()
            .chain([SpiTransaction::write_vec(vec![0x48])])
            .chain([SpiTransaction::flush()])
            .collect();
        let mut spi = SpiMock::new(&spi_expectations);
        let mut cs = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut dc = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut bus = SpiPanelBus::new(spi.clone(), cs.clone(), dc.clone(), &lock);
        bus.acquire().unwrap();
        assert!(lock.is_held());
        bus.write_command(0x36).unwrap();
        bus.write_data(&[0x48]).unwrap();
        bus.release().unwrap();
        assert!(!lock.is_held());

        spi.done();
        cs.done();
        dc.done();
    }

    #[test]
    fn contended_lock_leaves_cs_alone() {
        let lock = BusLock::new();
        assert!(lock.try_acquire(), "SD card holds the bus");

        let mut spi = SpiMock::new(&[]);
        let mut cs = PinMock::new(&[]);
        let mut dc = PinMock::new(&[]);
        let mut bus = SpiPanelBus::new(spi.clone(), cs.clone(), dc.clone(), &lock);

        assert_eq!(bus.acquire(), Err(BusError::Contended));

        spi.done();
        cs.done();
        dc.done();
    }

    #[test]
    fn pixels_go_out_big_endian() {
        let lock = BusLock::new();
        let mut spi = SpiMock::new(&[SpiTransaction::write_vec(vec![0xF8, 0x00, 0x07, 0xE0])]);
        let mut cs = PinMock::new(&[]);
        let mut dc = PinMock::new(&[]);
        let mut bus = SpiPanelBus::new(spi.clone(), cs.clone(), dc.clone(), &lock);

        bus.write_pixels(&[0xF800, 0x07E0]).unwrap();

        spi.done();
        cs.done();
        dc.done();
    }

    static LAST_CLOCK: AtomicU32 = AtomicU32::new(0);

    fn record_clock(_spi: &mut SpiMock<u8>, config: &SpiConfig) -> Result<(), BusError> {
        LAST_CLOCK.store(config.frequency, Ordering::Relaxed);
        Ok(())
    }

    #[test]
    fn configure_flushes_then_calls_hook() {
        let lock = BusLock::new();
        let mut spi = SpiMock::new(&[SpiTransaction::flush()]);
        let mut cs = PinMock::new(&[]);
        let mut dc = PinMock::new(&[]);
        let mut bus = SpiPanelBus::new(spi.clone(), cs.clone(), dc.clone(), &lock).with_clock(record_clock);

        bus.configure(SpiConfig::PANEL_READ).unwrap();
        assert_eq!(LAST_CLOCK.load(Ordering::Relaxed), SpiConfig::PANEL_READ.frequency);

        spi.done();
        cs.done();
        dc.done();
    }

    #[test]
    fn configure_without_hook_touches_nothing() {
        let lock = BusLock::new();
        let mut spi = SpiMock::new(&[]);
        let mut cs = PinMock::new(&[]);
        let mut dc = PinMock::new(&[]);
        let mut bus = SpiPanelBus::new(spi.clone(), cs.clone(), dc.clone(), &lock);

        bus.configure(SpiConfig::PANEL_READ).unwrap();

        spi.done();
        cs.done();
        dc.done();
    }

    #[test]
    fn read_waits_for_pending_writes() {
        let lock = BusLock::new();
        let mut spi = SpiMock::new(&[
            SpiTransaction::flush(),
            SpiTransaction::read_vec(vec![0x00, 0xF8, 0x00, 0x00]),
        ]);
        let mut cs = PinMock::new(&[]);
        let mut dc = PinMock::new(&[]);
        let mut bus = SpiPanelBus::new(spi.clone(), cs.clone(), dc.clone(), &lock);

        let mut buf = [0u8; 4];
        bus.read_data(&mut buf).unwrap();
        assert_eq!(buf, [0x00, 0xF8, 0x00, 0x00]);

        spi.done();
        cs.done();
        dc.done();
    }
}
