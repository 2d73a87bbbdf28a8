//! Backlight PWM.
//!
//! The ODROID-GO drives the backlight LED directly from an LEDC channel, so
//! duty tracks brightness. Boards that switch the LED through a PNP stage
//! need the level inverted.

use embedded_hal::pwm::SetDutyCycle;
use platform::config::{BACKLIGHT_DEFAULT, BACKLIGHT_INVERTED};

use crate::error::DisplayError;

/// Backlight on a PWM channel, levels 0 (off) to 255 (full).
pub struct Backlight<P> {
    pwm: P,
    level: u8,
    inverted: bool,
}

impl<P: SetDutyCycle> Backlight<P> {
    /// Backlight with the board's polarity, set to the default level.
    pub fn new(pwm: P) -> Result<Self, DisplayError> {
        Self::with_polarity(pwm, BACKLIGHT_INVERTED)
    }

    /// Backlight with explicit polarity, set to the default level.
    pub fn with_polarity(pwm: P, inverted: bool) -> Result<Self, DisplayError> {
        let mut backlight = Self {
            pwm,
            level: 0,
            inverted,
        };
        backlight.set_brightness(BACKLIGHT_DEFAULT)?;
        Ok(backlight)
    }

    /// Set the brightness level.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        let duty = if self.inverted { u8::MAX - level } else { level };
        self.pwm
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .map_err(|_| DisplayError::Gpio)?;
        self.level = level;
        debug!("backlight {}", level);
        Ok(())
    }

    /// Last level set.
    pub fn brightness(&self) -> u8 {
        self.level
    }

    /// Give the PWM channel back.
    pub fn release(self) -> P {
        self.pwm
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use core::convert::Infallible;

    use embedded_hal::pwm::ErrorType;

    use super::*;

    /// 8-bit LEDC channel stand-in.
    #[derive(Default)]
    struct Ledc {
        duty: u16,
    }

    impl ErrorType for Ledc {
        type Error = Infallible;
    }

    impl SetDutyCycle for Ledc {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn starts_at_default_level() {
        let backlight = Backlight::with_polarity(Ledc::default(), false).unwrap();
        assert_eq!(backlight.brightness(), BACKLIGHT_DEFAULT);
        assert_eq!(backlight.release().duty, u16::from(BACKLIGHT_DEFAULT));
    }

    #[test]
    fn duty_follows_level() {
        let mut backlight = Backlight::with_polarity(Ledc::default(), false).unwrap();
        backlight.set_brightness(255).unwrap();
        assert_eq!(backlight.pwm.duty, 255);
        backlight.set_brightness(0).unwrap();
        assert_eq!(backlight.pwm.duty, 0);
    }

    #[test]
    fn inverted_polarity() {
        let mut backlight = Backlight::with_polarity(Ledc::default(), true).unwrap();
        backlight.set_brightness(200).unwrap();
        assert_eq!(backlight.pwm.duty, 55);
        assert_eq!(backlight.brightness(), 200);
    }
}
