//! Leaf components: one pin each, configured once at construction.
//!
//! These are thin wrappers over the [`Platform`] primitives. Reads and
//! writes are infallible; only construction validates the pin.

use crate::board::PinLimits;
use crate::error::Error;
use crate::hal::{PinId, PinMode, Platform};

/// Time the analog converter needs after a conversion, in milliseconds.
pub const SETTLE_DELAY_MS: u32 = 1;

/// Potentiometer wiper on an analog pin.
pub struct AnalogSensor<P> {
    platform: P,
    pin: PinId,
}

impl<P: Platform> AnalogSensor<P> {
    pub fn new(platform: P, pin: PinId, limits: &PinLimits) -> Result<Self, Error> {
        let pin = limits.check_analog(pin)?;
        Ok(Self { platform, pin })
    }

    /// Sample the wiper, then wait for the converter to settle.
    ///
    /// The value is `0..=1023` for 0 to 5 V.
    pub fn read(&mut self) -> u16 {
        let value = self.platform.read_analog(self.pin);
        self.platform.delay_ms(SETTLE_DELAY_MS);
        value
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }
}

/// Push button on a digital input. No debouncing.
pub struct DigitalInput<P> {
    platform: P,
    pin: PinId,
}

impl<P: Platform> DigitalInput<P> {
    pub fn new(mut platform: P, pin: PinId, limits: &PinLimits) -> Result<Self, Error> {
        let pin = limits.check_digital(pin)?;
        platform.configure_pin(pin, PinMode::Input);
        log::debug!("D{} configured as input", pin);
        Ok(Self { platform, pin })
    }

    pub fn read(&mut self) -> bool {
        self.platform.read_digital(self.pin)
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }
}

/// LED on a digital output.
pub struct DigitalOutput<P> {
    platform: P,
    pin: PinId,
}

impl<P: Platform> DigitalOutput<P> {
    pub fn new(mut platform: P, pin: PinId, limits: &PinLimits) -> Result<Self, Error> {
        let pin = limits.check_digital(pin)?;
        platform.configure_pin(pin, PinMode::Output);
        log::debug!("D{} configured as output", pin);
        Ok(Self { platform, pin })
    }

    pub fn write(&mut self, state: bool) {
        self.platform.write_digital(self.pin, state);
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }
}

/// A fixed tone: frequency in Hz and duration in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tone {
    pub frequency: u16,
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency: u16, duration_ms: u32) -> Self {
        Self {
            frequency,
            duration_ms,
        }
    }
}

/// Piezo element on a digital output.
pub struct ToneEmitter<P> {
    platform: P,
    pin: PinId,
}

impl<P: Platform> ToneEmitter<P> {
    pub fn new(mut platform: P, pin: PinId, limits: &PinLimits) -> Result<Self, Error> {
        let pin = limits.check_digital(pin)?;
        platform.configure_pin(pin, PinMode::Output);
        log::debug!("D{} configured as tone output", pin);
        Ok(Self { platform, pin })
    }

    /// Start a tone and return without waiting for it to finish.
    ///
    /// Calling again before the previous tone ends cuts it off and starts
    /// the new one; tones are never queued.
    pub fn emit(&mut self, frequency: u16, duration_ms: u32) {
        self.platform.play_tone(self.pin, frequency, duration_ms);
    }

    pub fn play(&mut self, tone: Tone) {
        self.emit(tone.frequency, tone.duration_ms);
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }
}
