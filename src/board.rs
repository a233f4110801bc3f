/// Hardware wiring for supported boards.
///
/// Each board module defines pin assignments and pin-range limits
/// selected at compile time via feature flags.

#[cfg(feature = "uno")]
mod hw {
    pub const ANALOG_PIN_COUNT: u16 = 6; // A0..A5
    pub const DIGITAL_PIN_COUNT: u16 = 14; // D0..D13
    pub const TONE_PIN: u8 = 8;
    pub const BOARD_NAME: &str = "uno";
}

#[cfg(feature = "mega")]
mod hw {
    pub const ANALOG_PIN_COUNT: u16 = 16; // A0..A15
    pub const DIGITAL_PIN_COUNT: u16 = 54; // D0..D53
    pub const TONE_PIN: u8 = 8;
    pub const BOARD_NAME: &str = "mega2560";
}

#[cfg(not(any(feature = "uno", feature = "mega")))]
mod hw {
    // Every u8 pin number is accepted
    pub const ANALOG_PIN_COUNT: u16 = 256;
    pub const DIGITAL_PIN_COUNT: u16 = 256;
    pub const TONE_PIN: u8 = 8;
    pub const BOARD_NAME: &str = "unknown";
}

pub use hw::*;

use serde::Serialize;

use crate::error::{Error, PinFault};
use crate::hal::PinId;

/// Wiring of a single player's controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ControllerPins {
    /// Analog pin on the potentiometer wiper
    pub sensor: PinId,
    /// Digital input pin on the push button
    pub button: PinId,
    /// Digital output pin on the LED anode
    pub led: PinId,
}

impl ControllerPins {
    pub const fn new(sensor: PinId, button: PinId, led: PinId) -> Self {
        Self { sensor, button, led }
    }
}

/// Default wiring for the left-hand player.
pub const PLAYER_ONE: ControllerPins = ControllerPins::new(0, 2, 4);

/// Default wiring for the right-hand player.
pub const PLAYER_TWO: ControllerPins = ControllerPins::new(1, 3, 5);

/// Range of valid pin numbers on the target board.
///
/// Analog and digital pins are numbered independently, so analog channel
/// A0 is pin `0` here regardless of its digital alias. Counts are `u16`
/// so a board can accept all 256 pin numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinLimits {
    pub analog_pins: u16,
    pub digital_pins: u16,
}

impl PinLimits {
    pub const fn new() -> Self {
        Self {
            analog_pins: ANALOG_PIN_COUNT,
            digital_pins: DIGITAL_PIN_COUNT,
        }
    }

    pub fn check_analog(&self, pin: PinId) -> Result<PinId, Error> {
        if u16::from(pin) < self.analog_pins {
            Ok(pin)
        } else {
            log::warn!("Analog pin A{} out of range (board has {})", pin, self.analog_pins);
            Err(Error::InvalidPinConfiguration {
                pin,
                fault: PinFault::OutOfRange,
            })
        }
    }

    pub fn check_digital(&self, pin: PinId) -> Result<PinId, Error> {
        if u16::from(pin) < self.digital_pins {
            Ok(pin)
        } else {
            log::warn!("Digital pin D{} out of range (board has {})", pin, self.digital_pins);
            Err(Error::InvalidPinConfiguration {
                pin,
                fault: PinFault::OutOfRange,
            })
        }
    }
}

impl Default for PinLimits {
    fn default() -> Self {
        Self::new()
    }
}
