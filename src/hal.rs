//! Platform port: the I/O primitives every component is built on.
//!
//! Components never touch global pin state directly. Each one holds its own
//! handle to a [`Platform`], so host tests can substitute a recording
//! implementation for real hardware. On a microcontroller the handle is
//! usually a zero-sized token or a shared reference, and must be `Clone`
//! for [`GameConsole`](crate::GameConsole) to hand copies to its parts.

use embedded_hal::delay::DelayNs;

/// Board pin number. Analog and digital pins are numbered independently.
pub type PinId = u8;

/// Highest value the 10-bit analog converter reports.
pub const ADC_MAX: u16 = 1023;

/// Direction a digital pin is configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

/// Pin-level I/O capability.
///
/// Blocking waits come from the [`DelayNs`] supertrait.
pub trait Platform: DelayNs {
    /// Set the direction of a digital pin.
    fn configure_pin(&mut self, pin: PinId, mode: PinMode);

    /// Sample an analog pin. Returns `0..=ADC_MAX`.
    fn read_analog(&mut self, pin: PinId) -> u16;

    /// Read the level of a digital input; HIGH is `true`.
    fn read_digital(&mut self, pin: PinId) -> bool;

    /// Drive a digital output HIGH (`true`) or LOW.
    fn write_digital(&mut self, pin: PinId, level: bool);

    /// Start a square wave on `pin` and return immediately.
    ///
    /// The tone stops by itself after `duration_ms`. Starting a new tone
    /// while one is still sounding replaces it; implementations must not
    /// queue tones.
    fn play_tone(&mut self, pin: PinId, frequency: u16, duration_ms: u32);
}
