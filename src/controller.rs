//! Player controller: potentiometer paddle, push button and indicator LED.

use crate::board::{ControllerPins, PinLimits};
use crate::component::{AnalogSensor, DigitalInput, DigitalOutput};
use crate::error::{Error, PinFault};
use crate::hal::{PinId, Platform};

/// Lowest paddle position.
pub const POSITION_MIN: u8 = 1;

/// Highest paddle position.
pub const POSITION_MAX: u8 = 7;

/// Top of the raw range used for mapping.
///
/// With the knob all the way up the wiper flickers between 1022 and 1023,
/// so 1023 is folded into 1022 to keep the paddle steady at the top.
pub const RAW_CEILING: u16 = 1022;

/// Map a raw wiper reading onto a paddle position in `1..=7`.
pub fn position_from_raw(raw: u16) -> u8 {
    let v = u32::from(raw.min(RAW_CEILING));
    let span = u32::from(POSITION_MAX - POSITION_MIN);
    POSITION_MIN + (v * span / u32::from(RAW_CEILING)) as u8
}

pub struct Controller<P> {
    paddle: AnalogSensor<P>,
    button: DigitalInput<P>,
    led: DigitalOutput<P>,
}

impl<P: Platform + Clone> Controller<P> {
    /// Configure the three pins of one controller.
    ///
    /// The button and LED must be on different digital pins.
    pub fn new(platform: P, pins: ControllerPins, limits: &PinLimits) -> Result<Self, Error> {
        if pins.button == pins.led {
            log::warn!("Button and LED both wired to D{}", pins.led);
            return Err(Error::InvalidPinConfiguration {
                pin: pins.led,
                fault: PinFault::AlreadyClaimed,
            });
        }
        // Validate everything before any pin mode is touched
        limits.check_analog(pins.sensor)?;
        limits.check_digital(pins.button)?;
        limits.check_digital(pins.led)?;

        Ok(Self {
            paddle: AnalogSensor::new(platform.clone(), pins.sensor, limits)?,
            button: DigitalInput::new(platform.clone(), pins.button, limits)?,
            led: DigitalOutput::new(platform, pins.led, limits)?,
        })
    }
}

impl<P: Platform> Controller<P> {
    /// Current paddle position, `1..=7`.
    pub fn read_position(&mut self) -> u8 {
        position_from_raw(self.paddle.read())
    }

    /// Unmapped wiper reading, `0..=1023`.
    pub fn read_raw(&mut self) -> u16 {
        self.paddle.read()
    }

    pub fn read_button(&mut self) -> bool {
        self.button.read()
    }

    pub fn set_indicator(&mut self, state: bool) {
        self.led.write(state);
    }

    pub fn pins(&self) -> ControllerPins {
        ControllerPins::new(self.paddle.pin(), self.button.pin(), self.led.pin())
    }

    pub(crate) fn sensor_pin(&self) -> PinId {
        self.paddle.pin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::{PinMode, ADC_MAX};
    use crate::mock::MockPlatform;

    const LIMITS: PinLimits = PinLimits {
        analog_pins: 6,
        digital_pins: 14,
    };

    fn controller(mock: &MockPlatform) -> Controller<&MockPlatform> {
        Controller::new(mock, ControllerPins::new(0, 2, 4), &LIMITS).unwrap()
    }

    #[test]
    fn mapping_matches_integer_formula() {
        for v in 0..=RAW_CEILING {
            let expected = 1 + (u32::from(v) * 6 / 1022) as u8;
            assert_eq!(position_from_raw(v), expected, "raw {}", v);
        }
    }

    #[test]
    fn mapping_is_monotonic_and_bounded() {
        let mut last = POSITION_MIN;
        for v in 0..=ADC_MAX {
            let p = position_from_raw(v);
            assert!(p >= last);
            assert!((POSITION_MIN..=POSITION_MAX).contains(&p));
            last = p;
        }
    }

    #[test]
    fn mapping_endpoints() {
        assert_eq!(position_from_raw(0), 1);
        assert_eq!(position_from_raw(170), 1);
        assert_eq!(position_from_raw(171), 2);
        assert_eq!(position_from_raw(511), 4);
        assert_eq!(position_from_raw(1021), 6);
        assert_eq!(position_from_raw(1022), 7);
    }

    #[test]
    fn top_reading_clamps_to_ceiling() {
        assert_eq!(position_from_raw(1023), position_from_raw(1022));
        // Readings past the converter range still stay on the board
        assert_eq!(position_from_raw(u16::MAX), POSITION_MAX);
    }

    #[test]
    fn read_position_uses_sensor_pin() {
        let mock = MockPlatform::new();
        let mut ctl = controller(&mock);

        mock.set_analog(0, 1023);
        assert_eq!(ctl.read_position(), 7);
        mock.set_analog(0, 0);
        assert_eq!(ctl.read_position(), 1);
        // Another pin's value must not leak in
        mock.set_analog(1, 1022);
        assert_eq!(ctl.read_position(), 1);
    }

    #[test]
    fn read_position_is_idempotent() {
        let mock = MockPlatform::new();
        let mut ctl = controller(&mock);
        mock.set_analog(0, 600);

        let first = ctl.read_position();
        for _ in 0..5 {
            assert_eq!(ctl.read_position(), first);
        }
        assert_eq!(mock.analog_reads(), 6);
        assert_eq!(mock.delayed_ns(), 6_000_000);
    }

    #[test]
    fn read_raw_is_unmapped() {
        let mock = MockPlatform::new();
        let mut ctl = controller(&mock);
        mock.set_analog(0, 1023);
        assert_eq!(ctl.read_raw(), 1023);
    }

    #[test]
    fn button_and_indicator_delegate() {
        let mock = MockPlatform::new();
        let mut ctl = controller(&mock);
        assert_eq!(mock.mode(2), Some(PinMode::Input));
        assert_eq!(mock.mode(4), Some(PinMode::Output));

        assert!(!ctl.read_button());
        mock.set_digital(2, true);
        assert!(ctl.read_button());

        ctl.set_indicator(true);
        assert!(mock.level(4));
        ctl.set_indicator(false);
        assert!(!mock.level(4));
    }

    #[test]
    fn pins_reflect_construction() {
        let mock = MockPlatform::new();
        let ctl = controller(&mock);
        assert_eq!(ctl.pins(), ControllerPins::new(0, 2, 4));
    }

    #[test]
    fn shared_button_and_led_pin_rejected() {
        let mock = MockPlatform::new();
        let err = Controller::new(&mock, ControllerPins::new(0, 3, 3), &LIMITS).err();
        assert_eq!(
            err,
            Some(Error::InvalidPinConfiguration {
                pin: 3,
                fault: PinFault::AlreadyClaimed
            })
        );
        assert_eq!(mock.mode(3), None);
    }

    #[test]
    fn bad_led_pin_leaves_button_unconfigured() {
        let mock = MockPlatform::new();
        assert!(Controller::new(&mock, ControllerPins::new(0, 2, 40), &LIMITS).is_err());
        assert_eq!(mock.mode(2), None);
    }
}
