//! Game console: the shared speaker plus up to two player controllers.
//!
//! Controllers are stored in a bounded collection that only ever holds
//! populated slots, so `controllers()` never exposes an unwired entry.
//! Registration is one-way; there is no removal.

use heapless::Vec;

use crate::board::{self, ControllerPins, PinLimits};
use crate::controller::Controller;
use crate::error::{Error, PinFault};
use crate::hal::{PinId, Platform};
use crate::speaker::Speaker;
use crate::telemetry::{ConsoleMessage, ControllerReading};

/// Number of controller slots.
pub const MAX_CONTROLLERS: usize = 2;

pub struct GameConsole<P> {
    platform: P,
    limits: PinLimits,
    speaker: Speaker<P>,
    controllers: Vec<Controller<P>, MAX_CONTROLLERS>,
}

impl<P: Platform + Clone> GameConsole<P> {
    /// Console with a speaker on `tone_pin` and no controllers yet.
    pub fn new(platform: P, tone_pin: PinId) -> Result<Self, Error> {
        Self::with_limits(platform, tone_pin, PinLimits::new())
    }

    pub fn with_limits(platform: P, tone_pin: PinId, limits: PinLimits) -> Result<Self, Error> {
        let speaker = Speaker::new(platform.clone(), tone_pin, &limits)?;
        log::debug!("Console speaker on D{}", tone_pin);
        Ok(Self {
            platform,
            limits,
            speaker,
            controllers: Vec::new(),
        })
    }

    /// Console wired the way the board module describes: speaker on
    /// `TONE_PIN`, player one and player two in slots 0 and 1.
    pub fn with_board_wiring(platform: P) -> Result<Self, Error> {
        let mut console = Self::new(platform, board::TONE_PIN)?;
        console.add_controller_pins(board::PLAYER_ONE)?;
        console.add_controller_pins(board::PLAYER_TWO)?;
        Ok(console)
    }

    /// Register a controller in the next free slot and return its index.
    ///
    /// Fails with `CapacityExceeded` once both slots are taken, and with
    /// `InvalidPinConfiguration` if a pin is out of range or already used
    /// by the speaker or another controller. A failed call changes nothing.
    pub fn add_controller(
        &mut self,
        sensor_pin: PinId,
        button_pin: PinId,
        led_pin: PinId,
    ) -> Result<usize, Error> {
        self.add_controller_pins(ControllerPins::new(sensor_pin, button_pin, led_pin))
    }

    pub fn add_controller_pins(&mut self, pins: ControllerPins) -> Result<usize, Error> {
        if self.controllers.is_full() {
            log::warn!("Controller {:?} rejected: all {} slots taken", pins, MAX_CONTROLLERS);
            return Err(Error::CapacityExceeded);
        }
        self.check_unclaimed(pins)?;

        let controller = Controller::new(self.platform.clone(), pins, &self.limits)?;
        let slot = self.controllers.len();
        if self.controllers.push(controller).is_err() {
            return Err(Error::CapacityExceeded);
        }
        log::debug!(
            "Controller {} registered: A{} button D{} led D{}",
            slot,
            pins.sensor,
            pins.button,
            pins.led
        );
        Ok(slot)
    }

    fn check_unclaimed(&self, pins: ControllerPins) -> Result<(), Error> {
        let claimed = |pin: PinId| Error::InvalidPinConfiguration {
            pin,
            fault: PinFault::AlreadyClaimed,
        };
        for digital in [pins.button, pins.led] {
            let in_use = digital == self.speaker.pin()
                || self.controllers.iter().any(|c| {
                    let used = c.pins();
                    used.button == digital || used.led == digital
                });
            if in_use {
                log::warn!("D{} is already in use", digital);
                return Err(claimed(digital));
            }
        }
        if self.controllers.iter().any(|c| c.sensor_pin() == pins.sensor) {
            log::warn!("A{} is already in use", pins.sensor);
            return Err(claimed(pins.sensor));
        }
        Ok(())
    }
}

impl<P: Platform> GameConsole<P> {
    /// Registered controllers, in registration order.
    pub fn controllers(&self) -> &[Controller<P>] {
        &self.controllers
    }

    pub fn controllers_mut(&mut self) -> &mut [Controller<P>] {
        &mut self.controllers
    }

    pub fn controller(&self, slot: usize) -> Option<&Controller<P>> {
        self.controllers.get(slot)
    }

    pub fn controller_mut(&mut self, slot: usize) -> Option<&mut Controller<P>> {
        self.controllers.get_mut(slot)
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_full(&self) -> bool {
        self.controllers.is_full()
    }

    pub fn speaker(&self) -> &Speaker<P> {
        &self.speaker
    }

    pub fn speaker_mut(&mut self) -> &mut Speaker<P> {
        &mut self.speaker
    }

    pub fn limits(&self) -> PinLimits {
        self.limits
    }

    /// Sample every registered controller once.
    pub fn readings(&mut self) -> Vec<ControllerReading, MAX_CONTROLLERS> {
        let mut out = Vec::new();
        for (slot, controller) in self.controllers.iter_mut().enumerate() {
            let raw = controller.read_raw();
            let reading = ControllerReading {
                slot: slot as u8,
                position: crate::controller::position_from_raw(raw),
                button: controller.read_button(),
                raw,
            };
            // Same capacity as the controller list
            let _ = out.push(reading);
        }
        out
    }

    pub fn status(&self) -> ConsoleMessage {
        ConsoleMessage::Status {
            board: board::BOARD_NAME,
            controllers: self.controllers.len() as u8,
            version: crate::telemetry::VERSION,
        }
    }
}
