//! Recording platform for host tests and simulation.
//!
//! `MockPlatform` keeps pin state behind a `RefCell`, so any number of
//! components can share it through `&MockPlatform` handles. Analog and
//! digital inputs are stubbed with `set_analog` / `set_digital`. Pin modes
//! and output levels are kept as current state (`mode`, `level`); tone
//! requests are logged in order as [`ToneEvent`]s; delays are summed.

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::hal::{PinId, PinMode, Platform};

/// Maximum number of tone calls kept; older calls are dropped first.
pub const MAX_RECORDED_TONES: usize = 32;

const PIN_SPACE: usize = 256;

/// A recorded tone request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneEvent {
    pub pin: PinId,
    pub frequency: u16,
    pub duration_ms: u32,
}

struct State {
    modes: [Option<PinMode>; PIN_SPACE],
    analog: [u16; PIN_SPACE],
    /// Digital levels: stubbed inputs and written outputs share one space,
    /// as they do on the real port registers.
    digital: [bool; PIN_SPACE],
    tones: Vec<ToneEvent, MAX_RECORDED_TONES>,
    analog_reads: u32,
    delayed_ns: u64,
}

pub struct MockPlatform {
    state: RefCell<State>,
}

impl MockPlatform {
    pub const fn new() -> Self {
        Self {
            state: RefCell::new(State {
                modes: [None; PIN_SPACE],
                analog: [0; PIN_SPACE],
                digital: [false; PIN_SPACE],
                tones: Vec::new(),
                analog_reads: 0,
                delayed_ns: 0,
            }),
        }
    }

    /// Stub the value the next analog reads on `pin` return.
    pub fn set_analog(&self, pin: PinId, value: u16) {
        self.state.borrow_mut().analog[pin as usize] = value;
    }

    /// Stub the level of a digital input.
    pub fn set_digital(&self, pin: PinId, level: bool) {
        self.state.borrow_mut().digital[pin as usize] = level;
    }

    pub fn mode(&self, pin: PinId) -> Option<PinMode> {
        self.state.borrow().modes[pin as usize]
    }

    /// Current level of a digital pin.
    pub fn level(&self, pin: PinId) -> bool {
        self.state.borrow().digital[pin as usize]
    }

    pub fn tones(&self) -> Vec<ToneEvent, MAX_RECORDED_TONES> {
        self.state.borrow().tones.clone()
    }

    pub fn clear_tones(&self) {
        self.state.borrow_mut().tones.clear();
    }

    pub fn analog_reads(&self) -> u32 {
        self.state.borrow().analog_reads
    }

    /// Total time spent in blocking delays.
    pub fn delayed_ns(&self) -> u64 {
        self.state.borrow().delayed_ns
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for &MockPlatform {
    fn delay_ns(&mut self, ns: u32) {
        self.state.borrow_mut().delayed_ns += u64::from(ns);
    }
}

impl Platform for &MockPlatform {
    fn configure_pin(&mut self, pin: PinId, mode: PinMode) {
        self.state.borrow_mut().modes[pin as usize] = Some(mode);
    }

    fn read_analog(&mut self, pin: PinId) -> u16 {
        let mut state = self.state.borrow_mut();
        state.analog_reads += 1;
        state.analog[pin as usize]
    }

    fn read_digital(&mut self, pin: PinId) -> bool {
        self.state.borrow().digital[pin as usize]
    }

    fn write_digital(&mut self, pin: PinId, level: bool) {
        self.state.borrow_mut().digital[pin as usize] = level;
    }

    fn play_tone(&mut self, pin: PinId, frequency: u16, duration_ms: u32) {
        let mut state = self.state.borrow_mut();
        if state.tones.is_full() {
            state.tones.remove(0);
        }
        // Cannot fail: a slot was just freed if needed
        let _ = state.tones.push(ToneEvent {
            pin,
            frequency,
            duration_ms,
        });
    }
}
