//! Pronguino library — hardware layer for a two-player paddle game console.
//!
//! Potentiometer paddles, push buttons, indicator LEDs and a piezo speaker,
//! composed into a [`GameConsole`] with up to two [`Controller`]s. Every
//! component talks to the board through an injected [`Platform`] handle, so
//! the whole crate is `no_std`, allocation-free and testable on any host with
//! `cargo test`. The game loop and sketch setup are thin consumers that
//! provide a `Platform` for their microcontroller.
//!
//! Layers, leaf to root:
//! - `hal`: the `Platform` port (analog/digital I/O, tones, delays)
//! - `component`: one-pin wrappers (sensor, input, output, tone emitter)
//! - `controller`, `speaker`: per-player input and sound effects
//! - `console`: registration of controllers around one speaker
//! - `board`, `telemetry`: compile-time wiring and NDJSON debug output

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod component;
pub mod console;
pub mod controller;
pub mod error;
pub mod hal;
pub mod speaker;
pub mod telemetry;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use board::{ControllerPins, PinLimits};
pub use component::{AnalogSensor, DigitalInput, DigitalOutput, Tone, ToneEmitter};
pub use console::{GameConsole, MAX_CONTROLLERS};
pub use controller::{position_from_raw, Controller};
pub use error::{Error, PinFault};
pub use hal::{PinId, PinMode, Platform};
pub use speaker::{SoundEffect, Speaker};
