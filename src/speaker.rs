//! Game sound effects on a piezo speaker.

use serde::Serialize;

use crate::board::PinLimits;
use crate::component::{Tone, ToneEmitter};
use crate::error::Error;
use crate::hal::{PinId, Platform};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEffect {
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// Ball bounced off a paddle
    PaddleHit,
    /// Ball left the court
    PointScored,
}

impl SoundEffect {
    pub const fn tone(self) -> Tone {
        match self {
            SoundEffect::WallHit => Tone::new(226, 16),
            SoundEffect::PaddleHit => Tone::new(459, 96),
            SoundEffect::PointScored => Tone::new(490, 257),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SoundEffect::WallHit => "wall_hit",
            SoundEffect::PaddleHit => "paddle_hit",
            SoundEffect::PointScored => "point_scored",
        }
    }
}

pub struct Speaker<P> {
    piezo: ToneEmitter<P>,
}

impl<P: Platform> Speaker<P> {
    pub fn new(platform: P, pin: PinId, limits: &PinLimits) -> Result<Self, Error> {
        Ok(Self {
            piezo: ToneEmitter::new(platform, pin, limits)?,
        })
    }

    /// Start an effect. Any effect still sounding is cut off.
    pub fn play(&mut self, effect: SoundEffect) {
        log::trace!("Sound: {}", effect.name());
        self.piezo.play(effect.tone());
    }

    pub fn wall_hit(&mut self) {
        self.play(SoundEffect::WallHit);
    }

    pub fn paddle_hit(&mut self) {
        self.play(SoundEffect::PaddleHit);
    }

    pub fn point_scored(&mut self) {
        self.play(SoundEffect::PointScored);
    }

    pub fn pin(&self) -> PinId {
        self.piezo.pin()
    }
}
