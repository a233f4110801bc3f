/// Telemetry messages for a serial debug link.
///
/// All messages are newline-delimited JSON (NDJSON), serialized into a
/// caller-provided buffer with no allocation.
use serde::Serialize;

use crate::speaker::SoundEffect;

/// Crate version reported in status messages
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Largest message this module produces, newline included
pub const MAX_MSG_LEN: usize = 96;

/// One controller sampled once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ControllerReading {
    /// Slot index in the console
    pub slot: u8,
    /// Paddle position, 1..=7
    pub position: u8,
    /// Button level (true = HIGH)
    pub button: bool,
    /// Unmapped wiper value
    pub raw: u16,
}

/// Messages sent from the console to a host
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ConsoleMessage {
    #[serde(rename = "reading")]
    Reading(ControllerReading),
    #[serde(rename = "sound")]
    Sound {
        effect: SoundEffect,
        freq: u16,
        ms: u32,
    },
    #[serde(rename = "status")]
    Status {
        /// Board identifier
        board: &'static str,
        /// Registered controllers
        controllers: u8,
        version: &'static str,
    },
}

impl ConsoleMessage {
    pub fn sound(effect: SoundEffect) -> Self {
        let tone = effect.tone();
        ConsoleMessage::Sound {
            effect,
            freq: tone.frequency,
            ms: tone.duration_ms,
        }
    }
}

/// Serialize a message to JSON and append a newline.
/// Returns the number of bytes written, newline included, or None if the
/// buffer cannot hold the whole line.
pub fn serialize_message(msg: &ConsoleMessage, buf: &mut [u8]) -> Option<usize> {
    let body = buf.len().checked_sub(1)?;
    let len = serde_json_core::to_slice(msg, &mut buf[..body]).ok()?;
    buf[len] = b'\n';
    Some(len + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(msg: &ConsoleMessage) -> std::string::String {
        let mut buf = [0u8; MAX_MSG_LEN];
        let len = serialize_message(msg, &mut buf).unwrap();
        std::string::String::from(core::str::from_utf8(&buf[..len]).unwrap())
    }

    #[test]
    fn serialize_reading() {
        let msg = ConsoleMessage::Reading(ControllerReading {
            slot: 0,
            position: 4,
            button: false,
            raw: 512,
        });
        assert_eq!(
            render(&msg),
            "{\"type\":\"reading\",\"slot\":0,\"position\":4,\"button\":false,\"raw\":512}\n"
        );
    }

    #[test]
    fn serialize_sound() {
        let msg = ConsoleMessage::sound(SoundEffect::PaddleHit);
        assert_eq!(
            render(&msg),
            "{\"type\":\"sound\",\"effect\":\"paddle_hit\",\"freq\":459,\"ms\":96}\n"
        );
    }

    #[test]
    fn serialize_status() {
        let msg = ConsoleMessage::Status {
            board: "uno",
            controllers: 2,
            version: "0.1.0",
        };
        let json = render(&msg);
        assert!(json.starts_with(r#"{"type":"status""#));
        assert!(json.contains(r#""controllers":2"#));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn buffer_too_small() {
        let msg = ConsoleMessage::sound(SoundEffect::WallHit);
        let mut buf = [0u8; 8];
        assert_eq!(serialize_message(&msg, &mut buf), None);
        assert_eq!(serialize_message(&msg, &mut []), None);
    }

    #[test]
    fn json_exactly_filling_buffer_is_rejected() {
        let msg = ConsoleMessage::sound(SoundEffect::PaddleHit);
        let json_len = render(&msg).len() - 1;

        // No room left for the newline: must not report a partial frame
        let mut exact = [0u8; MAX_MSG_LEN];
        assert_eq!(serialize_message(&msg, &mut exact[..json_len]), None);

        // One more byte fits the whole line
        let len = serialize_message(&msg, &mut exact[..json_len + 1]).unwrap();
        assert_eq!(len, json_len + 1);
        assert_eq!(exact[len - 1], b'\n');
    }
}
