//! Errors surfaced while wiring up the console.
//!
//! Reading and writing an already-configured pin cannot fail on this class
//! of hardware, so only construction and registration return `Result`.

use core::fmt;

use crate::hal::PinId;

/// Why a pin was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinFault {
    /// Pin number is beyond what the board provides
    OutOfRange,
    /// Pin is already driven or read by another component
    AlreadyClaimed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Both controller slots are already populated
    CapacityExceeded,
    /// A pin failed validation at construction time
    InvalidPinConfiguration { pin: PinId, fault: PinFault },
}

impl fmt::Display for PinFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinFault::OutOfRange => f.write_str("out of range"),
            PinFault::AlreadyClaimed => f.write_str("already claimed"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExceeded => write!(
                f,
                "controller capacity exceeded (max {})",
                crate::console::MAX_CONTROLLERS
            ),
            Error::InvalidPinConfiguration { pin, fault } => {
                write!(f, "invalid pin configuration: pin {} {}", pin, fault)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::CapacityExceeded.to_string(),
            "controller capacity exceeded (max 2)"
        );
        assert_eq!(
            Error::InvalidPinConfiguration {
                pin: 20,
                fault: PinFault::OutOfRange
            }
            .to_string(),
            "invalid pin configuration: pin 20 out of range"
        );
    }
}
