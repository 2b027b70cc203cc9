use serde::{Serialize, Deserialize};
use crate::JsonMessage;
use crate::model::{Color, Outcome, RoundState, RpsChoice};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerResponse {
    /// Snapshot after every applied transition.
    RoundState(RoundState),
    Notice {
        msg: String,
    },

    /// Hands shown while cycling, before lock-in.
    Hands {
        top: RpsChoice,
        bottom: RpsChoice,
    },
    /// Seconds until lock-in.
    CountDown(u8),
    Locked {
        top: RpsChoice,
        bottom: RpsChoice,
        outcome: Outcome,
    },

    SpinStarted {
        from: f64,
        to: f64,
        duration_ms: u64,
    },
    Landed {
        color: Color,
        rotation: f64,
        snapped: bool,
    },
}

impl JsonMessage<'_> for PlayerResponse {}
