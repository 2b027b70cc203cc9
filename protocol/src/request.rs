use serde::{Deserialize, Serialize};
use crate::JsonMessage;

/// Inputs the presentation layer may send to the table.
#[derive(Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum PlayerRequest {
    /// Leave the intro screen and start cycling hands.
    StartRound,
    /// Dismiss a tie and cycle the hands again.
    PlayAgain,
    /// Dismiss a win and spin the wheel.
    Spin,
    /// Close the answered question. Only honoured once the clock hit zero.
    NextRound,
}

impl JsonMessage<'_> for PlayerRequest {}
