use std::fmt;

use serde::{Serialize, Deserialize};

/// Question categories, listed in wheel segment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    /// Index of the wheel segment painted with this color.
    pub fn segment(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Blue => 3,
        }
    }

    pub fn from_segment(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    pub fn hex(self) -> &'static str {
        match self {
            Color::Red => "#ea4335",
            Color::Yellow => "#fbbc05",
            Color::Green => "#34a853",
            Color::Blue => "#4285f4",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub color: Color,
    pub text: String,
}

impl Question {
    pub fn new(color: Color, text: impl ToString) -> Self {
        Self { color, text: text.to_string() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpsChoice {
    Rock,
    Paper,
    Scissors,
}

impl RpsChoice {
    /// Cycling order of the hands while the players wait for lock-in.
    pub const ALL: [RpsChoice; 3] = [RpsChoice::Rock, RpsChoice::Paper, RpsChoice::Scissors];

    pub fn next(self) -> Self {
        match self {
            RpsChoice::Rock => RpsChoice::Paper,
            RpsChoice::Paper => RpsChoice::Scissors,
            RpsChoice::Scissors => RpsChoice::Rock,
        }
    }

    /// The hand this one defeats.
    pub fn beats(self) -> Self {
        match self {
            RpsChoice::Rock => RpsChoice::Scissors,
            RpsChoice::Paper => RpsChoice::Rock,
            RpsChoice::Scissors => RpsChoice::Paper,
        }
    }
}

impl fmt::Display for RpsChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RpsChoice::Rock => "rock",
            RpsChoice::Paper => "paper",
            RpsChoice::Scissors => "scissors",
        })
    }
}

/// Which side won the hand: `Top` is player one, `Bottom` player two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Top,
    Bottom,
    Tie,
}

impl Outcome {
    pub fn announcement(self) -> &'static str {
        match self {
            Outcome::Top => "Player One wins!",
            Outcome::Bottom => "Player Two wins!",
            Outcome::Tie => "Tie!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Intro,
    Rps,
    Spin,
    Answering,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Intro => "intro",
            Phase::Rps => "rps",
            Phase::Spin => "spin",
            Phase::Answering => "answering",
        })
    }
}

/// Everything the presentation layer needs to redraw the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,
    pub top_choice: Option<RpsChoice>,
    pub bottom_choice: Option<RpsChoice>,
    pub outcome: Option<Outcome>,
    pub active_question: Option<Question>,
    pub seconds_left: u16,
}

impl RoundState {
    pub fn new(round_secs: u16) -> Self {
        Self {
            phase: Phase::Intro,
            top_choice: None,
            bottom_choice: None,
            outcome: None,
            active_question: None,
            seconds_left: round_secs,
        }
    }
}
