use protocol::{Outcome, Phase, Question, RoundState, RpsChoice};

use crate::rps;

/// The phase machine. Every method is a transition attempt: it returns
/// whether the transition was applied, and leaves the state untouched when
/// the current phase does not allow it.
#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    round_secs: u16,
}

impl Round {
    pub fn new(round_secs: u16) -> Self {
        Self {
            state: RoundState::new(round_secs),
            round_secs,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn seconds_left(&self) -> u16 {
        self.state.seconds_left
    }

    /// intro -> rps
    pub fn start_round(&mut self) -> bool {
        if self.state.phase != Phase::Intro {
            return false;
        }
        self.clear_hands();
        self.state.phase = Phase::Rps;
        true
    }

    /// Fix both hands. Once per rps cycle.
    pub fn lock_in(&mut self, top: RpsChoice, bottom: RpsChoice) -> Option<Outcome> {
        if self.state.phase != Phase::Rps || self.state.outcome.is_some() {
            return None;
        }
        let outcome = rps::resolve(top, bottom);
        self.state.top_choice = Some(top);
        self.state.bottom_choice = Some(bottom);
        self.state.outcome = Some(outcome);
        Some(outcome)
    }

    /// rps(tie) -> rps
    pub fn tie_acknowledged(&mut self) -> bool {
        if self.state.phase != Phase::Rps || self.state.outcome != Some(Outcome::Tie) {
            return false;
        }
        self.clear_hands();
        true
    }

    /// rps(top|bottom) -> spin
    pub fn outcome_acknowledged(&mut self) -> bool {
        match (self.state.phase, self.state.outcome) {
            (Phase::Rps, Some(Outcome::Top)) | (Phase::Rps, Some(Outcome::Bottom)) => {
                self.state.phase = Phase::Spin;
                true
            }
            _ => false,
        }
    }

    /// spin -> answering
    pub fn spin_completed(&mut self, question: Question) -> bool {
        if self.state.phase != Phase::Spin {
            return false;
        }
        self.state.outcome = None;
        self.state.active_question = Some(question);
        self.state.seconds_left = self.round_secs;
        self.state.phase = Phase::Answering;
        true
    }

    /// One second of the answering clock.
    pub fn tick(&mut self) -> bool {
        if self.state.phase != Phase::Answering || self.state.seconds_left == 0 {
            return false;
        }
        self.state.seconds_left -= 1;
        true
    }

    /// answering(0s) -> intro
    pub fn end_round_requested(&mut self) -> bool {
        if self.state.phase != Phase::Answering || self.state.seconds_left > 0 {
            return false;
        }
        self.state = RoundState::new(self.round_secs);
        true
    }

    fn clear_hands(&mut self) {
        self.state.top_choice = None;
        self.state.bottom_choice = None;
        self.state.outcome = None;
    }
}
