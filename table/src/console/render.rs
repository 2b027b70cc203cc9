use protocol::{Outcome, Phase, PlayerResponse, RoundState};

pub(crate) fn render(resp: &PlayerResponse) -> Option<String> {
    match resp {
        PlayerResponse::RoundState(state) => round_state(state),
        PlayerResponse::Notice { msg } => Some(msg.clone()),
        // four a second, too chatty for a terminal
        PlayerResponse::Hands { .. } => None,
        PlayerResponse::CountDown(0) => Some("Shoot!".to_string()),
        PlayerResponse::CountDown(n) => Some(format!("{}...", n)),
        PlayerResponse::Locked { top, bottom, outcome } => Some(format!(
            "Player 1 - {} | {} - Player 2\n{}",
            top,
            bottom,
            outcome.announcement()
        )),
        PlayerResponse::SpinStarted { from, to, .. } => {
            Some(format!("The wheel spins {:.0} degrees...", to - from))
        }
        PlayerResponse::Landed { color, .. } => {
            Some(format!("Landed on {} ({})", color.name().to_uppercase(), color.hex()))
        }
    }
}

fn round_state(state: &RoundState) -> Option<String> {
    match state.phase {
        Phase::Intro => Some("== CHROMATIC ==\nType `start` for rock-paper-scissors.".to_string()),
        Phase::Rps => match state.outcome {
            None => Some("Rock... paper... scissors...".to_string()),
            Some(Outcome::Tie) => Some("Let's try that again! Type `again`.".to_string()),
            Some(_) => Some("Ready to spin the wheel? Type `spin`.".to_string()),
        },
        Phase::Spin => None,
        Phase::Answering => {
            let question = state.active_question.as_ref()?;
            match state.seconds_left {
                0 => Some("Type `next` for the next round.".to_string()),
                n if n % 30 == 0 => Some(format!("[{}] {}\n{}s left", question.color, question.text, n)),
                n if n <= 5 => Some(format!("{}s", n)),
                _ => None,
            }
        }
    }
}
