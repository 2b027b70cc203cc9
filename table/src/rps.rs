use protocol::{Outcome, RpsChoice};
use rand::Rng;

/// `top` is player one's hand, `bottom` player two's.
pub fn resolve(top: RpsChoice, bottom: RpsChoice) -> Outcome {
    if top == bottom {
        Outcome::Tie
    } else if top.beats() == bottom {
        Outcome::Top
    } else {
        Outcome::Bottom
    }
}

pub fn pick<R: Rng>(rng: &mut R) -> RpsChoice {
    RpsChoice::ALL[rng.gen_range(0..RpsChoice::ALL.len())]
}

/// Both hands are drawn independently.
pub fn lock_in<R: Rng>(rng: &mut R) -> (RpsChoice, RpsChoice) {
    let top = pick(rng);
    let bottom = pick(rng);
    (top, bottom)
}
