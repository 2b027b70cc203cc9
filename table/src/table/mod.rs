mod config;
mod state;
mod request;
mod error;
mod timer;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use tokio::sync::mpsc::{Sender, Receiver, channel};
use tokio::sync::watch;

pub use config::{Config, DeckSource};
pub use error::{ErrorKind, TableResult};
pub use request::{Request, TimerType};
use state::Round;
use timer::TimerSet;

use crate::consts::*;
use crate::pool::QuestionPool;
use crate::rps;
use crate::wheel::{self, SpinPlan};

use protocol::{Phase, PlayerRequest as PlayerReq, PlayerResponse as PlayerResp, RoundState, RpsChoice};

/// Owns a game and everything that mutates it. Requests from the console and
/// ticks from the phase timers all arrive on one channel and are applied in
/// order by `run`.
pub struct Table {
    config: Config,
    round: Round,
    pool: QuestionPool,
    rng: StdRng,

    /// Accumulated wheel rotation in degrees.
    rotation: f64,
    spin: Option<SpinPlan>,
    hands: (RpsChoice, RpsChoice),

    timers: TimerSet,
    rm_rx: Receiver<Request>,
    loopback: Sender<Request>,

    state_tx: watch::Sender<RoundState>,
    out: Sender<PlayerResp>,
}

impl Table {
    pub fn new(config: Config, pool: QuestionPool, rng: StdRng, out: Sender<PlayerResp>) -> Self {
        let (loopback, rm_rx) = channel::<Request>(CHANNEL_SIZE);
        let round = Round::new(config.round_secs);
        let (state_tx, _) = watch::channel(round.state().clone());

        Self {
            config,
            round,
            pool,
            rng,

            rotation: 0.0,
            spin: None,
            hands: (RpsChoice::Rock, RpsChoice::Rock),

            timers: TimerSet::new(loopback.clone()),
            rm_rx,
            loopback,

            state_tx,
            out,
        }
    }

    pub fn get_tx(&self) -> Sender<Request> {
        self.loopback.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RoundState> {
        self.state_tx.subscribe()
    }

    pub async fn run(&mut self) {
        info!("table open, {} questions from \"{}\"", self.pool.len(), self.pool.name());
        self.publish().await;
        while let Some(req) = self.rm_rx.recv().await {
            match req {
                Request::Player(req) => self.on_player(req).await,
                Request::Tick { timer, epoch, rest } => {
                    if !self.timers.is_current(epoch) {
                        debug!("stale {:?} tick from epoch {}", timer, epoch);
                        continue;
                    }
                    self.on_tick(timer, rest).await;
                }
                Request::Shutdown => break,
            }
        }
        self.timers.cancel_all();
        info!("table closed");
    }

    async fn on_player(&mut self, req: PlayerReq) {
        let applied = match req {
            PlayerReq::StartRound => self.round.start_round(),
            PlayerReq::PlayAgain => self.round.tie_acknowledged(),
            PlayerReq::Spin => self.round.outcome_acknowledged(),
            PlayerReq::NextRound => self.round.end_round_requested(),
        };
        if !applied {
            debug!("ignored {:?} during {}", req, self.round.phase());
            return;
        }
        info!("{:?}: now {}", req, self.round.phase());
        self.enter_phase().await;
    }

    async fn on_tick(&mut self, timer: TimerType, rest: u32) {
        match timer {
            TimerType::Cycle => {
                self.hands = (self.hands.0.next(), self.hands.1.next());
                let (top, bottom) = self.hands;
                self.send(PlayerResp::Hands { top, bottom }).await;
            }
            TimerType::LockIn => {
                self.send(PlayerResp::CountDown(rest as u8)).await;
                if rest == 0 {
                    self.lock_in().await;
                }
            }
            TimerType::Spin => self.land().await,
            TimerType::Answer => {
                if self.round.tick() {
                    self.publish().await;
                }
                if self.round.seconds_left() == 0 {
                    self.timers.cancel_all();
                    self.send(PlayerResp::Notice { msg: "Time's up!".to_string() }).await;
                }
            }
        }
    }

    /// Entering a phase, including re-entering rps after a tie, drops every
    /// timer of the previous one before arming its own.
    async fn enter_phase(&mut self) {
        self.timers.cancel_all();
        match self.round.phase() {
            Phase::Intro => {
                self.publish().await;
            }
            Phase::Rps => {
                self.timers.every(self.config.cycle_interval, TimerType::Cycle);
                self.timers.countdown(self.config.lockin_secs as u32, TICK, TimerType::LockIn);
                self.publish().await;
                self.send(PlayerResp::CountDown(self.config.lockin_secs)).await;
            }
            Phase::Spin => {
                let plan = self.config.wheel.spin(&mut self.rng, self.rotation);
                debug!(
                    "spinning {:.1}° ({} turns + {:.1}°) toward {}",
                    plan.total(),
                    plan.revolutions,
                    plan.align,
                    plan.target
                );
                self.spin = Some(plan);
                self.timers.once(self.config.spin_duration, TimerType::Spin);
                self.publish().await;
                self.send(PlayerResp::SpinStarted {
                    from: plan.from,
                    to: plan.to,
                    duration_ms: self.config.spin_duration.as_millis() as u64,
                })
                .await;
            }
            Phase::Answering => {
                self.timers.countdown(self.round.seconds_left() as u32, TICK, TimerType::Answer);
                self.publish().await;
            }
        }
        debug!("armed {} at epoch {}", self.round.phase(), self.timers.epoch());
    }

    async fn lock_in(&mut self) {
        // the cycle and the countdown die together
        self.timers.cancel_all();
        let (top, bottom) = rps::lock_in(&mut self.rng);
        if let Some(outcome) = self.round.lock_in(top, bottom) {
            info!("{} vs {}: {}", top, bottom, outcome.announcement());
            self.hands = (top, bottom);
            self.send(PlayerResp::Locked { top, bottom, outcome }).await;
            self.publish().await;
        }
    }

    async fn land(&mut self) {
        let plan = match self.spin.take() {
            Some(plan) => plan,
            None => {
                warn!("wheel stopped without a spin");
                return;
            }
        };
        let landing = self.config.wheel.settle(plan.to);
        self.rotation = landing.rotation;
        if landing.snapped {
            let drift = wheel::separation(plan.to, landing.rotation);
            debug!("snapped {:.3}° onto {}", drift, landing.color);
        }
        if landing.color != plan.target {
            warn!("aimed at {} but landed on {}", plan.target, landing.color);
        }
        self.send(PlayerResp::Landed {
            color: landing.color,
            rotation: landing.rotation,
            snapped: landing.snapped,
        })
        .await;

        let question = self.pool.draw(&mut self.rng, landing.color).clone();
        if self.round.spin_completed(question) {
            info!("landed on {}: now {}", landing.color, self.round.phase());
            self.enter_phase().await;
        }
    }

    async fn publish(&self) {
        let snapshot = self.round.state().clone();
        self.state_tx.send_replace(snapshot.clone());
        self.send(PlayerResp::RoundState(snapshot)).await;
    }

    async fn send(&self, resp: PlayerResp) {
        self.out.send(resp).await.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::{Deck, Outcome};
    use rand::SeedableRng;
    use tokio::task::JoinHandle;
    use tokio::time::{sleep, timeout, Duration};

    struct Harness {
        tx: Sender<Request>,
        out: Receiver<PlayerResp>,
        state: watch::Receiver<RoundState>,
        handle: JoinHandle<()>,
    }

    fn open(seed: u64) -> Harness {
        let (out_tx, out) = channel(256);
        let pool = QuestionPool::from_deck(Deck::builtin()).unwrap();
        let mut table = Table::new(Config::new(), pool, StdRng::seed_from_u64(seed), out_tx);
        let tx = table.get_tx();
        let state = table.subscribe();
        let handle = tokio::spawn(async move { table.run().await });
        Harness { tx, out, state, handle }
    }

    impl Harness {
        async fn press(&self, req: PlayerReq) {
            self.tx.send(Request::Player(req)).await.unwrap();
        }

        async fn wait_for(&mut self, pred: impl Fn(&PlayerResp) -> bool) -> PlayerResp {
            loop {
                let resp = timeout(Duration::from_secs(600), self.out.recv())
                    .await
                    .expect("table went quiet")
                    .expect("table closed");
                if pred(&resp) {
                    return resp;
                }
            }
        }

        /// Plays rock-paper-scissors until somebody wins.
        async fn win_hand(&mut self) -> Outcome {
            self.press(PlayerReq::StartRound).await;
            loop {
                match self.wait_for(|r| matches!(r, PlayerResp::Locked { .. })).await {
                    PlayerResp::Locked { outcome: Outcome::Tie, .. } => {
                        self.press(PlayerReq::PlayAgain).await;
                    }
                    PlayerResp::Locked { outcome, .. } => return outcome,
                    _ => unreachable!(),
                }
            }
        }

        async fn close(self) {
            self.tx.send(Request::Shutdown).await.unwrap();
            self.handle.await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn plays_a_full_round() {
        let mut h = open(5);
        let outcome = h.win_hand().await;
        assert_ne!(outcome, Outcome::Tie);
        assert_eq!(h.state.borrow().phase, Phase::Rps);
        assert_eq!(h.state.borrow().outcome, Some(outcome));

        h.press(PlayerReq::Spin).await;
        let color = match h.wait_for(|r| matches!(r, PlayerResp::Landed { .. })).await {
            PlayerResp::Landed { color, .. } => color,
            _ => unreachable!(),
        };
        h.wait_for(|r| matches!(r, PlayerResp::RoundState(s) if s.phase == Phase::Answering)).await;
        {
            let state = h.state.borrow();
            assert_eq!(state.active_question.as_ref().map(|q| q.color), Some(color));
            assert_eq!(state.seconds_left, 90);
            assert!(state.outcome.is_none());
        }

        // too early, the clock is still running
        h.press(PlayerReq::NextRound).await;
        h.wait_for(|r| matches!(r, PlayerResp::RoundState(s) if s.seconds_left == 0)).await;
        assert_eq!(h.state.borrow().phase, Phase::Answering);

        h.press(PlayerReq::NextRound).await;
        h.wait_for(|r| matches!(r, PlayerResp::RoundState(s) if s.phase == Phase::Intro)).await;
        assert_eq!(*h.state.borrow(), RoundState::new(90));
        h.close().await;
    }

    #[tokio::test(start_paused = true)]
    async fn hands_stop_cycling_at_lock_in() {
        let mut h = open(9);
        h.press(PlayerReq::StartRound).await;
        h.wait_for(|r| matches!(r, PlayerResp::Locked { .. })).await;
        h.wait_for(|r| matches!(r, PlayerResp::RoundState(_))).await;

        sleep(Duration::from_secs(10)).await;
        assert!(h.out.try_recv().is_err());
        assert_eq!(h.state.borrow().phase, Phase::Rps);
        h.close().await;
    }

    #[tokio::test(start_paused = true)]
    async fn spin_is_ignored_until_someone_wins() {
        let mut h = open(1);
        h.press(PlayerReq::Spin).await;
        h.press(PlayerReq::StartRound).await;
        h.press(PlayerReq::Spin).await;
        h.wait_for(|r| matches!(r, PlayerResp::CountDown(3))).await;
        assert_eq!(h.state.borrow().phase, Phase::Rps);
        assert!(h.state.borrow().outcome.is_none());
        h.close().await;
    }

    #[tokio::test(start_paused = true)]
    async fn hands_pick_up_where_they_stopped() {
        let mut h = open(13);
        h.press(PlayerReq::StartRound).await;
        let (top, bottom, outcome) = match h.wait_for(|r| matches!(r, PlayerResp::Locked { .. })).await {
            PlayerResp::Locked { top, bottom, outcome } => (top, bottom, outcome),
            _ => unreachable!(),
        };
        if outcome == Outcome::Tie {
            h.press(PlayerReq::PlayAgain).await;
        } else {
            h.press(PlayerReq::Spin).await;
            h.wait_for(|r| matches!(r, PlayerResp::RoundState(s) if s.phase == Phase::Answering && s.seconds_left == 0)).await;
            h.press(PlayerReq::NextRound).await;
            h.wait_for(|r| matches!(r, PlayerResp::RoundState(s) if s.phase == Phase::Intro)).await;
            h.press(PlayerReq::StartRound).await;
        }
        match h.wait_for(|r| matches!(r, PlayerResp::Hands { .. })).await {
            PlayerResp::Hands { top: t, bottom: b } => assert_eq!((t, b), (top.next(), bottom.next())),
            _ => unreachable!(),
        }
        h.close().await;
    }

    #[tokio::test(start_paused = true)]
    async fn wheel_keeps_turning_forward_between_rounds() {
        let mut h = open(21);
        let mut last = 0.0;
        for _ in 0..3 {
            h.win_hand().await;
            h.press(PlayerReq::Spin).await;
            let (from, to) = match h.wait_for(|r| matches!(r, PlayerResp::SpinStarted { .. })).await {
                PlayerResp::SpinStarted { from, to, .. } => (from, to),
                _ => unreachable!(),
            };
            assert_eq!(from, last);
            assert!(to - from >= 360.0 * MIN_SPINS as f64);
            if let PlayerResp::Landed { rotation, .. } = h.wait_for(|r| matches!(r, PlayerResp::Landed { .. })).await {
                last = rotation;
            }
            h.wait_for(|r| matches!(r, PlayerResp::RoundState(s) if s.phase == Phase::Answering && s.seconds_left == 0)).await;
            h.press(PlayerReq::NextRound).await;
            h.wait_for(|r| matches!(r, PlayerResp::RoundState(s) if s.phase == Phase::Intro)).await;
        }
        h.close().await;
    }
}
