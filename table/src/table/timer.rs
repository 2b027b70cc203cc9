use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use super::request::{Request, TimerType};

/// A task feeding ticks back into the table. Dropping it stops the ticks.
#[derive(Debug)]
struct PhaseTimer {
    handle: JoinHandle<()>,
}

impl PhaseTimer {
    fn spawn(period: Duration, ticks: Option<u32>, timer: TimerType, epoch: u64, loopback: Sender<Request>) -> Self {
        let handle = tokio::spawn(async move {
            let mut passed = 0;
            loop {
                sleep(period).await;
                passed += 1;
                let rest = ticks.map(|n| n - passed).unwrap_or(0);
                if loopback.send(Request::Tick { timer, epoch, rest }).await.is_err() {
                    return;
                }
                if ticks == Some(passed) {
                    return;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for PhaseTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Every timer armed since the last phase entry.
///
/// Ticks are stamped with the epoch they were armed in; `cancel_all` aborts
/// the tasks and moves to a new epoch so ticks already queued in the channel
/// can be told apart from live ones.
#[derive(Debug)]
pub struct TimerSet {
    epoch: u64,
    armed: Vec<PhaseTimer>,
    loopback: Sender<Request>,
}

impl TimerSet {
    pub fn new(loopback: Sender<Request>) -> Self {
        Self { epoch: 0, armed: Vec::new(), loopback }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.epoch
    }

    pub fn cancel_all(&mut self) {
        self.armed.clear();
        self.epoch += 1;
    }

    /// `ticks` ticks, one per `period`, carrying `ticks - 1` down to 0.
    pub fn countdown(&mut self, ticks: u32, period: Duration, timer: TimerType) {
        if ticks == 0 {
            return;
        }
        self.arm(period, Some(ticks), timer);
    }

    pub fn every(&mut self, period: Duration, timer: TimerType) {
        self.arm(period, None, timer);
    }

    pub fn once(&mut self, delay: Duration, timer: TimerType) {
        self.arm(delay, Some(1), timer);
    }

    fn arm(&mut self, period: Duration, ticks: Option<u32>, timer: TimerType) {
        let t = PhaseTimer::spawn(period, ticks, timer, self.epoch, self.loopback.clone());
        self.armed.push(t);
    }
}
