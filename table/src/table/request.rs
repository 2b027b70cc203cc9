#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerType {
    /// Advances the hands shown while waiting for lock-in.
    Cycle,
    LockIn,
    /// Fires once the wheel animation is over.
    Spin,
    Answer,
}

#[derive(Debug)]
pub enum Request {
    Player(protocol::PlayerRequest),

    /// `rest` counts down for countdown timers and is 0 for the others.
    Tick {
        timer: TimerType,
        epoch: u64,
        rest: u32,
    },

    Shutdown,
}
