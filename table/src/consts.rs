use tokio::time::Duration;

pub const ROUND_SECS: u16 = 90;
pub const LOCKIN_SECS: u8 = 5;

pub const TICK: Duration = Duration::from_secs(1);
pub const CYCLE_INTERVAL: Duration = Duration::from_millis(250);
pub const SPIN_DURATION: Duration = Duration::from_secs(6);

pub const MIN_SPINS: u32 = 8;
pub const MAX_SPINS: u32 = 12;

// Degrees.
pub const SEGMENT_ARC: f64 = 90.0;
pub const POINTER_OFFSET: f64 = 90.0;
pub const SNAP_TOLERANCE: f64 = 0.5;

pub const CHANNEL_SIZE: usize = 32;
