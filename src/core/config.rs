use std::time::Duration;

pub const EPSILON: f32 = 1e-5;
pub const EPSILON_F64: f64 = 1e-9;

// GJK gives up after 2 * (|A| + |B|) + GJK_EXTRA_ITERATIONS support points.
pub const GJK_EXTRA_ITERATIONS: usize = 16;
// 4 Hz; GJK must never run on every upstream change.
pub const DEFAULT_GJK_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(20);
pub const WARN_THROTTLE_SECONDS: u64 = 5;
