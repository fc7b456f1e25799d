//! Shared utilities

use std::collections::VecDeque;
use std::time::Instant;

/// Deterministic xorshift64 generator for the gradient noise effects.
/// Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) } // xorshift is stuck at zero
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Random i32 in [min, max]; returns `min` for an empty range
    #[inline]
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let range = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (self.next_u64() % range) as i64) as i32
    }
}

// ============================================================================
// Frame timing
// ============================================================================

/// Rolling-average FPS counter for the demo loop
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
}

impl FpsCounter {
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count: sample_count.max(1),
        }
    }

    /// Record a frame. Returns (delta_time, average_fps)
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }

        let avg_dt = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        let avg_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
        (dt, avg_fps)
    }

    pub fn frame_count(&self) -> usize {
        self.frame_times.len()
    }
}
