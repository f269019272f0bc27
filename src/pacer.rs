//! Frame pacing.
//!
//! Every frame sleeps for the current sleep duration. Every `fix_frames`
//! frames the real elapsed time is measured and the sleep is shortened when
//! those frames ran slower than the target. It is never lengthened past the
//! nominal per-frame interval.

use std::thread;
use std::time::{Duration, Instant};

const INITIAL_SLEEP_MS: f32 = 16.0;

pub trait Clock {
    /// Monotonic whole milliseconds since an arbitrary origin.
    fn now_ms(&self) -> u64;

    /// Block the calling thread.
    fn sleep(&mut self, duration: Duration);
}

pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PacerSettings {
    pub target_fps: u32,
    /// Measurements per second.
    pub fix_time_ratio: u32,
}

impl PacerSettings {
    /// Nominal per-frame interval in milliseconds.
    pub fn sleep_time(&self) -> f32 {
        1000.0 / self.target_fps.max(1) as f32
    }

    /// Frames per measurement window.
    pub fn fix_frames(&self) -> u32 {
        (self.target_fps / self.fix_time_ratio.max(1)).max(1)
    }
}

impl Default for PacerSettings {
    fn default() -> Self {
        PacerSettings {
            target_fps: 60,
            fix_time_ratio: 10,
        }
    }
}

/// Sleep duration for the next window given how long the last one took.
pub fn recompute_sleep(sleep_time: f32, fix_frames: u32, elapsed_ms: u64) -> f32 {
    if elapsed_ms == 0 {
        return sleep_time;
    }
    let adjusted = sleep_time * (sleep_time * fix_frames as f32) / elapsed_ms as f32;
    if adjusted >= sleep_time {
        sleep_time
    } else {
        adjusted
    }
}

/// `NN.NNN`, each digit truncated independently.
pub fn format_sleep_time(ms: f32) -> String {
    let digit = |scaled: f32| char::from(b'0' + ((scaled as u32) % 10) as u8);
    let mut s = String::with_capacity(6);
    s.push(digit(ms / 10.0));
    s.push(digit(ms));
    s.push('.');
    s.push(digit(ms * 10.0));
    s.push(digit(ms * 100.0));
    s.push(digit(ms * 1000.0));
    s
}

pub struct FramePacer<C: Clock = SystemClock> {
    clock: C,
    sleep_time: f32,
    fix_frames: u32,
    frame_count: u32,
    window_start: u64,
    sleep_ms: f32,
}

impl<C: Clock> FramePacer<C> {
    pub fn new(settings: PacerSettings, clock: C) -> FramePacer<C> {
        let window_start = clock.now_ms();
        FramePacer {
            clock,
            sleep_time: settings.sleep_time(),
            fix_frames: settings.fix_frames(),
            frame_count: 0,
            window_start,
            sleep_ms: INITIAL_SLEEP_MS,
        }
    }

    /// Current per-frame sleep in milliseconds.
    pub fn sleep_ms(&self) -> f32 {
        self.sleep_ms
    }

    pub fn sleep_time(&self) -> f32 {
        self.sleep_time
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Call once per frame.
    pub fn tick(&mut self) {
        self.frame_count += 1;
        self.clock
            .sleep(Duration::from_secs_f32(self.sleep_ms / 1000.0));

        if self.frame_count >= self.fix_frames {
            let now = self.clock.now_ms();
            let elapsed = now.saturating_sub(self.window_start);
            self.sleep_ms = recompute_sleep(self.sleep_time, self.fix_frames, elapsed);
            tracing::debug!(elapsed_ms = elapsed, sleep_ms = self.sleep_ms, "pacer adjusted");
            self.window_start = now;
            self.frame_count = 0;
        }
    }
}
