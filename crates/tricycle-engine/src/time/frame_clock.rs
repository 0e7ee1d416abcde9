use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Aggregate over the last reporting window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    /// Frames presented so far, including this window.
    pub total_frames: u64,

    /// Mean interval between frames in the window.
    pub avg_interval: Duration,
}

impl FrameReport {
    pub fn fps(&self) -> f64 {
        let secs = self.avg_interval.as_secs_f64();
        if secs > 0.0 { 1.0 / secs } else { 0.0 }
    }
}

/// Frame clock producing `FrameTime` snapshots and periodic `FrameReport`s.
///
/// Delta time is clamped to avoid pathological values when the process is
/// paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    report_every: u64,
    window_start: Instant,
    reported_at: u64,
}

impl FrameClock {
    /// Frames between two reports.
    pub const DEFAULT_REPORT_EVERY: u64 = 300;

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose baseline is `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last: start,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            report_every: Self::DEFAULT_REPORT_EVERY,
            window_start: start,
            reported_at: 0,
        }
    }

    /// Sets how many frames make up one reporting window (1 to `u32::MAX`).
    pub fn with_report_every(mut self, frames: u64) -> Self {
        self.report_every = frames.clamp(1, u64::from(u32::MAX));
        self
    }

    /// Number of ticks so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Returns a report when the last tick closed a reporting window.
    ///
    /// Call right after `tick`/`tick_at`.
    pub fn take_report(&mut self) -> Option<FrameReport> {
        if self.frame_index == self.reported_at || self.frame_index % self.report_every != 0 {
            return None;
        }

        let elapsed = self.last.saturating_duration_since(self.window_start);
        self.window_start = self.last;
        self.reported_at = self.frame_index;

        Some(FrameReport {
            total_frames: self.frame_index,
            avg_interval: elapsed / u32::try_from(self.report_every).unwrap_or(u32::MAX),
        })
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_from_zero() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        assert_eq!(clock.tick_at(start + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(clock.tick_at(start + Duration::from_millis(32)).frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn dt_is_clamped_after_stall() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(ft.dt, 0.25);
    }

    #[test]
    fn dt_has_a_floor() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(start);
        assert!(ft.dt > 0.0);
    }

    #[test]
    fn report_after_each_window() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start).with_report_every(4);

        for i in 1..=3 {
            clock.tick_at(start + Duration::from_millis(10 * i));
            assert!(clock.take_report().is_none());
        }

        clock.tick_at(start + Duration::from_millis(40));
        let report = clock.take_report().expect("window closed");
        assert_eq!(report.total_frames, 4);
        assert_eq!(report.avg_interval, Duration::from_millis(10));
        assert!((report.fps() - 100.0).abs() < 1e-6);
        assert!(clock.take_report().is_none());

        // Next window starts at the previous boundary.
        for i in 5..=8 {
            clock.tick_at(start + Duration::from_millis(40 + 20 * (i - 4)));
        }
        let report = clock.take_report().expect("second window closed");
        assert_eq!(report.total_frames, 8);
        assert_eq!(report.avg_interval, Duration::from_millis(20));
    }

    #[test]
    fn oversized_window_is_clamped_and_still_reports() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start).with_report_every(1 << 32);
        assert_eq!(clock.report_every, u64::from(u32::MAX));

        clock.frame_index = u64::from(u32::MAX) - 1;
        clock.tick_at(start + Duration::from_secs(1));

        let report = clock.take_report().expect("window closed");
        assert_eq!(report.total_frames, u64::from(u32::MAX));
    }
}
