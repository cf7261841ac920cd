//! Scene-time clock for the frame loop.
//!
//! Host-driven: the embedding loop calls `tick(dt)` with real seconds and the
//! clock accumulates scene time, applying pause and time-scale. Keeping the
//! clock free of wall-time reads makes the whole core runnable from a test
//! harness without a live render loop.

/// Accumulates scene time across frame ticks.
#[derive(Debug, Clone)]
pub struct SceneClock {
    /// Elapsed scene time in scene seconds.
    elapsed: f64,
    /// Scene seconds advanced per real second (1.0 = real time).
    time_scale: f64,
    /// When paused, ticks advance nothing.
    paused: bool,
    /// Frames ticked since creation.
    frame_count: u64,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            time_scale: 1.0,
            paused: false,
            frame_count: 0,
        }
    }

    /// Advance by `dt` real seconds. Negative deltas are ignored.
    pub fn tick(&mut self, dt: f64) {
        self.frame_count += 1;
        if !self.paused && dt > 0.0 {
            self.elapsed += dt * self.time_scale;
        }
    }

    /// Elapsed scene time in scene seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Set the time scale (clamped to be non-negative).
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates_scaled_time() {
        let mut clock = SceneClock::new();
        clock.set_time_scale(2.0);
        for _ in 0..60 {
            clock.tick(1.0 / 60.0);
        }
        assert!((clock.elapsed() - 2.0).abs() < 1e-9);
        assert_eq!(clock.frame_count(), 60);
    }

    #[test]
    fn paused_clock_holds_still() {
        let mut clock = SceneClock::new();
        clock.tick(0.5);
        clock.set_paused(true);
        clock.tick(0.5);
        assert!((clock.elapsed() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn negative_delta_ignored() {
        let mut clock = SceneClock::new();
        clock.tick(-1.0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
