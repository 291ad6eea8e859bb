use std::time::{Duration, Instant};

use crate::consts::FIXED_TIMESTEP;

/// Wall-clock time between consecutive frames.
pub struct FrameTimer {
    last: Instant,
    pub dt: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: Duration::ZERO,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last);
        self.last = now;
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-timestep accumulator.
///
/// Frame time goes in, whole steps come out. Whatever is left below one step
/// stays in the accumulator for the next frame; nothing is ever dropped and no
/// partial step is ever produced. Time is kept as [`Duration`] so the
/// bookkeeping is exact.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> Self {
        debug_assert!(!step.is_zero(), "timestep must be positive");
        Self {
            step,
            accumulator: Duration::ZERO,
        }
    }

    /// Add `elapsed` and drain as many whole steps as it now covers.
    /// Returns the number of steps the caller must simulate.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Step length handed to entity updates.
    pub fn step_seconds(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Carried-over time, always in `[0, step)` after `advance`.
    pub fn remainder(&self) -> Duration {
        self.accumulator
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_TIMESTEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_frames_accumulate() {
        let mut clock = FixedTimestep::new(Duration::from_millis(10));
        assert_eq!(clock.advance(Duration::from_millis(4)), 0);
        assert_eq!(clock.advance(Duration::from_millis(4)), 0);
        assert_eq!(clock.advance(Duration::from_millis(4)), 1);
        assert_eq!(clock.remainder(), Duration::from_millis(2));
    }

    #[test]
    fn test_long_frame_runs_several_steps() {
        let mut clock = FixedTimestep::new(Duration::from_millis(10));
        assert_eq!(clock.advance(Duration::from_millis(35)), 3);
        assert_eq!(clock.remainder(), Duration::from_millis(5));
        assert_eq!(clock.advance(Duration::from_millis(5)), 1);
        assert_eq!(clock.remainder(), Duration::ZERO);
    }

    #[test]
    fn test_default_is_sixty_hertz() {
        let clock = FixedTimestep::default();
        assert!((clock.step_seconds() - 1.0 / 60.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn test_steps_match_total_time(frames in proptest::collection::vec(0u64..100_000_000, 0..64)) {
            let mut clock = FixedTimestep::default();
            let step = clock.step().as_nanos() as u64;
            let mut steps = 0u64;
            let mut total = 0u64;
            for nanos in frames {
                total += nanos;
                steps += u64::from(clock.advance(Duration::from_nanos(nanos)));
                prop_assert!(clock.remainder() < clock.step());
            }
            prop_assert_eq!(steps, total / step);
            prop_assert_eq!(clock.remainder().as_nanos() as u64, total % step);
        }
    }
}
