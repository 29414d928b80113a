/// Fires at most once per interval of simulated time.
/// Used to pace progress logging independently of the frame rate.
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    interval: f32,
    elapsed: f32,
}

impl Throttled {
    /// First call to `try_tick` always fires
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: interval,
        }
    }

    /// Accumulate `delta`; true when a full interval has passed since the last fire
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        if self.elapsed < self.interval {
            return false;
        }

        // Carry the remainder so the cadence does not drift with frame rate
        self.elapsed = (self.elapsed - self.interval) % self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_fires() {
        let mut timer = Throttled::new(0.5);
        assert!(timer.try_tick(0.0));
        assert!(!timer.try_tick(0.1));
    }

    #[test]
    fn remainder_carries_over() {
        let mut timer = Throttled::new(0.5);
        assert!(timer.try_tick(0.0));
        assert!(!timer.try_tick(0.375));
        assert!(timer.try_tick(0.25)); // 0.625 elapsed, 0.125 carried
        assert!(!timer.try_tick(0.25));
        assert!(timer.try_tick(0.125));
    }

    #[test]
    fn long_stall_fires_once() {
        let mut timer = Throttled::new(0.5);
        assert!(timer.try_tick(0.0));
        assert!(timer.try_tick(10.0));
        assert!(!timer.try_tick(0.0));
    }
}
