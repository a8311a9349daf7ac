/// Fixed-period timer fed with elapsed time.
///
/// The game arms it when a round starts and cancels it when the round
/// stops; drivers only report how much time has passed.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: f64,
    accumulated: f64,
    armed: bool,
}

impl IntervalTimer {
    pub fn new(period: f64) -> Self {
        debug_assert!(period > 0.0, "timer period must be positive");
        Self {
            period,
            accumulated: 0.0,
            armed: false,
        }
    }

    /// Arms the timer. The first fire is one full period away.
    pub fn start(&mut self) {
        self.armed = true;
        self.accumulated = 0.0;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.accumulated = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Adds `elapsed` seconds and returns how many periods completed.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        if !self.armed || elapsed <= 0.0 {
            return 0;
        }
        self.accumulated += elapsed;
        let mut fires = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            fires += 1;
        }
        fires
    }
}
