use std::thread;
use std::time::Duration;

const STEP_DELAY: Duration = Duration::from_millis(10);
const REVEAL_DELAY: Duration = Duration::from_millis(15);

/// Fixed inter-step delay so the animation stays visible at human scale.
/// Reveal-sweep frames get a slightly longer hold. Pure blocking delay,
/// no state, no failure mode.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    step: Duration,
    reveal: Duration,
}

impl Pacer {
    pub fn animation() -> Self {
        Pacer {
            step: STEP_DELAY,
            reveal: REVEAL_DELAY,
        }
    }

    pub fn pace_step(&self) {
        thread::sleep(self.step);
    }

    pub fn pace_reveal(&self) {
        thread::sleep(self.reveal);
    }
}
