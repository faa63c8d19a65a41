//! Step-driven sorting engine.
//!
//! Each algorithm mutates the bar array one elementary comparison (and
//! possibly one relocation) at a time and reports every step to a
//! [`StepDriver`], which renders a frame, paces the animation and polls for
//! cancellation. The algorithms themselves never touch a terminal, so they
//! are testable with a recording driver and no graphics context.

mod bubble;
mod insertion;
mod merge;
mod quick;

use crate::model::{Highlight, Outcome, SortVariant, StepStats};

/// Verdict returned from every driver callback. `Cancel` is the point where
/// the engine observes a pending quit request; all in-flight recursive calls
/// unwind without further mutation or rendering once it is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepControl {
    Continue,
    Cancel,
}

/// Consumer of the engine's step sequence. The TUI implementation draws a
/// frame, sleeps the pacing delay and drains pending input; the headless
/// implementation does nothing.
pub trait StepDriver {
    /// Called exactly once after every elementary step, with the indices
    /// involved in that step and the counters as of that step.
    fn on_step(&mut self, bars: &[u32], highlight: Highlight, stats: &StepStats) -> StepControl;

    /// Called once per index during the closing reveal sweep. Cosmetic
    /// confirmation only; the array is already sorted.
    fn on_reveal(&mut self, bars: &[u32], index: usize, stats: &StepStats) -> StepControl;

    /// Final frame after the reveal sweep, nothing highlighted.
    fn on_settled(&mut self, _bars: &[u32], _stats: &StepStats) {}
}

/// Run one sort to completion or cancellation. The caller owns the array and
/// zeroes `stats` beforehand; the engine mutates the array in place and
/// leaves it as-is on a non-`Completed` outcome.
pub fn run(
    variant: SortVariant,
    bars: &mut [u32],
    stats: &mut StepStats,
    driver: &mut dyn StepDriver,
) -> Outcome {
    let inner = match variant {
        SortVariant::Bubble => bubble::sort(bars, stats, driver),
        SortVariant::Insertion => insertion::sort(bars, stats, driver),
        SortVariant::Quick => quick::sort(bars, stats, driver),
        SortVariant::Merge => merge::sort(bars, stats, driver),
    };
    if !inner.is_completed() {
        return inner;
    }

    // Reveal sweep: highlight each bar once, in order. Skippable by a quit
    // request like any other step.
    for i in 0..bars.len() {
        if driver.on_reveal(bars, i, stats) == StepControl::Cancel {
            return Outcome::Cancelled;
        }
    }
    driver.on_settled(bars, stats);
    Outcome::Completed
}

#[cfg(test)]
pub(crate) mod harness {
    use super::*;

    pub(crate) struct FrameRecord {
        pub highlight: Highlight,
        pub comparisons: u64,
        pub swaps: u64,
    }

    /// Records every frame the engine emits; optionally cancels on the n-th
    /// `on_step` call (1-based).
    pub(crate) struct RecordingDriver {
        pub steps: Vec<FrameRecord>,
        pub reveals: Vec<usize>,
        pub settled: usize,
        pub cancel_at_step: Option<usize>,
    }

    impl RecordingDriver {
        pub fn new() -> Self {
            RecordingDriver {
                steps: Vec::new(),
                reveals: Vec::new(),
                settled: 0,
                cancel_at_step: None,
            }
        }

        pub fn cancel_at(step: usize) -> Self {
            RecordingDriver {
                cancel_at_step: Some(step),
                ..RecordingDriver::new()
            }
        }
    }

    impl StepDriver for RecordingDriver {
        fn on_step(
            &mut self,
            _bars: &[u32],
            highlight: Highlight,
            stats: &StepStats,
        ) -> StepControl {
            self.steps.push(FrameRecord {
                highlight,
                comparisons: stats.comparisons,
                swaps: stats.swaps,
            });
            match self.cancel_at_step {
                Some(n) if self.steps.len() >= n => StepControl::Cancel,
                _ => StepControl::Continue,
            }
        }

        fn on_reveal(&mut self, _bars: &[u32], index: usize, _stats: &StepStats) -> StepControl {
            self.reveals.push(index);
            StepControl::Continue
        }

        fn on_settled(&mut self, _bars: &[u32], _stats: &StepStats) {
            self.settled += 1;
        }
    }

    pub(crate) fn is_sorted(bars: &[u32]) -> bool {
        bars.windows(2).all(|w| w[0] <= w[1])
    }

    pub(crate) fn same_multiset(a: &[u32], b: &[u32]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}
