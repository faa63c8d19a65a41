use super::{StepControl, StepDriver};
use crate::model::{Highlight, Outcome, StepStats};

/// Insertion sort. Every left-shift counts as one comparison and one swap
/// (a swap here is any relocation, not a two-element exchange), and the key
/// placement renders one extra frame even when nothing shifted. The failing
/// boundary comparison is not counted; `[2,1]` ends at comparisons=1,
/// swaps=1 and the on-screen totals rely on that.
pub(super) fn sort(
    bars: &mut [u32],
    stats: &mut StepStats,
    driver: &mut dyn StepDriver,
) -> Outcome {
    for i in 1..bars.len() {
        let key = bars[i];
        let mut j = i;
        while j > 0 && bars[j - 1] > key {
            stats.record_comparison();
            bars[j] = bars[j - 1];
            stats.record_swap();
            j -= 1;
            if driver.on_step(bars, Highlight::pair(j, i), stats) == StepControl::Cancel {
                return Outcome::Cancelled;
            }
        }
        bars[j] = key;
        if driver.on_step(bars, Highlight::pair(j, i), stats) == StepControl::Cancel {
            return Outcome::Cancelled;
        }
    }
    Outcome::Completed
}
