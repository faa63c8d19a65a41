use super::{StepControl, StepDriver};
use crate::model::{Highlight, Outcome, StepStats};

/// Recursive quicksort with a Lomuto partition around the last element.
/// Range bounds are `isize` because the left recursion can reach one below
/// the range start.
pub(super) fn sort(
    bars: &mut [u32],
    stats: &mut StepStats,
    driver: &mut dyn StepDriver,
) -> Outcome {
    if bars.len() < 2 {
        return Outcome::Completed;
    }
    sort_range(bars, 0, bars.len() as isize - 1, stats, driver)
}

/// One comparison per scanned element, one swap per move into the less-than
/// partition plus the terminal pivot swap, each followed by a frame
/// highlighting the scanned index and the pivot. Cancellation propagates up
/// through the child outcomes; the right branch never starts once flagged.
fn sort_range(
    bars: &mut [u32],
    low: isize,
    high: isize,
    stats: &mut StepStats,
    driver: &mut dyn StepDriver,
) -> Outcome {
    if low >= high {
        return Outcome::Completed;
    }

    let pivot = bars[high as usize];
    let mut i = low - 1;
    for j in low..high {
        stats.record_comparison();
        if bars[j as usize] < pivot {
            i += 1;
            bars.swap(i as usize, j as usize);
            stats.record_swap();
        }
        if driver.on_step(bars, Highlight::pair(j as usize, high as usize), stats)
            == StepControl::Cancel
        {
            return Outcome::Cancelled;
        }
    }

    bars.swap((i + 1) as usize, high as usize);
    stats.record_swap();
    if driver.on_step(bars, Highlight::pair((i + 1) as usize, high as usize), stats)
        == StepControl::Cancel
    {
        return Outcome::Cancelled;
    }

    match sort_range(bars, low, i, stats, driver) {
        Outcome::Completed => {}
        aborted => return aborted,
    }
    sort_range(bars, i + 2, high, stats, driver)
}
