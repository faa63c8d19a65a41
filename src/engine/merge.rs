use super::{StepControl, StepDriver};
use crate::model::{Highlight, Outcome, StepStats};

/// Top-down merge sort over one shared scratch buffer of size N. The
/// buffer is acquired once per run; a failed acquisition aborts before any
/// array mutation and the buffer is released by scope on every exit path.
pub(super) fn sort(
    bars: &mut [u32],
    stats: &mut StepStats,
    driver: &mut dyn StepDriver,
) -> Outcome {
    if bars.len() < 2 {
        return Outcome::Completed;
    }

    let mut scratch: Vec<u32> = Vec::new();
    if scratch.try_reserve_exact(bars.len()).is_err() {
        return Outcome::ScratchAllocationFailed;
    }
    scratch.resize(bars.len(), 0);

    sort_range(bars, 0, bars.len() - 1, &mut scratch, stats, driver)
}

/// Merge counting convention: one comparison per compared pair, `<=` favors
/// the left side and costs nothing, a right-side pick counts as a swap (an
/// out-of-order relocation, not a literal exchange). Every written output
/// position renders with the two post-advance scan cursors; drain and
/// copy-back frames highlight the single index just written.
fn sort_range(
    bars: &mut [u32],
    left: usize,
    right: usize,
    scratch: &mut [u32],
    stats: &mut StepStats,
    driver: &mut dyn StepDriver,
) -> Outcome {
    if left >= right {
        return Outcome::Completed;
    }

    let mid = left + (right - left) / 2;
    match sort_range(bars, left, mid, scratch, stats, driver) {
        Outcome::Completed => {}
        aborted => return aborted,
    }
    match sort_range(bars, mid + 1, right, scratch, stats, driver) {
        Outcome::Completed => {}
        aborted => return aborted,
    }

    let mut i = left;
    let mut j = mid + 1;
    let mut k = left;

    while i <= mid && j <= right {
        stats.record_comparison();
        if bars[i] <= bars[j] {
            scratch[k] = bars[i];
            i += 1;
        } else {
            scratch[k] = bars[j];
            j += 1;
            stats.record_swap();
        }
        k += 1;
        if driver.on_step(bars, Highlight::pair(i, j), stats) == StepControl::Cancel {
            return Outcome::Cancelled;
        }
    }

    while i <= mid {
        scratch[k] = bars[i];
        i += 1;
        k += 1;
        if driver.on_step(bars, Highlight::single(i - 1), stats) == StepControl::Cancel {
            return Outcome::Cancelled;
        }
    }

    while j <= right {
        scratch[k] = bars[j];
        j += 1;
        k += 1;
        if driver.on_step(bars, Highlight::single(j - 1), stats) == StepControl::Cancel {
            return Outcome::Cancelled;
        }
    }

    for x in left..=right {
        bars[x] = scratch[x];
        if driver.on_step(bars, Highlight::single(x), stats) == StepControl::Cancel {
            return Outcome::Cancelled;
        }
    }

    Outcome::Completed
}

#[cfg(test)]
mod tests {
    use super::super::harness::{is_sorted, same_multiset, RecordingDriver};
    use super::*;

    #[test]
    fn equal_elements_pick_the_left_side_without_a_swap() {
        // The app only feeds permutations, but the `<=` tie-break must hold.
        let mut bars = vec![1, 1];
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::new();

        let outcome = sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(bars, vec![1, 1]);
        assert_eq!(stats.comparisons, 1);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn right_side_pick_counts_as_a_relocation() {
        let mut bars = vec![2, 1];
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::new();

        let outcome = sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(bars, vec![1, 2]);
        assert_eq!(stats.comparisons, 1);
        assert_eq!(stats.swaps, 1);
        // Merge frame, left drain frame, two copy-back frames.
        assert_eq!(driver.steps.len(), 4);
        let highlights: Vec<_> = driver.steps.iter().map(|f| f.highlight).collect();
        assert_eq!(
            highlights,
            vec![
                Highlight::pair(0, 2),
                Highlight::single(0),
                Highlight::single(0),
                Highlight::single(1),
            ]
        );
    }

    #[test]
    fn sorts_a_longer_permutation() {
        let input = [5u32, 8, 1, 3, 7, 2, 6, 4];
        let mut bars = input.to_vec();
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::new();

        let outcome = sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(outcome, Outcome::Completed);
        assert!(is_sorted(&bars));
        assert!(same_multiset(&bars, &input));
    }

    #[test]
    fn cancellation_aborts_before_the_sibling_recursion() {
        let input = [5u32, 8, 1, 3, 7, 2, 6, 4];
        let mut bars = input.to_vec();
        let mut stats = StepStats::default();
        // Steps 1-2 of the first merge write scratch only; the array is
        // still untouched when the run unwinds.
        let mut driver = RecordingDriver::cancel_at(2);

        let outcome = sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(driver.steps.len(), 2);
        assert_eq!(bars, input.to_vec());
        assert!(same_multiset(&bars, &input));
    }

    #[test]
    fn cancelling_during_copy_back_leaves_a_partial_segment() {
        // [2,1]: frame 1 merges into scratch, frame 2 drains the left run,
        // frame 3 is the first copy-back write. Quitting there leaves the
        // merged value duplicated over the unwritten tail, the same partial
        // state the on-screen animation freezes on.
        let mut bars = vec![2, 1];
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::cancel_at(3);

        let outcome = sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(driver.steps.len(), 3);
        assert_eq!(bars, vec![1, 1]);
    }

    #[test]
    fn single_element_needs_no_scratch_buffer() {
        let mut bars = vec![42];
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::new();

        assert_eq!(sort(&mut bars, &mut stats, &mut driver), Outcome::Completed);
        assert!(driver.steps.is_empty());
    }
}
