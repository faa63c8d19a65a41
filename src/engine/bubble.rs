use super::{StepControl, StepDriver};
use crate::model::{Highlight, Outcome, StepStats};

/// Classic double-loop bubble sort. One comparison per inner iteration,
/// swap when the left neighbour is larger, one frame per comparison whether
/// or not a swap happened.
pub(super) fn sort(
    bars: &mut [u32],
    stats: &mut StepStats,
    driver: &mut dyn StepDriver,
) -> Outcome {
    let n = bars.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            stats.record_comparison();
            if bars[j] > bars[j + 1] {
                bars.swap(j, j + 1);
                stats.record_swap();
            }
            if driver.on_step(bars, Highlight::pair(j, j + 1), stats) == StepControl::Cancel {
                return Outcome::Cancelled;
            }
        }
    }
    Outcome::Completed
}

#[cfg(test)]
mod tests {
    use super::super::harness::RecordingDriver;
    use super::*;

    #[test]
    fn hand_traced_three_element_run() {
        // i=0: (3,1) swap, (3,2) swap; i=1: (1,2) no swap.
        let mut bars = vec![3, 1, 2];
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::new();

        let outcome = sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(bars, vec![1, 2, 3]);
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.swaps, 2);

        let highlights: Vec<_> = driver.steps.iter().map(|f| f.highlight).collect();
        assert_eq!(
            highlights,
            vec![
                Highlight::pair(0, 1),
                Highlight::pair(1, 2),
                Highlight::pair(0, 1),
            ]
        );
        // One frame per comparison, nothing batched or skipped.
        assert_eq!(driver.steps.len() as u64, stats.comparisons);
    }

    #[test]
    fn already_sorted_input_swaps_nothing() {
        let mut bars = vec![1, 2, 3, 4];
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::new();

        sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(stats.comparisons, 6);
        assert_eq!(stats.swaps, 0);
        assert_eq!(bars, vec![1, 2, 3, 4]);
    }

    #[test]
    fn cancel_on_first_step_leaves_counters_frozen() {
        let mut bars = vec![3, 1, 2];
        let mut stats = StepStats::default();
        let mut driver = RecordingDriver::cancel_at(1);

        let outcome = sort(&mut bars, &mut stats, &mut driver);

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(stats.comparisons, 1);
        assert_eq!(stats.swaps, 1);
        assert_eq!(driver.steps.len(), 1);
    }
}
