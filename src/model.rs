use clap::ValueEnum;
use std::fmt;

/// Which sorting algorithm a run animates. Chosen before a run starts and
/// held fixed for its duration; the idle loop is the only place it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortVariant {
    Bubble,
    Insertion,
    Quick,
    Merge,
}

impl SortVariant {
    pub fn label(self) -> &'static str {
        match self {
            SortVariant::Bubble => "Bubble Sort",
            SortVariant::Insertion => "Insertion Sort",
            SortVariant::Quick => "Quick Sort",
            SortVariant::Merge => "Merge Sort",
        }
    }

    /// CLI value name, matching the `ValueEnum` derivation.
    fn as_arg(self) -> &'static str {
        match self {
            SortVariant::Bubble => "bubble",
            SortVariant::Insertion => "insertion",
            SortVariant::Quick => "quick",
            SortVariant::Merge => "merge",
        }
    }

    pub fn all() -> [SortVariant; 4] {
        [
            SortVariant::Bubble,
            SortVariant::Insertion,
            SortVariant::Quick,
            SortVariant::Merge,
        ]
    }
}

impl fmt::Display for SortVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Comparison/swap counters threaded by `&mut` through a whole run,
/// including every recursive call. Zeroed by the run owner before a run.
///
/// "Swap" deliberately means any element relocation, not a true two-element
/// exchange: insertion counts each left-shift and merge counts each
/// right-side pick. The on-screen numbers depend on that convention.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    pub comparisons: u64,
    pub swaps: u64,
}

impl StepStats {
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    pub fn reset(&mut self) {
        *self = StepStats::default();
    }
}

/// Up to two bar indices involved in the current step. Recomputed every
/// step, never persisted. Merge's scan cursors are recorded post-advance,
/// so an index may sit one past its range; it then matches no bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub a: Option<usize>,
    pub b: Option<usize>,
}

impl Highlight {
    pub const NONE: Highlight = Highlight { a: None, b: None };

    pub fn pair(a: usize, b: usize) -> Self {
        Highlight {
            a: Some(a),
            b: Some(b),
        }
    }

    pub fn single(i: usize) -> Self {
        Highlight {
            a: Some(i),
            b: None,
        }
    }

    pub fn contains(self, index: usize) -> bool {
        self.a == Some(index) || self.b == Some(index)
    }
}

/// How a run ended. `Cancelled` and `ScratchAllocationFailed` are treated
/// identically by callers: stop the run, skip the reveal sweep, leave the
/// array and counters as they stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
    ScratchAllocationFailed,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        matches!(self, Outcome::Completed)
    }
}
