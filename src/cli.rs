use crate::engine::{self, StepControl, StepDriver};
use crate::model::{Highlight, Outcome, SortVariant, StepStats};
use anyhow::Result;
use clap::Parser;
use rand::seq::SliceRandom;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "sortscope",
    version,
    about = "Animated terminal visualizer for classic sorting algorithms"
)]
pub struct Cli {
    /// Algorithm selected at launch (switchable with keys 1-4 in the TUI)
    #[arg(long, value_enum, default_value_t = SortVariant::Bubble)]
    pub algorithm: SortVariant,

    /// Run one sort without animation and print a summary (no TUI)
    #[arg(long)]
    pub text: bool,
}

pub fn run(args: Cli) -> Result<()> {
    if !args.text {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(args);
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_text(args);
        }
    }

    run_text(args)
}

/// Build a freshly shuffled permutation of 1..=n. Reshuffling between runs
/// is always the caller's job; the engine never does it.
pub fn shuffled_bars(n: usize) -> Vec<u32> {
    let mut bars: Vec<u32> = (1..=n as u32).collect();
    bars.shuffle(&mut rand::thread_rng());
    bars
}

/// Bar count for the headless mode, where no terminal width is available.
const TEXT_MODE_BARS: usize = 64;

/// Driver that consumes steps without rendering or pacing.
struct HeadlessDriver;

impl StepDriver for HeadlessDriver {
    fn on_step(&mut self, _bars: &[u32], _highlight: Highlight, _stats: &StepStats) -> StepControl {
        StepControl::Continue
    }

    fn on_reveal(&mut self, _bars: &[u32], _index: usize, _stats: &StepStats) -> StepControl {
        StepControl::Continue
    }
}

fn run_text(args: Cli) -> Result<()> {
    let mut bars = shuffled_bars(TEXT_MODE_BARS);
    let mut stats = StepStats::default();

    match engine::run(args.algorithm, &mut bars, &mut stats, &mut HeadlessDriver) {
        Outcome::Completed => {
            println!("Algorithm:   {}", args.algorithm.label());
            println!("Bars:        {}", bars.len());
            println!("Comparisons: {}", stats.comparisons);
            println!("Swaps:       {}", stats.swaps);
            Ok(())
        }
        Outcome::Cancelled => Err(anyhow::anyhow!("sort run cancelled")),
        Outcome::ScratchAllocationFailed => {
            Err(anyhow::anyhow!("failed to allocate merge scratch buffer"))
        }
    }
}
