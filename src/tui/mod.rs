use crate::cli::Cli;
use crate::engine::{self, StepControl, StepDriver};
use crate::model::{Highlight, Outcome, SortVariant, StepStats};
use crate::pacer::Pacer;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Terminal,
};
use std::{io, time::Duration};

const BAR_WIDTH: u16 = 2;
const BAR_GAP: u16 = 1;
const MIN_BARS: usize = 8;
const MAX_BARS: usize = 256;
/// Poll timeout while idle; keeps the status line responsive without spinning.
const IDLE_POLL: Duration = Duration::from_millis(50);
/// How long the sorted array stays on screen before reshuffling.
const COMPLETION_HOLD: Duration = Duration::from_millis(1500);

pub fn run(args: Cli) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    // Bar count comes from the terminal width once at startup, like a
    // window-sized constant; it does not track live resizes.
    let bar_count = terminal
        .size()
        .map(|size| ((size.width / (BAR_WIDTH + BAR_GAP)) as usize).clamp(MIN_BARS, MAX_BARS))
        .unwrap_or(64);

    let mut variant = args.algorithm;
    let mut bars = crate::cli::shuffled_bars(bar_count);
    let mut stats = StepStats::default();

    let res = loop {
        terminal
            .draw(|f| draw(f.area(), f, &bars, Highlight::NONE, &stats, variant))
            .ok();

        if event::poll(IDLE_POLL).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match (k.modifiers, k.code) {
                    (_, KeyCode::Char('q'))
                    | (_, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => break Ok(()),
                    (_, KeyCode::Char('1')) => variant = SortVariant::Bubble,
                    (_, KeyCode::Char('2')) => variant = SortVariant::Insertion,
                    (_, KeyCode::Char('3')) => variant = SortVariant::Quick,
                    (_, KeyCode::Char('4')) => variant = SortVariant::Merge,
                    (_, KeyCode::Char(' ')) => {
                        // Fresh counters per run; the engine leaves them
                        // frozen at their final values afterwards.
                        stats.reset();
                        let outcome = {
                            let mut driver = TuiDriver {
                                terminal: &mut terminal,
                                pacer: Pacer::animation(),
                                variant,
                            };
                            engine::run(variant, &mut bars, &mut stats, &mut driver)
                        };
                        match outcome {
                            Outcome::Completed => {
                                std::thread::sleep(COMPLETION_HOLD);
                                bars = crate::cli::shuffled_bars(bar_count);
                                stats.reset();
                            }
                            Outcome::Cancelled | Outcome::ScratchAllocationFailed => break Ok(()),
                        }
                    }
                    _ => {}
                }
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

/// Renders one frame per step, paces it, then drains pending input looking
/// for a quit request. Runs on the same thread as the engine; the only
/// suspension is the pacer's blocking delay.
struct TuiDriver<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<io::Stdout>>,
    pacer: Pacer,
    variant: SortVariant,
}

impl StepDriver for TuiDriver<'_> {
    fn on_step(&mut self, bars: &[u32], highlight: Highlight, stats: &StepStats) -> StepControl {
        self.terminal
            .draw(|f| draw(f.area(), f, bars, highlight, stats, self.variant))
            .ok();
        self.pacer.pace_step();
        poll_quit()
    }

    fn on_reveal(&mut self, bars: &[u32], index: usize, stats: &StepStats) -> StepControl {
        self.terminal
            .draw(|f| draw(f.area(), f, bars, Highlight::single(index), stats, self.variant))
            .ok();
        self.pacer.pace_reveal();
        poll_quit()
    }

    fn on_settled(&mut self, bars: &[u32], stats: &StepStats) {
        self.terminal
            .draw(|f| draw(f.area(), f, bars, Highlight::NONE, stats, self.variant))
            .ok();
    }
}

/// Non-blocking drain of pending input. Only quit keys matter mid-run;
/// algorithm switches are ignored until the run ends.
fn poll_quit() -> StepControl {
    while event::poll(Duration::ZERO).unwrap_or(false) {
        if let Ok(Event::Key(k)) = event::read() {
            if k.kind != KeyEventKind::Press {
                continue;
            }
            match (k.modifiers, k.code) {
                (_, KeyCode::Char('q'))
                | (_, KeyCode::Esc)
                | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return StepControl::Cancel,
                _ => {}
            }
        }
    }
    StepControl::Continue
}

fn draw(
    area: Rect,
    f: &mut ratatui::Frame,
    bars: &[u32],
    highlight: Highlight,
    stats: &StepStats,
    variant: SortVariant,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    let status = Line::from(vec![
        Span::styled("Alg: ", Style::default().fg(Color::Gray)),
        Span::raw(variant.label()),
        Span::raw(format!("   Bars: {}", bars.len())),
        Span::raw(format!("   Comparisons: {}", stats.comparisons)),
        Span::raw(format!("   Swaps: {}", stats.swaps)),
        Span::styled(
            "   [1-4] algorithm  [space] sort  [q] quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(status), rows[0]);

    let cells: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let color = if highlight.contains(i) {
                Color::Red
            } else {
                Color::White
            };
            Bar::default()
                .value(u64::from(v))
                .style(Style::default().fg(color))
                .text_value(String::new())
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&cells))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(bars.len() as u64);
    f.render_widget(chart, rows[1]);
}
