use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;
use vortex_lattice::engine::progress::{Progress, ProgressCallback};

const SPINNER_TICK_MS: u64 = 100;
const SPINNER_TEMPLATE: &str = "{spinner:.green} {prefix:.bold} {msg}";
const SWEEP_TEMPLATE: &str = "  {prefix:.bold} [{bar:32.cyan/blue}] {pos}/{len} angles {msg}";

/// Draws workflow phases as a spinner and the angle-of-attack sweep as a bar.
///
/// `ProgressBar` is a shared handle, so every callback handed out drives the same bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::on(ProgressDrawTarget::stderr())
    }

    /// A handler that draws nothing.
    pub fn hidden() -> Self {
        Self::on(ProgressDrawTarget::hidden())
    }

    /// Draws on stderr unless `--quiet` was given.
    pub fn for_terminal(quiet: bool) -> Self {
        if quiet { Self::hidden() } else { Self::new() }
    }

    fn on(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target).with_style(spinner_style());
        Self { bar }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event| apply(&bar, event))
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(bar: &ProgressBar, event: Progress) {
    match event {
        Progress::PhaseStart { name } => {
            bar.reset();
            bar.set_style(spinner_style());
            bar.set_prefix(name);
            bar.set_message("");
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
        Progress::TaskStart { total_steps } => {
            bar.disable_steady_tick();
            bar.set_style(sweep_style());
            bar.set_length(total_steps);
            bar.set_position(0);
        }
        Progress::TaskIncrement => bar.inc(1),
        Progress::TaskFinish => {
            if let Some(len) = bar.length() {
                bar.set_position(len);
            }
        }
        Progress::PhaseFinish => {
            bar.disable_steady_tick();
            bar.finish_with_message("done");
        }
        Progress::Message(text) => bar.set_message(text),
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn sweep_style() -> ProgressStyle {
    ProgressStyle::with_template(SWEEP_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}
