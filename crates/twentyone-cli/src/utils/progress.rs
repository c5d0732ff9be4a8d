use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;
use twentyonestep::engine::progress::{Progress, ProgressCallback};

const TICK_MS: u64 = 120;
const BAR_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg} ({elapsed})";

/// Drives one progress bar across the protocol: one tick per completed stage.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(Self::bar_style());
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::ProtocolStart { total_stages } => {
                pb.reset();
                pb.set_length(total_stages as u64);
                pb.set_position(0);
                pb.set_message("Starting...");
                pb.enable_steady_tick(Duration::from_millis(TICK_MS));
            }
            Progress::StageStart { name, steps, .. } => {
                pb.set_message(format!("{} ({} steps)", name, steps));
            }
            Progress::StageFinish { .. } => {
                pb.inc(1);
            }
            Progress::ProtocolFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message("✓ Done");
            }
            Progress::Message(msg) => {
                if pb.is_finished() {
                    pb.set_message(msg);
                } else {
                    pb.println(format!("  {}", msg));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
