use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Starts a spinner for the wait on an external collaborator.
///
/// The caller owns the returned handle and must `finish_and_clear` it before
/// printing anything else.
pub fn start(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .expect("spinner template is static and valid")
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
