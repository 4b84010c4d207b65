//! Terminal output for the release-dl binary
//!
//! The library stages never print. The CLI reports each stage through the
//! status lines here, colored with owo-colors, and shows transfers with an
//! indicatif bar (or a spinner when the asset size is unknown).

use std::fmt::Display;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

const TICK: Duration = Duration::from_millis(100);
const BAR_TEMPLATE: &str = "     {spinner:.cyan} {wide_bar:.cyan/dim} {bytes}/{total_bytes} {eta}";
const SPINNER_TEMPLATE: &str = "     {spinner:.cyan} {msg} {bytes}";

enum Stream {
    Stdout,
    Stderr,
}

/// Write `marker text` as one line; `marker` is usually a colored prefix.
fn emit(stream: Stream, marker: impl Display, text: impl Display) {
    match stream {
        Stream::Stdout => println!("{} {}", marker, text),
        Stream::Stderr => eprintln!("{} {}", marker, text),
    }
}

/// Header for a multi-stage command, e.g. `==> Downloading owner/repo`.
pub fn heading(text: &str) {
    emit(Stream::Stdout, "==>".blue().bold(), text.bold());
}

/// One pipeline stage under a heading.
pub fn stage(name: &str) {
    emit(Stream::Stdout, "  ->".cyan(), name);
}

pub fn detail(text: &str) {
    emit(Stream::Stdout, "    ", text.dimmed());
}

pub fn note(text: &str) {
    emit(Stream::Stdout, "::".cyan(), text);
}

pub fn done(text: &str) {
    emit(Stream::Stdout, "==>".green().bold(), text.green());
}

/// Report a failure on stderr with an `error:` prefix.
pub fn failure(text: &str) {
    emit(Stream::Stderr, "error:".red().bold(), text.red());
}

/// A release in `list`/`resolve` output. Tags without a version are dimmed.
pub fn release_line(tag: &str, summary: &str, has_version: bool) {
    if has_version {
        emit(Stream::Stdout, format!("  {}", tag.green()), summary.dimmed());
    } else {
        emit(Stream::Stdout, format!("  {}", tag.dimmed()), summary.dimmed());
    }
}

pub fn asset_line(name: &str, size: u64) {
    emit(Stream::Stdout, format!("  {}", name), format_size(size).dimmed());
}

/// Progress display for a download of `total` bytes.
///
/// A byte bar when the size is known, a byte-counting spinner when the
/// provider reported 0.
pub fn transfer_bar(label: &str, total: u64) -> ProgressBar {
    let (bar, base, template) = if total == 0 {
        (ProgressBar::new_spinner(), ProgressStyle::default_spinner(), SPINNER_TEMPLATE)
    } else {
        (ProgressBar::new(total), ProgressStyle::default_bar(), BAR_TEMPLATE)
    };
    bar.set_style(base.clone().template(template).unwrap_or(base));
    bar.set_message(label.to_string());
    bar.enable_steady_tick(TICK);
    bar
}

/// Binary-prefixed size, e.g. `1.5 MiB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_bar_tracks_bytes() {
        let bar = transfer_bar("app.tar.gz", 1000);
        assert_eq!(bar.length(), Some(1000));
        bar.inc(400);
        bar.inc(100);
        assert_eq!(bar.position(), 500);
        bar.finish_and_clear();
    }

    #[test]
    fn test_unknown_size_gets_spinner() {
        let bar = transfer_bar("app.tar.gz", 0);
        assert_eq!(bar.length(), None);
        bar.inc(42);
        assert_eq!(bar.position(), 42);
        bar.finish_and_clear();
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536 * 1024), "1.5 MiB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GiB");
        assert_eq!(format_size(u64::MAX), "16777216.0 TiB");
    }
}
