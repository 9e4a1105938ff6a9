use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tubesum_core::{PanelView, URL_HINT, URL_PLACEHOLDER};

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .expect("static spinner template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn rule() {
    println!("{}", style("─".repeat(60)).dim());
}

pub fn header(email: Option<&str>) {
    println!(
        "\n{}\n{} {}",
        style("YouTube Video Summarizer").cyan().bold(),
        style("Welcome back,").dim(),
        style(email.unwrap_or("unknown user")).bold()
    );
    rule();
}

/// Shown instead of the panel when nobody is signed in.
pub fn sign_in_surface(reason: Option<&str>) {
    println!("\n{}", style("Sign in required").yellow().bold());
    if let Some(reason) = reason {
        println!("{} {}", style("✗").red().bold(), reason);
    }
    println!(
        "{}",
        style("Provide --email/--password or set NHOST_EMAIL and NHOST_PASSWORD.").dim()
    );
}

pub fn url_hint(url: &str) {
    println!(
        "{} {} {}",
        style("!").yellow().bold(),
        style(URL_HINT).yellow(),
        style(format!("({url})")).dim()
    );
}

pub fn prompt() -> String {
    format!("{} ", style("url ›").cyan().bold())
}

pub fn view(view: &PanelView, elapsed: Option<Duration>) {
    let elapsed = elapsed
        .map(|d| format!(" [{}]", format_duration(d)))
        .unwrap_or_default();

    match view {
        PanelView::AuthLoading => println!("{}", style("Checking session...").dim()),
        PanelView::Unauthenticated => sign_in_surface(None),
        PanelView::Idle => println!(
            "{} {}",
            style("Enter a YouTube URL to get started, e.g.").blue().italic(),
            style(URL_PLACEHOLDER).dim()
        ),
        PanelView::Processing => println!("{}", style("Processing...").cyan()),
        PanelView::Error(message) => {
            println!("{} {}", style("✗").red().bold(), style(message).red());
        }
        PanelView::Success(summary) => {
            println!(
                "{} {}{}\n",
                style("✓").green().bold(),
                style("Summary").bold(),
                style(elapsed).dim()
            );
            println!("{}\n", summary.trim_end());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_seconds_and_minutes() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }
}
