//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::history::HistoryItem;
use crate::domain::translation::{IntensityLevel, Region, TranslationResult, MAX_INTENSITY};

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Create a spinner for one analysis request. Ticking starts on
    /// `start_spinner`.
    pub fn analysis_spinner(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner
    }

    pub fn start_spinner(spinner: &ProgressBar, message: &str) {
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    }

    pub fn spinner_success(spinner: &ProgressBar, message: &str) {
        spinner.finish_with_message(format!("{} {}", "✓".green(), message));
    }

    pub fn spinner_fail(spinner: &ProgressBar, message: &str) {
        spinner.finish_with_message(format!("{} {}", "✗".red(), message));
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    pub fn result(&self, result: &TranslationResult) {
        self.output(&self.format_result(result));
    }

    /// Render a result as a multi-line card
    pub fn format_result(&self, result: &TranslationResult) -> String {
        let mut lines = Vec::new();

        match &result.transcription {
            Some(heard) => lines.push(format!("{} {}", "Heard:".bold(), heard)),
            None => lines.push(result.original_text.bold().to_string()),
        }
        lines.push(format!("{} {}", "Meaning:".cyan(), result.meaning));
        lines.push(format!(
            "{} {} ({})",
            "Source:".cyan(),
            result.source_native_script,
            result.source_phonetic_script
        ));
        lines.push(format!(
            "{} {} ({})",
            format!("{}:", result.target_language).cyan(),
            result.target_script,
            result.target_phonetic
        ));
        lines.push(format!("{} {}", "Equivalent:".cyan(), result.equivalent));
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            format!("Insight ({}):", result.target_language).cyan(),
            result.cultural_insight_target
        ));
        lines.push(format!("{} {}", "Nuance:".cyan(), result.cultural_nuance));
        lines.push(format!("{} {}", "Guide:".cyan(), result.input_language_summary));

        if let Some(link) = &result.sagor_global_link {
            lines.push(format!(
                "{} {}: \"{}\" - {}",
                "Global link:".cyan(),
                link.language,
                link.phrase,
                link.context
            ));
        }
        if let Some(sus) = &result.sus_insight {
            lines.push(format!("{} {}", "Heads up:".yellow(), sus));
        }

        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            "Intensity:".cyan(),
            self.format_intensity(result.intensity)
        ));
        if let Some(origin) = &result.detected_context {
            lines.push(format!("{} {}", "Origin:".cyan(), origin));
        }

        lines.join("\n")
    }

    /// Intensity bar with its numeric value and level label
    pub fn format_intensity(&self, intensity: u8) -> String {
        let filled = intensity.min(MAX_INTENSITY) as usize;
        let empty = MAX_INTENSITY as usize - filled;
        let level = IntensityLevel::from_intensity(intensity);

        let bar = "█".repeat(filled);
        let bar = match level {
            IntensityLevel::Mild => bar.green(),
            IntensityLevel::Moderate => bar.yellow(),
            IntensityLevel::Intense => bar.red(),
        };

        format!(
            "[{}{}] {}/{} {}",
            bar,
            "░".repeat(empty),
            intensity,
            MAX_INTENSITY,
            level.label()
        )
    }

    pub fn history(&self, items: &[HistoryItem], now_ms: i64) {
        for item in items {
            self.output(&self.format_history_line(item, now_ms));
        }
    }

    /// One-line summary of a history item
    pub fn format_history_line(&self, item: &HistoryItem, now_ms: i64) -> String {
        let result = item.result();
        let source = result
            .transcription
            .as_deref()
            .unwrap_or(&result.original_text);
        let short_id: String = item.id().chars().take(8).collect();

        format!(
            "{}  {:>8}  {} -> {} ({})",
            short_id.dimmed(),
            format_age(now_ms, item.timestamp()),
            source,
            result.meaning,
            result.target_language
        )
    }

    /// Supported languages grouped by region
    pub fn languages(&self) {
        for region in Region::ALL {
            self.output(&region.label().bold().to_string());
            for lang in region.languages() {
                self.output(&format!("  {:<12} {}", lang.slug(), lang.name()));
            }
        }
    }

    pub fn suggestions(&self, suggestions: &[&str]) {
        self.warn("Nothing to analyze. Try one of:");
        for suggestion in suggestions {
            eprintln!("  lingo-lens \"{}\"", suggestion);
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Coarse elapsed time between two epoch-millisecond timestamps
pub fn format_age(now_ms: i64, then_ms: i64) -> String {
    let secs = (now_ms - then_ms).max(0) / 1000;
    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", secs / 60),
        3_600..=86_399 => format!("{}h ago", secs / 3_600),
        _ => format!("{}d ago", secs / 86_400),
    }
}
