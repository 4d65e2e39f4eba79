//! Console output formatting.
//!
//! Centralizes all user-facing text: styled status messages, the per-file
//! move/preview/error lines, the trailing run summary, and the progress
//! bar used during live runs. Per-file lines are returned as strings so
//! the driver has a single print site for both modes; the bar itself
//! draws on stderr and never carries the lines.

use crate::organizer::{OrganizeError, RunSummary};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Styled output helpers for the CLI.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an informational message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Formats the confirmation line for a completed move.
    pub fn moved_line(file_name: &str, category: &str, dest_name: &str) -> String {
        format!(
            "{} Moved: {} -> {}/{}",
            "✓".green(),
            file_name,
            category,
            dest_name
        )
    }

    /// Formats the preview line reported in dry-run mode.
    pub fn preview_line(file_name: &str, category: &str, dest_name: &str) -> String {
        format!(
            "{} Would move: {} -> {}/{}",
            "[DRY RUN]".yellow(),
            file_name,
            category,
            dest_name
        )
    }

    /// Formats the error line for a failed move.
    pub fn move_error_line(file_name: &str, error: &OrganizeError) -> String {
        format!("{} Error moving {}: {}", "✗".red(), file_name, error)
    }

    /// Prints the trailing run summary.
    pub fn summary(summary: &RunSummary, dry_run: bool) {
        println!(
            "\nSummary: Moved {} files, skipped {} files",
            summary.moved.to_string().green(),
            summary.skipped.to_string().yellow()
        );
        if dry_run {
            println!(
                "{}",
                "Note: Dry run mode - no files were actually moved.".yellow()
            );
        }
    }

    /// Creates the progress bar driven by the live move loop.
    pub fn progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len}")
                .expect("Invalid progress bar template")
                .progress_chars("█▓░"),
        );
        pb
    }
}
