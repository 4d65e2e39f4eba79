use clap::Parser;
use dirsort::cli::run_cli;
use dirsort::output::OutputFormatter;
use std::path::PathBuf;

/// Organize files into category subfolders by extension.
#[derive(Parser, Debug)]
#[command(name = "dirsort", version, about)]
struct Cli {
    /// Folder to organize (default: current directory)
    #[arg(default_value = ".")]
    folder: PathBuf,

    /// Preview changes without moving files
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    OutputFormatter::info(&format!("Organizing files in: {}", cli.folder.display()));
    if cli.dry_run {
        OutputFormatter::warning("Running in dry-run mode (no changes will be made)");
    }

    // Validation failures print an error and leave the exit code at zero.
    if let Err(e) = run_cli(&cli.folder, cli.dry_run) {
        OutputFormatter::error(&e);
    }
}
