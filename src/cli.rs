//! Organization driver.
//!
//! Ties the pieces together: validates the target directory, loads the
//! ignore rules, scans and classifies the directory's children, ensures
//! the category folders exist, and performs (or previews) the moves.
//!
//! The run has two phases. The scan phase snapshots the directory listing
//! and classifies eligible files before any folder is created, so the
//! category folders themselves never show up as skipped entries on a
//! fresh run. The process phase then moves (or previews) each collected
//! file in name order.

use crate::category::{Category, CategoryMap};
use crate::config::{CompiledRules, OrganizerConfig};
use crate::organizer::{FileOrganizer, RunSummary};
use crate::output::OutputFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// A scanned file eligible for organization.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// The file name, as found in the directory.
    pub name: String,
    /// The full path to the file.
    pub path: PathBuf,
    /// The category resolved from its extension.
    pub category: Category,
}

/// Organizes `dir_path`, or previews the moves when `dry_run` is set.
///
/// Ignore rules are discovered through the default configuration chain.
/// Returns the run counters; errors are stringified for the CLI boundary.
///
/// # Examples
///
/// ```no_run
/// use dirsort::cli::run_cli;
/// use std::path::Path;
///
/// match run_cli(Path::new("/home/user/Downloads"), false) {
///     Ok(summary) => println!("moved {}", summary.moved),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(dir_path: &Path, dry_run: bool) -> Result<RunSummary, String> {
    run_cli_with_config(dir_path, dry_run, None)
}

/// Like [`run_cli`], with an explicit configuration file path.
pub fn run_cli_with_config(
    dir_path: &Path,
    dry_run: bool,
    config_path: Option<&Path>,
) -> Result<RunSummary, String> {
    if !dir_path.is_dir() {
        return Err(format!("{} is not a valid directory", dir_path.display()));
    }

    let config = OrganizerConfig::load(config_path)
        .map_err(|e| format!("Error loading configuration: {}", e))?;
    let rules = config
        .compile()
        .map_err(|e| format!("Error compiling ignore rules: {}", e))?;

    let mapper = CategoryMap::new();
    let mut summary = RunSummary::default();
    let files = scan_directory(dir_path, &mapper, &rules, &mut summary)?;

    // Scan first, create second: the listing above must not contain the
    // folders this step creates.
    if !dry_run {
        FileOrganizer::ensure_category_dirs(dir_path).map_err(|e| e.to_string())?;
    }

    let progress = if !dry_run && !files.is_empty() {
        Some(OutputFormatter::progress_bar(files.len() as u64))
    } else {
        None
    };

    for info in &files {
        let category = info.category.folder_name();
        let target_dir = dir_path.join(category);
        let destination = FileOrganizer::resolve_destination(&target_dir, &info.name);
        let dest_name = destination
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| info.name.clone());

        let line = if dry_run {
            OutputFormatter::preview_line(&info.name, category, &dest_name)
        } else {
            match FileOrganizer::move_file(&info.path, &destination) {
                Ok(()) => {
                    summary.moved += 1;
                    OutputFormatter::moved_line(&info.name, category, &dest_name)
                }
                Err(e) => {
                    summary.skipped += 1;
                    OutputFormatter::move_error_line(&info.name, &e)
                }
            }
        };
        println!("{}", line);
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    OutputFormatter::summary(&summary, dry_run);
    Ok(summary)
}

/// Snapshots the directory and collects eligible files, sorted by name.
///
/// Skipped entries (directories, anything inside a category-named target,
/// ignored files) are counted into `summary` here; entries that are
/// neither files nor directories are passed over uncounted.
fn scan_directory(
    dir_path: &Path,
    mapper: &CategoryMap,
    rules: &CompiledRules,
    summary: &mut RunSummary,
) -> Result<Vec<FileInfo>, String> {
    let entries = fs::read_dir(dir_path)
        .map_err(|e| format!("Error reading directory {}: {}", dir_path.display(), e))?;

    // Re-processing guard: organizing a folder that is itself named like a
    // category (e.g. Downloads/Images) skips everything in it.
    let inside_category = dir_path
        .file_name()
        .map(|n| Category::is_category_folder(&n.to_string_lossy()))
        .unwrap_or(false);

    let mut files: Vec<FileInfo> = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() || inside_category {
            summary.skipped += 1;
            continue;
        }
        if !file_type.is_file() {
            continue;
        }

        let path = entry.path();
        if rules.is_ignored(&path) {
            summary.skipped += 1;
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let category = mapper.classify_path(&path);
        files.push(FileInfo {
            name,
            path,
            category,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn default_rules() -> CompiledRules {
        OrganizerConfig::default()
            .compile()
            .expect("default rules compile")
    }

    #[test]
    fn scan_collects_files_sorted_by_name() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp.path().join("b.txt"), "x").expect("write failed");
        fs::write(temp.path().join("a.png"), "x").expect("write failed");
        fs::write(temp.path().join("c.xyz"), "x").expect("write failed");

        let mut summary = RunSummary::default();
        let files = scan_directory(
            temp.path(),
            &CategoryMap::new(),
            &default_rules(),
            &mut summary,
        )
        .expect("scan failed");

        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.txt", "c.xyz"]);
        assert_eq!(files[0].category, Category::Images);
        assert_eq!(files[1].category, Category::Documents);
        assert_eq!(files[2].category, Category::Others);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn scan_counts_directories_as_skipped() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp.path().join("nested")).expect("mkdir failed");
        fs::write(temp.path().join("a.txt"), "x").expect("write failed");

        let mut summary = RunSummary::default();
        let files = scan_directory(
            temp.path(),
            &CategoryMap::new(),
            &default_rules(),
            &mut summary,
        )
        .expect("scan failed");

        assert_eq!(files.len(), 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn scan_skips_everything_inside_a_category_folder() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let images = temp.path().join("Images");
        fs::create_dir(&images).expect("mkdir failed");
        fs::write(images.join("photo.jpg"), "x").expect("write failed");
        fs::write(images.join("notes.txt"), "x").expect("write failed");

        let mut summary = RunSummary::default();
        let files =
            scan_directory(&images, &CategoryMap::new(), &default_rules(), &mut summary)
                .expect("scan failed");

        assert!(files.is_empty());
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn scan_counts_ignored_files_as_skipped() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp.path().join(".hidden"), "x").expect("write failed");
        fs::write(temp.path().join("visible.txt"), "x").expect("write failed");

        let mut summary = RunSummary::default();
        let files = scan_directory(
            temp.path(),
            &CategoryMap::new(),
            &default_rules(),
            &mut summary,
        )
        .expect("scan failed");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "visible.txt");
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn run_cli_rejects_missing_directory() {
        let result = run_cli(Path::new("/no/such/dir"), false);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not a valid directory"));
    }

    #[test]
    fn run_cli_rejects_a_file_target() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let file = temp.path().join("a.txt");
        fs::write(&file, "x").expect("write failed");

        let result = run_cli(&file, false);
        assert!(result.is_err());
    }
}
