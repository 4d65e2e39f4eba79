//! dirsort - organize a directory's files into category subfolders
//!
//! This library classifies the regular files of a directory by extension
//! into a fixed set of categories (Images, Documents, Audio, Video,
//! Archives, Code, Others), creates one subfolder per category, and moves
//! each file into its folder, resolving name collisions with a numeric
//! suffix. A dry-run mode reports the intended moves without touching the
//! filesystem.

pub mod category;
pub mod cli;
pub mod config;
pub mod organizer;
pub mod output;

pub use category::{Category, CategoryMap};
pub use config::{CompiledRules, ConfigError, OrganizerConfig};
pub use organizer::{FileOrganizer, OrganizeError, OrganizeResult, RunSummary};

pub use cli::{run_cli, run_cli_with_config};
