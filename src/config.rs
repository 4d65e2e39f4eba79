//! Ignore-rule configuration.
//!
//! Controls which files the organizer leaves alone. Rules are loaded from
//! an optional TOML file and compiled once per run into pre-built matchers
//! so scanning stays a cheap membership test per file.
//!
//! # Configuration File Format
//!
//! ```toml
//! [rules]
//! skip_hidden = true
//!
//! [rules.ignore]
//! names = ["Thumbs.db"]
//! extensions = ["tmp", "part"]
//! globs = ["*.crdownload"]
//! patterns = ["^~\\$"]
//! ```
//!
//! `names` match the file name exactly, `extensions` case-insensitively
//! (no leading dot), `globs` and `patterns` run against the file name.

use glob::Pattern;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading or compiling ignore rules.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist.
    NotFound(PathBuf),
    /// The file could not be read.
    Io(String),
    /// The TOML content is malformed.
    Parse(String),
    /// A glob rule failed to compile.
    InvalidGlob(String),
    /// A regex rule failed to compile.
    InvalidRegex { pattern: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::Io(msg) => write!(f, "Failed to read configuration: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::InvalidGlob(pattern) => {
                write!(f, "Invalid glob rule '{}'", pattern)
            }
            ConfigError::InvalidRegex { pattern, reason } => {
                write!(f, "Invalid regex rule '{}': {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizerConfig {
    #[serde(default)]
    pub rules: Rules,
}

/// The `[rules]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct Rules {
    /// Skip files whose name starts with a dot. Defaults to true.
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,

    /// Files to leave alone even when visible.
    #[serde(default)]
    pub ignore: IgnoreRules,
}

fn default_skip_hidden() -> bool {
    true
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            ignore: IgnoreRules::default(),
        }
    }
}

/// The `[rules.ignore]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IgnoreRules {
    /// Exact file names.
    #[serde(default)]
    pub names: Vec<String>,

    /// Extensions without the leading dot, matched case-insensitively.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns run against the file name.
    #[serde(default)]
    pub globs: Vec<String>,

    /// Regex patterns run against the file name.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl OrganizerConfig {
    /// Loads configuration, falling back through the discovery chain.
    ///
    /// Order: the explicit `config_path` if given, then `.dirsortrc.toml`
    /// in the working directory, then `$HOME/.config/dirsort/config.toml`,
    /// then built-in defaults. An explicit path that does not exist is an
    /// error; a missing discovered file is not.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_file(path);
        }

        let local = PathBuf::from(".dirsortrc.toml");
        if local.exists() {
            return Self::load_file(&local);
        }

        if let Ok(home) = std::env::var("HOME") {
            let user = PathBuf::from(home)
                .join(".config")
                .join("dirsort")
                .join("config.toml");
            if user.exists() {
                return Self::load_file(&user);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Compiles the rules into matchers ready for per-file checks.
    pub fn compile(self) -> Result<CompiledRules, ConfigError> {
        CompiledRules::new(self.rules)
    }
}

/// Pre-compiled ignore rules.
///
/// Name and extension lookups are HashSet membership tests; glob and
/// regex rules are compiled once here instead of per file.
pub struct CompiledRules {
    skip_hidden: bool,
    names: HashSet<String>,
    extensions: HashSet<String>,
    globs: Vec<Pattern>,
    patterns: Vec<Regex>,
}

impl CompiledRules {
    fn new(rules: Rules) -> Result<Self, ConfigError> {
        let globs = rules
            .ignore
            .globs
            .iter()
            .map(|g| Pattern::new(g).map_err(|_| ConfigError::InvalidGlob(g.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        let patterns = rules
            .ignore
            .patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::InvalidRegex {
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            skip_hidden: rules.skip_hidden,
            names: rules.ignore.names.into_iter().collect(),
            extensions: rules
                .ignore
                .extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
            globs,
            patterns,
        })
    }

    /// Returns true if the file at `path` should be left where it is.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if self.skip_hidden && name.starts_with('.') {
            return true;
        }

        if self.names.contains(name.as_ref()) {
            return true;
        }

        if let Some(ext) = path.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            if self.extensions.contains(&ext) {
                return true;
            }
        }

        if self.globs.iter().any(|g| g.matches(&name)) {
            return true;
        }

        self.patterns.iter().any(|r| r.is_match(&name))
    }
}
