//! File categorization for extension-based organization.
//!
//! Maps file extensions to a fixed set of semantic categories. Every
//! extension resolves to exactly one category; anything unrecognized
//! (including files with no extension) falls into [`Category::Others`].
//!
//! # Examples
//!
//! ```
//! use dirsort::category::{Category, CategoryMap};
//!
//! let map = CategoryMap::default();
//! assert_eq!(map.classify(".png"), Category::Images);
//! assert_eq!(map.classify(".JPG"), Category::Images);
//! assert_eq!(map.classify(".xyz"), Category::Others);
//! ```

use std::collections::HashMap;
use std::path::Path;

/// A destination bucket for organized files.
///
/// Each category corresponds to one subfolder created under the target
/// directory, named exactly like the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (JPG, PNG, GIF, ...)
    Images,
    /// Document files (PDF, DOCX, TXT, ...)
    Documents,
    /// Audio files (MP3, WAV, FLAC, ...)
    Audio,
    /// Video files (MP4, MKV, MOV, ...)
    Video,
    /// Archive files (ZIP, TAR, RAR, ...)
    Archives,
    /// Source and markup files (PY, JS, HTML, ...)
    Code,
    /// Catch-all for everything unrecognized.
    Others,
}

impl Category {
    /// Every category, in table order. The catch-all comes last.
    pub const ALL: [Category; 7] = [
        Category::Images,
        Category::Documents,
        Category::Audio,
        Category::Video,
        Category::Archives,
        Category::Code,
        Category::Others,
    ];

    /// Returns the subfolder name used for this category.
    ///
    /// ```
    /// use dirsort::category::Category;
    ///
    /// assert_eq!(Category::Images.folder_name(), "Images");
    /// assert_eq!(Category::Others.folder_name(), "Others");
    /// ```
    pub fn folder_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::Archives => "Archives",
            Category::Code => "Code",
            Category::Others => "Others",
        }
    }

    /// Returns true if `name` is one of the category folder names.
    ///
    /// Used as the re-processing guard: items whose parent folder carries
    /// a category name already live inside an organized tree.
    pub fn is_category_folder(name: &str) -> bool {
        Category::ALL.iter().any(|c| c.folder_name() == name)
    }
}

/// The fixed extension-to-category table.
///
/// Keys are stored as lowercase extensions with the leading dot; lookups
/// lowercase their input, so matching is case-insensitive. The table is
/// populated once at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    extensions: HashMap<String, Category>,
}

impl CategoryMap {
    /// Creates the map with the standard extension table.
    pub fn new() -> Self {
        let mut map = Self {
            extensions: HashMap::new(),
        };
        map.populate();
        map
    }

    fn populate(&mut self) {
        for ext in [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".webp"] {
            self.add(ext, Category::Images);
        }
        for ext in [".pdf", ".doc", ".docx", ".xls", ".xlsx", ".txt", ".md"] {
            self.add(ext, Category::Documents);
        }
        for ext in [".mp3", ".wav", ".flac", ".aac", ".m4a"] {
            self.add(ext, Category::Audio);
        }
        for ext in [".mp4", ".mkv", ".mov", ".avi", ".flv"] {
            self.add(ext, Category::Video);
        }
        for ext in [".zip", ".tar", ".gz", ".rar", ".7z"] {
            self.add(ext, Category::Archives);
        }
        for ext in [".py", ".js", ".html", ".css", ".json", ".sh"] {
            self.add(ext, Category::Code);
        }
        // Others has no explicit extensions; it is the classify() fallback.
    }

    fn add(&mut self, extension: &str, category: Category) {
        self.extensions
            .insert(extension.to_lowercase(), category);
    }

    /// Classifies a dotted extension (e.g. `".pdf"`), case-insensitively.
    ///
    /// Total: an empty or unknown extension yields [`Category::Others`].
    ///
    /// ```
    /// use dirsort::category::{Category, CategoryMap};
    ///
    /// let map = CategoryMap::default();
    /// assert_eq!(map.classify(".pdf"), Category::Documents);
    /// assert_eq!(map.classify(""), Category::Others);
    /// ```
    pub fn classify(&self, extension: &str) -> Category {
        self.extensions
            .get(&extension.to_lowercase())
            .copied()
            .unwrap_or(Category::Others)
    }

    /// Classifies a path by its extension component.
    ///
    /// Files without an extension (including dot-files like `.gitignore`,
    /// which have no extension component) classify as [`Category::Others`].
    pub fn classify_path(&self, path: &Path) -> Category {
        match path.extension() {
            Some(ext) => self.classify(&format!(".{}", ext.to_string_lossy())),
            None => Category::Others,
        }
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn folder_names_match_variants() {
        assert_eq!(Category::Images.folder_name(), "Images");
        assert_eq!(Category::Documents.folder_name(), "Documents");
        assert_eq!(Category::Audio.folder_name(), "Audio");
        assert_eq!(Category::Video.folder_name(), "Video");
        assert_eq!(Category::Archives.folder_name(), "Archives");
        assert_eq!(Category::Code.folder_name(), "Code");
        assert_eq!(Category::Others.folder_name(), "Others");
    }

    #[test]
    fn all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), 7);
        let names: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.folder_name()).collect();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn category_folder_guard() {
        assert!(Category::is_category_folder("Images"));
        assert!(Category::is_category_folder("Others"));
        assert!(!Category::is_category_folder("images"));
        assert!(!Category::is_category_folder("Downloads"));
    }

    #[test]
    fn classify_every_table_entry() {
        let map = CategoryMap::default();
        let table: &[(&str, Category)] = &[
            (".jpg", Category::Images),
            (".jpeg", Category::Images),
            (".png", Category::Images),
            (".gif", Category::Images),
            (".bmp", Category::Images),
            (".svg", Category::Images),
            (".webp", Category::Images),
            (".pdf", Category::Documents),
            (".doc", Category::Documents),
            (".docx", Category::Documents),
            (".xls", Category::Documents),
            (".xlsx", Category::Documents),
            (".txt", Category::Documents),
            (".md", Category::Documents),
            (".mp3", Category::Audio),
            (".wav", Category::Audio),
            (".flac", Category::Audio),
            (".aac", Category::Audio),
            (".m4a", Category::Audio),
            (".mp4", Category::Video),
            (".mkv", Category::Video),
            (".mov", Category::Video),
            (".avi", Category::Video),
            (".flv", Category::Video),
            (".zip", Category::Archives),
            (".tar", Category::Archives),
            (".gz", Category::Archives),
            (".rar", Category::Archives),
            (".7z", Category::Archives),
            (".py", Category::Code),
            (".js", Category::Code),
            (".html", Category::Code),
            (".css", Category::Code),
            (".json", Category::Code),
            (".sh", Category::Code),
        ];
        for (ext, expected) in table {
            assert_eq!(map.classify(ext), *expected, "extension {ext}");
        }
    }

    #[test]
    fn classify_is_case_insensitive() {
        let map = CategoryMap::default();
        assert_eq!(map.classify(".JPG"), Category::Images);
        assert_eq!(map.classify(".Pdf"), Category::Documents);
        assert_eq!(map.classify(".MP3"), Category::Audio);
    }

    #[test]
    fn unknown_and_empty_extensions_are_others() {
        let map = CategoryMap::default();
        assert_eq!(map.classify(".xyz"), Category::Others);
        assert_eq!(map.classify(""), Category::Others);
        assert_eq!(map.classify("."), Category::Others);
    }

    #[test]
    fn classify_path_uses_extension_component() {
        let map = CategoryMap::default();
        assert_eq!(map.classify_path(Path::new("photo.JPG")), Category::Images);
        assert_eq!(
            map.classify_path(Path::new("a/b/notes.txt")),
            Category::Documents
        );
        // Double extension: only the final component counts.
        assert_eq!(
            map.classify_path(Path::new("backup.tar.gz")),
            Category::Archives
        );
        assert_eq!(map.classify_path(Path::new("README")), Category::Others);
        assert_eq!(map.classify_path(Path::new(".gitignore")), Category::Others);
    }
}
