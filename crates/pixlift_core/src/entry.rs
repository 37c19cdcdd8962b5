use std::cmp::Ordering;
use std::fmt;

/// A single directory entry, viewed as a stem plus an extension.
///
/// The split keeps the final `.`-suffix as the extension; a leading-dot
/// name with no other dot ("`.config`") has no extension and keeps the
/// dot in its stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    file_name: String,
    stem_len: usize,
}

impl FileEntry {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let stem_len = split_index(&file_name);
        Self {
            file_name,
            stem_len,
        }
    }

    /// The full filename, as listed on disk.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The filename without its extension.
    #[must_use]
    pub fn stem(&self) -> &str {
        &self.file_name[..self.stem_len]
    }

    /// The extension including its leading dot, or `""` when there is none.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.file_name[self.stem_len..]
    }

    /// Loose identity test between an original and a downscaled entry:
    /// true iff one stem is a prefix of the other (in either direction).
    ///
    /// This is deliberately permissive and can relate files that merely
    /// share a short prefix ("a" vs "a2"); callers rely on the sorted
    /// two-cursor scan to keep pairings aligned.
    #[must_use]
    pub fn stems_related(&self, other: &FileEntry) -> bool {
        let a = self.stem();
        let b = other.stem();
        a.starts_with(b) || b.starts_with(a)
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name)
    }
}

impl Ord for FileEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_name.cmp(&other.file_name)
    }
}

impl PartialOrd for FileEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Byte index of the extension dot, or the name length when the name has
/// no extension. The dot only counts when something other than dots
/// precedes it.
fn split_index(name: &str) -> usize {
    match name.rfind('.') {
        Some(idx) if name[..idx].bytes().any(|b| b != b'.') => idx,
        _ => name.len(),
    }
}
