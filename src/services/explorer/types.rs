use serde::Serialize;
use std::path::Path;

/// How a file in the managed folder is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileKind {
    /// A game session recording (`.dem`).
    Demo,
    /// A compressed counterpart (`.zip`).
    Archive,
}

impl FileKind {
    /// Classify by extension, case-insensitively. Anything that is neither
    /// a demo nor a zip is not managed and yields `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "dem" => Some(Self::Demo),
            "zip" => Some(Self::Archive),
            _ => None,
        }
    }
}

/// One entry of the managed folder listing. Rebuilt wholesale on every
/// scan; the filesystem is the only source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedFile {
    /// File base name including extension, unique within the folder.
    pub name: String,
    pub kind: FileKind,
    /// Full absolute path.
    pub path: String,
}
