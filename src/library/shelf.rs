use std::fs;
use std::path::{Path, PathBuf};

use super::LibraryError;

const DOCUMENT_EXTENSION: &str = ".pdf";

/// Read-only view over the document side of the library.
///
/// The layout is one subdirectory per collection under the document root,
/// each holding plain `.pdf` files. Listings are re-read on demand so the
/// chooser screens pick up files added while the program is running.
#[derive(Debug)]
pub struct Shelf {
    root: PathBuf,
}

impl Shelf {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Sorted collection names. Entries of the root that are not
    /// directories are skipped.
    pub fn collections(&self) -> Result<Vec<String>, LibraryError> {
        if !self.root.is_dir() {
            return Err(LibraryError::RootNotFound {
                path: self.root.clone(),
            });
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_dir() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Sorted document names in `collection`, with the `.pdf` extension
    /// stripped. Files with other extensions are skipped.
    pub fn documents(&self, collection: &str) -> Result<Vec<String>, LibraryError> {
        let dir = self.root.join(collection);
        if !dir.is_dir() {
            return Err(LibraryError::RootNotFound { path: dir });
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if let Some(stem) = file_name.strip_suffix(DOCUMENT_EXTENSION) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Full path of a document named by the list screen.
    pub fn document_path(&self, collection: &str, document: &str) -> PathBuf {
        self.root
            .join(collection)
            .join(format!("{document}{DOCUMENT_EXTENSION}"))
    }
}
