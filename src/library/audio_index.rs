use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::LibraryError;

/// File extension the index accepts, including the leading dot.
const AUDIO_EXTENSION: &str = ".mp3";

/// Separator between the track-number prefix and the document name.
const ID_DELIMITER: char = '.';

/// Mapping from document name to the narration file recorded for it.
///
/// Built once at startup by walking the narration root: each subdirectory is
/// one collection, and each `<prefix>.<document-name>.mp3` inside it
/// contributes an entry. The index is never rebuilt or mutated afterwards.
#[derive(Debug, Default)]
pub struct AudioIndex {
    entries: HashMap<String, PathBuf>,
}

impl AudioIndex {
    /// Scan `root` and build the index.
    ///
    /// Files whose name does not contain the delimiter, does not end in
    /// `.mp3`, or is not valid UTF-8 are skipped without comment. When two
    /// files in different collections resolve to the same document name the
    /// one enumerated last wins; enumeration order is OS-dependent and not
    /// guaranteed.
    pub fn scan(root: &Path) -> Result<Self, LibraryError> {
        if !root.is_dir() {
            return Err(LibraryError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut entries = HashMap::new();

        for collection in fs::read_dir(root)? {
            let collection_path = collection?.path();
            if !collection_path.is_dir() {
                continue;
            }

            for file in fs::read_dir(&collection_path)? {
                let file_path = file?.path();
                let Some(file_name) = file_path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !file_name.ends_with(AUDIO_EXTENSION) {
                    continue;
                }

                // "01.docX.mp3" -> prefix "01", document name "docX"
                let mut parts = file_name.splitn(2, ID_DELIMITER);
                let (Some(_prefix), Some(rest)) = (parts.next(), parts.next()) else {
                    continue;
                };
                let name = rest.strip_suffix(AUDIO_EXTENSION).unwrap_or(rest);

                entries.insert(name.to_owned(), file_path);
            }
        }

        log::debug!("narration index built: {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Narration file recorded for `document`, if any.
    pub fn get(&self, document: &str) -> Option<&Path> {
        self.entries.get(document).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
