/*!
# IO utilities

Corpus files are read and written line by line.
Files ending in `.gz` are transparently (de)compressed.

Writing is atomic: content goes to a temporary file next to the destination that is only renamed onto it once complete.
!*/
pub mod reader;
pub mod writer;

use std::path::Path;

/// Returns `true` if the file at `path` should be treated as gzip-compressed.
pub(crate) fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}
