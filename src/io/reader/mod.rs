/*! Corpus reading utilities

- [LineReader] yields numbered lines without their terminator, used for indexing.
- [RawLineReader] yields numbered lines as raw bytes with their terminator, used for rewriting.

Line numbers start at 1.
!*/
mod textreader;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::Error;

pub use textreader::{LineReader, RawLineReader};

/// Boxed buffered reader over a (possibly compressed) corpus file.
pub type CorpusRead = Box<dyn BufRead + Send>;

/// Open a corpus file for reading, decompressing it if its name ends in `.gz`.
pub fn open(src: &Path) -> Result<CorpusRead, Error> {
    let f = File::open(src).map_err(|e| Error::input(src, e))?;
    if super::is_gzip(src) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(f))))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}
