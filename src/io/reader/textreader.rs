/*! Reading facilities

Both readers implement [Iterator] over `(line number, line)` pairs.
!*/
use std::{
    io::{BufRead, Lines},
    path::{Path, PathBuf},
};

use crate::error::Error;

use super::CorpusRead;

/// Reader that yields numbered lines, stripped of their `\n` or `\r\n` terminator.
///
/// Lines have to be valid UTF-8.
pub struct LineReader<T> {
    path: PathBuf,
    lines: Lines<T>,
    line_no: usize,
}

impl LineReader<CorpusRead> {
    pub fn new(src: &Path) -> Result<Self, Error> {
        Ok(Self::from_bufread(src, super::open(src)?))
    }
}

impl<T: BufRead> LineReader<T> {
    /// Wrap an already opened reader. `path` is only used in error reporting.
    pub fn from_bufread(path: &Path, br: T) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: br.lines(),
            line_no: 0,
        }
    }
}

impl<T: BufRead> Iterator for LineReader<T> {
    type Item = Result<(usize, String), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lines.next()? {
            Ok(line) => {
                self.line_no += 1;
                Some(Ok((self.line_no, line)))
            }
            Err(e) => Some(Err(Error::input(&self.path, e))),
        }
    }
}

/// Byte-oriented reader, yielding lines exactly as they are stored,
/// terminator included.
///
/// Prefer [LineReader] when line content is needed.
pub struct RawLineReader<T> {
    path: PathBuf,
    br: T,
    line_no: usize,
}

impl RawLineReader<CorpusRead> {
    pub fn new(src: &Path) -> Result<Self, Error> {
        Ok(Self::from_bufread(src, super::open(src)?))
    }
}

impl<T: BufRead> RawLineReader<T> {
    pub fn from_bufread(path: &Path, br: T) -> Self {
        Self {
            path: path.to_path_buf(),
            br,
            line_no: 0,
        }
    }
}

impl<T: BufRead> Iterator for RawLineReader<T> {
    type Item = Result<(usize, Vec<u8>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.br.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                Some(Ok((self.line_no, buf)))
            }
            Err(e) => Some(Err(Error::input(&self.path, e))),
        }
    }
}
