//! Temp-file backed writer for text files.
use flate2::{write::GzEncoder, Compression};
use log::debug;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::Error;

enum Sink {
    Plain(BufWriter<NamedTempFile>),
    Gzip(GzEncoder<BufWriter<NamedTempFile>>),
}

/// Atomic writer.
///
/// Implements [std::io::Write]. Output is gzip-compressed if `dst` ends in `.gz`.
pub struct TextWriter {
    dst: PathBuf,
    sink: Sink,
}

impl TextWriter {
    /// Create a new [TextWriter] targeting `dst`.
    ///
    /// The temporary file is created right away, so an unwritable destination directory is reported here.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        let dir = match dst.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let tmp = NamedTempFile::new_in(&dir).map_err(|e| Error::output(dst, e))?;
        debug!("writing {:?} through {:?}", dst, tmp.path());

        let bw = BufWriter::new(tmp);
        let sink = if crate::io::is_gzip(dst) {
            Sink::Gzip(GzEncoder::new(bw, Compression::default()))
        } else {
            Sink::Plain(bw)
        };

        Ok(Self {
            dst: dst.to_path_buf(),
            sink,
        })
    }

    /// Flush everything and move the temporary file onto the destination.
    pub fn finish(self) -> Result<PathBuf, Error> {
        self.seal()?.persist()
    }

    /// Flush and sync the temporary file without publishing it.
    ///
    /// Nothing appears at the destination until [SealedFile::persist] is called.
    pub fn seal(self) -> Result<SealedFile, Error> {
        let dst = self.dst;
        let bw = match self.sink {
            Sink::Plain(bw) => bw,
            Sink::Gzip(enc) => enc.finish().map_err(|e| Error::output(&dst, e))?,
        };
        let tmp = bw
            .into_inner()
            .map_err(|e| Error::output(&dst, e.into_error()))?;

        // make sure data hits the disk before the rename makes it visible.
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::output(&dst, e))?;

        Ok(SealedFile { dst, tmp })
    }
}

/// Complete, synced temporary file waiting to be moved onto its destination.
///
/// Dropping it removes the temporary file.
pub struct SealedFile {
    dst: PathBuf,
    tmp: NamedTempFile,
}

impl SealedFile {
    /// Rename the temporary file onto the destination.
    pub fn persist(self) -> Result<PathBuf, Error> {
        self.tmp.persist(&self.dst)?;
        debug!("published {:?}", self.dst);
        Ok(self.dst)
    }
}

impl Write for TextWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.sink {
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.sink {
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use flate2::read::MultiGzDecoder;
    use std::fs::File;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn nothing_before_finish() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out.de");
        let mut tw = TextWriter::new(&dst).unwrap();
        tw.write_all(b"hallo\n").unwrap();

        assert!(!dst.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        let written = tw.finish().unwrap();
        assert_eq!(written, dst);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "hallo\n");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn dropped_writer_leaves_nothing() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out.de");
        {
            let mut tw = TextWriter::new(&dst).unwrap();
            tw.write_all(b"incomplete").unwrap();
        }
        assert!(!dst.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn gzip_output() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out.de.gz");
        let mut tw = TextWriter::new(&dst).unwrap();
        tw.write_all(b"hallo\nwelt\n").unwrap();
        tw.finish().unwrap();

        let mut result = String::new();
        MultiGzDecoder::new(File::open(&dst).unwrap())
            .read_to_string(&mut result)
            .unwrap();
        assert_eq!(result, "hallo\nwelt\n");
    }

    #[test]
    fn sealed_file_is_published_on_persist() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out.de");
        let mut tw = TextWriter::new(&dst).unwrap();
        tw.write_all(b"hallo\n").unwrap();

        let sealed = tw.seal().unwrap();
        assert!(!dst.exists());
        assert_eq!(sealed.persist().unwrap(), dst);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "hallo\n");
    }

    #[test]
    fn persist_onto_directory_fails() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("taken");
        std::fs::create_dir(&dst).unwrap();
        let tw = TextWriter::new(&dst).unwrap();

        assert!(matches!(tw.finish(), Err(Error::Persist(_))));
        assert!(dst.is_dir());
        // only the directory is left, no stray temporary file.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("nope").join("out.de");
        assert!(matches!(
            TextWriter::new(&dst),
            Err(Error::OutputWrite(_, _))
        ));
    }
}
