/*! Parallel deduplication

Removes the sentence pairs that occur more than once in a line-aligned corpus pair.
A line is removed when it shares its content with other lines of corpus a *and* their paired lines of corpus b share a content too.
Lines that are duplicated in a only (e.g. the same sentence translated differently) are kept.

The process is:

- index corpus a, then corpus b ([index])
- cross-reference each duplicate group of a with the index of b, on a pool of workers ([resolve], [distribute])
- remove the resulting positions from both corpora ([crate::processing::rewrite])

Every member of a parallel duplicate cluster is removed, first occurrence included.
!*/
pub mod deletion;
pub mod distribute;
pub mod index;
pub mod resolve;

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};

use crate::error::Error;
use crate::io::writer::SealedFile;
use crate::processing::report::{DedupReport, Timings};
use crate::processing::rewrite::rewrite_pending;

pub use deletion::DeletionSet;
pub use distribute::find_parallel_duplicates;
pub use index::{CorpusIndex, IndexStrategy, LineSet};

/// Inserted before the last extension of input file names to build default destinations.
pub const MARKER: &str = "dupl_rem";

/// Deduplication of a corpus pair.
#[derive(Debug, Clone)]
pub struct ParallelDedup {
    src_a: PathBuf,
    src_b: PathBuf,
    dst_a: PathBuf,
    dst_b: PathBuf,
    nb_workers: usize,
    strategy: IndexStrategy,
}

impl ParallelDedup {
    /// Destinations default to [default_destination] of each source.
    pub fn new(src_a: PathBuf, src_b: PathBuf, nb_workers: usize) -> Self {
        let dst_a = default_destination(&src_a);
        let dst_b = default_destination(&src_b);
        Self {
            src_a,
            src_b,
            dst_a,
            dst_b,
            nb_workers,
            strategy: IndexStrategy::default(),
        }
    }

    pub fn with_destinations(mut self, dst_a: PathBuf, dst_b: PathBuf) -> Self {
        self.dst_a = dst_a;
        self.dst_b = dst_b;
        self
    }

    pub fn with_strategy(mut self, strategy: IndexStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn destinations(&self) -> (&Path, &Path) {
        (&self.dst_a, &self.dst_b)
    }

    /// Run the whole deduplication.
    ///
    /// Both destinations are published only once both have been fully written,
    /// and a failure while publishing the second one removes the first.
    pub fn run(&self) -> Result<DedupReport, Error> {
        if self.nb_workers == 0 {
            return Err(Error::InvalidWorkerCount(self.nb_workers));
        }
        let mut timings = Timings::default();

        let (index_a, elapsed) = timed("[a] indexing duplicates", || {
            CorpusIndex::from_path(&self.src_a, self.strategy)
        })?;
        timings.index_a = elapsed;

        let (index_b, elapsed) = timed("[b] indexing duplicates", || {
            CorpusIndex::from_path(&self.src_b, self.strategy)
        })?;
        timings.index_b = elapsed;

        if index_a.nb_lines() != index_b.nb_lines() {
            return Err(Error::Misaligned {
                a: index_a.nb_lines(),
                b: index_b.nb_lines(),
            });
        }

        let (deletions, elapsed) = timed("finding parallel duplicates", || {
            find_parallel_duplicates(&index_a, &index_b, self.nb_workers)
        })?;
        timings.resolve = elapsed;

        let ((writer_a, stats_a), elapsed) = timed("[a] compiling new file", || {
            rewrite_pending(&self.src_a, &self.dst_a, &deletions)
        })?;
        timings.rewrite_a = elapsed;

        let ((writer_b, stats_b), elapsed) = timed("[b] compiling new file", || {
            rewrite_pending(&self.src_b, &self.dst_b, &deletions)
        })?;
        timings.rewrite_b = elapsed;

        publish_pair(writer_a.seal()?, writer_b.seal()?)?;

        Ok(DedupReport {
            src_a: self.src_a.clone(),
            src_b: self.src_b.clone(),
            dst_a: self.dst_a.clone(),
            dst_b: self.dst_b.clone(),
            strategy: self.strategy,
            workers: self.nb_workers,
            nb_lines: index_a.nb_lines(),
            duplicate_groups_a: index_a.duplicates().len(),
            duplicate_groups_b: index_b.duplicates().len(),
            deleted: deletions.len(),
            kept_a: stats_a.kept,
            kept_b: stats_b.kept,
            timings,
        })
    }
}

/// Publish both sides of a pair, or neither.
///
/// If the second rename fails, the first destination is removed again.
fn publish_pair(a: SealedFile, b: SealedFile) -> Result<(), Error> {
    let dst_a = a.persist()?;
    if let Err(e) = b.persist() {
        if let Err(rm) = std::fs::remove_file(&dst_a) {
            error!("[a] could not remove {:?} after failure: {}", dst_a, rm);
        }
        return Err(e);
    }
    Ok(())
}

/// Run `f`, logging its start and how long it took.
fn timed<T, F>(what: &str, f: F) -> Result<(T, f64), Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    info!("{}...", what);
    let start = Instant::now();
    let res = f()?;
    let elapsed = start.elapsed().as_secs_f64();
    info!("{}: done after {:.1} seconds", what, elapsed);
    Ok((res, elapsed))
}

/// Insert [MARKER] before the last extension of `src`, ignoring a trailing `.gz`.
///
/// `corpus.tc.de` becomes `corpus.tc.dupl_rem.de`, `corpus.de.gz` becomes `corpus.dupl_rem.de.gz`
/// and `corpus` becomes `corpus.dupl_rem`.
pub fn default_destination(src: &Path) -> PathBuf {
    let (base, gz) = if crate::io::is_gzip(src) {
        (src.with_extension(""), ".gz")
    } else {
        (src.to_path_buf(), "")
    };

    let name = match (base.file_stem(), base.extension()) {
        (Some(stem), Some(ext)) => format!(
            "{}.{}.{}{}",
            stem.to_string_lossy(),
            MARKER,
            ext.to_string_lossy(),
            gz
        ),
        _ => format!(
            "{}.{}{}",
            base.file_name().unwrap_or_default().to_string_lossy(),
            MARKER,
            gz
        ),
    };
    base.with_file_name(name)
}
