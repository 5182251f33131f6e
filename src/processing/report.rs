//! Run report, logged at the end of a run and optionally saved as JSON.
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::io::writer::TextWriter;
use crate::processing::dedup::IndexStrategy;

/// Elapsed time of each phase, in seconds.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Timings {
    pub index_a: f64,
    pub index_b: f64,
    pub resolve: f64,
    pub rewrite_a: f64,
    pub rewrite_b: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DedupReport {
    pub src_a: PathBuf,
    pub src_b: PathBuf,
    pub dst_a: PathBuf,
    pub dst_b: PathBuf,
    pub strategy: IndexStrategy,
    pub workers: usize,
    /// Lines in each input corpus.
    pub nb_lines: usize,
    pub duplicate_groups_a: usize,
    pub duplicate_groups_b: usize,
    /// Positions removed from both corpora.
    pub deleted: usize,
    pub kept_a: usize,
    pub kept_b: usize,
    pub timings: Timings,
}

impl DedupReport {
    pub fn log_summary(&self) {
        info!(
            "{} lines, {} duplicate groups in a, {} in b",
            self.nb_lines, self.duplicate_groups_a, self.duplicate_groups_b
        );
        info!(
            "{} parallel duplicates removed, {} lines kept",
            self.deleted, self.kept_a
        );
        info!("[a] written to {:?}", self.dst_a);
        info!("[b] written to {:?}", self.dst_b);
    }

    /// Save as pretty-printed JSON at `dst`.
    pub fn write_json(&self, dst: &Path) -> Result<(), Error> {
        let mut w = TextWriter::new(dst)?;
        serde_json::to_writer_pretty(&mut w, self)?;
        w.write_all(b"\n").map_err(|e| Error::output(dst, e))?;
        w.finish()?;
        Ok(())
    }
}
