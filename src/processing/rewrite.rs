/*! Corpus rewriting

Streams a corpus file, leaving out the lines whose number is in a [DeletionSet].
Kept lines are copied byte for byte, terminator included, in their original order.

Applying the same [DeletionSet] to both sides of a corpus pair keeps them aligned.
!*/
use std::io::Write;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::Error;
use crate::io::reader::RawLineReader;
use crate::io::writer::TextWriter;
use crate::processing::dedup::DeletionSet;

/// Line counts of a rewritten corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    pub kept: usize,
    pub dropped: usize,
}

/// Rewrite `src` into `dst` without the lines of `deletions`.
pub fn rewrite(src: &Path, dst: &Path, deletions: &DeletionSet) -> Result<RewriteStats, Error> {
    let (writer, stats) = rewrite_pending(src, dst, deletions)?;
    writer.finish()?;
    Ok(stats)
}

/// Same as [rewrite], but leaves the output unpublished.
///
/// Nothing appears at `dst` until [TextWriter::finish] is called on the returned writer.
/// This allows publishing both sides of a pair only once both are complete.
pub fn rewrite_pending(
    src: &Path,
    dst: &Path,
    deletions: &DeletionSet,
) -> Result<(TextWriter, RewriteStats), Error> {
    // open input first so that a missing source never creates output.
    let reader = RawLineReader::new(src)?;
    let mut writer = TextWriter::new(dst)?;
    debug!("rewriting {:?} to {:?}", src, dst);

    let stats = filter_lines(reader, &mut writer, deletions, dst)?;
    writer.flush().map_err(|e| Error::output(dst, e))?;
    Ok((writer, stats))
}

fn filter_lines<I, W>(
    lines: I,
    w: &mut W,
    deletions: &DeletionSet,
    dst: &Path,
) -> Result<RewriteStats, Error>
where
    I: Iterator<Item = Result<(usize, Vec<u8>), Error>>,
    W: Write,
{
    let mut stats = RewriteStats::default();
    for line in lines {
        let (line_no, raw) = line?;
        if deletions.contains(line_no) {
            stats.dropped += 1;
        } else {
            w.write_all(&raw).map_err(|e| Error::output(dst, e))?;
            stats.kept += 1;
        }
    }
    Ok(stats)
}
