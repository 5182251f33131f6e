/*! Duplicate listing

Writes the duplicate groups of a single corpus, one `<line>\t<content>` entry per duplicated line.
Groups are sorted by content and line numbers are ascending within a group, so that identical lines are listed next to each other.
!*/
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use log::info;

use crate::error::Error;
use crate::io::writer::TextWriter;
use crate::processing::dedup::{CorpusIndex, IndexStrategy};

/// List duplicated lines of `src` into `dst`. Returns the number of duplicate groups.
pub fn list_duplicates(src: &Path, dst: &Path, strategy: IndexStrategy) -> Result<usize, Error> {
    let index = CorpusIndex::from_path(src, strategy)?;
    let mut w = TextWriter::new(dst)?;
    write_groups(&index, &mut w).map_err(|e| Error::output(dst, e))?;
    w.finish()?;

    info!(
        "{:?}: {} duplicate groups over {} lines",
        src,
        index.duplicates().len(),
        index.reverse().len()
    );
    Ok(index.duplicates().len())
}

fn write_groups<W: Write>(index: &CorpusIndex, w: &mut W) -> std::io::Result<()> {
    for (content, lines) in index
        .duplicates()
        .iter()
        .sorted_unstable_by_key(|(content, _)| *content)
    {
        for line in lines.iter().sorted_unstable() {
            writeln!(w, "{}\t{}", line, content)?;
        }
    }
    Ok(())
}
