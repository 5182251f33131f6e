/*! # paradedup

Removal of parallel duplicates from sentence-aligned bilingual corpora.

Line `n` of corpus a and line `n` of corpus b are translations of each other.
A sentence pair is a duplicate when the same a-sentence *and* the same b-sentence occur together at several line numbers.
Those line numbers are removed from both files, so that the outputs stay aligned.

```no_run
use std::path::PathBuf;
use paradedup::processing::ParallelDedup;

let report = ParallelDedup::new(PathBuf::from("corpus.de"), PathBuf::from("corpus.es"), 4).run()?;
println!("{} pairs removed", report.deleted);
# Ok::<(), paradedup::error::Error>(())
```
!*/
pub mod error;
pub mod io;
pub mod processing;
