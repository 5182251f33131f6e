/*! Corpus processing

- [dedup]: parallel-duplicate detection over a corpus pair.
- [rewrite]: removal of line positions from a corpus file.
- [duplicates]: listing of the duplicate groups of a single corpus.
!*/
pub mod dedup;
pub mod duplicates;
pub mod report;
pub mod rewrite;

pub use dedup::ParallelDedup;
pub use report::DedupReport;
