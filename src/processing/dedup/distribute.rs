/*! Work distribution

Duplicate groups of corpus a are spread over a fixed number of workers, each running on its own thread of a dedicated [rayon] pool.

Groups are sorted by decreasing size and dealt round-robin, so that the few very large groups end up on different workers.
Workers share nothing but read-only indices; their results are merged once all of them are done.
!*/
use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::error::Error;

use super::deletion::DeletionSet;
use super::index::{CorpusIndex, LineSet};
use super::resolve::parallel_duplicates;

/// Split `groups` into `nb_workers` batches: worker `i` gets the groups at positions `i`, `i + nb_workers`, … of the size-sorted list.
///
/// `nb_workers` has to be at least 1.
pub(crate) fn partition<'a, I>(groups: I, nb_workers: usize) -> Vec<Vec<&'a LineSet>>
where
    I: IntoIterator<Item = &'a LineSet>,
{
    let mut batches: Vec<Vec<&LineSet>> = (0..nb_workers).map(|_| Vec::new()).collect();
    for (rank, group) in groups
        .into_iter()
        .sorted_by_key(|group| Reverse(group.len()))
        .enumerate()
    {
        batches[rank % nb_workers].push(group);
    }
    batches
}

/// Process a batch of corpus a groups against corpus b.
fn run_worker(worker: usize, batch: &[&LineSet], b: &CorpusIndex) -> Result<DeletionSet, Error> {
    debug!("worker {}: {} groups", worker, batch.len());
    let mut deletions = DeletionSet::default();
    for group in batch {
        let found = parallel_duplicates(group, b).map_err(|e| Error::Worker {
            worker,
            source: Box::new(e),
        })?;
        deletions.extend(found);
    }
    debug!("worker {}: {} lines to delete", worker, deletions.len());
    Ok(deletions)
}

/// Find every parallel duplicate of the corpus pair indexed by `a` and `b`, using `nb_workers` threads.
///
/// The first failing worker makes the whole call fail; no partial result is returned.
pub fn find_parallel_duplicates(
    a: &CorpusIndex,
    b: &CorpusIndex,
    nb_workers: usize,
) -> Result<DeletionSet, Error> {
    if nb_workers == 0 {
        return Err(Error::InvalidWorkerCount(nb_workers));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(nb_workers)
        .thread_name(|i| format!("dedup-worker-{}", i))
        .build()?;

    let batches = partition(a.duplicates().sets(), nb_workers);
    let partials: Vec<DeletionSet> = pool.install(|| {
        batches
            .par_iter()
            .enumerate()
            .map(|(worker, batch)| run_worker(worker, batch, b))
            .collect::<Result<Vec<DeletionSet>, Error>>()
    })?;

    Ok(partials
        .into_iter()
        .fold(DeletionSet::default(), DeletionSet::merge))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::dedup::index::IndexStrategy;

    fn index(lines: &[&str]) -> CorpusIndex {
        let lines = lines
            .iter()
            .enumerate()
            .map(|(idx, l)| Ok((idx + 1, l.to_string())))
            .collect::<Vec<_>>();
        CorpusIndex::from_lines(lines.into_iter(), IndexStrategy::Hash).unwrap()
    }

    fn set(lines: &[usize]) -> LineSet {
        lines.iter().copied().collect()
    }

    #[test]
    fn round_robin_by_size() {
        let groups = vec![
            set(&[1, 2]),
            set(&[3, 4, 5, 6, 7]),
            set(&[8, 9, 10]),
            set(&[11, 12, 13, 14]),
            set(&[15, 16]),
        ];
        let batches = partition(groups.iter(), 2);

        let sizes: Vec<Vec<usize>> = batches
            .iter()
            .map(|b| b.iter().map(|g| g.len()).collect())
            .collect();
        assert_eq!(sizes, vec![vec![5, 3, 2], vec![4, 2]]);
    }

    #[test]
    fn every_group_assigned_once() {
        let groups: Vec<LineSet> = (0..17).map(|i| set(&[2 * i + 1, 2 * i + 2])).collect();
        for nb_workers in 1..6 {
            let batches = partition(groups.iter(), nb_workers);
            assert_eq!(batches.len(), nb_workers);
            let assigned: usize = batches.iter().map(|b| b.len()).sum();
            assert_eq!(assigned, groups.len());
        }
    }

    #[test]
    fn more_workers_than_groups() {
        let groups = vec![set(&[1, 2])];
        let batches = partition(groups.iter(), 4);
        assert_eq!(batches.iter().filter(|b| b.is_empty()).count(), 3);
    }

    #[test]
    fn concrete_scenario() {
        let a = index(&["cat", "dog", "cat", "cat"]);
        let b = index(&["chat", "chien", "chat", "minou"]);
        let d = find_parallel_duplicates(&a, &b, 2).unwrap();
        assert_eq!(d.sorted(), vec![1, 3]);
    }

    #[test]
    fn worker_count_does_not_matter() {
        let a = index(&[
            "a", "b", "a", "c", "b", "a", "d", "c", "e", "e", "a", "b", "f",
        ]);
        let b = index(&[
            "A", "B", "A", "C", "B2", "A", "D", "C", "E", "E", "A2", "B", "F",
        ]);
        let reference = find_parallel_duplicates(&a, &b, 1).unwrap();
        assert_eq!(reference.sorted(), vec![1, 2, 3, 4, 6, 8, 9, 10, 12]);
        for nb_workers in 2..=8 {
            assert_eq!(find_parallel_duplicates(&a, &b, nb_workers).unwrap(), reference);
        }
    }

    #[test]
    fn zero_workers() {
        let a = index(&["a"]);
        assert!(matches!(
            find_parallel_duplicates(&a, &a, 0),
            Err(Error::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn worker_failure_is_propagated() {
        let a = index(&["x", "y", "x", "y"]);
        let b = index(&["u", "v", "w", "z"]).with_reverse_entry(1, "u");
        assert!(matches!(
            find_parallel_duplicates(&a, &b, 2),
            Err(Error::Worker { .. })
        ));
    }
}
