/*! Cross-referencing

Finds, inside one duplicate group of corpus a, the line numbers that are duplicates of each other in corpus b too.

A line of the group is a parallel duplicate if at least one other line of the group carries the same content in corpus b.
Lines of a group whose paired content is unique in corpus b are never reported.
!*/
use crate::error::Error;

use super::index::{CorpusIndex, LineSet};

/// Lines of `group` (a duplicate group of corpus a) that also form duplicates in corpus b, whose index is `other`.
///
/// Stops as soon as a group of corpus b covers the whole of `group`, since no other line can add anything.
pub fn parallel_duplicates(group: &LineSet, other: &CorpusIndex) -> Result<LineSet, Error> {
    let mut found = LineSet::default();

    for &line in group {
        let content = match other.reverse().get(line) {
            Some(content) => content,
            None => continue,
        };

        let other_group = other
            .duplicates()
            .get(content)
            .filter(|lines| lines.contains(&line))
            .ok_or(Error::MalformedIndex(line))?;

        let shared = intersection(group, other_group);
        if shared.len() > 1 {
            found.extend(&shared);
        }

        // shared is a subset of group, so equal sizes mean group is covered.
        if shared.len() == group.len() {
            break;
        }
    }

    Ok(found)
}

/// Iterates over the smaller set.
fn intersection(a: &LineSet, b: &LineSet) -> LineSet {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter(|line| large.contains(line))
        .copied()
        .collect()
}
