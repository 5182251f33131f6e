//! Line positions to drop from both corpora.
use super::index::LineSet;

/// Set of 1-based line numbers that are removed from both corpora.
///
/// Partial sets coming from workers are combined with [DeletionSet::merge], which is a plain union.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeletionSet {
    inner: LineSet,
}

impl DeletionSet {
    pub fn contains(&self, line: usize) -> bool {
        self.inner.contains(&line)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Union of two sets. The smaller one is moved into the larger one.
    pub fn merge(self, other: Self) -> Self {
        let (mut large, small) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        large.inner.extend(small.inner);
        large
    }

    /// Line numbers in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.inner.iter().copied().collect();
        lines.sort_unstable();
        lines
    }
}

impl FromIterator<usize> for DeletionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<usize> for DeletionSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_union() {
        let a: DeletionSet = [1, 3, 5].into_iter().collect();
        let b: DeletionSet = [2, 3].into_iter().collect();

        assert_eq!(a.clone().merge(b.clone()).sorted(), vec![1, 2, 3, 5]);
        assert_eq!(a.clone().merge(b.clone()), b.merge(a));
    }

    #[test]
    fn merge_with_empty() {
        let a: DeletionSet = [4, 2].into_iter().collect();
        assert_eq!(a.clone().merge(DeletionSet::default()), a);
        assert_eq!(DeletionSet::default().merge(a.clone()), a);
    }

    #[test]
    fn contains() {
        let mut d = DeletionSet::default();
        assert!(d.is_empty());
        d.extend([7, 7, 9]);
        assert_eq!(d.len(), 2);
        assert!(d.contains(7));
        assert!(!d.contains(8));
    }
}
