/*! Line indexing

Groups the line numbers of a single corpus by exact line content, keeping only contents that occur more than once.

Two mechanisms are available (see [IndexStrategy]), both yielding the same [CorpusIndex].
!*/
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::BuildHasherDefault;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use twox_hash::XxHash64;

use crate::error::Error;
use crate::io::reader::LineReader;

pub(crate) type XxBuildHasher = BuildHasherDefault<XxHash64>;

/// Set of 1-based line numbers.
pub type LineSet = HashSet<usize, XxBuildHasher>;

/// How duplicate lines are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStrategy {
    /// Single pass into a hash map keyed by content.
    #[default]
    Hash,
    /// Parallel sort of `(content, line)` pairs, then a scan for runs of equal content.
    Sort,
}

impl FromStr for IndexStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hash" => Ok(Self::Hash),
            "sort" => Ok(Self::Sort),
            other => Err(format!("unknown index strategy {:?} (hash|sort)", other)),
        }
    }
}

impl fmt::Display for IndexStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash => f.write_str("hash"),
            Self::Sort => f.write_str("sort"),
        }
    }
}

/// Content → line numbers, for contents occurring at least twice.
#[derive(Debug, Default)]
pub struct DuplicateIndex {
    inner: HashMap<Arc<str>, LineSet, XxBuildHasher>,
}

impl DuplicateIndex {
    pub fn get(&self, content: &str) -> Option<&LineSet> {
        self.inner.get(content)
    }

    /// Number of distinct duplicated contents.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LineSet)> {
        self.inner.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Line number sets, one per duplicated content.
    pub fn sets(&self) -> impl Iterator<Item = &LineSet> {
        self.inner.values()
    }
}

/// Line number → content, for duplicated lines only.
#[derive(Debug, Default)]
pub struct ReverseIndex {
    inner: HashMap<usize, Arc<str>, XxBuildHasher>,
}

impl ReverseIndex {
    pub fn get(&self, line: usize) -> Option<&str> {
        self.inner.get(&line).map(|s| s.as_ref())
    }

    pub fn contains(&self, line: usize) -> bool {
        self.inner.contains_key(&line)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Duplicate and reverse indices of one corpus, along with its line count.
///
/// Contents are stored once and shared between both indices.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    duplicates: DuplicateIndex,
    reverse: ReverseIndex,
    nb_lines: usize,
}

impl CorpusIndex {
    /// Index the file at `src`.
    pub fn from_path(src: &Path, strategy: IndexStrategy) -> Result<Self, Error> {
        debug!("indexing {:?} ({})", src, strategy);
        Self::from_lines(LineReader::new(src)?, strategy)
    }

    /// Index numbered lines. Numbers are expected to be 1-based and contiguous.
    pub fn from_lines<I>(lines: I, strategy: IndexStrategy) -> Result<Self, Error>
    where
        I: Iterator<Item = Result<(usize, String), Error>>,
    {
        match strategy {
            IndexStrategy::Hash => Self::by_hash(lines),
            IndexStrategy::Sort => Self::by_sort(lines),
        }
    }

    fn by_hash<I>(lines: I) -> Result<Self, Error>
    where
        I: Iterator<Item = Result<(usize, String), Error>>,
    {
        let mut positions: HashMap<String, Vec<usize>, XxBuildHasher> = HashMap::default();
        let mut nb_lines = 0;
        for line in lines {
            let (line_no, content) = line?;
            positions.entry(content).or_default().push(line_no);
            nb_lines += 1;
        }

        let groups = positions
            .into_iter()
            .filter(|(_, lines)| lines.len() > 1);
        Ok(Self::from_groups(groups, nb_lines))
    }

    fn by_sort<I>(lines: I) -> Result<Self, Error>
    where
        I: Iterator<Item = Result<(usize, String), Error>>,
    {
        let mut pairs: Vec<(String, usize)> = lines
            .map(|line| line.map(|(line_no, content)| (content, line_no)))
            .collect::<Result<_, _>>()?;
        let nb_lines = pairs.len();
        pairs.par_sort_unstable();

        let mut groups = Vec::new();
        let mut pairs = pairs.into_iter().peekable();
        while let Some((content, line_no)) = pairs.next() {
            let mut run = vec![line_no];
            while let Some((_, next_line)) = pairs.next_if(|(next, _)| *next == content) {
                run.push(next_line);
            }
            if run.len() > 1 {
                groups.push((content, run));
            }
        }

        Ok(Self::from_groups(groups.into_iter(), nb_lines))
    }

    /// Build both indices from groups that are already known to be duplicates.
    fn from_groups<G>(groups: G, nb_lines: usize) -> Self
    where
        G: Iterator<Item = (String, Vec<usize>)>,
    {
        let mut duplicates = DuplicateIndex::default();
        let mut reverse = ReverseIndex::default();
        for (content, lines) in groups {
            let content: Arc<str> = Arc::from(content);
            for line in &lines {
                reverse.inner.insert(*line, content.clone());
            }
            duplicates
                .inner
                .insert(content, lines.into_iter().collect());
        }

        Self {
            duplicates,
            reverse,
            nb_lines,
        }
    }

    pub fn duplicates(&self) -> &DuplicateIndex {
        &self.duplicates
    }

    pub fn reverse(&self) -> &ReverseIndex {
        &self.reverse
    }

    /// Total number of lines in the indexed corpus, duplicated or not.
    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }

    /// Insert a reverse entry without touching the duplicate index.
    #[cfg(test)]
    pub(crate) fn with_reverse_entry(mut self, line: usize, content: &str) -> Self {
        self.reverse.inner.insert(line, Arc::from(content));
        self
    }
}
