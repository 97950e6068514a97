//! Core types for score distribution representation

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

/// A single bin in a score distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bin {
    /// Lower edge of the bin (inclusive)
    pub lo: i64,
    /// Upper edge of the bin (inclusive)
    pub hi: i64,
    /// Number of scores in this bin
    pub count: usize,
}

impl Bin {
    /// Create a new bin
    pub fn new(lo: i64, hi: i64, count: usize) -> Self {
        Self { lo, hi, count }
    }

    /// Label for this bin, e.g. a bin spanning 10..=19 is labelled "10-19"
    pub fn label(&self) -> String {
        format!("{}-{}", self.lo, self.hi)
    }

    /// Check if a score falls within this bin
    pub fn contains(&self, value: i64) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Number of integer values the bin spans
    pub fn width(&self) -> i64 {
        self.hi - self.lo + 1
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]: count={}", self.lo, self.hi, self.count)
    }
}

/// An ordered set of contiguous bins covering the accumulator's full range
///
/// Produced by [`crate::ScoreAccumulator::distribution`]; bins appear in
/// ascending order of their lower edge and jointly cover the configured
/// range with no gaps and no overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    bins: Vec<Bin>,
}

impl Distribution {
    pub(crate) fn new(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    /// Get the bins
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the distribution has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get labels as a vector
    pub fn labels(&self) -> Vec<String> {
        self.bins.iter().map(|bin| bin.label()).collect()
    }

    /// Get (label, count) pairs in bin order
    pub fn pairs(&self) -> Vec<(String, usize)> {
        self.bins.iter().map(|bin| (bin.label(), bin.count)).collect()
    }

    /// Get the total count across all bins
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin contains a given score
    pub fn find_bin(&self, value: i64) -> Option<usize> {
        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Iterate over the bins
    pub fn iter(&self) -> std::slice::Iter<'_, Bin> {
        self.bins.iter()
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a Bin;
    type IntoIter = std::slice::Iter<'a, Bin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}

// Serialized as an ordered array of [label, count] entries so that a
// downstream renderer receives the bins in ascending order.
impl Serialize for Distribution {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.bins.len()))?;
        for bin in &self.bins {
            seq.serialize_element(&(bin.label(), bin.count))?;
        }
        seq.end()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distribution({} bins, n={})", self.len(), self.total_count())
    }
}
