//! Accumulation of bounded integer scores and equal-width partitioning

use crate::error::{Error, Result};
use crate::types::{Bin, Distribution};

/// Default upper bound of the score range
pub const DEFAULT_MAX: i64 = 100;
/// Default lower bound of the score range
pub const DEFAULT_MIN: i64 = 0;

/// Accumulates integer scores within a fixed `[min, max]` range and
/// partitions them into a requested number of equal-width bins.
///
/// The range is fixed at construction and every accumulated score is
/// validated against it. Querying a distribution never mutates state, so
/// repeated queries over an unchanged accumulator return identical results.
///
/// # Examples
///
/// ```rust
/// use score_distribution::ScoreAccumulator;
///
/// let mut acc = ScoreAccumulator::new(100, 0)?;
/// acc.add_all(&[5, 15, 25, 95, 100])?;
///
/// let dist = acc.distribution(10)?;
/// assert_eq!(dist.len(), 10);
/// assert_eq!(dist.total_count(), 5);
/// # Ok::<(), score_distribution::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAccumulator {
    min: i64,
    max: i64,
    scores: Vec<i64>,
}

impl ScoreAccumulator {
    /// Create a new accumulator for scores in `[min, max]`.
    ///
    /// The argument order mirrors the conventional `(max, min)` defaults of
    /// `(100, 0)`; see [`ScoreAccumulator::default`] for exactly those.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] when `max <= min`.
    pub fn new(max: i64, min: i64) -> Result<Self> {
        Error::check_range(min, max)?;
        Ok(Self {
            min,
            max,
            scores: Vec::new(),
        })
    }

    /// Lower bound of the range (inclusive)
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound of the range (inclusive)
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Span of the range, `max - min`
    pub fn range(&self) -> i64 {
        self.max - self.min
    }

    /// Number of accumulated scores
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no scores have been accumulated
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// The accumulated scores, in insertion order
    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Append a batch of scores.
    ///
    /// The whole batch is validated before anything is appended: if any
    /// element lies outside `[min, max]`, the call fails and the
    /// accumulator is left exactly as it was. Successive calls accumulate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] identifying the first offending
    /// element and its index within the batch.
    pub fn add_all(&mut self, scores: &[i64]) -> Result<()> {
        for (index, &value) in scores.iter().enumerate() {
            if value < self.min || value > self.max {
                return Err(Error::OutOfBounds {
                    value,
                    index,
                    min: self.min,
                    max: self.max,
                });
            }
        }
        self.scores.extend_from_slice(scores);
        Ok(())
    }

    /// Append a batch of scores arriving as dynamically typed JSON.
    ///
    /// This is the boundary for externally sourced data, e.g. a request
    /// body that has only been parsed, not validated. The value must be an
    /// array of integers; anything else is rejected before any element is
    /// appended. Bounds checking and atomicity then follow
    /// [`ScoreAccumulator::add_all`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the value is not an array or
    /// contains a non-integer element, [`Error::OutOfBounds`] when an
    /// element lies outside the range.
    pub fn add_all_json(&mut self, raw: &serde_json::Value) -> Result<()> {
        let items = raw
            .as_array()
            .ok_or_else(|| Error::InvalidInput("expected an array of integers".to_string()))?;

        let mut scores = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let value = item.as_i64().ok_or_else(|| {
                Error::InvalidInput(format!("element at index {index} is not an integer"))
            })?;
            scores.push(value);
        }

        self.add_all(&scores)
    }

    /// Absorb another accumulator's scores.
    ///
    /// This is the merge step for the one-accumulator-per-producer pattern:
    /// each producer fills its own instance and the sets are combined
    /// before querying. Both accumulators must share the same range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the ranges differ.
    pub fn merge(&mut self, other: &ScoreAccumulator) -> Result<()> {
        if self.min != other.min || self.max != other.max {
            return Err(Error::InvalidInput(format!(
                "range mismatch: [{}, {}] vs [{}, {}]",
                self.min, self.max, other.min, other.max
            )));
        }
        self.scores.extend_from_slice(&other.scores);
        Ok(())
    }

    /// Partition the range into `bins` equal-width bins and count the
    /// accumulated scores falling into each.
    ///
    /// Bin edges are inclusive on both ends. Each bin spans `width - 1`
    /// above its start except the last, whose upper edge is forced to
    /// `max` so the bins jointly cover the full range. The computation is
    /// read-only and recomputed fresh on every call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBinCount`] when `bins` is zero and
    /// [`Error::NonDivisibleBins`] when `max - min` is not evenly
    /// divisible by `bins`. No partial result is produced.
    pub fn distribution(&self, bins: usize) -> Result<Distribution> {
        Error::check_bin_count(self.range(), bins)?;
        let width = self.range() / bins as i64;

        let mut out = Vec::with_capacity(bins);
        let mut lo = self.min;
        for _ in 0..bins {
            let hi = if lo + width == self.max {
                self.max
            } else {
                lo + width - 1
            };
            let count = self.scores.iter().filter(|&&s| s >= lo && s <= hi).count();
            out.push(Bin::new(lo, hi, count));
            lo += width;
        }

        Ok(Distribution::new(out))
    }
}

impl Default for ScoreAccumulator {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            scores: Vec::new(),
        }
    }
}
