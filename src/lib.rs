//! Equal-width score distributions for histogram rendering
//!
//! This crate collects a bounded set of integer scores (e.g. student marks
//! for a module) and partitions them into a fixed number of equal-width
//! contiguous bins, reporting a count per bin. A downstream renderer
//! consumes the resulting (label, count) sequence directly; no plotting
//! happens here.
//!
//! # Key Properties
//!
//! - **Fixed range**: the `[min, max]` span is set at construction and
//!   every accumulated score is validated against it
//! - **Exact coverage**: bins are contiguous, equal-width, and jointly
//!   cover the full range; the last bin's upper edge is always `max`
//! - **Idempotent queries**: computing a distribution never mutates state
//! - **Atomic ingestion**: a batch containing any out-of-range element is
//!   rejected wholesale, leaving the accumulator untouched
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use score_distribution::ScoreAccumulator;
//!
//! let mut acc = ScoreAccumulator::default(); // scores in [0, 100]
//! acc.add_all(&[5, 15, 25, 95, 100])?;
//!
//! let dist = acc.distribution(10)?;
//! for bin in &dist {
//!     println!("{}: {}", bin.label(), bin.count);
//! }
//! assert_eq!(dist.counts(), vec![1, 1, 1, 0, 0, 0, 0, 0, 0, 2]);
//! # Ok::<(), score_distribution::Error>(())
//! ```
//!
//! ## Custom Ranges
//!
//! ```rust
//! use score_distribution::ScoreAccumulator;
//!
//! // A module marked out of 40.
//! let mut acc = ScoreAccumulator::new(40, 0)?;
//! acc.add_all(&[12, 31, 38])?;
//!
//! let dist = acc.distribution(4)?;
//! assert_eq!(dist.labels(), vec!["0-9", "10-19", "20-29", "30-40"]);
//! # Ok::<(), score_distribution::Error>(())
//! ```
//!
//! ## Ingesting Dynamically Typed Data
//!
//! Scores arriving from outside the process (a request body, a file) are
//! only structurally known at runtime; [`ScoreAccumulator::add_all_json`]
//! is the checked boundary for them.
//!
//! ```rust
//! use score_distribution::{Error, ScoreAccumulator};
//!
//! let mut acc = ScoreAccumulator::default();
//! acc.add_all_json(&serde_json::json!([55, 78, 91]))?;
//!
//! let err = acc.add_all_json(&serde_json::json!("not a list")).unwrap_err();
//! assert!(matches!(err, Error::InvalidInput(_)));
//! # Ok::<(), score_distribution::Error>(())
//! ```
//!
//! ## Merging Per-Producer Accumulators
//!
//! The accumulator has no internal synchronization. When several producers
//! collect scores concurrently, give each its own instance and merge before
//! querying.
//!
//! ```rust
//! use score_distribution::ScoreAccumulator;
//!
//! let mut combined = ScoreAccumulator::default();
//! let mut cohort_a = ScoreAccumulator::default();
//! let mut cohort_b = ScoreAccumulator::default();
//! cohort_a.add_all(&[40, 62])?;
//! cohort_b.add_all(&[88])?;
//!
//! combined.merge(&cohort_a)?;
//! combined.merge(&cohort_b)?;
//! assert_eq!(combined.len(), 3);
//! # Ok::<(), score_distribution::Error>(())
//! ```

pub mod accumulator;
pub mod error;
pub mod types;

pub use accumulator::{ScoreAccumulator, DEFAULT_MAX, DEFAULT_MIN};
pub use error::{Error, Result};
pub use types::{Bin, Distribution};

/// Build a distribution in one call: construct an accumulator for
/// `[min, max]`, add every score, and partition into `bins` bins.
///
/// ```rust
/// use score_distribution::score_distribution;
///
/// let dist = score_distribution(&[3, 7, 9], 10, 0, 2)?;
/// assert_eq!(dist.pairs(), vec![("0-4".to_string(), 1), ("5-10".to_string(), 2)]);
/// # Ok::<(), score_distribution::Error>(())
/// ```
pub fn score_distribution(scores: &[i64], max: i64, min: i64, bins: usize) -> Result<Distribution> {
    let mut acc = ScoreAccumulator::new(max, min)?;
    acc.add_all(scores)?;
    acc.distribution(bins)
}
