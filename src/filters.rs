//! Per-chart filter state.
//!
//! Each chart owns its own cells and no type bundles them together. The
//! stacked bar reads only its [`CgpaRange`]; the scatter reads only its
//! [`SamplePercent`] and focus range. The rollup and box plot read nothing.

use serde::Serialize;

pub const CGPA_DOMAIN_MIN: f64 = 4.0;
pub const CGPA_DOMAIN_MAX: f64 = 11.0;
pub const DEFAULT_SAMPLE_PERCENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FilterError {
    #[error("CGPA bound must be a finite number, got {0}")]
    NonFiniteBound(f64),
    #[error("sample percentage must be a finite number, got {0}")]
    NonFinitePercent(f64),
}

/// Closed CGPA interval inside `[4, 11]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CgpaRange {
    lo: f64,
    hi: f64,
}

impl CgpaRange {
    /// Clamps both ends into the CGPA domain and swaps crossed bounds, the
    /// way the range slider treats thumbs dragged past each other.
    pub fn new(lo: f64, hi: f64) -> Result<Self, FilterError> {
        for bound in [lo, hi] {
            if !bound.is_finite() {
                return Err(FilterError::NonFiniteBound(bound));
            }
        }
        let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
        Ok(Self {
            lo: lo.clamp(CGPA_DOMAIN_MIN, CGPA_DOMAIN_MAX),
            hi: hi.clamp(CGPA_DOMAIN_MIN, CGPA_DOMAIN_MAX),
        })
    }

    pub fn full() -> Self {
        Self {
            lo: CGPA_DOMAIN_MIN,
            hi: CGPA_DOMAIN_MAX,
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn contains(&self, cgpa: f64) -> bool {
        cgpa >= self.lo && cgpa <= self.hi
    }
}

impl Default for CgpaRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Percentage of the store shown by the scatter chart.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SamplePercent(f64);

impl SamplePercent {
    pub fn new(percent: f64) -> Result<Self, FilterError> {
        if !percent.is_finite() {
            return Err(FilterError::NonFinitePercent(percent));
        }
        Ok(Self(percent.clamp(0.0, 100.0)))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a record with this sample key falls inside the sample.
    pub fn admits(self, sample_key: f64) -> bool {
        sample_key < self.0 / 100.0
    }
}

impl Default for SamplePercent {
    fn default() -> Self {
        Self(DEFAULT_SAMPLE_PERCENT)
    }
}

/// A single-writer state cell owned by one chart control.
#[derive(Debug, Clone, Default)]
pub struct FilterCell<T> {
    value: T,
    revision: u64,
}

impl<T: Copy + PartialEq> FilterCell<T> {
    pub fn new(value: T) -> Self {
        Self { value, revision: 0 }
    }

    pub fn current_value(&self) -> T {
        self.value
    }

    /// Number of effective changes since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stores `value`, returning `false` when it equals the current one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_defaults_to_full_domain() {
        let range = CgpaRange::default();
        assert_eq!(range.lo(), 4.0);
        assert_eq!(range.hi(), 11.0);
    }

    #[test]
    fn range_swaps_crossed_bounds_and_clamps() {
        let range = CgpaRange::new(9.0, 6.5).unwrap();
        assert_eq!((range.lo(), range.hi()), (6.5, 9.0));

        let range = CgpaRange::new(2.0, 14.0).unwrap();
        assert_eq!((range.lo(), range.hi()), (4.0, 11.0));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = CgpaRange::new(6.0, 8.0).unwrap();
        assert!(range.contains(6.0));
        assert!(range.contains(8.0));
        assert!(!range.contains(8.0001));
        assert!(!range.contains(5.9999));
    }

    #[test]
    fn range_rejects_nan() {
        assert!(matches!(
            CgpaRange::new(f64::NAN, 8.0),
            Err(FilterError::NonFiniteBound(_))
        ));
        assert!(matches!(
            CgpaRange::new(5.0, f64::INFINITY),
            Err(FilterError::NonFiniteBound(_))
        ));
    }

    #[test]
    fn percent_clamps_and_admits() {
        assert_eq!(SamplePercent::default().value(), 5.0);
        assert_eq!(SamplePercent::new(150.0).unwrap().value(), 100.0);
        assert_eq!(SamplePercent::new(-3.0).unwrap().value(), 0.0);

        let pct = SamplePercent::new(25.0).unwrap();
        assert!(pct.admits(0.2499));
        assert!(!pct.admits(0.25));
        assert!(!SamplePercent::new(0.0).unwrap().admits(0.0));
        assert!(SamplePercent::new(100.0).unwrap().admits(0.999_999));
        assert!(matches!(
            SamplePercent::new(f64::NAN),
            Err(FilterError::NonFinitePercent(_))
        ));
    }

    #[test]
    fn cell_counts_only_effective_changes() {
        let mut cell = FilterCell::new(SamplePercent::default());
        assert!(!cell.set(SamplePercent::default()));
        assert_eq!(cell.revision(), 0);

        assert!(cell.set(SamplePercent::new(40.0).unwrap()));
        assert_eq!(cell.revision(), 1);
        assert_eq!(cell.current_value().value(), 40.0);
    }
}
