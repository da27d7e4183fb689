use serde::Serialize;
use tracing::debug;

use crate::box_plot::category_stats;
use crate::filters::{CgpaRange, FilterCell, SamplePercent};
use crate::models::{CategoryStats, CollegeCount, ScatterView, StackedBarView};
use crate::rollup::{top_colleges, DEFAULT_TOP_COLLEGES};
use crate::scatter::sample_points;
use crate::stacked_bar::bin_by_placement;
use crate::store::RecordStore;

/// Initial control values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardOptions {
    pub cgpa_range: CgpaRange,
    pub sample_percent: SamplePercent,
    pub focus_range: CgpaRange,
    pub top_colleges: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            cgpa_range: CgpaRange::default(),
            sample_percent: SamplePercent::default(),
            focus_range: CgpaRange::default(),
            top_colleges: DEFAULT_TOP_COLLEGES,
        }
    }
}

/// Every chart's current data, ready for a render adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub record_count: usize,
    pub stacked_bar: StackedBarView,
    pub scatter: ScatterView,
    pub top_colleges: Vec<CollegeCount>,
    pub skill_stats: Vec<CategoryStats>,
}

/// The four charts bound to one record store.
///
/// Each chart owns its filter cells. Setting a cell recomputes only the
/// chart that owns it; the rollup and box plot have no filters and are
/// computed once.
#[derive(Debug)]
pub struct Dashboard {
    store: RecordStore,
    cgpa_range: FilterCell<CgpaRange>,
    sample_percent: FilterCell<SamplePercent>,
    focus_range: FilterCell<CgpaRange>,
    stacked_bar: StackedBarView,
    scatter: ScatterView,
    top_colleges: Vec<CollegeCount>,
    skill_stats: Vec<CategoryStats>,
}

impl Dashboard {
    pub fn new(store: RecordStore, options: DashboardOptions) -> Self {
        let records = store.records();
        let stacked_bar = bin_by_placement(records, options.cgpa_range);
        let scatter = sample_points(records, options.sample_percent, options.focus_range);
        let top_colleges = top_colleges(records, options.top_colleges);
        let skill_stats = category_stats(records);
        debug!(
            records = store.len(),
            sampled = scatter.points.len(),
            colleges = top_colleges.len(),
            "dashboard initialised"
        );

        Self {
            store,
            cgpa_range: FilterCell::new(options.cgpa_range),
            sample_percent: FilterCell::new(options.sample_percent),
            focus_range: FilterCell::new(options.focus_range),
            stacked_bar,
            scatter,
            top_colleges,
            skill_stats,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn cgpa_range(&self) -> &FilterCell<CgpaRange> {
        &self.cgpa_range
    }

    pub fn sample_percent(&self) -> &FilterCell<SamplePercent> {
        &self.sample_percent
    }

    pub fn focus_range(&self) -> &FilterCell<CgpaRange> {
        &self.focus_range
    }

    /// Stacked-bar control. Leaves every other chart untouched.
    pub fn set_cgpa_range(&mut self, range: CgpaRange) -> &StackedBarView {
        if self.cgpa_range.set(range) {
            debug!(lo = range.lo(), hi = range.hi(), "rebinning CGPA distribution");
            self.stacked_bar = bin_by_placement(self.store.records(), range);
        }
        &self.stacked_bar
    }

    /// Scatter sampling control.
    pub fn set_sample_percent(&mut self, percent: SamplePercent) -> &ScatterView {
        if self.sample_percent.set(percent) {
            self.resample();
        }
        &self.scatter
    }

    /// Scatter emphasis control.
    pub fn set_focus_range(&mut self, focus: CgpaRange) -> &ScatterView {
        if self.focus_range.set(focus) {
            self.resample();
        }
        &self.scatter
    }

    fn resample(&mut self) {
        let percent = self.sample_percent.current_value();
        self.scatter = sample_points(
            self.store.records(),
            percent,
            self.focus_range.current_value(),
        );
        debug!(
            percent = percent.value(),
            sampled = self.scatter.points.len(),
            "resampled scatter points"
        );
    }

    pub fn stacked_bar(&self) -> &StackedBarView {
        &self.stacked_bar
    }

    pub fn scatter(&self) -> &ScatterView {
        &self.scatter
    }

    pub fn top_colleges(&self) -> &[CollegeCount] {
        &self.top_colleges
    }

    pub fn skill_stats(&self) -> &[CategoryStats] {
        &self.skill_stats
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            record_count: self.store.len(),
            stacked_bar: self.stacked_bar.clone(),
            scatter: self.scatter.clone(),
            top_colleges: self.top_colleges.clone(),
            skill_stats: self.skill_stats.clone(),
        }
    }
}
