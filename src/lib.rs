//! Chart-ready aggregates for the university placement dashboard.
//!
//! A [`RecordStore`] is loaded once from CSV. Four pure functions turn it
//! into the data behind each chart:
//!
//! - [`stacked_bar::bin_by_placement`]: CGPA distribution by placement
//! - [`scatter::sample_points`]: IQ vs CGPA sample with focus flags
//! - [`rollup::top_colleges`]: colleges with the most placed students
//! - [`box_plot::category_stats`]: skill-score quartiles of placed students
//!
//! [`Dashboard`] binds them to per-chart filter cells so that moving one
//! chart's control never changes another chart.

pub mod box_plot;
pub mod dashboard;
pub mod filters;
pub mod models;
pub mod report;
pub mod rollup;
pub mod scatter;
pub mod stacked_bar;
pub mod store;

pub use dashboard::{Dashboard, DashboardOptions, DashboardSnapshot};
pub use filters::{CgpaRange, FilterCell, FilterError, SamplePercent};
pub use store::{LoadError, RecordStore};
