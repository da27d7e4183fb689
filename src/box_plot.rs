use crate::models::{BoxStats, CategoryStats, Record, SkillCategory};

const FENCE_FACTOR: f64 = 1.5;

/// Box-plot statistics for each skill category, over placed students only.
pub fn category_stats(records: &[Record]) -> Vec<CategoryStats> {
    let placed: Vec<&Record> = records.iter().filter(|r| r.is_placed()).collect();

    SkillCategory::ALL
        .into_iter()
        .map(|category| {
            let values = placed.iter().map(|record| category.value(record)).collect();
            CategoryStats {
                category,
                stats: box_stats(values),
            }
        })
        .collect()
}

/// Quartiles and Tukey whiskers clamped to the observed data range.
///
/// An empty input yields all-zero statistics.
pub fn box_stats(mut values: Vec<f64>) -> BoxStats {
    values.sort_by(f64::total_cmp);
    let (Some(&min), Some(&max)) = (values.first(), values.last()) else {
        return BoxStats::default();
    };

    let q1 = quantile_sorted(&values, 0.25);
    let median = quantile_sorted(&values, 0.5);
    let q3 = quantile_sorted(&values, 0.75);
    let iqr = q3 - q1;
    let whisker_min = min.max(q1 - FENCE_FACTOR * iqr);
    let whisker_max = max.min(q3 + FENCE_FACTOR * iqr);
    let outliers = values
        .iter()
        .filter(|&&v| v < whisker_min || v > whisker_max)
        .count();

    BoxStats {
        count: values.len(),
        q1,
        median,
        q3,
        whisker_min,
        whisker_max,
        outliers,
    }
}

/// Linear-interpolation quantile of ascending `sorted` values.
///
/// The rank is `q * (n - 1)`; fractional ranks interpolate between the two
/// neighbouring observations. Returns 0 for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let low = sorted[lower];
    low + (sorted[upper] - low) * (rank - lower as f64)
}
