use crate::filters::{CgpaRange, CGPA_DOMAIN_MAX, CGPA_DOMAIN_MIN};
use crate::models::{CgpaBin, Record, StackedBarView, YesNo};

pub const BIN_WIDTH: f64 = 0.5;
pub const BIN_COUNT: usize = 14;

/// Counts placed and not-placed students per half-open CGPA bin.
///
/// Bin edges always span `[4, 11)` in steps of 0.5; `range` only decides
/// which records are counted. A CGPA of exactly 11.0 passes the range filter
/// but belongs to no bin.
pub fn bin_by_placement(records: &[Record], range: CgpaRange) -> StackedBarView {
    let mut bins: Vec<CgpaBin> = (0..BIN_COUNT)
        .map(|i| {
            let lower = bin_edge(i);
            CgpaBin {
                lower,
                upper: bin_edge(i + 1),
                label: format!("{lower:.1}"),
                placed: 0,
                not_placed: 0,
                total: 0,
            }
        })
        .collect();

    for record in records.iter().filter(|r| range.contains(r.cgpa)) {
        let Some(slot) = bin_index(record.cgpa) else {
            continue;
        };
        let bin = &mut bins[slot];
        match record.placement {
            YesNo::Yes => bin.placed += 1,
            YesNo::No => bin.not_placed += 1,
        }
        bin.total += 1;
    }

    StackedBarView { range, bins }
}

fn bin_edge(i: usize) -> f64 {
    CGPA_DOMAIN_MIN + i as f64 * BIN_WIDTH
}

fn bin_index(cgpa: f64) -> Option<usize> {
    if !(CGPA_DOMAIN_MIN..CGPA_DOMAIN_MAX).contains(&cgpa) {
        return None;
    }
    let slot = ((cgpa - CGPA_DOMAIN_MIN) / BIN_WIDTH).floor() as usize;
    Some(slot.min(BIN_COUNT - 1))
}
