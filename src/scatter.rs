use crate::filters::{CgpaRange, SamplePercent};
use crate::models::{Record, ScatterDomain, ScatterPoint, ScatterView};

const IQ_PADDING: f64 = 5.0;
const CGPA_PADDING: f64 = 0.5;

/// Selects the records whose fixed sample key falls under `percent`.
///
/// Keys are drawn once at load, so the selection grows monotonically with
/// the percentage and is stable across calls. `focus` only marks points for
/// emphasis; it never removes them.
pub fn sample_points(records: &[Record], percent: SamplePercent, focus: CgpaRange) -> ScatterView {
    let mut points: Vec<ScatterPoint> = records
        .iter()
        .filter(|record| percent.admits(record.sample_key))
        .map(|record| ScatterPoint {
            index: record.index,
            college_id: record.college_id.clone(),
            iq: record.iq,
            cgpa: record.cgpa,
            internship: record.internship_experience,
            placement: record.placement,
            in_focus: focus.contains(record.cgpa),
        })
        .collect();
    points.sort_by_key(|point| point.index);

    ScatterView {
        percent,
        focus,
        points,
        total_records: records.len(),
        domain: axis_domain(records),
    }
}

/// Padded IQ and CGPA extents over every record, so the axes do not jump
/// while the sample changes.
pub fn axis_domain(records: &[Record]) -> Option<ScatterDomain> {
    let first = records.first()?;
    let init = (first.iq, first.iq, first.cgpa, first.cgpa);
    let (iq_min, iq_max, cgpa_min, cgpa_max) =
        records.iter().fold(init, |(iq_lo, iq_hi, cg_lo, cg_hi), r| {
            (
                iq_lo.min(r.iq),
                iq_hi.max(r.iq),
                cg_lo.min(r.cgpa),
                cg_hi.max(r.cgpa),
            )
        });

    Some(ScatterDomain {
        iq: (iq_min - IQ_PADDING, iq_max + IQ_PADDING),
        cgpa: (cgpa_min - CGPA_PADDING, cgpa_max + CGPA_PADDING),
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::fixtures::record;
    use crate::models::YesNo;

    fn keyed(keys: &[f64]) -> Vec<Record> {
        keys.iter()
            .enumerate()
            .map(|(i, &key)| Record {
                sample_key: key,
                ..record(i, "CLG", 5.0 + i as f64 * 0.5, YesNo::Yes)
            })
            .collect()
    }

    fn pct(value: f64) -> SamplePercent {
        SamplePercent::new(value).unwrap()
    }

    fn indices(view: &ScatterView) -> Vec<usize> {
        view.points.iter().map(|p| p.index).collect()
    }

    #[test]
    fn zero_percent_is_empty() {
        let records = keyed(&[0.0, 0.3, 0.9]);
        let view = sample_points(&records, pct(0.0), CgpaRange::default());
        assert!(view.points.is_empty());
        assert_eq!(view.total_records, 3);
    }

    #[test]
    fn hundred_percent_is_everything() {
        let records = keyed(&[0.0, 0.3, 0.999_999]);
        let view = sample_points(&records, pct(100.0), CgpaRange::default());
        assert_eq!(indices(&view), vec![0, 1, 2]);
    }

    #[test]
    fn threshold_is_strict() {
        let records = keyed(&[0.05, 0.049, 0.5]);
        let view = sample_points(&records, pct(5.0), CgpaRange::default());
        assert_eq!(indices(&view), vec![1]);
    }

    #[test]
    fn focus_marks_without_excluding() {
        // cgpa values: 5.0, 5.5, 6.0, 6.5
        let records = keyed(&[0.1, 0.1, 0.1, 0.1]);
        let focus = CgpaRange::new(5.5, 6.0).unwrap();
        let view = sample_points(&records, pct(50.0), focus);

        assert_eq!(view.points.len(), 4);
        let flags: Vec<_> = view.points.iter().map(|p| p.in_focus).collect();
        assert_eq!(flags, vec![false, true, true, false]);
        assert_eq!(view.focused_count(), 2);
    }

    #[test]
    fn domain_covers_full_store_not_sample() {
        let mut records = keyed(&[0.9, 0.01]);
        records[0].iq = 140.0;
        records[1].iq = 80.0;
        let view = sample_points(&records, pct(5.0), CgpaRange::default());

        assert_eq!(view.points.len(), 1);
        let domain = view.domain.unwrap();
        assert_eq!(domain.iq, (75.0, 145.0));
        assert_eq!(domain.cgpa, (4.5, 6.0));
    }

    #[test]
    fn empty_store_has_no_domain() {
        let view = sample_points(&[], pct(50.0), CgpaRange::default());
        assert!(view.domain.is_none());
        assert!(view.points.is_empty());
    }

    #[test]
    fn resampling_is_idempotent() {
        let records = keyed(&[0.2, 0.7, 0.1, 0.4]);
        let a = sample_points(&records, pct(45.0), CgpaRange::default());
        let b = sample_points(&records, pct(45.0), CgpaRange::default());
        assert_eq!(a, b);
        assert_eq!(indices(&a), vec![0, 2, 3]);
    }

    proptest! {
        #[test]
        fn raising_threshold_only_adds_points(
            keys in proptest::collection::vec(0.0..1.0f64, 0..200),
            t1 in 0.0..=100.0f64,
            t2 in 0.0..=100.0f64,
        ) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let records = keyed(&keys);
            let small = indices(&sample_points(&records, pct(lo), CgpaRange::default()));
            let large = indices(&sample_points(&records, pct(hi), CgpaRange::default()));

            prop_assert!(small.len() <= large.len());
            for index in &small {
                prop_assert!(large.contains(index));
            }
            prop_assert!(large.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
