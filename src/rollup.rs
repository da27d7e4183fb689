use std::collections::HashMap;

use crate::models::{CollegeCount, Record};

pub const DEFAULT_TOP_COLLEGES: usize = 10;

/// Counts placed students per college and keeps the `limit` largest groups.
///
/// Groups are collected in first-encounter order and sorted with a stable
/// sort, so colleges with equal counts stay in the order they first appear
/// in `records`.
pub fn top_colleges(records: &[Record], limit: usize) -> Vec<CollegeCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CollegeCount> = Vec::new();

    for record in records.iter().filter(|r| r.is_placed()) {
        let slot = *positions
            .entry(record.college_id.as_str())
            .or_insert_with(|| {
                groups.push(CollegeCount {
                    college_id: record.college_id.clone(),
                    count: 0,
                });
                groups.len() - 1
            });
        groups[slot].count += 1;
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(limit);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::record;
    use crate::models::YesNo;

    fn placed(colleges: &[&str]) -> Vec<Record> {
        colleges
            .iter()
            .enumerate()
            .map(|(i, college)| record(i, college, 7.0, YesNo::Yes))
            .collect()
    }

    fn ids(counts: &[CollegeCount]) -> Vec<&str> {
        counts.iter().map(|c| c.college_id.as_str()).collect()
    }

    #[test]
    fn counts_only_placed_students() {
        let mut records = placed(&["A", "B", "A"]);
        records.push(record(3, "B", 7.0, YesNo::No));
        records.push(record(4, "C", 7.0, YesNo::No));

        let top = top_colleges(&records, DEFAULT_TOP_COLLEGES);
        assert_eq!(
            top,
            vec![
                CollegeCount {
                    college_id: "A".to_string(),
                    count: 2
                },
                CollegeCount {
                    college_id: "B".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let records = placed(&["C", "A", "B", "A", "B", "C", "D"]);
        let top = top_colleges(&records, DEFAULT_TOP_COLLEGES);
        assert_eq!(ids(&top), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn truncates_to_limit() {
        let colleges: Vec<String> = (0..15).map(|i| format!("CLG{i:04}")).collect();
        let mut names: Vec<&str> = Vec::new();
        for (i, college) in colleges.iter().enumerate() {
            for _ in 0..=i {
                names.push(college);
            }
        }
        let top = top_colleges(&placed(&names), DEFAULT_TOP_COLLEGES);

        assert_eq!(top.len(), 10);
        assert_eq!(top[0].college_id, "CLG0014");
        assert_eq!(top[0].count, 15);
        assert_eq!(top[9].count, 6);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn fewer_colleges_are_not_padded() {
        let top = top_colleges(&placed(&["A", "B"]), DEFAULT_TOP_COLLEGES);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn no_placements_yields_empty() {
        let records = vec![record(0, "A", 7.0, YesNo::No)];
        assert!(top_colleges(&records, DEFAULT_TOP_COLLEGES).is_empty());
        assert!(top_colleges(&[], DEFAULT_TOP_COLLEGES).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let records = placed(&["B", "A", "B", "C"]);
        assert_eq!(top_colleges(&records, 3), top_colleges(&records, 3));
    }
}
