use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::dashboard::DashboardSnapshot;

pub fn build_report(snapshot: &DashboardSnapshot, generated_at: DateTime<Utc>) -> String {
    let mut output = String::new();
    let stacked = &snapshot.stacked_bar;
    let scatter = &snapshot.scatter;

    let _ = writeln!(output, "# University Placement Dashboard");
    let _ = writeln!(
        output,
        "Generated {} from {} records",
        generated_at.format("%Y-%m-%d %H:%M UTC"),
        snapshot.record_count
    );

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "## CGPA Distribution ({:.1} to {:.1})",
        stacked.range.lo(),
        stacked.range.hi()
    );

    if stacked.binned_total() == 0 {
        let _ = writeln!(output, "No records in this CGPA range.");
    } else {
        let _ = writeln!(output, "| CGPA | Placed | Not Placed | Total |");
        let _ = writeln!(output, "|---|---|---|---|");
        for bin in &stacked.bins {
            let _ = writeln!(
                output,
                "| {}-{:.1} | {} | {} | {} |",
                bin.label, bin.upper, bin.placed, bin.not_placed, bin.total
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## IQ vs CGPA Sample ({}%)", scatter.percent.value());
    let _ = writeln!(
        output,
        "{} of {} students sampled, {} within CGPA {:.1} to {:.1}.",
        scatter.points.len(),
        scatter.total_records,
        scatter.focused_count(),
        scatter.focus.lo(),
        scatter.focus.hi()
    );
    if let Some(domain) = scatter.domain {
        let _ = writeln!(
            output,
            "Axes: IQ {:.0} to {:.0}, CGPA {:.2} to {:.2}.",
            domain.iq.0, domain.iq.1, domain.cgpa.0, domain.cgpa.1
        );
    }
    let with_internship = scatter
        .points
        .iter()
        .filter(|point| point.internship.is_yes())
        .count();
    if !scatter.points.is_empty() {
        let _ = writeln!(
            output,
            "{with_internship} sampled students completed an internship."
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Colleges by Placements");

    if snapshot.top_colleges.is_empty() {
        let _ = writeln!(output, "No placed students.");
    } else {
        for (rank, college) in snapshot.top_colleges.iter().enumerate() {
            let _ = writeln!(
                output,
                "{}. {}: {} placed",
                rank + 1,
                college.college_id,
                college.count
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Skill Scores of Placed Students");

    if snapshot.skill_stats.iter().all(|c| c.stats.count == 0) {
        let _ = writeln!(output, "No placed students.");
    } else {
        for entry in &snapshot.skill_stats {
            let stats = &entry.stats;
            let _ = writeln!(
                output,
                "- {}: min {:.1}, Q1 {:.1}, median {:.1}, Q3 {:.1}, max {:.1} ({} outliers)",
                entry.category.label(),
                stats.whisker_min,
                stats.q1,
                stats.median,
                stats.q3,
                stats.whisker_max,
                stats.outliers
            );
        }
    }

    output
}
