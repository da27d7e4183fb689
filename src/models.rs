use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filters::{CgpaRange, SamplePercent};

/// A `Yes`/`No` column from the placement dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YesNo::Yes => f.write_str("Yes"),
            YesNo::No => f.write_str("No"),
        }
    }
}

/// One student row. Never mutated once the store is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub index: usize,
    pub sample_key: f64,
    pub college_id: String,
    pub iq: f64,
    pub prev_sem_result: f64,
    pub cgpa: f64,
    pub academic_performance: f64,
    pub internship_experience: YesNo,
    pub extra_curricular_score: f64,
    pub communication_skills: f64,
    pub projects_completed: f64,
    pub placement: YesNo,
}

impl Record {
    pub fn is_placed(&self) -> bool {
        self.placement.is_yes()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaBin {
    pub lower: f64,
    pub upper: f64,
    pub label: String,
    pub placed: usize,
    pub not_placed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBarView {
    pub range: CgpaRange,
    pub bins: Vec<CgpaBin>,
}

impl StackedBarView {
    pub fn binned_total(&self) -> usize {
        self.bins.iter().map(|bin| bin.total).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub index: usize,
    pub college_id: String,
    pub iq: f64,
    pub cgpa: f64,
    pub internship: YesNo,
    pub placement: YesNo,
    pub in_focus: bool,
}

/// Axis extents for the scatter chart, padded around the full data set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterDomain {
    pub iq: (f64, f64),
    pub cgpa: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub percent: SamplePercent,
    pub focus: CgpaRange,
    pub points: Vec<ScatterPoint>,
    pub total_records: usize,
    pub domain: Option<ScatterDomain>,
}

impl ScatterView {
    pub fn focused_count(&self) -> usize {
        self.points.iter().filter(|point| point.in_focus).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollegeCount {
    pub college_id: String,
    pub count: usize,
}

/// Score columns compared in the box plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillCategory {
    CommunicationSkills,
    ExtraCurricular,
    AcademicPerformance,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::CommunicationSkills,
        SkillCategory::ExtraCurricular,
        SkillCategory::AcademicPerformance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::CommunicationSkills => "Communication Skills",
            SkillCategory::ExtraCurricular => "Extra Curricular",
            SkillCategory::AcademicPerformance => "Academic Performance",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            SkillCategory::CommunicationSkills => record.communication_skills,
            SkillCategory::ExtraCurricular => record.extra_curricular_score,
            SkillCategory::AcademicPerformance => record.academic_performance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoxStats {
    pub count: usize,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_min: f64,
    pub whisker_max: f64,
    pub outliers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: SkillCategory,
    pub stats: BoxStats,
}
