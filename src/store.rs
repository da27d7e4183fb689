use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};

use crate::models::{Record, YesNo};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
    #[error("line {line}: column {column} is not a finite number ({value})")]
    NonFinite {
        line: u64,
        column: &'static str,
        value: f64,
    },
}

/// One CSV row before it is given an identity. Accepts both the
/// `College_ID` and the `CollegeID` header spellings.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "College_ID", alias = "CollegeID", alias = "CollegeId")]
    college_id: String,
    #[serde(rename = "IQ", alias = "Iq")]
    iq: f64,
    #[serde(rename = "Prev_Sem_Result", alias = "PrevSemResult")]
    prev_sem_result: f64,
    #[serde(rename = "CGPA", alias = "Cgpa")]
    cgpa: f64,
    #[serde(rename = "Academic_Performance", alias = "AcademicPerformance")]
    academic_performance: f64,
    #[serde(rename = "Internship_Experience", alias = "InternshipExperience")]
    internship_experience: YesNo,
    #[serde(rename = "Extra_Curricular_Score", alias = "ExtraCurricularScore")]
    extra_curricular_score: f64,
    #[serde(rename = "Communication_Skills", alias = "CommunicationSkills")]
    communication_skills: f64,
    #[serde(rename = "Projects_Completed", alias = "ProjectsCompleted")]
    projects_completed: f64,
    #[serde(rename = "Placement")]
    placement: YesNo,
}

impl CsvRow {
    fn check_finite(&self, line: u64) -> Result<(), LoadError> {
        let columns = [
            ("IQ", self.iq),
            ("Prev_Sem_Result", self.prev_sem_result),
            ("CGPA", self.cgpa),
            ("Academic_Performance", self.academic_performance),
            ("Extra_Curricular_Score", self.extra_curricular_score),
            ("Communication_Skills", self.communication_skills),
            ("Projects_Completed", self.projects_completed),
        ];
        match columns.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((column, value)) => Err(LoadError::NonFinite {
                line,
                column,
                value,
            }),
            None => Ok(()),
        }
    }

    fn into_record(self, index: usize, sample_key: f64) -> Record {
        Record {
            index,
            sample_key,
            college_id: self.college_id,
            iq: self.iq,
            prev_sem_result: self.prev_sem_result,
            cgpa: self.cgpa,
            academic_performance: self.academic_performance,
            internship_experience: self.internship_experience,
            extra_curricular_score: self.extra_curricular_score,
            communication_skills: self.communication_skills,
            projects_completed: self.projects_completed,
            placement: self.placement,
        }
    }
}

/// The full data set, in file order. Built once and only ever read.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Loads a placement CSV, drawing one sample key per row from `rng`.
    pub fn load<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(file, rng)?;
        info!(
            records = store.len(),
            path = %path.display(),
            "loaded placement records"
        );
        Ok(store)
    }

    pub fn from_reader<T: Read, R: Rng + ?Sized>(input: T, rng: &mut R) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);
        let headers = reader.headers()?.clone();
        debug!(?headers, "reading placement CSV");

        let mut records = Vec::new();
        for result in reader.records() {
            let raw = result?;
            let line = raw.position().map_or(0, csv::Position::line);
            let row: CsvRow = raw
                .deserialize(Some(&headers))
                .map_err(|source| LoadError::Row { line, source })?;
            row.check_finite(line)?;

            let index = records.len();
            records.push(row.into_record(index, rng.random::<f64>()));
        }

        Ok(Self { records })
    }

    /// Builds a store from already-parsed records, renumbering `index` so it
    /// stays dense. Sample keys are kept as given.
    pub fn from_records(records: Vec<Record>) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Record { index, ..record })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
