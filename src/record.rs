//! Course record - one row of the course-run dataset
//!
//! A record describes a single offering (run) of a course. The same
//! `course_number` appears on every run of a course, so it is NOT unique per
//! row; `course_number` + `launch_date` identifies a run.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Date format used by the dataset (`10/24/2012`, month and day unpadded)
const LAUNCH_DATE_FORMAT: &str = "%m/%d/%Y";

/// One course-run of the dataset.
///
/// Fields are declared in the dataset's column order so a row deserializes
/// positionally straight out of the CSV reader. Records are immutable once
/// constructed; the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Institution offering the run (grouping key, non-empty)
    pub institution: String,
    /// Stable course identifier shared across runs (non-empty)
    pub course_number: String,
    /// Date this run launched
    #[serde(deserialize_with = "launch_date")]
    pub launch_date: NaiveDate,
    /// Display name; runs of one course number may share a title
    pub title: String,
    /// Instructor names in listed order; may be empty
    #[serde(deserialize_with = "instructor_list")]
    pub instructors: Vec<String>,
    /// Course subject (grouping key, non-empty)
    pub subject: String,
    /// Offering year
    pub year: u16,
    /// Honor-code certificate flag
    pub honor_code: u8,
    /// Participants (course content accessed)
    pub participants: u32,
    /// Participants who audited (> 50% content accessed)
    pub audited: u32,
    /// Participants certified
    pub certified: u32,
    /// Percent audited (source scale preserved)
    pub percent_audited: f64,
    /// Percent certified
    pub percent_certified: f64,
    /// Percent certified of those with > 50% content accessed
    pub percent_certified_50: f64,
    /// Percent who played video
    pub percent_video: f64,
    /// Percent who posted in forum
    pub percent_forum: f64,
    /// Percent with grade higher than zero
    pub grade_higher_than_zero: f64,
    /// Median total course hours
    pub total_hours: f64,
    /// Median participant age
    pub median_age: f64,
    /// Percent male participants
    pub percent_male: f64,
    /// Percent female participants
    pub percent_female: f64,
    /// Percent with a bachelor's degree or higher
    pub percent_degree: f64,
}

impl CourseRecord {
    /// True when the run lists exactly one instructor.
    #[must_use]
    pub fn is_solo_taught(&self) -> bool {
        self.instructors.len() == 1
    }
}

/// Deserialize a `M/D/YYYY` launch date cell.
fn launch_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDate::parse_from_str(raw.trim(), LAUNCH_DATE_FORMAT).map_err(serde::de::Error::custom)
}

/// Deserialize a comma-separated instructor cell into a name list.
///
/// Names are trimmed; an empty cell yields an empty list.
fn instructor_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect())
}
