//! Analytical query engine over the course dataset
//!
//! The engine wraps a frozen [`CourseStore`] and exposes a fixed set of
//! named reports: participant totals by institution (and by
//! institution-subject), per-instructor course listings, top-K course
//! ranking, substring/threshold search, and a demographic course
//! recommender (see [`AnalyticsEngine::recommend_courses`]).
//!
//! Every operation is a pure read over the full collection. Grouping
//! accumulates into hash maps keyed by derived keys, then imposes an
//! explicit final sort; no output ever depends on map iteration order.

mod recommend;

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::record::CourseRecord;
use crate::storage::CourseStore;
use crate::{Error, Result};

/// Ranking metric for [`AnalyticsEngine::top_courses`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    /// Rank by median total course hours
    Hours,
    /// Rank by participant count
    Participants,
}

impl RankMetric {
    /// Metric value of one record, as the common comparison type.
    fn value_of(self, record: &CourseRecord) -> f64 {
        match self {
            Self::Hours => record.total_hours,
            Self::Participants => f64::from(record.participants),
        }
    }
}

impl FromStr for RankMetric {
    type Err = Error;

    /// Map the caller-facing metric name to a variant.
    ///
    /// Unrecognized names are an input-contract violation; there is no
    /// default metric.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hours" => Ok(Self::Hours),
            "participants" => Ok(Self::Participants),
            other => Err(Error::InvalidInput(format!(
                "unknown ranking metric: {other:?} (expected \"hours\" or \"participants\")"
            ))),
        }
    }
}

/// Course titles attributed to one instructor, partitioned by staffing.
///
/// Both buckets are deduplicated and sorted ascending. An instructor with
/// no solo (or no co-taught) runs gets an empty vector, not an absent
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstructorCourses {
    /// Titles of runs where the instructor taught alone
    pub solo: Vec<String>,
    /// Titles of runs taught with co-instructors
    pub co_taught: Vec<String>,
}

/// Analytical engine over a frozen course-run collection.
///
/// Construct it once from a finalized [`CourseStore`]; every query method
/// is independently callable, read-only, and side-effect-free with respect
/// to the stored data.
///
/// # Example
///
/// ```
/// use cursos_db::{AnalyticsEngine, CourseStore};
///
/// let engine = AnalyticsEngine::new(CourseStore::new(Vec::new()));
/// assert!(engine.participants_by_institution().is_empty());
/// ```
#[derive(Debug)]
pub struct AnalyticsEngine {
    store: CourseStore,
}

impl AnalyticsEngine {
    /// Create an engine over a finalized store.
    #[must_use]
    pub const fn new(store: CourseStore) -> Self {
        Self { store }
    }

    /// Create an engine directly from an already-parsed record collection.
    #[must_use]
    pub fn from_records(records: Vec<CourseRecord>) -> Self {
        Self::new(CourseStore::new(records))
    }

    /// Get the backing store.
    #[must_use]
    pub const fn store(&self) -> &CourseStore {
        &self.store
    }

    /// Total participants per institution.
    ///
    /// Ordered by institution name ascending.
    #[must_use]
    pub fn participants_by_institution(&self) -> Vec<(String, u64)> {
        let mut totals: FxHashMap<&str, u64> = FxHashMap::default();
        for record in self.store.records() {
            *totals.entry(record.institution.as_str()).or_insert(0) +=
                u64::from(record.participants);
        }

        let mut report: Vec<(String, u64)> = totals
            .into_iter()
            .map(|(institution, total)| (institution.to_owned(), total))
            .collect();
        report.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        report
    }

    /// Total participants per institution-subject pair.
    ///
    /// The composite key is `"{institution}-{subject}"` with a literal
    /// hyphen; names that themselves contain hyphens produce ambiguous keys
    /// and are preserved as-is. Ordered by total descending, ties by key
    /// ascending.
    #[must_use]
    pub fn participants_by_institution_and_subject(&self) -> Vec<(String, u64)> {
        let mut totals: FxHashMap<String, u64> = FxHashMap::default();
        for record in self.store.records() {
            let key = format!("{}-{}", record.institution, record.subject);
            *totals.entry(key).or_insert(0) += u64::from(record.participants);
        }

        let mut report: Vec<(String, u64)> = totals.into_iter().collect();
        report.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        report
    }

    /// Course titles taught by each instructor, split into solo and
    /// co-taught buckets.
    ///
    /// A run is attributed to every instructor it lists, so one record can
    /// appear under several instructors. A run with exactly one instructor
    /// lands in that instructor's solo bucket; a run with more than one
    /// lands in the co-taught bucket of each. Buckets are deduplicated and
    /// sorted ascending; the map is ordered by instructor name.
    #[must_use]
    pub fn courses_by_instructor(&self) -> BTreeMap<String, InstructorCourses> {
        let mut buckets: BTreeMap<&str, (BTreeSet<&str>, BTreeSet<&str>)> = BTreeMap::new();
        for record in self.store.records() {
            let solo = record.is_solo_taught();
            for instructor in &record.instructors {
                let entry = buckets.entry(instructor.as_str()).or_default();
                if solo {
                    entry.0.insert(record.title.as_str());
                } else {
                    entry.1.insert(record.title.as_str());
                }
            }
        }

        buckets
            .into_iter()
            .map(|(instructor, (solo, co_taught))| {
                let courses = InstructorCourses {
                    solo: solo.into_iter().map(ToOwned::to_owned).collect(),
                    co_taught: co_taught.into_iter().map(ToOwned::to_owned).collect(),
                };
                (instructor.to_owned(), courses)
            })
            .collect()
    }

    /// Top `top_k` course titles ranked by the chosen metric.
    ///
    /// Records sort descending by metric with ties broken by title
    /// ascending; titles are then deduplicated keeping the first (highest
    /// ranked) occurrence, and the first `top_k` survivors are returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `top_k` is zero. Callers mapping
    /// a metric name should go through [`RankMetric::from_str`], which
    /// rejects unrecognized names instead of substituting a default.
    pub fn top_courses(&self, top_k: usize, by: RankMetric) -> Result<Vec<String>> {
        if top_k == 0 {
            return Err(Error::InvalidInput(
                "top_k must be greater than 0".to_string(),
            ));
        }

        let mut ranked: Vec<&CourseRecord> = self.store.records().iter().collect();
        ranked.sort_by(|a, b| {
            by.value_of(b)
                .total_cmp(&by.value_of(a))
                .then_with(|| a.title.cmp(&b.title))
        });

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut titles = Vec::with_capacity(top_k.min(ranked.len()));
        for record in ranked {
            if seen.insert(record.title.as_str()) {
                titles.push(record.title.clone());
                if titles.len() == top_k {
                    break;
                }
            }
        }
        Ok(titles)
    }

    /// Distinct titles of runs matching a subject substring and engagement
    /// thresholds.
    ///
    /// The subject match is case-insensitive (an empty needle matches every
    /// subject); records must also have `percent_audited >=
    /// min_percent_audited` and `total_hours <= max_total_hours`, both
    /// bounds inclusive. Titles are deduplicated and sorted ascending.
    #[must_use]
    pub fn search_courses(
        &self,
        subject: &str,
        min_percent_audited: f64,
        max_total_hours: f64,
    ) -> Vec<String> {
        let needle = subject.to_lowercase();
        let mut titles: BTreeSet<&str> = BTreeSet::new();
        for record in self.store.records() {
            if record.percent_audited >= min_percent_audited
                && record.total_hours <= max_total_hours
                && record.subject.to_lowercase().contains(&needle)
            {
                titles.insert(record.title.as_str());
            }
        }
        titles.into_iter().map(ToOwned::to_owned).collect()
    }
}
