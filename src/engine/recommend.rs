//! Demographic course recommender
//!
//! Ranks distinct course numbers by how closely their averaged participant
//! demographics match a learner profile, then resolves the nearest course
//! numbers to representative titles.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use super::AnalyticsEngine;

/// Upper bound on returned titles
const MAX_RECOMMENDATIONS: usize = 10;

/// Accumulated demographic profile of one course number.
struct CourseProfile<'a> {
    age_sum: f64,
    male_sum: f64,
    degree_sum: f64,
    count: u32,
    latest_launch: NaiveDate,
    title: &'a str,
}

impl AnalyticsEngine {
    /// Up to 10 course titles whose participant demographics sit closest to
    /// the given learner profile.
    ///
    /// For every distinct course number, `median_age`, `percent_male`, and
    /// `percent_degree` are averaged across its runs and compared against
    /// the target vector `(age, male, bachelor_or_higher)` by squared
    /// Euclidean distance; a set flag contributes `100.0` so the target
    /// lives on the same percentage scale as the stored fields. The 10
    /// nearest course numbers (ties by course number ascending) resolve to
    /// the title of their most recent run — on equal launch dates the first
    /// record in ingestion order wins — and the resolved titles are
    /// returned ordered by distance ascending, ties by title ascending.
    ///
    /// Returns fewer than 10 titles only when the dataset has fewer than 10
    /// distinct course numbers.
    #[must_use]
    pub fn recommend_courses(&self, age: f64, male: bool, bachelor_or_higher: bool) -> Vec<String> {
        tracing::trace!(age, male, bachelor_or_higher, "recommending courses");

        let mut profiles: FxHashMap<&str, CourseProfile<'_>> = FxHashMap::default();
        for record in self.store().records() {
            profiles
                .entry(record.course_number.as_str())
                .and_modify(|profile| {
                    profile.age_sum += record.median_age;
                    profile.male_sum += record.percent_male;
                    profile.degree_sum += record.percent_degree;
                    profile.count += 1;
                    if record.launch_date > profile.latest_launch {
                        profile.latest_launch = record.launch_date;
                        profile.title = record.title.as_str();
                    }
                })
                .or_insert_with(|| CourseProfile {
                    age_sum: record.median_age,
                    male_sum: record.percent_male,
                    degree_sum: record.percent_degree,
                    count: 1,
                    latest_launch: record.launch_date,
                    title: record.title.as_str(),
                });
        }

        let target_male = if male { 100.0 } else { 0.0 };
        let target_degree = if bachelor_or_higher { 100.0 } else { 0.0 };

        let mut ranked: Vec<(&str, f64, &str)> = profiles
            .into_iter()
            .filter(|(_, profile)| profile.count > 0)
            .map(|(number, profile)| {
                let runs = f64::from(profile.count);
                let distance = (age - profile.age_sum / runs).powi(2)
                    + (target_male - profile.male_sum / runs).powi(2)
                    + (target_degree - profile.degree_sum / runs).powi(2);
                (number, distance, profile.title)
            })
            .collect();

        // Nearest first; the course number keeps the order total when
        // distances tie.
        ranked.sort_unstable_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(MAX_RECOMMENDATIONS);

        // Resolved titles re-sort on (distance, title): two course numbers
        // at the same distance can reorder once titles replace numbers.
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.2.cmp(b.2)));
        ranked
            .into_iter()
            .map(|(_, _, title)| title.to_owned())
            .collect()
    }
}
