//! Integration test for dataset ingestion
//!
//! Loads the fixture dataset end to end and runs the analytical surface
//! over it: CSV quoting, instructor-list splitting, launch-date parsing,
//! and the loader's failure modes.

use std::path::PathBuf;

use chrono::NaiveDate;
use cursos_db::{AnalyticsEngine, CourseStore, Error, RankMetric};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/courses.csv")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_load_csv_reads_all_data_rows() {
    init_tracing();
    let store = CourseStore::load_csv(fixture_path()).unwrap();
    assert_eq!(store.len(), 6);

    let first = &store.records()[0];
    assert_eq!(first.institution, "MITx");
    assert_eq!(first.course_number, "6.002x");
    assert_eq!(
        first.launch_date,
        NaiveDate::from_ymd_opt(2012, 9, 5).unwrap()
    );
    assert_eq!(first.participants, 36_105);
}

#[test]
fn test_load_csv_preserves_quoted_subjects() {
    let store = CourseStore::load_csv(fixture_path()).unwrap();
    assert_eq!(
        store.records()[0].subject,
        "Science, Technology, Engineering, and Mathematics"
    );
}

#[test]
fn test_load_csv_splits_instructor_lists() {
    let store = CourseStore::load_csv(fixture_path()).unwrap();
    assert_eq!(
        store.records()[1].instructors,
        vec!["Eric Grimson", "John Guttag", "Chris Terman"]
    );
    assert_eq!(store.records()[5].instructors, vec!["Michael Sandel"]);
}

#[test]
fn test_load_csv_missing_file_is_io_error() {
    let result = CourseStore::load_csv("no/such/dataset.csv");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_engine_reports_over_fixture_dataset() {
    let engine = AnalyticsEngine::new(CourseStore::load_csv(fixture_path()).unwrap());

    assert_eq!(
        engine.participants_by_institution(),
        vec![
            ("HarvardX".to_string(), 261_671),
            ("MITx".to_string(), 136_805),
        ]
    );

    let top = engine.top_courses(1, RankMetric::Participants).unwrap();
    assert_eq!(top, vec!["Introduction to Computer Science"]);

    // Five distinct course numbers in the fixture, so the recommender
    // returns all of them.
    assert_eq!(engine.recommend_courses(28.0, true, true).len(), 5);
}

#[test]
fn test_recommender_resolves_latest_run_of_fixture_course() {
    let engine = AnalyticsEngine::new(CourseStore::load_csv(fixture_path()).unwrap());
    let titles = engine.recommend_courses(28.0, true, false);
    // 6.00x has runs in 2012 and 2013 sharing a title; it must appear once.
    let matches = titles
        .iter()
        .filter(|t| t.as_str() == "Introduction to Computer Science and Programming")
        .count();
    assert_eq!(matches, 1);
}
