//! # Cursos-DB: In-Memory Course Analytics Engine
//!
//! Cursos-DB loads a tabular dataset of online course-runs (one row per
//! offering, with institution, subject, instructors, launch date,
//! enrollment counters, and participant demographics) and answers a fixed
//! set of analytical reports over it: participant totals by institution and
//! by institution-subject, per-instructor course listings, top-K course
//! ranking, substring/threshold search, and a nearest-neighbor course
//! recommendation based on demographic similarity.
//!
//! ## Design
//!
//! - **Load once, query forever**: the record collection is frozen at
//!   construction; every query is a pure read with no locking required.
//! - **Deterministic output**: grouping accumulates into hash maps, but
//!   every report imposes an explicit final sort with total tie-break
//!   rules; map iteration order never leaks.
//! - **Trust the loader**: malformed rows fail CSV ingestion with a row
//!   number; the engine performs no validation of the records it is handed.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cursos_db::{AnalyticsEngine, CourseStore, RankMetric};
//!
//! let store = CourseStore::load_csv("data/courses.csv")?;
//! let engine = AnalyticsEngine::new(store);
//!
//! for (institution, participants) in engine.participants_by_institution() {
//!     println!("{institution}: {participants}");
//! }
//! let busiest = engine.top_courses(10, RankMetric::Participants)?;
//! println!("Top 10: {busiest:?}");
//! # Ok::<(), cursos_db::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod engine;
pub mod error;
pub mod record;
pub mod storage;

pub use engine::{AnalyticsEngine, InstructorCourses, RankMetric};
pub use error::{Error, Result};
pub use record::CourseRecord;
pub use storage::CourseStore;
