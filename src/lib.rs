pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::WebConfig;

pub use core::predictor::{parse_symptom_input, predict_conditions, UNDETERMINED_CONDITION};
pub use core::recommender::{filter_candidates, recommend_doctor};
pub use core::report::{analyze, render_recommendation, AnalysisReport};
pub use domain::directory::{load_directory, DoctorDirectory};
pub use domain::model::{DoctorRecord, LocationFilter, Recommendation};
pub use utils::error::{MedMatchError, Result};
