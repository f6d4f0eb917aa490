pub mod predictor;
pub mod recommender;
pub mod report;

pub use crate::domain::directory::DoctorDirectory;
pub use crate::domain::model::{DoctorRecord, LocationFilter, Recommendation};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
