use crate::domain::model::DoctorRecord;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MedMatchError, Result};
use std::path::Path;

/// Startup path shared by both front ends: any validated config that names
/// a dataset can produce a directory.
pub fn load_directory<C: ConfigProvider>(config: &C) -> Result<DoctorDirectory> {
    if config.verbose() {
        tracing::debug!("Loading doctor dataset from {}", config.dataset_path());
    }
    DoctorDirectory::from_csv_path(config.dataset_path())
}

/// In-memory doctor dataset. Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<DoctorRecord>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<DoctorRecord>) -> Self {
        Self { doctors }
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(MedMatchError::DatasetError {
                message: format!("Dataset file not found: {}", path.display()),
            });
        }

        let reader = csv::Reader::from_path(path)?;
        let directory = Self::from_csv_reader(reader)?;
        tracing::info!(
            "Loaded {} doctors from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    pub fn from_csv_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut doctors = Vec::new();
        for row in reader.deserialize::<DoctorRecord>() {
            doctors.push(row?);
        }
        Ok(Self { doctors })
    }

    pub fn doctors(&self) -> &[DoctorRecord] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
