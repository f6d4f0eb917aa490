use serde::{Deserialize, Serialize};

/// One row of the doctor dataset. Field names follow the CSV header
/// (Doctor_Name, Clinic_Name, ...) so rows deserialize without a manual map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    #[serde(rename = "Doctor_Name")]
    pub doctor_name: String,
    #[serde(rename = "Clinic_Name")]
    pub clinic_name: String,
    #[serde(rename = "Clinic_Address")]
    pub clinic_address: String,
    #[serde(rename = "Clinic_City")]
    pub clinic_city: String,
    #[serde(rename = "Clinic_State")]
    pub clinic_state: String,
    #[serde(rename = "Speciality")]
    pub speciality: String,
}

/// Outcome of a doctor lookup for one predicted condition. Every failure
/// path is a value here, not an error: the caller renders it as a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Recommendation {
    Doctor {
        condition: String,
        speciality: String,
        doctor: DoctorRecord,
    },
    /// The condition has no entry in the specialty map.
    NoSpecialist { condition: String },
    /// A specialty exists but no row survived the specialty/city/state filter.
    NoneInArea {
        condition: String,
        speciality: String,
    },
}

/// Optional location filter applied after the specialty filter.
/// Empty strings from a form or prompt are treated as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub city: Option<String>,
    pub state: Option<String>,
}

impl LocationFilter {
    pub fn new(city: Option<String>, state: Option<String>) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            city: keep(city),
            state: keep(state),
        }
    }
}
