use crate::core::predictor::specialty_for;
use crate::domain::directory::DoctorDirectory;
use crate::domain::model::{DoctorRecord, LocationFilter, Recommendation};
use rand::seq::SliceRandom;

/// Rows matching the specialty plus any city/state filter. Specialty matches
/// exactly; city and state match case-insensitively. Deterministic: the same
/// inputs always select the same subset, only the sampling step is random.
pub fn filter_candidates<'a>(
    directory: &'a DoctorDirectory,
    speciality: &str,
    location: &LocationFilter,
) -> Vec<&'a DoctorRecord> {
    directory
        .doctors()
        .iter()
        .filter(|doc| doc.speciality == speciality)
        .filter(|doc| match &location.city {
            Some(city) => doc.clinic_city.eq_ignore_ascii_case(city),
            None => true,
        })
        .filter(|doc| match &location.state {
            Some(state) => doc.clinic_state.eq_ignore_ascii_case(state),
            None => true,
        })
        .collect()
}

/// Looks up the specialty for a condition and picks one matching doctor
/// uniformly at random. All failure paths are soft values.
pub fn recommend_doctor(
    directory: &DoctorDirectory,
    condition: &str,
    location: &LocationFilter,
) -> Recommendation {
    let Some(speciality) = specialty_for(condition) else {
        tracing::debug!("No specialty mapped for condition: {}", condition);
        return Recommendation::NoSpecialist {
            condition: condition.to_string(),
        };
    };

    let candidates = filter_candidates(directory, speciality, location);
    tracing::debug!(
        "{} candidate doctors for {} ({})",
        candidates.len(),
        condition,
        speciality
    );

    match candidates.choose(&mut rand::thread_rng()) {
        Some(doctor) => Recommendation::Doctor {
            condition: condition.to_string(),
            speciality: speciality.to_string(),
            doctor: (*doctor).clone(),
        },
        None => Recommendation::NoneInArea {
            condition: condition.to_string(),
            speciality: speciality.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::predictor::UNDETERMINED_CONDITION;

    fn doctor(name: &str, city: &str, state: &str, speciality: &str) -> DoctorRecord {
        DoctorRecord {
            doctor_name: name.to_string(),
            clinic_name: format!("{} Clinic", name),
            clinic_address: "12 MG Road".to_string(),
            clinic_city: city.to_string(),
            clinic_state: state.to_string(),
            speciality: speciality.to_string(),
        }
    }

    fn sample_directory() -> DoctorDirectory {
        DoctorDirectory::new(vec![
            doctor("Dr. Mehta", "Mumbai", "Maharashtra", "Neurologist"),
            doctor("Dr. Rao", "Pune", "Maharashtra", "Neurologist"),
            doctor("Dr. Iyer", "Chennai", "Tamil Nadu", "Cardiologist"),
            doctor("Dr. Singh", "Mumbai", "Maharashtra", "Cardiologist"),
        ])
    }

    #[test]
    fn test_unknown_condition_is_soft_failure() {
        let directory = sample_directory();
        let result = recommend_doctor(&directory, "Broken Leg", &LocationFilter::default());
        assert_eq!(
            result,
            Recommendation::NoSpecialist {
                condition: "Broken Leg".to_string()
            }
        );
    }

    #[test]
    fn test_sentinel_condition_is_soft_failure() {
        let directory = sample_directory();
        let result =
            recommend_doctor(&directory, UNDETERMINED_CONDITION, &LocationFilter::default());
        assert!(matches!(result, Recommendation::NoSpecialist { .. }));
    }

    #[test]
    fn test_recommends_only_matching_specialty() {
        let directory = sample_directory();
        let result = recommend_doctor(&directory, "Migraine", &LocationFilter::default());
        match result {
            Recommendation::Doctor { speciality, doctor, .. } => {
                assert_eq!(speciality, "Neurologist");
                assert_eq!(doctor.speciality, "Neurologist");
            }
            other => panic!("expected a doctor, got {:?}", other),
        }
    }

    #[test]
    fn test_city_filter_is_case_insensitive() {
        let directory = sample_directory();
        let location = LocationFilter::new(Some("mumbai".to_string()), None);
        let result = recommend_doctor(&directory, "Migraine", &location);
        match result {
            Recommendation::Doctor { doctor, .. } => {
                assert_eq!(doctor.doctor_name, "Dr. Mehta");
            }
            other => panic!("expected a doctor, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_city_wins_over_state() {
        let directory = sample_directory();
        // State alone would match, but the city filter empties the set first
        let location = LocationFilter::new(
            Some("Delhi".to_string()),
            Some("Maharashtra".to_string()),
        );
        let result = recommend_doctor(&directory, "Migraine", &location);
        assert_eq!(
            result,
            Recommendation::NoneInArea {
                condition: "Migraine".to_string(),
                speciality: "Neurologist".to_string(),
            }
        );
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let directory = sample_directory();
        let location = LocationFilter::new(None, Some("maharashtra".to_string()));
        let first = filter_candidates(&directory, "Cardiologist", &location);
        let second = filter_candidates(&directory, "Cardiologist", &location);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].doctor_name, "Dr. Singh");
    }

    #[test]
    fn test_sampled_doctor_is_a_candidate() {
        let directory = sample_directory();
        let location = LocationFilter::new(None, Some("Maharashtra".to_string()));
        let candidates = filter_candidates(&directory, "Neurologist", &location);
        for _ in 0..20 {
            match recommend_doctor(&directory, "Migraine", &location) {
                Recommendation::Doctor { doctor, .. } => {
                    assert!(candidates.iter().any(|c| **c == doctor));
                }
                other => panic!("expected a doctor, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_directory_finds_nobody() {
        let directory = DoctorDirectory::new(vec![]);
        let result = recommend_doctor(&directory, "Asthma", &LocationFilter::default());
        assert!(matches!(result, Recommendation::NoneInArea { .. }));
    }

    #[test]
    fn test_blank_location_strings_mean_no_filter() {
        let location = LocationFilter::new(Some("  ".to_string()), Some(String::new()));
        assert_eq!(location, LocationFilter::default());
    }
}
