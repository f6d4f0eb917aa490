use crate::core::predictor::predict_conditions;
use crate::core::recommender::recommend_doctor;
use crate::domain::directory::DoctorDirectory;
use crate::domain::model::{LocationFilter, Recommendation};
use serde::Serialize;

/// One recommendation per predicted condition, in predictor order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub symptoms: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// The shared flow behind both front ends: predict conditions, then look up
/// a doctor for each one.
pub fn analyze(
    directory: &DoctorDirectory,
    symptoms: &[String],
    location: &LocationFilter,
) -> AnalysisReport {
    let conditions = predict_conditions(symptoms);
    tracing::info!("Predicted {} condition(s)", conditions.len());

    let recommendations = conditions
        .iter()
        .map(|condition| recommend_doctor(directory, condition, location))
        .collect();

    AnalysisReport {
        symptoms: symptoms.to_vec(),
        recommendations,
    }
}

/// Plain-text block for one recommendation, used verbatim by the console
/// front end and wrapped in markup by the web one.
pub fn render_recommendation(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::Doctor {
            condition,
            speciality,
            doctor,
        } => format!(
            "Based on your symptoms, you may have: {condition}\n\
             Recommended Speciality: {speciality}\n\
             Recommended Doctor:\n\
             \x20 - Doctor Name: {}\n\
             \x20 - Clinic Name: {}\n\
             \x20 - Clinic Address: {}\n\
             \x20 - Clinic City: {}\n\
             \x20 - Clinic State: {}",
            doctor.doctor_name,
            doctor.clinic_name,
            doctor.clinic_address,
            doctor.clinic_city,
            doctor.clinic_state,
        ),
        Recommendation::NoSpecialist { condition } => format!(
            "{condition}\n\
             \x20 - Sorry, no specialist found for this condition. \
             Please consult a General Physician."
        ),
        Recommendation::NoneInArea {
            condition,
            speciality,
        } => format!(
            "Based on your symptoms, you may have: {condition}\n\
             \x20 - Sorry, no {speciality} found in the specified location. \
             Try searching without a location filter."
        ),
    }
}
