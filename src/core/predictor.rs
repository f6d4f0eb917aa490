use std::collections::BTreeSet;

/// Fallback condition when no rule matches. Downstream lookup treats it like
/// any other condition; it has no specialty entry, so the recommender
/// soft-fails on it.
pub const UNDETERMINED_CONDITION: &str =
    "Could not determine a specific condition. Please consult a General Physician.";

/// IF the user reports any of these symptoms THEN suggest these conditions.
/// Matching requires only one symptom from the tuple, not all of them.
pub struct SymptomRule {
    pub symptoms: &'static [&'static str],
    pub conditions: &'static [&'static str],
}

pub static SYMPTOM_RULES: &[SymptomRule] = &[
    SymptomRule {
        symptoms: &["cough", "fever", "runny nose"],
        conditions: &["Common Cold", "Flu (Influenza)"],
    },
    SymptomRule {
        symptoms: &["high fever", "body ache", "fatigue", "cough"],
        conditions: &["Flu (Influenza)"],
    },
    SymptomRule {
        symptoms: &["severe headache", "nausea", "sensitivity to light"],
        conditions: &["Migraine"],
    },
    SymptomRule {
        symptoms: &["headache", "pressure behind eyes", "stuffy nose"],
        conditions: &["Sinusitis"],
    },
    SymptomRule {
        symptoms: &["sneezing", "itchy eyes", "runny nose"],
        conditions: &["Allergic Rhinitis (Hay Fever)"],
    },
    SymptomRule {
        symptoms: &["red eyes", "itchy eyes", "discharge"],
        conditions: &["Conjunctivitis (Pink Eye)"],
    },
    SymptomRule {
        symptoms: &["chest pain", "shortness of breath"],
        conditions: &["Coronary Artery Disease"],
    },
    SymptomRule {
        symptoms: &["wheezing", "shortness of breath", "cough"],
        conditions: &["Asthma"],
    },
    SymptomRule {
        symptoms: &["abdominal pain", "diarrhea", "nausea"],
        conditions: &["Gastroenteritis"],
    },
    SymptomRule {
        symptoms: &["frequent urination", "burning sensation urination"],
        conditions: &["Urinary Tract Infection (UTI)"],
    },
    SymptomRule {
        symptoms: &["joint pain", "swelling", "stiffness"],
        conditions: &["Arthritis"],
    },
    SymptomRule {
        symptoms: &["excessive thirst", "frequent urination", "fatigue"],
        conditions: &["Diabetes"],
    },
    SymptomRule {
        symptoms: &["persistent sadness", "loss of interest", "fatigue"],
        conditions: &["Depression"],
    },
    SymptomRule {
        symptoms: &["skin rash", "dry skin", "itching"],
        conditions: &["Eczema", "Psoriasis"],
    },
];

/// condition -> medical specialty, 1:1. Static, never mutated at runtime.
pub static CONDITION_SPECIALTIES: &[(&str, &str)] = &[
    ("Common Cold", "General Physician"),
    ("Flu (Influenza)", "General Physician"),
    ("Migraine", "Neurologist"),
    ("Tension Headache", "Neurologist"),
    ("Sinusitis", "ENT Specialist"),
    ("Allergic Rhinitis (Hay Fever)", "ENT Specialist"),
    ("Conjunctivitis (Pink Eye)", "Ophthalmologist"),
    ("Cataracts", "Ophthalmologist"),
    ("Acne", "Dermatologist"),
    ("Eczema", "Dermatologist"),
    ("Psoriasis", "Dermatologist"),
    ("Hypertension (High BP)", "Cardiologist"),
    ("Coronary Artery Disease", "Cardiologist"),
    ("Asthma", "Pulmonologist"),
    ("Bronchitis", "Pulmonologist"),
    ("Pneumonia", "Pulmonologist"),
    ("Gastroenteritis", "Gastroenterologist"),
    ("Irritable Bowel Syndrome (IBS)", "Gastroenterologist"),
    ("Urinary Tract Infection (UTI)", "Urologist"),
    ("Kidney Stones", "Urologist"),
    ("Arthritis", "Orthopedic Surgeon"),
    ("Diabetes", "Endocrinologist"),
    ("Thyroid Disorder", "Endocrinologist"),
    ("Anxiety Disorder", "Psychiatrist"),
    ("Depression", "Psychiatrist"),
    ("Lower Back Pain", "Orthopedic Surgeon"),
];

pub fn specialty_for(condition: &str) -> Option<&'static str> {
    CONDITION_SPECIALTIES
        .iter()
        .find(|(c, _)| *c == condition)
        .map(|(_, s)| *s)
}

/// Maps free-text symptoms to candidate conditions. Input is normalized
/// (trimmed, lowercased); a rule fires when any of its symptoms appears in
/// the input. Conditions are deduplicated and returned in sorted order so
/// both front ends render stable output. An empty or unmatched input yields
/// the single [`UNDETERMINED_CONDITION`] sentinel.
pub fn predict_conditions(symptoms: &[String]) -> Vec<String> {
    let normalized: Vec<String> = symptoms
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut predicted: BTreeSet<&'static str> = BTreeSet::new();
    for rule in SYMPTOM_RULES {
        if rule
            .symptoms
            .iter()
            .any(|symptom| normalized.iter().any(|input| input == symptom))
        {
            predicted.extend(rule.conditions);
        }
    }

    if predicted.is_empty() {
        tracing::debug!("No rule matched symptoms: {:?}", normalized);
        vec![UNDETERMINED_CONDITION.to_string()]
    } else {
        predicted.into_iter().map(str::to_string).collect()
    }
}

/// Splits a raw comma-separated symptom line into individual symptoms.
pub fn parse_symptom_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
