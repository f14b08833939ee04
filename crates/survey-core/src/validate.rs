use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::section::SectionKind;
use crate::snapshot::{FormSnapshot, SurveyTopic};

/// Field key to human-readable message; absence of a key means the field is
/// currently valid.
pub type ErrorMap = BTreeMap<String, String>;

/// Loose shape check, not RFC validation: one non-whitespace run, an `@`,
/// another run, a `.`, another run, anywhere in the string.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern"));

/// Minimum feedback length, counted on the raw untrimmed string.
const FEEDBACK_MIN_CHARS: usize = 50;

/// Maps a complete form snapshot to its current validation errors.
///
/// Every rule is evaluated independently; none short-circuits the others.
/// Only the section matching the selected topic is checked.
pub fn validate(snapshot: &FormSnapshot) -> ErrorMap {
    let mut errors = ErrorMap::new();

    check_full_name(snapshot, &mut errors);
    check_email(snapshot, &mut errors);
    check_topic(snapshot, &mut errors);
    check_active_section(snapshot, &mut errors);
    check_feedback(snapshot, &mut errors);

    errors
}

fn check_full_name(snapshot: &FormSnapshot, errors: &mut ErrorMap) {
    if snapshot.full_name.trim().is_empty() {
        errors.insert("fullName".into(), "Full Name is required".into());
    }
}

fn check_email(snapshot: &FormSnapshot, errors: &mut ErrorMap) {
    if snapshot.email.trim().is_empty() {
        errors.insert("email".into(), "Email is required".into());
    } else if !EMAIL_SHAPE.is_match(&snapshot.email) {
        errors.insert("email".into(), "Email is invalid".into());
    }
}

fn check_topic(snapshot: &FormSnapshot, errors: &mut ErrorMap) {
    if snapshot.survey_topic == SurveyTopic::Unselected {
        errors.insert("surveyTopic".into(), "Survey Topic is required".into());
    }
}

fn check_active_section(snapshot: &FormSnapshot, errors: &mut ErrorMap) {
    match snapshot.active_section() {
        Some(SectionKind::Tech) => {
            require(
                &snapshot.tech_section.fav_programming_language,
                "favProgrammingLanguage",
                "Favorite Programming Language is required",
                errors,
            );
            require(
                &snapshot.tech_section.years_of_experience,
                "yearsOfExperience",
                "Years of Experience is required",
                errors,
            );
        }
        Some(SectionKind::Health) => {
            require(
                &snapshot.health_section.exercise_frequency,
                "exerciseFrequency",
                "Exercise Frequency is required",
                errors,
            );
            require(
                &snapshot.health_section.diet_preference,
                "dietPreference",
                "Diet Preference is required",
                errors,
            );
        }
        Some(SectionKind::Education) => {
            require(
                &snapshot.education_section.highest_qualification,
                "highestQualification",
                "Highest Qualification is required",
                errors,
            );
            require(
                &snapshot.education_section.field_of_study,
                "fieldOfStudy",
                "Field of Study is required",
                errors,
            );
        }
        None => {}
    }
}

fn check_feedback(snapshot: &FormSnapshot, errors: &mut ErrorMap) {
    // Presence is checked on the trimmed string, length on the raw one.
    if snapshot.feedback.trim().is_empty() || snapshot.feedback.chars().count() < FEEDBACK_MIN_CHARS
    {
        errors.insert(
            "feedback".into(),
            "Feedback is required and must be at least 50 characters".into(),
        );
    }
}

/// Presence check on the raw value, no trimming and no type coercion.
fn require(value: &str, key: &str, message: &str, errors: &mut ErrorMap) {
    if value.is_empty() {
        errors.insert(key.into(), message.into());
    }
}
