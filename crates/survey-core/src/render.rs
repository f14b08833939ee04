use serde_json::{Map, Value, json};

use crate::section::SectionKind;
use crate::snapshot::FormSnapshot;

/// One labelled line of the submission summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Collected payload used by both the text and JSON renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPayload {
    pub rows: Vec<SummaryRow>,
    pub additional_questions: Vec<String>,
}

/// Builds the summary payload for a snapshot.
///
/// Identity fields and feedback always appear; of the three conditional
/// sections only the one activated by the topic contributes rows.
pub fn build_summary(snapshot: &FormSnapshot, additional_questions: &[String]) -> SummaryPayload {
    let mut rows = vec![
        row("Full Name", &snapshot.full_name),
        row("Email", &snapshot.email),
        row("Survey Topic", snapshot.survey_topic.as_label()),
    ];

    match snapshot.active_section() {
        Some(SectionKind::Tech) => {
            rows.push(row(
                "Favorite Programming Language",
                &snapshot.tech_section.fav_programming_language,
            ));
            rows.push(row(
                "Years of Experience",
                &snapshot.tech_section.years_of_experience,
            ));
        }
        Some(SectionKind::Health) => {
            rows.push(row(
                "Exercise Frequency",
                &snapshot.health_section.exercise_frequency,
            ));
            rows.push(row(
                "Diet Preference",
                &snapshot.health_section.diet_preference,
            ));
        }
        Some(SectionKind::Education) => {
            rows.push(row(
                "Highest Qualification",
                &snapshot.education_section.highest_qualification,
            ));
            rows.push(row("Field of Study", &snapshot.education_section.field_of_study));
        }
        None => {}
    }

    rows.push(row("Feedback", &snapshot.feedback));

    SummaryPayload {
        rows,
        additional_questions: additional_questions.to_vec(),
    }
}

/// Renders the payload as human-friendly text.
pub fn render_text(payload: &SummaryPayload) -> String {
    let mut lines = Vec::new();
    lines.push("Summary of Entered Data:".to_string());
    for row in &payload.rows {
        lines.push(format!("  {}: {}", row.label, row.value));
    }
    if !payload.additional_questions.is_empty() {
        lines.push("Additional Questions:".to_string());
        for question in &payload.additional_questions {
            lines.push(format!("  - {}", question));
        }
    }
    lines.join("\n")
}

/// Renders the payload as a structured JSON-friendly value.
pub fn render_json(payload: &SummaryPayload) -> Value {
    let mut summary = Map::new();
    for row in &payload.rows {
        summary.insert(row.label.into(), Value::String(row.value.clone()));
    }
    json!({
        "summary": summary,
        "additional_questions": payload.additional_questions,
    })
}

fn row(label: &'static str, value: &str) -> SummaryRow {
    SummaryRow {
        label,
        value: value.to_string(),
    }
}
