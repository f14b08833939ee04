use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use survey_core::{FormSnapshot, SurveyTopic};
use survey_form::{FormState, SubmitOutcome};
use survey_store::{MemoryGateway, PersistenceGateway, StoreError};

struct FailingGateway;

#[async_trait]
impl PersistenceGateway for FailingGateway {
    async fn put(&self, key: &str, _snapshot: &FormSnapshot) -> Result<(), StoreError> {
        Err(StoreError::Rejected {
            key: key.to_string(),
            status: 503,
        })
    }
}

fn fill_valid_health_form(state: &mut FormState) {
    let fields = [
        ("fullName", "Ann".to_string()),
        ("email", "a@b.co".to_string()),
        ("surveyTopic", "Health".to_string()),
        ("healthSection.exerciseFrequency", "Daily".to_string()),
        ("healthSection.dietPreference", "Vegan".to_string()),
        ("feedback", "x".repeat(60)),
    ];
    for (path, value) in fields {
        state
            .apply_field_change(path, &value)
            .expect("field change applies");
    }
}

#[tokio::test]
async fn rejected_submit_stores_errors_and_does_nothing_else() {
    let gateway = Arc::new(MemoryGateway::new());
    let mut state = FormState::new(gateway.clone());

    let outcome = state.submit();
    assert!(matches!(outcome, SubmitOutcome::Rejected));
    assert!(state.errors().contains_key("fullName"));
    assert!(!state.show_summary());
    assert!(state.additional_questions().is_empty());
    assert!(gateway.is_empty());
}

#[tokio::test]
async fn any_field_change_clears_the_whole_error_map() {
    let gateway = Arc::new(MemoryGateway::new());
    let mut state = FormState::new(gateway);

    assert!(matches!(state.submit(), SubmitOutcome::Rejected));
    assert!(!state.errors().is_empty());

    // Editing an unrelated, still-invalid field clears everything.
    state
        .apply_field_change("feedback", "short")
        .expect("field change applies");
    assert!(state.errors().is_empty());
}

#[tokio::test]
async fn failed_field_change_leaves_errors_in_place() {
    let gateway = Arc::new(MemoryGateway::new());
    let mut state = FormState::new(gateway);

    assert!(matches!(state.submit(), SubmitOutcome::Rejected));
    let before = state.errors().clone();

    assert!(state.apply_field_change("shoeSize", "42").is_err());
    assert_eq!(state.errors(), &before);

    assert!(state.apply_field_change("surveyTopic", "Sports").is_err());
    assert_eq!(state.errors(), &before);
}

#[tokio::test]
async fn field_change_replaces_only_the_addressed_leaf() {
    let gateway = Arc::new(MemoryGateway::new());
    let mut state = FormState::new(gateway);

    state
        .apply_field_change("techSection.favProgrammingLanguage", "Rust")
        .expect("field change applies");
    state
        .apply_field_change("healthSection.dietPreference", "Vegan")
        .expect("field change applies");
    let before = state.snapshot().clone();

    state
        .apply_field_change("techSection.yearsOfExperience", "7")
        .expect("field change applies");

    let after = state.snapshot();
    assert_eq!(after.tech_section.years_of_experience, "7");
    assert_eq!(
        after.tech_section.fav_programming_language,
        before.tech_section.fav_programming_language
    );
    assert_eq!(after.health_section, before.health_section);
    assert_eq!(after.education_section, before.education_section);
}

#[tokio::test]
async fn accepted_submission_persists_questions_and_summary() {
    let gateway = Arc::new(MemoryGateway::new());
    let mut state = FormState::new(gateway.clone());
    fill_valid_health_form(&mut state);

    match state.submit() {
        SubmitOutcome::Accepted { key, write } => {
            assert!(key.starts_with("surveys/"));
            assert!(state.errors().is_empty());
            assert_eq!(state.additional_questions().len(), 2);
            assert!(state.show_summary());

            write.await.expect("write task completes");
            let records = gateway.records();
            assert_eq!(records.len(), 1);
            assert_eq!(records.get(&key), Some(state.snapshot()));
            assert_eq!(records[&key].survey_topic, SurveyTopic::Health);
        }
        SubmitOutcome::Rejected => panic!("expected submission to be accepted"),
    }
}

#[tokio::test]
async fn write_failure_does_not_roll_back_the_display_state() {
    let mut state = FormState::new(Arc::new(FailingGateway));
    fill_valid_health_form(&mut state);

    match state.submit() {
        SubmitOutcome::Accepted { write, .. } => {
            write.await.expect("write task completes");
            // The summary stays up even though nothing was persisted.
            assert!(state.show_summary());
            assert!(state.errors().is_empty());
            assert_eq!(state.additional_questions().len(), 2);
        }
        SubmitOutcome::Rejected => panic!("expected submission to be accepted"),
    }
}

#[tokio::test]
async fn form_stays_editable_and_summary_visible_after_submit() {
    let gateway = Arc::new(MemoryGateway::new());
    let mut state = FormState::new(gateway.clone());
    fill_valid_health_form(&mut state);

    let first = match state.submit() {
        SubmitOutcome::Accepted { key, write } => {
            write.await.expect("write task completes");
            key
        }
        SubmitOutcome::Rejected => panic!("expected submission to be accepted"),
    };

    state
        .apply_field_change("feedback", &"y".repeat(70))
        .expect("field change applies");
    assert!(state.show_summary(), "no reset path exists after submit");

    // Keys are millisecond-derived; step past the current one.
    tokio::time::sleep(Duration::from_millis(2)).await;

    match state.submit() {
        SubmitOutcome::Accepted { key, write } => {
            write.await.expect("write task completes");
            assert_ne!(key, first);
            assert_eq!(gateway.len(), 2);
        }
        SubmitOutcome::Rejected => panic!("expected resubmission to be accepted"),
    }
}

#[tokio::test]
async fn switching_topics_retains_inactive_section_values() {
    let gateway = Arc::new(MemoryGateway::new());
    let mut state = FormState::new(gateway);

    state
        .apply_field_change("techSection.favProgrammingLanguage", "Rust")
        .expect("field change applies");
    state
        .apply_field_change("surveyTopic", "Health")
        .expect("field change applies");
    state
        .apply_field_change("surveyTopic", "Technology")
        .expect("field change applies");

    assert_eq!(
        state.snapshot().tech_section.fav_programming_language,
        "Rust"
    );
}
