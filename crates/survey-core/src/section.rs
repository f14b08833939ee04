use crate::snapshot::SurveyTopic;

/// The three topic-conditional sub-sections of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Tech,
    Health,
    Education,
}

/// Resolves which conditional section the topic activates.
///
/// At most one section is active at a time; the other two keep their values
/// but are skipped by validation and display.
pub fn active_section(topic: SurveyTopic) -> Option<SectionKind> {
    match topic {
        SurveyTopic::Technology => Some(SectionKind::Tech),
        SurveyTopic::Health => Some(SectionKind::Health),
        SurveyTopic::Education => Some(SectionKind::Education),
        SurveyTopic::Unselected => None,
    }
}
