use crate::snapshot::SurveyTopic;

const TECHNOLOGY_QUESTIONS: [&str; 2] = [
    "Which technology are you most excited to learn next?",
    "How do you keep your technical skills up to date?",
];

const HEALTH_QUESTIONS: [&str; 2] = [
    "What motivates you to stay active?",
    "Have your health habits changed in the last year?",
];

const EDUCATION_QUESTIONS: [&str; 2] = [
    "What made you choose your field of study?",
    "Would you consider further studies in the future?",
];

/// Static follow-up questions for a topic.
///
/// Totally defined: exactly two entries for each known topic, an empty slice
/// for an unselected topic. Pure lookup, no hidden state.
pub fn questions_for(topic: SurveyTopic) -> &'static [&'static str] {
    match topic {
        SurveyTopic::Technology => &TECHNOLOGY_QUESTIONS,
        SurveyTopic::Health => &HEALTH_QUESTIONS,
        SurveyTopic::Education => &EDUCATION_QUESTIONS,
        SurveyTopic::Unselected => &[],
    }
}
