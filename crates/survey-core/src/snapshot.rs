use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::{SectionKind, active_section};

/// Topic selected in the survey; `Unselected` is the empty select option.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
pub enum SurveyTopic {
    Technology,
    Health,
    Education,
    #[default]
    #[serde(rename = "")]
    Unselected,
}

impl SurveyTopic {
    /// Label used on the wire and in the UI select control.
    pub fn as_label(&self) -> &'static str {
        match self {
            SurveyTopic::Technology => "Technology",
            SurveyTopic::Health => "Health",
            SurveyTopic::Education => "Education",
            SurveyTopic::Unselected => "",
        }
    }
}

impl fmt::Display for SurveyTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for SurveyTopic {
    type Err = FieldError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Technology" => Ok(SurveyTopic::Technology),
            "Health" => Ok(SurveyTopic::Health),
            "Education" => Ok(SurveyTopic::Education),
            "" => Ok(SurveyTopic::Unselected),
            other => Err(FieldError::UnknownTopic(other.to_string())),
        }
    }
}

/// Technology sub-section; validated and displayed only for that topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TechSection {
    pub fav_programming_language: String,
    pub years_of_experience: String,
}

/// Health sub-section; validated and displayed only for that topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthSection {
    pub exercise_frequency: String,
    pub diet_preference: String,
}

/// Education sub-section; validated and displayed only for that topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationSection {
    pub highest_qualification: String,
    pub field_of_study: String,
}

/// Complete current value of every form field at one instant.
///
/// All three conditional sections are always present; inactive ones keep
/// whatever the respondent last typed so switching topics loses nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FormSnapshot {
    pub full_name: String,
    pub email: String,
    pub survey_topic: SurveyTopic,
    pub tech_section: TechSection,
    pub health_section: HealthSection,
    pub education_section: EducationSection,
    pub feedback: String,
}

impl FormSnapshot {
    /// Section activated by the current topic, if any.
    pub fn active_section(&self) -> Option<SectionKind> {
        active_section(self.survey_topic)
    }

    /// Replaces exactly the addressed leaf, leaving every sibling untouched.
    pub fn set(&mut self, path: &FieldPath, value: &str) -> Result<(), FieldError> {
        match path {
            FieldPath::FullName => self.full_name = value.to_string(),
            FieldPath::Email => self.email = value.to_string(),
            FieldPath::SurveyTopic => self.survey_topic = value.parse()?,
            FieldPath::Feedback => self.feedback = value.to_string(),
            FieldPath::FavProgrammingLanguage => {
                self.tech_section.fav_programming_language = value.to_string()
            }
            FieldPath::YearsOfExperience => {
                self.tech_section.years_of_experience = value.to_string()
            }
            FieldPath::ExerciseFrequency => {
                self.health_section.exercise_frequency = value.to_string()
            }
            FieldPath::DietPreference => self.health_section.diet_preference = value.to_string(),
            FieldPath::HighestQualification => {
                self.education_section.highest_qualification = value.to_string()
            }
            FieldPath::FieldOfStudy => self.education_section.field_of_study = value.to_string(),
        }
        Ok(())
    }

    /// Current raw value of the addressed leaf.
    pub fn get(&self, path: &FieldPath) -> &str {
        match path {
            FieldPath::FullName => &self.full_name,
            FieldPath::Email => &self.email,
            FieldPath::SurveyTopic => self.survey_topic.as_label(),
            FieldPath::Feedback => &self.feedback,
            FieldPath::FavProgrammingLanguage => &self.tech_section.fav_programming_language,
            FieldPath::YearsOfExperience => &self.tech_section.years_of_experience,
            FieldPath::ExerciseFrequency => &self.health_section.exercise_frequency,
            FieldPath::DietPreference => &self.health_section.diet_preference,
            FieldPath::HighestQualification => &self.education_section.highest_qualification,
            FieldPath::FieldOfStudy => &self.education_section.field_of_study,
        }
    }
}

/// Typed address of one snapshot leaf.
///
/// Parsed from the event-surface names: top-level fields use their flat name
/// (`fullName`), section leaves use the dotted `section.leaf` form
/// (`techSection.yearsOfExperience`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    FullName,
    Email,
    SurveyTopic,
    Feedback,
    FavProgrammingLanguage,
    YearsOfExperience,
    ExerciseFrequency,
    DietPreference,
    HighestQualification,
    FieldOfStudy,
}

impl FieldPath {
    /// Name carried by field-change events for this leaf; inverse of `FromStr`.
    pub fn event_name(&self) -> &'static str {
        match self {
            FieldPath::FullName => "fullName",
            FieldPath::Email => "email",
            FieldPath::SurveyTopic => "surveyTopic",
            FieldPath::Feedback => "feedback",
            FieldPath::FavProgrammingLanguage => "techSection.favProgrammingLanguage",
            FieldPath::YearsOfExperience => "techSection.yearsOfExperience",
            FieldPath::ExerciseFrequency => "healthSection.exerciseFrequency",
            FieldPath::DietPreference => "healthSection.dietPreference",
            FieldPath::HighestQualification => "educationSection.highestQualification",
            FieldPath::FieldOfStudy => "educationSection.fieldOfStudy",
        }
    }

    /// Every leaf of the snapshot, in display order.
    pub const ALL: [FieldPath; 10] = [
        FieldPath::FullName,
        FieldPath::Email,
        FieldPath::SurveyTopic,
        FieldPath::FavProgrammingLanguage,
        FieldPath::YearsOfExperience,
        FieldPath::ExerciseFrequency,
        FieldPath::DietPreference,
        FieldPath::HighestQualification,
        FieldPath::FieldOfStudy,
        FieldPath::Feedback,
    ];

    /// Key under which validation errors for this leaf are reported.
    pub fn key(&self) -> &'static str {
        match self {
            FieldPath::FullName => "fullName",
            FieldPath::Email => "email",
            FieldPath::SurveyTopic => "surveyTopic",
            FieldPath::Feedback => "feedback",
            FieldPath::FavProgrammingLanguage => "favProgrammingLanguage",
            FieldPath::YearsOfExperience => "yearsOfExperience",
            FieldPath::ExerciseFrequency => "exerciseFrequency",
            FieldPath::DietPreference => "dietPreference",
            FieldPath::HighestQualification => "highestQualification",
            FieldPath::FieldOfStudy => "fieldOfStudy",
        }
    }
}

impl FromStr for FieldPath {
    type Err = FieldError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path {
            "fullName" => Ok(FieldPath::FullName),
            "email" => Ok(FieldPath::Email),
            "surveyTopic" => Ok(FieldPath::SurveyTopic),
            "feedback" => Ok(FieldPath::Feedback),
            "techSection.favProgrammingLanguage" => Ok(FieldPath::FavProgrammingLanguage),
            "techSection.yearsOfExperience" => Ok(FieldPath::YearsOfExperience),
            "healthSection.exerciseFrequency" => Ok(FieldPath::ExerciseFrequency),
            "healthSection.dietPreference" => Ok(FieldPath::DietPreference),
            "educationSection.highestQualification" => Ok(FieldPath::HighestQualification),
            "educationSection.fieldOfStudy" => Ok(FieldPath::FieldOfStudy),
            other => Err(FieldError::UnknownPath(other.to_string())),
        }
    }
}

/// Errors raised while addressing or updating snapshot fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field path '{0}'")]
    UnknownPath(String),
    #[error("unknown survey topic '{0}'")]
    UnknownTopic(String),
}
