#![allow(missing_docs)]

pub mod frontend;
pub mod questions;
pub mod render;
pub mod schema;
pub mod section;
pub mod snapshot;
pub mod validate;

pub use frontend::{DefaultSummaryFrontend, SummaryFrontend};
pub use questions::questions_for;
pub use render::{SummaryPayload, SummaryRow, build_summary, render_json, render_text};
pub use schema::submission_schema;
pub use section::{SectionKind, active_section};
pub use snapshot::{
    EducationSection, FieldError, FieldPath, FormSnapshot, HealthSection, SurveyTopic, TechSection,
};
pub use validate::{ErrorMap, validate};
