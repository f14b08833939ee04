use serde_json::Value;

use crate::render::{SummaryPayload, render_json, render_text};

/// Abstraction over frontends that render the same summary payload into
/// different transports.
pub trait SummaryFrontend {
    fn render_text_ui(&self, payload: &SummaryPayload) -> String;
    fn render_json_ui(&self, payload: &SummaryPayload) -> Value;
}

/// Default frontend implementation that reuses the existing renderer functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSummaryFrontend;

impl SummaryFrontend for DefaultSummaryFrontend {
    fn render_text_ui(&self, payload: &SummaryPayload) -> String {
        render_text(payload)
    }

    fn render_json_ui(&self, payload: &SummaryPayload) -> Value {
        render_json(payload)
    }
}
