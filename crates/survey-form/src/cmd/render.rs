use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;

use survey_core::{build_summary, questions_for, render_json, render_text, validate};

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Answers document (submission JSON, missing fields default to empty)
    #[arg(long = "answers", value_name = "answers.json")]
    pub answers: PathBuf,
    /// Emit the summary as JSON instead of text
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let snapshot = super::load_snapshot(&args.answers)?;

    let errors = validate(&snapshot);
    if !errors.is_empty() {
        for (field, message) in &errors {
            eprintln!("{field}: {message}");
        }
        bail!("validation failed with {} error(s)", errors.len());
    }

    let questions: Vec<String> = questions_for(snapshot.survey_topic)
        .iter()
        .map(|question| question.to_string())
        .collect();
    let payload = build_summary(&snapshot, &questions);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&payload))?);
    } else {
        println!("{}", render_text(&payload));
    }
    Ok(())
}
