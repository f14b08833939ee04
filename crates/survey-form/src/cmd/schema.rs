use anyhow::Result;

use survey_core::submission_schema;

pub fn run() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&submission_schema())?);
    Ok(())
}
