use anyhow::{Context, Result};
use clap::Args;

use survey_core::{SurveyTopic, questions_for};

#[derive(Args, Debug, Clone)]
pub struct QuestionsArgs {
    /// Survey topic (Technology, Health, or Education)
    #[arg(long = "topic", value_name = "TOPIC")]
    pub topic: String,
    /// Emit the questions as a JSON array
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(args: QuestionsArgs) -> Result<()> {
    let topic: SurveyTopic = args
        .topic
        .parse()
        .with_context(|| format!("unrecognized topic '{}'", args.topic))?;

    let questions = questions_for(topic);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        for question in questions {
            println!("{question}");
        }
    }
    Ok(())
}
