use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cmd::{
    self, questions::QuestionsArgs, render::RenderArgs, submit::SubmitArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "survey-form",
    about = "Survey form client and submission tools",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an answers document and persist the submission
    Submit(SubmitArgs),
    /// Preview the submission summary without persisting
    Render(RenderArgs),
    /// Print the follow-up questions for a topic
    Questions(QuestionsArgs),
    /// Print the JSON schema of the stored submission document
    Schema,
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Submit(args) => cmd::submit::run(args),
        Commands::Render(args) => cmd::render::run(args),
        Commands::Questions(args) => cmd::questions::run(args),
        Commands::Schema => cmd::schema::run(),
    }
}
