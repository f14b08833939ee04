use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use survey_core::{FieldPath, FormSnapshot, render_json, render_text};
use survey_store::{MemoryGateway, PersistenceGateway, RestGateway, StoreConfig};

use crate::state::{FormState, SubmitOutcome};

const STORE_URL_ENV: &str = "SURVEY_STORE_URL";
const STORE_AUTH_ENV: &str = "SURVEY_STORE_AUTH";

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Answers document (submission JSON, missing fields default to empty)
    #[arg(long = "answers", value_name = "answers.json")]
    pub answers: PathBuf,
    /// Base URL of the document store; falls back to SURVEY_STORE_URL
    #[arg(long = "store-url", value_name = "URL")]
    pub store_url: Option<String>,
    /// Auth token appended to store requests; falls back to SURVEY_STORE_AUTH
    #[arg(long = "auth-token", value_name = "TOKEN")]
    pub auth_token: Option<String>,
    /// Validate and render without writing to the remote store
    #[arg(long = "dry-run", default_value_t = false)]
    pub dry_run: bool,
    /// Emit the summary as JSON instead of text
    #[arg(long = "json", default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SubmitArgs) -> Result<()> {
    let snapshot = super::load_snapshot(&args.answers)?;

    let gateway: Arc<dyn PersistenceGateway> = if args.dry_run {
        Arc::new(MemoryGateway::new())
    } else {
        Arc::new(RestGateway::new(resolve_store_config(&args)?)?)
    };

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async move {
        let mut state = FormState::new(gateway);
        replay(&mut state, &snapshot)?;

        match state.submit() {
            SubmitOutcome::Rejected => {
                for (field, message) in state.errors() {
                    eprintln!("{field}: {message}");
                }
                bail!("validation failed with {} error(s)", state.errors().len());
            }
            SubmitOutcome::Accepted { key, write } => {
                let payload = state.summary();
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&render_json(&payload))?);
                } else {
                    println!("{}", render_text(&payload));
                }
                if args.dry_run {
                    println!("dry run: submission not persisted");
                } else {
                    println!("submission dispatched under {key}");
                }
                // The join only keeps the process alive until the write lands;
                // the form state itself never waits on it.
                let _ = write.await;
                Ok(())
            }
        }
    })
}

/// Feeds the loaded document through the same field-change surface the UI uses.
fn replay(state: &mut FormState, snapshot: &FormSnapshot) -> Result<()> {
    for path in FieldPath::ALL {
        state
            .apply_field_change(path.event_name(), snapshot.get(&path))
            .with_context(|| format!("failed to apply field '{}'", path.event_name()))?;
    }
    Ok(())
}

fn resolve_store_config(args: &SubmitArgs) -> Result<StoreConfig> {
    let base_url = args
        .store_url
        .clone()
        .or_else(|| env::var(STORE_URL_ENV).ok())
        .with_context(|| format!("no store URL: pass --store-url or set {STORE_URL_ENV}"))?;

    let mut config = StoreConfig::new(base_url);
    if let Some(token) = args
        .auth_token
        .clone()
        .or_else(|| env::var(STORE_AUTH_ENV).ok())
    {
        config = config.with_auth_token(token);
    }
    Ok(config)
}
