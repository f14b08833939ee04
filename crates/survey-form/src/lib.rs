#![allow(missing_docs)]

pub mod cli;
pub mod cmd;
pub mod state;

pub use state::{FormState, SubmitOutcome};
