#![allow(missing_docs)]

pub mod key;
pub mod memory;
pub mod rest;

use async_trait::async_trait;
use thiserror::Error;

use survey_core::FormSnapshot;

pub use key::{COLLECTION, submission_key};
pub use memory::MemoryGateway;
pub use rest::{RestGateway, StoreConfig};

/// Remote document store boundary consumed by the form client.
///
/// `put` writes one submission under a caller-generated key. The caller does
/// not gate any behavior on the outcome; it is only reported to the log.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn put(&self, key: &str, snapshot: &FormSnapshot) -> Result<(), StoreError>;
}

/// Errors raised by persistence gateways.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store rejected write for '{key}' with status {status}")]
    Rejected { key: String, status: u16 },
}
