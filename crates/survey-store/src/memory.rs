use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use survey_core::FormSnapshot;

use crate::{PersistenceGateway, StoreError};

/// In-memory gateway for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    records: Mutex<BTreeMap<String, FormSnapshot>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn records(&self) -> BTreeMap<String, FormSnapshot> {
        self.records.lock().expect("records lock").clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("records lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn put(&self, key: &str, snapshot: &FormSnapshot) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("records lock")
            .insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}
