//! In-memory record store adapter
//!
//! Implements `RecordStorePort` over a mutex-guarded map. Records live for the
//! life of the process.

use std::collections::BTreeMap;
use std::sync::Arc;

use application::{ApplicationError, FaultInjector, ports::RecordStorePort};
use async_trait::async_trait;
use domain::{Payload, Record, RecordId};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug)]
struct StoreState {
    records: BTreeMap<RecordId, Record>,
    next_id: RecordId,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: RecordId::FIRST,
        }
    }
}

/// In-memory implementation of record storage
///
/// Id allocation and map mutation happen under one lock, so ids stay unique
/// and increasing when handlers run concurrently.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    state: Arc<Mutex<StoreState>>,
    injector: Arc<FaultInjector>,
}

impl InMemoryRecordStore {
    /// Create an empty store consulting `injector` for deletion faults
    #[must_use]
    pub fn new(injector: Arc<FaultInjector>) -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::default())),
            injector,
        }
    }
}

impl Clone for InMemoryRecordStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            injector: Arc::clone(&self.injector),
        }
    }
}

#[async_trait]
impl RecordStorePort for InMemoryRecordStore {
    async fn create(&self, fields: Payload) -> Result<Record, ApplicationError> {
        let mut state = self.state.lock();
        let id = state.next_id;
        if id.next() == id {
            return Err(ApplicationError::Internal(
                "record id space exhausted".to_string(),
            ));
        }
        state.next_id = id.next();

        let record = Record::new(id, fields);
        state.records.insert(id, record.clone());
        debug!(id = %id, total = state.records.len(), "Record stored");
        Ok(record)
    }

    async fn read(&self, id: RecordId) -> Result<Option<Record>, ApplicationError> {
        Ok(self.state.lock().records.get(&id).cloned())
    }

    async fn update(&self, id: RecordId, changes: Payload) -> Result<bool, ApplicationError> {
        let mut state = self.state.lock();
        let Some(record) = state.records.get_mut(&id) else {
            return Ok(false);
        };
        record.merge(changes);
        debug!(id = %id, "Record merged");
        Ok(true)
    }

    async fn delete(&self, id: RecordId) -> Result<bool, ApplicationError> {
        let mut state = self.state.lock();
        if !state.records.contains_key(&id) {
            return Ok(false);
        }

        if self.injector.broken_record_deletion() {
            warn!(id = %id, "Faking deletion, record kept");
            return Ok(true);
        }

        state.records.remove(&id);
        info!(id = %id, remaining = state.records.len(), "Record removed");
        Ok(true)
    }

    async fn count(&self) -> Result<usize, ApplicationError> {
        Ok(self.state.lock().records.len())
    }
}
