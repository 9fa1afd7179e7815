//! Record storage port
//!
//! Defines the keyed container that holds the emulated resource's records.

use async_trait::async_trait;
use domain::{Payload, Record, RecordId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for record persistence
///
/// Implementations assign ids sequentially starting at 1 and never reuse an
/// id, even after the record holding it has been deleted.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordStorePort: Send + Sync {
    /// Store a sanitized payload under the next id
    async fn create(&self, fields: Payload) -> Result<Record, ApplicationError>;

    /// Get a record by id
    async fn read(&self, id: RecordId) -> Result<Option<Record>, ApplicationError>;

    /// Shallow-merge `changes` into an existing record
    ///
    /// # Returns
    /// false if no record has this id
    async fn update(&self, id: RecordId, changes: Payload) -> Result<bool, ApplicationError>;

    /// Delete a record
    ///
    /// # Returns
    /// false if no record has this id
    async fn delete(&self, id: RecordId) -> Result<bool, ApplicationError>;

    /// Number of stored records
    async fn count(&self) -> Result<usize, ApplicationError>;
}
