//! Resource service
//!
//! Runs raw request bodies through parse, sanitize and validate before
//! committing them to the record store.

use std::sync::Arc;

use domain::{DomainError, Payload, Record, RecordId, Schema};
use tracing::{debug, info, instrument};

use super::{FieldValidator, PayloadParser, SchemaSanitizer, ValidationMode};
use crate::{chaos::FaultInjector, error::ApplicationError, ports::RecordStorePort};

/// CRUD over one schema-described resource
pub struct ResourceService {
    name: String,
    schema: Arc<Schema>,
    injector: Arc<FaultInjector>,
    parser: PayloadParser,
    sanitizer: SchemaSanitizer,
    validator: FieldValidator,
    store: Arc<dyn RecordStorePort>,
}

impl std::fmt::Debug for ResourceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceService")
            .field("name", &self.name)
            .field("schema", &self.schema)
            .field("policy", self.injector.policy())
            .finish_non_exhaustive()
    }
}

impl ResourceService {
    /// Create a service for the resource `name`
    ///
    /// The store should share `injector` so deletion faults follow the same
    /// policy as the payload checks.
    pub fn new(
        name: impl Into<String>,
        schema: Schema,
        injector: Arc<FaultInjector>,
        store: Arc<dyn RecordStorePort>,
    ) -> Self {
        Self {
            name: name.into(),
            schema: Arc::new(schema),
            parser: PayloadParser::new(Arc::clone(&injector)),
            sanitizer: SchemaSanitizer::new(Arc::clone(&injector)),
            validator: FieldValidator::new(Arc::clone(&injector)),
            injector,
            store,
        }
    }

    /// Resource name used in routes
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fault injector shared by the pipeline
    pub fn injector(&self) -> &FaultInjector {
        &self.injector
    }

    /// Create a record from a raw body
    #[instrument(skip(self, raw), fields(resource = %self.name, bytes = raw.len()))]
    pub async fn create(&self, raw: &[u8]) -> Result<Record, ApplicationError> {
        let fields = self.accept(raw, ValidationMode::Create)?;
        let record = self.store.create(fields).await?;
        info!(id = %record.id, "Record created");
        Ok(record)
    }

    /// Read a record by its textual id
    #[instrument(skip(self), fields(resource = %self.name))]
    pub async fn read(&self, id: &str) -> Result<Record, ApplicationError> {
        let id = RecordId::parse(id)?;
        self.store
            .read(id)
            .await?
            .ok_or_else(|| self.not_found(id))
    }

    /// Merge a raw body into an existing record
    #[instrument(skip(self, raw), fields(resource = %self.name, bytes = raw.len()))]
    pub async fn update(&self, id: &str, raw: &[u8]) -> Result<RecordId, ApplicationError> {
        let id = RecordId::parse(id)?;
        let changes = self.accept(raw, ValidationMode::Update)?;
        if self.store.update(id, changes).await? {
            info!(id = %id, "Record updated");
            Ok(id)
        } else {
            Err(self.not_found(id))
        }
    }

    /// Delete a record by its textual id
    #[instrument(skip(self), fields(resource = %self.name))]
    pub async fn delete(&self, id: &str) -> Result<RecordId, ApplicationError> {
        let id = RecordId::parse(id)?;
        if self.store.delete(id).await? {
            info!(id = %id, "Record deleted");
            Ok(id)
        } else {
            Err(self.not_found(id))
        }
    }

    /// Number of stored records
    pub async fn count(&self) -> Result<usize, ApplicationError> {
        self.store.count().await
    }

    fn accept(&self, raw: &[u8], mode: ValidationMode) -> Result<Payload, ApplicationError> {
        let parsed = self.parser.parse(raw)?;
        if !parsed.accepted {
            return Err(ApplicationError::InvalidObject(
                "payload could not be decoded".to_string(),
            ));
        }

        let sanitized = self.sanitizer.sanitize(&parsed.value, &self.schema)?;

        if !self.validator.valid_obj(&sanitized, &self.schema, mode)? {
            debug!(?mode, keys = sanitized.len(), "Payload is not a valid object");
            return Err(ApplicationError::InvalidObject(format!(
                "payload is not a valid {} object",
                self.name
            )));
        }

        Ok(sanitized)
    }

    fn not_found(&self, id: RecordId) -> ApplicationError {
        ApplicationError::Domain(DomainError::not_found(&self.name, id.to_string()))
    }
}
