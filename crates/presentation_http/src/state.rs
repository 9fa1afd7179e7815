//! Application state shared across handlers

use std::sync::Arc;

use application::{FaultInjector, ResourceService};
use infrastructure::{AppConfig, InMemoryRecordStore};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pipeline and store for the configured resource
    pub resources: Arc<ResourceService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire the injector, store and service described by `config`
    ///
    /// The store and the pipeline share one injector, so deletion faults and
    /// payload checks follow the same policy and feed the same statistics.
    pub fn from_config(config: AppConfig) -> Self {
        let injector = Arc::new(FaultInjector::new(config.faults.policy()));
        let store = Arc::new(InMemoryRecordStore::new(Arc::clone(&injector)));
        let service = ResourceService::new(
            config.resource.name.clone(),
            config.resource.schema.clone(),
            injector,
            store,
        );

        Self {
            resources: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Fault injector shared by the pipeline and the store
    pub fn injector(&self) -> &FaultInjector {
        self.resources.injector()
    }
}

#[cfg(test)]
mod tests {
    use application::FaultPolicy;
    use domain::FaultCategory;

    use super::*;

    #[test]
    fn wires_configured_resource_and_policy() {
        let mut config = AppConfig::default();
        config.faults.enabled.remove(&FaultCategory::ExtraKeys);
        let state = AppState::from_config(config);

        assert_eq!(state.resources.name(), "payments");
        assert_eq!(
            *state.injector().policy(),
            FaultPolicy::strict().without(FaultCategory::ExtraKeys)
        );
        assert_eq!(state.config.server.port, 3000);
    }
}
