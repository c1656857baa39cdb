use crate::{discovery, Reporter, Stream, StreamBuildError, StreamRegistry, TapConfig};
use std::sync::Arc;

/// Parent context handed to every stream on construction
#[derive(Debug, Clone)]
pub struct Tap {
    config: Arc<TapConfig>,
}

impl Tap {
    pub const NAME: &'static str = "tap-hubspot";

    pub fn new(config: TapConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn name(&self) -> &str {
        Self::NAME
    }

    pub fn config(&self) -> &TapConfig {
        &self.config
    }

    /// Shared handle to the configuration, for streams that keep it
    pub fn shared_config(&self) -> Arc<TapConfig> {
        Arc::clone(&self.config)
    }

    /// Build the configured streams from the registry
    pub fn discover_streams(
        &self,
        registry: &StreamRegistry,
        reporter: &dyn Reporter,
    ) -> Result<Vec<Box<dyn Stream>>, StreamBuildError> {
        discovery::discover_streams(self, registry, reporter)
    }
}
