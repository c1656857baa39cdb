use crate::definitions::DEFINITIONS;
use crate::{HubspotStream, StreamDefinition};
use hubspot_core::{Result, Stream, StreamFactory, StreamRegistry, Tap};
use std::sync::Arc;

pub struct HubspotStreamFactory {
    definition: StreamDefinition,
}

impl HubspotStreamFactory {
    pub fn new(definition: StreamDefinition) -> Self {
        Self { definition }
    }
}

impl StreamFactory for HubspotStreamFactory {
    fn implementation(&self) -> &str {
        self.definition.implementation
    }

    fn create(&self, tap: &Tap) -> Result<Box<dyn Stream>> {
        Ok(Box::new(HubspotStream::new(tap, self.definition)?))
    }
}

/// Registry holding every built-in HubSpot stream, in discovery order
pub fn default_registry() -> StreamRegistry {
    let mut registry = StreamRegistry::new();
    for definition in DEFINITIONS.iter() {
        registry.register_factory(Arc::new(HubspotStreamFactory::new(*definition)));
        registry.add_stream(definition.name, definition.implementation);
    }
    registry
}
