use crate::{StreamDefinition, StreamKind};
use hubspot_core::{Error, Result, Stream, StreamDescriptor, Tap, TapConfig};
use std::sync::Arc;
use tracing::debug;

/// A configured HubSpot stream
pub struct HubspotStream {
    definition: StreamDefinition,
    config: Arc<TapConfig>,
    replication_key: Option<String>,
    properties: Vec<String>,
}

impl HubspotStream {
    pub fn new(tap: &Tap, definition: StreamDefinition) -> Result<Self> {
        validate(&definition)?;

        let config = tap.config();
        let (replication_key, properties) = match definition.kind {
            StreamKind::CrmObject => (
                config
                    .filter_field
                    .clone()
                    .or_else(|| definition.replication_key.map(String::from)),
                config.fields.clone().unwrap_or_default(),
            ),
            _ => (definition.replication_key.map(String::from), Vec::new()),
        };

        debug!(
            "Configured stream '{}' ({}) at {}",
            definition.name, definition.implementation, definition.path
        );

        Ok(Self {
            definition,
            config: tap.shared_config(),
            replication_key,
            properties,
        })
    }
}

fn validate(definition: &StreamDefinition) -> Result<()> {
    if definition.name.is_empty() {
        return Err(Error::Configuration(format!(
            "Stream '{}' has no name",
            definition.implementation
        )));
    }
    if !definition.path.starts_with('/') {
        return Err(Error::Configuration(format!(
            "Stream '{}' has an invalid path '{}'",
            definition.name, definition.path
        )));
    }
    if definition.primary_keys.is_empty() {
        return Err(Error::Configuration(format!(
            "Stream '{}' declares no primary keys",
            definition.name
        )));
    }
    Ok(())
}

impl Stream for HubspotStream {
    fn name(&self) -> &str {
        self.definition.name
    }

    fn implementation(&self) -> &str {
        self.definition.implementation
    }

    fn path(&self) -> &str {
        self.definition.path
    }

    fn primary_keys(&self) -> &[&'static str] {
        self.definition.primary_keys
    }

    fn replication_key(&self) -> Option<&str> {
        self.replication_key.as_deref()
    }

    fn properties(&self) -> &[String] {
        &self.properties
    }

    fn descriptor(&self) -> StreamDescriptor {
        let incremental = self.replication_key.is_some();
        StreamDescriptor {
            tap_stream_id: self.definition.name.to_string(),
            implementation: self.definition.implementation.to_string(),
            path: self.definition.path.to_string(),
            key_properties: self
                .definition
                .primary_keys
                .iter()
                .map(|k| k.to_string())
                .collect(),
            replication_key: self.replication_key.clone(),
            properties: self.properties.clone(),
            start_date: self.config.start_date.filter(|_| incremental),
            end_date: self.config.end_date.filter(|_| incremental),
        }
    }
}
