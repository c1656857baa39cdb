use crate::{Error, Result, Stream, StreamBuildError, StreamFactory, Tap};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered table of stream keys plus the factories that build them
pub struct StreamRegistry {
    /// (stream key, implementation identifier) in discovery order
    streams: Vec<(String, String)>,
    factories: HashMap<String, Arc<dyn StreamFactory>>,
}

impl StreamRegistry {
    pub fn new() -> Self {
        Self {
            streams: Vec::new(),
            factories: HashMap::new(),
        }
    }

    /// Register a stream factory under its implementation identifier
    pub fn register_factory(&mut self, factory: Arc<dyn StreamFactory>) {
        let implementation = factory.implementation().to_string();
        self.factories.insert(implementation, factory);
    }

    /// Append a stream key, or repoint an existing key to another implementation
    pub fn add_stream(&mut self, key: impl Into<String>, implementation: impl Into<String>) {
        let key = key.into();
        let implementation = implementation.into();
        match self.streams.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = implementation,
            None => self.streams.push((key, implementation)),
        }
    }

    /// Stream keys in registry order
    pub fn keys(&self) -> Vec<String> {
        self.streams.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.streams.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Implementation identifier registered for a stream key
    pub fn implementation_for(&self, key: &str) -> Option<&str> {
        self.streams
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, implementation)| implementation.as_str())
    }

    /// Get a stream factory by implementation identifier
    pub fn get_factory(&self, implementation: &str) -> Result<Arc<dyn StreamFactory>> {
        self.factories.get(implementation).cloned().ok_or_else(|| {
            Error::Configuration(format!("Stream factory '{}' not found", implementation))
        })
    }

    /// List all registered implementation identifiers
    pub fn list_factories(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Construct the stream registered under `key`
    pub fn build(
        &self,
        key: &str,
        tap: &Tap,
    ) -> std::result::Result<Box<dyn Stream>, StreamBuildError> {
        let implementation = self
            .implementation_for(key)
            .ok_or_else(|| StreamBuildError::UnknownKey {
                key: key.to_string(),
            })?;
        let factory = self
            .get_factory(implementation)
            .map_err(|_| StreamBuildError::Unresolved {
                key: key.to_string(),
                implementation: implementation.to_string(),
            })?;

        factory
            .create(tap)
            .map_err(|source| StreamBuildError::Construction {
                key: key.to_string(),
                implementation: implementation.to_string(),
                source,
            })
    }
}

impl Default for StreamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StreamDescriptor, TapConfig};

    struct FixedStream(&'static str);

    impl Stream for FixedStream {
        fn name(&self) -> &str {
            self.0
        }
        fn implementation(&self) -> &str {
            "Fixed"
        }
        fn path(&self) -> &str {
            "/fixed"
        }
        fn primary_keys(&self) -> &[&'static str] {
            &["id"]
        }
        fn replication_key(&self) -> Option<&str> {
            None
        }
        fn properties(&self) -> &[String] {
            &[]
        }
        fn descriptor(&self) -> StreamDescriptor {
            StreamDescriptor {
                tap_stream_id: self.0.to_string(),
                implementation: "Fixed".to_string(),
                path: "/fixed".to_string(),
                key_properties: vec!["id".to_string()],
                replication_key: None,
                properties: Vec::new(),
                start_date: None,
                end_date: None,
            }
        }
    }

    struct FixedFactory;

    impl StreamFactory for FixedFactory {
        fn implementation(&self) -> &str {
            "Fixed"
        }
        fn create(&self, _tap: &Tap) -> Result<Box<dyn Stream>> {
            Ok(Box::new(FixedStream("fixed")))
        }
    }

    struct BrokenFactory;

    impl StreamFactory for BrokenFactory {
        fn implementation(&self) -> &str {
            "Broken"
        }
        fn create(&self, _tap: &Tap) -> Result<Box<dyn Stream>> {
            Err(Error::Configuration("bad definition".to_string()))
        }
    }

    #[test]
    fn test_add_stream_keeps_insertion_order() {
        let mut registry = StreamRegistry::new();
        registry.add_stream("b", "Fixed");
        registry.add_stream("a", "Fixed");
        registry.add_stream("c", "Fixed");
        registry.add_stream("a", "Other");

        assert_eq!(registry.keys(), vec!["b", "a", "c"]);
        assert_eq!(registry.implementation_for("a"), Some("Other"));
        assert!(registry.contains_key("c"));
        assert!(!registry.contains_key("d"));
    }

    #[test]
    fn test_build_distinguishes_failure_kinds() {
        let mut registry = StreamRegistry::new();
        registry.register_factory(Arc::new(FixedFactory));
        registry.register_factory(Arc::new(BrokenFactory));
        registry.add_stream("fixed", "Fixed");
        registry.add_stream("broken", "Broken");
        registry.add_stream("ghost", "Ghost");
        let tap = Tap::new(TapConfig::default());

        assert_eq!(registry.build("fixed", &tap).unwrap().name(), "fixed");

        let err = registry.build("ghost", &tap).err().unwrap();
        assert!(!err.is_fatal());
        assert_eq!(err.key(), "ghost");

        let err = registry.build("broken", &tap).err().unwrap();
        assert!(err.is_fatal());

        let err = registry.build("unknown", &tap).err().unwrap();
        assert!(matches!(err, StreamBuildError::UnknownKey { .. }));
        assert!(!err.is_fatal());
        assert_eq!(err.to_string(), "Stream 'unknown' is not in the registry");

        let err = registry.build("ghost", &tap).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Stream implementation 'Ghost' for 'ghost' is not registered"
        );
        assert_eq!(registry.list_factories(), vec!["Broken", "Fixed"]);
    }
}
