use crate::{Reporter, Stream, StreamBuildError, StreamRegistry, Tap};

/// Resolve the configured stream names against the registry.
///
/// The result follows registry order. Unknown names are dropped, and an absent
/// or fully invalid selection falls back to every registry key.
pub fn select_stream_keys(
    tap: &Tap,
    registry: &StreamRegistry,
    reporter: &dyn Reporter,
) -> Vec<String> {
    let Some(requested) = tap.config().selected_streams() else {
        reporter.info("No 'streams' config specified. Loading all streams.");
        return registry.keys();
    };

    let valid: Vec<String> = registry
        .keys()
        .into_iter()
        .filter(|key| requested.iter().any(|r| r == key))
        .collect();

    if valid.is_empty() {
        reporter.warn("All stream keys in config are invalid. Falling back to all streams.");
        return registry.keys();
    }
    valid
}

/// Instantiate every selected stream.
///
/// Unregistered implementations are reported and skipped; any other
/// construction failure is reported and aborts discovery.
pub fn discover_streams(
    tap: &Tap,
    registry: &StreamRegistry,
    reporter: &dyn Reporter,
) -> Result<Vec<Box<dyn Stream>>, StreamBuildError> {
    let keys = select_stream_keys(tap, registry, reporter);

    let mut streams: Vec<Box<dyn Stream>> = Vec::with_capacity(keys.len());
    for key in &keys {
        match registry.build(key, tap) {
            Ok(stream) => streams.push(stream),
            Err(e) if !e.is_fatal() => {
                reporter.error(&e.to_string());
            }
            Err(e) => {
                reporter.error(&e.to_string());
                return Err(e);
            }
        }
    }

    let names: Vec<&str> = streams.iter().map(|s| s.name()).collect();
    reporter.info(&format!("Instantiated streams: {:?}", names));

    Ok(streams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryReporter, TapConfig};
    use tracing::Level;

    fn registry() -> StreamRegistry {
        let mut registry = StreamRegistry::new();
        for key in ["contacts", "companies", "deals"] {
            registry.add_stream(key, key.to_uppercase());
        }
        registry
    }

    fn tap_with(streams: Option<Vec<&str>>) -> Tap {
        Tap::new(TapConfig {
            streams: streams.map(|s| s.into_iter().map(String::from).collect()),
            ..Default::default()
        })
    }

    #[test]
    fn test_select_without_config_uses_all_keys() {
        let reporter = MemoryReporter::new();
        let keys = select_stream_keys(&tap_with(None), &registry(), &reporter);

        assert_eq!(keys, vec!["contacts", "companies", "deals"]);
        assert_eq!(
            reporter.messages(Level::INFO),
            vec!["No 'streams' config specified. Loading all streams."]
        );
    }

    #[test]
    fn test_select_follows_registry_order_and_dedupes() {
        let reporter = MemoryReporter::new();
        let tap = tap_with(Some(vec!["deals", "contacts", "deals", "nope"]));
        let keys = select_stream_keys(&tap, &registry(), &reporter);

        assert_eq!(keys, vec!["contacts", "deals"]);
        assert!(reporter.entries().is_empty());
    }

    #[test]
    fn test_select_invalid_only_falls_back_with_warning() {
        let reporter = MemoryReporter::new();
        let keys = select_stream_keys(&tap_with(Some(vec!["nope"])), &registry(), &reporter);

        assert_eq!(keys.len(), 3);
        assert_eq!(reporter.messages(Level::WARN).len(), 1);
    }

    #[test]
    fn test_discover_skips_unregistered_implementations() {
        // No factories registered: every entry is unresolved.
        let reporter = MemoryReporter::new();
        let streams = discover_streams(&tap_with(None), &registry(), &reporter).unwrap();

        assert!(streams.is_empty());
        assert_eq!(reporter.messages(Level::ERROR).len(), 3);
        assert_eq!(
            reporter.messages(Level::INFO).last().map(String::as_str),
            Some("Instantiated streams: []")
        );
    }
}
