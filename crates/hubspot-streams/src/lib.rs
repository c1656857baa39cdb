mod definitions;
mod factory;
mod hubspot_stream;

pub use definitions::{StreamDefinition, StreamKind, DEFINITIONS};
pub use factory::{default_registry, HubspotStreamFactory};
pub use hubspot_stream::HubspotStream;
