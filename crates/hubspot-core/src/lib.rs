mod config;
mod discovery;
mod error;
mod factory;
mod registry;
mod reporter;
mod stream;
mod tap;

pub use config::TapConfig;
pub use discovery::{discover_streams, select_stream_keys};
pub use error::{Error, Result, StreamBuildError};
pub use factory::StreamFactory;
pub use registry::StreamRegistry;
pub use reporter::{MemoryReporter, Reporter, TracingReporter, DISCOVERY_TARGET};
pub use stream::{Stream, StreamDescriptor};
pub use tap::Tap;
