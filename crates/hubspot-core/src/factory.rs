use crate::{Result, Stream, Tap};

/// Factory trait for creating streams
pub trait StreamFactory: Send + Sync {
    /// Implementation identifier this factory answers to (e.g. "Contact")
    fn implementation(&self) -> &str;

    /// Create a new stream instance owned by the given tap
    fn create(&self, tap: &Tap) -> Result<Box<dyn Stream>>;
}
