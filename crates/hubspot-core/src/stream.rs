use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A HubSpot object type the tap can sync
pub trait Stream: Send + Sync {
    /// Stream key, e.g. "contacts"
    fn name(&self) -> &str;

    /// Implementation identifier the stream was built from
    fn implementation(&self) -> &str;

    /// API path relative to the HubSpot base URL
    fn path(&self) -> &str;

    fn primary_keys(&self) -> &[&'static str];

    /// Field used for incremental replication, if the stream is incremental
    fn replication_key(&self) -> Option<&str>;

    /// Properties requested from the API; empty means all
    fn properties(&self) -> &[String];

    /// Serializable summary of the stream
    fn descriptor(&self) -> StreamDescriptor;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub tap_stream_id: String,
    pub implementation: String,
    pub path: String,
    pub key_properties: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_key: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}
