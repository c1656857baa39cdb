use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

/// User configuration for the HubSpot tap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TapConfig {
    /// Token to authenticate against the API service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// The OAuth app client ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// The OAuth app client secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// The OAuth app refresh token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Earliest record date to sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    /// Latest record date to sync
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    /// List of streams
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub streams: Option<Vec<String>>,

    /// List of fields
    #[serde(
        default,
        deserialize_with = "string_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub fields: Option<Vec<String>>,

    /// Filter field to use for the stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_field: Option<String>,
}

/// Accepts either a list or a comma-separated string (as set through the environment)
fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringList {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<StringList>::deserialize(deserializer)? {
        None => None,
        Some(StringList::List(items)) => Some(items),
        Some(StringList::Joined(joined)) => Some(
            joined
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
        ),
    })
}

impl TapConfig {
    /// Requested stream names, if any were given
    pub fn selected_streams(&self) -> Option<&[String]> {
        match &self.streams {
            Some(streams) if !streams.is_empty() => Some(streams),
            _ => None,
        }
    }

    /// JSON schema describing the accepted configuration
    pub fn json_schema() -> Value {
        let string = |description: &str| json!({ "type": ["string", "null"], "description": description });
        let date_time = |description: &str| {
            json!({ "type": ["string", "null"], "format": "date-time", "description": description })
        };
        let string_list = |description: &str| {
            json!({
                "type": ["array", "null"],
                "items": { "type": "string" },
                "description": description
            })
        };

        let mut properties = Map::new();
        properties.insert(
            "access_token".into(),
            string("Token to authenticate against the API service"),
        );
        properties.insert("client_id".into(), string("The OAuth app client ID."));
        properties.insert("client_secret".into(), string("The OAuth app client secret."));
        properties.insert("refresh_token".into(), string("The OAuth app refresh token."));
        properties.insert("start_date".into(), date_time("Earliest record date to sync"));
        properties.insert("end_date".into(), date_time("Latest record date to sync"));
        properties.insert("streams".into(), string_list("List of streams"));
        properties.insert("fields".into(), string_list("List of fields"));
        properties.insert(
            "filter_field".into(),
            string("Filter field to use for the stream"),
        );

        json!({
            "type": "object",
            "properties": properties,
        })
    }
}
