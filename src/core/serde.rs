use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;
use tracing::Level;

/// Serializes Duration as seconds
pub fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    duration.as_secs_f64().serialize(serializer)
}

/// Deserializes an optional log level from its name ("warn", "debug", ...)
pub fn deserialize_level<'de, D>(deserializer: D) -> Result<Option<Level>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    match name {
        None => Ok(None),
        Some(name) => name
            .parse::<Level>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("unknown log level `{}`", name))),
    }
}
