use serde::{Deserialize, Deserializer};

/// Backend rows may carry `null` in text columns; treat it as empty.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
