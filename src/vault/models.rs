//! Vault export models

use serde::{Deserialize, Deserializer};

/// One media entry from a vault export
///
/// Fields other than `description` and `url` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VaultEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub url: String,
}

/// Exports write `null` for entries without a description
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
