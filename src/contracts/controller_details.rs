
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// A single controller entry as reported by `juju show-controller --show-password --format=json`.
/// The CLI output maps controller names to this structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ControllerDetails {
    #[serde(rename = "details", deserialize_with = "null_as_default")]
    pub provider_details: ProviderDetails,

    #[serde(deserialize_with = "null_as_default")]
    pub current_model: String,

    #[serde(deserialize_with = "null_as_default")]
    pub models: HashMap<String, ModelSummary>,

    #[serde(deserialize_with = "null_as_default")]
    pub account: Account,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProviderDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,

    #[serde(deserialize_with = "null_as_default")]
    pub api_endpoints: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub cloud: String,

    #[serde(deserialize_with = "null_as_default")]
    pub region: String,

    #[serde(deserialize_with = "null_as_default")]
    pub agent_version: String,

    #[serde(deserialize_with = "null_as_default")]
    pub agent_git_commit: String,

    #[serde(deserialize_with = "null_as_default")]
    pub controller_model_version: String,

    #[serde(deserialize_with = "null_as_default")]
    pub mongo_version: String,

    #[serde(deserialize_with = "null_as_default")]
    pub ca_fingerprint: String,

    #[serde(deserialize_with = "null_as_default")]
    pub ca_cert: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ModelSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,

    #[serde(deserialize_with = "null_as_default")]
    pub unit_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_as_default")]
    pub user: String,

    #[serde(deserialize_with = "null_as_default")]
    pub password: String,

    #[serde(deserialize_with = "null_as_default")]
    pub access: String,
}

/// The CLI emits `null` for fields it has no value for; those decode to the zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
