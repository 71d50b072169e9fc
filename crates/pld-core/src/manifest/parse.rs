//! Raw JSON structures of `dependencies.json`.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Go tooling writes nil maps and slices as `null`; treat those as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
pub struct RawManifest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub credentials: HashMap<String, RawCredentials>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plugins: Vec<RawArtifact>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub libraries: Vec<RawArtifact>,
}

#[derive(Debug, Deserialize)]
pub struct RawCredentials {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtifact {
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub repository_url: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Legacy `group:artifact:version` coordinate.
    #[serde(default)]
    pub artifact: Option<String>,
    #[serde(default)]
    pub save_as: Option<String>,
    #[serde(default)]
    pub credentials: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub add_to_local_maven: bool,
    #[serde(default)]
    pub local_maven: Option<RawLocalMaven>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocalMaven {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}
