use super::properties::Properties;
use serde::{Deserialize, Deserializer, Serialize};

/// Declarative description of a deployment: instance groups plus plan-wide properties.
///
/// Fields serialize in declaration order. Optional instance group fields are
/// left out of the output while they hold their empty value; `properties` is
/// always written. A `null` decodes the same as a missing field, except for
/// job properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_groups: Vec<InstanceGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstanceGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vm_type: String,
    /// Empty means no persistent disk is attached.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub persistent_disk_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub networks: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub azs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instances: i64,
    /// Free-form tag such as `service` or `errand`.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub lifecycle: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release: String,
    /// `None` when the document omits the bag or sets it to `null`.
    #[serde(default)]
    pub properties: Option<Properties>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
