//! Persisted form of a [`NetworkConfig`].
//!
//! Files are read into a raw layer whose integers are wide and signed, so
//! that out-of-range values reach validation instead of failing as a generic
//! parse error.

use core::fmt;
use std::{collections::BTreeMap, path::Path};

use indexmap::{IndexMap, map::Entry};
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};

use crate::{ConfigError, NetworkConfig, NetworkProfile};

/// On-disk formats of a network configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl ConfigFormat {
    /// Determines the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(extension) if extension.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub(crate) fn parse(self, contents: &str) -> Result<NetworkConfigFile, ConfigError> {
        match self {
            Self::Json => serde_json::from_str(contents).map_err(ConfigError::Json),
            Self::Toml => toml::from_str(contents).map_err(ConfigError::from),
        }
    }
}

impl NetworkConfig {
    /// Serializes the configuration to its persisted, pretty-printed JSON
    /// form.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::JsonSerialize)
    }

    /// Serializes the configuration to its persisted TOML form.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::from)
    }

    /// Serializes the configuration in the provided format.
    pub fn to_string_in(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Json => self.to_json_string(),
            ConfigFormat::Toml => self.to_toml_string(),
        }
    }
}

impl NetworkProfile {
    /// Serializes the profile in the provided format.
    pub fn to_string_in(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).map_err(ConfigError::JsonSerialize)
            }
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(ConfigError::from),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct NetworkConfigFile {
    #[serde(alias = "defaultNetwork")]
    pub default_network_name: String,
    #[serde(deserialize_with = "unique_networks")]
    pub networks: IndexMap<String, NetworkProfileFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct NetworkProfileFile {
    #[serde(alias = "gasPrice")]
    pub gas_price_wei: FileInteger,
    pub initial_base_fee_per_gas: FileInteger,
    #[serde(default)]
    pub forking: Option<ForkSpecFile>,
    pub throw_on_transaction_failures: bool,
    pub throw_on_call_failures: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct ForkSpecFile {
    pub url: String,
    pub block_number: FileInteger,
    #[serde(default)]
    pub http_headers: Option<BTreeMap<String, String>>,
}

/// An integer as written in a file, before range checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FileInteger(pub i128);

impl<'de> Deserialize<'de> for FileInteger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FileIntegerVisitor;

        impl Visitor<'_> for FileIntegerVisitor {
            type Value = FileInteger;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an integer")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(FileInteger(value.into()))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(FileInteger(value.into()))
            }

            fn visit_i128<E: de::Error>(self, value: i128) -> Result<Self::Value, E> {
                Ok(FileInteger(value))
            }

            fn visit_u128<E: de::Error>(self, value: u128) -> Result<Self::Value, E> {
                i128::try_from(value)
                    .map(FileInteger)
                    .map_err(|_error| E::custom(format!("integer {value} is too large")))
            }
        }

        deserializer.deserialize_any(FileIntegerVisitor)
    }
}

/// Deserializes the `networks` table, rejecting repeated names instead of
/// keeping the last one.
fn unique_networks<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, NetworkProfileFile>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NetworksVisitor;

    impl<'de> Visitor<'de> for NetworksVisitor {
        type Value = IndexMap<String, NetworkProfileFile>;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map from network name to network profile")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut networks = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(name) = access.next_key::<String>()? {
                match networks.entry(name) {
                    Entry::Occupied(entry) => {
                        return Err(de::Error::custom(format!(
                            "duplicate network name '{}'",
                            entry.key()
                        )));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(access.next_value()?);
                    }
                }
            }

            Ok(networks)
        }
    }

    deserializer.deserialize_map(NetworksVisitor)
}

/// Serializes `u128` values as the narrowest integer that holds them, as
/// some formats cannot represent 128-bit integers.
pub(crate) mod wide_integer {
    use serde::Serializer;

    pub fn serialize<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match u64::try_from(*value) {
            Ok(value) => serializer.serialize_u64(value),
            Err(_) => serializer.serialize_u128(*value),
        }
    }
}
