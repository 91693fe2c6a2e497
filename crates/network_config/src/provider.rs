use std::{fs, path::Path, sync::Arc};

use crate::{
    ConfigError, NetworkConfig, NetworkProfile, defaults, persist::ConfigFormat, validation,
};

/// Provides a validated, immutable [`NetworkConfig`].
///
/// Constructed once at startup. Cloning is cheap and clones share the same
/// record, so a provider can be handed to other threads freely.
#[derive(Clone, Debug)]
pub struct ConfigProvider {
    config: Arc<NetworkConfig>,
}

impl ConfigProvider {
    /// Validates the provided configuration.
    pub fn new(config: NetworkConfig) -> Result<Self, ConfigError> {
        validation::validate(&config)?;

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Loads a configuration from a JSON document.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Self::from_str_in(ConfigFormat::Json, contents)
    }

    /// Loads a configuration from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::from_str_in(ConfigFormat::Toml, contents)
    }

    /// Loads a configuration from a document in the provided format.
    pub fn from_str_in(format: ConfigFormat, contents: &str) -> Result<Self, ConfigError> {
        let file = format.parse(contents)?;
        let config = validation::from_file(file)?;

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Loads a configuration from a file. The format is determined by the
    /// file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        log::debug!(
            "Loading network configuration from '{}' as {format:?}",
            path.display()
        );

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_str_in(format, &contents)
    }

    /// Loads the configuration that ships with this crate: a fork of the
    /// Avalanche C-Chain pinned at a fixed block.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json_str(defaults::BUNDLED_CONFIG)
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Returns a shared handle to the validated configuration.
    pub fn shared(&self) -> Arc<NetworkConfig> {
        Arc::clone(&self.config)
    }

    /// Returns the name and profile of the default network.
    pub fn default_network(&self) -> (&str, &NetworkProfile) {
        let name = self.config.default_network_name.as_str();
        let profile = self
            .config
            .networks
            .get(name)
            .expect("Validated configurations contain the default network");

        (name, profile)
    }

    /// Returns the profile with the provided name, if it exists.
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.config.network(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        let provider = ConfigProvider::bundled().unwrap();
        let (name, profile) = provider.default_network();

        assert_eq!(name, "hardhat");
        assert_eq!(profile.gas_price_wei, 225_000_000_000);
        assert_eq!(
            profile.forking.as_ref().map(|fork| fork.block_number),
            Some(7_300_000)
        );
    }

    #[test]
    fn clones_share_the_record() {
        let provider = ConfigProvider::bundled().unwrap();
        let clone = provider.clone();

        assert!(Arc::ptr_eq(&provider.shared(), &clone.shared()));
    }

    #[test]
    fn missing_file() {
        let result = ConfigProvider::from_path(Path::new("does/not/exist.json"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
