use std::{collections::BTreeMap, path::PathBuf};

use url::Url;

use crate::{ConfigError, ConfigProvider, NetworkProfile, defaults, validation};

/// Configuration of a forked network as consumed by a test runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForkRunnerConfig {
    /// JSON-RPC endpoint of the forked chain
    pub url: Url,
    /// Block at which the fork's state is pinned
    pub block_number: u64,
    /// Directory for caching RPC responses
    pub cache_dir: PathBuf,
    /// Extra headers sent with every RPC request
    pub http_headers: Option<BTreeMap<String, String>>,
}

/// The settings a test runner derives from a network profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Name of the network profile these settings were derived from
    pub network_name: String,
    /// Whether to return an `Err` when `eth_call` fails
    pub bail_on_call_failure: bool,
    /// Whether to return an `Err` when a `eth_sendTransaction` fails
    pub bail_on_transaction_failure: bool,
    /// Gas price used for transactions that don't specify one
    pub min_gas_price: u128,
    /// Base fee of the first block
    pub initial_base_fee_per_gas: Option<u128>,
    /// Present when the network is a fork of a live chain
    pub fork: Option<ForkRunnerConfig>,
}

impl RunnerConfig {
    /// Constructs the runner settings for the provider's default network.
    pub fn for_default_network(provider: &ConfigProvider) -> Result<Self, ConfigError> {
        let (name, profile) = provider.default_network();
        Self::from_profile(name, profile)
    }

    /// Constructs the runner settings for the provided network profile.
    pub fn from_profile(
        network_name: &str,
        profile: &NetworkProfile,
    ) -> Result<Self, ConfigError> {
        let fork = profile
            .forking
            .as_ref()
            .map(|fork| -> Result<ForkRunnerConfig, ConfigError> {
                Ok(ForkRunnerConfig {
                    url: validation::parse_fork_url(network_name, fork)?,
                    block_number: fork.block_number,
                    cache_dir: PathBuf::from(defaults::CACHE_DIR),
                    http_headers: fork.http_headers.clone(),
                })
            })
            .transpose()?;

        Ok(Self {
            network_name: network_name.to_owned(),
            bail_on_call_failure: profile.throw_on_call_failures,
            bail_on_transaction_failure: profile.throw_on_transaction_failures,
            min_gas_price: profile.gas_price_wei,
            initial_base_fee_per_gas: Some(profile.initial_base_fee_per_gas),
            fork,
        })
    }

    /// Overrides the directory used for caching RPC responses of the fork.
    pub fn with_cache_dir(mut self, cache_dir: PathBuf) -> Self {
        if let Some(fork) = &mut self.fork {
            fork.cache_dir = cache_dir;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ForkSpec;

    #[test]
    fn flags_map_to_bail_settings() {
        let profile = NetworkProfile {
            gas_price_wei: 8_000_000_000,
            initial_base_fee_per_gas: 7,
            throw_on_transaction_failures: true,
            throw_on_call_failures: false,
            forking: None,
        };

        let config = RunnerConfig::from_profile("localhost", &profile).unwrap();

        assert_eq!(config.network_name, "localhost");
        assert!(config.bail_on_transaction_failure);
        assert!(!config.bail_on_call_failure);
        assert_eq!(config.min_gas_price, 8_000_000_000);
        assert_eq!(config.initial_base_fee_per_gas, Some(7));
        assert_eq!(config.fork, None);
    }

    #[test]
    fn bundled_default_network() {
        let provider = ConfigProvider::bundled().unwrap();
        let config = RunnerConfig::for_default_network(&provider).unwrap();

        assert_eq!(config.network_name, "hardhat");
        assert!(config.bail_on_call_failure && config.bail_on_transaction_failure);
        assert_eq!(config.initial_base_fee_per_gas, Some(0));
        assert_eq!(config.fork.map(|fork| fork.block_number), Some(7_300_000));
    }

    #[test]
    fn fork_uses_default_cache_dir_unless_overridden() {
        let profile = NetworkProfile {
            gas_price_wei: 1,
            initial_base_fee_per_gas: 0,
            throw_on_transaction_failures: true,
            throw_on_call_failures: true,
            forking: Some(ForkSpec {
                url: "https://api.avax.network/ext/bc/C/rpc".to_owned(),
                block_number: 7_300_000,
                http_headers: None,
            }),
        };

        let config = RunnerConfig::from_profile("hardhat", &profile).unwrap();
        let fork = config.fork.as_ref().unwrap();
        assert_eq!(fork.cache_dir, PathBuf::from(defaults::CACHE_DIR));
        assert_eq!(fork.url.host_str(), Some("api.avax.network"));

        let config = config.with_cache_dir(PathBuf::from("/tmp/rpc"));
        assert_eq!(
            config.fork.map(|fork| fork.cache_dir),
            Some(PathBuf::from("/tmp/rpc"))
        );
    }
}
