use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::persist::wide_integer;

/// Configuration of the networks available to a test runner.
///
/// Instances obtained from a [`crate::ConfigProvider`] are validated: the
/// default network is one of [`NetworkConfig::networks`] and every fork URL
/// is a valid absolute URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// Name of the network profile that is active by default
    pub default_network_name: String,
    /// Network profiles, in the order in which they were declared
    pub networks: IndexMap<String, NetworkProfile>,
}

impl NetworkConfig {
    /// Returns the name and profile of the default network, if it exists.
    pub fn default_network(&self) -> Option<(&str, &NetworkProfile)> {
        self.networks
            .get_key_value(&self.default_network_name)
            .map(|(name, profile)| (name.as_str(), profile))
    }

    /// Returns the profile with the provided name, if it exists.
    pub fn network(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Returns the names of all networks, in declaration order.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }
}

/// Configuration of a single network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// Price per unit of gas, in wei
    #[serde(serialize_with = "wide_integer::serialize")]
    pub gas_price_wei: u128,
    /// Base fee of the first block when simulating a fee market
    #[serde(serialize_with = "wide_integer::serialize")]
    pub initial_base_fee_per_gas: u128,
    /// Whether a failed transaction is reported as an error
    pub throw_on_transaction_failures: bool,
    /// Whether a failed call is reported as an error
    pub throw_on_call_failures: bool,
    /// Present when the network simulates a fork of a live chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forking: Option<ForkSpec>,
}

impl NetworkProfile {
    /// Whether the profile simulates a forked chain.
    pub fn is_fork(&self) -> bool {
        self.forking.is_some()
    }
}

/// Configuration for forking a blockchain at a fixed height.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkSpec {
    /// JSON-RPC endpoint of the forked chain, as written
    pub url: String,
    /// Block at which the fork's state is pinned
    pub block_number: u64,
    /// Extra headers sent with every request to `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<BTreeMap<String, String>>,
}
