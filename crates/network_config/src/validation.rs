use url::{Host, Url};

use crate::{
    ConfigError, ForkSpec, NetworkConfig, NetworkProfile,
    persist::{FileInteger, ForkSpecFile, NetworkConfigFile, NetworkProfileFile},
};

/// Largest integer that round-trips through every persisted format. TOML
/// integers are signed 64-bit.
pub(crate) const MAX_PERSISTED_INTEGER: u128 = i64::MAX as u128;

/// Converts a parsed file into a validated [`NetworkConfig`].
///
/// Checks run in this order, stopping at the first failure: the default
/// network name, numeric ranges of each network in declaration order, then
/// fork URLs of each network in declaration order.
pub(crate) fn from_file(file: NetworkConfigFile) -> Result<NetworkConfig, ConfigError> {
    ensure_default_network(&file.default_network_name, file.networks.keys())?;

    let networks = file
        .networks
        .into_iter()
        .map(|(name, profile)| {
            let profile = profile_from_file(&name, profile)?;
            Ok((name, profile))
        })
        .collect::<Result<_, ConfigError>>()?;

    let config = NetworkConfig {
        default_network_name: file.default_network_name,
        networks,
    };

    validate_fork_urls(&config)?;

    Ok(config)
}

/// Validates the invariants of a typed [`NetworkConfig`], in the same order
/// as [`from_file`].
pub(crate) fn validate(config: &NetworkConfig) -> Result<(), ConfigError> {
    ensure_default_network(&config.default_network_name, config.networks.keys())?;

    for (name, profile) in &config.networks {
        within_persisted_range(name, "gasPriceWei", profile.gas_price_wei)?;
        within_persisted_range(
            name,
            "initialBaseFeePerGas",
            profile.initial_base_fee_per_gas,
        )?;
        if let Some(fork) = &profile.forking {
            within_persisted_range(name, "forking.blockNumber", fork.block_number.into())?;
        }
    }

    validate_fork_urls(config)
}

fn validate_fork_urls(config: &NetworkConfig) -> Result<(), ConfigError> {
    for (name, profile) in &config.networks {
        if let Some(fork) = &profile.forking {
            let url = parse_fork_url(name, fork)?;
            if url.scheme() == "http" && !is_local_host(url.host()) {
                log::warn!(
                    "Network '{name}' forks from '{}' over unencrypted HTTP",
                    fork.url
                );
            }
        }
    }

    log::debug!(
        "Validated {} network(s), default network: '{}'",
        config.networks.len(),
        config.default_network_name
    );

    Ok(())
}

/// Parses the URL of a fork. It must be absolute and name a host.
pub(crate) fn parse_fork_url(network: &str, fork: &ForkSpec) -> Result<Url, ConfigError> {
    let invalid = |source| ConfigError::InvalidForkUrl {
        network: network.to_owned(),
        url: fork.url.clone(),
        source,
    };

    let url = Url::parse(&fork.url).map_err(invalid)?;
    if url.has_host() {
        Ok(url)
    } else {
        Err(invalid(url::ParseError::EmptyHost))
    }
}

fn ensure_default_network<'a>(
    default_network_name: &str,
    names: impl Iterator<Item = &'a String> + Clone,
) -> Result<(), ConfigError> {
    if names.clone().any(|name| name == default_network_name) {
        Ok(())
    } else {
        Err(ConfigError::UnknownDefaultNetwork {
            name: default_network_name.to_owned(),
            available: names.cloned().collect(),
        })
    }
}

fn profile_from_file(
    network: &str,
    profile: NetworkProfileFile,
) -> Result<NetworkProfile, ConfigError> {
    let NetworkProfileFile {
        gas_price_wei,
        initial_base_fee_per_gas,
        forking,
        throw_on_transaction_failures,
        throw_on_call_failures,
    } = profile;

    let gas_price_wei = non_negative(network, "gasPriceWei", gas_price_wei)?;
    let initial_base_fee_per_gas =
        non_negative(network, "initialBaseFeePerGas", initial_base_fee_per_gas)?;
    let forking = forking
        .map(|fork| fork_from_file(network, fork))
        .transpose()?;

    Ok(NetworkProfile {
        gas_price_wei,
        initial_base_fee_per_gas,
        throw_on_transaction_failures,
        throw_on_call_failures,
        forking,
    })
}

fn fork_from_file(network: &str, fork: ForkSpecFile) -> Result<ForkSpec, ConfigError> {
    let ForkSpecFile {
        url,
        block_number,
        http_headers,
    } = fork;

    Ok(ForkSpec {
        url,
        block_number: non_negative(network, "forking.blockNumber", block_number)?,
        http_headers,
    })
}

fn non_negative<T: TryFrom<u128>>(
    network: &str,
    field: &'static str,
    FileInteger(value): FileInteger,
) -> Result<T, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeValue {
            network: network.to_owned(),
            field,
            value,
        });
    }

    let value = within_persisted_range(network, field, value.unsigned_abs())?;
    T::try_from(value).map_err(|_error| ConfigError::ValueOutOfRange {
        network: network.to_owned(),
        field,
        value,
    })
}

fn within_persisted_range(
    network: &str,
    field: &'static str,
    value: u128,
) -> Result<u128, ConfigError> {
    if value > MAX_PERSISTED_INTEGER {
        Err(ConfigError::ValueOutOfRange {
            network: network.to_owned(),
            field,
            value,
        })
    } else {
        Ok(value)
    }
}

fn is_local_host(host: Option<Host<&str>>) -> bool {
    match host {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(address)) => address.is_loopback(),
        Some(Host::Ipv6(address)) => address.is_loopback(),
        None => false,
    }
}
