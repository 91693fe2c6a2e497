use network_config::{
    ConfigError, ConfigFormat, ConfigProvider, ForkSpec, NetworkConfig, NetworkProfile,
};

const AVALANCHE_JSON: &str = include_str!("fixtures/avalanche.json");
const NETWORKS_TOML: &str = include_str!("fixtures/networks.toml");

fn reload(provider: &ConfigProvider, format: ConfigFormat) -> ConfigProvider {
    let serialized = provider.config().to_string_in(format).unwrap();
    ConfigProvider::from_str_in(format, &serialized).unwrap()
}

fn single_network(gas_price_wei: u128, block_number: u64) -> NetworkConfig {
    NetworkConfig {
        default_network_name: "hardhat".to_owned(),
        networks: [(
            "hardhat".to_owned(),
            NetworkProfile {
                gas_price_wei,
                initial_base_fee_per_gas: 0,
                throw_on_transaction_failures: true,
                throw_on_call_failures: true,
                forking: Some(ForkSpec {
                    url: "https://api.avax.network/ext/bc/C/rpc".to_owned(),
                    block_number,
                    http_headers: None,
                }),
            },
        )]
        .into_iter()
        .collect(),
    }
}

#[test]
fn json_round_trip_is_identical() {
    for provider in [
        ConfigProvider::from_json_str(AVALANCHE_JSON).unwrap(),
        ConfigProvider::from_toml_str(NETWORKS_TOML).unwrap(),
    ] {
        let reloaded = reload(&provider, ConfigFormat::Json);
        assert_eq!(reloaded.config(), provider.config());

        // Idempotent
        assert_eq!(reload(&reloaded, ConfigFormat::Json).config(), provider.config());
    }
}

#[test]
fn toml_round_trip_is_identical() {
    for provider in [
        ConfigProvider::from_json_str(AVALANCHE_JSON).unwrap(),
        ConfigProvider::from_toml_str(NETWORKS_TOML).unwrap(),
    ] {
        let reloaded = reload(&provider, ConfigFormat::Toml);
        assert_eq!(reloaded.config(), provider.config());
    }
}

#[test]
fn json_uses_persisted_field_names() {
    let provider = ConfigProvider::from_json_str(AVALANCHE_JSON).unwrap();

    let serialized: serde_json::Value =
        serde_json::from_str(&provider.config().to_json_string().unwrap()).unwrap();
    let expected: serde_json::Value = serde_json::from_str(AVALANCHE_JSON).unwrap();

    assert_eq!(serialized, expected);
}

#[test]
fn absent_optional_fields_are_omitted() {
    let provider = ConfigProvider::from_toml_str(NETWORKS_TOML).unwrap();
    let localhost = provider.network("localhost").unwrap();

    let serialized = localhost.to_string_in(ConfigFormat::Json).unwrap();
    assert!(!serialized.contains("forking"));

    let serialized = provider.config().to_json_string().unwrap();
    assert_eq!(serialized.matches("httpHeaders").count(), 1);
}

#[test]
fn largest_accepted_values_round_trip() {
    let largest = i64::MAX.unsigned_abs();
    let provider = ConfigProvider::new(single_network(largest.into(), largest)).unwrap();

    for format in [ConfigFormat::Json, ConfigFormat::Toml] {
        assert_eq!(reload(&provider, format).config(), provider.config());
    }
}

#[test]
fn values_that_cannot_be_persisted_are_rejected() {
    let beyond = i64::MAX.unsigned_abs() + 1;

    assert!(matches!(
        ConfigProvider::new(single_network(u128::from(u64::MAX) + 1, 1)),
        Err(ConfigError::ValueOutOfRange {
            field: "gasPriceWei",
            ..
        })
    ));
    assert!(matches!(
        ConfigProvider::new(single_network(u128::from(beyond), 1)),
        Err(ConfigError::ValueOutOfRange {
            field: "gasPriceWei",
            ..
        })
    ));
    assert!(matches!(
        ConfigProvider::new(single_network(1, beyond)),
        Err(ConfigError::ValueOutOfRange {
            field: "forking.blockNumber",
            ..
        })
    ));
}
