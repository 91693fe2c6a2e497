use std::path::PathBuf;

/// An error that occurs while loading, validating or writing a network
/// configuration.
///
/// Loading never partially succeeds: either the whole record is valid or one
/// of these is returned and the consuming process must abort startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read network configuration from '{}'", path.display())]
    Io {
        /// Path of the file
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
    /// The file extension does not map to a known format.
    #[error(
        "Unsupported network configuration format for '{}'. Expected a `.json` or `.toml` file",
        path.display()
    )]
    UnsupportedFormat {
        /// Path of the file
        path: PathBuf,
    },
    /// The JSON document is malformed or does not have the expected shape.
    #[error("Invalid JSON network configuration: {0}")]
    Json(#[source] serde_json::Error),
    /// The TOML document is malformed or does not have the expected shape.
    #[error("Invalid TOML network configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// Serializing to JSON failed.
    #[error("Failed to serialize network configuration to JSON: {0}")]
    JsonSerialize(#[source] serde_json::Error),
    /// Serializing to TOML failed.
    #[error("Failed to serialize network configuration to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    /// The default network is not one of the configured networks.
    #[error(
        "Default network '{name}' is not configured. Available networks: [{}]",
        available.join(", ")
    )]
    UnknownDefaultNetwork {
        /// The selected default network
        name: String,
        /// Names of the configured networks
        available: Vec<String>,
    },
    /// A numeric field holds a negative value.
    #[error("Network '{network}': `{field}` must not be negative, but is {value}")]
    NegativeValue {
        /// The network whose profile is invalid
        network: String,
        /// The persisted name of the field
        field: &'static str,
        /// The offending value
        value: i128,
    },
    /// A numeric field is larger than every persisted format can carry.
    #[error(
        "Network '{network}': `{field}` is out of range: {value}. The maximum is {}",
        crate::validation::MAX_PERSISTED_INTEGER
    )]
    ValueOutOfRange {
        /// The network whose profile is invalid
        network: String,
        /// The persisted name of the field
        field: &'static str,
        /// The offending value
        value: u128,
    },
    /// The fork URL is not a valid absolute URL.
    #[error("Network '{network}': invalid forking URL '{url}': {source}")]
    InvalidForkUrl {
        /// The network whose profile is invalid
        network: String,
        /// The URL as written
        url: String,
        /// The underlying error
        #[source]
        source: url::ParseError,
    },
}
