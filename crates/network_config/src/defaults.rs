/// Default directory for caching RPC responses of a forked network.
pub const CACHE_DIR: &str = "./cache";

/// Header written at the top of generated hardhat configuration files.
pub const GENERATED_FILE_HEADER: &str = "\
// autogenerated by network_config
// do not modify the existing settings";

/// The configuration shipped with this crate.
pub const BUNDLED_CONFIG: &str = include_str!("../fixtures/hardhat.json");
