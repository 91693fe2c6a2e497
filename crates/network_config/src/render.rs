//! Rendering of a [`NetworkConfig`] as a hardhat configuration file.

use core::fmt::{self, Write};

use crate::{ForkSpec, NetworkConfig, NetworkProfile, defaults::GENERATED_FILE_HEADER};

const INDENT: &str = "    ";

/// Renders the configuration as a CommonJS hardhat configuration file.
pub fn render_hardhat_config(config: &NetworkConfig) -> String {
    let mut output = String::new();
    write_hardhat_config(&mut output, config).expect("Writing to a `String` cannot fail");

    output
}

/// Writes the configuration as a CommonJS hardhat configuration file.
pub fn write_hardhat_config<W: Write>(writer: &mut W, config: &NetworkConfig) -> fmt::Result {
    writeln!(writer, "{GENERATED_FILE_HEADER}")?;
    writeln!(writer, "module.exports = {{")?;
    writeln!(
        writer,
        "{INDENT}defaultNetwork: {},",
        string_literal(&config.default_network_name)
    )?;
    writeln!(writer, "{INDENT}networks: {{")?;
    for (name, profile) in &config.networks {
        write_profile(writer, name, profile)?;
    }
    writeln!(writer, "{INDENT}}}")?;
    writeln!(writer, "}}")
}

fn write_profile<W: Write>(writer: &mut W, name: &str, profile: &NetworkProfile) -> fmt::Result {
    let indent = INDENT.repeat(2);
    let field_indent = INDENT.repeat(3);

    writeln!(writer, "{indent}{}: {{", object_key(name))?;
    writeln!(writer, "{field_indent}gasPrice: {},", profile.gas_price_wei)?;
    writeln!(
        writer,
        "{field_indent}initialBaseFeePerGas: {},",
        profile.initial_base_fee_per_gas
    )?;
    if let Some(fork) = &profile.forking {
        write_fork(writer, fork)?;
    }
    writeln!(
        writer,
        "{field_indent}throwOnTransactionFailures: {},",
        profile.throw_on_transaction_failures
    )?;
    writeln!(
        writer,
        "{field_indent}throwOnCallFailures: {}",
        profile.throw_on_call_failures
    )?;
    writeln!(writer, "{indent}}},")
}

fn write_fork<W: Write>(writer: &mut W, fork: &ForkSpec) -> fmt::Result {
    let indent = INDENT.repeat(3);
    let field_indent = INDENT.repeat(4);

    writeln!(writer, "{indent}forking: {{")?;
    writeln!(writer, "{field_indent}url: {},", string_literal(&fork.url))?;
    match &fork.http_headers {
        Some(headers) => {
            writeln!(writer, "{field_indent}blockNumber: {},", fork.block_number)?;
            writeln!(writer, "{field_indent}httpHeaders: {{")?;
            for (name, value) in headers {
                writeln!(
                    writer,
                    "{field_indent}{INDENT}{}: {},",
                    string_literal(name),
                    string_literal(value)
                )?;
            }
            writeln!(writer, "{field_indent}}}")?;
        }
        None => writeln!(writer, "{field_indent}blockNumber: {}", fork.block_number)?,
    }
    writeln!(writer, "{indent}}},")
}

/// JSON string literals are valid JavaScript string literals.
fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

fn object_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        name.to_owned()
    } else {
        string_literal(name)
    }
}
