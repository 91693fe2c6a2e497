use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use network_config::{ConfigFormat, ConfigProvider, NetworkProfile, render_hardhat_config};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Toml => ConfigFormat::Toml,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Loads and validates a network configuration file
    Check {
        #[clap(value_parser)]
        path: PathBuf,
    },
    /// Prints a network configuration, or one of its networks
    Show {
        #[clap(value_parser)]
        path: PathBuf,
        /// Name of the network to print
        #[clap(long)]
        network: Option<String>,
        #[clap(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Renders a network configuration as a hardhat configuration file
    Render {
        #[clap(value_parser)]
        path: PathBuf,
        /// File to write to, instead of stdout
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },
    /// Prints the bundled network configuration
    Bundled {
        #[clap(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

pub fn run(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Check { path } => {
            let provider = load(&path)?;
            let (name, profile) = provider.default_network();

            writeln!(
                out,
                "{}: {} network(s), default network '{name}' ({})",
                path.display(),
                provider.config().networks.len(),
                describe(profile)
            )?;
        }
        Command::Show {
            path,
            network,
            format,
        } => {
            let provider = load(&path)?;
            let serialized = match network {
                Some(name) => provider
                    .network(&name)
                    .with_context(|| format!("Network '{name}' is not configured"))?
                    .to_string_in(format.into())?,
                None => provider.config().to_string_in(format.into())?,
            };

            writeln!(out, "{}", serialized.trim_end())?;
        }
        Command::Render { path, output } => {
            let provider = load(&path)?;
            let rendered = render_hardhat_config(provider.config());

            match output {
                Some(output) => {
                    fs::write(&output, rendered)
                        .with_context(|| format!("Failed to write '{}'", output.display()))?;
                    log::info!("Wrote {}", output.display());
                }
                None => write!(out, "{rendered}")?,
            }
        }
        Command::Bundled { format } => {
            let provider = ConfigProvider::bundled()?;
            let serialized = provider.config().to_string_in(format.into())?;

            writeln!(out, "{}", serialized.trim_end())?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<ConfigProvider> {
    ConfigProvider::from_path(path)
        .with_context(|| format!("Invalid network configuration '{}'", path.display()))
}

fn describe(profile: &NetworkProfile) -> String {
    match &profile.forking {
        Some(fork) => format!("fork of {} at block {}", fork.url, fork.block_number),
        None => "no fork".to_owned(),
    }
}
