mod command;
mod logger;

use clap::Parser;

use crate::command::Command;

#[derive(Parser)]
#[clap(name = "network-config", version, about = "Validates and renders network configurations")]
struct CliArgs {
    /// Enables verbose mode
    #[clap(short, long, takes_value = false)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logger::init_logger(args.verbose)?;

    let stdout = std::io::stdout();
    command::run(args.command, &mut stdout.lock())
}
