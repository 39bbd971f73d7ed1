use clap::{Parser, Subcommand};

mod cmd;

use cmd::bands::BandsCommand;
use cmd::calculate::CalculateCommand;

/// UK PAYE take-home pay calculator
#[derive(Parser, Debug)]
#[command(name = "payec", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate income tax, National Insurance and take-home pay
    Calculate(CalculateCommand),
    /// Show the band thresholds for the supported tax years
    Bands(BandsCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calculate(cmd) => cmd.exec(),
        Command::Bands(cmd) => cmd.exec(),
    }
}
