mod cmd;
mod logging;
mod script;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gleb", version, about = "Runtime driver for gleblang-emitted scripts")]
struct Cli {
    /// Stderr log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Execute the emitted demo script against stdout
    Run,

    /// Print version and platform diagnostics
    Doctor,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    match cli.command {
        Commands::Run => cmd::run::run(),
        Commands::Doctor => cmd::doctor::run(),
    }
}
