//! easicam-config - configuration editor for the EasiCamera launcher

use clap::Parser;

use easicam::cli::{Cli, Commands};
use easicam::commands;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => commands::scan::run(&cli.config, args),
        Commands::Select(args) => commands::select::run(&cli.config, args),
        Commands::Set(args) => commands::set::run(&cli.config, args),
        Commands::Show => commands::show::run(&cli.config),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
