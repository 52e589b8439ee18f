mod cli;
mod commands;
mod table;

use clap::Parser;
use cli::Cli;
use commands::execute_command;

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }
    execute_command(cli.command, cli.verbose)
}
