mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::Cli;
use context::Context;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = Context::from_cli(&cli)
        .and_then(|ctx| commands::fetch::run(&ctx, &cli.project, &cli.build));

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
