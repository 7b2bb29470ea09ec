#![warn(clippy::pedantic)]

use rhm_cli::commands::handle_command;
use rhm_cli::config::{HOST_ENV, TOKEN_ENV};
use rhm_cli::state::{State, StateOptions};
use rhm_cli::{utils, CLI};

use clap::Parser;

#[tokio::main]
async fn main() {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = State::new(StateOptions {
        override_host: std::env::var(HOST_ENV).ok(),
        override_token: std::env::var(TOKEN_ENV).ok(),
    });

    let result = match state {
        Ok(state) => handle_command(cli.commands, state).await,
        Err(error) => Err(error),
    };

    if let Err(error) = result {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}
