pub mod activate;
pub mod get;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Get(get::Options),
    #[clap(name = "use")]
    Use(activate::Options),
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Get(options) => get::handle(options, state).await,
        Commands::Use(options) => activate::handle(options, state).await,
    }
}
