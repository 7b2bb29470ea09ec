pub mod project;
pub mod types;
mod util;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "project")]
    Project(project::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Get a resource from the management API")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Project(options) => project::handle(options, state).await,
    }
}
