use anyhow::{ensure, Result};
use clap::Parser;

use crate::state::State;
use crate::store::user::UserData;
use crate::store::Storer;

#[derive(Debug, Parser)]
#[clap(about = "Set the project used when no --project is passed")]
pub struct Options {
    #[clap(name = "project", help = "The project guid")]
    pub project: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    set_active_project(state.store.as_ref(), &options.project).await?;

    log::info!("Switched to project {}", options.project);

    Ok(())
}

pub async fn set_active_project(store: &dyn Storer, project: &str) -> Result<UserData> {
    ensure!(!project.trim().is_empty(), "expected a project guid");

    let mut data = store.read_user_data().await?;
    data.active_project = Some(project.to_string());

    store.write_user_data(&data).await?;

    Ok(data)
}
