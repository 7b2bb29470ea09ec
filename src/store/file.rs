use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::user::UserData;
use super::utils::home_path;
use super::Storer;
use crate::config::USER_STORE_PATH;

/// Session data kept as JSON on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_home() -> Result<Self> {
        Ok(Self::new(home_path(USER_STORE_PATH)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Storer for FileStore {
    async fn read_user_data(&self) -> Result<UserData> {
        // nobody has logged in yet, reading must not create the file
        if fs::metadata(&self.path).await.is_err() {
            log::debug!("No session data at {}", self.path.display());

            return Ok(UserData::default());
        }

        let mut file = File::open(&self.path)
            .await
            .context("Error opening session file")?;

        let mut buffer = String::new();
        file.read_to_string(&mut buffer)
            .await
            .context("Error reading session file")?;

        serde_json::from_str(&buffer).context("Failed to deserialize session data")
    }

    async fn write_user_data(&self, data: &UserData) -> Result<()> {
        fs::create_dir_all(self.path.parent().context("Failed to get store directory")?)
            .await
            .context("Failed to create store directory")?;

        let mut file = File::create(&self.path)
            .await
            .context("Error creating session file")?;

        file.write_all(
            serde_json::to_string(data)
                .context("Failed to serialize session data")?
                .as_bytes(),
        )
        .await
        .context("Failed to write session file")?;

        log::debug!("Saved session data to {}", self.path.display());

        Ok(())
    }
}
