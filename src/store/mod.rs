pub mod file;
pub mod user;
pub mod utils;

use anyhow::Result;
use async_trait::async_trait;

use self::user::UserData;

/// Persisted session data used to talk to the management API.
#[async_trait]
pub trait Storer: std::fmt::Debug + Send + Sync {
    async fn read_user_data(&self) -> Result<UserData>;
    async fn write_user_data(&self, data: &UserData) -> Result<()>;
}
