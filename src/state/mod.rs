pub mod http;

use anyhow::Result;

use self::http::HttpClient;
use crate::store::file::FileStore;
use crate::store::user::UserData;
use crate::store::Storer;

#[derive(Debug)]
pub struct State {
    pub store: Box<dyn Storer>,
    pub http: HttpClient,
    overrides: StateOptions,
}

/// Values that take precedence over the stored session, never persisted.
#[derive(Debug, Default, Clone)]
pub struct StateOptions {
    pub override_host: Option<String>,
    pub override_token: Option<String>,
}

impl State {
    pub fn new(options: StateOptions) -> Result<Self> {
        let store = FileStore::from_home()?;

        Ok(Self::with_parts(store, HttpClient::new()?).with_overrides(options))
    }

    pub fn with_parts<S>(store: S, http: HttpClient) -> Self
    where
        S: Storer + 'static,
    {
        Self {
            store: Box::new(store),
            http,
            overrides: StateOptions::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: StateOptions) -> Self {
        self.overrides = overrides;
        self
    }

    /// Reads the stored session with any overrides applied on top.
    pub async fn session(&self) -> Result<UserData> {
        let mut data = self.store.read_user_data().await?;

        if let Some(ref host) = self.overrides.override_host {
            log::debug!("Using host override {host}");
            data.host = host.clone();
        }

        if let Some(ref token) = self.overrides.override_token {
            data.auth = token.clone();
        }

        Ok(data)
    }
}
