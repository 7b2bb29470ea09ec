use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct UserData {
    /// Base url of the management API, e.g. `https://api.example.com`
    #[serde(default)]
    pub host: String,

    /// Session token sent as the auth cookie
    #[serde(default)]
    pub auth: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_project: Option<String>,
}

impl UserData {
    pub fn active_project(&self) -> Option<&str> {
        self.active_project.as_deref().filter(|p| !p.is_empty())
    }
}
