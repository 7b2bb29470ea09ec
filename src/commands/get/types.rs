use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Project {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "AuthorEmail")]
    pub author_email: String,
    #[serde(rename = "GUID")]
    pub guid: String,
    #[serde(rename = "Type")]
    pub type_: String,
    // the API sends `null` for projects without apps
    #[serde(rename = "Apps")]
    pub apps: Option<Vec<App>>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct App {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "GUID")]
    pub guid: String,
}

impl Project {
    pub fn apps(&self) -> &[App] {
        self.apps.as_deref().unwrap_or_default()
    }
}
