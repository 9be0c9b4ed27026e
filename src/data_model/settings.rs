use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub url: Option<String>,
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
    pub json: bool,
}

impl AppSettings {
    /// A destination URL on the command line selects one-shot mode.
    pub fn one_shot(&self) -> bool {
        self.url.is_some()
    }
}
