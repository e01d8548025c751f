//! Competitor sites to visit

use serde::{Deserialize, Serialize};

/// One competitor site, identified by display name and landing page URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub url: String,
}

impl Target {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Project management tools tracked when no other list is configured
pub fn default_targets() -> Vec<Target> {
    [
        ("Monday.com", "https://monday.com"),
        ("Atlassian", "https://atlassian.com"),
        ("Notion", "https://notion.com"),
        ("Asana", "https://asana.com"),
        ("Wrike", "https://wrike.com"),
        ("Basecamp", "https://basecamp.com"),
        ("Smartsheet", "https://smartsheet.com"),
        ("Todoist", "https://todoist.com"),
        ("Airtable", "https://airtable.com"),
    ]
    .into_iter()
    .map(|(name, url)| Target::new(name, url))
    .collect()
}
