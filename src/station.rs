use crate::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,

    pub url: String,

    pub is_free: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_available_time: Option<String>,

    // Explicit rank, lower first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Free,
    Toll,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Free => "免费",
            Category::Toll => "收费",
        }
    }
}

impl Station {
    pub fn category(&self) -> Category {
        if self.is_free {
            Category::Free
        } else {
            Category::Toll
        }
    }

    /// The url without its query string, i.e. everything up to the first `?`.
    pub fn clean_url(&self) -> &str {
        clean_url(&self.url)
    }

    // NOTE: Empty strings count as absent, the page shows a dash for both.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn last_available_time(&self) -> Option<&str> {
        non_empty(&self.last_available_time)
    }
}

pub fn clean_url(url: &str) -> &str {
    match url.find('?') {
        Some(index) => &url[..index],
        None => url,
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
