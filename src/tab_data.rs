/// Data structures for the tab strip

use serde::{Deserialize, Serialize};

/// One navigable tab in the strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabModel {
    pub id: String,
    pub title: String,
    pub url: String,
    pub pinned: bool,
}

impl TabModel {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        pinned: bool,
    ) -> TabModel {
        TabModel {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            pinned,
        }
    }
}

/// Stock tab set used when neither the caller nor storage supplies one
pub fn default_tabs() -> Vec<TabModel> {
    vec![
        TabModel::new("tab1", "Dashboard", "/dashboard", false),
        TabModel::new("tab2", "Banking", "/banking", false),
        TabModel::new("tab3", "Telefonie", "/telefonie", false),
        TabModel::new("tab4", "Accounting", "/accounting", false),
        TabModel::new("tab5", "Verkauf", "/verkauf", false),
        TabModel::new("tab6", "Statistik", "/statistik", false),
        TabModel::new("tab7", "Post Office", "/post_office", false),
        TabModel::new("tab8", "Administration", "/administration", false),
        TabModel::new("tab9", "Help", "/help", false),
    ]
}
