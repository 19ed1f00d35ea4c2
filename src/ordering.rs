/// Tab ordering model: the ordered tab sequence and its mutations

use crate::tab_data::TabModel;
use serde::{Deserialize, Deserializer, Serialize};

/// Ordered sequence of tabs. Order defines left-to-right position.
///
/// Invariant: every `id` appears at most once. Construction filters
/// duplicates (first occurrence wins) so the invariant survives corrupt
/// persisted snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TabOrdering {
    tabs: Vec<TabModel>,
}

// Deserialization funnels through `new` so the uniqueness invariant is
// re-established for snapshots we did not write.
impl<'de> Deserialize<'de> for TabOrdering {
    fn deserialize<D>(deserializer: D) -> Result<TabOrdering, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<TabModel>::deserialize(deserializer).map(TabOrdering::new)
    }
}

impl TabOrdering {
    pub fn new(tabs: Vec<TabModel>) -> TabOrdering {
        let mut seen = std::collections::HashSet::new();
        let tabs = tabs
            .into_iter()
            .filter(|tab| seen.insert(tab.id.clone()))
            .collect();
        TabOrdering { tabs }
    }

    pub fn tabs(&self) -> &[TabModel] {
        &self.tabs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabModel> {
        self.tabs.iter()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&TabModel> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Tab whose url exactly matches the current navigation location
    pub fn active_tab(&self, location: &str) -> Option<&TabModel> {
        self.tabs.iter().find(|t| t.url == location)
    }

    /// Pinned tabs in original relative order
    pub fn pinned(&self) -> impl Iterator<Item = &TabModel> {
        self.tabs.iter().filter(|t| t.pinned)
    }

    /// Unpinned tabs in original relative order
    pub fn unpinned(&self) -> impl Iterator<Item = &TabModel> {
        self.tabs.iter().filter(|t| !t.pinned)
    }

    /// Flip the pinned flag; no-op if `id` is not present
    pub fn toggle_pin(&mut self, id: &str) -> bool {
        self.tabs
            .iter_mut()
            .find(|t| t.id == id)
            .map(|tab| {
                tab.pinned = !tab.pinned;
            })
            .is_some()
    }

    /// Remove the tab; no-op if `id` is not present
    pub fn close(&mut self, id: &str) -> bool {
        let original_len = self.tabs.len();
        self.tabs.retain(|t| t.id != id);
        self.tabs.len() < original_len
    }

    /// Move the `from_id` tab to the position currently held by `to_id`,
    /// shifting the records in between. No-op if the ids are equal or
    /// either is missing.
    pub fn reorder(&mut self, from_id: &str, to_id: &str) -> bool {
        if from_id == to_id {
            return false;
        }
        let Some(from) = self.tabs.iter().position(|t| t.id == from_id) else {
            return false;
        };
        let Some(to) = self.tabs.iter().position(|t| t.id == to_id) else {
            return false;
        };

        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        true
    }
}

impl<'a> IntoIterator for &'a TabOrdering {
    type Item = &'a TabModel;
    type IntoIter = std::slice::Iter<'a, TabModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordering(ids: &[&str]) -> TabOrdering {
        TabOrdering::new(
            ids.iter()
                .map(|id| TabModel::new(*id, format!("Tab {id}"), format!("/{id}"), false))
                .collect(),
        )
    }

    fn ids(ordering: &TabOrdering) -> Vec<&str> {
        ordering.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_new_drops_duplicate_ids() {
        let tabs = vec![
            TabModel::new("a", "A", "/a", false),
            TabModel::new("b", "B", "/b", true),
            TabModel::new("a", "A again", "/elsewhere", false),
        ];

        let ordering = TabOrdering::new(tabs);

        assert_eq!(ids(&ordering), vec!["a", "b"]);
        assert_eq!(ordering.get("a").unwrap().title, "A");
    }

    #[test]
    fn test_reorder_adjacent() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(tabs.reorder("a", "b"));

        assert_eq!(ids(&tabs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reorder_to_end() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(tabs.reorder("a", "c"));

        assert_eq!(ids(&tabs), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_reorder_to_front() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(tabs.reorder("c", "a"));

        assert_eq!(ids(&tabs), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_same_id_is_noop() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(!tabs.reorder("b", "b"));

        assert_eq!(ids(&tabs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reorder_missing_id_is_noop() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(!tabs.reorder("a", "missing"));
        assert!(!tabs.reorder("missing", "a"));

        assert_eq!(ids(&tabs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_close() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(tabs.close("b"));

        assert_eq!(ids(&tabs), vec!["a", "c"]);
    }

    #[test]
    fn test_close_missing_id_is_noop() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(!tabs.close("missing"));

        assert_eq!(ids(&tabs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_close_last_tab_leaves_empty_ordering() {
        let mut tabs = ordering(&["a"]);

        assert!(tabs.close("a"));

        assert!(tabs.is_empty());
        assert_eq!(tabs.len(), 0);
    }

    #[test]
    fn test_toggle_pin_keeps_position() {
        let mut tabs = ordering(&["a", "b", "c"]);

        assert!(tabs.toggle_pin("b"));

        assert_eq!(ids(&tabs), vec!["a", "b", "c"]);
        assert!(tabs.get("b").unwrap().pinned);

        assert!(tabs.toggle_pin("b"));
        assert!(!tabs.get("b").unwrap().pinned);
    }

    #[test]
    fn test_toggle_pin_missing_id_is_noop() {
        let mut tabs = ordering(&["a"]);

        assert!(!tabs.toggle_pin("missing"));
    }

    #[test]
    fn test_partitions_preserve_relative_order() {
        let mut tabs = ordering(&["a", "b", "c", "d"]);
        tabs.toggle_pin("b");
        tabs.toggle_pin("d");

        let pinned: Vec<&str> = tabs.pinned().map(|t| t.id.as_str()).collect();
        let unpinned: Vec<&str> = tabs.unpinned().map(|t| t.id.as_str()).collect();

        assert_eq!(pinned, vec!["b", "d"]);
        assert_eq!(unpinned, vec!["a", "c"]);
    }

    #[test]
    fn test_active_tab_by_location() {
        let tabs = ordering(&["a", "b"]);

        assert_eq!(tabs.active_tab("/b").map(|t| t.id.as_str()), Some("b"));
        assert_eq!(tabs.active_tab("/nope"), None);
    }
}
