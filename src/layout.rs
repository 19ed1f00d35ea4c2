/// Overflow layout engine: visible vs. overflowed tab classification

use crate::ordering::TabOrdering;
use crate::tab_data::TabModel;
use std::collections::HashMap;

/// Width lookup keyed by tab id.
///
/// Implementations may read live DOM geometry, a cached measurement table,
/// or fixed test values. An unmeasured tab reports 0.0.
pub trait TabWidths {
    fn width_of(&self, id: &str) -> f64;
}

/// Last-known measured widths, keyed by tab id.
///
/// Overflowed tabs are not rendered in the strip, so they cannot be
/// re-measured while hidden; the cache keeps the width from when they
/// were last visible.
#[derive(Debug, Clone, Default)]
pub struct WidthCache {
    widths: HashMap<String, f64>,
}

impl WidthCache {
    pub fn new() -> WidthCache {
        WidthCache::default()
    }

    pub fn set(&mut self, id: &str, width: f64) {
        self.widths.insert(id.to_string(), width);
    }

    /// Drop entries for tabs that no longer exist
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.widths.retain(|id, _| keep(id));
    }
}

impl TabWidths for WidthCache {
    fn width_of(&self, id: &str) -> f64 {
        self.widths.get(id).copied().unwrap_or(0.0)
    }
}

/// Derived partition of the ordering. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverflowLayout {
    pub visible: Vec<TabModel>,
    pub overflow: Vec<TabModel>,
}

impl OverflowLayout {
    /// Layout used before anything has been measured: render everything
    /// so the first measurement pass can see real widths.
    pub fn all_visible(ordering: &TabOrdering) -> OverflowLayout {
        OverflowLayout {
            visible: ordering.tabs().to_vec(),
            overflow: Vec::new(),
        }
    }
}

/// Classify every tab as visible or overflowed.
///
/// Pinned tabs are unconditionally visible and their widths are charged
/// first, even past the container width. Unpinned tabs are then walked in
/// order with a greedy first-fit: each tab is tested independently against
/// the remaining budget, so a narrow tab after an overflowed wide one may
/// still fit. That gap-leaving behavior is the intended policy.
pub fn compute_overflow(
    ordering: &TabOrdering,
    widths: &impl TabWidths,
    container_width: f64,
) -> OverflowLayout {
    let mut used = 0.0;
    let mut visible: Vec<TabModel> = Vec::with_capacity(ordering.len());
    let mut overflow: Vec<TabModel> = Vec::new();

    for tab in ordering.pinned() {
        used += widths.width_of(&tab.id);
        visible.push(tab.clone());
    }

    for tab in ordering.unpinned() {
        let width = widths.width_of(&tab.id);
        if used + width <= container_width {
            used += width;
            visible.push(tab.clone());
        } else {
            overflow.push(tab.clone());
        }
    }

    OverflowLayout { visible, overflow }
}
