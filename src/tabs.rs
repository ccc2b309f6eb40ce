//! Tab management: one independent `GalleryState` per open tab.
//!
//! Tabs are keyed by a monotonic counter rather than a timestamp, so two
//! tabs created within the same clock tick can never collide. The manager
//! always keeps at least one tab open: closing the last tab replaces it
//! with a fresh empty one.

use std::collections::HashMap;

use tracing::debug;

use crate::models::GalleryState;

/// Opaque identifier for one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

/// Owns the open gallery tabs and tracks which one is active.
///
/// All display and navigation questions are answered by `reader` functions
/// over the active tab's `GalleryState`; the manager only handles
/// lifecycle and selection.
pub struct TabManager {
    tabs: HashMap<TabId, Tab>,
    /// Creation order, used to pick a successor when the active tab closes.
    order: Vec<TabId>,
    active: TabId,
    next_id: u64,
}

/// One open tab: a title for display plus its gallery state.
pub struct Tab {
    pub title: String,
    pub gallery: GalleryState,
}

impl Tab {
    fn new() -> Self {
        Self {
            title: "New Tab".to_string(),
            gallery: GalleryState::new(),
        }
    }
}

impl TabManager {
    /// Creates a manager with one empty tab, which is active.
    pub fn new() -> Self {
        let mut manager = Self {
            tabs: HashMap::new(),
            order: Vec::new(),
            active: TabId(0),
            next_id: 0,
        };
        let id = manager.create_tab();
        manager.active = id;
        manager
    }

    /// Opens a new empty tab and makes it active.
    pub fn create_tab(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs.insert(id, Tab::new());
        self.order.push(id);
        self.active = id;
        debug!(?id, "Created tab");
        id
    }

    /// Closes a tab. If it was active, activation moves to the first
    /// remaining tab; closing the last tab creates a fresh empty one.
    pub fn close_tab(&mut self, id: TabId) {
        if self.tabs.remove(&id).is_none() {
            return;
        }
        self.order.retain(|t| *t != id);
        debug!(?id, "Closed tab");

        if self.active == id {
            match self.order.first() {
                Some(&first) => self.active = first,
                None => {
                    self.create_tab();
                }
            }
        }
    }

    /// Switches the active tab. Unknown ids are ignored.
    pub fn switch_tab(&mut self, id: TabId) {
        if self.tabs.contains_key(&id) {
            self.active = id;
        }
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn tab_ids(&self) -> &[TabId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.get(&id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.get_mut(&id)
    }

    /// The active tab. The manager maintains the invariant that the active
    /// id always refers to a live tab.
    pub fn active(&self) -> &Tab {
        self.tabs.get(&self.active).unwrap_or_else(|| {
            unreachable!("active tab id must refer to a live tab")
        })
    }

    pub fn active_mut(&mut self) -> &mut Tab {
        self.tabs.get_mut(&self.active).unwrap_or_else(|| {
            unreachable!("active tab id must refer to a live tab")
        })
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
