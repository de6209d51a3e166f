//! Persistence contracts for menu layouts and items.
//!
//! The engine never talks to a database itself. A collaborator implements
//! [`LayoutStore`] and [`MenuItemStore`]; [`MemoryMenuStore`] is the
//! in-process implementation used by the CLI and tests.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use super::item::{hotkeys_equal, normalize_hotkey, ItemId, MenuId, MenuItem};
use crate::grid::GridDocument;

/// Errors reported by store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("menu item {0} not found")]
    ItemNotFound(ItemId),

    #[error("hotkey '{hotkey}' is already used by a visible item in menu {menu_id}")]
    DuplicateHotkey { menu_id: MenuId, hotkey: char },

    #[error("store backend failed: {0}")]
    Backend(String),
}

/// Storage for the current layout of each menu.
///
/// One layout per menu: saving replaces the previous one.
pub trait LayoutStore {
    fn save_layout(&mut self, menu_id: MenuId, doc: &GridDocument) -> Result<(), StoreError>;

    fn load_layout(&self, menu_id: MenuId) -> Result<Option<GridDocument>, StoreError>;
}

/// Storage for the items of each menu.
pub trait MenuItemStore {
    /// All items of a menu, in any order.
    fn items(&self, menu_id: MenuId) -> Result<Vec<MenuItem>, StoreError>;

    /// Insert an item and return its assigned id.
    fn create_item(&mut self, item: MenuItem) -> Result<ItemId, StoreError>;

    /// Replace the item with the same id.
    fn update_item(&mut self, item: MenuItem) -> Result<(), StoreError>;

    fn delete_item(&mut self, id: ItemId) -> Result<(), StoreError>;

    /// Items a user at `user_level` can see, in screen order
    /// (display order, then row, then column).
    fn accessible_items(
        &self,
        menu_id: MenuId,
        user_level: i32,
    ) -> Result<Vec<MenuItem>, StoreError> {
        let mut items: Vec<MenuItem> = self
            .items(menu_id)?
            .into_iter()
            .filter(|item| item.is_accessible(user_level))
            .collect();
        items.sort_by_key(|item| (item.display_order, item.y, item.x));
        Ok(items)
    }
}

/// Both store contracts; what the navigator needs.
pub trait MenuStore: LayoutStore + MenuItemStore {}

impl<T: LayoutStore + MenuItemStore + ?Sized> MenuStore for T {}

/// Check the hotkey uniqueness invariant for `candidate` against `existing`.
///
/// Only visible items take part; `candidate` itself (same id) is skipped.
pub fn check_hotkey_unique(existing: &[MenuItem], candidate: &MenuItem) -> Result<(), StoreError> {
    if !candidate.visible {
        return Ok(());
    }
    let clash = existing.iter().any(|item| {
        item.id != candidate.id
            && item.menu_id == candidate.menu_id
            && item.visible
            && hotkeys_equal(item.hotkey, candidate.hotkey)
    });
    if clash {
        return Err(StoreError::DuplicateHotkey {
            menu_id: candidate.menu_id,
            hotkey: candidate.hotkey,
        });
    }
    Ok(())
}

/// In-memory layouts and items.
#[derive(Debug, Default)]
pub struct MemoryMenuStore {
    layouts: HashMap<MenuId, GridDocument>,
    items: BTreeMap<ItemId, MenuItem>,
    next_id: i64,
}

impl MemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn menu_items(&self, menu_id: MenuId) -> Vec<MenuItem> {
        self.items
            .values()
            .filter(|item| item.menu_id == menu_id)
            .cloned()
            .collect()
    }
}

impl LayoutStore for MemoryMenuStore {
    fn save_layout(&mut self, menu_id: MenuId, doc: &GridDocument) -> Result<(), StoreError> {
        self.layouts.insert(menu_id, doc.clone());
        Ok(())
    }

    fn load_layout(&self, menu_id: MenuId) -> Result<Option<GridDocument>, StoreError> {
        Ok(self.layouts.get(&menu_id).cloned())
    }
}

impl MenuItemStore for MemoryMenuStore {
    fn items(&self, menu_id: MenuId) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.menu_items(menu_id))
    }

    fn create_item(&mut self, mut item: MenuItem) -> Result<ItemId, StoreError> {
        self.next_id += 1;
        item.id = ItemId(self.next_id);
        item.hotkey = normalize_hotkey(item.hotkey);
        if let Err(e) = check_hotkey_unique(&self.menu_items(item.menu_id), &item) {
            warn!(error = %e, "rejected menu item");
            return Err(e);
        }
        let id = item.id;
        self.items.insert(id, item);
        Ok(id)
    }

    fn update_item(&mut self, mut item: MenuItem) -> Result<(), StoreError> {
        if !self.items.contains_key(&item.id) {
            return Err(StoreError::ItemNotFound(item.id));
        }
        item.hotkey = normalize_hotkey(item.hotkey);
        if let Err(e) = check_hotkey_unique(&self.menu_items(item.menu_id), &item) {
            warn!(error = %e, item = %item.id, "rejected menu item update");
            return Err(e);
        }
        self.items.insert(item.id, item);
        Ok(())
    }

    fn delete_item(&mut self, id: ItemId) -> Result<(), StoreError> {
        self.items
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::ItemNotFound(id))
    }
}
