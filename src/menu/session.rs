//! Per-connection menu state.

use serde::{Deserialize, Serialize};

use super::item::MenuId;

/// Where a connected user is in the menu tree.
///
/// Holds only identifiers; layouts and items are re-fetched from the
/// store on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSession {
    /// Menu whose items answer the next hotkey
    pub current_menu: MenuId,
    /// Access level compared against each item's minimum
    pub user_level: i32,
}

impl MenuSession {
    pub fn new(current_menu: MenuId, user_level: i32) -> Self {
        Self {
            current_menu,
            user_level,
        }
    }
}
