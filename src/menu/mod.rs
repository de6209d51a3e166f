//! Text-mode menus: items, their stores, and hotkey navigation.
//!
//! A menu is a stored [`GridDocument`](crate::grid::GridDocument) layout
//! plus a list of [`MenuItem`]s. The [`MenuNavigator`] maps a keystroke
//! from a [`MenuSession`] to the item it selects.

mod item;
mod navigator;
mod screen;
mod session;
mod store;

pub use item::{
    hotkeys_equal, normalize_hotkey, Action, ActionType, ItemColors, ItemId, MenuId, MenuItem,
};
pub use navigator::{MenuNavigator, Navigation, NavigationEvent, NavigationResult};
pub use screen::{invalid_selection, render_item_label, render_menu, selection_feedback};
pub use session::MenuSession;
pub use store::{
    check_hotkey_unique, LayoutStore, MemoryMenuStore, MenuItemStore, MenuStore, StoreError,
};
