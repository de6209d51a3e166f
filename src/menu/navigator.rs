//! Hotkey-driven menu navigation.
//!
//! The navigator resolves *which* item a keystroke selects. It never runs
//! commands, scripts or doors: the selected action is handed back to the
//! caller verbatim. Only submenu selections change the session.

use serde::Serialize;
use tracing::info;

use super::item::{Action, ActionType, ItemId, MenuId, MenuItem};
use super::screen;
use super::session::MenuSession;
use super::store::{LayoutStore, MenuItemStore, MenuStore, StoreError};
use crate::grid::DEFAULT_HEIGHT;

/// What the caller of a navigation sees.
///
/// Serialized as
/// `{"matched", "action_type"?, "action_data"?, "next_menu_id"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationResult {
    pub matched: bool,
    #[serde(flatten)]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_menu_id: Option<MenuId>,
}

impl NavigationResult {
    fn no_match() -> Self {
        Self {
            matched: false,
            action: None,
            next_menu_id: None,
        }
    }

    pub fn action_type(&self) -> Option<ActionType> {
        self.action.as_ref().map(Action::action_type)
    }
}

/// Audit record of one dispatch, matched or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEvent {
    pub menu_id: MenuId,
    pub user_level: i32,
    pub input: String,
    pub item_id: Option<ItemId>,
    pub label: Option<String>,
    pub action_type: Option<ActionType>,
}

/// Outcome of [`MenuNavigator::navigate`].
#[derive(Debug, Clone)]
pub struct Navigation {
    pub result: NavigationResult,
    pub event: NavigationEvent,
    /// The selected item, for feedback rendering.
    pub item: Option<MenuItem>,
}

impl Navigation {
    /// Terminal text acknowledging the keystroke.
    pub fn feedback(&self) -> String {
        match &self.item {
            Some(item) => screen::selection_feedback(item),
            None => screen::invalid_selection(),
        }
    }
}

/// Resolves keystrokes against the items in a [`MenuStore`].
pub struct MenuNavigator<'s, S: MenuStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: MenuStore + ?Sized> MenuNavigator<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Apply one keystroke to `session`.
    ///
    /// The first character of `input` is matched case-insensitively against
    /// the visible items of the current menu that the session's level
    /// permits. With no match the session is left as it was.
    pub fn navigate(
        &self,
        session: &mut MenuSession,
        input: &str,
    ) -> Result<Navigation, StoreError> {
        let menu_id = session.current_menu;
        let selected = match input.chars().next() {
            Some(key) => self
                .store
                .accessible_items(menu_id, session.user_level)?
                .into_iter()
                .find(|item| item.matches_hotkey(key)),
            None => None,
        };

        let result = match &selected {
            Some(item) => {
                let next_menu_id = match item.action {
                    Action::Submenu { menu_id } => Some(menu_id),
                    _ => None,
                };
                if let Some(next) = next_menu_id {
                    session.current_menu = next;
                }
                NavigationResult {
                    matched: true,
                    action: Some(item.action.clone()),
                    next_menu_id,
                }
            }
            None => NavigationResult::no_match(),
        };

        let event = NavigationEvent {
            menu_id,
            user_level: session.user_level,
            input: input.to_string(),
            item_id: selected.as_ref().map(|item| item.id),
            label: selected.as_ref().map(|item| item.label.clone()),
            action_type: result.action_type(),
        };
        info!(
            menu = %event.menu_id,
            level = event.user_level,
            input = %event.input,
            matched = result.matched,
            item = ?event.item_id,
            action = ?event.action_type,
            "menu selection"
        );

        Ok(Navigation {
            result,
            event,
            item: selected,
        })
    }

    /// Encode the session's current menu with its input prompt.
    pub fn screen(&self, session: &MenuSession, prompt: &str) -> Result<String, StoreError> {
        let layout = self.store.load_layout(session.current_menu)?;
        Ok(screen::render_menu(layout.as_ref(), DEFAULT_HEIGHT, prompt))
    }

    /// Items of the current menu as `[H] Label` overlays.
    pub fn item_labels(&self, session: &MenuSession) -> Result<String, StoreError> {
        let items = self
            .store
            .accessible_items(session.current_menu, session.user_level)?;
        Ok(items
            .iter()
            .map(|item| screen::render_item_label(item, false))
            .collect())
    }
}
