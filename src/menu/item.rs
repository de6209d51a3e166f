//! Menu items and the actions they dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Identifier of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub i64);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a menu item.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of action an item performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Submenu,
    Command,
    Script,
    External,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Submenu => "submenu",
            ActionType::Command => "command",
            ActionType::Script => "script",
            ActionType::External => "external",
        };
        f.write_str(name)
    }
}

/// What selecting an item does, with the payload its type needs.
///
/// Stored as `{"action_type": "...", "action_data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action_type", content = "action_data", rename_all = "lowercase")]
pub enum Action {
    /// Switch the session to another menu.
    Submenu { menu_id: MenuId },
    /// Run an internal BBS command.
    Command { command: String },
    /// Run a script at a path.
    Script { script_path: String },
    /// Launch an external program (a door).
    External { program: String },
}

impl Action {
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Submenu { .. } => ActionType::Submenu,
            Action::Command { .. } => ActionType::Command,
            Action::Script { .. } => ActionType::Script,
            Action::External { .. } => ActionType::External,
        }
    }
}

/// Colors an item label is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemColors {
    pub fg: Color,
    pub bg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Default for ItemColors {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            highlight_fg: Color::Black,
            highlight_bg: Color::White,
        }
    }
}

/// A selectable entry on a menu screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Assigned by the store on creation.
    #[serde(default)]
    pub id: ItemId,
    pub menu_id: MenuId,
    /// Single character, matched case-insensitively.
    pub hotkey: char,
    pub label: String,
    #[serde(rename = "x_position")]
    pub x: u16,
    #[serde(rename = "y_position")]
    pub y: u16,
    #[serde(flatten)]
    pub action: Action,
    #[serde(default)]
    pub min_user_level: i32,
    #[serde(default = "visible_default", rename = "is_visible")]
    pub visible: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub colors: ItemColors,
}

fn visible_default() -> bool {
    true
}

impl MenuItem {
    /// A visible, level-0 item with default colors.
    pub fn new(menu_id: MenuId, hotkey: char, label: impl Into<String>, action: Action) -> Self {
        Self {
            id: ItemId::default(),
            menu_id,
            hotkey: normalize_hotkey(hotkey),
            label: label.into(),
            x: 0,
            y: 0,
            action,
            min_user_level: 0,
            visible: true,
            display_order: 0,
            colors: ItemColors::default(),
        }
    }

    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_min_level(mut self, level: i32) -> Self {
        self.min_user_level = level;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Whether a user at `user_level` may see and select this item.
    pub fn is_accessible(&self, user_level: i32) -> bool {
        self.visible && self.min_user_level <= user_level
    }

    pub fn matches_hotkey(&self, key: char) -> bool {
        hotkeys_equal(self.hotkey, key)
    }

    /// The label as drawn on screen: `[H] Label`.
    pub fn display_label(&self) -> String {
        format!("[{}] {}", self.hotkey, self.label)
    }
}

/// Upper-case a hotkey when it has a single-character upper-case form.
pub fn normalize_hotkey(key: char) -> char {
    let mut upper = key.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => key,
    }
}

pub fn hotkeys_equal(a: char, b: char) -> bool {
    normalize_hotkey(a) == normalize_hotkey(b)
}
