//! WEBBS terminal presentation engine
//!
//! Decodes DOS-era ANSI art (CP437 bytes with optional SAUCE metadata),
//! renders it to HTML, and authors, stores and serves the fixed-size
//! character-grid menu screens of a text-mode BBS.
//!
//! Everything in the core is a synchronous transformation over in-memory
//! buffers. Persistence and transport are supplied by the caller through
//! the store traits in [`menu`] and [`session`].

pub mod ansi;
pub mod cli;
pub mod codepage;
pub mod color;
pub mod config;
pub mod grid;
pub mod html;
pub mod logging;
pub mod menu;
pub mod sauce;
pub mod session;

pub use ansi::{decode_grid, AnsiDecoder, Segment, StyledRun};
pub use color::Color;
pub use config::Config;
pub use grid::{BoxStyle, Cell, GridDocument, GridError, Pen};
pub use html::{ansi_to_html, HtmlOptions};
pub use menu::{MemoryMenuStore, MenuItem, MenuNavigator, MenuSession, NavigationResult};
pub use sauce::SauceRecord;
pub use session::{Dialogue, MemorySessionStore, SessionStore};
