//! Terminal connections and their lifecycle.
//!
//! A [`TerminalSession`] is created when a client connects and destroyed
//! on disconnect, logout or idle timeout. Sessions live in a
//! [`SessionStore`] owned by the transport layer and passed to whatever
//! needs them; nothing here is global.

mod dialogue;

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::menu::{MenuId, MenuSession};

pub use dialogue::{
    is_valid_username, Board, Dialogue, Effect, Question, Registration, Rejection, User,
    MIN_PASSWORD_LEN,
};

/// Default idle timeout: 30 minutes.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Opaque connection identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(SessionId),

    #[error("session {0} has expired")]
    Expired(SessionId),
}

/// State of one connected client.
#[derive(Debug, Clone)]
pub struct TerminalSession {
    pub id: SessionId,
    pub dialogue: Dialogue,
    /// Set once the user has entered the menu system.
    pub menu: Option<MenuSession>,
    pub last_seen: Instant,
}

impl TerminalSession {
    fn new(id: SessionId, now: Instant) -> Self {
        Self {
            id,
            dialogue: Dialogue::Guest,
            menu: None,
            last_seen: now,
        }
    }

    /// Put the signed-in user on `menu`, at their access level.
    ///
    /// Guests have no menu session.
    pub fn open_menu(&mut self, menu: MenuId) -> Option<&mut MenuSession> {
        let level = self.dialogue.user()?.user_level;
        self.menu = Some(MenuSession::new(menu, level));
        self.menu.as_mut()
    }

    pub fn is_idle(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.last_seen) >= timeout
    }
}

/// Where connected sessions live between requests.
pub trait SessionStore {
    /// Register a new connection.
    fn create(&mut self, now: Instant) -> SessionId;

    fn get(&self, id: SessionId) -> Option<&TerminalSession>;

    /// Fetch a session for an incoming line and mark it active.
    ///
    /// A session idle past the timeout is removed and reported as expired.
    fn touch(&mut self, id: SessionId, now: Instant) -> Result<&mut TerminalSession, SessionError>;

    fn destroy(&mut self, id: SessionId) -> Result<TerminalSession, SessionError>;

    /// Remove every idle session, returning their ids.
    fn expire_idle(&mut self, now: Instant) -> Vec<SessionId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sessions in a process-local map.
#[derive(Debug)]
pub struct MemorySessionStore {
    sessions: HashMap<SessionId, TerminalSession>,
    idle_timeout: Duration,
    next_id: u64,
}

impl MemorySessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_timeout,
            next_id: 0,
        }
    }

    /// A store using the `[session]` idle timeout.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.idle_timeout())
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&mut self, now: Instant) -> SessionId {
        self.next_id += 1;
        let id = SessionId(self.next_id);
        self.sessions.insert(id, TerminalSession::new(id, now));
        debug!(session = %id, "session created");
        id
    }

    fn get(&self, id: SessionId) -> Option<&TerminalSession> {
        self.sessions.get(&id)
    }

    fn touch(&mut self, id: SessionId, now: Instant) -> Result<&mut TerminalSession, SessionError> {
        let idle = self
            .sessions
            .get(&id)
            .ok_or(SessionError::NotFound(id))?
            .is_idle(now, self.idle_timeout);
        if idle {
            self.sessions.remove(&id);
            info!(session = %id, "session expired");
            return Err(SessionError::Expired(id));
        }

        let session = self.sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.last_seen = now;
        Ok(session)
    }

    fn destroy(&mut self, id: SessionId) -> Result<TerminalSession, SessionError> {
        let session = self.sessions.remove(&id).ok_or(SessionError::NotFound(id))?;
        debug!(session = %id, "session destroyed");
        Ok(session)
    }

    fn expire_idle(&mut self, now: Instant) -> Vec<SessionId> {
        let timeout = self.idle_timeout;
        let mut expired: Vec<SessionId> = self
            .sessions
            .values()
            .filter(|s| s.is_idle(now, timeout))
            .map(|s| s.id)
            .collect();
        expired.sort();
        for id in &expired {
            self.sessions.remove(id);
        }
        if !expired.is_empty() {
            info!(count = expired.len(), "expired idle sessions");
        }
        expired
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
