//! Line-oriented dialogue of a terminal connection.
//!
//! Each connection is in exactly one [`Dialogue`] state. A state carries
//! only the fields collected so far in its flow, so a half-entered login
//! can never be mistaken for a half-entered post. Feeding a line with
//! [`Dialogue::handle_line`] moves to the next state and yields an
//! [`Effect`] for the caller: something to ask, something to persist,
//! or a reason the line was refused.
//!
//! Outcomes that need the user database (login, entering a board) come
//! back through [`Dialogue::sign_in`] and [`Dialogue::enter_board`].

use std::fmt;

use serde::Serialize;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=20;

/// Commands the dialogue passes through to the caller unchanged.
const FORWARDED: &[&str] = &["help", "boards", "who", "info", "bulletins"];
/// Passed through, but only for signed-in users.
const MEMBER_FORWARDED: &[&str] = &["list", "read", "files", "areas", "download", "msg"];

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub user_level: i32,
}

/// A message board a user has entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub id: i64,
    pub name: String,
}

/// Connection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialogue {
    #[default]
    Guest,
    LoginUsername,
    LoginPassword {
        username: String,
    },
    RegisterUsername,
    RegisterEmail {
        username: String,
    },
    RegisterPassword {
        username: String,
        email: String,
    },
    RegisterDisplayName {
        username: String,
        email: String,
        password: String,
    },
    Authenticated {
        user: User,
        board: Option<Board>,
    },
    PostSubject {
        user: User,
        board: Board,
    },
    PostBody {
        user: User,
        board: Board,
        subject: String,
    },
    Replying {
        user: User,
        board: Option<Board>,
        message_id: i64,
    },
}

/// Field the user is being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Username,
    Email,
    Password,
    DisplayName,
    Subject,
    Body,
    Reply,
}

impl Question {
    pub fn text(self) -> &'static str {
        match self {
            Question::Username => "Enter username:",
            Question::Email => "Enter email address:",
            Question::Password => "Enter password:",
            Question::DisplayName => "Enter display name (optional):",
            Question::Subject => "Enter message subject:",
            Question::Body => "Enter message content:",
            Question::Reply => "Enter your reply:",
        }
    }
}

/// Why a line was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("You are already logged in.")]
    AlreadyLoggedIn,
    #[error("You are not logged in.")]
    NotLoggedIn,
    #[error("You must be logged in.")]
    LoginRequired,
    #[error("You must be in a board. Use enter <board_name> first.")]
    NotInBoard,
    #[error("You are not in any board.")]
    NoBoardToExit,
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Invalid username. Must be 3-20 characters, letters/numbers/underscores only.")]
    InvalidUsername,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Collected registration fields, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// What the caller should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond redrawing the prompt (blank line).
    None,
    Ask(Question),
    /// Check the credentials; call [`Dialogue::sign_in`] on success.
    Authenticate { username: String, password: String },
    Register(Registration),
    /// Look the board up; call [`Dialogue::enter_board`] if it exists.
    EnterBoard { name: String },
    LeftBoard(Board),
    Post {
        user: User,
        board: Board,
        subject: String,
        body: String,
    },
    Reply {
        user: User,
        message_id: i64,
        body: String,
    },
    LoggedOut(User),
    /// End the connection.
    Quit,
    /// A command this state machine does not own, lower-cased.
    Forward { command: String, args: Vec<String> },
    Rejected(Rejection),
}

impl Dialogue {
    /// Feed one input line.
    pub fn handle_line(&mut self, line: &str) -> Effect {
        let line = line.trim();
        let state = std::mem::take(self);
        let (next, effect) = state.step(line);
        *self = next;
        effect
    }

    /// Record a successful login. Ignored unless signed out.
    pub fn sign_in(&mut self, user: User) {
        if self.user().is_none() {
            *self = Dialogue::Authenticated { user, board: None };
        }
    }

    /// Record entry into a board. Ignored unless signed in and idle.
    pub fn enter_board(&mut self, entered: Board) {
        if let Dialogue::Authenticated { board, .. } = self {
            *board = Some(entered);
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Dialogue::Authenticated { user, .. }
            | Dialogue::PostSubject { user, .. }
            | Dialogue::PostBody { user, .. }
            | Dialogue::Replying { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Prompt shown before the next line.
    pub fn prompt(&self) -> String {
        match self {
            Dialogue::Guest => "BBS> ".to_string(),
            Dialogue::LoginUsername | Dialogue::LoginPassword { .. } => "LOGIN> ".to_string(),
            Dialogue::RegisterUsername
            | Dialogue::RegisterEmail { .. }
            | Dialogue::RegisterPassword { .. }
            | Dialogue::RegisterDisplayName { .. } => "REG> ".to_string(),
            Dialogue::PostSubject { .. } | Dialogue::PostBody { .. } => "POST> ".to_string(),
            Dialogue::Replying { .. } => "REPLY> ".to_string(),
            Dialogue::Authenticated {
                user,
                board: Some(board),
            } => format!("[{}]{}> ", board.name, user.username),
            Dialogue::Authenticated { user, board: None } => format!("{}> ", user.username),
        }
    }

    fn step(self, line: &str) -> (Dialogue, Effect) {
        match self {
            Dialogue::LoginUsername => (
                Dialogue::LoginPassword {
                    username: line.to_string(),
                },
                Effect::Ask(Question::Password),
            ),
            Dialogue::LoginPassword { username } => (
                Dialogue::Guest,
                Effect::Authenticate {
                    username,
                    password: line.to_string(),
                },
            ),
            Dialogue::RegisterUsername => {
                if !is_valid_username(line) {
                    return (Dialogue::Guest, Effect::Rejected(Rejection::InvalidUsername));
                }
                (
                    Dialogue::RegisterEmail {
                        username: line.to_string(),
                    },
                    Effect::Ask(Question::Email),
                )
            }
            Dialogue::RegisterEmail { username } => (
                Dialogue::RegisterPassword {
                    username,
                    email: line.to_string(),
                },
                Effect::Ask(Question::Password),
            ),
            Dialogue::RegisterPassword { username, email } => {
                if line.chars().count() < MIN_PASSWORD_LEN {
                    return (Dialogue::Guest, Effect::Rejected(Rejection::PasswordTooShort));
                }
                (
                    Dialogue::RegisterDisplayName {
                        username,
                        email,
                        password: line.to_string(),
                    },
                    Effect::Ask(Question::DisplayName),
                )
            }
            Dialogue::RegisterDisplayName {
                username,
                email,
                password,
            } => {
                let display_name = if line.is_empty() {
                    username.clone()
                } else {
                    line.to_string()
                };
                (
                    Dialogue::Guest,
                    Effect::Register(Registration {
                        username,
                        email,
                        password,
                        display_name,
                    }),
                )
            }
            Dialogue::PostSubject { user, board } => (
                Dialogue::PostBody {
                    user,
                    board,
                    subject: line.to_string(),
                },
                Effect::Ask(Question::Body),
            ),
            Dialogue::PostBody {
                user,
                board,
                subject,
            } => (
                Dialogue::Authenticated {
                    user: user.clone(),
                    board: Some(board.clone()),
                },
                Effect::Post {
                    user,
                    board,
                    subject,
                    body: line.to_string(),
                },
            ),
            Dialogue::Replying {
                user,
                board,
                message_id,
            } => (
                Dialogue::Authenticated {
                    user: user.clone(),
                    board,
                },
                Effect::Reply {
                    user,
                    message_id,
                    body: line.to_string(),
                },
            ),
            Dialogue::Guest => guest_command(line),
            Dialogue::Authenticated { user, board } => member_command(user, board, line),
        }
    }
}

fn guest_command(line: &str) -> (Dialogue, Effect) {
    let Some((command, args)) = split_command(line) else {
        return (Dialogue::Guest, Effect::None);
    };
    let effect = match command.as_str() {
        "login" => return (Dialogue::LoginUsername, Effect::Ask(Question::Username)),
        "register" => return (Dialogue::RegisterUsername, Effect::Ask(Question::Username)),
        "quit" => Effect::Quit,
        "logout" => Effect::Rejected(Rejection::NotLoggedIn),
        "enter" | "exit" | "post" | "reply" => Effect::Rejected(Rejection::LoginRequired),
        c if FORWARDED.contains(&c) => Effect::Forward {
            command: c.to_string(),
            args,
        },
        c if MEMBER_FORWARDED.contains(&c) => Effect::Rejected(Rejection::LoginRequired),
        other => Effect::Rejected(Rejection::UnknownCommand(other.to_string())),
    };
    (Dialogue::Guest, effect)
}

fn member_command(user: User, board: Option<Board>, line: &str) -> (Dialogue, Effect) {
    let Some((command, args)) = split_command(line) else {
        return (Dialogue::Authenticated { user, board }, Effect::None);
    };

    match command.as_str() {
        "login" | "register" => (
            Dialogue::Authenticated { user, board },
            Effect::Rejected(Rejection::AlreadyLoggedIn),
        ),
        "logout" => (Dialogue::Guest, Effect::LoggedOut(user)),
        "quit" => (Dialogue::Guest, Effect::Quit),
        "enter" => {
            let effect = if args.is_empty() {
                Effect::Rejected(Rejection::Usage("enter <board_name>"))
            } else {
                Effect::EnterBoard {
                    name: args.join(" "),
                }
            };
            (Dialogue::Authenticated { user, board }, effect)
        }
        "exit" => match board {
            Some(left) => (
                Dialogue::Authenticated { user, board: None },
                Effect::LeftBoard(left),
            ),
            None => (
                Dialogue::Authenticated { user, board: None },
                Effect::Rejected(Rejection::NoBoardToExit),
            ),
        },
        "post" => match board {
            Some(board) => (
                Dialogue::PostSubject { user, board },
                Effect::Ask(Question::Subject),
            ),
            None => (
                Dialogue::Authenticated { user, board: None },
                Effect::Rejected(Rejection::NotInBoard),
            ),
        },
        "reply" => match args.first().and_then(|id| id.parse::<i64>().ok()) {
            Some(message_id) => (
                Dialogue::Replying {
                    user,
                    board,
                    message_id,
                },
                Effect::Ask(Question::Reply),
            ),
            None => (
                Dialogue::Authenticated { user, board },
                Effect::Rejected(Rejection::Usage("reply <message_id>")),
            ),
        },
        "list" if board.is_none() => (
            Dialogue::Authenticated { user, board },
            Effect::Rejected(Rejection::NotInBoard),
        ),
        c if FORWARDED.contains(&c) || MEMBER_FORWARDED.contains(&c) => (
            Dialogue::Authenticated { user, board },
            Effect::Forward {
                command: c.to_string(),
                args,
            },
        ),
        other => (
            Dialogue::Authenticated { user, board },
            Effect::Rejected(Rejection::UnknownCommand(other.to_string())),
        ),
    }
}

/// Split a line into a lower-cased command word and its arguments.
fn split_command(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    Some((command, words.map(str::to_string).collect()))
}

/// 3 to 20 characters of ASCII letters, digits and underscores.
pub fn is_valid_username(name: &str) -> bool {
    USERNAME_LEN.contains(&name.len())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for Effect {
    /// Terminal text for effects that need no collaborator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Ask(question) => write!(f, "\x1b[33m{}\x1b[0m", question.text()),
            Effect::Rejected(reason) => write!(f, "\x1b[31m{}\x1b[0m", reason),
            Effect::LeftBoard(board) => write!(f, "\x1b[32mExited board: {}\x1b[0m", board.name),
            Effect::LoggedOut(user) => write!(f, "\x1b[32mGoodbye, {}!\x1b[0m", user.display_name),
            _ => Ok(()),
        }
    }
}
