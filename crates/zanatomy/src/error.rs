use derive_more::Display;

/// Lifecycle misuse of a [`Session`](crate::Session)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionError {
    /// `start` was called on a session that is already running
    #[display(fmt = "session is already running")]
    AlreadyRunning,

    /// The shared event bus is borrowed, typically from inside one of its callbacks
    #[display(fmt = "event bus is busy")]
    BusBusy,
}

impl std::error::Error for SessionError {}
