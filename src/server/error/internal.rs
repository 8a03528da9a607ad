use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A stored password hash is not a valid PHC string.
    #[error("Stored password hash for user {user_id} is malformed: {reason}")]
    MalformedPasswordHash {
        /// Owner of the malformed hash
        user_id: i32,
        /// Parser error message
        reason: String,
    },

    /// A task on the blocking pool panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
