use thiserror::Error;

/// Internal failures that are not caused by the client.
///
/// All variants result in a 500 Internal Server Error with a generic message returned
/// to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password.
    #[error("Failed to hash password: {0}")]
    PasswordHash(argon2::password_hash::Error),

    /// Failure to sign an identity token.
    #[error("Failed to issue token for user {user_id}: {source}")]
    TokenIssue {
        /// The user the token was being issued for
        user_id: i32,
        /// The underlying signing error
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// The token validity window pushes the expiry past the representable date range.
    #[error("Token expiry for user {user_id} is out of range")]
    TokenExpiryOverflow {
        /// The user the token was being issued for
        user_id: i32,
    },

    /// A blocking task such as password hashing panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
