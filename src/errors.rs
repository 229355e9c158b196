use astra::Response;
use thiserror::Error;

/// Errors originating from server logic (routing, gating, validation)
/// or downstream layers (store).
///
/// Every variant maps to a response in `responses::errors`; none of them
/// take the server down. A failed action leaves the store and the caller's
/// last confirmed state untouched.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    /// Malformed user input, caught before anything reaches the store.
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Action requires a signed-in user.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The store rejected a mutation on a resource the caller does not own.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
