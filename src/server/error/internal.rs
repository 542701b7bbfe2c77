use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A status column held a value outside its vocabulary.
    ///
    /// Only reachable when rows are written outside the application. Results in a 500
    /// Internal Server Error with a generic message returned to client.
    #[error("Unknown {kind} status '{value}' stored for record {id}")]
    UnknownStoredStatus {
        /// Collection the record belongs to
        kind: &'static str,
        /// Record id
        id: i32,
        /// The stored value
        value: String,
    },
}
