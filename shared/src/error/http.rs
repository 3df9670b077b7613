//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// Business-rule violations are client errors: they all map to 400, even
    /// when the rule is "the referenced entity does not exist".
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Unmatched route / resource
            Self::NotFound => StatusCode::NOT_FOUND,

            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            _ => StatusCode::BAD_REQUEST,
        }
    }
}
