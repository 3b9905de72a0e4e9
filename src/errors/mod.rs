//! Error handling module for the guide.
//!
//! Data-source failures are kept apart from startup failures: the former degrade a page to an
//! empty rendering, the latter stop the process before it starts serving.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const INVALID_QUERY: &str = "INVALID_QUERY";
    pub const MULTIPLE_ROWS: &str = "MULTIPLE_ROWS";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
}

/// Failure of a single data-source call.
///
/// A lookup that matches nothing is not an error; see [`crate::db::Catalog::maybe_single`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// The request never produced a response (connection refused, DNS, timeout...)
    Transport(String),
    /// The hosted backend answered with a non-success status
    Server { status: u16, message: String },
    /// Local database failure
    Database(String),
    /// A row could not be decoded into the expected shape
    Decode(String),
    /// The query names a column the table does not have
    InvalidQuery(String),
    /// A single-row lookup matched more than one row
    MultipleRows { table: &'static str },
}

impl DataError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            DataError::Transport(_) => codes::TRANSPORT_ERROR,
            DataError::Server { .. } => codes::SERVER_ERROR,
            DataError::Database(_) => codes::DATABASE_ERROR,
            DataError::Decode(_) => codes::DECODE_ERROR,
            DataError::InvalidQuery(_) => codes::INVALID_QUERY,
            DataError::MultipleRows { .. } => codes::MULTIPLE_ROWS,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            DataError::Transport(msg) => msg.clone(),
            DataError::Server { status, message } => format!("HTTP {}: {}", status, message),
            DataError::Database(msg) => msg.clone(),
            DataError::Decode(msg) => msg.clone(),
            DataError::InvalidQuery(msg) => msg.clone(),
            DataError::MultipleRows { table } => {
                format!("More than one row in {} matched a single-row lookup", table)
            }
        }
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for DataError {}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        DataError::Database(format!("Database error: {}", err))
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DataError::Decode(format!("Response decode error: {}", err))
        } else {
            DataError::Transport(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Decode(format!("JSON error: {}", err))
    }
}

/// Startup error: anything that prevents the server from coming up.
#[derive(Debug)]
pub enum AppError {
    /// Invalid configuration value
    Config(String),
    /// Data source could not be initialized
    Data(DataError),
    /// Socket or filesystem failure
    Io(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::Data(err) => err.error_code(),
            AppError::Io(_) => codes::IO_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) | AppError::Io(msg) => {
                write!(f, "{}: {}", self.error_code(), msg)
            }
            AppError::Data(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::Data(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("IO error: {:?}", err);
        AppError::Io(format!("IO error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = DataError::Server {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "SERVER_ERROR: HTTP 503: unavailable");
    }

    #[test]
    fn test_app_error_wraps_data_code() {
        let err: AppError = DataError::InvalidQuery("bad column".to_string()).into();
        assert_eq!(err.error_code(), codes::INVALID_QUERY);
        assert_eq!(err.to_string(), "INVALID_QUERY: bad column");
    }
}
