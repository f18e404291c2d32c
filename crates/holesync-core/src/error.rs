use crate::types::Category;
use thiserror::Error;

/// Result type alias for holesync operations
pub type Result<T> = std::result::Result<T, HolesyncError>;

/// Why session establishment against a Pi-hole instance failed.
///
/// The reasons are kept distinct so an operator can tell a wrong
/// password apart from an FTL response that changed shape.
#[derive(Error, Debug)]
pub enum AuthFailure {
    /// The auth endpoint returned a non-2xx status
    #[error("authentication rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body returned by the instance
        body: String,
    },

    /// The auth response carried no `session` object
    #[error("session object not found in auth response")]
    MissingSession,

    /// The auth response's session object carried no `sid`
    #[error("session.sid not found in auth response")]
    MissingSid,

    /// The auth response's session object carried no `csrf` token
    #[error("session.csrf not found in auth response")]
    MissingCsrf,
}

/// Errors that can occur when talking to Pi-hole instances or running
/// a sync cycle
#[derive(Error, Debug)]
pub enum HolesyncError {
    /// Session establishment failed
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthFailure),

    /// The instance API returned an error response
    #[error("API request failed with status {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body from the instance
        body: String,
    },

    /// A category could not be read while fetching instance state
    #[error("failed to get {category}: {source}")]
    Fetch {
        /// The category whose fetch failed
        category: Category,
        /// Underlying failure
        source: Box<HolesyncError>,
    },

    /// The master read failed; fatal for the whole sync cycle
    #[error("failed to get master data: {source}")]
    Master {
        /// Underlying failure
        source: Box<HolesyncError>,
    },

    /// A slave push failed after all retries were exhausted
    #[error("failed to push to {host}: {source}")]
    Push {
        /// The slave host that could not be updated
        host: String,
        /// Underlying failure of the final attempt
        source: Box<HolesyncError>,
    },

    /// HTTP transport failure, including timeouts
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl HolesyncError {
    /// Wrap a category-fetch failure
    #[must_use]
    pub fn fetch(category: Category, source: Self) -> Self {
        Self::Fetch {
            category,
            source: Box::new(source),
        }
    }

    /// Wrap a master-read failure (fatal for the cycle)
    #[must_use]
    pub fn master(source: Self) -> Self {
        Self::Master {
            source: Box::new(source),
        }
    }

    /// Wrap a slave's final push failure
    #[must_use]
    pub fn push(host: impl Into<String>, source: Self) -> Self {
        Self::Push {
            host: host.into(),
            source: Box::new(source),
        }
    }

    /// Returns true if the error came from session establishment
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Returns the HTTP status code if the instance reported one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Auth(AuthFailure::Rejected { status, .. }) => {
                Some(*status)
            }
            _ => None,
        }
    }
}
