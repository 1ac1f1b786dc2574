use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{entity} not found: {}", join_ids(.ids))]
    NotFoundMany { entity: &'static str, ids: Vec<DbId> },

    #[error("No {entity} matched the requested ids")]
    NoMatches { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// HTTP status code this error is surfaced with.
    ///
    /// `Conflict` is reported as 400 rather than 409: duplicate names and
    /// emails are treated as bad input by API clients.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound { .. } | Self::NotFoundMany { .. } | Self::NoMatches { .. } => 404,
            Self::Validation(_) | Self::Conflict(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable error code for the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } | Self::NotFoundMany { .. } | Self::NoMatches { .. } => {
                "NOT_FOUND"
            }
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

fn join_ids(ids: &[DbId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
