use std::fmt;

/// Convenience result type used across LifeGrid.
pub type LifeGridResult<T> = Result<T, LifeGridError>;

/// One rejected boundary parameter.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ValidationIssue {
    /// Parameter name as it appears in the query (`bg`, `dob`, ...).
    pub field: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ValidationIssue {
    /// Build an issue for `field`.
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every issue found in one parameter set, in parameter order.
#[derive(thiserror::Error, Clone, Debug, Default, PartialEq, Eq)]
#[error("{}", join_issues(.issues))]
pub struct ValidationErrors {
    /// Collected issues; never empty once surfaced as an error.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Record an issue.
    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, reason));
    }

    /// `true` when no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// `true` when `field` has at least one issue.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Top-level error taxonomy used by the public API.
#[derive(thiserror::Error, Debug)]
pub enum LifeGridError {
    /// Malformed or out-of-domain request parameters.
    #[error("validation error: {0}")]
    Validation(ValidationErrors),

    /// Internal failure while building, serializing or rasterizing a document.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ValidationErrors> for LifeGridError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl LifeGridError {
    /// Build a [`LifeGridError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// HTTP-equivalent status: 400 for validation failures, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Render(_) | Self::Other(_) => 500,
        }
    }

    /// JSON response body. Internal failures are reported generically.
    pub fn response_body(&self) -> String {
        let body = match self {
            Self::Validation(errors) => serde_json::json!({
                "error": "Validation Error",
                "issues": errors.issues,
            }),
            Self::Render(_) | Self::Other(_) => serde_json::json!({
                "error": "Internal Server Error",
            }),
        };
        body.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
