use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    Required,
    Invalid,
    TooLong,
    /// The identifier is already used by another rating.
    IdTaken,
    /// The author already has an active rating on this target.
    Duplicate,
    /// The field references a row that does not exist.
    RefNotFound,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Required => "is required",
            Self::Invalid => "is invalid",
            Self::TooLong => "is too long",
            Self::IdTaken => "is already taken",
            Self::Duplicate => "is duplicated",
            Self::RefNotFound => "references a missing record",
        };
        f.write_str(text)
    }
}

/// Field name -> reason, collected over one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError(BTreeMap<&'static str, Reason>);

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, reason: Reason) -> Self {
        let mut errors = Self::new();
        errors.add(field, reason);
        errors
    }

    /// Records a failure; the first reason reported for a field wins.
    pub fn add(&mut self, field: &'static str, reason: Reason) {
        self.0.entry(field).or_insert(reason);
    }

    pub fn get(&self, field: &str) -> Option<Reason> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), RatingError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(RatingError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reason) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", field, reason)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    #[error("rating not found")]
    NotFound,

    /// Details stay in the logs.
    #[error("internal error")]
    Internal(String),
}

impl RatingError {
    pub fn internal(err: impl fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationError> for RatingError {
    fn from(errors: ValidationError) -> Self {
        Self::Validation(errors)
    }
}

impl ResponseError for RatingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(errors) => {
                let conflict = errors
                    .0
                    .values()
                    .any(|reason| matches!(reason, Reason::IdTaken | Reason::Duplicate));
                if conflict {
                    StatusCode::CONFLICT
                } else {
                    StatusCode::BAD_REQUEST
                }
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            Self::Validation(errors) => json!({
                "status": "Error",
                "code": status.as_u16(),
                "message": "Validation error",
                "errors": errors,
            }),
            _ => json!({
                "status": "Error",
                "code": status.as_u16(),
                "message": self.to_string(),
            }),
        };

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_reason_per_field_is_kept() {
        let mut errors = ValidationError::new();
        errors.add("target", Reason::Required);
        errors.add("target", Reason::Invalid);
        errors.add("score", Reason::Required);

        assert_eq!(Some(Reason::Required), errors.get("target"));
        assert_eq!(2, errors.len());
        assert_eq!("score is required; target is required", errors.to_string());
    }

    #[test]
    fn internal_error_hides_details() {
        let err = RatingError::internal("relation \"rating\" does not exist");
        assert_eq!("internal error", err.to_string());
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status_code());
    }

    #[test]
    fn duplicates_map_to_conflict() {
        let err = RatingError::from(ValidationError::single("target", Reason::Duplicate));
        assert_eq!(StatusCode::CONFLICT, err.status_code());

        let err = RatingError::from(ValidationError::single("user_id", Reason::RefNotFound));
        assert_eq!(StatusCode::BAD_REQUEST, err.status_code());
    }
}
