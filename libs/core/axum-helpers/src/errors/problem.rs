//! RFC 7807 problem details, including the constraint-violation flavour used
//! for request validation failures.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Content type of every problem response.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Default problem type when no more specific URI applies.
pub const ABOUT_BLANK: &str = "about:blank";

/// Problem type reported for field validation failures.
pub const CONSTRAINT_VIOLATION_TYPE: &str =
    "https://zalando.github.io/problem/constraint-violation";

pub const CONSTRAINT_VIOLATION_TITLE: &str = "Constraint Violation";

fn serialize_status<S>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// Problem details body.
///
/// ```json
/// {
///   "type": "https://zalando.github.io/problem/constraint-violation",
///   "title": "Constraint Violation",
///   "status": 400,
///   "violations": [{ "field": "text", "message": "Text cannot be empty" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem")]
#[must_use]
pub struct Problem {
    /// URI identifying the problem type
    #[serde(rename = "type")]
    pub type_url: String,
    /// Short summary of the problem type
    pub title: String,
    /// HTTP status code of this occurrence
    #[serde(serialize_with = "serialize_status", deserialize_with = "deserialize_status")]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// Explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Field-level failures, present on constraint violations only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct Violation {
    /// Field path, e.g. `text` or `tags[0].key`
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flatten validator output into violations, sorted by field then message.
    ///
    /// Nested structs become `parent.child`, list items `parent[i].child`.
    /// Errors without a message fall back to their validator code.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut violations = Vec::new();
        collect_violations(errors, None, &mut violations);
        violations.sort();
        violations
    }
}

fn collect_violations(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    Violation::new(path.clone(), message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_violations(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_violations(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

impl Problem {
    /// Generic problem for `status`, titled with its canonical reason phrase.
    pub fn new(status: StatusCode) -> Self {
        Self {
            type_url: ABOUT_BLANK.to_string(),
            title: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            status,
            detail: None,
            violations: None,
        }
    }

    /// 400 constraint-violation problem carrying `violations`.
    pub fn constraint_violation(violations: Vec<Violation>) -> Self {
        Self {
            type_url: CONSTRAINT_VIOLATION_TYPE.to_string(),
            title: CONSTRAINT_VIOLATION_TITLE.to_string(),
            status: StatusCode::BAD_REQUEST,
            detail: None,
            violations: Some(violations),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<&ValidationErrors> for Problem {
    fn from(errors: &ValidationErrors) -> Self {
        Problem::constraint_violation(Violation::from_validation_errors(errors))
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut response = Json(self).into_response();
        *response.status_mut() = status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        response
    }
}
