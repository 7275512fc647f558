//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{AppError, ErrorCode, Problem};
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserialization failures become a generic problem carrying the rejection
/// status (400, 415 or 422). Validation failures become a 400
/// constraint-violation problem listing every failing field.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateNote {
///     #[validate(length(min = 1, message = "Text cannot be empty"))]
///     text: String,
/// }
///
/// async fn create(ValidatedJson(note): ValidatedJson<CreateNote>) -> String {
///     note.text
/// }
///
/// let app: Router = Router::new().route("/notes", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        data.validate().map_err(|e| {
            tracing::info!(
                error_code = ErrorCode::ValidationError.code(),
                fields = ?e.field_errors().keys().collect::<Vec<_>>(),
                "Request body failed validation"
            );
            Problem::from(&e).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
