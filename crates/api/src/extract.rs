//! Request body extractor that validates before the handler runs.

use axum::extract::{FromRequest, Request};
use axum::Json;
use pokedex_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// JSON body that has been deserialized and passed [`Validate`].
///
/// Unlike plain [`Json`], every rejection (bad syntax, missing fields, wrong
/// content type) is reported as a 400 through [`AppError`], so a 422 from
/// this service always means a name conflict.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CategoryDto>) -> AppResult<...> {
///     // `input.name` is known to be non-blank here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| CoreError::Validation(summarize(&errors)))?;

        Ok(Self(value))
    }
}

/// One `field: message` pair per failure, sorted by field name.
///
/// Falls back to the rule code when a rule carries no message. The
/// rejected value itself is never echoed.
fn summarize(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let reason = e.message.as_deref().unwrap_or(e.code.as_ref());
                format!("{field}: {reason}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
