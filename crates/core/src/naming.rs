//! Name normalization and soft uniqueness checks.
//!
//! Names, titles and last names are unique per entity type only by
//! convention: there is no unique index. Before every create the handler
//! scans the existing rows and compares normalized values.

use validator::ValidationError;

use crate::error::CoreError;

/// Normalize a name for duplicate comparison: surrounding whitespace is
/// trimmed and the remainder is upper-cased.
///
/// ```
/// use pokedex_core::naming::normalize_name;
///
/// assert_eq!(normalize_name("  Pikachu "), "PIKACHU");
/// assert_eq!(normalize_name("Mr. Mime"), "MR. MIME");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Return the first existing value whose normalized form equals the
/// normalized `candidate`.
pub fn find_duplicate<'a, I>(existing: I, candidate: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let wanted = normalize_name(candidate);
    existing
        .into_iter()
        .find(|name| normalize_name(name) == wanted)
}

/// Fail with [`CoreError::Conflict`] when `candidate` collides with any of
/// the `existing` values.
///
/// `entity` and `field` only shape the error message, e.g.
/// `"Owner with the same last name already exists"`.
pub fn ensure_unique<'a, I>(
    entity: &str,
    field: &str,
    existing: I,
    candidate: &str,
) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    match find_duplicate(existing, candidate) {
        Some(_) => Err(CoreError::Conflict(format!(
            "{entity} with the same {field} already exists"
        ))),
        None => Ok(()),
    }
}

/// `validator` hook rejecting strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
