//! Parent-then-dependents delete orchestration.
//!
//! Reviews reference both a pokemon and a reviewer with restricting foreign
//! keys, so deleting either parent has to remove its reviews first. The
//! batch delete and the parent delete are separate statements; a failed
//! batch aborts before the parent is touched.

use std::future::Future;

use crate::types::DbId;

/// Result of [`delete_with_dependents`] when the store itself did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// Dependents (if any) and the parent were deleted.
    Deleted { dependents: usize },
    /// The dependent batch affected no rows; the parent was left untouched.
    DependentsNotDeleted,
    /// Dependents were removed but the parent delete affected no rows.
    ParentNotDeleted { dependents: usize },
}

/// Delete `dependent_ids` as one batch, then the parent.
///
/// Both callbacks report whether their write affected any rows. The batch
/// callback is skipped entirely when there are no dependents.
pub async fn delete_with_dependents<E, D, DFut, P, PFut>(
    dependent_ids: Vec<DbId>,
    delete_dependents: D,
    delete_parent: P,
) -> Result<CascadeOutcome, E>
where
    D: FnOnce(Vec<DbId>) -> DFut,
    DFut: Future<Output = Result<bool, E>>,
    P: FnOnce() -> PFut,
    PFut: Future<Output = Result<bool, E>>,
{
    let dependents = dependent_ids.len();

    if dependents > 0 && !delete_dependents(dependent_ids).await? {
        return Ok(CascadeOutcome::DependentsNotDeleted);
    }

    if !delete_parent().await? {
        return Ok(CascadeOutcome::ParentNotDeleted { dependents });
    }

    Ok(CascadeOutcome::Deleted { dependents })
}
