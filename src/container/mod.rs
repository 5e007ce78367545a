//! The container shells: [`List`], [`Dictionary`], [`Queue`], [`Stack`],
//! and the read-only view [`ReadOnlyList`].
//!
//! Each container owns a contiguous backing sequence (two index-aligned
//! sequences for [`Dictionary`]) that is never exposed mutably. Valid
//! indices are exactly `0..len` after every operation completes: removal
//! re-packs the backing sequence, so there are never gaps.
//!
//! Every index-taking operation validates before acting — first the bound
//! check, then the mutation — so a returned error guarantees nothing was
//! written. All containers implement
//! [`Enumerable`](crate::enumerate::Enumerable) and therefore answer the
//! full [`Query`](crate::query::Query) operator set.

mod dictionary;
mod list;
mod queue;
mod read_only;
mod stack;

pub use dictionary::Dictionary;
pub use list::List;
pub use queue::Queue;
pub use read_only::ReadOnlyList;
pub use stack::Stack;

use crate::error::CollectionError;

/// Copies `elements` into `target` starting at `index`, leaving everything
/// before `index` untouched.
///
/// The shared validation step behind every container's `copy_to`: the
/// whole write must fit (`index + elements.len() <= target.len()`) or
/// nothing is written.
pub(crate) fn copy_into<T: Clone>(
    elements: &[T],
    target: &mut [T],
    index: usize,
) -> Result<(), CollectionError> {
    let end = index
        .checked_add(elements.len())
        .ok_or_else(|| CollectionError::out_of_range("index", index, target.len()))?;
    if end > target.len() {
        return Err(CollectionError::out_of_range("index", index, target.len()));
    }
    target[index..end].clone_from_slice(elements);
    Ok(())
}
