//! Anchor-driven reconciliation of two id sequences into diff items.

use super::lcs::{compute_lcs_with, TieBreak};
use super::model::{DiffItem, DiffResult};

/// Changes collected since the last anchor
///
/// Filled while the cursors advance towards the next anchor and drained at
/// the anchor (or at the end): deletions first, then additions, each in
/// sequence order.
#[derive(Default)]
struct PendingRun {
    deletions: Vec<usize>,
    additions: Vec<usize>,
}

impl PendingRun {
    fn flush<I, M, F>(
        &mut self,
        parent_ids: &[I],
        current_ids: &[I],
        lookup: &mut F,
        result: &mut DiffResult<M>,
    ) where
        F: FnMut(&I) -> Option<M>,
    {
        for idx in self.deletions.drain(..) {
            if let Some(old_message) = lookup(&parent_ids[idx]) {
                result.push(DiffItem::Deleted { old_message });
            }
        }
        for idx in self.additions.drain(..) {
            if let Some(new_message) = lookup(&current_ids[idx]) {
                result.push(DiffItem::Added { new_message });
            }
        }
    }
}

/// Diff the parent request's message ids against the current request's
///
/// `lookup` resolves an id to its message; ids it cannot resolve are
/// dropped from the items and from the summary.
pub fn reconcile<I, M, F>(parent_ids: &[I], current_ids: &[I], lookup: F) -> DiffResult<M>
where
    I: PartialEq,
    M: Clone,
    F: FnMut(&I) -> Option<M>,
{
    reconcile_with(parent_ids, current_ids, TieBreak::default(), lookup)
}

/// [`reconcile`] with an explicit LCS tie-break policy
pub fn reconcile_with<I, M, F>(
    parent_ids: &[I],
    current_ids: &[I],
    tie_break: TieBreak,
    mut lookup: F,
) -> DiffResult<M>
where
    I: PartialEq,
    M: Clone,
    F: FnMut(&I) -> Option<M>,
{
    let mut anchors = compute_lcs_with(parent_ids, current_ids, tie_break)
        .into_iter()
        .peekable();
    let mut result = DiffResult::new();
    let mut pending = PendingRun::default();
    let mut parent_idx = 0;
    let mut current_idx = 0;

    while parent_idx < parent_ids.len() || current_idx < current_ids.len() {
        match anchors.peek().copied() {
            Some((p, c)) if p == parent_idx && c == current_idx => {
                pending.flush(parent_ids, current_ids, &mut lookup, &mut result);

                if let Some(message) = lookup(&parent_ids[parent_idx]) {
                    result.push(DiffItem::Unchanged {
                        old_message: message.clone(),
                        new_message: message,
                    });
                }
                parent_idx += 1;
                current_idx += 1;
                anchors.next();
            }
            next => {
                // Past the last anchor, run both cursors to the end
                let (next_parent, next_current) =
                    next.unwrap_or((parent_ids.len(), current_ids.len()));

                pending.deletions.extend(parent_idx..next_parent);
                parent_idx = parent_idx.max(next_parent);

                pending.additions.extend(current_idx..next_current);
                current_idx = current_idx.max(next_current);
            }
        }
    }

    pending.flush(parent_ids, current_ids, &mut lookup, &mut result);
    result
}

/// Diff for a request with no parent: every resolvable id is an addition
pub fn reconcile_first_request<I, M, F>(current_ids: &[I], mut lookup: F) -> DiffResult<M>
where
    F: FnMut(&I) -> Option<M>,
{
    let mut result = DiffResult::new();
    for id in current_ids {
        if let Some(new_message) = lookup(id) {
            result.push(DiffItem::Added { new_message });
        }
    }
    result
}

/// Diff a request against its parent, or as a first request when there is
/// no parent
pub fn compute_message_diff<I, M, F>(
    parent_ids: Option<&[I]>,
    current_ids: &[I],
    lookup: F,
) -> DiffResult<M>
where
    I: PartialEq,
    M: Clone,
    F: FnMut(&I) -> Option<M>,
{
    match parent_ids {
        Some(parent_ids) => reconcile(parent_ids, current_ids, lookup),
        None => reconcile_first_request(current_ids, lookup),
    }
}
