//! Three-way file resolution
//!
//! Each path in the split point, the current head or the given branch is
//! compared across the three snapshots (`s`, `c`, `g`; absent = `None`):
//!
//! | split | current  | given      | action                 |
//! |-------|----------|------------|------------------------|
//! | None  | None     | present    | take given             |
//! | None  | present  | None or c  | none                   |
//! | None  | present  | ≠ c        | conflict               |
//! | s     | s        | None       | remove                 |
//! | s     | s        | ≠ s        | take given             |
//! | s     | any      | s          | none                   |
//! | s     | = g      |            | none                   |
//! | s     | ≠ s      | ≠ s, ≠ c   | conflict               |
//!
//! An absent side counts as a change, so `c` deleted against `g` modified
//! is a conflict.

use crate::artifacts::objects::commit::FileTable;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};

pub const CONFLICT_START_MARKER: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_END_MARKER: &str = ">>>>>>>\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Check out and stage the given branch's version
    TakeGiven(ObjectId),
    /// Delete and stop tracking the path
    Remove,
    /// Both sides changed the path differently
    Conflict {
        current: Option<ObjectId>,
        given: Option<ObjectId>,
    },
}

/// Decide what to do with one path; `None` leaves the current version alone
pub fn resolve_path(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    given: Option<&ObjectId>,
) -> Option<MergeAction> {
    let conflict = || MergeAction::Conflict {
        current: current.cloned(),
        given: given.cloned(),
    };

    match split {
        None => match (current, given) {
            (None, Some(given)) => Some(MergeAction::TakeGiven(given.clone())),
            (Some(current), Some(given)) if current != given => Some(conflict()),
            _ => None,
        },
        Some(split) => {
            let current_changed = current != Some(split);
            let given_changed = given != Some(split);

            match (current_changed, given_changed) {
                (_, false) => None,
                (false, true) => match given {
                    Some(given) => Some(MergeAction::TakeGiven(given.clone())),
                    None => Some(MergeAction::Remove),
                },
                (true, true) if current == given => None,
                (true, true) => Some(conflict()),
            }
        }
    }
}

/// Resolve every path appearing in any of the three snapshots
pub fn resolve_all(
    split: &FileTable,
    current: &FileTable,
    given: &FileTable,
) -> BTreeMap<String, MergeAction> {
    split
        .keys()
        .chain(current.keys())
        .chain(given.keys())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter_map(|path| {
            resolve_path(split.get(path), current.get(path), given.get(path))
                .map(|action| (path.clone(), action))
        })
        .collect()
}

/// Working file content recording both sides of a conflict
pub fn conflict_content(current: &[u8], given: &[u8]) -> Bytes {
    let mut content = Vec::with_capacity(
        CONFLICT_START_MARKER.len()
            + current.len()
            + CONFLICT_SEPARATOR.len()
            + given.len()
            + CONFLICT_END_MARKER.len(),
    );
    content.extend_from_slice(CONFLICT_START_MARKER.as_bytes());
    content.extend_from_slice(current);
    content.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    content.extend_from_slice(given);
    content.extend_from_slice(CONFLICT_END_MARKER.as_bytes());

    Bytes::from(content)
}
