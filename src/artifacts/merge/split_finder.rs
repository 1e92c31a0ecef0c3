//! Split point finder for merges
//!
//! The split point of two commits is the merge base: the commit where their
//! histories diverged. It is found by walking the first-parent chain of each
//! side and taking the first commit on the current side's chain that the
//! given side's chain also reaches.
//!
//! ## First parents only
//!
//! Second parents of merge commits are never followed. On histories that
//! contain merges this yields the first common first-parent ancestor, which
//! can be older than the true lowest common ancestor. Merge results on such
//! histories depend on this choice, so it is kept deliberately.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let finder = SplitFinder::new(|oid| Ok(repository.load_commit(oid)?.parent().cloned()));
//!
//! let split = finder.find_split_point(&head_oid, &given_oid)?;
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_CURRENT = 0b01;
        const VISITED_FROM_GIVEN = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_CURRENT.bits() | Self::VISITED_FROM_GIVEN.bits();
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_CURRENT) {
            flags.push("CURRENT");
        }
        if self.contains(VisitState::VISITED_FROM_GIVEN) {
            flags.push("GIVEN");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// Finds split points given a way to look up a commit's first parent
pub struct SplitFinder<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    first_parent: F,
}

impl<F> SplitFinder<F>
where
    F: Fn(&ObjectId) -> anyhow::Result<Option<ObjectId>>,
{
    pub fn new(first_parent: F) -> Self {
        Self { first_parent }
    }

    /// The first-parent chain starting at `start`, `start` included
    pub fn ancestors_of(&self, start: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let mut chain = vec![start.clone()];
        let mut seen = HashSet::from([start.clone()]);

        while let Some(parent) = (self.first_parent)(&chain[chain.len() - 1])? {
            // a cycle would mean a corrupt store
            if !seen.insert(parent.clone()) {
                break;
            }
            chain.push(parent);
        }

        Ok(chain)
    }

    /// `None` when the two chains share no commit
    pub fn find_split_point(
        &self,
        current: &ObjectId,
        given: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut states = HashMap::<ObjectId, VisitState>::new();

        let current_chain = self.ancestors_of(current)?;
        for oid in &current_chain {
            *states.entry(oid.clone()).or_insert(VisitState::NONE) |=
                VisitState::VISITED_FROM_CURRENT;
        }

        for oid in self.ancestors_of(given)? {
            *states.entry(oid).or_insert(VisitState::NONE) |= VisitState::VISITED_FROM_GIVEN;
        }

        let split = current_chain
            .into_iter()
            .find(|oid| states.get(oid) == Some(&VisitState::VISITED_FROM_BOTH));

        debug!(
            current = %current.to_short_oid(),
            given = %given.to_short_oid(),
            split = ?split.as_ref().map(ObjectId::to_short_oid),
            "split point"
        );

        Ok(split)
    }
}
