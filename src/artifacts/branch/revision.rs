use crate::areas::refs::BranchTable;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::{MIN_PREFIX_LENGTH, OBJECT_ID_LENGTH};
use crate::errors::GitletError;
use anyhow::Context;

/// A revision expression naming a commit.
///
/// Supported forms:
/// - Branch names: `master`, `feature/new-feature`
/// - `HEAD` and its alias `@`: the tip of the current branch
/// - Commit ids, full or abbreviated to at least 4 hex characters (tried
///   when no branch has that name)
/// - Parent notation: `<revision>^` (e.g., `master^`, `HEAD^`)
/// - Ancestor notation: `<revision>~<n>` (e.g., `master~3`, `abc123~2`)
///
/// Only first parents are ever followed.
#[derive(Debug, Clone)]
pub enum Revision {
    /// A branch name, `HEAD`, or potentially a commit id prefix
    Ref(BranchName),
    /// The Nth first-parent ancestor of a revision (e.g., HEAD~3)
    Ancestor(Box<Revision>, usize),
    /// The first parent of a revision (e.g., HEAD^)
    Parent(Box<Revision>),
}

impl Revision {
    pub fn resolve(&self, repository: &Repository, refs: &BranchTable) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Ref(branch_name) if branch_name.is_head() => Ok(refs.head_oid()?.clone()),
            Revision::Ref(branch_name) => match refs.read_branch(branch_name.as_ref()) {
                Some(oid) => Ok(oid.clone()),
                None => Self::resolve_oid(branch_name.as_ref(), repository),
            },
            Revision::Parent(base_revision) => {
                let oid = base_revision.resolve(repository, refs)?;
                Self::resolve_commit_parent(&oid, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository, refs)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(&oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_commit_parent(oid: &ObjectId, repository: &Repository) -> anyhow::Result<ObjectId> {
        let commit = repository.load_commit(oid)?;

        commit.parent().cloned().ok_or_else(|| {
            GitletError::AmbiguousOrNotFound(format!("{}^", oid.to_short_oid())).into()
        })
    }

    fn resolve_oid(oid_str: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        if !Self::looks_like_oid(oid_str) {
            anyhow::bail!(GitletError::AmbiguousOrNotFound(oid_str.to_string()));
        }

        let matches = repository
            .database()
            .find_objects_by_prefix(ObjectType::Commit, oid_str)?;

        match matches.as_slice() {
            [oid] => Ok(oid.clone()),
            _ => Err(GitletError::AmbiguousOrNotFound(oid_str.to_string()).into()),
        }
    }

    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_regex = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_regex = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;

        if let Some(caps) = parent_regex.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(caps) = ancestor_regex.captures(revision) {
            let generations: usize = caps[2]
                .parse()
                .with_context(|| format!("failed to parse generations in revision: {revision}"))?;
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else {
            let resolved_name = *REF_ALIASES.get(revision).unwrap_or(&revision);
            let branch_name = BranchName::try_parse(resolved_name.to_string())
                .map_err(|_| GitletError::AmbiguousOrNotFound(revision.to_string()))?;

            Ok(Revision::Ref(branch_name))
        }
    }

    fn looks_like_oid(s: &str) -> bool {
        s.len() >= MIN_PREFIX_LENGTH
            && s.len() <= OBJECT_ID_LENGTH
            && s.chars().all(|c| c.is_ascii_hexdigit())
    }
}
