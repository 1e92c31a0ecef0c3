//! Commit object
//!
//! Commits are immutable snapshots of the tracked files. They contain:
//! - Parent commit ID(s) (none for the root, two for merges)
//! - A timestamp
//! - The file table mapping each tracked path to its blob
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! date <timestamp> <timezone>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object::{Object, Packable, Unpackable, with_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, SubsecRound};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Tracked paths mapped to the blob holding their content
pub type FileTable = BTreeMap<String, ObjectId>;

/// Message of the commit every repository starts from
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Environment variable overriding the timestamp of new commits
pub const DATE_ENV_VAR: &str = "GITLET_DATE";

const READABLE_DATE_FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";

/// Commit object
///
/// The object id is computed once, when the commit is built or read, and
/// cached alongside the content it was derived from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the root commit, two for merge commits)
    parents: Vec<ObjectId>,
    /// Time the commit was recorded
    timestamp: DateTime<FixedOffset>,
    /// Snapshot of every tracked path
    files: FileTable,
    /// Commit message
    message: String,
    oid: ObjectId,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        timestamp: DateTime<FixedOffset>,
        files: FileTable,
        message: String,
    ) -> Self {
        let timestamp = timestamp.trunc_subsecs(0);
        let encoded = Self::encode(&parents, &timestamp, &files, &message);
        let oid = ObjectId::digest(&with_header(ObjectType::Commit, encoded.as_bytes()));

        Commit {
            parents,
            timestamp,
            files,
            message,
            oid,
        }
    }

    /// The commit every repository is initialized with
    pub fn root() -> Self {
        let epoch = DateTime::UNIX_EPOCH.fixed_offset();

        Self::new(
            Vec::new(),
            epoch,
            FileTable::new(),
            ROOT_COMMIT_MESSAGE.to_string(),
        )
    }

    /// Timestamp for a new commit: `GITLET_DATE` when set, otherwise now
    ///
    /// Accepts RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
    pub fn timestamp_from_env() -> DateTime<FixedOffset> {
        std::env::var(DATE_ENV_VAR)
            .ok()
            .and_then(|date_str| {
                DateTime::parse_from_rfc2822(&date_str)
                    .or_else(|_| DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                    .ok()
            })
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }

    fn encode(
        parents: &[ObjectId],
        timestamp: &DateTime<FixedOffset>,
        files: &FileTable,
        message: &str,
    ) -> String {
        let mut lines = vec![];

        for parent in parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!(
            "date {} {}",
            timestamp.timestamp(),
            timestamp.format("%z")
        ));
        for (path, blob_oid) in files {
            lines.push(format!("file {} {}", blob_oid.as_ref(), path));
        }
        lines.push(String::new());
        lines.push(message.to_string());

        lines.join("\n")
    }

    fn parse_date(value: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        let (seconds, timezone) = value
            .split_once(' ')
            .context("Invalid commit object: invalid date line")?;
        let seconds = seconds
            .parse::<i64>()
            .context("Invalid commit object: invalid timestamp")?;
        let offset = *DateTime::parse_from_str(
            &format!("1970-01-01 00:00:00 {timezone}"),
            "%Y-%m-%d %H:%M:%S %z",
        )
        .context("Invalid commit object: invalid timezone")?
        .offset();

        DateTime::from_timestamp(seconds, 0)
            .map(|datetime| datetime.with_timezone(&offset))
            .context("Invalid commit object: timestamp out of range")
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn files(&self) -> &FileTable {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&ObjectId> {
        self.files.get(path)
    }

    pub fn tracks(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// First parent, the one history is followed through
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(READABLE_DATE_FORMAT).to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let encoded = Self::encode(&self.parents, &self.timestamp, &self.files, &self.message);

        Ok(with_header(self.object_type(), encoded.as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let oid = ObjectId::digest(&with_header(ObjectType::Commit, &content));

        let content = String::from_utf8(content)?;
        let (head, message) = content
            .split_once("\n\n")
            .context("Invalid commit object: missing message separator")?;

        let mut parents = Vec::new();
        let mut timestamp = None;
        let mut files = FileTable::new();

        for line in head.lines() {
            if let Some(parent_oid) = line.strip_prefix("parent ") {
                parents.push(ObjectId::try_parse(parent_oid.to_string())?);
            } else if let Some(date) = line.strip_prefix("date ") {
                timestamp = Some(Self::parse_date(date)?);
            } else if let Some(entry) = line.strip_prefix("file ") {
                let (blob_oid, path) = entry
                    .split_once(' ')
                    .context("Invalid commit object: invalid file line")?;
                files.insert(path.to_string(), ObjectId::try_parse(blob_oid.to_string())?);
            } else {
                anyhow::bail!("Invalid commit object: unexpected line {line:?}");
            }
        }

        Ok(Commit {
            parents,
            timestamp: timestamp.context("Invalid commit object: missing date line")?,
            files,
            message: message.to_string(),
            oid,
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(self.oid.clone())
    }
}
