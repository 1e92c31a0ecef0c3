//! Content-addressed object store
//!
//! Every object lives in its own file named by its hash, under a
//! subdirectory per object type:
//!
//! - `objects/blobs/<hash>`: file contents
//! - `objects/commits/<hash>`: commit records
//! - `stage/<hash>`: copies of blobs that are currently staged
//!
//! Objects are zlib-compressed on disk and are never rewritten or deleted
//! once stored, so a hash always names the same content.

use crate::artifacts::objects::MIN_PREFIX_LENGTH;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct Database {
    /// Path to the objects directory (typically `.gitlet/objects`)
    path: Box<Path>,
    /// Path to the staged blob copies (typically `.gitlet/stage`)
    stage_path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>, stage_path: Box<Path>) -> Self {
        Database { path, stage_path }
    }

    pub fn stage_path(&self) -> &Path {
        &self.stage_path
    }

    pub fn type_path(&self, object_type: ObjectType) -> PathBuf {
        self.path.join(object_type.dir_name())
    }

    fn object_path(&self, object_type: ObjectType, object_id: &ObjectId) -> PathBuf {
        self.type_path(object_type).join(object_id.as_ref())
    }

    /// Store an object unless an object with the same id already exists
    ///
    /// # Returns
    ///
    /// The id of the stored object
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.object_path(object.object_type(), &object_id);

        if object_path.exists() {
            trace!(oid = %object_id, "object already stored");
        } else {
            self.write_object(object_path, object.serialize()?)?;
            debug!(oid = %object_id, kind = %object.object_type(), "stored object");
        }

        Ok(object_id)
    }

    /// Keep a copy of a staged blob next to the staging area
    pub fn store_staged(&self, blob: &Blob) -> anyhow::Result<ObjectId> {
        let object_id = blob.object_id()?;
        let staged_path = self.stage_path.join(object_id.as_ref());

        if !staged_path.exists() {
            self.write_object(staged_path, blob.serialize()?)?;
        }

        Ok(object_id)
    }

    /// Drop every staged blob copy
    ///
    /// The blobs themselves stay in `objects/blobs`.
    pub fn clear_stage(&self) -> anyhow::Result<()> {
        if !self.stage_path.exists() {
            return Ok(());
        }

        for entry in std::fs::read_dir(&self.stage_path)? {
            let entry = entry?;
            std::fs::remove_file(entry.path()).with_context(|| {
                format!("Unable to remove staged copy {}", entry.path().display())
            })?;
        }

        Ok(())
    }

    pub fn exists(&self, object_type: ObjectType, object_id: &ObjectId) -> bool {
        self.object_path(object_type, object_id).exists()
    }

    /// Load the raw object bytes (header included)
    pub fn load(&self, object_type: ObjectType, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.object_path(object_type, object_id);

        if !object_path.exists() {
            return Err(GitletError::ObjectNotFound(object_id.to_string()).into());
        }

        self.read_object(object_path)
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object_reader = self.parse_object_as_bytes(ObjectType::Commit, object_id)?;

        Commit::deserialize(object_reader)
    }

    /// Load a blob, preferring its staged copy
    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let staged_path = self.stage_path.join(object_id.as_ref());

        let object_content = if staged_path.exists() {
            self.read_object(staged_path)?
        } else {
            self.load(ObjectType::Blob, object_id)?
        };
        let mut object_reader = Cursor::new(object_content);
        Self::expect_type(ObjectType::Blob, &mut object_reader)?;

        Blob::deserialize(object_reader)
    }

    fn parse_object_as_bytes(
        &self,
        object_type: ObjectType,
        object_id: &ObjectId,
    ) -> anyhow::Result<impl BufRead> {
        let object_content = self.load(object_type, object_id)?;
        let mut object_reader = Cursor::new(object_content);
        Self::expect_type(object_type, &mut object_reader)?;

        Ok(object_reader)
    }

    fn expect_type(expected: ObjectType, reader: &mut impl BufRead) -> anyhow::Result<()> {
        let object_type = ObjectType::parse_object_type(reader)?;

        if object_type != expected {
            anyhow::bail!("object is a {}, not a {}", object_type, expected);
        }

        Ok(())
    }

    /// Ids of every stored object of the given type, in directory order
    pub fn list_objects(&self, object_type: ObjectType) -> anyhow::Result<Vec<ObjectId>> {
        let type_path = self.type_path(object_type);

        if !type_path.is_dir() {
            return Ok(Vec::new());
        }

        Ok(std::fs::read_dir(&type_path)
            .with_context(|| format!("Unable to list {}", type_path.display()))?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| ObjectId::try_parse(entry.file_name().to_string_lossy().into()).ok())
            .collect())
    }

    /// Find all objects of a type whose id starts with the given prefix.
    ///
    /// Used to resolve abbreviated ids to their full form. An empty result
    /// means no match; more than one means the prefix is ambiguous.
    pub fn find_objects_by_prefix(
        &self,
        object_type: ObjectType,
        prefix: &str,
    ) -> anyhow::Result<Vec<ObjectId>> {
        if prefix.len() < MIN_PREFIX_LENGTH || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Vec::new());
        }

        Ok(self
            .list_objects(object_type)?
            .into_iter()
            .filter(|oid| oid.starts_with(prefix))
            .collect())
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        // read the object file
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        // decompress the object content
        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        // compress the object content
        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    pub(crate) fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
