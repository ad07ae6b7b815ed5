/// The songs module holds the Song entity: one media item's live tag record,
/// its current path, and the path it was last persisted under. Operations
/// mutate a Song in place; `save` persists it exactly once.
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::audiotags::TagMapping;
use crate::common::is_supported_tag;
use crate::error::{FreitagExpectedError, Result};
use crate::templates::FieldLookup;

/// Where the song's current path stands relative to its last-persisted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameState {
    /// Paths agree; nothing to move.
    Clean,
    /// A rename is recorded and runs on the next save.
    Pending,
    /// The last save found the destination occupied and skipped the move.
    Blocked,
}

pub struct Song {
    tags: Box<dyn TagMapping>,
    path: PathBuf,
    prev_path: PathBuf,
    blocked: bool,
}

impl Song {
    pub fn new(tags: Box<dyn TagMapping>, path: impl Into<PathBuf>) -> Song {
        let path = path.into();
        Song {
            tags,
            prev_path: path.clone(),
            path,
            blocked: false,
        }
    }

    /// The current (possibly pending) path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rename_state(&self) -> RenameState {
        if self.path == self.prev_path {
            RenameState::Clean
        } else if self.blocked {
            RenameState::Blocked
        } else {
            RenameState::Pending
        }
    }

    /// Record `dest` as the song's new path. The move itself is deferred to
    /// the next `save`.
    pub fn rename_to(&mut self, dest: impl Into<PathBuf>) {
        self.path = dest.into();
        self.blocked = false;
    }

    /// The value for `name`, or the empty string when the tag is absent or
    /// unrecognized. Tracknumbers come back disc-relative and zero-padded to
    /// two digits.
    pub fn get(&self, name: &str) -> String {
        let Some(value) = self.tags.lookup(name) else {
            return String::new();
        };
        if name == "tracknumber" {
            fix_tracknumber(&value)
        } else {
            value
        }
    }

    /// Raw write. Unrecognized names are dropped.
    pub fn set(&mut self, name: &str, value: &str) {
        if is_supported_tag(name) {
            self.tags.assign(name, value);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    /// Merge `tags` into the song, keeping only recognized names with
    /// non-empty values.
    pub fn update(&mut self, tags: &HashMap<String, String>) {
        for (name, value) in tags {
            if is_supported_tag(name) && !value.is_empty() {
                self.tags.assign(name, value);
            }
        }
    }

    /// Persist tag changes, then move the file if a rename is pending and the
    /// destination is free. An occupied destination skips the move and
    /// surfaces as [`FreitagExpectedError::DestinationExists`].
    pub fn save(&mut self) -> Result<()> {
        self.tags.persist(&self.prev_path)?;
        self.finish_rename()
    }

    fn finish_rename(&mut self) -> Result<()> {
        if self.path == self.prev_path {
            return Ok(());
        }
        if self.path.exists() {
            self.blocked = true;
            return Err(FreitagExpectedError::DestinationExists { path: self.path.clone() }.into());
        }
        if let Some(parent) = self.path.parent() {
            // Failure here means the directory already exists, or the move
            // below will fail with the better error.
            let _ = fs::create_dir_all(parent);
        }
        debug!("moving {} to {}", self.prev_path.display(), self.path.display());
        fs::rename(&self.prev_path, &self.path)?;
        self.prev_path = self.path.clone();
        self.blocked = false;
        Ok(())
    }
}

impl FieldLookup for Song {
    fn field(&self, name: &str) -> String {
        self.get(name)
    }
}

// Strip the slash and everything after it, then zero-pad to two digits.
fn fix_tracknumber(raw: &str) -> String {
    format!("{:0>2}", raw.split('/').next().unwrap_or_default())
}
