/// The audiotags module abstracts over tag reading and writing, exposing a
/// single mapping-style interface the rest of the crate works against. It is
/// the only seam to the tag codec.
use std::path::Path;

use id3::{Tag as Id3Tag, TagLike};

use crate::error::{FreitagError, FreitagExpectedError, Result};

/// The explicit interface onto one file's tags: lookup, assignment,
/// membership, persistence.
pub trait TagMapping {
    /// The raw stored value, or the first value if the frame is multi-valued.
    fn lookup(&self, name: &str) -> Option<String>;
    fn assign(&mut self, name: &str, value: &str);
    fn contains(&self, name: &str) -> bool;
    /// Write tag changes through to the file at `path`.
    fn persist(&mut self, path: &Path) -> Result<()>;
}

// Recognized tag name -> ID3v2 frame.
fn frame_id(name: &str) -> Option<&'static str> {
    match name {
        "album" => Some("TALB"),
        "artist" => Some("TPE1"),
        "title" => Some("TIT2"),
        "discnumber" => Some("TPOS"),
        "tracknumber" => Some("TRCK"),
        "date" => Some("TDRC"),
        _ => None,
    }
}

/// ID3 tags on an MP3 file.
pub struct Id3File {
    tag: Id3Tag,
}

impl Id3File {
    /// Read the tag from `p`. A file without an existing tag yields an empty
    /// tag; an unreadable file is an expected error.
    pub fn open(p: &Path) -> Result<Id3File> {
        let tag = match Id3Tag::read_from_path(p) {
            Ok(tag) => tag,
            Err(e) if matches!(e.kind, id3::ErrorKind::NoTag) => Id3Tag::new(),
            Err(e) => {
                return Err(FreitagExpectedError::Generic(format!("failed to open {}: {}", p.display(), e)).into());
            }
        };
        Ok(Id3File { tag })
    }
}

impl TagMapping for Id3File {
    fn lookup(&self, name: &str) -> Option<String> {
        let frame = frame_id(name)?;
        let text = self.tag.get(frame)?.content().text()?;
        // Multi-valued text frames are null-separated; take the first.
        Some(text.split('\0').next().unwrap_or_default().to_string())
    }

    fn assign(&mut self, name: &str, value: &str) {
        if let Some(frame) = frame_id(name) {
            self.tag.set_text(frame, value);
        }
    }

    fn contains(&self, name: &str) -> bool {
        frame_id(name).is_some_and(|frame| self.tag.get(frame).is_some())
    }

    fn persist(&mut self, path: &Path) -> Result<()> {
        self.tag
            .write_to_path(path, id3::Version::Id3v24)
            .map_err(|e| FreitagError::Generic(format!("failed to write tags to {}: {}", path.display(), e)))
    }
}
