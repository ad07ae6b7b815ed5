/// Operations are small, independent transformations applied to one song.
/// Commands compose them in sequence and save the song once at the end.
use std::collections::HashMap;

use tracing::debug;

use crate::common::capwords;
use crate::error::Result;
use crate::songs::Song;
use crate::templates::FormatTemplate;

/// The tags rewritten by [`HumanizeOperation`].
pub const HUMANIZED_TAGS: &[&str] = &["album", "artist", "title"];

pub trait Operation {
    fn apply(&self, song: &mut Song) -> Result<()>;
}

/// Write an explicit mapping of tag values.
pub struct SetOperation {
    tags: HashMap<String, String>,
}

impl SetOperation {
    pub fn new(tags: HashMap<String, String>) -> SetOperation {
        SetOperation { tags }
    }
}

impl Operation for SetOperation {
    fn apply(&self, song: &mut Song) -> Result<()> {
        song.update(&self.tags);
        Ok(())
    }
}

/// Compute the song's new path from the format pattern. The move itself is
/// deferred to the save.
pub struct RenameOperation {
    template: FormatTemplate,
}

impl RenameOperation {
    pub fn new(template: FormatTemplate) -> RenameOperation {
        RenameOperation { template }
    }
}

impl Default for RenameOperation {
    fn default() -> RenameOperation {
        RenameOperation::new(FormatTemplate::default())
    }
}

impl Operation for RenameOperation {
    fn apply(&self, song: &mut Song) -> Result<()> {
        let dest = self.template.format(song);
        debug!("renaming {} to {}", song.path().display(), dest);
        song.rename_to(dest);
        Ok(())
    }
}

/// Parse tag values back out of the song's path and merge them in.
pub struct ExtractOperation {
    template: FormatTemplate,
}

impl ExtractOperation {
    pub fn new(template: FormatTemplate) -> ExtractOperation {
        ExtractOperation { template }
    }
}

impl Default for ExtractOperation {
    fn default() -> ExtractOperation {
        ExtractOperation::new(FormatTemplate::default())
    }
}

impl Operation for ExtractOperation {
    fn apply(&self, song: &mut Song) -> Result<()> {
        let values = self.template.extract(&song.path().to_string_lossy())?;
        debug!("extracted {} tags from {}", values.len(), song.path().display());
        song.update(&values);
        Ok(())
    }
}

/// Replace underscores with spaces and title-case every word in the album,
/// artist and title tags. Absent tags are left alone.
pub struct HumanizeOperation;

impl Operation for HumanizeOperation {
    fn apply(&self, song: &mut Song) -> Result<()> {
        for tag in HUMANIZED_TAGS {
            if song.contains(tag) {
                let humanized = capwords(&song.get(tag).replace('_', " "));
                song.set(tag, &humanized);
            }
        }
        Ok(())
    }
}
