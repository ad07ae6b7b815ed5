/// The commands module is the batch glue between the CLI and the library:
/// open each file as a song, apply the requested operations, save, and keep
/// going when a single item fails.
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, warn};

use crate::audiotags::Id3File;
use crate::error::{FreitagError, Result};
use crate::operations::Operation;
use crate::songs::Song;
use crate::templates::FormatTemplate;

/// Per-batch outcome counts. Any failed item maps to a failing exit code.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.total - self.failed
    }

    pub fn exit_code(&self) -> u8 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }
}

/// Open one file as a [`Song`] backed by its ID3 tag.
pub fn open_song(path: &Path) -> Result<Song> {
    let tags = Id3File::open(path)?;
    Ok(Song::new(Box::new(tags), path))
}

/// Print the formatted name of every file, in input order.
pub fn get(files: &[PathBuf], template: &FormatTemplate) -> BatchSummary {
    let mut summary = BatchSummary {
        total: files.len(),
        ..Default::default()
    };
    for file in files {
        match open_song(file) {
            Ok(song) => println!("{}", template.format(&song)),
            Err(e) => {
                report(file, &e);
                summary.failed += 1;
            }
        }
    }
    summary
}

/// Apply `operations` in order to every file, saving each song once at the
/// end. A failing item is reported and the batch moves on.
pub fn apply(files: &[PathBuf], operations: &[Box<dyn Operation>]) -> BatchSummary {
    let mut summary = BatchSummary {
        total: files.len(),
        ..Default::default()
    };
    let bar = progress_bar(files.len());
    for file in files {
        if let Err(e) = process(file, operations) {
            report(file, &e);
            summary.failed += 1;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    summary
}

fn process(file: &Path, operations: &[Box<dyn Operation>]) -> Result<()> {
    let mut song = open_song(file)?;
    for operation in operations {
        operation.apply(&mut song)?;
    }
    song.save()
}

fn report(file: &Path, err: &FreitagError) {
    match err {
        FreitagError::Expected(e) => warn!("{}: {}", file.display(), e),
        e => error!("{}: {}", file.display(), e),
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    bar
}
