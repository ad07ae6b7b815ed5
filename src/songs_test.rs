use std::collections::HashMap;
use std::fs;

use crate::error::{FreitagError, FreitagExpectedError};
use crate::songs::{RenameState, Song};
use crate::testing::MemoryTags;

fn sample_song(path: &str) -> (Song, MemoryTags) {
    let tags = MemoryTags::new(&[
        ("tracknumber", "1/2"),
        ("title", "One Love"),
        ("artist", "Bob Marley"),
        ("album", "Exodus"),
    ]);
    (Song::new(Box::new(tags.clone()), path), tags)
}

#[test]
fn test_get() {
    let (song, _) = sample_song("Bob Marley - One Love.mp3");
    assert_eq!(song.get("artist"), "Bob Marley");
    assert_eq!(song.get("tracknumber"), "01");
    assert_eq!(song.get("foo"), "");
}

#[test]
fn test_get_tracknumber_without_slash() {
    let tags = MemoryTags::new(&[("tracknumber", "12")]);
    let song = Song::new(Box::new(tags), "x.mp3");
    assert_eq!(song.get("tracknumber"), "12");
}

#[test]
fn test_set_ignores_unrecognized() {
    let (mut song, tags) = sample_song("x.mp3");

    song.set("title", "Here I Come");
    assert_eq!(tags.value("title").as_deref(), Some("Here I Come"));

    song.set("foo", "bar");
    assert_eq!(tags.value("foo"), None);
}

#[test]
fn test_update_filters() {
    let (mut song, tags) = sample_song("x.mp3");

    let mut updates = HashMap::new();
    updates.insert("artist".to_string(), "Dennis Brown".to_string());
    updates.insert("foo".to_string(), "bar".to_string());
    updates.insert("title".to_string(), String::new());
    song.update(&updates);

    assert_eq!(tags.value("artist").as_deref(), Some("Dennis Brown"));
    assert_eq!(tags.value("foo"), None);
    // the empty value was dropped, not written
    assert_eq!(tags.value("title").as_deref(), Some("One Love"));
}

#[test]
fn test_save_moves_the_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.mp3");
    let new = dir.path().join("new.mp3");
    fs::write(&old, b"x").unwrap();

    let tags = MemoryTags::default();
    let mut song = Song::new(Box::new(tags.clone()), &old);
    assert_eq!(song.rename_state(), RenameState::Clean);

    song.rename_to(&new);
    assert_eq!(song.rename_state(), RenameState::Pending);

    song.save().unwrap();
    assert_eq!(song.rename_state(), RenameState::Clean);
    assert!(new.exists());
    assert!(!old.exists());
    // tags were persisted at the path the file actually lived at
    assert_eq!(tags.persisted(), vec![old.clone()]);

    // a second save has nothing left to move
    song.save().unwrap();
    assert_eq!(tags.saves(), 2);
    assert_eq!(tags.persisted()[1], new);
    assert!(new.exists());
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.mp3");
    let new = dir.path().join("albums/exodus/01.mp3");
    fs::write(&old, b"x").unwrap();

    let mut song = Song::new(Box::new(MemoryTags::default()), &old);
    song.rename_to(&new);
    song.save().unwrap();
    assert!(new.exists());
}

#[test]
fn test_save_blocked_when_destination_exists() {
    let dir = tempfile::tempdir().unwrap();
    let old = dir.path().join("old.mp3");
    let taken = dir.path().join("taken.mp3");
    fs::write(&old, b"x").unwrap();
    fs::write(&taken, b"y").unwrap();

    let tags = MemoryTags::default();
    let mut song = Song::new(Box::new(tags.clone()), &old);
    song.rename_to(&taken);

    let err = song.save().unwrap_err();
    assert!(matches!(
        err,
        FreitagError::Expected(FreitagExpectedError::DestinationExists { .. })
    ));
    assert_eq!(song.rename_state(), RenameState::Blocked);
    // the move was skipped, but the tag write still happened
    assert!(old.exists());
    assert_eq!(tags.saves(), 1);

    // picking a free destination clears the block
    let free = dir.path().join("free.mp3");
    song.rename_to(&free);
    assert_eq!(song.rename_state(), RenameState::Pending);
    song.save().unwrap();
    assert_eq!(song.rename_state(), RenameState::Clean);
    assert!(free.exists());
    assert!(!old.exists());
}
