/// Test fixtures shared by the unit and integration tests: an in-memory
/// TagMapping so songs and operations can be exercised without real audio
/// files.
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::audiotags::TagMapping;
use crate::error::Result;

#[derive(Debug, Default)]
struct MemoryState {
    values: HashMap<String, String>,
    persisted: Vec<PathBuf>,
}

/// Clones share state, so a test can hand one copy to a Song and keep another
/// to inspect afterwards.
#[derive(Debug, Default, Clone)]
pub struct MemoryTags {
    inner: Rc<RefCell<MemoryState>>,
}

impl MemoryTags {
    pub fn new(values: &[(&str, &str)]) -> MemoryTags {
        let tags = MemoryTags::default();
        for (name, value) in values {
            tags.inner.borrow_mut().values.insert(name.to_string(), value.to_string());
        }
        tags
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.inner.borrow().values.get(name).cloned()
    }

    /// Paths `persist` was called with, in order.
    pub fn persisted(&self) -> Vec<PathBuf> {
        self.inner.borrow().persisted.clone()
    }

    pub fn saves(&self) -> usize {
        self.inner.borrow().persisted.len()
    }
}

impl TagMapping for MemoryTags {
    fn lookup(&self, name: &str) -> Option<String> {
        self.inner.borrow().values.get(name).cloned()
    }

    fn assign(&mut self, name: &str, value: &str) {
        self.inner.borrow_mut().values.insert(name.to_string(), value.to_string());
    }

    fn contains(&self, name: &str) -> bool {
        self.inner.borrow().values.contains_key(name)
    }

    fn persist(&mut self, path: &Path) -> Result<()> {
        self.inner.borrow_mut().persisted.push(path.to_path_buf());
        Ok(())
    }
}
