use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use crate::api::Error;

/// String-to-string persistent storage, shaped after the browser's localStorage
pub trait BlobStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// In-memory blob store
///
/// Clones share the same contents, so a test can keep a handle on the blobs
/// it handed over to a store.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobs {
    blobs: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryBlobs {
    pub fn new() -> MemoryBlobs {
        MemoryBlobs::default()
    }

    /// While read-only, every write fails like a full localStorage would
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

impl BlobStore for MemoryBlobs {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        if self.read_only.get() {
            return Err(Error::Storage(format!("blob store is read-only, refused {key:?}")));
        }
        self.blobs
            .borrow_mut()
            .insert(String::from(key), String::from(value));
        Ok(())
    }
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_theme<B: BlobStore>(blobs: B, theme: &str) -> Result<(), Error> {
        blobs.set("theme", theme)
    }

    #[test]
    fn clones_share_contents_and_read_only_state() {
        let blobs = MemoryBlobs::new();
        let handle = blobs.clone();
        assert!(handle.is_empty());

        save_theme(&blobs, "dark").unwrap();
        assert_eq!(handle.get("theme").as_deref(), Some("dark"));

        handle.set_read_only(true);
        assert!(matches!(save_theme(&blobs, "light"), Err(Error::Storage(_))));
        assert_eq!(blobs.get("theme").as_deref(), Some("dark"));

        handle.set_read_only(false);
        blobs.set("theme", "light").unwrap();
        assert_eq!(handle.get("theme").as_deref(), Some("light"));
    }
}
