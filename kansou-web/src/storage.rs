use gloo_storage::{LocalStorage, Storage};
use kansou_client::{api::Error, BlobStore};

/// The browser's localStorage, holding raw (not JSON-quoted) strings
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalBlobs;

impl BlobStore for LocalBlobs {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(?err, key, "failed reading from local storage");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| Error::Storage(format!("{err:?}")))
    }
}
