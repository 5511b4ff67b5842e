mod blobs;
pub use blobs::{BlobStore, MemoryBlobs};

mod fuzz;

mod identity;
pub use identity::NameCapture;

pub mod keys;

pub mod prefs;
pub use prefs::Theme;

mod store;
pub use store::FeedbackStore;

pub mod api {
    pub use kansou_api::*;
}
