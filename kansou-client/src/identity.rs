use crate::{api, api::Error, prefs, BlobStore};

/// Slot for the one action waiting on the commenter to say who they are
///
/// Commenting and replying both need a name. When none is known yet, the
/// action is parked here as a continuation taking the name, and resumed once
/// the user typed it in.
pub struct NameCapture<T> {
    pending: Option<Box<dyn FnOnce(String) -> T>>,
}

impl<T> Default for NameCapture<T> {
    fn default() -> Self {
        NameCapture { pending: None }
    }
}

impl<T> NameCapture<T> {
    pub fn new() -> NameCapture<T> {
        NameCapture::default()
    }

    /// Whether an action is waiting, ie. the name prompt should be shown
    pub fn is_prompting(&self) -> bool {
        self.pending.is_some()
    }

    /// Run `action` right away if the name is known, otherwise park it
    ///
    /// A parked action replaces any previously parked one.
    pub fn run_or_defer<B, F>(&mut self, blobs: &B, action: F) -> Option<T>
    where
        B: BlobStore,
        F: 'static + FnOnce(String) -> T,
    {
        if let Some(name) = prefs::commenter_name(blobs) {
            return Some(action(name));
        }
        if self.pending.is_some() {
            tracing::debug!("replacing action already waiting for commenter name");
        }
        self.pending = Some(Box::new(action));
        None
    }

    /// Remember the commenter's name and resume the parked action, if any
    ///
    /// A blank name is refused and keeps the action parked.
    pub fn provide_name<B: BlobStore>(&mut self, blobs: &B, raw: &str) -> Result<Option<T>, Error> {
        let name = api::non_empty(raw)?;
        prefs::save_commenter_name(blobs, name)?;
        Ok(self.pending.take().map(|action| action(String::from(name))))
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
