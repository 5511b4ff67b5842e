use std::collections::HashSet;

use anyhow::Context;

use crate::{
    api::{
        self, Comment, CommentId, Error, Feedback, FeedbackId, Filter, NewFeedback, Reply, Time,
    },
    keys, BlobStore,
};

/// Owner of the feedback collection, kept in sync with its blob on every change
pub struct FeedbackStore<B> {
    blobs: B,

    /// Newest first
    feedback: Vec<Feedback>,

    clock: Box<dyn Fn() -> Time>,
}

/// Smallest id that is not older than `now` and above every id in `taken`
///
/// Once `i64::MAX` is taken there is nothing above it, so the largest free id
/// below it is used instead.
fn next_id(now: &Time, taken: impl Iterator<Item = i64>) -> i64 {
    let taken = taken.collect::<HashSet<_>>();
    let candidate = api::millis(now);
    let max = match taken.iter().max() {
        Some(&max) if candidate <= max => max,
        _ => return candidate,
    };
    max.checked_add(1).unwrap_or_else(|| {
        tracing::warn!("ids are exhausted upwards, reusing a free lower one");
        // at most `taken.len()` ids are skipped
        (i64::MIN..max)
            .rev()
            .find(|id| !taken.contains(id))
            .unwrap_or(i64::MIN)
    })
}

fn comment_ids(f: &Feedback) -> impl Iterator<Item = i64> + '_ {
    f.comments
        .iter()
        .flat_map(|c| std::iter::once(c.id.0).chain(c.replies.iter().map(|r| r.id.0)))
}

fn find_mut(all: &mut [Feedback], id: FeedbackId) -> Result<&mut Feedback, Error> {
    all.iter_mut()
        .find(|f| f.id == id)
        .ok_or(Error::FeedbackNotFound(id))
}

fn find_comment_mut(
    all: &mut [Feedback],
    id: FeedbackId,
    index: usize,
) -> Result<&mut Comment, Error> {
    find_mut(all, id)?
        .comments
        .get_mut(index)
        .ok_or(Error::CommentNotFound {
            feedback: id,
            index,
        })
}

fn read_blob<B: BlobStore>(blobs: &B) -> anyhow::Result<Vec<Feedback>> {
    match blobs.get(keys::FEEDBACK) {
        None => Ok(Vec::new()),
        Some(blob) => serde_json::from_str(&blob).context("parsing stored feedback"),
    }
}

impl<B: BlobStore> FeedbackStore<B> {
    /// Load the collection from `blobs`
    ///
    /// An unreadable blob is logged and replaced with an empty collection,
    /// it will be overwritten by the next change.
    pub fn load(blobs: B) -> FeedbackStore<B> {
        let mut this = FeedbackStore {
            blobs,
            feedback: Vec::new(),
            clock: Box::new(chrono::Utc::now),
        };
        this.reload();
        this
    }

    pub fn with_clock(mut self, clock: impl Fn() -> Time + 'static) -> FeedbackStore<B> {
        self.clock = Box::new(clock);
        self
    }

    pub fn reload(&mut self) {
        self.feedback = read_blob(&self.blobs).unwrap_or_else(|err| {
            tracing::warn!(?err, "stored feedback is invalid, starting from scratch");
            Vec::new()
        });
        tracing::debug!(num_feedback = self.feedback.len(), "loaded feedback");
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    pub fn all(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn len(&self) -> usize {
        self.feedback.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty()
    }

    pub fn get(&self, id: FeedbackId) -> Option<&Feedback> {
        self.feedback.iter().find(|f| f.id == id)
    }

    /// Apply `op` to a copy of the collection, and keep it only once it is stored
    fn commit<R>(
        &mut self,
        op: impl FnOnce(&mut Vec<Feedback>) -> Result<R, Error>,
    ) -> Result<R, Error> {
        let mut next = self.feedback.clone();
        let res = op(&mut next)?;
        let blob = serde_json::to_string(&next).map_err(Error::storage)?;
        if let Err(err) = self.blobs.set(keys::FEEDBACK, &blob) {
            tracing::error!(?err, "failed saving feedback, change dropped");
            return Err(err);
        }
        self.feedback = next;
        Ok(res)
    }

    pub fn create(&mut self, new: NewFeedback) -> Result<Feedback, Error> {
        let date = (self.clock)();
        let id = FeedbackId(next_id(&date, self.feedback.iter().map(|f| f.id.0)));
        let feedback = Feedback {
            id,
            name: new.name,
            email: new.email,
            rating: new.rating,
            text: new.text,
            tags: api::parse_tags(&new.tags_raw),
            date,
            comments: Vec::new(),
        };
        let res = self.commit(|all| {
            all.insert(0, feedback.clone());
            Ok(feedback)
        })?;
        tracing::debug!(?id, rating = res.rating, "created feedback");
        Ok(res)
    }

    /// Returns whether there was something to delete
    pub fn delete(&mut self, id: FeedbackId) -> Result<bool, Error> {
        if self.get(id).is_none() {
            tracing::debug!(?id, "ignoring deletion of unknown feedback");
            return Ok(false);
        }
        self.commit(|all| {
            all.retain(|f| f.id != id);
            Ok(())
        })?;
        tracing::debug!(?id, "deleted feedback");
        Ok(true)
    }

    pub fn add_comment(
        &mut self,
        feedback: FeedbackId,
        author: &str,
        text: &str,
    ) -> Result<Comment, Error> {
        let date = (self.clock)();
        let res = self.commit(|all| {
            let f = find_mut(all, feedback)?;
            let id = CommentId(next_id(&date, comment_ids(f)));
            let comment = Comment::new(id, String::from(author), String::from(text), date);
            f.comments.push(comment.clone());
            Ok(comment)
        })?;
        tracing::debug!(?feedback, comment = ?res.id, "added comment");
        Ok(res)
    }

    pub fn add_reply(
        &mut self,
        feedback: FeedbackId,
        comment_index: usize,
        author: &str,
        text: &str,
    ) -> Result<Reply, Error> {
        let date = (self.clock)();
        let res = self.commit(|all| {
            let id = CommentId(next_id(&date, comment_ids(find_mut(all, feedback)?)));
            let reply = Reply::new(id, String::from(author), String::from(text), date);
            find_comment_mut(all, feedback, comment_index)?
                .replies
                .push(reply.clone());
            Ok(reply)
        })?;
        tracing::debug!(?feedback, comment_index, reply = ?res.id, "added reply");
        Ok(res)
    }

    pub fn toggle_like(
        &mut self,
        feedback: FeedbackId,
        comment_index: usize,
    ) -> Result<Comment, Error> {
        let res = self.commit(|all| {
            let comment = find_comment_mut(all, feedback, comment_index)?;
            comment.toggle_like();
            Ok(comment.clone())
        })?;
        tracing::debug!(?feedback, comment_index, liked = res.liked, "toggled like");
        Ok(res)
    }

    /// Feedback matching `filter`, in collection order
    pub fn filter(&self, filter: &Filter) -> Vec<Feedback> {
        self.feedback
            .iter()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect()
    }

    /// Every tag in use, in order of first appearance
    pub fn list_tags(&self) -> Vec<String> {
        let mut res: Vec<String> = Vec::new();
        for t in self.feedback.iter().flat_map(|f| f.tags.iter()) {
            if !res.contains(t) {
                res.push(t.clone());
            }
        }
        res
    }
}
