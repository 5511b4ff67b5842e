#![cfg(test)]

use std::{cmp, collections::HashSet, ops::RangeTo};

use crate::{
    api::{Error, Feedback, FeedbackId, Filter, NewFeedback},
    keys, BlobStore, FeedbackStore, MemoryBlobs,
};

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum FuzzOp {
    Create {
        #[generator(bolero::generator::gen_with::<String>().len(0..10usize))]
        name: String,
        rating: u8,
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        tags: String,
    },
    Delete {
        feedback: usize,
    },
    DeleteUnknown(i64),
    AddComment {
        feedback: usize,
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        text: String,
    },
    AddReply {
        feedback: usize,
        comment: usize,
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        text: String,
    },
    ToggleLike {
        feedback: usize,
        comment: usize,
    },
    SetReadOnly(bool),
    Reload,
}

fn resize_int(fuzz_id: usize, RangeTo { end }: RangeTo<usize>) -> Option<usize> {
    if end == 0 {
        return None;
    }
    let bucket_size = cmp::max(1, usize::MAX / end); // in case we rounded to 0
    let id = fuzz_id / bucket_size;
    Some(cmp::min(id, end - 1)) // in case id was actually over end - 1 due to rounding
}

struct Fuzzer {
    blobs: MemoryBlobs,
    store: FeedbackStore<MemoryBlobs>,
    read_only: bool,

    /// Expected order of the collection
    ids: Vec<FeedbackId>,
}

impl Fuzzer {
    fn new() -> Fuzzer {
        let blobs = MemoryBlobs::new();
        let store = FeedbackStore::load(blobs.clone());
        Fuzzer {
            blobs,
            store,
            read_only: false,
            ids: Vec::new(),
        }
    }

    fn pick(&self, feedback: usize) -> Option<FeedbackId> {
        resize_int(feedback, ..self.ids.len()).map(|i| self.ids[i])
    }

    /// Check `res` is an error if and only if writes currently fail
    fn written<T: std::fmt::Debug>(&self, res: Result<T, Error>) -> Option<T> {
        match (self.read_only, res) {
            (false, Ok(v)) => Some(v),
            (true, Err(Error::Storage(_))) => None,
            (read_only, res) => panic!("unexpected {res:?} while read_only={read_only}"),
        }
    }

    fn execute_fuzz_op(&mut self, op: FuzzOp) {
        match op {
            FuzzOp::Create { name, rating, tags } => {
                let res = self.store.create(NewFeedback {
                    name,
                    email: String::new(),
                    rating,
                    text: String::from("text"),
                    tags_raw: tags,
                });
                if let Some(f) = self.written(res) {
                    assert_eq!(self.store.all()[0], f);
                    self.ids.insert(0, f.id);
                }
            }
            FuzzOp::Delete { feedback } => match self.pick(feedback) {
                None => assert_eq!(self.store.delete(FeedbackId(0)), Ok(false)),
                Some(id) => {
                    let res = self.store.delete(id);
                    if let Some(deleted) = self.written(res) {
                        assert!(deleted);
                        self.ids.retain(|i| *i != id);
                    }
                }
            },
            FuzzOp::DeleteUnknown(id) => {
                let id = FeedbackId(id);
                if !self.ids.contains(&id) {
                    assert_eq!(self.store.delete(id), Ok(false));
                }
            }
            FuzzOp::AddComment { feedback, text } => {
                if let Some(id) = self.pick(feedback) {
                    let before = self.store.get(id).unwrap().comments.len();
                    let res = self.store.add_comment(id, "fuzz", &text);
                    if self.written(res).is_some() {
                        assert_eq!(self.store.get(id).unwrap().comments.len(), before + 1);
                    }
                }
            }
            FuzzOp::AddReply {
                feedback,
                comment,
                text,
            } => {
                if let Some(id) = self.pick(feedback) {
                    let num_comments = self.store.get(id).unwrap().comments.len();
                    match resize_int(comment, ..num_comments) {
                        None => assert_eq!(
                            self.store.add_reply(id, num_comments, "fuzz", &text),
                            Err(Error::CommentNotFound {
                                feedback: id,
                                index: num_comments,
                            })
                        ),
                        Some(index) => {
                            let res = self.store.add_reply(id, index, "fuzz", &text);
                            self.written(res);
                        }
                    }
                }
            }
            FuzzOp::ToggleLike { feedback, comment } => {
                if let Some(id) = self.pick(feedback) {
                    let num_comments = self.store.get(id).unwrap().comments.len();
                    if let Some(index) = resize_int(comment, ..num_comments) {
                        let before = self.store.get(id).unwrap().comments[index].clone();
                        let res = self.store.toggle_like(id, index);
                        if let Some(after) = self.written(res) {
                            assert_eq!(after.liked, !before.liked);
                        }
                    }
                }
            }
            FuzzOp::SetReadOnly(read_only) => {
                self.read_only = read_only;
                self.blobs.set_read_only(read_only);
            }
            FuzzOp::Reload => self.store.reload(),
        }
        self.check_invariants();
    }

    fn check_invariants(&self) {
        let all = self.store.all();
        assert_eq!(all.iter().map(|f| f.id).collect::<Vec<_>>(), self.ids);
        assert_eq!(all.iter().map(|f| f.id).collect::<HashSet<_>>().len(), all.len());
        for f in all {
            for t in &f.tags {
                assert!(!t.is_empty() && t.trim() == t, "bad tag {t:?}");
            }
            for c in &f.comments {
                // only one viewer ever likes anything here
                assert_eq!(c.likes, c.liked as u32);
            }
        }
        if let Some(blob) = self.blobs.get(keys::FEEDBACK) {
            let stored: Vec<Feedback> = serde_json::from_str(&blob).expect("parsing stored blob");
            assert_eq!(stored, all);
        } else {
            assert!(all.is_empty());
        }
        assert_eq!(self.store.filter(&Filter::default()), all);
    }
}

#[test]
fn store_invariants() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt::try_init();
    }
    bolero::check!()
        .with_generator(bolero::generator::gen_with::<Vec<FuzzOp>>().len(1..100usize))
        .cloned()
        .for_each(|ops| {
            let mut fuzzer = Fuzzer::new();
            for op in ops {
                fuzzer.execute_fuzz_op(op);
            }
        });
}

#[test]
fn resize_int_stays_in_range() {
    assert_eq!(resize_int(0, ..0), None);
    assert_eq!(resize_int(0, ..3), Some(0));
    assert_eq!(resize_int(usize::MAX, ..3), Some(2));
    assert_eq!(resize_int(usize::MAX / 2 - 1, ..2), Some(0));
}
