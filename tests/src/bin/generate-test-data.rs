//! Prints a `feedbackData` blob filled with random feedback, for pasting into
//! the browser's localStorage.

use std::{cell::Cell, rc::Rc};

use anyhow::Context;
use chrono::Duration;
use kansou_client::{
    api::{NewFeedback, MAX_RATING},
    keys, BlobStore, FeedbackStore, MemoryBlobs,
};
use rand::{seq::SliceRandom, Rng};

const NUM_FEEDBACK: usize = 40;
const MAX_COMMENTS: usize = 6;
const MAX_REPLIES: usize = 3;
const MAX_TAGS: usize = 3;

const FEEDBACK_WORD_COUNT: usize = 40;
const COMMENT_WORD_COUNT: usize = 12;

const HISTORY_DAYS: i64 = 30;
const MAX_STEP_MINUTES: i64 = 6 * 60;

const NAMES: &[&str] = &["Ada", "Bilal", "Chloé", "Dmitri", "Eun-ji", "Farah", "Gus"];
const TAGS: &[&str] = &[
    "ui",
    "performance",
    "bug",
    "accessibility",
    "mobile",
    "pricing",
    "support",
    "docs",
];

fn gen_name(rng: &mut impl Rng) -> String {
    String::from(*NAMES.choose(rng).unwrap_or(&"Anonymous"))
}

fn gen_tags(rng: &mut impl Rng) -> String {
    let n = rng.gen_range(0..=MAX_TAGS);
    TAGS.choose_multiple(rng, n)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();

    // The store reads the time from this clock, advanced between operations
    let now = Rc::new(Cell::new(chrono::Utc::now() - Duration::days(HISTORY_DAYS)));
    let blobs = MemoryBlobs::new();
    let mut store = FeedbackStore::load(blobs.clone()).with_clock({
        let now = now.clone();
        move || now.get()
    });

    for _ in 0..NUM_FEEDBACK {
        now.set(now.get() + Duration::minutes(rng.gen_range(1..MAX_STEP_MINUTES)));
        let feedback = store.create(NewFeedback {
            name: gen_name(&mut rng),
            email: match rng.gen_bool(0.5) {
                true => format!("{}@example.org", gen_name(&mut rng).to_lowercase()),
                false => String::new(),
            },
            rating: rng.gen_range(1..=MAX_RATING),
            text: lipsum::lipsum_words(rng.gen_range(5..FEEDBACK_WORD_COUNT)),
            tags_raw: gen_tags(&mut rng),
        })?;

        for c in 0..rng.gen_range(0..=MAX_COMMENTS) {
            now.set(now.get() + Duration::minutes(rng.gen_range(1..MAX_STEP_MINUTES)));
            store.add_comment(
                feedback.id,
                &gen_name(&mut rng),
                &lipsum::lipsum_words(rng.gen_range(2..COMMENT_WORD_COUNT)),
            )?;
            for _ in 0..rng.gen_range(0..=MAX_REPLIES) {
                now.set(now.get() + Duration::minutes(rng.gen_range(1..MAX_STEP_MINUTES)));
                store.add_reply(
                    feedback.id,
                    c,
                    &gen_name(&mut rng),
                    &lipsum::lipsum_words(rng.gen_range(2..COMMENT_WORD_COUNT)),
                )?;
            }
            if rng.gen_bool(0.3) {
                store.toggle_like(feedback.id, c)?;
            }
        }
    }

    let blob = blobs
        .get(keys::FEEDBACK)
        .context("generated feedback was not stored")?;
    println!("{blob}");
    Ok(())
}
