use crate::{Comment, Time, MAX_RATING};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct FeedbackId(pub i64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub name: String,
    #[serde(default)]
    pub email: String,

    /// Nominally 1 to 5, but anything the form sends is kept
    pub rating: u8,

    #[serde(rename = "feedback")]
    pub text: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation date
    pub date: Time,

    /// Comments in posting order
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Feedback {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Number of filled stars to display, out of MAX_RATING
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }

    pub fn initial(&self) -> String {
        crate::input::initial(&self.name)
    }
}

/// What the submission form hands over to the store
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub rating: u8,
    pub text: String,

    /// Comma-separated, as typed by the user
    pub tags_raw: String,
}
