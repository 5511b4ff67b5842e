use crate::FeedbackId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("No feedback with id {0:?}")]
    FeedbackNotFound(FeedbackId),

    #[error("No comment at index {index} of feedback {feedback:?}")]
    CommentNotFound { feedback: FeedbackId, index: usize },

    #[error("Text is empty")]
    EmptyInput,

    #[error("Failed writing to storage: {0}")]
    Storage(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FeedbackNotFound(_) | Error::CommentNotFound { .. }
        )
    }

    pub fn storage(err: impl std::fmt::Display) -> Error {
        Error::Storage(err.to_string())
    }
}
