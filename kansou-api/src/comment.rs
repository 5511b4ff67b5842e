use crate::Time;

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub i64);

// Operations address comments by their index in the parent feedback, the id
// is only kept around to key rendered items
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,

    #[serde(rename = "name")]
    pub author: String,
    pub text: String,
    pub date: Time,

    #[serde(default)]
    pub likes: u32,

    /// Whether the (single) viewer of this browser liked this comment
    #[serde(default)]
    pub liked: bool,

    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Reply {
    pub id: CommentId,

    #[serde(rename = "name")]
    pub author: String,
    pub text: String,
    pub date: Time,

    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub liked: bool,
}

impl Comment {
    pub fn new(id: CommentId, author: String, text: String, date: Time) -> Comment {
        Comment {
            id,
            author,
            text,
            date,
            likes: 0,
            liked: false,
            replies: Vec::new(),
        }
    }

    /// Flip the viewer's like, never letting the counter go below zero
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        self.likes = match self.liked {
            true => self.likes.saturating_add(1),
            false => self.likes.saturating_sub(1),
        };
    }

    pub fn initial(&self) -> String {
        crate::input::initial(&self.author)
    }
}

impl Reply {
    pub fn new(id: CommentId, author: String, text: String, date: Time) -> Reply {
        Reply {
            id,
            author,
            text,
            date,
            likes: 0,
            liked: false,
        }
    }

    pub fn initial(&self) -> String {
        crate::input::initial(&self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(likes: u32, liked: bool) -> Comment {
        let mut c = Comment::new(
            CommentId(0),
            String::from("Bob"),
            String::from("Agreed"),
            chrono::Utc::now(),
        );
        c.likes = likes;
        c.liked = liked;
        c
    }

    #[test]
    fn like_then_unlike() {
        let mut c = comment(0, false);
        c.toggle_like();
        assert_eq!((c.likes, c.liked), (1, true));
        c.toggle_like();
        assert_eq!((c.likes, c.liked), (0, false));
    }

    #[test]
    fn unlike_floors_at_zero() {
        // Blobs can carry `liked: true` with a zero counter
        let mut c = comment(0, true);
        c.toggle_like();
        assert_eq!((c.likes, c.liked), (0, false));
    }

    #[test]
    fn initials() {
        assert_eq!(comment(0, false).initial(), "B");
        let mut c = comment(0, false);
        c.author = String::from("émile");
        assert_eq!(c.initial(), "É");
        c.author = String::new();
        assert_eq!(c.initial(), "");
    }
}
