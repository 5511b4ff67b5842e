use chrono::Utc;

mod comment;
pub use comment::{Comment, CommentId, Reply};

mod error;
pub use error::Error;

mod feedback;
pub use feedback::{Feedback, FeedbackId, NewFeedback};

mod filter;
pub use filter::{Filter, RatingFilter, TagFilter};

mod input;
pub use input::{non_empty, parse_tags};

pub type Time = chrono::DateTime<Utc>;

pub const MAX_RATING: u8 = 5;

/// Millisecond timestamp used to derive record ids
pub fn millis(t: &Time) -> i64 {
    t.timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_blob_written_by_older_widget() {
        let blob = r#"[
            {
                "id": 1700000000000,
                "name": "Ann",
                "email": "ann@example.org",
                "rating": 5,
                "feedback": "Great",
                "tags": ["ui", "fast"],
                "date": "2023-11-14T22:13:20.000Z",
                "comments": [
                    {
                        "id": 1700000000500,
                        "name": "Bob",
                        "text": "Agreed",
                        "date": "2023-11-14T22:13:20.500Z",
                        "likes": 1,
                        "liked": true,
                        "replies": [
                            {
                                "id": 1700000001000,
                                "name": "Ann",
                                "text": "Thanks",
                                "date": "2023-11-14T22:13:21.000Z",
                                "likes": 0,
                                "liked": false
                            }
                        ]
                    }
                ]
            },
            {
                "id": 1600000000000,
                "name": "Carl",
                "rating": 2,
                "feedback": "Meh",
                "date": "2020-09-13T12:26:40.000Z"
            }
        ]"#;
        let all: Vec<Feedback> = serde_json::from_str(blob).expect("parsing blob");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, FeedbackId(1700000000000));
        assert_eq!(all[0].tags, vec![String::from("ui"), String::from("fast")]);
        assert_eq!(all[0].comments[0].likes, 1);
        assert!(all[0].comments[0].liked);
        assert_eq!(all[0].comments[0].replies[0].text, "Thanks");
        assert_eq!(all[1].email, "");
        assert!(all[1].tags.is_empty());
        assert!(all[1].comments.is_empty());
    }

    #[test]
    fn uses_widget_field_names() {
        let date = "2023-11-14T22:13:20Z".parse::<Time>().unwrap();
        let f = Feedback {
            id: FeedbackId(millis(&date)),
            name: String::from("Ann"),
            email: String::new(),
            rating: 4,
            text: String::from("Nice"),
            tags: vec![],
            date,
            comments: vec![],
        };
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["id"], 1700000000000i64);
        assert_eq!(json["feedback"], "Nice");
        assert!(json.get("text").is_none());
        assert!(json["comments"].as_array().unwrap().is_empty());
    }
}
