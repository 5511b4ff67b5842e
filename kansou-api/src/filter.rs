use std::{fmt, str::FromStr};

use crate::Feedback;

const ALL: &str = "all";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RatingFilter {
    #[default]
    All,
    Exactly(u8),
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

/// Both predicates must match for a feedback to be shown
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    pub rating: RatingFilter,
    pub tag: TagFilter,
}

impl RatingFilter {
    pub fn matches(&self, f: &Feedback) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Exactly(r) => f.rating == *r,
        }
    }
}

impl TagFilter {
    pub fn matches(&self, f: &Feedback) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(t) => f.has_tag(t),
        }
    }
}

impl Filter {
    pub fn matches(&self, f: &Feedback) -> bool {
        self.rating.matches(f) && self.tag.matches(f)
    }

    pub fn is_all(&self) -> bool {
        *self == Filter::default()
    }
}

// The string forms below are the `value`s of the filter <select> options

impl FromStr for RatingFilter {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<RatingFilter, Self::Err> {
        match s {
            ALL => Ok(RatingFilter::All),
            s => s.parse().map(RatingFilter::Exactly),
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => f.write_str(ALL),
            RatingFilter::Exactly(r) => write!(f, "{r}"),
        }
    }
}

impl From<&str> for TagFilter {
    fn from(s: &str) -> TagFilter {
        match s {
            ALL => TagFilter::All,
            s => TagFilter::Tag(String::from(s)),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str(ALL),
            TagFilter::Tag(t) => f.write_str(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeedbackId;

    fn feedback(rating: u8, tags: &[&str]) -> Feedback {
        Feedback {
            id: FeedbackId(rating as i64),
            name: String::from("Ann"),
            email: String::new(),
            rating,
            text: String::new(),
            tags: tags.iter().map(|t| String::from(*t)).collect(),
            date: chrono::Utc::now(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn parse_select_values() {
        assert_eq!("all".parse::<RatingFilter>(), Ok(RatingFilter::All));
        assert_eq!("4".parse::<RatingFilter>(), Ok(RatingFilter::Exactly(4)));
        assert!("four".parse::<RatingFilter>().is_err());
        assert_eq!(TagFilter::from("all"), TagFilter::All);
        assert_eq!(TagFilter::from("ui"), TagFilter::Tag(String::from("ui")));
        assert_eq!(RatingFilter::Exactly(3).to_string(), "3");
        assert_eq!(TagFilter::All.to_string(), "all");
    }

    #[test]
    fn both_predicates_must_match() {
        let f = Filter {
            rating: RatingFilter::Exactly(4),
            tag: TagFilter::Tag(String::from("ui")),
        };
        assert!(f.matches(&feedback(4, &["bug", "ui"])));
        assert!(!f.matches(&feedback(4, &["bug"])));
        assert!(!f.matches(&feedback(5, &["ui"])));
        assert!(Filter::default().matches(&feedback(0, &[])));
        assert!(Filter::default().is_all());
    }
}
