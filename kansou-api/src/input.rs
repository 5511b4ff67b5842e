use crate::Error;

/// Split comma-separated user input into trimmed, non-empty tags
///
/// A tag given twice is only kept at its first position.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut res: Vec<String> = Vec::new();
    for t in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !res.iter().any(|known| known == t) {
            res.push(String::from(t));
        }
    }
    res
}

/// Trimmed text, or EmptyInput if nothing is left
pub fn non_empty(text: &str) -> Result<&str, Error> {
    match text.trim() {
        "" => Err(Error::EmptyInput),
        t => Ok(t),
    }
}

pub(crate) fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(parse_tags("ui, fast"), vec!["ui", "fast"]);
        assert_eq!(parse_tags(" ui ,, , bug,ui "), vec!["ui", "bug"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(non_empty("  hi \n"), Ok("hi"));
        assert_eq!(non_empty(" \t "), Err(Error::EmptyInput));
        assert_eq!(non_empty(""), Err(Error::EmptyInput));
    }
}
