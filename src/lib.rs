pub mod tag {
    use once_cell::sync::Lazy;
    use regex::Regex;
    use thiserror::Error;

    /// `sprint_X.Y`. The separator is an unescaped `.`, so any single character is accepted there.
    pub const SPRINT_PATTERN: &str = r"^sprint_[0-9]+.[0-9]+$";
    /// `special_...` followed by ASCII letters or digits.
    pub const SPECIAL_PATTERN: &str = r"^special_[A-Za-z0-9]+$";

    static SPRINT_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(SPRINT_PATTERN).expect("sprint pattern is valid"));
    static SPECIAL_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(SPECIAL_PATTERN).expect("special pattern is valid"));

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TagKind {
        Sprint,
        Special,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum TagError {
        #[error("no commit tags provided")]
        NoTagsProvided,
        #[error(
            "Your tag '{tag}' is not in the form of 'sprint_X.Y' or 'special_...', please change your tag"
        )]
        InvalidTagFormat { tag: String },
    }

    pub fn classify(tag: &str) -> Option<TagKind> {
        if SPRINT_RE.is_match(tag) {
            Some(TagKind::Sprint)
        } else if SPECIAL_RE.is_match(tag) {
            Some(TagKind::Special)
        } else {
            None
        }
    }

    pub fn is_valid_tag(tag: &str) -> bool {
        classify(tag).is_some()
    }

    /// Checks `tags` in order and stops at the first one matching neither pattern.
    pub fn validate_tags<S: AsRef<str>>(tags: &[S]) -> Result<(), TagError> {
        if tags.is_empty() {
            return Err(TagError::NoTagsProvided);
        }
        match tags.iter().map(|t| t.as_ref()).find(|t| !is_valid_tag(t)) {
            Some(tag) => Err(TagError::InvalidTagFormat {
                tag: tag.to_string(),
            }),
            None => Ok(()),
        }
    }

}
