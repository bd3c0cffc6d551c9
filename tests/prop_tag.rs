use proptest::prelude::*;

use tag_checker::tag::{classify, validate_tags, TagError, TagKind};

proptest! {
    #[test]
    fn sprint_tags_are_accepted(tag in "sprint_[0-9]{1,6}[^\n][0-9]{1,6}") {
        prop_assert_eq!(classify(&tag), Some(TagKind::Sprint));
        prop_assert_eq!(validate_tags(&[tag.as_str()]), Ok(()));
    }

    #[test]
    fn special_tags_are_accepted(tag in "special_[A-Za-z0-9]{1,24}") {
        prop_assert_eq!(classify(&tag), Some(TagKind::Special));
        prop_assert_eq!(validate_tags(&[tag.as_str()]), Ok(()));
    }

    #[test]
    fn other_tags_are_rejected_verbatim(tag in any::<String>()) {
        prop_assume!(!tag.starts_with("sprint_") && !tag.starts_with("special_"));
        let err = validate_tags(&[tag.as_str(), "sprint_1.2"]).unwrap_err();
        let quoted = format!("'{tag}'");
        prop_assert!(err.to_string().contains(&quoted));
        prop_assert_eq!(err, TagError::InvalidTagFormat { tag });
    }

    #[test]
    fn earliest_invalid_tag_wins(a in "[a-z]{1,8}-bad", b in "[a-z]{1,8}-worse") {
        let err = validate_tags(&["special_ok", a.as_str(), b.as_str()]).unwrap_err();
        prop_assert_eq!(err, TagError::InvalidTagFormat { tag: a });
    }
}
