//! Property-based tests for the translation stub

use proptest::prelude::*;
use translation_hub::backend::translate::pseudo_translate;

proptest! {
    #[test]
    fn test_translation_is_tagged_and_reversed(
        text in ".*",
        source in "[a-z]{2}",
        target in "[a-z]{2}",
    ) {
        let translated = pseudo_translate(&text, &source, &target);
        let prefix = format!("[{}->{}] ", source, target);

        prop_assert!(translated.starts_with(&prefix));
        let body = &translated[prefix.len()..];
        let restored: String = body.chars().rev().collect();
        prop_assert_eq!(restored, text);
    }

    #[test]
    fn test_translation_is_deterministic(text in ".*") {
        prop_assert_eq!(
            pseudo_translate(&text, "en", "es"),
            pseudo_translate(&text, "en", "es")
        );
    }
}
