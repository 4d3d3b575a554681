use proptest::prelude::*;

use nova::core::answer::MIN_POINT_CHARS;
use nova::core::{bullet_points, clean};

proptest! {
    // Every pipeline step removes or replaces-with-shorter; none expands.
    #[test]
    fn test_clean_never_grows_the_text(raw in ".*") {
        prop_assert!(clean(&raw).len() <= raw.len());
    }

    #[test]
    fn test_clean_output_is_single_line_and_trimmed(raw in ".*") {
        let out = clean(&raw);
        prop_assert_eq!(out.trim(), out.as_str());
        prop_assert!(!out.contains('\n'));
        prop_assert!(!out.contains('\t'));
        prop_assert!(!out.contains("  "), "whitespace runs must collapse: {out:?}");
    }

    #[test]
    fn test_clean_strips_every_asterisk(raw in ".*") {
        prop_assert!(!clean(&raw).contains('*'));
    }

    #[test]
    fn test_points_are_long_trimmed_and_delimiter_free(raw in ".*") {
        for point in bullet_points(&raw) {
            prop_assert!(point.chars().count() > MIN_POINT_CHARS);
            prop_assert_eq!(point.trim(), point.as_str());
            prop_assert!(!point.contains(['.', '!', '?']));
        }
    }

    #[test]
    fn test_points_appear_in_source_order(raw in ".*") {
        let points = bullet_points(&raw);
        let mut from = 0;
        for point in &points {
            match raw[from..].find(point.as_str()) {
                Some(idx) => from += idx + point.len(),
                None => prop_assert!(false, "point {point:?} not found in order"),
            }
        }
    }
}
