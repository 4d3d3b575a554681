//! Whole-pipeline answer formatting on realistic service payloads. The
//! per-step behavior of `clean` is covered next to the pipeline itself.

use nova::core::{bullet_points, clean};
use nova::test_utils::{TestCase, run_table_tests};

#[test]
fn entity_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "nbsp",
            input: "one&nbsp;two",
            expected: "one two".to_string(),
            should_panic: false,
        },
        TestCase {
            name: "ampersand",
            input: "fish &amp; chips",
            expected: "fish & chips".to_string(),
            should_panic: false,
        },
        TestCase {
            name: "angle brackets",
            input: "a &lt;= b &gt;= c",
            expected: "a <= b >= c".to_string(),
            should_panic: false,
        },
        TestCase {
            name: "quotes and apostrophes",
            input: "&quot;it&#39;s&quot;",
            expected: "\"it's\"".to_string(),
            should_panic: false,
        },
    ];
    run_table_tests(cases, clean)
}

#[test]
fn service_style_answer_flattens_to_prose() {
    let raw = "## Why is the sky blue?\n\n\
               Sunlight is scattered by air molecules.<br/>\n\
               **Rayleigh scattering** affects short wavelengths most.\n\n\
               Key factors:\n\
               - wavelength of `blue` light\n\
               - density&nbsp;of the atmosphere\n\
               1. scattering strength\n\n\
               More at [NASA](https://spaceplace.nasa.gov/blue-sky/).\n";

    assert_eq!(
        clean(raw),
        "Why is the sky blue? Sunlight is scattered by air molecules. \
         Rayleigh scattering affects short wavelengths most. Key factors: \
         wavelength of blue light density of the atmosphere scattering \
         strength More at NASA."
    );
}

#[test]
fn bullets_from_a_cleaned_answer() {
    let cleaned = clean(
        "**Plants are green.** They use sunlight to split water! \
         Sugar? The energy becomes sugar over time.",
    );
    let points = bullet_points(&cleaned);
    assert_eq!(
        points,
        vec![
            "Plants are green",
            "They use sunlight to split water",
            "The energy becomes sugar over time",
        ]
    );
}

#[test]
fn tag_then_entity_composite() {
    assert_eq!(clean("<b>Hi</b> &amp; bye"), "Hi & bye");
}

#[test]
fn short_fragments_drop_from_mixed_sentences() {
    let points = bullet_points("A. This is a long sentence! Short. Another decent one?");
    assert_eq!(points, vec!["This is a long sentence", "Another decent one"]);
}

#[test]
fn nested_markup_strips_layer_by_layer() {
    // Tags first, then entities: the entity-decoded bracket text stays.
    let raw = "<p>Use <code>&lt;div&gt;</code> sparingly</p>";
    assert_eq!(clean(raw), "Use <div> sparingly");
}

#[test]
fn answer_of_only_markup_produces_no_bullets() {
    let cleaned = clean("<ul><li>**</li><li>**</li></ul>");
    assert_eq!(cleaned, "");
    assert!(bullet_points(&cleaned).is_empty());
}
