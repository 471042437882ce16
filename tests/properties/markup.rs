//! Property tests for HTML tag stripping.

use proptest::prelude::*;

use site_health::strip_tags;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: stripping never panics on arbitrary input.
    #[test]
    fn property_strip_tags_never_panics(input in any::<String>()) {
        let _ = strip_tags(&input);
    }

    /// PROPERTY: text wrapped in paragraph tags comes back unchanged.
    #[test]
    fn property_wrapped_plain_text_survives(text in "[A-Za-z0-9 .,]{0,40}") {
        let wrapped = format!("<p>{}</p>", text);
        prop_assert_eq!(strip_tags(&wrapped), text.trim());
    }

    /// PROPERTY: output of stripped tag-only markup contains no tags.
    #[test]
    fn property_output_has_no_simple_tags(
        words in proptest::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let html: String = words.iter().map(|w| format!("<b>{}</b> ", w)).collect();
        let stripped = strip_tags(&html);
        prop_assert!(!stripped.contains("<b>"));
        prop_assert!(!stripped.contains("</b>"));
    }
}
