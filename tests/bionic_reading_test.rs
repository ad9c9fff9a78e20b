//! Integration tests for the bionic reading transform

use entry_content::bionic::emphasis_length;
use entry_content::{apply_bionic_reading_to_html, apply_bionic_reading_to_html_using, ContentOptions};
use proptest::prelude::*;
use scraper::{Html, Selector};

fn visible_text(html: &str) -> String {
    Html::parse_fragment(html).root_element().text().collect()
}

fn bold_texts(html: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse("b").expect("valid selector");
    document.select(&selector).map(|b| b.text().collect()).collect()
}

#[test]
fn test_prefix_lengths_follow_word_length() {
    let html = apply_bionic_reading_to_html("<p>a toy reader understanding internationalization</p>");
    assert_eq!(bold_texts(&html), vec!["a", "t", "re", "unde", "inte"]);
}

#[test]
fn test_code_and_preformatted_text_is_untouched() {
    let html = concat!(
        "<p>Call <code>render()</code> then <kbd>Enter</kbd>.</p>",
        "<pre>let value = 1;</pre>",
        "<textarea>draft</textarea>",
        "<svg><text>Label</text></svg>",
        "<p><b>Already</b> bold and <strong>strong</strong></p>"
    );
    let output = apply_bionic_reading_to_html(html);

    assert!(output.contains("<code>render()</code>"));
    assert!(output.contains("<kbd>Enter</kbd>"));
    assert!(output.contains("<pre>let value = 1;</pre>"));
    assert!(output.contains("<textarea>draft</textarea>"));
    assert!(output.contains("<strong>strong</strong>"));
    assert!(output.contains("<b>Already</b>"));
    assert_eq!(visible_text(&output), visible_text(html));
}

#[test]
fn test_words_split_on_non_letters() {
    let html = apply_bionic_reading_to_html("<p>well-known rock'n'roll e-mail x2y</p>");
    assert_eq!(bold_texts(&html), vec!["wel", "rock", "e-", "x", "y"]);
}

#[test]
fn test_extra_skip_tag_from_options() {
    let options = ContentOptions::builder()
        .skip_bionic_tag("blockquote")
        .build()
        .expect("valid options");
    let html = "<blockquote>Quoted words</blockquote><p>Plain words</p>";
    let output = apply_bionic_reading_to_html_using(html, &options);
    assert!(output.starts_with("<blockquote>Quoted words</blockquote>"));
    assert_eq!(bold_texts(&output), vec!["Pl", "wo"]);
}

#[test]
fn test_noscript_fallback_markup_survives() {
    let output = apply_bionic_reading_to_html(r#"<noscript><img src="a.png"><p>Hidden text</p></noscript>"#);
    assert_eq!(
        output,
        r#"<noscript><img src="a.png"><p><b>Hi</b>dden <b>te</b>xt</p></noscript>"#
    );
}

#[test]
fn test_attributes_and_structure_survive() {
    let html = r#"<p class="lead"><a href="https://example.com/a?b=c">Read more</a></p>"#;
    let output = apply_bionic_reading_to_html(html);
    assert_eq!(
        output,
        r#"<p class="lead"><a href="https://example.com/a?b=c"><b>Re</b>ad <b>mo</b>re</a></p>"#
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_visible_text_is_preserved(text in "[A-Za-z'’ .,;:!?-]{0,60}") {
        let html = format!("<p>{text}</p><ul><li>{text}</li></ul>");
        let output = apply_bionic_reading_to_html(&html);
        prop_assert_eq!(visible_text(&output), visible_text(&html));
    }

    #[test]
    fn prop_emphasis_is_a_short_prefix(word in "[A-Za-z]{1,30}") {
        let output = apply_bionic_reading_to_html(&format!("<p>{word}</p>"));
        let bold = bold_texts(&output);
        prop_assert_eq!(bold.len(), 1);
        prop_assert!(word.starts_with(bold[0].as_str()));
        prop_assert_eq!(bold[0].chars().count(), emphasis_length(word.chars().count()));
    }
}
