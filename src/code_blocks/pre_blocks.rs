//! `<pre>` block extraction
//!
//! The renderer substitutes both code-shaped tables and plain `<pre>` blocks
//! with highlighted code. A `<pre>` needs no detection, only the same
//! block-aware text recovery and a language guess.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::trace;

use super::language::{language_from_class_tokens, SupportedLanguage};
use super::language_inference::detect_code_language_from_content;
use super::text_extraction::{assemble_code_text, container_code_text};
use super::CodeTableExtraction;

static CODE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("code").expect("BUG: hardcoded selector 'code' is statically valid")
});

const LANGUAGE_ATTRIBUTES: &[&str] = &["data-lang", "data-language"];

type PreLanguageRule = fn(ElementRef<'_>, &str) -> Option<SupportedLanguage>;

static PRE_LANGUAGE_RULES: &[(&str, PreLanguageRule)] = &[
    ("code-classes", code_child_classes),
    ("pre-classes", pre_classes),
    ("data-attributes", data_attributes),
    ("content", content_heuristic),
];

fn code_child_classes(pre: ElementRef<'_>, _code: &str) -> Option<SupportedLanguage> {
    let tokens = pre
        .select(&CODE_SELECTOR)
        .flat_map(|code| code.value().classes());
    Some(language_from_class_tokens(tokens)).filter(|language| !language.is_text())
}

fn pre_classes(pre: ElementRef<'_>, _code: &str) -> Option<SupportedLanguage> {
    Some(language_from_class_tokens(pre.value().classes())).filter(|language| !language.is_text())
}

fn data_attributes(pre: ElementRef<'_>, _code: &str) -> Option<SupportedLanguage> {
    std::iter::once(pre)
        .chain(pre.select(&CODE_SELECTOR))
        .flat_map(|element| {
            LANGUAGE_ATTRIBUTES
                .iter()
                .filter_map(move |name| element.value().attr(name))
        })
        .filter_map(SupportedLanguage::from_alias)
        .find(|language| !language.is_text())
}

fn content_heuristic(_pre: ElementRef<'_>, code: &str) -> Option<SupportedLanguage> {
    Some(detect_code_language_from_content(code)).filter(|language| !language.is_text())
}

/// Recover the code and a default language from a `<pre>` element
///
/// Language sources, first hit wins: classes of `<code>` children, classes
/// of the `<pre>`, `data-lang`/`data-language` attributes, then content.
/// Returns `None` for a blank block.
#[must_use]
pub fn extract_code_block_from_pre(pre: ElementRef<'_>) -> Option<CodeTableExtraction> {
    let code_text = assemble_code_text([container_code_text(pre)])?;

    let default_language = PRE_LANGUAGE_RULES
        .iter()
        .find_map(|(name, rule)| {
            rule(pre, &code_text).inspect(|language| trace!("Language '{language}' from {name}"))
        })
        .unwrap_or_default();

    Some(CodeTableExtraction {
        code_text,
        default_language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extract(html: &str) -> Option<CodeTableExtraction> {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse("pre").expect("test selector");
        let pre = document.select(&selector).next().expect("pre in fixture");
        extract_code_block_from_pre(pre)
    }

    #[test]
    fn test_code_child_class() {
        let block = extract(r#"<pre><code class="language-ts">let x = 1</code></pre>"#)
            .expect("block");
        assert_eq!(block.code_text, "let x = 1");
        assert_eq!(block.default_language, SupportedLanguage::TypeScript);
    }

    #[test]
    fn test_data_language_attribute() {
        let block = extract(r#"<pre data-language="yml">a: 1</pre>"#).expect("block");
        assert_eq!(block.default_language, SupportedLanguage::Yaml);
    }

    #[test]
    fn test_brush_class_on_pre() {
        let block = extract(r#"<pre class="brush: python;">print("hello, world")</pre>"#)
            .expect("block");
        assert_eq!(block.default_language, SupportedLanguage::Python);
    }

    #[test]
    fn test_trailing_newline_trimmed() {
        let block = extract("<pre>echo one\necho two\n\n</pre>").expect("block");
        assert_eq!(block.code_text, "echo one\necho two");
        assert_eq!(block.default_language, SupportedLanguage::Bash);
    }

    #[test]
    fn test_expressive_code_lines() {
        let html = concat!(
            r#"<pre data-language="rust"><code>"#,
            r#"<div class="ec-line"><div class="code">fn a() {}</div></div>"#,
            r#"<div class="ec-line"><div class="code">fn b() {}</div></div>"#,
            "</code></pre>"
        );
        let block = extract(html).expect("block");
        assert_eq!(block.code_text, "fn a() {}\nfn b() {}");
        assert_eq!(block.default_language, SupportedLanguage::Rust);
    }

    #[test]
    fn test_blank_pre_is_none() {
        assert_eq!(extract("<pre>  \n </pre>"), None);
    }
}
