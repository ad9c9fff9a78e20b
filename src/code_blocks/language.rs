//! Supported language tags and CSS class-token resolution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language tags the downstream highlighter understands
///
/// `Text` is the generic default used whenever no better guess exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    #[default]
    Text,
    Bash,
    C,
    Cpp,
    CSharp,
    Css,
    Go,
    Html,
    Java,
    JavaScript,
    Json,
    Kotlin,
    Markdown,
    Php,
    Python,
    Ruby,
    Rust,
    Sql,
    Swift,
    Toml,
    TypeScript,
    Xml,
    Yaml,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 23] = [
        Self::Text,
        Self::Bash,
        Self::C,
        Self::Cpp,
        Self::CSharp,
        Self::Css,
        Self::Go,
        Self::Html,
        Self::Java,
        Self::JavaScript,
        Self::Json,
        Self::Kotlin,
        Self::Markdown,
        Self::Php,
        Self::Python,
        Self::Ruby,
        Self::Rust,
        Self::Sql,
        Self::Swift,
        Self::Toml,
        Self::TypeScript,
        Self::Xml,
        Self::Yaml,
    ];

    /// Canonical lowercase tag
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bash => "bash",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Css => "css",
            Self::Go => "go",
            Self::Html => "html",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Json => "json",
            Self::Kotlin => "kotlin",
            Self::Markdown => "markdown",
            Self::Php => "php",
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::Rust => "rust",
            Self::Sql => "sql",
            Self::Swift => "swift",
            Self::Toml => "toml",
            Self::TypeScript => "typescript",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
        }
    }

    #[must_use]
    pub fn is_text(self) -> bool {
        self == Self::Text
    }

    /// Resolve a canonical tag or common alias (case-insensitive)
    ///
    /// ```
    /// use entry_content::SupportedLanguage;
    ///
    /// assert_eq!(SupportedLanguage::from_alias("JS"), Some(SupportedLanguage::JavaScript));
    /// assert_eq!(SupportedLanguage::from_alias("yml"), Some(SupportedLanguage::Yaml));
    /// assert_eq!(SupportedLanguage::from_alias("brainfuck"), None);
    /// ```
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        let alias = alias.trim().trim_end_matches(';').to_ascii_lowercase();
        let language = match alias.as_str() {
            "text" | "plaintext" | "plain" | "txt" | "none" | "nohighlight" => Self::Text,
            "bash" | "sh" | "shell" | "zsh" | "console" | "shell-session" | "shellsession" => {
                Self::Bash
            }
            "c" | "h" => Self::C,
            "cpp" | "c++" | "cxx" | "cc" | "hpp" => Self::Cpp,
            "csharp" | "cs" | "c#" | "dotnet" => Self::CSharp,
            "css" | "scss" | "less" => Self::Css,
            "go" | "golang" => Self::Go,
            "html" | "htm" | "xhtml" | "markup" => Self::Html,
            "java" => Self::Java,
            "javascript" | "js" | "jsx" | "mjs" | "cjs" | "node" => Self::JavaScript,
            "json" | "jsonc" | "json5" => Self::Json,
            "kotlin" | "kt" | "kts" => Self::Kotlin,
            "markdown" | "md" | "mdx" => Self::Markdown,
            "php" => Self::Php,
            "python" | "py" | "python3" | "py3" => Self::Python,
            "ruby" | "rb" => Self::Ruby,
            "rust" | "rs" => Self::Rust,
            "sql" | "mysql" | "postgresql" | "postgres" | "sqlite" | "plsql" => Self::Sql,
            "swift" => Self::Swift,
            "toml" => Self::Toml,
            "typescript" | "ts" | "tsx" | "mts" => Self::TypeScript,
            "xml" | "svg" | "xsl" | "plist" => Self::Xml,
            "yaml" | "yml" => Self::Yaml,
            _ => return None,
        };
        Some(language)
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| format!("unsupported language '{s}'"))
    }
}

/// Class prefixes used by highlighters to carry a language name
///
/// Supports: "language-rust", "lang-rust", "highlight-source-rust",
/// "highlight-rust", "hljs-rust", "brush:rust"
const LANGUAGE_CLASS_PREFIXES: &[&str] = &[
    "language-",
    "lang-",
    "highlight-source-",
    "highlight-",
    "hljs-",
    "brush:",
];

/// Resolve a single class token to a language
///
/// Prefixed tokens accept any alias. A bare token only counts when it is a
/// canonical tag of two or more letters (e.g. `sourceCode python`), since
/// short aliases such as `c` or `h` are common unrelated class names.
#[must_use]
pub fn language_from_class_token(token: &str) -> Option<SupportedLanguage> {
    let lower = token.to_ascii_lowercase();
    for prefix in LANGUAGE_CLASS_PREFIXES {
        if let Some(rest) = lower.strip_prefix(prefix) {
            if !rest.is_empty() {
                return SupportedLanguage::from_alias(rest);
            }
        }
    }

    SupportedLanguage::ALL
        .iter()
        .copied()
        .find(|language| language.as_str().len() > 1 && language.as_str() == lower)
}

/// First non-`text` language named by a sequence of class tokens
///
/// Handles SyntaxHighlighter's split form `class="brush: js"`, where the
/// language is the token after a bare `brush:`.
pub fn language_from_class_tokens<'a, I>(tokens: I) -> SupportedLanguage
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter();
    while let Some(token) = tokens.next() {
        let resolved = if token.eq_ignore_ascii_case("brush:") {
            tokens.next().and_then(SupportedLanguage::from_alias)
        } else {
            language_from_class_token(token)
        };
        if let Some(language) = resolved.filter(|language| !language.is_text()) {
            return language;
        }
    }
    SupportedLanguage::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_canonical_tags() {
        for language in SupportedLanguage::ALL {
            assert_eq!(language.as_str().parse::<SupportedLanguage>(), Ok(language));
        }
    }

    #[test]
    fn test_prefixed_tokens() {
        assert_eq!(language_from_class_token("language-rust"), Some(SupportedLanguage::Rust));
        assert_eq!(language_from_class_token("lang-py"), Some(SupportedLanguage::Python));
        assert_eq!(
            language_from_class_token("highlight-source-js"),
            Some(SupportedLanguage::JavaScript)
        );
        assert_eq!(language_from_class_token("brush:ruby"), Some(SupportedLanguage::Ruby));
        assert_eq!(language_from_class_token("language-unknown"), None);
    }

    #[test]
    fn test_bare_tokens() {
        assert_eq!(language_from_class_token("python"), Some(SupportedLanguage::Python));
        assert_eq!(language_from_class_token("c"), None);
        assert_eq!(language_from_class_token("code"), None);
        assert_eq!(language_from_class_token("highlight"), None);
    }

    #[test]
    fn test_tokens_skip_text() {
        let tokens = ["highlight", "language-text", "language-go"];
        assert_eq!(language_from_class_tokens(tokens), SupportedLanguage::Go);
        assert_eq!(language_from_class_tokens(["rouge-code"]), SupportedLanguage::Text);
    }

    #[test]
    fn test_split_brush_form() {
        assert_eq!(
            language_from_class_tokens(["brush:", "js;"]),
            SupportedLanguage::JavaScript
        );
    }

    #[test]
    fn test_serde_uses_tag() {
        let json = serde_json::to_string(&SupportedLanguage::CSharp).expect("serializes");
        assert_eq!(json, "\"csharp\"");
        let parsed: SupportedLanguage = serde_json::from_str("\"typescript\"").expect("parses");
        assert_eq!(parsed, SupportedLanguage::TypeScript);
    }
}
