//! Language inference from code content
//!
//! A low-confidence guess used only as the highlighter's default when no
//! class or attribute names a language. Rules run in a fixed priority order
//! and the first match wins; anything unmatched is `text`.

use regex::Regex;
use std::sync::LazyLock;

use super::language::SupportedLanguage;

/// Shorter snippets carry too little signal to guess from
const MIN_INFERENCE_CHARS: usize = 10;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new($re).expect(concat!("BUG: ", stringify!($name), " is a valid regex"))
        });
    };
}

pattern!(HTML_START_RE, r"(?i)^\s*(?:<!doctype\s+html|<html\b|<(?:head|body|div|span|p|a|ul|ol|li|section|article|template|table|form)\b[^>]*>)");
pattern!(XML_DECL_RE, r"^\s*<\?xml\b");
pattern!(PHP_OPEN_RE, r"<\?php\b");
pattern!(SHEBANG_SHELL_RE, r"^#!\S*\b(?:env\s+)?(?:ba|z|da)?sh\b");
pattern!(SHELL_PROMPT_RE, r"(?m)^\s*\$ \S");
pattern!(RUST_RE, r"(?m)\bfn\s+\w+\s*(?:<[^>]*>)?\s*\(|\blet\s+mut\s|\bimpl\b[^{\n]*\{|\b(?:println|format|vec|macro_rules)!|^\s*use\s+\w+(?:::\w+)+|#\[derive\(");
pattern!(GO_PACKAGE_RE, r"(?m)^\s*package\s+\w+\s*$");
pattern!(GO_FUNC_RE, r"(?m)^\s*func\s+(?:\(\w+\s+\*?\w+\)\s*)?\w+\s*\(|\w+\s*:=\s*");
pattern!(SWIFT_RE, r"(?m)^\s*import\s+(?:UIKit|Foundation|SwiftUI|Combine)\s*$|\bfunc\s+\w+\s*\([^)]*\)\s*->|\bguard\s+let\b");
pattern!(KOTLIN_RE, r"(?m)^\s*(?:(?:private|public|internal|suspend|override)\s+)*fun\s+\w+\s*\(|\bval\s+\w+\s*(?::\s*\w+)?\s*=");
pattern!(PYTHON_RE, r"(?m)^\s*def\s+\w+\s*\(.*\)\s*(?:->\s*[^:]+)?:\s*$|^\s*(?:from\s+[\w.]+\s+)?import\s+[\w.]+(?:\s+as\s+\w+)?(?:\s*,\s*[\w.]+)*\s*$|^\s*class\s+\w+(?:\(.*\))?:\s*$|^\s*elif\b|\bself\.\w+");
pattern!(TYPESCRIPT_RE, r"(?m):\s*(?:string|number|boolean|any|void|unknown)\b|^\s*(?:export\s+)?interface\s+\w+|^\s*(?:export\s+)?type\s+\w+\s*=");
pattern!(JAVASCRIPT_RE, r"\b(?:const|let|var)\s+\w+\s*=|=>|\bconsole\.\w+\(|\bfunction\s*\w*\s*\(|\brequire\(|\bdocument\.\w+");
pattern!(JAVA_RE, r"\bpublic\s+(?:static\s+)?(?:final\s+)?(?:class|void|interface)\b|\bSystem\.out\.print");
pattern!(CSHARP_RE, r"(?m)^\s*using\s+System\b|\bConsole\.Write|\bnamespace\s+\w+(?:\.\w+)*\s*[{;]");
pattern!(CPP_RE, r"#include\s*<(?:iostream|vector|string|memory|map|algorithm)>|\bstd::|\bcout\s*<<|\btemplate\s*<");
pattern!(C_RE, r#"#include\s*[<"]|\bprintf\s*\(|\bint\s+main\s*\("#);
pattern!(RUBY_RE, r#"(?m)^\s*def\s+\w+[?!]?\s*(?:\(.*\))?\s*$|^\s*end\s*$|\bputs\s|^\s*require\s+['"]|\bdo\s*\|\w+"#);
pattern!(SQL_RE, r"(?im)^\s*(?:select\s+.+\s+from\b|insert\s+into\b|update\s+\w+\s+set\b|delete\s+from\b|create\s+(?:table|index|view|database)\b|alter\s+table\b|drop\s+table\b)");
pattern!(CSS_BLOCK_RE, r"(?m)^\s*[^\s{][^{]*\{\s*$|^\s*[^\s{][^{]*\{[^}]*\}\s*$");
pattern!(CSS_DECL_RE, r"(?m)^\s*-{0,2}[a-zA-Z-]+\s*:\s*[^;{}]+;\s*$");
pattern!(YAML_DOC_RE, r"(?m)^---\s*$");
pattern!(YAML_KEY_RE, r"(?m)^\s*(?:-\s+)?[\w.-]+:(?:\s+\S.*)?$");
pattern!(TOML_TABLE_RE, r"(?m)^\s*\[\[?[\w.-]+\]\]?\s*$");
pattern!(TOML_KEY_RE, r"(?m)^\s*[\w.-]+\s*=\s*\S");
pattern!(MARKDOWN_HEADING_RE, r"(?m)^#{1,6}\s+\S");
pattern!(MARKDOWN_BODY_RE, r"(?m)^\s*[-*+]\s+\S|^```|\[[^\]]+\]\([^)]+\)");

/// Shell commands recognized as the first word of a snippet
const SHELL_COMMANDS: &[&str] = &[
    "cargo", "rustup", "npm", "npx", "yarn", "pnpm", "git", "docker", "kubectl", "helm", "pip",
    "pip3", "brew", "apt", "apt-get", "sudo", "cd", "ls", "mkdir", "rm", "cp", "mv", "curl",
    "wget", "ssh", "export", "chmod", "echo", "make",
];

fn is_json(code: &str) -> bool {
    let starts_like_json = code.starts_with('{') || code.starts_with('[');
    starts_like_json && serde_json::from_str::<serde_json::Value>(code).is_ok()
}

fn is_html(code: &str) -> bool {
    HTML_START_RE.is_match(code)
}

fn is_xml(code: &str) -> bool {
    XML_DECL_RE.is_match(code)
}

fn is_php(code: &str) -> bool {
    PHP_OPEN_RE.is_match(code)
}

fn is_shell(code: &str) -> bool {
    if SHEBANG_SHELL_RE.is_match(code) || SHELL_PROMPT_RE.is_match(code) {
        return true;
    }
    let first_word = code.split_whitespace().next().unwrap_or_default();
    SHELL_COMMANDS.contains(&first_word)
}

fn is_rust(code: &str) -> bool {
    RUST_RE.is_match(code)
}

fn is_swift(code: &str) -> bool {
    SWIFT_RE.is_match(code)
}

fn is_go(code: &str) -> bool {
    GO_PACKAGE_RE.is_match(code) || (code.contains("func ") && GO_FUNC_RE.is_match(code))
}

fn is_kotlin(code: &str) -> bool {
    KOTLIN_RE.is_match(code)
}

fn is_python(code: &str) -> bool {
    PYTHON_RE.is_match(code)
}

fn is_typescript(code: &str) -> bool {
    TYPESCRIPT_RE.is_match(code)
}

fn is_javascript(code: &str) -> bool {
    JAVASCRIPT_RE.is_match(code)
}

fn is_java(code: &str) -> bool {
    JAVA_RE.is_match(code)
}

fn is_csharp(code: &str) -> bool {
    CSHARP_RE.is_match(code)
}

fn is_cpp(code: &str) -> bool {
    CPP_RE.is_match(code)
}

fn is_c(code: &str) -> bool {
    C_RE.is_match(code)
}

fn is_ruby(code: &str) -> bool {
    RUBY_RE.is_match(code)
}

fn is_sql(code: &str) -> bool {
    SQL_RE.is_match(code)
}

fn is_css(code: &str) -> bool {
    CSS_BLOCK_RE.is_match(code) && CSS_DECL_RE.is_match(code)
}

fn is_toml(code: &str) -> bool {
    TOML_TABLE_RE.is_match(code) && TOML_KEY_RE.is_match(code)
}

fn is_yaml(code: &str) -> bool {
    if code.contains(['{', ';']) {
        return false;
    }
    YAML_DOC_RE.is_match(code) || YAML_KEY_RE.find_iter(code).take(2).count() == 2
}

fn is_markdown(code: &str) -> bool {
    MARKDOWN_HEADING_RE.is_match(code) && MARKDOWN_BODY_RE.is_match(code)
}

/// A named content rule; the name shows up in trace logs
pub struct ContentRule {
    pub name: &'static str,
    pub language: SupportedLanguage,
    pub matches: fn(&str) -> bool,
}

/// Content rules in priority order
///
/// Markup and data formats come first because their openings are
/// unambiguous. Among programming languages, the more distinctive syntax is
/// tested before languages whose keywords it overlaps (TypeScript before
/// JavaScript, C++ before C, Swift before Go).
pub static CONTENT_RULES: &[ContentRule] = &[
    ContentRule { name: "json", language: SupportedLanguage::Json, matches: is_json },
    ContentRule { name: "xml-declaration", language: SupportedLanguage::Xml, matches: is_xml },
    ContentRule { name: "php-open-tag", language: SupportedLanguage::Php, matches: is_php },
    ContentRule { name: "html-markup", language: SupportedLanguage::Html, matches: is_html },
    ContentRule { name: "shell", language: SupportedLanguage::Bash, matches: is_shell },
    ContentRule { name: "sql", language: SupportedLanguage::Sql, matches: is_sql },
    ContentRule { name: "rust", language: SupportedLanguage::Rust, matches: is_rust },
    ContentRule { name: "swift", language: SupportedLanguage::Swift, matches: is_swift },
    ContentRule { name: "go", language: SupportedLanguage::Go, matches: is_go },
    ContentRule { name: "kotlin", language: SupportedLanguage::Kotlin, matches: is_kotlin },
    ContentRule { name: "python", language: SupportedLanguage::Python, matches: is_python },
    ContentRule { name: "csharp", language: SupportedLanguage::CSharp, matches: is_csharp },
    ContentRule { name: "java", language: SupportedLanguage::Java, matches: is_java },
    ContentRule { name: "typescript", language: SupportedLanguage::TypeScript, matches: is_typescript },
    ContentRule { name: "javascript", language: SupportedLanguage::JavaScript, matches: is_javascript },
    ContentRule { name: "cpp", language: SupportedLanguage::Cpp, matches: is_cpp },
    ContentRule { name: "c", language: SupportedLanguage::C, matches: is_c },
    ContentRule { name: "ruby", language: SupportedLanguage::Ruby, matches: is_ruby },
    ContentRule { name: "css", language: SupportedLanguage::Css, matches: is_css },
    ContentRule { name: "toml", language: SupportedLanguage::Toml, matches: is_toml },
    ContentRule { name: "markdown", language: SupportedLanguage::Markdown, matches: is_markdown },
    ContentRule { name: "yaml", language: SupportedLanguage::Yaml, matches: is_yaml },
];

/// Guess a language from the shape of `text`
///
/// Returns `SupportedLanguage::Text` when the snippet is too short or no
/// rule matches.
#[must_use]
pub fn detect_code_language_from_content(text: &str) -> SupportedLanguage {
    let code = text.trim();
    if code.chars().count() < MIN_INFERENCE_CHARS {
        return SupportedLanguage::Text;
    }

    CONTENT_RULES
        .iter()
        .find(|rule| (rule.matches)(code))
        .map_or(SupportedLanguage::Text, |rule| {
            tracing::trace!("Content rule '{}' matched", rule.name);
            rule.language
        })
}
