//! Syntax-highlighted rendering for the code region.
//!
//! Wraps `syntect` behind a single entry point, `Highlighter::render(text,
//! language, show_line_numbers)`, so the rest of the crate treats
//! highlighting as an opaque collaborator. Tokens become `<span>` nodes with
//! inline color styles; long lines wrap instead of overflowing.

use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use yew::prelude::*;

const THEME: &str = "base16-ocean.dark";

pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Highlighter {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Renders `code` as highlighted markup. Unknown languages fall back to
    /// plain text rather than failing.
    pub fn render(&self, code: &str, language: &str, show_line_numbers: bool) -> Html {
        let syntax = self.find_syntax(language);
        let theme = &self.theme_set.themes[THEME];
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut number = 0usize;
        let lines = LinesWithEndings::from(code)
            .map(|line| {
                number += 1;
                let ranges = highlighter
                    .highlight_line(line, &self.syntax_set)
                    .unwrap_or_else(|_| vec![(Style::default(), line)]);
                render_line(number, &ranges, show_line_numbers)
            })
            .collect::<Html>();

        html! {
            <pre
                class="code-block-body"
                style="margin: 0; white-space: pre-wrap; word-break: break-word;"
            >
                <code>{ lines }</code>
            </pre>
        }
    }

    /// Resolves a language identifier to a syntax definition. Tries syntect's
    /// own token lookup first, then a table of common aliases, then plain
    /// text.
    fn find_syntax(&self, language: &str) -> &SyntaxReference {
        let lower = language.to_lowercase();
        self.syntax_set
            .find_syntax_by_token(&lower)
            .or_else(|| {
                self.syntax_set
                    .find_syntax_by_extension(extension_alias(&lower))
            })
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }
}

/// Maps common language names to the file extension syntect knows them by.
fn extension_alias(language: &str) -> &str {
    match language {
        "shell" | "bash" => "sh",
        "python" => "py",
        "javascript" => "js",
        "typescript" => "ts",
        "ruby" => "rb",
        "rust" => "rs",
        "markdown" => "md",
        "yaml" => "yml",
        other => other,
    }
}

fn render_line(number: usize, ranges: &[(Style, &str)], show_line_numbers: bool) -> Html {
    let spans = ranges
        .iter()
        .map(|(style, text)| {
            html! { <span style={token_style(style)}>{ text.to_string() }</span> }
        })
        .collect::<Html>();

    html! {
        <span class="code-block-line">
            {
                if show_line_numbers {
                    html! {
                        <span
                            class="code-block-line-number"
                            style="display: inline-block; min-width: 2.5em; padding-right: 12px; text-align: right; user-select: none; color: #65737e;"
                        >
                            { number }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
            { spans }
        </span>
    }
}

/// Inline CSS for one highlighted token.
fn token_style(style: &Style) -> String {
    let fg = style.foreground;
    let mut css = format!("color: #{:02x}{:02x}{:02x};", fg.r, fg.g, fg.b);
    if style.font_style.contains(FontStyle::BOLD) {
        css.push_str(" font-weight: bold;");
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        css.push_str(" font-style: italic;");
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_shell_aliases_to_a_real_syntax() {
        let highlighter = Highlighter::new();
        let plain = highlighter.syntax_set.find_syntax_plain_text().name.clone();

        for lang in ["bash", "sh", "shell", "Bash"] {
            assert_ne!(highlighter.find_syntax(lang).name, plain, "{}", lang);
        }
    }

    #[test]
    fn resolves_mapped_language_names() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.find_syntax("python").name, "Python");
        assert_eq!(highlighter.find_syntax("rust").name, "Rust");
    }

    #[test]
    fn unknown_language_falls_back_to_plain_text() {
        let highlighter = Highlighter::new();
        let plain = highlighter.syntax_set.find_syntax_plain_text().name.clone();
        assert_eq!(highlighter.find_syntax("no-such-language").name, plain);
    }

    #[test]
    fn token_style_formats_hex_color() {
        let style = Style::default();
        let css = token_style(&style);
        assert!(css.starts_with("color: #"), "{}", css);
    }
}
