//! Properties for the `CodeBlockComponent`.
//!
//! The embedding page supplies either literal source text (`code`), a path
//! to fetch text from (`file_path`), or both; inline text wins when both are
//! present.

use yew::prelude::*;

/// Display configuration for the code block widget.
#[derive(Properties, PartialEq, Clone)]
pub struct CodeBlockProps {
    /// Literal source text to display. Takes precedence over fetched text.
    #[prop_or_default]
    pub code: Option<String>,

    /// URL/path to fetch display text from with a plain GET. Retrieval is
    /// re-triggered whenever this value changes.
    #[prop_or_default]
    pub file_path: Option<String>,

    /// Language identifier; selects the highlighting grammar and the header
    /// label.
    #[prop_or(String::from("bash"))]
    pub language: String,

    /// Whether to render the line-number gutter.
    #[prop_or(true)]
    pub show_line_numbers: bool,

    /// Extra classes appended to the root container.
    #[prop_or_default]
    pub class: Classes,
}
