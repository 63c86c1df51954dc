//! Component state for the code block widget.
//!
//! Holds the transient data the widget owns between renders: the fetched
//! content, the retrieval error (if any), the copy-feedback flag with its
//! revert timer, and the sequence tag used to discard stale fetch results.
//!
//! Fields are `pub` because they are accessed by the `view` and `update`
//! modules. The transition methods (`begin_fetch`, `commit_loaded`,
//! `commit_failed`) are pure with respect to the browser and carry the
//! staleness contract, so they are unit-tested directly.

use gloo_timers::callback::Timeout;

use crate::highlight::Highlighter;

use super::props::CodeBlockProps;

pub struct CodeBlockComponent {
    /// Text retrieved from `file_path`. Empty until a fetch completes.
    pub content: String,

    /// Retrieval failure message. When set, the view renders only this.
    pub error: Option<String>,

    /// Whether the "Copied!" confirmation is currently showing.
    pub copied: bool,

    /// Tag of the most recently started retrieval. Completions carrying an
    /// older tag are discarded.
    pub request_seq: u64,

    /// Pending revert of `copied`. Replacing the handle restarts the window;
    /// dropping the component drops the handle, which cancels the callback.
    pub copy_timer: Option<Timeout>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// Syntax-highlighting collaborator used by the view.
    pub highlighter: Highlighter,
}

impl CodeBlockComponent {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            error: None,
            copied: false,
            request_seq: 0,
            copy_timer: None,
            loaded: false,
            highlighter: Highlighter::new(),
        }
    }

    /// Starts a new retrieval generation: clears the previous result so a
    /// reference change never shows the old file's text, and returns the tag
    /// the in-flight request must carry to commit.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.content.clear();
        self.error = None;
        self.request_seq
    }

    /// Commits a successful retrieval. Returns `false` without touching
    /// state when `request_id` is stale.
    pub fn commit_loaded(&mut self, request_id: u64, text: String) -> bool {
        if request_id != self.request_seq {
            return false;
        }
        self.content = text;
        self.error = None;
        true
    }

    /// Commits a failed retrieval. Returns `false` without touching state
    /// when `request_id` is stale.
    pub fn commit_failed(&mut self, request_id: u64, message: String) -> bool {
        if request_id != self.request_seq {
            return false;
        }
        self.error = Some(message);
        true
    }

    /// The authoritative display text: inline text when present and
    /// non-empty, otherwise the fetched content.
    pub fn display_text<'a>(&'a self, props: &'a CodeBlockProps) -> &'a str {
        match &props.code {
            Some(code) if !code.is_empty() => code,
            _ => &self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Classes;

    fn props(code: Option<&str>) -> CodeBlockProps {
        CodeBlockProps {
            code: code.map(str::to_string),
            file_path: None,
            language: "bash".to_string(),
            show_line_numbers: true,
            class: Classes::new(),
        }
    }

    #[test]
    fn inline_text_wins_over_fetched_content() {
        let mut component = CodeBlockComponent::new();
        let id = component.begin_fetch();
        assert!(component.commit_loaded(id, "fetched".to_string()));

        assert_eq!(component.display_text(&props(Some("inline"))), "inline");
        assert_eq!(component.display_text(&props(None)), "fetched");
    }

    #[test]
    fn empty_inline_text_falls_back_to_fetched_content() {
        let mut component = CodeBlockComponent::new();
        let id = component.begin_fetch();
        assert!(component.commit_loaded(id, "fetched".to_string()));

        assert_eq!(component.display_text(&props(Some(""))), "fetched");
    }

    #[test]
    fn begin_fetch_clears_previous_result() {
        let mut component = CodeBlockComponent::new();
        let first = component.begin_fetch();
        assert!(component.commit_failed(first, "boom".to_string()));

        component.begin_fetch();
        assert!(component.error.is_none());
        assert!(component.content.is_empty());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut component = CodeBlockComponent::new();
        let first = component.begin_fetch();
        let second = component.begin_fetch();

        assert!(!component.commit_loaded(first, "old".to_string()));
        assert!(component.content.is_empty());
        assert!(!component.commit_failed(first, "old error".to_string()));
        assert!(component.error.is_none());

        assert!(component.commit_loaded(second, "new".to_string()));
        assert_eq!(component.content, "new");
    }

    #[test]
    fn latest_completion_wins_regardless_of_arrival_order() {
        let mut component = CodeBlockComponent::new();
        let first = component.begin_fetch();
        let second = component.begin_fetch();

        // The newer retrieval finishes first; the older one must not
        // overwrite it.
        assert!(component.commit_loaded(second, "new".to_string()));
        assert!(!component.commit_loaded(first, "old".to_string()));
        assert_eq!(component.content, "new");
    }

    #[test]
    fn failure_then_refetch_recovers() {
        let mut component = CodeBlockComponent::new();
        let first = component.begin_fetch();
        assert!(component.commit_failed(first, "Error loading file: 404".to_string()));
        assert_eq!(
            component.error.as_deref(),
            Some("Error loading file: 404")
        );

        let second = component.begin_fetch();
        assert!(component.commit_loaded(second, "ok".to_string()));
        assert!(component.error.is_none());
        assert_eq!(component.content, "ok");
    }
}
