//! View rendering for the code block widget.
//!
//! Three mutually exclusive outcomes, selected by precedence: the retrieval
//! error if one is set, a loading placeholder while no display text exists,
//! otherwise the header bar (language label + copy button) above the
//! highlighted code region.

use yew::html::Scope;
use yew::prelude::*;

use super::helpers::language_label;
use super::messages::Msg;
use super::state::CodeBlockComponent;

pub fn view(component: &CodeBlockComponent, ctx: &Context<CodeBlockComponent>) -> Html {
    let props = ctx.props();

    if let Some(error) = &component.error {
        return html! {
            <div class="code-block-error">{ error }</div>
        };
    }

    let display = component.display_text(props);
    if display.is_empty() {
        return html! {
            <div class="code-block-loading">{ "Loading..." }</div>
        };
    }

    html! {
        <div
            class={classes!("code-block", props.class.clone())}
            style="font-family: monospace;"
        >
            { build_header(component, ctx.link(), &props.language) }
            { component.highlighter.render(display, &props.language, props.show_line_numbers) }
        </div>
    }
}

/// Builds the header bar: language label on the left, copy button on the
/// right. The button shows "Copied!" while the feedback flag is set.
fn build_header(
    component: &CodeBlockComponent,
    link: &Scope<CodeBlockComponent>,
    language: &str,
) -> Html {
    html! {
        <div class="code-block-header">
            <span class="code-block-language">{ language_label(language) }</span>
            <button
                class="code-block-copy"
                aria-label="Copy code"
                onclick={link.callback(|_| Msg::CopyRequested)}
            >
                {
                    if component.copied {
                        html! { <span class="code-block-copied">{ "Copied!" }</span> }
                    } else {
                        copy_icon()
                    }
                }
            </button>
        </div>
    }
}

/// Two stacked rectangles, the usual copy glyph.
fn copy_icon() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="16"
            height="16"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <rect x="9" y="9" width="13" height="13" rx="2" stroke-width="2" />
            <rect x="3" y="3" width="13" height="13" rx="2" stroke-width="2" />
        </svg>
    }
}
