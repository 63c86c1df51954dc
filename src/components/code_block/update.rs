//! Update function for the code block widget.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `CodeBlockComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Committing fetch completions, with stale-tag discard.
//! - Copying the display text to the clipboard and showing a timed
//!   "Copied!" confirmation (1.5 s, restarted on every successful copy).
//! - Silent degrade when the clipboard API is missing or the write fails:
//!   the confirmation simply never appears.

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers;
use super::messages::Msg;
use super::state::CodeBlockComponent;

/// How long the "Copied!" confirmation stays visible.
const COPY_FEEDBACK_MS: u32 = 1_500;

pub fn update(
    component: &mut CodeBlockComponent,
    ctx: &Context<CodeBlockComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FileLoaded { request_id, text } => component.commit_loaded(request_id, text),
        Msg::FileFailed {
            request_id,
            message,
        } => component.commit_failed(request_id, message),
        Msg::CopyRequested => {
            let text = component.display_text(ctx.props()).to_string();
            if text.is_empty() {
                return false;
            }
            match helpers::clipboard() {
                Some(clipboard) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match JsFuture::from(clipboard.write_text(&text)).await {
                            Ok(_) => link.send_message(Msg::CopySucceeded),
                            Err(_) => link.send_message(Msg::CopyFailed),
                        }
                    });
                }
                None => ctx.link().send_message(Msg::CopyFailed),
            }
            false
        }
        Msg::CopySucceeded => {
            component.copied = true;

            // Restart the revert window; dropping the previous handle
            // cancels its callback.
            let link = ctx.link().clone();
            component.copy_timer = Some(Timeout::new(COPY_FEEDBACK_MS, move || {
                link.send_message(Msg::CopyFeedbackElapsed);
            }));
            true
        }
        Msg::CopyFailed => {
            let was_copied = component.copied;
            component.copied = false;
            component.copy_timer = None;
            was_copied
        }
        Msg::CopyFeedbackElapsed => {
            component.copied = false;
            component.copy_timer = None;
            true
        }
    }
}
