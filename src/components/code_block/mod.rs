//! Code block widget: root module wiring the Yew `Component` implementation
//! with submodules for props, state, messages, update logic, and view
//! rendering.
//!
//! Responsibilities
//! - Re-export the public types (`Msg`, `CodeBlockProps`, `CodeBlockComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Kick off content retrieval: on first render when a `file_path` is
//!   configured, and again whenever the `file_path` prop changes. Each
//!   retrieval carries a sequence tag so a superseded response can never
//!   overwrite newer state.

use gloo_console::error;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CodeBlockProps;
pub use state::CodeBlockComponent;

impl Component for CodeBlockComponent {
    type Message = Msg;
    type Properties = CodeBlockProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CodeBlockComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().file_path != old_props.file_path {
            let request_id = self.begin_fetch();
            if let Some(path) = ctx.props().file_path.clone() {
                start_fetch(ctx.link().clone(), path, request_id);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            if let Some(path) = ctx.props().file_path.clone() {
                let request_id = self.begin_fetch();
                start_fetch(ctx.link().clone(), path, request_id);
            }
        }
    }
}

/// Retrieves `path` and reports the outcome back to the component, tagged
/// with `request_id` so stale completions are discarded in `update`.
fn start_fetch(link: Scope<CodeBlockComponent>, path: String, request_id: u64) {
    spawn_local(async move {
        match Request::get(&path).send().await {
            Ok(response) if response.ok() => match response.text().await {
                Ok(text) => link.send_message(Msg::FileLoaded { request_id, text }),
                Err(err) => {
                    error!(format!("error loading code file {}: {}", path, err));
                    link.send_message(Msg::FileFailed {
                        request_id,
                        message: format!("Error loading file: {}", err),
                    });
                }
            },
            Ok(response) => {
                let status = response.status_text();
                error!(format!("error loading code file {}: {}", path, status));
                link.send_message(Msg::FileFailed {
                    request_id,
                    message: format!("Error loading file: Failed to load file: {}", status),
                });
            }
            Err(err) => {
                error!(format!("error loading code file {}: {}", path, err));
                link.send_message(Msg::FileFailed {
                    request_id,
                    message: format!("Error loading file: {}", err),
                });
            }
        }
    });
}
