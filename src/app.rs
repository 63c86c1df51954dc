use yew::{html, Component, Context, Html};

use crate::components::code_block::CodeBlockComponent;

const SAMPLE_SCRIPT: &str = "#!/usr/bin/env bash\nset -euo pipefail\n\necho \"hello from the docs\"\n";

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <h1>{ "Code block demo" }</h1>
                <CodeBlockComponent code={Some(SAMPLE_SCRIPT.to_string())} />
                <CodeBlockComponent
                    file_path={Some("/snippets/install.sh".to_string())}
                    language={"bash".to_string()}
                    show_line_numbers={false}
                />
            </div>
        }
    }
}
