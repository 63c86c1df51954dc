use crate::app::App;

mod app;
mod components;
mod highlight;

fn main() {
    yew::Renderer::<App>::new().render();
}
