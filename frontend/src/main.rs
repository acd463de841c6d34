use crate::app::App;

mod api;
mod app;
mod components;
mod config;

fn main() {
    yew::Renderer::<App>::new().render();
}
