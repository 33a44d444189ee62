use dioxus::prelude::*;

mod components;
mod data;
mod routes;
mod state;

use routes::Route;
use state::provide_app_state;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    provide_app_state();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
