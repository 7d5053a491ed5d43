use log::{info, Level};
use yew::prelude::*;

mod config;
mod content;
mod state;
mod components {
    pub mod contact;
    pub mod nav;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! { <Home /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio page");
    yew::Renderer::<App>::new().render();
}
