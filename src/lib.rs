pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

use yew::prelude::*;

use crate::pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing />
    }
}
