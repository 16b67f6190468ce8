use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not-found",
            Navbar {}
            div { class: "content-wrapper not-found-body",
                h1 { class: "not-found-title", "Page not found" }
                p { class: "not-found-text", "Nothing lives at {path}." }
                Link { class: "nav-button nav-button--primary", to: Route::Home {}, "Back to the map" }
            }
        }
    }
}
