use concat_string::concat_string;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = concat_string!("/", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        main { class: "p-6",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "mt-4", "Nothing lives at {path}" }
            Link { class: "mt-4 inline-block text-blue-600 underline", to: Route::Home {}, "Back home" }
        }
    }
}
