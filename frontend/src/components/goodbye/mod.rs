use concat_string::concat_string;
use dioxus::prelude::*;

use crate::params::GoodbyeParams;

const FRIEND: &str = "friend";

pub fn goodbye_heading(query: &GoodbyeParams) -> String {
    let name = query.name().unwrap_or_else(|| {
        tracing::debug!("no name in goodbye query, using fallback");
        FRIEND
    });
    concat_string!("Goodbye, ", name, " 👋")
}

#[component]
pub fn Goodbye(query: GoodbyeParams) -> Element {
    let heading = goodbye_heading(&query);

    rsx! {
        main { class: "p-6",
            h1 { class: "text-3xl font-bold", "{heading}" }
        }
    }
}
