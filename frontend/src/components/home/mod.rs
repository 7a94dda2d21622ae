use concat_string::concat_string;
use dioxus::prelude::*;

use crate::params::GoodbyeParams;
use crate::Route;

const STRANGER: &str = "Stranger";

pub fn hello_heading(name: &str) -> String {
    concat_string!("Hello, ", if name.is_empty() { STRANGER } else { name })
}

pub fn counter_label(count: u64) -> String {
    concat_string!("You clicked ", count.to_string(), " times")
}

pub fn next_count(count: u64) -> u64 {
    count.saturating_add(1)
}

pub fn goodbye_route(name: &str) -> Route {
    Route::Goodbye { query: GoodbyeParams::new(name) }
}

#[component]
pub fn Home() -> Element {
    let mut name = use_signal(String::default);
    let mut count = use_signal(u64::default);

    let on_click_count = move |_: Event<MouseData>| {
        let next = next_count(count());
        count.set(next);
        tracing::debug!(count = next, "counter clicked");
    };

    let heading = hello_heading(&name.read());
    let label = counter_label(count());

    rsx! {
        main { class: "p-6",
            h1 { class: "text-3xl font-bold", "{heading}" }
            input {
                class: "border p-2 rounded",
                r#type: "text",
                placeholder: "Enter your name",
                value: "{name}",
                oninput: move |e| name.set(e.value())
            }
            button {
                class: "mt-4 bg-blue-600 text-white px-4 py-2 rounded",
                onclick: on_click_count,
                "{label}"
            }
            Link {
                class: "mt-4 inline-block text-blue-600 underline",
                to: goodbye_route(&name.read()),
                "Say Goodbye"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "Hello, Stranger")]
    #[case("Ada", "Hello, Ada")]
    #[case(" ", "Hello,  ")]
    #[case("Grace Hopper", "Hello, Grace Hopper")]
    fn test_hello_heading(#[case] name: &str, #[case] heading: &str) {
        assert_eq!(hello_heading(name), heading);
    }

    #[rstest]
    #[case(0, "You clicked 0 times")]
    #[case(1, "You clicked 1 times")]
    #[case(2, "You clicked 2 times")]
    #[case(u64::MAX, "You clicked 18446744073709551615 times")]
    fn test_counter_label(#[case] count: u64, #[case] label: &str) {
        assert_eq!(counter_label(count), label);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(17)]
    fn test_clicks_shown_in_label(#[case] clicks: u64) {
        let count = (0..clicks).fold(u64::default(), |count, _| next_count(count));
        assert_eq!(counter_label(count), concat_string!("You clicked ", clicks.to_string(), " times"));
    }

    #[test]
    fn test_next_count_saturates() {
        assert_eq!(next_count(u64::MAX), u64::MAX);
    }

    #[rstest]
    #[case("Ada", "/goodbye?name=Ada")]
    #[case("", "/goodbye?name=")]
    #[case("Ada Lovelace", "/goodbye?name=Ada%20Lovelace")]
    #[case("1+1=2", "/goodbye?name=1%2B1%3D2")]
    fn test_goodbye_route(#[case] name: &str, #[case] path: &str) {
        assert_eq!(goodbye_route(name).to_string(), path);
    }
}
