#![allow(non_snake_case)]

use dioxus::prelude::*;

const _TAILWIND_STYLE: &str = manganis::mg!(file("public/tailwind.css"));

fn main() {
    console_error_panic_hook::set_once();
    dioxus_logger::init(hello_tutorial::log_level()).expect("failed to init logger");

    launch(App);
}

fn App() -> Element {
    rsx! {
        Router::<hello_tutorial::Route> {}
    }
}
