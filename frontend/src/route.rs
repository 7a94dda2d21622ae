use dioxus::prelude::*;

use crate::components::*;
use crate::params::GoodbyeParams;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/goodbye?:..query")]
    Goodbye { query: GoodbyeParams },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
