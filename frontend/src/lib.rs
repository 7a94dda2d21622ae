#![deny(clippy::all)]
#![allow(non_snake_case)]

mod components;
mod config;
mod error;
mod params;
mod route;

pub use config::log_level;
pub use error::Error;
pub use params::GoodbyeParams;
pub use route::Route;
