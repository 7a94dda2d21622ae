mod goodbye;
mod home;
mod not_found;

pub use goodbye::Goodbye;
pub use home::Home;
pub use not_found::NotFound;
