const LOG_LEVEL_ENV: &str = "HELLO_TUTORIAL_LOG_LEVEL";

fn main() {
    println!("cargo::rerun-if-env-changed={LOG_LEVEL_ENV}");
    let level = std::env::var(LOG_LEVEL_ENV).ok().filter(|s| !s.is_empty());
    println!("cargo::rustc-env={}={}", LOG_LEVEL_ENV, level.as_deref().unwrap_or("info"));
}
