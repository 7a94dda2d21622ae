use tracing::Level;

const LOG_LEVEL: &str = env!("HELLO_TUTORIAL_LOG_LEVEL");

pub fn log_level() -> Level {
    parse_log_level(LOG_LEVEL)
}

fn parse_log_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}
