use tracing::Level;

// None for anything tracing does not know, so a typo is reported instead of logging at info.
pub fn parse_level(level: &str) -> Option<Level> {
    level.parse().ok()
}

pub fn setup_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level).unwrap_or(Level::INFO))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // plain output, the lines usually end up in a log collector.
        .with_ansi(false)
        .json()
        .init();
}
