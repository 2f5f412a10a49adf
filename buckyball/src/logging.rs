use slog::{o, Drain, Level, Logger};

/// Root logger writing to the terminal.
///
/// Records below `level` are dropped before they reach the
/// (asynchronous) terminal drain.
pub fn terminal_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!("bb_version" => env!("CARGO_PKG_VERSION")))
}

/// Root logger that goes nowhere; for tests and embedding.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!("bb_version" => env!("CARGO_PKG_VERSION")))
}
