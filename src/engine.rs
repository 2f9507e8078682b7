use simplelog::{Config, LevelFilter, SimpleLogger, TermLogger, TerminalMode};

/// Initializes terminal logging with a plain fallback, and routes
/// panics through the logger. Call once at startup.
pub fn init_logger(level_filter: LevelFilter) {
    if TermLogger::init(level_filter, Config::default(), TerminalMode::Mixed).is_err() {
        SimpleLogger::init(level_filter, Config::default())
            .expect("an error occurred on logger initialization")
    }

    log_panics::init();
}
