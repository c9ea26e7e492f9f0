//! Logging setup for binaries and tests

fn builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    );
    builder.format_timestamp_millis();
    builder
}

/// Install env_logger with an `info` default filter.
///
/// `RUST_LOG=brickworld=trace` also shows every rejected candidate
/// position. Panics if a logger is already installed.
///
/// ```no_run
/// brickworld::core::logging::init();
/// log::info!("Builder started");
/// ```
pub fn init() {
    builder().init();
}

/// Like [`init`], but returns false instead of panicking when a logger
/// is already installed (tests run many times in one process).
pub fn try_init() -> bool {
    builder().is_test(true).try_init().is_ok()
}
