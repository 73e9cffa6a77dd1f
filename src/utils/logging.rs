use crate::core::domain::Configuration;

// Logs go to stderr as JSON so the interactive menu on stdout is not interleaved with them.
pub fn setup_tracing(config: &Configuration) {
    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .json()
        .init();
}
