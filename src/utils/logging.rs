use crate::core::domain::Configuration;

// Logs go to stderr so they never land between console prompts on stdout.
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.json_logs {
        builder
            .with_ansi(false)
            .without_time()
            .json()
            .init();
    } else {
        builder.init();
    }
}
