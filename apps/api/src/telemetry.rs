use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Where formatted log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    /// Keeps stdout free for program output (the CLI's report or JSON).
    Stderr,
}

impl LogOutput {
    fn make_writer(self) -> BoxMakeWriter {
        match self {
            LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

fn default_directives(level: &str) -> String {
    format!("job_recommender={level},api={level},job_agent={level},tower_http={level}")
}

/// Builds the log filter. `RUST_LOG` wins over `level` unless `level_overrides_env` is set.
pub fn build_filter(level: &str, level_overrides_env: bool) -> EnvFilter {
    if !level_overrides_env {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    EnvFilter::new(default_directives(level))
}

/// Initializes structured logging.
pub fn init_tracing(level: &str, level_overrides_env: bool, output: LogOutput) {
    tracing_subscriber::registry()
        .with(build_filter(level, level_overrides_env))
        .with(tracing_subscriber::fmt::layer().with_writer(output.make_writer()))
        .init();
}
