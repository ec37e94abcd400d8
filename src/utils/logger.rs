use crate::domain::model::OutputFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("roman_numerals=debug,info")
        } else {
            EnvFilter::new("roman_numerals=info")
        }
    })
}

/// Logs go to stderr; stdout is reserved for the converted value.
/// JSON output gets JSON log lines, plain output gets compact ones.
pub fn init_logger(verbose: bool, format: OutputFormat) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(default_filter(verbose));
    match format {
        OutputFormat::Json => registry.with(layer.json()).init(),
        OutputFormat::Plain => registry.with(layer.compact()).init(),
    }
}
