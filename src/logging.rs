//! Debug logging setup.
//!
//! Every stage logs through `DEBUG_LOG!`, which prints lines such as
//! `[lex] lexing source text complete`. Nothing is printed unless the driver
//! turned debugging on with `init`.

use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(format!("{}=debug", env!("CARGO_CRATE_NAME")))
    } else {
        EnvFilter::new("warn")
    }
}

/// Builds the subscriber used by the driver, writing bare stage-prefixed
/// lines to `writer`.
pub fn subscriber<W>(debug: bool, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .finish()
}

/// Installs the process-wide subscriber writing to stdout. Only the first
/// call has any effect; returns whether this call installed it.
pub fn init(debug: bool) -> bool {
    tracing::subscriber::set_global_default(subscriber(debug, std::io::stdout)).is_ok()
}
