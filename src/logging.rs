//! File logging setup.
//!
//! Every dispatched line and every reported failure is appended to the log
//! file, one event per line, as `YYYY-mm-dd HH:MM:SS - LEVEL - message`.
//!
//! Log level is controlled by:
//! 1. `--debug` flag sets level to DEBUG
//! 2. `RUST_LOG` environment variable (if set)
//! 3. Default is INFO

use std::fmt::{self, Write as _};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Event formatter producing `timestamp - LEVEL - message` lines.
struct LogLine;

impl<S, N> FormatEvent<S, N> for LogLine
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize the tracing subscriber with an append-only file writer.
pub fn init(log_file: &Path, debug: bool) -> crate::error::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter = if debug {
        EnvFilter::new("scree=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scree=info"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LogLine)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();

    Ok(())
}
