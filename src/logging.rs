use std::{fmt::Result as FmtResult, io, path::Path};

use time::{format_description::FormatItem, macros::format_description};
use tracing::{metadata::LevelFilter, Event, Level, Subscriber};
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling,
};
use tracing_subscriber::{
    fmt::{
        format::Writer,
        time::{FormatTime, UtcTime},
        writer::MakeWriterExt,
        FmtContext, FormatEvent, FormatFields, Layer,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer as _,
};

const LOG_FILE: &str = "programmers-badge.log";

/// Warnings and errors go to stderr, everything else to stdout.
///
/// If `log_dir` is given, events are also appended to a daily rolling file
/// in that directory. The returned guard must be kept alive until exit.
pub fn init(quiet: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let formatter = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    let console_writer = io::stderr.with_max_level(Level::WARN).or_else(io::stdout);
    let console_layer = Layer::default()
        .event_format(EventFormat::new(formatter, false))
        .with_writer(console_writer);

    let console_filter = if quiet {
        EnvFilter::default()
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy()
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = rolling::daily(dir, LOG_FILE);
            let (file_writer, guard) = NonBlocking::new(file_appender);

            let file_filter = EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .from_env_lossy();

            let file_layer = Layer::default()
                .event_format(EventFormat::new(formatter, true))
                .with_writer(file_writer)
                .with_filter(file_filter);

            (Some(file_layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer.with_filter(console_filter))
        .with(file_layer)
        .init();

    guard
}

struct EventFormat<'f> {
    timer: UtcTime<&'f [FormatItem<'f>]>,
    with_location: bool,
}

impl<'f> EventFormat<'f> {
    fn new(formatter: &'f [FormatItem<'f>], with_location: bool) -> Self {
        Self {
            timer: UtcTime::new(formatter),
            with_location,
        }
    }
}

impl<S, N> FormatEvent<S, N> for EventFormat<'_>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> FmtResult {
        self.timer.format_time(&mut writer)?;
        let metadata = event.metadata();

        write!(writer, " {:>5} ", metadata.level())?;

        if self.with_location {
            write!(
                writer,
                "[{}:{}] ",
                metadata.file().unwrap_or_else(|| metadata.target()),
                metadata.line().unwrap_or(0),
            )?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
