use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
};

use tracing::Metadata;
use tracing_appender::rolling::{RollingFileAppender, daily};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        self, FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    prelude::*,
};

use crate::error::AppError;

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "gallery";
/// Filter directives are read from this variable, `info` when unset.
pub const LOG_ENV: &str = "GALLERY_LOG";

pub struct Logger;

impl Logger {
    /// Call **once** near the start of `main`.
    ///
    /// File only: the terminal belongs to the UI while it runs.
    pub fn init_tracing() -> Result<(), AppError> {
        let log_dir: &Path = Path::new(LOG_DIR);
        fs::create_dir_all(log_dir)?;

        // daily rolling file appender → logs/gallery.YYYY-MM-DD
        let file: RollingFileAppender = daily(LOG_DIR, LOG_FILE_PREFIX);

        let file_layer = fmt::layer()
            .event_format(SeqFileMod)
            .with_writer(file)
            .with_ansi(false)
            .with_filter(env_filter());

        tracing_subscriber::registry()
            .with(file_layer)
            .try_init()
            .map_err(|e| AppError::Logging(e.to_string()))
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

static SEQ: AtomicUsize = AtomicUsize::new(1);

/// Custom formatter: `[SEQ] HH:MM:SS.mmm LEVEL [file:line mod::path] message`
pub struct SeqFileMod;

impl<S, N> FormatEvent<S, N> for SeqFileMod
where
    S: tracing::Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut w: Writer<'_>,
        ev: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        // monotonically‑increasing sequence number
        let seq: usize = SEQ.fetch_add(1, Ordering::Relaxed);

        let meta: &'static Metadata<'static> = ev.metadata();
        write!(
            w,
            "{seq:06} {} {:5} [{}:{} {}] ",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.file().unwrap_or("??"),
            meta.line().unwrap_or(0),
            meta.module_path().unwrap_or("???"),
        )?;

        // span chain, outermost first
        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(w, "{}: ", span.name())?;
            }
        }

        ctx.field_format().format_fields(w.by_ref(), ev)?;
        writeln!(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn lines_carry_sequence_level_location_and_spans() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .event_format(SeqFileMod)
                .with_writer(move || writer.clone())
                .with_ansi(false),
        );

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("resolve_task");
            let _enter = span.enter();
            tracing::warn!("probe slow");
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains(" WARN "));
        assert!(out.contains("src/logging.rs:"));
        assert!(out.contains("resolve_task: "));
        assert!(out.trim_end().ends_with("probe slow"));
    }
}
