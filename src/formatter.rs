//! Log line formatter that stamps every event with the current frame number.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Frames presented since startup.
static FRAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Only the low 16 bits of the frame number are printed.
const FRAME_DISPLAY_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// `HH:MM:SS.mmm 0xFRAME LEVEL span:span: target: fields`
pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        write_dimmed(&mut writer, ansi, timestamp)?;
        writer.write_char(' ')?;

        write_dimmed(&mut writer, ansi, format_args!("0x{:04X}", frame_count() & FRAME_DISPLAY_MASK))?;
        writer.write_char(' ')?;

        write_level(&mut writer, ansi, meta.level())?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}:", span.metadata().name())?;
            }
            writer.write_char(' ')?;
        }

        write_dimmed(&mut writer, ansi, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;

        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn write_level(writer: &mut Writer<'_>, ansi: bool, level: &Level) -> fmt::Result {
    let (color, text) = match *level {
        Level::TRACE => ("\x1b[35m", "TRACE"),
        Level::DEBUG => ("\x1b[34m", "DEBUG"),
        Level::INFO => ("\x1b[32m", " INFO"),
        Level::WARN => ("\x1b[33m", " WARN"),
        Level::ERROR => ("\x1b[31m", "ERROR"),
    };

    if ansi {
        write!(writer, "{color}{text}\x1b[0m")
    } else {
        writer.write_str(text)
    }
}

fn write_dimmed(writer: &mut Writer<'_>, ansi: bool, value: impl fmt::Display) -> fmt::Result {
    if ansi {
        write!(writer, "\x1b[2m{value}\x1b[0m")
    } else {
        write!(writer, "{value}")
    }
}

/// Called once per frame by the application loop.
pub fn increment_frame() {
    FRAME_COUNTER.fetch_add(1, Ordering::Relaxed);
}

pub fn frame_count() -> u64 {
    FRAME_COUNTER.load(Ordering::Relaxed)
}
